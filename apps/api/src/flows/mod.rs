// AI Flows — the schema-validated operations Yahnu exposes to its web UI.
// Each flow: validate input → render prompt (pure) → structured generation →
// deserialize the output record. All model calls go through llm_client —
// no direct HTTP calls here.

pub mod assessment;
pub mod chatbot;
pub mod custom_report;
pub mod handlers;
pub mod interview_questions;
pub mod job_description;
pub mod prompts;
pub mod resume_parser;

use serde::de::DeserializeOwned;

use crate::errors::AppError;
use crate::llm_client::{GenerativeModel, ModelRequest};

/// Renders list items as bullet lines, one per element, in input order.
pub(crate) fn bullet_list(items: &[String]) -> String {
    let mut out = String::new();
    for item in items {
        out.push_str("- ");
        out.push_str(item);
        out.push('\n');
    }
    out
}

/// Runs a structured-generation request and deserializes the output record.
/// A model response that does not match the declared output shape is an
/// invocation failure, never a partial result.
pub(crate) async fn run_structured<T: DeserializeOwned>(
    model: &dyn GenerativeModel,
    flow: &str,
    request: ModelRequest,
) -> Result<T, AppError> {
    let value = model
        .generate(request)
        .await
        .map_err(|e| AppError::Llm(format!("{flow} failed: {e}")))?;

    serde_json::from_value(value)
        .map_err(|e| AppError::Llm(format!("{flow} returned an unexpected shape: {e}")))
}

#[cfg(test)]
pub(crate) mod testing {
    //! Deterministic `GenerativeModel` stubs for façade tests.

    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::Value;

    use crate::llm_client::{GenerativeModel, LlmError, ModelRequest};

    /// Returns a fixed value and records every request it receives.
    pub struct StubModel {
        response: Value,
        calls: AtomicUsize,
        last_request: Mutex<Option<ModelRequest>>,
    }

    impl StubModel {
        pub fn returning(response: Value) -> Self {
            Self {
                response,
                calls: AtomicUsize::new(0),
                last_request: Mutex::new(None),
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        pub fn last_request(&self) -> Option<ModelRequest> {
            self.last_request.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl GenerativeModel for StubModel {
        async fn generate(&self, request: ModelRequest) -> Result<Value, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_request.lock().unwrap() = Some(request);
            Ok(self.response.clone())
        }
    }

    /// Simulates a model that yields no structured output.
    pub struct EmptyModel;

    #[async_trait]
    impl GenerativeModel for EmptyModel {
        async fn generate(&self, _request: ModelRequest) -> Result<Value, LlmError> {
            Err(LlmError::EmptyOutput)
        }
    }
}
