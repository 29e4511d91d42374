//! Chatbot assistance — answers visitor questions about the Yahnu platform.
//! Stateless: any transcript a chat UI shows is its own concern; each call
//! here is a single question and a single answer.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::flows::prompts::{CHATBOT_SYSTEM, CHATBOT_TEMPLATE};
use crate::flows::run_structured;
use crate::llm_client::{GenerativeModel, ModelRequest};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatbotInput {
    pub query: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatbotOutput {
    pub response: String,
}

impl ChatbotInput {
    fn validate(&self) -> Result<(), AppError> {
        if self.query.trim().is_empty() {
            return Err(AppError::Validation("query cannot be empty".to_string()));
        }
        Ok(())
    }
}

fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "response": { "type": "STRING" }
        },
        "required": ["response"]
    })
}

fn render_prompt(input: &ChatbotInput) -> String {
    CHATBOT_TEMPLATE.replace("{query}", &input.query)
}

/// Answers a single visitor question.
pub async fn chatbot_assistance(
    input: ChatbotInput,
    model: &dyn GenerativeModel,
) -> Result<ChatbotOutput, AppError> {
    input.validate()?;

    let request = ModelRequest {
        system: CHATBOT_SYSTEM.to_string(),
        prompt: render_prompt(&input),
        media: None,
        response_schema: response_schema(),
    };

    run_structured(model, "chatbot assistance", request).await
}
