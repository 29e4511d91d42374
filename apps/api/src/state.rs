use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::GenerativeModel;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The structured-generation backend. Production: `GeminiClient`.
    /// Tests swap in a deterministic stub through the same trait object.
    pub model: Arc<dyn GenerativeModel>,
    /// Kept for handlers that need runtime settings (none yet beyond startup).
    #[allow(dead_code)]
    pub config: Config,
}
