//! Custom report generation — admin dashboard flow turning a natural-language
//! request (optionally with a snapshot of platform data) into a prose report
//! and, when warranted, a visualization description.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::flows::prompts::{
    CUSTOM_REPORT_DATA_BLOCK, CUSTOM_REPORT_NO_DATA_BLOCK, CUSTOM_REPORT_SYSTEM,
    CUSTOM_REPORT_TEMPLATE,
};
use crate::flows::run_structured;
use crate::llm_client::{GenerativeModel, ModelRequest};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomReportInput {
    pub query: String,
    #[serde(default)]
    pub available_data: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomReportOutput {
    pub report: String,
    /// Compact JSON string describing a chart, present only when the model
    /// judged a visualization useful.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visualization_data: Option<String>,
}

impl CustomReportInput {
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
            "report": { "type": "STRING" },
            "visualizationData": { "type": "STRING" }
        },
        "required": ["report"]
    })
}

fn render_prompt(input: &CustomReportInput) -> String {
    let data_block = match &input.available_data {
        Some(data) if !data.trim().is_empty() => {
            CUSTOM_REPORT_DATA_BLOCK.replace("{available_data}", data)
        }
        _ => CUSTOM_REPORT_NO_DATA_BLOCK.to_string(),
    };

    CUSTOM_REPORT_TEMPLATE
        .replace("{query}", &input.query)
        .replace("{available_data_block}", &data_block)
}

/// Builds a custom admin report from a natural-language request.
pub async fn generate_custom_report(
    input: CustomReportInput,
    model: &dyn GenerativeModel,
) -> Result<CustomReportOutput, AppError> {
    input.validate()?;

    let request = ModelRequest {
        system: CUSTOM_REPORT_SYSTEM.to_string(),
        prompt: render_prompt(&input),
        media: None,
        response_schema: response_schema(),
    };

    run_structured(model, "custom report generation", request).await
}
