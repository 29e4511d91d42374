//! Interview question generation — career-coach flow for graduates preparing
//! to interview for a specific role.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::flows::prompts::{INTERVIEW_QUESTIONS_SYSTEM, INTERVIEW_QUESTIONS_TEMPLATE};
use crate::flows::run_structured;
use crate::llm_client::{GenerativeModel, ModelRequest};

pub const MIN_QUESTION_COUNT: u32 = 1;
pub const MAX_QUESTION_COUNT: u32 = 20;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewQuestionsInput {
    pub job_title: String,
    pub question_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewQuestionsOutput {
    pub questions: Vec<String>,
}

impl InterviewQuestionsInput {
    fn validate(&self) -> Result<(), AppError> {
        if self.job_title.trim().is_empty() {
            return Err(AppError::Validation("jobTitle cannot be empty".to_string()));
        }
        if !(MIN_QUESTION_COUNT..=MAX_QUESTION_COUNT).contains(&self.question_count) {
            return Err(AppError::Validation(format!(
                "questionCount must be between {MIN_QUESTION_COUNT} and {MAX_QUESTION_COUNT}, got {}",
                self.question_count
            )));
        }
        Ok(())
    }
}

/// Response schema sent to the model alongside the prompt.
fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "questions": { "type": "ARRAY", "items": { "type": "STRING" } }
        },
        "required": ["questions"]
    })
}

/// Pure prompt rendering — same input, same text.
fn render_prompt(input: &InterviewQuestionsInput) -> String {
    INTERVIEW_QUESTIONS_TEMPLATE
        .replace("{job_title}", &input.job_title)
        .replace("{question_count}", &input.question_count.to_string())
}

/// Generates interview questions for a job title. Fails on invalid input
/// before any network call, and on absent model output.
pub async fn generate_interview_questions(
    input: InterviewQuestionsInput,
    model: &dyn GenerativeModel,
) -> Result<InterviewQuestionsOutput, AppError> {
    input.validate()?;

    let request = ModelRequest {
        system: INTERVIEW_QUESTIONS_SYSTEM.to_string(),
        prompt: render_prompt(&input),
        media: None,
        response_schema: response_schema(),
    };

    run_structured(model, "interview question generation", request).await
}
