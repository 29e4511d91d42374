//! Assessment generation — builds a two-part pre-employment assessment
//! (basic fit + cognitive aptitude) for a company's job opening.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::flows::prompts::{ASSESSMENT_SYSTEM, ASSESSMENT_TEMPLATE};
use crate::flows::run_structured;
use crate::llm_client::{GenerativeModel, ModelRequest};

pub const MIN_QUESTIONS_PER_SECTION: u32 = 1;
pub const MAX_QUESTIONS_PER_SECTION: u32 = 20;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentInput {
    pub job_description: String,
    pub company_values: String,
    pub basic_fit_questions: u32,
    pub cognitive_aptitude_questions: u32,
}

/// The two question sets, in the order they should be administered.
/// Array lengths match the requested counts — that is the contract with the
/// model, carried by the response schema and the prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentOutput {
    pub basic_fit_assessment: Vec<String>,
    pub cognitive_aptitude_assessment: Vec<String>,
}

impl AssessmentInput {
    fn validate(&self) -> Result<(), AppError> {
        if self.job_description.trim().is_empty() {
            return Err(AppError::Validation(
                "jobDescription cannot be empty".to_string(),
            ));
        }
        if self.company_values.trim().is_empty() {
            return Err(AppError::Validation(
                "companyValues cannot be empty".to_string(),
            ));
        }
        check_count("basicFitQuestions", self.basic_fit_questions)?;
        check_count("cognitiveAptitudeQuestions", self.cognitive_aptitude_questions)?;
        Ok(())
    }
}

fn check_count(field: &str, count: u32) -> Result<(), AppError> {
    if !(MIN_QUESTIONS_PER_SECTION..=MAX_QUESTIONS_PER_SECTION).contains(&count) {
        return Err(AppError::Validation(format!(
            "{field} must be between {MIN_QUESTIONS_PER_SECTION} and {MAX_QUESTIONS_PER_SECTION}, got {count}"
        )));
    }
    Ok(())
}

fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "basicFitAssessment": { "type": "ARRAY", "items": { "type": "STRING" } },
            "cognitiveAptitudeAssessment": { "type": "ARRAY", "items": { "type": "STRING" } }
        },
        "required": ["basicFitAssessment", "cognitiveAptitudeAssessment"]
    })
}

fn render_prompt(input: &AssessmentInput) -> String {
    ASSESSMENT_TEMPLATE
        .replace("{job_description}", &input.job_description)
        .replace("{company_values}", &input.company_values)
        .replace(
            "{basic_fit_questions}",
            &input.basic_fit_questions.to_string(),
        )
        .replace(
            "{cognitive_aptitude_questions}",
            &input.cognitive_aptitude_questions.to_string(),
        )
}

/// Generates a pre-employment assessment for a job opening.
pub async fn generate_assessment(
    input: AssessmentInput,
    model: &dyn GenerativeModel,
) -> Result<AssessmentOutput, AppError> {
    input.validate()?;

    let request = ModelRequest {
        system: ASSESSMENT_SYSTEM.to_string(),
        prompt: render_prompt(&input),
        media: None,
        response_schema: response_schema(),
    };

    run_structured(model, "assessment generation", request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flows::testing::{EmptyModel, StubModel};
    use serde_json::json;

    fn input(basic_fit: u32, cognitive: u32) -> AssessmentInput {
        AssessmentInput {
            job_description: "Junior accountant handling invoicing and monthly closes".to_string(),
            company_values: "Integrity, mentorship, community impact".to_string(),
            basic_fit_questions: basic_fit,
            cognitive_aptitude_questions: cognitive,
        }
    }

    #[test]
    fn test_validate_rejects_zero_count_in_either_section() {
        assert!(input(0, 2).validate().is_err());
        assert!(input(3, 0).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_count_above_twenty() {
        let err = input(3, 21).validate().unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("cognitiveAptitudeQuestions")));
    }

    #[test]
    fn test_validate_rejects_blank_job_description() {
        let mut bad = input(3, 2);
        bad.job_description = " ".to_string();
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_render_prompt_contains_fields_verbatim() {
        let prompt = render_prompt(&input(3, 2));
        assert!(prompt.contains("Junior accountant handling invoicing and monthly closes"));
        assert!(prompt.contains("Integrity, mentorship, community impact"));
        assert!(prompt.contains("exactly 3 questions"));
        assert!(prompt.contains("exactly 2 questions"));
    }

    #[tokio::test]
    async fn test_facade_yields_requested_section_lengths() {
        let stub = StubModel::returning(json!({
            "basicFitAssessment": [
                "Which of our values resonates most with you?",
                "Why this role over a larger firm?",
                "Describe a time you put a team first."
            ],
            "cognitiveAptitudeAssessment": [
                "An invoice total is off by 3%. Walk through finding the error.",
                "Two ledgers disagree. Which do you trust, and why?"
            ]
        }));

        let output = generate_assessment(input(3, 2), &stub).await.unwrap();
        assert_eq!(output.basic_fit_assessment.len(), 3);
        assert_eq!(output.cognitive_aptitude_assessment.len(), 2);
    }

    #[tokio::test]
    async fn test_facade_fails_validation_before_any_call() {
        let stub = StubModel::returning(json!({
            "basicFitAssessment": [],
            "cognitiveAptitudeAssessment": []
        }));
        let err = generate_assessment(input(21, 2), &stub).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn test_facade_fails_on_empty_model_output() {
        let err = generate_assessment(input(3, 2), &EmptyModel).await.unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
    }

    #[tokio::test]
    async fn test_facade_fails_when_a_section_is_missing() {
        let stub = StubModel::returning(json!({
            "basicFitAssessment": ["only one section"]
        }));
        let err = generate_assessment(input(1, 1), &stub).await.unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
    }
}
