//! Job description generation — drafts a posting for a company from a title,
//! responsibility list, and skill list.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::flows::prompts::{JOB_DESCRIPTION_SYSTEM, JOB_DESCRIPTION_TEMPLATE};
use crate::flows::{bullet_list, run_structured};
use crate::llm_client::{GenerativeModel, ModelRequest};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDescriptionInput {
    pub job_title: String,
    pub key_responsibilities: Vec<String>,
    pub required_skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDescriptionOutput {
    pub generated_description: String,
}

impl JobDescriptionInput {
    fn validate(&self) -> Result<(), AppError> {
        if self.job_title.trim().is_empty() {
            return Err(AppError::Validation("jobTitle cannot be empty".to_string()));
        }
        check_list("keyResponsibilities", &self.key_responsibilities)?;
        check_list("requiredSkills", &self.required_skills)?;
        Ok(())
    }
}

fn check_list(field: &str, items: &[String]) -> Result<(), AppError> {
    if items.is_empty() {
        return Err(AppError::Validation(format!(
            "{field} must contain at least one entry"
        )));
    }
    if items.iter().any(|item| item.trim().is_empty()) {
        return Err(AppError::Validation(format!(
            "{field} entries cannot be blank"
        )));
    }
    Ok(())
}

fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "generatedDescription": { "type": "STRING" }
        },
        "required": ["generatedDescription"]
    })
}

fn render_prompt(input: &JobDescriptionInput) -> String {
    JOB_DESCRIPTION_TEMPLATE
        .replace("{job_title}", &input.job_title)
        .replace(
            "{key_responsibilities}",
            &bullet_list(&input.key_responsibilities),
        )
        .replace("{required_skills}", &bullet_list(&input.required_skills))
}

/// Generates a job description from structured posting inputs.
pub async fn generate_job_description(
    input: JobDescriptionInput,
    model: &dyn GenerativeModel,
) -> Result<JobDescriptionOutput, AppError> {
    input.validate()?;

    let request = ModelRequest {
        system: JOB_DESCRIPTION_SYSTEM.to_string(),
        prompt: render_prompt(&input),
        media: None,
        response_schema: response_schema(),
    };

    run_structured(model, "job description generation", request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flows::testing::{EmptyModel, StubModel};
    use serde_json::json;

    fn input() -> JobDescriptionInput {
        JobDescriptionInput {
            job_title: "Logistics Coordinator".to_string(),
            key_responsibilities: vec![
                "Plan delivery routes".to_string(),
                "Track shipments".to_string(),
            ],
            required_skills: vec!["Excel".to_string(), "French fluency".to_string()],
        }
    }

    #[test]
    fn test_validate_rejects_empty_responsibilities() {
        let mut bad = input();
        bad.key_responsibilities.clear();
        let err = bad.validate().unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("keyResponsibilities")));
    }

    #[test]
    fn test_validate_rejects_blank_skill_entry() {
        let mut bad = input();
        bad.required_skills.push("  ".to_string());
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_render_prompt_one_bullet_per_list_item_in_order() {
        let prompt = render_prompt(&input());
        assert!(prompt.contains("Logistics Coordinator"));
        assert!(prompt.contains("- Plan delivery routes\n- Track shipments\n"));
        assert!(prompt.contains("- Excel\n- French fluency\n"));
    }

    #[tokio::test]
    async fn test_facade_returns_stubbed_description() {
        let stub = StubModel::returning(json!({
            "generatedDescription": "We are seeking a Logistics Coordinator..."
        }));
        let output = generate_job_description(input(), &stub).await.unwrap();
        assert!(output.generated_description.starts_with("We are seeking"));
    }

    #[tokio::test]
    async fn test_facade_fails_validation_before_any_call() {
        let stub = StubModel::returning(json!({ "generatedDescription": "" }));
        let mut bad = input();
        bad.required_skills.clear();
        let err = generate_job_description(bad, &stub).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn test_facade_fails_on_empty_model_output() {
        let err = generate_job_description(input(), &EmptyModel).await.unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
    }
}
