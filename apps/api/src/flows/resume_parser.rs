//! Resume parsing — extracts structured candidate data from an uploaded
//! resume. The resume arrives as a `data:` URI; its decoded payload travels
//! to the model as an inline media part alongside the extraction prompt.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::flows::prompts::{RESUME_PARSER_PROMPT, RESUME_PARSER_SYSTEM};
use crate::flows::run_structured;
use crate::llm_client::{GenerativeModel, InlineMedia, ModelRequest};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeParserInput {
    /// `data:<mime>;base64,<payload>` — produced by the upload UI.
    pub resume_data_uri: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeParserOutput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub experience: Vec<String>,
    pub education: Vec<String>,
    pub skills: Vec<String>,
}

/// A validated `data:` URI split into its mime type and base64 payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri {
    pub mime_type: String,
    pub data: String,
}

/// Parses a base64 `data:` URI. Rejects anything without the `data:` prefix,
/// the `;base64,` marker, a mime type, or a payload.
pub fn parse_data_uri(uri: &str) -> Result<DataUri, AppError> {
    let rest = uri.strip_prefix("data:").ok_or_else(|| {
        AppError::Validation("resumeDataUri must start with 'data:'".to_string())
    })?;

    let (mime_type, data) = rest.split_once(";base64,").ok_or_else(|| {
        AppError::Validation(
            "resumeDataUri must be base64-encoded ('data:<mime>;base64,<data>')".to_string(),
        )
    })?;

    if mime_type.is_empty() {
        return Err(AppError::Validation(
            "resumeDataUri is missing a mime type".to_string(),
        ));
    }
    if data.is_empty() {
        return Err(AppError::Validation(
            "resumeDataUri has an empty payload".to_string(),
        ));
    }

    Ok(DataUri {
        mime_type: mime_type.to_string(),
        data: data.to_string(),
    })
}

fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "name": { "type": "STRING" },
            "email": { "type": "STRING" },
            "phone": { "type": "STRING" },
            "experience": { "type": "ARRAY", "items": { "type": "STRING" } },
            "education": { "type": "ARRAY", "items": { "type": "STRING" } },
            "skills": { "type": "ARRAY", "items": { "type": "STRING" } }
        },
        "required": ["name", "email", "phone", "experience", "education", "skills"]
    })
}

/// Parses a resume into structured candidate fields. The data URI is
/// validated and decoded before any network call.
pub async fn parse_resume(
    input: ResumeParserInput,
    model: &dyn GenerativeModel,
) -> Result<ResumeParserOutput, AppError> {
    let data_uri = parse_data_uri(&input.resume_data_uri)?;

    let request = ModelRequest {
        system: RESUME_PARSER_SYSTEM.to_string(),
        prompt: RESUME_PARSER_PROMPT.to_string(),
        media: Some(InlineMedia {
            mime_type: data_uri.mime_type,
            data: data_uri.data,
        }),
        response_schema: response_schema(),
    };

    run_structured(model, "resume parsing", request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flows::testing::{EmptyModel, StubModel};
    use serde_json::json;

    const PDF_URI: &str = "data:application/pdf;base64,JVBERi0xLjQ=";

    fn input(uri: &str) -> ResumeParserInput {
        ResumeParserInput {
            resume_data_uri: uri.to_string(),
        }
    }

    #[test]
    fn test_parse_data_uri_splits_mime_and_payload() {
        let parsed = parse_data_uri(PDF_URI).unwrap();
        assert_eq!(parsed.mime_type, "application/pdf");
        assert_eq!(parsed.data, "JVBERi0xLjQ=");
    }

    #[test]
    fn test_parse_data_uri_rejects_missing_prefix() {
        let err = parse_data_uri("application/pdf;base64,AAAA").unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("data:")));
    }

    #[test]
    fn test_parse_data_uri_rejects_non_base64_encoding() {
        assert!(parse_data_uri("data:text/plain,hello").is_err());
    }

    #[test]
    fn test_parse_data_uri_rejects_empty_mime() {
        assert!(parse_data_uri("data:;base64,AAAA").is_err());
    }

    #[test]
    fn test_parse_data_uri_rejects_empty_payload() {
        assert!(parse_data_uri("data:application/pdf;base64,").is_err());
    }

    #[tokio::test]
    async fn test_facade_sends_inline_media() {
        let stub = StubModel::returning(json!({
            "name": "Awa Koné",
            "email": "awa@example.ci",
            "phone": "+225 07 00 00 00",
            "experience": ["Intern, Abidjan Port Authority (2023)"],
            "education": ["BSc Logistics, INP-HB (2023)"],
            "skills": ["Excel", "French", "English"]
        }));

        let output = parse_resume(input(PDF_URI), &stub).await.unwrap();
        assert_eq!(output.name, "Awa Koné");
        assert_eq!(output.skills.len(), 3);

        let request = stub.last_request().unwrap();
        let media = request.media.unwrap();
        assert_eq!(media.mime_type, "application/pdf");
        assert_eq!(media.data, "JVBERi0xLjQ=");
    }

    #[tokio::test]
    async fn test_facade_rejects_malformed_uri_before_any_call() {
        let stub = StubModel::returning(json!({}));
        let err = parse_resume(input("not-a-data-uri"), &stub).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn test_facade_fails_on_empty_model_output() {
        let err = parse_resume(input(PDF_URI), &EmptyModel).await.unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
    }

    #[tokio::test]
    async fn test_facade_fails_on_partial_record() {
        // Missing required fields must not deserialize into a partial output.
        let stub = StubModel::returning(json!({ "name": "Awa Koné" }));
        let err = parse_resume(input(PDF_URI), &stub).await.unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
    }
}
