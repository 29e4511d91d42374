//! Axum route handlers for the flow API. Pure pass-through: decode the JSON
//! body, call the flow façade, encode the JSON response. Error mapping lives
//! on `AppError`.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::flows::assessment::{generate_assessment, AssessmentInput, AssessmentOutput};
use crate::flows::chatbot::{chatbot_assistance, ChatbotInput, ChatbotOutput};
use crate::flows::custom_report::{generate_custom_report, CustomReportInput, CustomReportOutput};
use crate::flows::interview_questions::{
    generate_interview_questions, InterviewQuestionsInput, InterviewQuestionsOutput,
};
use crate::flows::job_description::{
    generate_job_description, JobDescriptionInput, JobDescriptionOutput,
};
use crate::flows::resume_parser::{parse_resume, ResumeParserInput, ResumeParserOutput};
use crate::state::AppState;

/// POST /api/v1/flows/generate-assessment
pub async fn handle_generate_assessment(
    State(state): State<AppState>,
    Json(input): Json<AssessmentInput>,
) -> Result<Json<AssessmentOutput>, AppError> {
    let output = generate_assessment(input, state.model.as_ref()).await?;
    Ok(Json(output))
}

/// POST /api/v1/flows/chatbot-assistance
pub async fn handle_chatbot_assistance(
    State(state): State<AppState>,
    Json(input): Json<ChatbotInput>,
) -> Result<Json<ChatbotOutput>, AppError> {
    let output = chatbot_assistance(input, state.model.as_ref()).await?;
    Ok(Json(output))
}

/// POST /api/v1/flows/generate-custom-report
pub async fn handle_generate_custom_report(
    State(state): State<AppState>,
    Json(input): Json<CustomReportInput>,
) -> Result<Json<CustomReportOutput>, AppError> {
    let output = generate_custom_report(input, state.model.as_ref()).await?;
    Ok(Json(output))
}

/// POST /api/v1/flows/generate-interview-questions
pub async fn handle_generate_interview_questions(
    State(state): State<AppState>,
    Json(input): Json<InterviewQuestionsInput>,
) -> Result<Json<InterviewQuestionsOutput>, AppError> {
    let output = generate_interview_questions(input, state.model.as_ref()).await?;
    Ok(Json(output))
}

/// POST /api/v1/flows/generate-job-description
pub async fn handle_generate_job_description(
    State(state): State<AppState>,
    Json(input): Json<JobDescriptionInput>,
) -> Result<Json<JobDescriptionOutput>, AppError> {
    let output = generate_job_description(input, state.model.as_ref()).await?;
    Ok(Json(output))
}

/// POST /api/v1/flows/parse-resume
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    Json(input): Json<ResumeParserInput>,
) -> Result<Json<ResumeParserOutput>, AppError> {
    let output = parse_resume(input, state.model.as_ref()).await?;
    Ok(Json(output))
}
