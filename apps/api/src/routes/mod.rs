pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::flows::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Flow API — one POST route per flow façade
        .route(
            "/api/v1/flows/generate-assessment",
            post(handlers::handle_generate_assessment),
        )
        .route(
            "/api/v1/flows/chatbot-assistance",
            post(handlers::handle_chatbot_assistance),
        )
        .route(
            "/api/v1/flows/generate-custom-report",
            post(handlers::handle_generate_custom_report),
        )
        .route(
            "/api/v1/flows/generate-interview-questions",
            post(handlers::handle_generate_interview_questions),
        )
        .route(
            "/api/v1/flows/generate-job-description",
            post(handlers::handle_generate_job_description),
        )
        .route(
            "/api/v1/flows/parse-resume",
            post(handlers::handle_parse_resume),
        )
        .with_state(state)
}
