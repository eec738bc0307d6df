pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::job::handlers as job_handlers;
use crate::letter::handlers as letter_handlers;
use crate::resume::handlers as resume_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Résumé API
        .route(
            "/api/v1/resumes/parse",
            post(resume_handlers::handle_parse_resume),
        )
        .route(
            "/api/v1/resumes/parse-pdf",
            post(resume_handlers::handle_parse_pdf),
        )
        // Job API
        .route("/api/v1/jobs/parse", post(job_handlers::handle_parse_job))
        // Cover letter API
        .route(
            "/api/v1/cover-letters",
            post(letter_handlers::handle_generate_cover_letter),
        )
        .with_state(state)
}

/// Rejects requests that carry no usable text.
pub fn require_text<'a>(text: &'a str, field: &str) -> Result<&'a str, AppError> {
    if text.trim().is_empty() {
        return Err(AppError::Validation(format!("'{field}' must not be empty")));
    }
    Ok(text)
}
