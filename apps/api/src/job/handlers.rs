use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::job::{parse_job_description, JobOverrides};
use crate::models::job::JobDescription;
use crate::routes::require_text;

#[derive(Deserialize)]
pub struct ParseJobRequest {
    pub text: String,
    #[serde(flatten)]
    pub overrides: JobOverrides,
}

/// POST /api/v1/jobs/parse
pub async fn handle_parse_job(
    Json(req): Json<ParseJobRequest>,
) -> Result<Json<JobDescription>, AppError> {
    let text = require_text(&req.text, "text")?;
    Ok(Json(parse_job_description(text, req.overrides)))
}
