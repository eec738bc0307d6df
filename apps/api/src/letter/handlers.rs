use axum::{extract::State, Json};
use serde::Deserialize;

use crate::letter::{generate_cover_letter, CoverLetter};
use crate::models::job::JobDescription;
use crate::models::resume::Resume;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterRequest {
    pub resume: Resume,
    pub job_description: JobDescription,
}

/// POST /api/v1/cover-letters
/// Always answers with a letter: writer failures fall back to the template.
pub async fn handle_generate_cover_letter(
    State(state): State<AppState>,
    Json(req): Json<CoverLetterRequest>,
) -> Json<CoverLetter> {
    let letter =
        generate_cover_letter(state.writer.as_ref(), &req.resume, &req.job_description).await;
    Json(letter)
}
