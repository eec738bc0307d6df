use axum::{extract::Multipart, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::resume::Resume;
use crate::resume::parse_resume;
use crate::resume::pdf::extract_pdf_text;
use crate::routes::require_text;

/// Multipart field carrying the uploaded PDF.
const PDF_FIELD: &str = "file";

#[derive(Deserialize)]
pub struct ParseResumeRequest {
    pub text: String,
}

#[derive(Serialize)]
pub struct ParsePdfResponse {
    pub text: String,
    pub resume: Resume,
}

/// POST /api/v1/resumes/parse
pub async fn handle_parse_resume(
    Json(req): Json<ParseResumeRequest>,
) -> Result<Json<Resume>, AppError> {
    let text = require_text(&req.text, "text")?;
    Ok(Json(parse_resume(text)))
}

/// POST /api/v1/resumes/parse-pdf
pub async fn handle_parse_pdf(
    mut multipart: Multipart,
) -> Result<Json<ParsePdfResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some(PDF_FIELD) {
            continue;
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Could not read upload: {e}")))?;
        if data.is_empty() {
            return Err(AppError::Validation("Uploaded file is empty".to_string()));
        }

        let text = extract_pdf_text(data).await?;
        if text.trim().is_empty() {
            return Err(AppError::UnprocessableEntity(
                "PDF contains no extractable text".to_string(),
            ));
        }

        let resume = parse_resume(&text);
        return Ok(Json(ParsePdfResponse { text, resume }));
    }

    Err(AppError::Validation(format!(
        "Missing multipart field '{PDF_FIELD}'"
    )))
}
