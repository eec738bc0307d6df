//! Cover letter generation with a deterministic fallback.

pub mod handlers;
pub mod prompts;
pub mod template;
pub mod writer;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::letter::writer::{CoverLetterWriter, LetterSource, TemplateCoverLetterWriter};
use crate::models::job::JobDescription;
use crate::models::resume::Resume;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetter {
    pub cover_letter: String,
    pub source: LetterSource,
}

/// Runs `writer`; any failure falls back to the template letter.
pub async fn generate_cover_letter(
    writer: &dyn CoverLetterWriter,
    resume: &Resume,
    job: &JobDescription,
) -> CoverLetter {
    match writer.write(resume, job).await {
        Ok(cover_letter) => {
            info!(source = ?writer.source(), company = %job.company, "Generated cover letter");
            CoverLetter {
                cover_letter,
                source: writer.source(),
            }
        }
        Err(e) => {
            warn!(
                source = ?writer.source(),
                "Cover letter writer failed, using template: {e}"
            );
            let today = chrono::Local::now().date_naive();
            CoverLetter {
                cover_letter: template::render_template(resume, job, today),
                source: TemplateCoverLetterWriter.source(),
            }
        }
    }
}
