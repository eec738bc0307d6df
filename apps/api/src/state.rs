use std::sync::Arc;

use crate::letter::writer::CoverLetterWriter;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Cover letter backend. Chosen at startup from `COVER_LETTER_MODE`.
    pub writer: Arc<dyn CoverLetterWriter>,
}
