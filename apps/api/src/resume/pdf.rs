//! PDF text extraction for résumé uploads.

use bytes::Bytes;
use tokio::task::JoinError;
use tracing::debug;

use crate::errors::AppError;

/// Extracts the text layer of a PDF and normalizes its line endings.
///
/// `pdf-extract` is synchronous and CPU-bound, so it runs on the blocking pool.
/// Scanned PDFs without a text layer come back as an empty string.
pub async fn extract_pdf_text(data: Bytes) -> Result<String, AppError> {
    let size = data.len();
    let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&data))
        .await
        .map_err(extraction_join_error)?
        .map_err(|e| AppError::UnprocessableEntity(format!("Could not read PDF: {e}")))?;

    debug!(bytes = size, chars = text.len(), "Extracted PDF text");
    Ok(normalize_line_endings(&text))
}

/// `pdf-extract` panics on some malformed files, which is the upload's fault.
/// A cancelled task is ours.
fn extraction_join_error(e: JoinError) -> AppError {
    if e.is_panic() {
        AppError::UnprocessableEntity("Could not read PDF: parser rejected the file".to_string())
    } else {
        AppError::Internal(anyhow::anyhow!("spawn_blocking failed in PDF extraction: {e}"))
    }
}

/// `\r\n` and lone `\r` become `\n`; form feeds between pages become blank lines.
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\u{c}', "\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_line_endings() {
        assert_eq!(normalize_line_endings("a\r\nb\rc\n"), "a\nb\nc\n");
        assert_eq!(normalize_line_endings("page one\u{c}page two"), "page one\n\npage two");
    }

    #[tokio::test]
    async fn test_garbage_bytes_are_unprocessable() {
        let result = extract_pdf_text(Bytes::from_static(b"definitely not a pdf")).await;
        assert!(matches!(result, Err(AppError::UnprocessableEntity(_))));
    }

    #[tokio::test]
    async fn test_parser_panic_is_unprocessable() {
        let err = tokio::task::spawn_blocking(|| panic!("bad xref table"))
            .await
            .unwrap_err();
        assert!(matches!(
            extraction_join_error(err),
            AppError::UnprocessableEntity(_)
        ));
    }

    #[tokio::test]
    async fn test_cancelled_extraction_is_internal() {
        let handle = tokio::spawn(std::future::pending::<()>());
        handle.abort();
        let err = handle.await.unwrap_err();
        assert!(err.is_cancelled());
        assert!(matches!(extraction_join_error(err), AppError::Internal(_)));
    }
}
