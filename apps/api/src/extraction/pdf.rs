//! PDF text extraction.
//!
//! `pdf-extract` does the parsing. The call is CPU-bound and the library
//! can panic on malformed input, so it runs on the blocking thread pool
//! and a panicked task surfaces as a failed extraction.

use bytes::Bytes;
use tracing::error;

use crate::errors::AppError;

/// Extracts plain text from in-memory PDF bytes.
///
/// Fails with `ExtractionFailed` when the parser errors, panics, or the
/// document yields nothing but whitespace.
pub async fn extract_pdf_text(file: Bytes) -> Result<String, AppError> {
    let extracted = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&file))
        .await
        .map_err(|e| {
            error!("PDF extraction task panicked: {e}");
            AppError::ExtractionFailed
        })?
        .map_err(|e| {
            error!("PDF extraction failed: {e}");
            AppError::ExtractionFailed
        })?;

    if extracted.trim().is_empty() {
        error!("No text extracted from PDF");
        return Err(AppError::ExtractionFailed);
    }

    Ok(extracted)
}
