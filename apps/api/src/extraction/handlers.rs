//! Axum route handlers for the extraction API.

use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::errors::AppError;
use crate::extraction::{organize, pdf};
use crate::state::AppState;
use crate::store::UpdateOutcome;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

const SUCCESS_MESSAGE: &str = "PDF processed and saved successfully";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractPdfResponse {
    pub message: String,
    pub organized_text: String,
}

/// Multipart fields as they arrive off the wire, before validation.
#[derive(Debug, Default)]
struct UploadFields {
    file: Option<Bytes>,
    user_id: Option<String>,
}

/// A validated upload: non-empty file bytes plus a non-empty userId.
struct UploadRequest {
    file: Bytes,
    user_id: String,
}

impl UploadFields {
    fn into_request(self) -> Result<UploadRequest, AppError> {
        match (self.file, self.user_id) {
            (Some(file), Some(user_id)) if !file.is_empty() && !user_id.is_empty() => {
                Ok(UploadRequest { file, user_id })
            }
            _ => Err(AppError::InvalidRequest),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/extract-pdf-text
///
/// Accepts a multipart form with a `file` PDF part and a `userId` field,
/// then runs the pipeline: extract text, organize it through the LLM,
/// confirm the user exists, write the organized text into their resume.
/// Each stage short-circuits with its own error status on failure.
/// A request that is not multipart at all gets the same 400 as missing
/// fields.
pub async fn handle_extract_pdf_text(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ExtractPdfResponse>, AppError> {
    let multipart = multipart.map_err(|_| AppError::InvalidRequest)?;
    let upload = read_upload(multipart).await?.into_request()?;

    let extracted_text = pdf::extract_pdf_text(upload.file).await?;
    debug!("Extracted PDF text: {extracted_text}");
    info!("Extracted {} characters from PDF", extracted_text.len());

    let organized_text = organize::organize_text(&state.llm, &extracted_text).await?;

    info!("Attempting to update resume for userId: {}", upload.user_id);
    if state.store.find_user(&upload.user_id).await?.is_none() {
        error!("User not found for userId: {}", upload.user_id);
        return Err(AppError::UserNotFound);
    }

    match state
        .store
        .update_resume(&upload.user_id, &organized_text)
        .await?
    {
        UpdateOutcome::Applied => {
            info!("Resume updated successfully for userId: {}", upload.user_id);
        }
        UpdateOutcome::NoMatch => {
            error!(
                "No user document matched the update for userId: {}",
                upload.user_id
            );
            return Err(AppError::UserNotFoundOnUpdate);
        }
        UpdateOutcome::Unmodified => {
            warn!(
                "User document found but resume not updated for userId: {}",
                upload.user_id
            );
            return Err(AppError::UpdateNotApplied);
        }
    }

    Ok(Json(ExtractPdfResponse {
        message: SUCCESS_MESSAGE.to_string(),
        organized_text,
    }))
}

/// Drains the multipart stream into `UploadFields`. Unknown fields are
/// ignored; transport errors while reading surface as internal errors.
async fn read_upload(mut multipart: Multipart) -> Result<UploadFields, AppError> {
    let mut fields = UploadFields::default();

    while let Some(field) = multipart.next_field().await.map_err(anyhow::Error::from)? {
        let field_name = field.name().unwrap_or("").to_string();
        match field_name.as_str() {
            "file" => {
                fields.file = Some(field.bytes().await.map_err(anyhow::Error::from)?);
            }
            "userId" => {
                fields.user_id = Some(field.text().await.map_err(anyhow::Error::from)?);
            }
            _ => {}
        }
    }

    Ok(fields)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
