use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every failure maps to a JSON body of the form `{"error": <string>}`; the
/// HTTP status carries the classification, the body stays a flat message.
#[derive(Debug, Error)]
pub enum AppError {
    /// Multipart request is missing the file part or the userId field.
    #[error("File and userId are required")]
    InvalidRequest,

    /// The PDF extractor failed or produced no text.
    #[error("Failed to extract text from PDF")]
    ExtractionFailed,

    /// The organizer call failed or returned no content.
    #[error("Failed to organize text")]
    OrganizationFailed,

    /// No user record matched the supplied userId.
    #[error("User not found")]
    UserNotFound,

    /// The record vanished between the existence check and the update.
    #[error("Failed to update resume, user not found")]
    UserNotFoundOnUpdate,

    /// The store matched the record but reported zero modified documents.
    #[error("Resume was not updated")]
    UpdateNotApplied,

    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest => StatusCode::BAD_REQUEST,
            AppError::UserNotFound | AppError::UserNotFoundOnUpdate => StatusCode::NOT_FOUND,
            AppError::ExtractionFailed
            | AppError::OrganizationFailed
            | AppError::UpdateNotApplied
            | AppError::Database(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match &self {
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                e.to_string()
            }
            AppError::Internal(e) => {
                tracing::error!("Error processing PDF: {e:?}");
                e.to_string()
            }
            other => other.to_string(),
        };

        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}
