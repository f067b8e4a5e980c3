//! API error types with JSON responses.
//!
//! Every failure is rendered as `{"error": "...", "code": "..."}`:
//! 400 for malformed input, 404 for a missing note, 409 for a duplicate
//! name, 413 for an oversized body and 500 for anything that went wrong
//! in storage. Extractor rejections are converted here too, so clients
//! never see axum's plain-text rejection bodies.

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        rejection::{FormRejection, PathRejection, StringRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use notes_store::StoreError;
use serde::Serialize;

/// Message returned to clients for every storage fault.
pub const INTERNAL_STORAGE_ERROR: &str = "internal storage error";

/// API error that can be returned from handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Bad request (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Payload too large (413).
    #[error("payload too large: {0}")]
    PayloadTooLarge(String),

    /// Store error.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    /// Build an error from an extractor rejection's status and message.
    fn from_rejection(status: StatusCode, message: String) -> Self {
        if status == StatusCode::PAYLOAD_TOO_LARGE {
            Self::PayloadTooLarge(message)
        } else {
            Self::BadRequest(message)
        }
    }

    /// Get the error code string for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::PayloadTooLarge(_) => "PAYLOAD_TOO_LARGE",
            Self::Store(StoreError::NoteNotFound(_)) => "NOT_FOUND",
            Self::Store(StoreError::DuplicateNote(_)) => "CONFLICT",
            Self::Store(_) => "STORAGE_ERROR",
        }
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Store(StoreError::NoteNotFound(_)) => StatusCode::NOT_FOUND,
            Self::Store(StoreError::DuplicateNote(_)) => StatusCode::CONFLICT,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message. Storage detail stays in the logs.
    fn public_message(&self) -> String {
        match self {
            Self::BadRequest(msg) | Self::PayloadTooLarge(msg) => msg.clone(),
            Self::Store(StoreError::NoteNotFound(name)) => format!("note not found: {name}"),
            Self::Store(StoreError::DuplicateNote(name)) => {
                format!("note already exists: {name}")
            }
            Self::Store(_) => INTERNAL_STORAGE_ERROR.to_string(),
        }
    }
}

macro_rules! impl_from_rejection {
    ($($rejection:ty),+ $(,)?) => {
        $(
            impl From<$rejection> for ApiError {
                fn from(rejection: $rejection) -> Self {
                    Self::from_rejection(rejection.status(), rejection.body_text())
                }
            }
        )+
    };
}

impl_from_rejection!(
    PathRejection,
    StringRejection,
    FormRejection,
    MultipartRejection,
    MultipartError,
);

/// JSON error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
    /// Error code (e.g., "NOT_FOUND", "CONFLICT").
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");
        }

        let body = ErrorResponse {
            error: self.public_message(),
            code: self.code().to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;
