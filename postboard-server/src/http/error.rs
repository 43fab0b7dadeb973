//! API error types with IntoResponse
//!
//! Errors are converted to fail envelopes with appropriate status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::db::DbError;
use crate::models::Envelope;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Malformed request body (400)
    BadRequest { message: String },

    /// Store call failed (500, logged)
    Storage { action: &'static str, source: DbError },
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// Wrap a store error with the operation that failed.
    pub fn storage(action: &'static str) -> impl FnOnce(DbError) -> Self {
        move |source| Self::Storage { action, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let envelope = match self {
            Self::BadRequest { message } => Envelope::fail(message),
            Self::Storage { action, source } => {
                // Log the actual error, return generic message
                tracing::error!(error = %source, "{} failed", action);
                Envelope::fail(format!("failed to {}", action))
            }
        };

        (status, Json(envelope)).into_response()
    }
}
