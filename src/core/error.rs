//! Typed error handling for the menu service
//!
//! Every error carries enough information to produce a stable HTTP response:
//! a status code, a machine-readable error code and a human-readable message.
//! All errors are local to a single request; none are retried and none are
//! fatal to the process.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// The error type for all menu operations
#[derive(Debug, Error)]
pub enum MenuError {
    /// Request body could not be decoded into the expected shape
    #[error("malformed request body: {message}")]
    MalformedRequest { message: String },

    /// Decoded item failed a validation rule
    #[error("{message}")]
    InvalidInput { message: String },

    /// The `limit` query parameter is not a non-negative integer
    #[error("limit must be a non-negative integer (got '{raw}')")]
    InvalidLimit { raw: String },

    /// No item carries the requested order code
    #[error("no menu item with order code '{order_code}'")]
    NotFound { order_code: String },

    /// Should not happen in normal operation (e.g. poisoned lock)
    #[error("internal error: {0}")]
    Internal(String),
}

/// Error response body for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl MenuError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        MenuError::InvalidInput {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            MenuError::MalformedRequest { .. } => StatusCode::BAD_REQUEST,
            MenuError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            MenuError::InvalidLimit { .. } => StatusCode::BAD_REQUEST,
            MenuError::NotFound { .. } => StatusCode::NOT_FOUND,
            MenuError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            MenuError::MalformedRequest { .. } => "MALFORMED_REQUEST",
            MenuError::InvalidInput { .. } => "INVALID_INPUT",
            MenuError::InvalidLimit { .. } => "INVALID_LIMIT",
            MenuError::NotFound { .. } => "NOT_FOUND",
            MenuError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response body
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
        }
    }
}

impl IntoResponse for MenuError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

impl From<anyhow::Error> for MenuError {
    fn from(err: anyhow::Error) -> Self {
        MenuError::Internal(err.to_string())
    }
}

impl From<JsonRejection> for MenuError {
    fn from(rejection: JsonRejection) -> Self {
        MenuError::MalformedRequest {
            message: rejection.body_text(),
        }
    }
}
