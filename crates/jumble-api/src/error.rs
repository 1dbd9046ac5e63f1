//! Error handling for the Jumble API
//!
//! Malformed input never reaches this module: bad parameters fall back to
//! defaults. What remains are unknown routes and the rare failure of the
//! blocking task that runs generation.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;
use tracing::{debug, error};

use crate::types::ErrorResponse;

/// API error type with automatic HTTP status code mapping
#[derive(Error, Debug)]
pub enum ApiError {
    /// No route for this path and method (404 Not Found)
    #[error("Resource not found: {path}")]
    NotFound { path: String },

    /// Generation task failed (500 Internal Server Error)
    #[error("Internal server error: {message}")]
    Internal { message: String },
}

impl ApiError {
    /// Get the appropriate HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Body sent to the client: the status reason phrase only, never internals
    pub fn to_response_body(&self) -> ErrorResponse {
        let status = self.status_code();
        ErrorResponse { error: status.canonical_reason().unwrap_or("Error").to_string() }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::NotFound { path } => debug!(%path, "No route matched"),
            ApiError::Internal { message } => error!(%message, "Request failed"),
        }
        (self.status_code(), Json(self.to_response_body())).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
