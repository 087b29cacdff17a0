//! HTTP error handling and response types.
//!
//! Every error leaves the service as `{"error": "<message>"}` with the
//! status code determined by the error kind. Repository errors carry the
//! one non-trivial mapping: a uniqueness conflict on `roll` becomes a
//! domain-level 400 instead of a raw 500.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::db::repository::RepositoryError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable error message
    pub error: String,
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Invalid request (missing field, bad id, roll conflict)
    BadRequest(String),
    /// Resource not found
    NotFound(String),
    /// Internal server error (store fault or other failure)
    Internal(String),
}

impl AppError {
    fn status_and_message(self) -> (StatusCode, String) {
        match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => AppError::NotFound("Student not found".to_string()),
            RepositoryError::Conflict => {
                AppError::BadRequest("Roll number already exists".to_string())
            }
            // Internal faults surface the driver's message text unscrubbed,
            // matching the original service's behavior.
            RepositoryError::Store(msg) => AppError::Internal(msg),
        }
    }
}
