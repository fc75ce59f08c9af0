//! Error types for the World Heritage Sites API.
//!
//! Every error leaves the server as a JSON body of the form
//! `{"status": 404, "error": "not-found", "detail": "..."}` with the matching
//! HTTP status code.
//!
//! # Error Mapping
//!
//! | Source | HTTP Status | Error Code |
//! |--------|-------------|------------|
//! | No site for the requested ID | 404 | not-found |
//! | ValidationError | 400 | bad-request |
//! | ImportError | 500 | internal-error |
//! | BackendError | 500 | internal-error |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use heritage_persistence::error::{BackendError, ImportError, StorageError, ValidationError};
use std::fmt;
use tracing::error;

/// The primary error type for REST API operations.
#[derive(Debug)]
pub enum RestError {
    /// Record not found (HTTP 404).
    NotFound {
        /// The kind of record (e.g., "Site").
        resource: String,
        /// The requested identifier.
        id: String,
    },

    /// Bad request (HTTP 400).
    BadRequest {
        /// Error message.
        message: String,
    },

    /// Internal server error (HTTP 500).
    InternalError {
        /// Error message.
        message: String,
    },
}

impl RestError {
    /// Shorthand for a missing site.
    pub fn site_not_found(id_no: i64) -> Self {
        RestError::NotFound {
            resource: "Site".to_string(),
            id: id_no.to_string(),
        }
    }

    /// Returns the HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::NotFound { .. } => StatusCode::NOT_FOUND,
            RestError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            RestError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::NotFound { resource, id } => {
                write!(f, "{} with ID {} not found", resource, id)
            }
            RestError::BadRequest { message } => {
                write!(f, "Bad request: {}", message)
            }
            RestError::InternalError { message } => {
                write!(f, "Internal error: {}", message)
            }
        }
    }
}

impl std::error::Error for RestError {}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let (code, detail) = match &self {
            RestError::NotFound { resource, id } => (
                "not-found",
                format!("{} with ID {} not found", resource, id),
            ),
            RestError::BadRequest { message } => ("bad-request", message.clone()),
            RestError::InternalError { message } => {
                error!(error = %message, "Request failed");
                ("internal-error", message.clone())
            }
        };

        let body = create_error_body(status, code, &detail);
        (status, Json(body)).into_response()
    }
}

/// Creates the JSON error body.
///
/// # Arguments
///
/// * `status` - The HTTP status
/// * `code` - A short machine-readable error code
/// * `detail` - Human-readable details
fn create_error_body(status: StatusCode, code: &str, detail: &str) -> serde_json::Value {
    serde_json::json!({
        "status": status.as_u16(),
        "error": code,
        "detail": detail
    })
}

// Implement conversions from storage errors

impl From<StorageError> for RestError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Validation(e) => e.into(),
            StorageError::Backend(e) => e.into(),
            StorageError::Import(e) => e.into(),
        }
    }
}

impl From<ValidationError> for RestError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::UnknownCriterion { code } => RestError::BadRequest {
                message: format!(
                    "Unknown criterion '{}': expected one of c1-c6 or n7-n10",
                    code
                ),
            },
        }
    }
}

impl From<ImportError> for RestError {
    fn from(err: ImportError) -> Self {
        RestError::InternalError {
            message: format!("Error processing file: {}", err),
        }
    }
}

impl From<BackendError> for RestError {
    fn from(err: BackendError) -> Self {
        RestError::InternalError {
            message: err.to_string(),
        }
    }
}

/// Result type alias for REST operations.
pub type RestResult<T> = Result<T, RestError>;
