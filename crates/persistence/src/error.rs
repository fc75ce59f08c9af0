//! Error types for the persistence layer.
//!
//! Errors are grouped by where they come from: the caller's input, the
//! backend itself, or a CSV import. A missing record is not an error; lookups
//! return `Option`.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

/// The primary error type for all storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Input validation errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Backend-specific errors
    #[error(transparent)]
    Backend(#[from] BackendError),

    /// CSV import errors
    #[error(transparent)]
    Import(#[from] ImportError),
}

/// Errors raised for invalid caller input.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A criterion code outside `c1`..`c6` / `n7`..`n10`.
    #[error("unknown criterion: {code}")]
    UnknownCriterion { code: String },
}

/// Errors originating in a storage backend.
#[derive(Error, Debug)]
pub enum BackendError {
    /// The backend could not be reached.
    #[error("backend unavailable: {backend_name}: {message}")]
    Unavailable {
        backend_name: String,
        message: String,
    },

    /// Opening a connection failed.
    #[error("connection failed to {backend_name}: {message}")]
    ConnectionFailed {
        backend_name: String,
        message: String,
    },

    /// Creating or checking the schema failed.
    #[error("schema initialization failed: {message}")]
    SchemaError { message: String },

    /// Any other backend failure.
    #[error("internal error in {backend_name}: {message}")]
    Internal {
        backend_name: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Errors raised while reading a CSV export.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The header row lacks a required column.
    #[error("missing required column: {column}")]
    MissingColumn { column: String },

    /// A record could not be parsed.
    #[error("parse error at line {line}: {message}")]
    ParseError { line: u64, message: String },

    /// The input could not be read at all.
    #[error("unreadable input: {message}")]
    Unreadable { message: String },
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        match err.position() {
            Some(position) => ImportError::ParseError {
                line: position.line(),
                message: err.to_string(),
            },
            None => ImportError::Unreadable {
                message: err.to_string(),
            },
        }
    }
}

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(feature = "sqlite")]
impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        StorageError::Backend(BackendError::Internal {
            backend_name: "sqlite".to_string(),
            message: err.to_string(),
            source: Some(Box::new(err)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err: StorageError = ValidationError::UnknownCriterion {
            code: "x4".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "unknown criterion: x4");
    }

    #[test]
    fn test_backend_error_display() {
        let err = BackendError::ConnectionFailed {
            backend_name: "sqlite".to_string(),
            message: "timed out waiting for connection".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "connection failed to sqlite: timed out waiting for connection"
        );
    }

    #[test]
    fn test_import_error_display() {
        let err = ImportError::ParseError {
            line: 42,
            message: "invalid digit".to_string(),
        };
        assert!(err.to_string().contains("line 42"));

        let storage_err: StorageError = err.into();
        assert!(matches!(storage_err, StorageError::Import(_)));
    }

    #[cfg(feature = "sqlite")]
    #[test]
    fn test_from_rusqlite_error() {
        let err: StorageError = rusqlite::Error::InvalidQuery.into();
        assert!(matches!(
            err,
            StorageError::Backend(BackendError::Internal { .. })
        ));
    }
}
