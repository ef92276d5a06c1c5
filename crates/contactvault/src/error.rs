//! Error types for contactvault.
//!
//! This module defines all error types used throughout the contactvault
//! crate. Every failure here is recoverable by the caller: validation and
//! the synthetic service failure allow resubmission, and storage failures
//! degrade the process to in-memory operation rather than aborting it.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for contactvault operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Storage Errors ===
    /// Failed to open or create the database.
    #[error("failed to open database at {path}: {source}")]
    DatabaseOpen {
        /// Path to the database file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: rusqlite::Error,
    },

    /// A database query failed.
    #[error("database query failed: {0}")]
    DatabaseQuery(#[from] rusqlite::Error),

    /// Failed to run database migrations.
    #[error("database migration failed: {message}")]
    DatabaseMigration {
        /// Description of what went wrong.
        message: String,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Submission Errors ===
    /// A submission failed one or more validation rules.
    ///
    /// Carries every rule violation, in rule order, as display text.
    #[error("invalid submission: {}", .0.join(". "))]
    Validation(Vec<String>),

    /// The simulated backend rejected the operation.
    ///
    /// No storage mutation happens on this path; resubmitting is safe.
    #[error("server error occurred, please try again")]
    ServiceUnavailable,

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for contactvault operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a validation error from collected rule violations.
    #[must_use]
    pub fn validation(errors: Vec<String>) -> Self {
        Self::Validation(errors)
    }

    /// Check if this error is a submission validation failure.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error is the synthetic service failure.
    #[must_use]
    pub fn is_service_unavailable(&self) -> bool {
        matches!(self, Self::ServiceUnavailable)
    }

    /// Check if this error came from the persistence layer.
    ///
    /// Callers use this to fall back to in-memory operation with a
    /// warning instead of treating the failure as fatal.
    #[must_use]
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            Self::DatabaseOpen { .. } | Self::DatabaseQuery(_) | Self::DatabaseMigration { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::ServiceUnavailable;
        assert_eq!(err.to_string(), "server error occurred, please try again");
    }

    #[test]
    fn test_validation_error_joins_messages() {
        let err = Error::validation(vec![
            "First name is required".to_string(),
            "Email is required".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "invalid submission: First name is required. Email is required"
        );
    }

    #[test]
    fn test_error_is_validation() {
        assert!(Error::validation(vec!["x".to_string()]).is_validation());
        assert!(!Error::ServiceUnavailable.is_validation());
    }

    #[test]
    fn test_error_is_service_unavailable() {
        assert!(Error::ServiceUnavailable.is_service_unavailable());
        assert!(!Error::validation(vec![]).is_service_unavailable());
    }

    #[test]
    fn test_error_is_storage() {
        let result = rusqlite::Connection::open_with_flags(
            "/nonexistent/path/db.sqlite",
            rusqlite::OpenFlags::SQLITE_OPEN_READ_ONLY,
        );
        if let Err(sqlite_err) = result {
            let err: Error = sqlite_err.into();
            assert!(err.is_storage());
        }

        let err = Error::DatabaseMigration {
            message: "version mismatch".to_string(),
        };
        assert!(err.is_storage());
        assert!(!Error::ServiceUnavailable.is_storage());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_from_json_error() {
        let json_result: std::result::Result<i32, serde_json::Error> =
            serde_json::from_str("not valid json");
        if let Err(json_err) = json_result {
            let err: Error = json_err.into();
            assert!(matches!(err, Error::Json(_)));
        }
    }

    #[test]
    fn test_database_open_error_display() {
        let result = rusqlite::Connection::open_with_flags(
            "/nonexistent/path/db.sqlite",
            rusqlite::OpenFlags::SQLITE_OPEN_READ_ONLY,
        );
        if let Err(sqlite_err) = result {
            let err = Error::DatabaseOpen {
                path: PathBuf::from("/nonexistent/path/db.sqlite"),
                source: sqlite_err,
            };
            assert!(err.to_string().contains("/nonexistent/path/db.sqlite"));
        }
    }

    #[test]
    fn test_directory_create_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = Error::DirectoryCreate {
            path: PathBuf::from("/root/forbidden"),
            source: io_err,
        };
        assert!(err.to_string().contains("/root/forbidden"));
    }

    #[test]
    fn test_config_validation_error_display() {
        let err = Error::ConfigValidation {
            message: "failure_probability out of range".to_string(),
        };
        assert!(err.to_string().contains("failure_probability"));
    }
}
