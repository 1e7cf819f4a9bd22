// Rust guideline compliant 2026-02-09

//! Error handling for bizdir application services.

use bizdir_core::route::Route;
use bizdir_core::Error as CoreError;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Stable error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The requested listing was not found.
    NotFound,
    /// The requested browse transition is not allowed.
    InvalidTransition,
    /// The navigation path matched no view.
    InvalidRoute,
    /// Listing data failed validation.
    ValidationError,
    /// Configuration file or environment override is invalid.
    ConfigError,
    /// IO failure while reading or writing directory data.
    IoError,
    /// JSON serialization or parsing failed.
    JsonError,
    /// The directory has not been initialized.
    DirectoryNotInitialized,
    /// The access gate has not been passed.
    AccessDenied,
    /// The passphrase did not match.
    IncorrectPassphrase,
    /// The request included invalid inputs.
    InvalidInput,
}

/// Application-level errors with stable mapping to error codes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Directory is missing or not initialized.
    #[error("Business directory not initialized at {path}. Run 'bizdir init' first.")]
    DirectoryNotInitialized {
        /// Path where `.bizdir` was expected.
        path: PathBuf,
    },

    /// The access gate is closed.
    #[error("Access required. Run 'bizdir unlock <PASSPHRASE>' first.")]
    AccessDenied,

    /// The passphrase did not match.
    #[error("Incorrect password. Please try again.")]
    IncorrectPassphrase,

    /// Invalid input was provided by the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Error from core library operations.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// IO error not represented by core errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::DirectoryNotInitialized { .. } => ErrorCode::DirectoryNotInitialized,
            AppError::AccessDenied => ErrorCode::AccessDenied,
            AppError::IncorrectPassphrase => ErrorCode::IncorrectPassphrase,
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::Io(_) => ErrorCode::IoError,
            AppError::Core(core) => match core {
                CoreError::NotFound(_) => ErrorCode::NotFound,
                CoreError::InvalidTransition(_) => ErrorCode::InvalidTransition,
                CoreError::InvalidRoute(_) => ErrorCode::InvalidRoute,
                CoreError::InvalidListing(_) => ErrorCode::ValidationError,
                CoreError::InvalidConfig(_) => ErrorCode::ConfigError,
                CoreError::Io(_) => ErrorCode::IoError,
                CoreError::Json(_) => ErrorCode::JsonError,
            },
        }
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::DirectoryNotInitialized { path } => Some(serde_json::json!({
                "path": path,
            })),
            AppError::Core(CoreError::NotFound(id)) => Some(serde_json::json!({
                "id": id,
                "route": Route::Directory.to_path(),
            })),
            AppError::Core(CoreError::InvalidRoute(path)) => Some(serde_json::json!({
                "path": path,
            })),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_follow_core_errors() {
        let err = AppError::from(CoreError::NotFound("x".to_string()));
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.details().unwrap()["route"], "/");

        let err = AppError::from(CoreError::InvalidConfig("bad".to_string()));
        assert_eq!(err.code(), ErrorCode::ConfigError);
        assert!(err.details().is_none());
    }

    #[test]
    fn test_not_initialized_message() {
        let err = AppError::DirectoryNotInitialized {
            path: PathBuf::from("/tmp/.bizdir"),
        };
        assert_eq!(err.code(), ErrorCode::DirectoryNotInitialized);
        assert!(err.to_string().contains("bizdir init"));
        assert_eq!(err.details().unwrap()["path"], "/tmp/.bizdir");
    }

    #[test]
    fn test_incorrect_passphrase_message() {
        let err = AppError::IncorrectPassphrase;
        assert_eq!(err.code(), ErrorCode::IncorrectPassphrase);
        assert_eq!(err.to_string(), "Incorrect password. Please try again.");
    }
}
