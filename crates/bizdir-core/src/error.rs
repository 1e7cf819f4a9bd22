// Rust guideline compliant 2026-02-06

//! Error types for the bizdir core library.

use thiserror::Error;

/// Result type alias for bizdir operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for bizdir operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid listing data.
    #[error("Invalid listing: {0}")]
    InvalidListing(String),

    /// Listing not found.
    #[error("Listing not found: {0}")]
    NotFound(String),

    /// Invalid browse state transition.
    #[error("Invalid state transition: {0}")]
    InvalidTransition(String),

    /// Navigation path did not match any view.
    #[error("Invalid route: {0}")]
    InvalidRoute(String),

    /// Configuration file or environment override is invalid.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
