// Rust guideline compliant 2026-02-09

//! Response envelopes for JSON command output.

use crate::error::{AppError, ErrorCode};
use bizdir_core::Route;
use serde::Serialize;

/// Standard success envelope.
#[derive(Debug, Serialize)]
pub struct SuccessEnvelope<T> {
    /// Status indicator.
    pub status: &'static str,
    /// Path of the view the result belongs to, when it is a view.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    /// Result payload.
    pub result: T,
}

impl<T> SuccessEnvelope<T> {
    /// Creates a new success envelope.
    #[must_use]
    pub fn new(result: T) -> Self {
        Self {
            status: "ok",
            route: None,
            result,
        }
    }

    /// Creates a success envelope for a rendered view.
    #[must_use]
    pub fn for_route(route: &Route, result: T) -> Self {
        Self {
            status: "ok",
            route: Some(route.to_path()),
            result,
        }
    }
}

/// Standard error envelope.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    /// Stable error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// Optional structured details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorEnvelope {
    /// Creates a new error envelope from an application error.
    #[must_use]
    pub fn from_error(error: &AppError) -> Self {
        Self {
            code: error.code(),
            message: error.to_string(),
            details: error.details(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_envelope_serializes_path() {
        let envelope = SuccessEnvelope::for_route(&Route::Detail("a b".to_string()), 1);
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["route"], "/business/a%20b");
        assert_eq!(json["result"], 1);

        let plain = serde_json::to_value(SuccessEnvelope::new("done")).unwrap();
        assert!(plain.get("route").is_none());
    }

    #[test]
    fn test_error_envelope_uses_code() {
        let envelope = ErrorEnvelope::from_error(&AppError::AccessDenied);
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["code"], "access_denied");
        assert!(json.get("details").is_none());
    }
}
