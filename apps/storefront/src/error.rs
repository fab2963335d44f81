//! # API Error Type
//!
//! Unified error type for shell commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Shell                              │
//! │                                                                         │
//! │  stdin line ──► serde_json ──► Command ──► handler ──► CartStore        │
//! │                     │                         │            │            │
//! │                     ▼                         ▼            ▼            │
//! │             MALFORMED_COMMAND        VALIDATION_ERROR   NOT_FOUND       │
//! │                     │                         │            │            │
//! │                     └─────────────┬───────────┴────────────┘            │
//! │                                   ▼                                     │
//! │                 {"error": {"code": "...", "message": "..."}}            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A failed command never changes state. The event loop writes the error and
//! reads the next line.

use serde::Serialize;
use storefront_core::{CoreError, ValidationError};

/// Error returned from shell commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Line item not found: 3"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// A cart row (or other resource) does not exist
    NotFound,

    /// Input validation failed
    ValidationError,

    /// The input line is not a valid command
    MalformedCommand,

    /// Internal error (output could not be produced)
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::LineItemNotFound(id) => ApiError::not_found("Line item", &id.to_string()),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

/// Undecodable command lines.
impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::new(ErrorCode::MalformedCommand, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_mapping() {
        let err = ApiError::from(CoreError::LineItemNotFound(3));
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Line item not found: 3");

        let err = ApiError::from(CoreError::Validation(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        }));
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_wire_shape() {
        let json = serde_json::to_value(ApiError::validation("bad")).unwrap();
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["message"], "bad");
    }
}
