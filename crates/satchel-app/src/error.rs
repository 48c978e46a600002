// Rust guideline compliant 2026-10-18

//! Error handling for Satchel application services.

use satchel_core::Error as CoreError;
use serde::Serialize;
use thiserror::Error;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Stable error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The inventory has no free slot.
    CapacityExceeded,
    /// No item with the requested name.
    NotFound,
    /// The inventory is not in the state the command requires.
    PreconditionFailed,
    /// Unrecognized sort criterion.
    InvalidCriterion,
    /// Item validation failed.
    ValidationError,
    /// The request included invalid inputs.
    InvalidInput,
    /// Invalid configuration.
    ConfigError,
    /// IO failure while reading input or configuration.
    IoError,
}

/// Application-level errors with stable mapping to error codes.
#[derive(Debug, Error)]
pub enum AppError {
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
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::Io(_) => ErrorCode::IoError,
            AppError::Core(core) => match core {
                CoreError::CapacityExceeded { .. } => ErrorCode::CapacityExceeded,
                CoreError::NotFound(_) => ErrorCode::NotFound,
                CoreError::PreconditionFailed(_) => ErrorCode::PreconditionFailed,
                CoreError::InvalidCriterion(_) => ErrorCode::InvalidCriterion,
                CoreError::InvalidItem(_) => ErrorCode::ValidationError,
                CoreError::Config(_) => ErrorCode::ConfigError,
                CoreError::Io(_) => ErrorCode::IoError,
            },
        }
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::Core(CoreError::CapacityExceeded { capacity }) => Some(serde_json::json!({
                "capacity": capacity,
            })),
            AppError::Core(CoreError::NotFound(name)) => Some(serde_json::json!({
                "name": name,
            })),
            AppError::Core(CoreError::InvalidCriterion(value)) => Some(serde_json::json!({
                "value": value,
                "accepted": ["1", "2", "3", "name", "category", "priority"],
            })),
            _ => None,
        }
    }

    /// Returns true if the error reports a missing item or unmet state, not bad input.
    #[must_use]
    pub fn is_informational(&self) -> bool {
        matches!(
            self.code(),
            ErrorCode::NotFound | ErrorCode::PreconditionFailed | ErrorCode::CapacityExceeded
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_map_to_codes() {
        let cases = [
            (CoreError::CapacityExceeded { capacity: 10 }, ErrorCode::CapacityExceeded),
            (CoreError::NotFound("Axe".to_string()), ErrorCode::NotFound),
            (
                CoreError::PreconditionFailed("sort first".to_string()),
                ErrorCode::PreconditionFailed,
            ),
            (CoreError::InvalidCriterion("9".to_string()), ErrorCode::InvalidCriterion),
            (CoreError::InvalidItem("bad".to_string()), ErrorCode::ValidationError),
        ];

        for (core, expected) in cases {
            assert_eq!(AppError::from(core).code(), expected);
        }
    }

    #[test]
    fn test_invalid_input_code() {
        let error = AppError::InvalidInput("quantity must be a number".to_string());
        assert_eq!(error.code(), ErrorCode::InvalidInput);
        assert!(error.details().is_none());
        assert!(!error.is_informational());
    }

    #[test]
    fn test_capacity_details() {
        let error = AppError::from(CoreError::CapacityExceeded { capacity: 10 });
        let details = error.details().unwrap();
        assert_eq!(details["capacity"], 10);
        assert!(error.is_informational());
    }

    #[test]
    fn test_error_code_serializes_snake_case() {
        let json = serde_json::to_string(&ErrorCode::PreconditionFailed).unwrap();
        assert_eq!(json, "\"precondition_failed\"");
    }
}
