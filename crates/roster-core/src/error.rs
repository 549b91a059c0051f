//! # Error Types
//!
//! Domain-specific error types for roster-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  roster-core errors (this file)                                        │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  roster-db errors (separate crate)                                     │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  roster-service errors                                                 │
//! │  └── ServiceError     - ResourceConflict + wrapped errors above        │
//! │                                                                         │
//! │  Flow: ValidationError / DbError → ServiceError → caller               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Input validation errors.
///
/// These errors occur when an employee record doesn't meet field rules.
/// Checked before anything is sent to the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g., email without a domain).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "first_name".to_string(),
        };
        assert_eq!(err.to_string(), "first_name is required");

        let err = ValidationError::TooLong {
            field: "email".to_string(),
            max: 254,
        };
        assert_eq!(err.to_string(), "email must be at most 254 characters");

        let err = ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "missing '@'".to_string(),
        };
        assert_eq!(err.to_string(), "email has invalid format: missing '@'");
    }
}
