//! # Service Error Type
//!
//! What callers of [`EmployeeService`](crate::EmployeeService) see.
//!
//! ## Error Sources
//! ```text
//! ValidationError (roster-core) ──────────────► ServiceError::Validation
//!
//! find_by_email → Some(_) ────────────────────► ServiceError::ResourceConflict
//!
//! DbError::UniqueViolation on email ──────────► ServiceError::ResourceConflict
//! (schema caught what the lookup missed)
//!
//! any other DbError ──────────────────────────► ServiceError::Storage
//! ```

use roster_core::ValidationError;
use roster_db::DbError;
use thiserror::Error;

/// Service-level errors.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// An employee with this email already exists. Nothing was written.
    #[error("Employee already exists with given email: {email}")]
    ResourceConflict { email: String },

    /// The record failed field validation. Nothing was written.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The store failed.
    #[error("Storage error: {0}")]
    Storage(DbError),
}

impl ServiceError {
    pub fn conflict(email: impl Into<String>) -> Self {
        ServiceError::ResourceConflict {
            email: email.into(),
        }
    }

    /// True for the duplicate-email error.
    pub fn is_conflict(&self) -> bool {
        matches!(self, ServiceError::ResourceConflict { .. })
    }
}

/// Store errors become conflicts when the email constraint fired.
impl From<DbError> for ServiceError {
    fn from(err: DbError) -> Self {
        if err.is_unique_violation_on("email") {
            if let DbError::UniqueViolation { value, .. } = err {
                return ServiceError::ResourceConflict { email: value };
            }
        }
        ServiceError::Storage(err)
    }
}

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_unique_violation_becomes_conflict() {
        let err: ServiceError = DbError::duplicate("employees.email", "bruno@bruno").into();

        assert!(err.is_conflict());
        assert_eq!(
            err.to_string(),
            "Employee already exists with given email: bruno@bruno"
        );
    }

    #[test]
    fn test_other_db_errors_are_storage() {
        let err: ServiceError = DbError::PoolExhausted.into();
        assert!(matches!(err, ServiceError::Storage(DbError::PoolExhausted)));

        let err: ServiceError = DbError::duplicate("employees.badge", "7").into();
        assert!(matches!(err, ServiceError::Storage(_)));
    }

    #[test]
    fn test_validation_is_transparent() {
        let err: ServiceError = ValidationError::Required {
            field: "email".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "email is required");
    }
}
