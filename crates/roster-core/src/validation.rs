//! # Validation Module
//!
//! Input validation for employee records.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: roster-service                                               │
//! │  ├── THIS MODULE: field rules (names, email shape)                     │
//! │  └── Email uniqueness lookup before insert                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  └── UNIQUE (email)                                                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use roster_core::validation::{validate_email, validate_name};
//!
//! validate_name("first_name", "Bruno").unwrap();
//! validate_email("bruno@bruno").unwrap();
//! ```

use crate::error::ValidationError;
use crate::types::Employee;
use crate::{MAX_EMAIL_LENGTH, MAX_NAME_LENGTH};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a first or last name.
///
/// ## Rules
/// - Must not be empty or whitespace
/// - No leading or trailing whitespace (see `Employee::trimmed`)
/// - At most `MAX_NAME_LENGTH` characters
pub fn validate_name(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.trim() != value {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must not start or end with whitespace".to_string(),
        });
    }

    if value.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(())
}

/// Validates an email address.
///
/// ## Rules
/// - Must not be empty
/// - At most `MAX_EMAIL_LENGTH` characters
/// - Exactly one `@`, with a non-empty local part and domain
/// - No whitespace anywhere, padding included
///
/// The domain is not required to contain a dot: `bruno@bruno` is accepted.
///
/// ## Example
/// ```rust
/// use roster_core::validation::validate_email;
///
/// assert!(validate_email("bruno@bruno").is_ok());
/// assert!(validate_email("martins@martins.com").is_ok());
/// assert!(validate_email("no-at-sign").is_err());
/// assert!(validate_email("@bruno").is_err());
/// ```
pub fn validate_email(email: &str) -> ValidationResult<()> {
    if email.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }

    if email.len() > MAX_EMAIL_LENGTH {
        return Err(ValidationError::TooLong {
            field: "email".to_string(),
            max: MAX_EMAIL_LENGTH,
        });
    }

    if email.chars().any(char::is_whitespace) {
        return Err(invalid_email("must not contain whitespace"));
    }

    let (local, domain) = email
        .split_once('@')
        .ok_or_else(|| invalid_email("missing '@'"))?;

    if local.is_empty() || domain.is_empty() {
        return Err(invalid_email("local part and domain must not be empty"));
    }

    if domain.contains('@') {
        return Err(invalid_email("must contain exactly one '@'"));
    }

    Ok(())
}

fn invalid_email(reason: &str) -> ValidationError {
    ValidationError::InvalidFormat {
        field: "email".to_string(),
        reason: reason.to_string(),
    }
}

// =============================================================================
// Record Validator
// =============================================================================

/// Validates every field of an employee, stopping at the first failure.
pub fn validate_employee(employee: &Employee) -> ValidationResult<()> {
    validate_name("first_name", &employee.first_name)?;
    validate_name("last_name", &employee.last_name)?;
    validate_email(&employee.email)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
