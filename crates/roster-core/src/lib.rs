//! # roster-core: Employee Domain for Roster
//!
//! This crate holds the `Employee` entity and the input rules every layer
//! agrees on. It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Roster Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 roster-service (Business Rules)                 │   │
//! │  │    save_employee, get_all_employees, update_employee, ...      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    roster-db (Repository)                       │   │
//! │  │          SQLite queries, migrations, EmployeeRepository         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ uses                                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ roster-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │        ┌────────────┐        ┌────────────┐                     │   │
//! │  │        │   types    │        │ validation │                     │   │
//! │  │        │  Employee  │        │   rules    │                     │   │
//! │  │        └────────────┘        └────────────┘                     │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - The `Employee` entity
//! - [`error`] - Validation error types
//! - [`validation`] - Field rules (names, email)
//!
//! ## Example Usage
//!
//! ```rust
//! use roster_core::{validation::validate_employee, Employee};
//!
//! let employee = Employee::new("Bruno", "Oliveira", "bruno@bruno");
//! assert!(employee.id.is_none());
//! assert!(validate_employee(&employee).is_ok());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a first or last name, in characters.
///
/// ## Business Reason
/// Long enough for any real name, short enough to keep list views sane.
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum length of an email address (RFC 5321 path limit).
pub const MAX_EMAIL_LENGTH: usize = 254;
