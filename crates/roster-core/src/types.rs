//! # Domain Types
//!
//! The single entity of Roster.
//!
//! ## Employee Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Employee                                        │
//! │                                                                         │
//! │   Employee::new(..)          save()              save()                 │
//! │   id: None        ─────────► id: Some(1) ──────► id: Some(1)            │
//! │   (not stored)     insert    (stored)    update  (same row)             │
//! │                                  │                                      │
//! │                                  │ delete_by_id(1)                      │
//! │                                  ▼                                      │
//! │                           find_by_id(1) → None                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! - `id`: assigned by the store on insert, never changed afterwards
//! - `email`: business key, unique per store

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Employee
// =============================================================================

/// An employee record.
///
/// Serialized with camelCase keys (`firstName`, `lastName`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Store-assigned identifier. `None` until the first save.
    pub id: Option<i64>,

    /// Given name.
    pub first_name: String,

    /// Family name.
    pub last_name: String,

    /// Contact email, unique across employees.
    pub email: String,
}

impl Employee {
    /// Creates an unsaved employee (no id yet).
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Employee {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }

    /// Returns a copy carrying the given id.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Returns a copy with surrounding whitespace removed from every field.
    ///
    /// Stored values are always trimmed, so `"bruno@bruno "` and
    /// `"bruno@bruno"` are the same email.
    pub fn trimmed(self) -> Self {
        Employee {
            id: self.id,
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
        }
    }

    /// "First Last", for logs and listings.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
