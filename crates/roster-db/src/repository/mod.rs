//! # Repository Module
//!
//! Data access for Roster.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  EmployeeService                                                       │
//! │       │                                                                 │
//! │       │  repo.find_by_email("bruno@bruno")                             │
//! │       ▼                                                                 │
//! │  EmployeeRepository (trait)                                            │
//! │  ├── save / find_all / find_by_id / delete_by_id                       │
//! │  ├── find_by_email / find_by_name                                      │
//! │  └── count                                                             │
//! │       │                                                                 │
//! │       ├──────────────────────────┐                                      │
//! │       ▼                          ▼                                      │
//! │  SqliteEmployeeRepository   InMemoryEmployeeRepository                 │
//! │  (employees table)          (BTreeMap, for tests)                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`SqliteEmployeeRepository`](employee::SqliteEmployeeRepository) - SQLite-backed store
//! - [`InMemoryEmployeeRepository`](memory::InMemoryEmployeeRepository) - store stand-in

use async_trait::async_trait;
use roster_core::Employee;

use crate::error::DbResult;

pub mod employee;
pub mod memory;

/// Typed data access for employees.
///
/// Lookups that find nothing return `Ok(None)`, never an error.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Inserts when `employee.id` is `None`, otherwise updates the row with
    /// that id. Returns the persisted record with its id populated.
    ///
    /// ## Errors
    /// * `DbError::UniqueViolation` - email already stored on another row
    /// * `DbError::NotFound` - update of an id with no row
    async fn save(&self, employee: Employee) -> DbResult<Employee>;

    /// Every employee, in id order.
    async fn find_all(&self) -> DbResult<Vec<Employee>>;

    async fn find_by_id(&self, id: i64) -> DbResult<Option<Employee>>;

    /// Removes the employee. Deleting an absent id is a no-op.
    async fn delete_by_id(&self, id: i64) -> DbResult<()>;

    async fn find_by_email(&self, email: &str) -> DbResult<Option<Employee>>;

    /// The employee whose first and last name both match exactly.
    /// When several match, the lowest id wins.
    async fn find_by_name(&self, first_name: &str, last_name: &str)
        -> DbResult<Option<Employee>>;

    /// Number of stored employees.
    async fn count(&self) -> DbResult<i64>;
}
