//! # roster-db: Database Layer for Roster
//!
//! This crate provides database access for Roster.
//! It uses SQLite for storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Roster Data Flow                               │
//! │                                                                         │
//! │  EmployeeService (roster-service)                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    roster-db (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories  │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │ (employee.rs)  │    │  (embedded)  │  │   │
//! │  │   │               │    │                │    │              │  │   │
//! │  │   │ SqlitePool    │◄───│ SqliteEmployee │    │ 001_create_  │  │   │
//! │  │   │ Connection    │    │ InMemory       │    │  employees   │  │   │
//! │  │   │ Management    │    │  (memory.rs)   │    │              │  │   │
//! │  │   └───────────────┘    └────────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite `employees` table                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - The `EmployeeRepository` trait and its implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use roster_db::{Database, DbConfig, EmployeeRepository};
//! use roster_core::Employee;
//!
//! let db = Database::new(DbConfig::new("path/to/roster.db")).await?;
//!
//! let saved = db.employees().save(Employee::new("Bruno", "Oliveira", "bruno@bruno")).await?;
//! let found = db.employees().find_by_email("bruno@bruno").await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::employee::{NameQuery, SqliteEmployeeRepository};
pub use repository::memory::InMemoryEmployeeRepository;
pub use repository::EmployeeRepository;
