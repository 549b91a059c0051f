//! # roster-service: Business Rules for Roster
//!
//! The service layer sits between callers and an [`EmployeeRepository`].
//! Its one rule: an employee can only be created if no stored employee
//! already has that email.
//!
//! ## Control Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  caller                                                                 │
//! │    │  save_employee(Bruno, bruno@bruno)                                 │
//! │    ▼                                                                    │
//! │  EmployeeService ── validate ── find_by_email ──┬── Some → Conflict     │
//! │    │                                            └── None → save         │
//! │    ▼                                                                    │
//! │  EmployeeRepository (SQLite or in-memory)                               │
//! │    ▼                                                                    │
//! │  employees table                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`service`] - `EmployeeService`
//! - [`error`] - `ServiceError`
//! - [`config`] - `RosterConfig` from environment variables
//! - [`telemetry`] - tracing subscriber setup for binaries
//!
//! ## Usage
//!
//! ```rust,ignore
//! use roster_service::{EmployeeService, RosterConfig};
//! use roster_db::Database;
//!
//! let config = RosterConfig::load()?;
//! let db = Database::new(config.db_config()).await?;
//! let service = EmployeeService::new(db.employees());
//!
//! let saved = service.save_employee(Employee::new("Bruno", "Oliveira", "bruno@bruno")).await?;
//! ```
//!
//! [`EmployeeRepository`]: roster_db::EmployeeRepository

pub mod config;
pub mod error;
pub mod service;
pub mod telemetry;

pub use config::{ConfigError, RosterConfig};
pub use error::{ServiceError, ServiceResult};
pub use service::EmployeeService;
