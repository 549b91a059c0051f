//! # Seed Data Generator
//!
//! Populates the database with demo employees for development.
//!
//! ## Usage
//! ```bash
//! # Generate 50 employees (default) into $ROSTER_DATABASE_PATH or ./roster.db
//! cargo run -p roster-service --bin seed
//!
//! # Generate custom amount
//! cargo run -p roster-service --bin seed -- --count 200
//!
//! # Specify database path
//! cargo run -p roster-service --bin seed -- --db ./data/roster.db
//! ```
//!
//! Every employee goes through `EmployeeService::save_employee`, so running
//! the seed twice skips the emails already present instead of failing.

use std::env;
use std::path::PathBuf;

use roster_core::Employee;
use roster_db::{Database, EmployeeRepository};
use roster_service::telemetry::init_tracing;
use roster_service::{EmployeeService, RosterConfig, ServiceError};
use tracing::{error, info};

const FIRST_NAMES: &[&str] = &[
    "Bruno", "Lucas", "Ana", "Beatriz", "Carlos", "Daniela", "Eduardo", "Fernanda", "Gabriel",
    "Helena",
];

const LAST_NAMES: &[&str] = &[
    "Oliveira", "Martins", "Silva", "Souza", "Costa", "Pereira", "Almeida", "Ferreira",
];

const DEFAULT_COUNT: usize = 50;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = RosterConfig::load()?;
    let mut count = DEFAULT_COUNT;

    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(DEFAULT_COUNT);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    config.database_path = PathBuf::from(&args[i + 1]);
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Roster Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of employees to generate (default: {})", DEFAULT_COUNT);
                println!("  -d, --db <PATH>    Database file path (default: $ROSTER_DATABASE_PATH or ./roster.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    init_tracing(&config.log_filter);

    info!(
        database = %config.database_path.display(),
        count,
        "Seeding employees"
    );

    let db = Database::new(config.db_config()).await?;
    let service = EmployeeService::new(db.employees());

    let mut created = 0;
    let mut skipped = 0;
    let start = std::time::Instant::now();

    for seed in 0..count {
        match service.save_employee(demo_employee(seed)).await {
            Ok(_) => created += 1,
            Err(ServiceError::ResourceConflict { .. }) => skipped += 1,
            Err(e) => {
                error!(seed, error = %e, "Failed to seed employee");
            }
        }
    }

    let total = service.repository().count().await?;
    info!(
        created,
        skipped,
        total,
        elapsed = ?start.elapsed(),
        "Seed complete"
    );

    let sample = service.repository().find_by_name("Bruno", "Oliveira").await?;
    if let Some(employee) = sample {
        info!(id = ?employee.id, email = %employee.email, "Lookup by name works");
    }

    db.close().await;
    Ok(())
}

/// Deterministic demo employee; `seed` also makes the email unique.
fn demo_employee(seed: usize) -> Employee {
    let first = FIRST_NAMES[seed % FIRST_NAMES.len()];
    let last = LAST_NAMES[(seed / FIRST_NAMES.len()) % LAST_NAMES.len()];
    let email = format!(
        "{}.{}.{}@roster.dev",
        first.to_lowercase(),
        last.to_lowercase(),
        seed
    );

    Employee::new(first, last, email)
}
