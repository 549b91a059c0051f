//! Roster configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use roster_db::DbConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Roster configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterConfig {
    /// SQLite database file (`:memory:` for a throwaway database)
    pub database_path: PathBuf,

    /// Pool size upper bound
    pub max_connections: u32,

    /// Seconds to wait for a pooled connection
    pub connect_timeout_secs: u64,

    /// Apply embedded migrations on connect
    pub run_migrations: bool,

    /// `tracing-subscriber` EnvFilter directive, e.g. `info,roster_db=debug`
    pub log_filter: String,
}

impl Default for RosterConfig {
    fn default() -> Self {
        RosterConfig {
            database_path: PathBuf::from("./roster.db"),
            max_connections: 5,
            connect_timeout_secs: 30,
            run_migrations: true,
            log_filter: "info".to_string(),
        }
    }
}

impl RosterConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable                 | Default       |
    /// |--------------------------|---------------|
    /// | `ROSTER_DATABASE_PATH`   | `./roster.db` |
    /// | `ROSTER_MAX_CONNECTIONS` | `5`           |
    /// | `ROSTER_CONNECT_TIMEOUT_SECS` | `30`     |
    /// | `ROSTER_RUN_MIGRATIONS`  | `true`        |
    /// | `ROSTER_LOG`             | `info`        |
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup (tests pass a map).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = RosterConfig::default();

        let config = RosterConfig {
            database_path: lookup("ROSTER_DATABASE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.database_path),

            max_connections: parse_or(&lookup, "ROSTER_MAX_CONNECTIONS", defaults.max_connections)?,

            connect_timeout_secs: parse_or(
                &lookup,
                "ROSTER_CONNECT_TIMEOUT_SECS",
                defaults.connect_timeout_secs,
            )?,

            run_migrations: parse_or(&lookup, "ROSTER_RUN_MIGRATIONS", defaults.run_migrations)?,

            log_filter: lookup("ROSTER_LOG").unwrap_or(defaults.log_filter),
        };

        if config.max_connections == 0 {
            return Err(ConfigError::InvalidValue("ROSTER_MAX_CONNECTIONS".to_string()));
        }

        if config.connect_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue("ROSTER_CONNECT_TIMEOUT_SECS".to_string()));
        }

        if EnvFilter::try_new(&config.log_filter).is_err() {
            return Err(ConfigError::InvalidValue("ROSTER_LOG".to_string()));
        }

        Ok(config)
    }

    /// Database settings derived from this configuration.
    pub fn db_config(&self) -> DbConfig {
        let base = if self.database_path == PathBuf::from(":memory:") {
            DbConfig::in_memory()
        } else {
            DbConfig::new(&self.database_path)
                .max_connections(self.max_connections)
                .connect_timeout(Duration::from_secs(self.connect_timeout_secs))
        };
        base.run_migrations(self.run_migrations)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key.to_string())),
        None => Ok(default),
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
