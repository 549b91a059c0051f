//! Tracing subscriber setup for Roster binaries.

use tracing_subscriber::EnvFilter;

/// Installs a fmt subscriber filtered by `directive` (EnvFilter syntax).
///
/// `RosterConfig::from_lookup` already rejects a bad `ROSTER_LOG`; a directive
/// passed here directly that does not parse falls back to `info`. Safe to call
/// more than once; later calls leave the first subscriber in place.
pub fn init_tracing(directive: &str) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_harmless() {
        init_tracing("debug");
        init_tracing("not a [valid directive");
        tracing::info!("still logging");
    }
}
