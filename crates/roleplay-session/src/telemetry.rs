//! Structured logging setup.

use crate::config::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber described by `config`.
///
/// An invalid filter falls back to `info`. Returns `false` when a global
/// subscriber was already installed, which leaves that subscriber in place.
pub fn init_tracing(config: &LoggingConfig) -> bool {
    let filter = EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"));

    let result = if config.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .try_init()
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).try_init()
    };

    if result.is_ok() {
        tracing::debug!(level = %config.level, json = config.json, "tracing initialized");
    }
    result.is_ok()
}
