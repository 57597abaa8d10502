//! Logging setup
//!
//! Installs a `tracing` subscriber driven by [`LoggingConfig`]. `RUST_LOG`
//! overrides the configured level when set.

use crate::config::LoggingConfig;
use crate::utils::error::{AccessError, Result};
use tracing_subscriber::EnvFilter;

/// Build the level filter for `config`
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(config.level.trim().to_ascii_lowercase())
        .map_err(|e| AccessError::config(format!("Invalid log level '{}': {}", config.level, e)))
}

/// Install the global subscriber; fails if one is already installed
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = env_filter(config)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| AccessError::config(format!("Failed to initialize logging: {}", e)))
}
