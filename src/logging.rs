//! Logging setup for hosts embedding pocketcalc.

use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::types::errors::ConfigError;

/// Installs a global `fmt` subscriber filtered by `config.log_filter`.
///
/// Fails if the filter does not parse or a subscriber is already installed.
pub fn init(config: &AppConfig) -> Result<(), ConfigError> {
    let filter = EnvFilter::try_new(&config.log_filter)
        .map_err(|e| ConfigError::InvalidLogFilter(e.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| ConfigError::LoggingInitialized(e.to_string()))
}
