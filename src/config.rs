//! Application configuration resolved from the environment.
//!
//! - `POCKETCALC_DATA_DIR`: directory holding the preference database
//!   (defaults to the platform data directory).
//! - `POCKETCALC_LOG`: `tracing` filter directive (defaults to `info`).

use std::path::PathBuf;

use crate::platform;
use crate::types::errors::ConfigError;

pub const DATA_DIR_ENV: &str = "POCKETCALC_DATA_DIR";
pub const LOG_ENV: &str = "POCKETCALC_LOG";
pub const DATABASE_FILE: &str = "pocketcalc.db";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub log_filter: String,
    /// Initial theme when no preference has been saved.
    pub system_prefers_dark: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: platform::get_data_dir(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            system_prefers_dark: false,
        }
    }
}

impl AppConfig {
    /// Defaults overridden by `POCKETCALC_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(dir) = lookup(DATA_DIR_ENV).filter(|v| !v.trim().is_empty()) {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(filter) = lookup(LOG_ENV).filter(|v| !v.trim().is_empty()) {
            config.log_filter = filter;
        }
        config
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(DATABASE_FILE)
    }

    /// Creates the data directory if needed.
    pub fn ensure_data_dir(&self) -> Result<(), ConfigError> {
        std::fs::create_dir_all(&self.data_dir)?;
        Ok(())
    }
}
