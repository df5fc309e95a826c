//! Unit tests for configuration resolved from the process environment.
//!
//! Kept in its own test binary: it mutates `POCKETCALC_*` variables, which
//! would race with other tests reading the environment.

use std::path::PathBuf;

use pocketcalc::app::App;
use pocketcalc::config::{AppConfig, DATABASE_FILE, DATA_DIR_ENV, DEFAULT_LOG_FILTER, LOG_ENV};
use pocketcalc::managers::history_manager::HistoryManagerTrait;
use tempfile::TempDir;

#[tokio::test]
async fn test_from_env_reads_and_falls_back() {
    let tmp = TempDir::new().unwrap();
    let data_dir = tmp.path().join("state");

    std::env::set_var(DATA_DIR_ENV, &data_dir);
    std::env::set_var(LOG_ENV, "pocketcalc=debug");
    let config = AppConfig::from_env();
    assert_eq!(config.data_dir, data_dir);
    assert_eq!(config.log_filter, "pocketcalc=debug");
    assert_eq!(config.database_path(), data_dir.join(DATABASE_FILE));

    let mut app = App::new(&config).unwrap();
    app.startup().await;
    assert!(app.history_manager.is_loaded());
    assert!(config.database_path().exists());

    std::env::set_var(LOG_ENV, "   ");
    std::env::remove_var(DATA_DIR_ENV);
    let config = AppConfig::from_env();
    assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    assert_eq!(config.data_dir, AppConfig::default().data_dir);
    assert_ne!(config.data_dir, PathBuf::from(&data_dir));

    std::env::remove_var(LOG_ENV);
}
