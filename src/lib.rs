//! pocketcalc — calculator core with memory, unit conversion, tip splitting
//! and a persisted, searchable history.
//!
//! This library crate exposes all modules for use by UI hosts and integration tests.

pub mod app;
pub mod config;
pub mod database;
pub mod logging;
pub mod managers;
pub mod platform;
pub mod rpc_handler;
pub mod services;
pub mod types;
