// pocketcalc shared type definitions
// Each submodule defines types used across the application.

pub mod conversion;
pub mod errors;
pub mod history;
pub mod settings;
pub mod tip;
