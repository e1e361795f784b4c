//! Tool settings module
//!
//! Handles loading the tool's own settings from TOML files and environment variables.

pub mod loader;
pub mod types;

pub use loader::{load_settings, load_settings_from_str, validate_level};
pub use types::*;
