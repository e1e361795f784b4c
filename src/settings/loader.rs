//! Settings loader with layered sources
//!
//! Loads settings from multiple sources with the following precedence
//! (highest to lowest):
//! 1. Environment variables (SITECRAWL__*)
//! 2. Settings file (TOML)
//! 3. Default values

use crate::error::SettingsError;
use crate::settings::types::Settings;
use config::{Config, Environment, File, FileFormat};
use std::path::Path;

/// Default settings file paths to check (in order)
const DEFAULT_SETTINGS_PATHS: &[&str] = &["sitecrawl.toml", "~/.config/sitecrawl/config.toml"];

/// Load settings from a TOML string (useful for testing)
pub fn load_settings_from_str(toml_str: &str) -> Result<Settings, SettingsError> {
    let settings: Settings = Config::builder()
        .add_source(File::from_str(toml_str, FileFormat::Toml))
        .build()?
        .try_deserialize()?;

    validate_settings(&settings)?;

    Ok(settings)
}

/// Load settings from files and environment
pub fn load_settings(settings_path: Option<&str>) -> Result<Settings, SettingsError> {
    let mut builder = Config::builder();

    if let Some(path) = settings_path {
        // Explicit path provided - must exist
        let expanded = shellexpand::tilde(path);
        if !Path::new(expanded.as_ref()).exists() {
            return Err(SettingsError::Load(format!(
                "Settings file not found: {}",
                path
            )));
        }
        builder = builder.add_source(File::new(&expanded, FileFormat::Toml));
    } else {
        // Try default paths (first existing one wins)
        for path in DEFAULT_SETTINGS_PATHS {
            let expanded = shellexpand::tilde(path);
            if Path::new(expanded.as_ref()).exists() {
                builder = builder.add_source(File::new(&expanded, FileFormat::Toml));
                break;
            }
        }
    }

    // e.g., SITECRAWL__SITES_FILE, SITECRAWL__LOGGING__LEVEL
    // Double underscore (__) maps to nested keys (logging.level)
    builder = builder.add_source(
        Environment::with_prefix("SITECRAWL")
            .separator("__")
            .try_parsing(true),
    );

    let settings: Settings = builder.build()?.try_deserialize()?;

    validate_settings(&settings)?;

    Ok(settings)
}

/// Check that `level` names a single tracing level
pub fn validate_level(level: &str, field: &str) -> Result<(), SettingsError> {
    if level.parse::<tracing::Level>().is_err() {
        return Err(SettingsError::Invalid {
            message: format!(
                "{} must be one of trace, debug, info, warn, error, got: {}",
                field, level
            ),
        });
    }
    Ok(())
}

fn validate_settings(settings: &Settings) -> Result<(), SettingsError> {
    validate_level(&settings.logging.level, "logging.level")?;

    if settings.sites_file.as_deref() == Some("") {
        return Err(SettingsError::Invalid {
            message: "sites_file must not be empty".to_string(),
        });
    }

    Ok(())
}
