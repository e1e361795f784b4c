//! Error types for sitecrawl-config
//!
//! This module defines the error hierarchy used throughout the crate.
//! Every failure while loading a site configuration surfaces as a
//! [`ConfigError`]; the caller decides how to report it.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),
}

impl AppError {
    /// Short label for log fields
    pub fn kind(&self) -> String {
        match self {
            AppError::Config(e) => e.kind().to_string(),
            AppError::Settings(_) => "settings_error".to_string(),
        }
    }
}

/// Failure category of a [`ConfigError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    FileNotFound,
    Parse,
    Schema,
    Unexpected,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::FileNotFound => "file_not_found",
            ErrorKind::Parse => "parse_error",
            ErrorKind::Schema => "schema_error",
            ErrorKind::Unexpected => "unexpected_error",
        };
        f.write_str(s)
    }
}

/// Errors raised while loading a site configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("No site configuration file given and none found in: {}", searched.join(", "))]
    NoSitesFile { searched: Vec<String> },

    #[error("Error decoding JSON from configuration file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid configuration format: {0}")]
    Schema(#[from] SchemaError),

    #[error("Unexpected error while loading configuration {}: {source}", path.display())]
    Unexpected {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// The failure category, independent of the payload
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConfigError::FileNotFound { .. } | ConfigError::NoSitesFile { .. } => {
                ErrorKind::FileNotFound
            }
            ConfigError::Parse { .. } => ErrorKind::Parse,
            ConfigError::Schema(_) => ErrorKind::Schema,
            ConfigError::Unexpected { .. } => ErrorKind::Unexpected,
        }
    }

    /// Map an I/O error from reading `path` onto the loader taxonomy.
    pub(crate) fn from_io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound { path },
            _ => ConfigError::Unexpected { path, source: err },
        }
    }
}

/// Structural validation failures.
///
/// Validation stops at the first of these, so a document with several
/// problems only ever reports one.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaError {
    #[error("'sites' key missing or not a mapping")]
    MissingSites,

    #[error("Missing required keys in configuration for site '{site}': {}", missing.join(", "))]
    MissingSiteKeys {
        site: String,
        missing: Vec<&'static str>,
    },

    #[error("data_elements for site '{site}' must be a list")]
    DataElementsNotSequence { site: String },

    #[error("Invalid data_element format in site '{site}' at index {index}: {element}")]
    InvalidDataElement {
        site: String,
        index: usize,
        element: serde_json::Value,
    },
}

impl SchemaError {
    /// Name of the offending site, if the error is scoped to one
    pub fn site(&self) -> Option<&str> {
        match self {
            SchemaError::MissingSites => None,
            SchemaError::MissingSiteKeys { site, .. }
            | SchemaError::DataElementsNotSequence { site }
            | SchemaError::InvalidDataElement { site, .. } => Some(site),
        }
    }
}

/// Errors raised while loading the tool's own settings
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to load settings: {0}")]
    Load(String),

    #[error("Invalid settings: {message}")]
    Invalid { message: String },
}

impl From<config::ConfigError> for SettingsError {
    fn from(err: config::ConfigError) -> Self {
        SettingsError::Load(err.to_string())
    }
}

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, AppError>;
