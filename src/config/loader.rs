//! Site configuration loader
//!
//! Reads a JSON document from disk, validates its shape and hands back the
//! document unchanged. Each call is independent: nothing is cached and the
//! file handle is released before validation starts.

use crate::config::types::Configuration;
use crate::config::validate::validate_document;
use crate::error::ConfigError;
use crate::settings::Settings;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default site file paths to check (in order)
const DEFAULT_SITES_PATHS: &[&str] = &[
    "sites.json",
    ".sitecrawl/sites.json",
    "~/.config/sitecrawl/sites.json",
];

/// Path label used in errors for in-memory documents
const STRING_SOURCE: &str = "<string>";

/// Load and validate a site configuration file
pub fn load_config(path: impl AsRef<Path>) -> Result<Configuration, ConfigError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "Reading site configuration");

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::from_io(path, e))?;

    parse_and_validate(&contents, path)
}

/// Load configuration from a JSON string (useful for testing)
pub fn load_config_from_str(json: &str) -> Result<Configuration, ConfigError> {
    parse_and_validate(json, Path::new(STRING_SOURCE))
}

fn parse_and_validate(contents: &str, path: &Path) -> Result<Configuration, ConfigError> {
    let document: Value = serde_json::from_str(contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    validate_document(&document)?;

    Ok(Configuration::new_unchecked(document))
}

/// Resolve which site file to read.
///
/// An explicit path is returned as given (after `~` expansion) whether or
/// not it exists, so that a missing file is reported by [`load_config`].
/// Otherwise the first existing default path wins.
pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(PathBuf::from(shellexpand::tilde(path).as_ref()));
    }

    DEFAULT_SITES_PATHS
        .iter()
        .map(|path| PathBuf::from(shellexpand::tilde(path).as_ref()))
        .find(|path| path.exists())
}

/// Resolve the site file for a run.
///
/// Precedence: explicit path, then the settings' `sites_file`, then the
/// default search list.
pub fn resolve_sites_path(
    explicit: Option<&str>,
    settings: &Settings,
) -> Result<PathBuf, ConfigError> {
    resolve_config_path(explicit.or(settings.sites_file.as_deref())).ok_or_else(|| {
        ConfigError::NoSitesFile {
            searched: DEFAULT_SITES_PATHS.iter().map(|p| p.to_string()).collect(),
        }
    })
}

/// Resolve and load the site file for a run
pub fn load_sites(explicit: Option<&str>, settings: &Settings) -> crate::Result<Configuration> {
    let path = resolve_sites_path(explicit, settings)?;
    Ok(load_config(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, SchemaError};

    const VALID: &str = r#"{
        "sites": {
            "example": {
                "url": "https://example.com",
                "max_pages": 100,
                "max_depth": 3,
                "crawl_delay": 1,
                "data_elements": [
                    {"name": "title", "selector": "h1", "type": "text"}
                ]
            }
        }
    }"#;

    #[test]
    fn test_load_config_from_str_basic() {
        let config = load_config_from_str(VALID).unwrap();
        let site = config.get_site_config("example").unwrap();
        assert_eq!(site.url(), Some("https://example.com"));
        assert_eq!(site.max_pages(), Some(100));
    }

    #[test]
    fn test_document_is_returned_unchanged() {
        let expected: Value = serde_json::from_str(VALID).unwrap();
        let config = load_config_from_str(VALID).unwrap();
        assert_eq!(config.into_value(), expected);
    }

    #[test]
    fn test_malformed_json() {
        let err = load_config_from_str("{\"sites\": {").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(err.to_string().contains(STRING_SOURCE));
    }

    #[test]
    fn test_missing_sites_key() {
        let err = load_config_from_str(r#"{"site": {}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Schema(SchemaError::MissingSites)));
        assert!(err.to_string().contains("sites"));
    }

    #[test]
    fn test_explicit_path_is_kept_even_if_missing() {
        let path = resolve_config_path(Some("does/not/exist.json")).unwrap();
        assert_eq!(path, PathBuf::from("does/not/exist.json"));
    }

    #[test]
    fn test_explicit_path_tilde_expanded() {
        if std::env::var_os("HOME").is_none() {
            return;
        }
        let path = resolve_config_path(Some("~/sites.json")).unwrap();
        assert!(!path.to_string_lossy().starts_with('~'));
    }
}
