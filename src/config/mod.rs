//! Site configuration module
//!
//! Handles loading and validating per-site crawl configuration from JSON files.

pub mod loader;
pub mod registry;
pub mod types;
pub mod validate;

pub use loader::{
    load_config, load_config_from_str, load_sites, resolve_config_path, resolve_sites_path,
};
pub use registry::SiteRegistry;
pub use types::*;
pub use validate::{REQUIRED_ELEMENT_KEYS, REQUIRED_SITE_KEYS, validate_document};
