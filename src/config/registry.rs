//! Registry holding the currently loaded site configuration

use crate::config::loader::load_config;
use crate::config::types::{Configuration, SiteConfig};
use crate::error::ConfigError;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Keeps one validated [`Configuration`] and where it came from
#[derive(Debug, Clone)]
pub struct SiteRegistry {
    config: Configuration,
    source: Option<PathBuf>,
}

impl SiteRegistry {
    /// Load a registry from a site file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config = load_config(path)?;
        Ok(Self {
            config,
            source: Some(path.to_path_buf()),
        })
    }

    /// Wrap an already loaded configuration; [`reload`](Self::reload) is a no-op
    pub fn from_configuration(config: Configuration) -> Self {
        Self {
            config,
            source: None,
        }
    }

    /// Re-read the source file.
    ///
    /// On failure the previously loaded configuration stays in place.
    pub fn reload(&mut self) -> Result<(), ConfigError> {
        let Some(path) = &self.source else {
            debug!("Registry has no source file, nothing to reload");
            return Ok(());
        };

        match load_config(path) {
            Ok(config) => {
                self.config = config;
                Ok(())
            }
            Err(e) => {
                warn!(path = %path.display(), kind = %e.kind(), "Reload failed, keeping previous configuration");
                Err(e)
            }
        }
    }

    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Look up a site by name; `None` if it is not configured
    pub fn get_site_config(&self, name: &str) -> Option<SiteConfig<'_>> {
        self.config.get_site_config(name)
    }
}
