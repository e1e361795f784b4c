//! Tracing subscriber setup

use crate::error::SettingsError;
use crate::settings::{LogFormat, LoggingConfig, validate_level};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Build the log filter.
///
/// `RUST_LOG` wins over an explicit override, which wins over the configured level.
/// The override must name a single level.
pub fn build_filter(
    config: &LoggingConfig,
    override_level: Option<&str>,
) -> Result<EnvFilter, SettingsError> {
    if let Some(level) = override_level {
        validate_level(level, "--log-level")?;
    }

    Ok(EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(override_level.unwrap_or(&config.level))))
}

/// Install the global subscriber, writing to stderr.
pub fn init_logging(config: &LoggingConfig, override_level: Option<&str>) -> crate::Result<()> {
    let filter = build_filter(config, override_level)?;

    match config.format {
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(filter)
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .with(filter)
            .init(),
    }

    Ok(())
}
