//! Site crawl configuration checker
//!
//! Validates and inspects per-site crawl configuration files.

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use sitecrawl_config::{
    Configuration,
    config::load_sites,
    logging::init_logging,
    settings::{Settings, load_settings},
};
use tracing::error;

/// Validate and inspect web crawl site configuration files
#[derive(Parser, Debug)]
#[command(name = "sitecrawl-config")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the tool settings file (TOML)
    #[arg(long, env = "SITECRAWL_SETTINGS", global = true)]
    settings: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "SITECRAWL_LOG_LEVEL", global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that a site file is well formed
    Validate {
        /// Site configuration file (JSON)
        path: Option<String>,
    },

    /// List configured sites
    List {
        /// Site configuration file (JSON)
        path: Option<String>,
    },

    /// Print the configuration of one site
    Show {
        /// Site name
        site: String,

        /// Site configuration file (JSON)
        #[arg(long, short)]
        file: Option<String>,
    },
}

fn load(explicit: Option<&str>, settings: &Settings) -> anyhow::Result<Configuration> {
    let config = load_sites(explicit, settings).inspect_err(|e| {
        error!(error = %e, kind = %e.kind(), "Failed to load site configuration")
    })?;
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    dotenvy::dotenv().ok();

    let settings = load_settings(args.settings.as_deref())
        .inspect_err(|e| eprintln!("Failed to load settings: {e}"))?;

    init_logging(&settings.logging, args.log_level.as_deref())
        .inspect_err(|e| eprintln!("Failed to initialize logging: {e}"))?;

    match args.command {
        Command::Validate { path } => {
            let config = load(path.as_deref(), &settings)?;
            println!("OK: {} site(s)", config.len());
        }
        Command::List { path } => {
            let config = load(path.as_deref(), &settings)?;
            for site in config.sites() {
                println!("{}\t{}", site.name(), site.url().unwrap_or("-"));
            }
        }
        Command::Show { site, file } => {
            let config = load(file.as_deref(), &settings)?;
            let Some(site_config) = config.get_site_config(&site) else {
                error!(site = %site, "Site not found");
                bail!("Site not found: {site}");
            };
            let rendered = serde_json::to_string_pretty(site_config.raw())
                .context("Failed to render site configuration")?;
            println!("{rendered}");
        }
    }

    Ok(())
}
