use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Browse a remote product catalog in the terminal.
#[derive(Debug, Parser)]
#[command(name = "catalog-browser", version, about)]
pub struct Cli {
    /// Path to the config file (defaults to the user config directory).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the catalog API base URL.
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Show fetch errors on screen instead of only logging them.
    #[arg(long)]
    pub show_errors: bool,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Apply command-line overrides on top of the loaded config.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.catalog.base_url = base_url.clone();
        }
        if self.show_errors {
            config.ui.show_errors = true;
        }
    }
}
