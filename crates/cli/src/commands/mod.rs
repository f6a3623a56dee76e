//! CLI command implementations.

pub mod canonical;
pub mod check;
pub mod listen;

use anyhow::{Context, Result};
use keymaps_config::{ConfigLoader, KeymapConfig};

use crate::args::Cli;

/// Resolve the keymap configuration: CLI flags > env vars > keymap file > defaults.
pub fn load_config(cli: &Cli) -> Result<KeymapConfig> {
    let mut loader = ConfigLoader::new();

    // Blank values are ignored so KEYMAPS_CONFIG_PATH can still apply.
    if let Some(ref path) = cli.config_path
        && !path.to_string_lossy().trim().is_empty()
    {
        loader = loader.with_config_path(path.clone());
    }
    if let Some(separator) = cli.separator {
        loader = loader.with_separator(separator);
    }
    if cli.no_defaults {
        loader = loader.with_defaults(false);
    }

    let config = loader
        .from_env()
        .context("Failed to load configuration from environment")?
        .build()
        .context("Failed to build keymap configuration")?;

    tracing::debug!(source = ?config.source, "Keymap configuration loaded");
    Ok(config)
}
