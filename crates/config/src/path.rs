//! Path helpers for configuration file locations.
//!
//! Responsibilities:
//! - Determine the default keymap configuration path.
//! - Use `directories` crate for platform-appropriate paths.
//!
//! Does NOT handle:
//! - File I/O operations.

use std::path::PathBuf;

use anyhow::Context;

use crate::constants::{APP_NAME, CONFIG_FILE_NAME};

/// Returns the default path to the keymap configuration file.
///
/// - Linux/macOS: `~/.config/keymaps/keymaps.json`
/// - Windows: `%AppData%\keymaps\keymaps.json`
pub fn default_config_path() -> Result<PathBuf, anyhow::Error> {
    let proj_dirs = directories::ProjectDirs::from("", "", APP_NAME)
        .context("Failed to determine project directories")?;

    Ok(proj_dirs.config_dir().join(CONFIG_FILE_NAME))
}
