//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `KEYMAPS_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//! - Provide helper functions for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Reading keymap files (see builder.rs).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Environment variables take precedence over file values.
//! - Values set through builder methods are never replaced by environment values.
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Invalid values return ConfigError::InvalidValue.

use std::path::PathBuf;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{ENV_CONFIG_PATH, ENV_NO_DEFAULTS, ENV_SEPARATOR};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if loader.config_path().is_none()
        && let Some(path) = env_var_or_none(ENV_CONFIG_PATH)
    {
        loader.set_config_path(Some(PathBuf::from(path)));
    }
    if let Some(separator) = env_var_or_none(ENV_SEPARATOR) {
        let mut chars = separator.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return Err(ConfigError::InvalidValue {
                var: ENV_SEPARATOR.to_string(),
                message: "must be a single character".to_string(),
            });
        };
        if loader.separator().is_none() {
            loader.set_separator(Some(c));
        }
    }
    if let Some(disabled) = env_var_or_none(ENV_NO_DEFAULTS) {
        let disabled = parse_bool(&disabled).ok_or_else(|| ConfigError::InvalidValue {
            var: ENV_NO_DEFAULTS.to_string(),
            message: "must be true or false".to_string(),
        })?;
        if loader.include_defaults().is_none() {
            loader.set_include_defaults(Some(!disabled));
        }
    }
    Ok(())
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
