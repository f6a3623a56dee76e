//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Read the JSON keymap file and resolve the final `KeymapConfig`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Registering bindings on a registry (see `install`).
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables.
//! - Environment variables take precedence over keymap file values.
//! - A missing file at the default location yields an empty configuration;
//!   a missing file at an explicit location is an error.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use std::path::{Path, PathBuf};

use keymaps_core::constants::DEFAULT_SEPARATOR;
use tracing::debug;

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::ENV_DOTENV_DISABLED;
use crate::keybind::validate_bindings;
use crate::path::default_config_path;
use crate::types::{KeymapConfig, KeymapFile};

/// Configuration loader that builds a keymap config from the environment and a file.
#[derive(Debug, Default, Clone)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    separator: Option<char>,
    include_defaults: Option<bool>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(ENV_DOTENV_DISABLED).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// # Errors
    /// Returns an error if the `.env` file exists but cannot be read or parsed.
    /// A missing `.env` file is not an error.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read the keymap file from `path` instead of the default location.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Override the combination separator.
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = Some(separator);
        self
    }

    /// Override whether the stock editor bindings are installed.
    pub fn with_defaults(mut self, include: bool) -> Self {
        self.include_defaults = Some(include);
        self
    }

    /// Read configuration from `KEYMAPS_*` environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    pub(crate) fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    pub(crate) fn set_config_path(&mut self, path: Option<PathBuf>) {
        self.config_path = path;
    }

    pub(crate) fn separator(&self) -> Option<char> {
        self.separator
    }

    pub(crate) fn set_separator(&mut self, separator: Option<char>) {
        self.separator = separator;
    }

    pub(crate) fn include_defaults(&self) -> Option<bool> {
        self.include_defaults
    }

    pub(crate) fn set_include_defaults(&mut self, include: Option<bool>) {
        self.include_defaults = include;
    }

    /// Resolve the final configuration.
    ///
    /// # Errors
    /// Returns an error if an explicitly configured file is missing, the file
    /// cannot be parsed, the separator is unusable, or the bindings conflict.
    pub fn build(self) -> Result<KeymapConfig, ConfigError> {
        let (file, source) = match self.config_path {
            Some(path) => {
                let file = read_keymap_file(&path)?;
                (file, Some(path))
            }
            None => {
                let path = default_config_path()
                    .map_err(|e| ConfigError::ConfigDirUnavailable(e.to_string()))?;
                if path.exists() {
                    let file = read_keymap_file(&path)?;
                    (file, Some(path))
                } else {
                    debug!(path = %path.display(), "No keymap file at default location");
                    (KeymapFile::default(), None)
                }
            }
        };

        let separator = self
            .separator
            .or(file.separator)
            .unwrap_or(DEFAULT_SEPARATOR);
        if separator.is_whitespace() || separator.is_alphanumeric() || separator.is_control() {
            return Err(ConfigError::InvalidSeparator(separator));
        }

        let include_defaults = self.include_defaults.or(file.include_defaults).unwrap_or(true);

        validate_bindings(&file.bindings, separator)?;

        debug!(
            separator = %separator,
            include_defaults,
            bindings = file.bindings.len(),
            "Resolved keymap configuration"
        );

        Ok(KeymapConfig {
            separator,
            include_defaults,
            bindings: file.bindings,
            source,
        })
    }
}

fn read_keymap_file(path: &Path) -> Result<KeymapFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ConfigFileRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ConfigError::ConfigFileParse {
        path: path.to_path_buf(),
        source,
    })
}
