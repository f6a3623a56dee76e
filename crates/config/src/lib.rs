//! Configuration management for keymaps.
//!
//! This crate resolves a keymap configuration from builder overrides,
//! `KEYMAPS_*` environment variables and a JSON keymap file, then installs it
//! on a `keymaps_core::Keymaps` registry.

pub mod constants;
mod install;
pub mod keybind;
mod loader;
pub mod path;
pub mod types;

pub use keybind::KeybindError;
pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use path::default_config_path;
pub use types::{BindingEntry, KeymapConfig, KeymapFile};
