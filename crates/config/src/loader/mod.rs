//! Configuration loader for environment variables and keymap files.
//!
//! Responsibilities:
//! - Load configuration from `.env` files, environment variables, and JSON keymap files.
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Enforce `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Writing configuration back to disk (keymaps are read-only configuration).
//! - Registering bindings (see `install`).
//!
//! Invariants / Assumptions:
//! - Builder values and environment variables take precedence over file values.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

mod builder;
mod env;
mod error;

pub use builder::ConfigLoader;
pub use env::env_var_or_none;
pub use error::ConfigError;

#[cfg(test)]
mod tests;
