//! Error types for keybinding registration and action execution.
//!
//! Responsibilities:
//! - Define registration errors raised while canonicalizing combinations.
//! - Define the error type returned by actions and host command execution.
//!
//! Does NOT handle:
//! - Configuration file errors (see the `keymaps-config` crate).
//!
//! Invariants:
//! - Registration errors always carry the offending input verbatim.
//! - A registration error means the registry was left untouched.

use thiserror::Error;

/// Errors that can occur when parsing or registering a key combination.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KeymapError {
    /// The combination has no key token (empty, separator-only, trailing separator).
    #[error("Invalid keybind: '{combo}'. Expected format like 'd', 'ctrl+z', 'meta+shift+z'")]
    InvalidKeybind {
        /// The rejected combination string
        combo: String,
    },

    /// A modifier token is not one of meta, ctrl, alt, shift.
    #[error("Invalid modifier '{modifier}' in keybind '{combo}'. Expected one of meta, ctrl, alt, shift")]
    InvalidModifier {
        /// The unrecognized modifier token
        modifier: String,
        /// The combination it appeared in
        combo: String,
    },
}

/// Errors returned by actions invoked during dispatch.
#[derive(Debug, Error)]
pub enum ActionError {
    /// The host has no command registered under this name.
    #[error("Unknown command: '{0}'")]
    UnknownCommand(String),

    /// The action ran and failed.
    #[error("Action failed: {0}")]
    Failed(#[from] anyhow::Error),
}
