//! Keybinding validation for configuration files.
//!
//! Responsibilities:
//! - Check that every configured combination canonicalizes.
//! - Detect conflicts: two entries that resolve to the same storage key.
//!
//! Does NOT handle:
//! - Parsing combinations (delegated to `keymaps_core::combo`).
//! - Runtime key event matching (see `keymaps_core::registry`).
//!
//! Invariants:
//! - Conflicts are judged on canonical storage keys, so `ctrl+shift+z` and
//!   `Shift+Ctrl+Z` collide.
//! - Entries overriding a stock binding are not conflicts; they update it.

use std::collections::HashMap;

use keymaps_core::{KeymapError, parse_combination};
use thiserror::Error;

use crate::types::BindingEntry;

/// Errors that can occur when validating configured keybindings.
#[derive(Debug, Error, PartialEq)]
pub enum KeybindError {
    /// A combination failed to canonicalize.
    #[error("Invalid keybinding for '{command}': {source}")]
    InvalidSyntax {
        /// The command the combination was bound to
        command: String,
        /// The canonicalization failure
        #[source]
        source: KeymapError,
    },

    /// An entry has no command.
    #[error("Keybinding '{key}' has an empty command")]
    EmptyCommand {
        /// The combination with the missing command
        key: String,
    },

    /// Conflicting keybindings
    #[error("Conflicting keybindings: '{key}' is assigned to both {command1} and {command2}")]
    Conflict {
        /// The conflicting key, in canonical form
        key: String,
        /// First command using this key
        command1: String,
        /// Second command using this key
        command2: String,
    },
}

/// Validate configured bindings against `separator`.
///
/// # Examples
///
/// ```
/// use keymaps_config::keybind::validate_bindings;
/// use keymaps_config::BindingEntry;
///
/// let entries = vec![
///     BindingEntry::new("ctrl+s", "core:save"),
///     BindingEntry::new("ctrl+shift+s", "core:save-as"),
/// ];
/// assert!(validate_bindings(&entries, '+').is_ok());
/// ```
pub fn validate_bindings(entries: &[BindingEntry], separator: char) -> Result<(), KeybindError> {
    let mut key_to_command: HashMap<String, &str> = HashMap::new();

    for entry in entries {
        if entry.command.trim().is_empty() {
            return Err(KeybindError::EmptyCommand {
                key: entry.keys.clone(),
            });
        }

        let storage_key = normalize_key(&entry.keys, separator).map_err(|source| {
            KeybindError::InvalidSyntax {
                command: entry.command.clone(),
                source,
            }
        })?;

        if let Some(existing) = key_to_command.get(&storage_key) {
            return Err(KeybindError::Conflict {
                key: storage_key,
                command1: existing.to_string(),
                command2: entry.command.clone(),
            });
        }
        key_to_command.insert(storage_key, &entry.command);
    }

    Ok(())
}

/// Canonical storage key of a configured combination.
pub fn normalize_key(keys: &str, separator: char) -> Result<String, KeymapError> {
    parse_combination(keys, separator).map(|combo| combo.storage_key())
}
