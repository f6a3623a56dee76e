//! Keymap configuration types.
//!
//! Responsibilities:
//! - Define the on-disk keymap file format (`KeymapFile`, `BindingEntry`).
//! - Define the resolved configuration (`KeymapConfig`) produced by the loader.
//!
//! Does NOT handle:
//! - Reading files or environment variables (see `loader`).
//! - Validating combinations (see `keybind`).
//!
//! Invariants:
//! - Scope names use snake_case serialization (`global_except_text_edit`).
//! - Entries are kept in file order; later entries are registered last.

use std::path::PathBuf;

use keymaps_core::BuiltinScope;
use keymaps_core::constants::DEFAULT_SEPARATOR;
use serde::{Deserialize, Serialize};

/// One binding in a keymap file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingEntry {
    /// Combination string, e.g. `ctrl+shift+z`.
    pub keys: String,
    /// Host command to run.
    pub command: String,
    #[serde(default = "default_scope")]
    pub scope: BuiltinScope,
    #[serde(default = "default_prevent_default")]
    pub prevent_default: bool,
}

impl BindingEntry {
    pub fn new(keys: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            keys: keys.into(),
            command: command.into(),
            scope: default_scope(),
            prevent_default: default_prevent_default(),
        }
    }

    pub fn with_scope(mut self, scope: BuiltinScope) -> Self {
        self.scope = scope;
        self
    }
}

fn default_scope() -> BuiltinScope {
    BuiltinScope::Global
}

fn default_prevent_default() -> bool {
    true
}

/// Keymap file as stored on disk. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeymapFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separator: Option<char>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_defaults: Option<bool>,
    #[serde(default)]
    pub bindings: Vec<BindingEntry>,
}

/// Fully resolved keymap configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeymapConfig {
    pub separator: char,
    /// Whether the stock editor bindings are registered before `bindings`.
    pub include_defaults: bool,
    pub bindings: Vec<BindingEntry>,
    /// File the bindings were read from, if one existed.
    pub source: Option<PathBuf>,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            include_defaults: true,
            bindings: Vec::new(),
            source: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_defaults_when_fields_missing() {
        let entry: BindingEntry =
            serde_json::from_str(r#"{"keys": "ctrl+s", "command": "core:save"}"#).unwrap();
        assert_eq!(entry, BindingEntry::new("ctrl+s", "core:save"));
        assert_eq!(entry.scope, BuiltinScope::Global);
        assert!(entry.prevent_default);
    }

    #[test]
    fn test_file_parses_scopes() {
        let json = r#"{
            "separator": "-",
            "include_defaults": false,
            "bindings": [
                {"keys": "shift-n", "command": "pages:add", "scope": "global_except_text_edit"},
                {"keys": "escape", "command": "rte:exit", "scope": "text_edit", "prevent_default": false}
            ]
        }"#;
        let file: KeymapFile = serde_json::from_str(json).unwrap();
        assert_eq!(file.separator, Some('-'));
        assert_eq!(file.include_defaults, Some(false));
        assert_eq!(file.bindings[0].scope, BuiltinScope::GlobalExceptTextEdit);
        assert!(!file.bindings[1].prevent_default);
    }

    #[test]
    fn test_empty_file_object() {
        let file: KeymapFile = serde_json::from_str("{}").unwrap();
        assert_eq!(file, KeymapFile::default());
    }

    #[test]
    fn test_unknown_scope_is_rejected() {
        let result: Result<BindingEntry, _> =
            serde_json::from_str(r#"{"keys": "a", "command": "x", "scope": "sometimes"}"#);
        assert!(result.is_err());
    }
}
