//! Integration tests for configuration loading and installation.
//!
//! These tests drive the public `ConfigLoader` chain end to end and install
//! the result on a live registry, the way the CLI does.

use std::ffi::OsStr;
use std::sync::{Arc, Mutex};

use keymaps_config::{BindingEntry, ConfigError, ConfigLoader, KeymapConfig, env_var_or_none};
use keymaps_core::{ActionError, EventTarget, Host, KeyboardEvent, Notification};
use serial_test::serial;
use tempfile::TempDir;

#[derive(Default)]
struct EditorHost {
    commands: Mutex<Vec<String>>,
    editing: Mutex<bool>,
    notifications: Mutex<Vec<String>>,
}

impl Host for EditorHost {
    type Element = &'static str;

    fn run_command(&self, name: &str) -> Result<(), ActionError> {
        self.commands.lock().unwrap().push(name.to_string());
        Ok(())
    }

    fn selected_element(&self) -> Option<&'static str> {
        None
    }

    fn active_text_edit_target(&self) -> Option<&'static str> {
        self.editing.lock().unwrap().then_some("title")
    }

    fn emit(&self, notification: &Notification<'_, Self>) {
        self.notifications.lock().unwrap().push(notification.name());
    }
}

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("keymaps.json");
    std::fs::write(&path, content).unwrap();
    path
}

/// Builder values (as parsed from CLI flags) beat environment values.
#[test]
#[serial]
fn test_config_loader_cli_overrides() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, r#"{"separator": "/"}"#);

    temp_env::with_vars(
        [
            ("KEYMAPS_CONFIG_PATH", Some(path.as_os_str())),
            ("KEYMAPS_SEPARATOR", Some(OsStr::new("-"))),
        ],
        || {
            let config = ConfigLoader::new()
                .with_separator('+')
                .from_env()
                .unwrap()
                .build()
                .unwrap();
            assert_eq!(config.separator, '+');
            assert_eq!(config.source.as_deref(), Some(path.as_path()));
        },
    );
}

#[test]
#[serial]
fn test_env_var_or_none_exported() {
    temp_env::with_var("KEYMAPS_SEPARATOR", Some(""), || {
        assert_eq!(env_var_or_none("KEYMAPS_SEPARATOR"), None);
    });
}

#[test]
#[serial]
fn test_loaded_bindings_dispatch() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(
        &temp_dir,
        r#"{
            "include_defaults": false,
            "bindings": [
                {"keys": "shift+n", "command": "pages:add", "scope": "global_except_text_edit"},
                {"keys": "ctrl+b", "command": "rte:bold", "scope": "text_edit"}
            ]
        }"#,
    );

    let config = ConfigLoader::new().with_config_path(path).build().unwrap();
    let host = Arc::new(EditorHost::default());
    let keymaps = config.create_keymaps(Arc::clone(&host));
    assert_eq!(config.install(&keymaps).unwrap(), 2);

    keymaps.dispatch(&KeyboardEvent::new("N").with_shift());
    *host.editing.lock().unwrap() = true;
    keymaps.dispatch(&KeyboardEvent::new("N").with_shift());
    keymaps.dispatch(
        &KeyboardEvent::new("b")
            .with_ctrl()
            .with_target(EventTarget::input("text")),
    );

    assert_eq!(
        *host.commands.lock().unwrap(),
        vec!["pages:add".to_string(), "rte:bold".to_string()]
    );
}

#[test]
fn test_default_config_installs_stock_bindings() {
    let host = Arc::new(EditorHost::default());
    let config = KeymapConfig::default();
    let keymaps = config.create_keymaps(Arc::clone(&host));

    config.install(&keymaps).unwrap();

    assert!(keymaps.contains("ctrl+shift+z"));
    assert!(keymaps.contains("meta+z"));
    assert!(
        host.notifications
            .lock()
            .unwrap()
            .iter()
            .all(|name| name == "keymap:add")
    );
}

#[test]
fn test_invalid_binding_surfaces_as_config_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(
        &temp_dir,
        r#"{"bindings": [{"keys": "super+k", "command": "x"}]}"#,
    );

    let err = ConfigLoader::new()
        .with_config_path(path)
        .build()
        .unwrap_err();

    assert!(matches!(err, ConfigError::Keybind(_)));
    assert!(err.to_string().contains("super"));
}

#[test]
fn test_entry_builder_matches_file_defaults() {
    let entry: BindingEntry =
        serde_json::from_str(r#"{"keys": "ctrl+s", "command": "core:save"}"#).unwrap();
    assert_eq!(entry, BindingEntry::new("ctrl+s", "core:save"));
}
