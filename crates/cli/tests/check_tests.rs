//! Integration tests for `keymaps check`.

mod common;

use common::{keymaps_cmd, write_keymap};
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_check_lists_default_bindings() {
    let home = TempDir::new().unwrap();

    keymaps_cmd(&home)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("KEYS\tACTION\tSCOPE\tPREVENT_DEFAULT"))
        .stdout(predicate::str::contains(
            "ctrl+shift+z\tcore:redo\tGLOBAL_EXCEPT_TEXT_EDIT\ttrue",
        ))
        .stdout(predicate::str::contains("+escape\tcore:text-edit-exit\tTEXT_EDIT\tfalse"));
}

#[test]
fn test_check_without_defaults_is_empty() {
    let home = TempDir::new().unwrap();

    keymaps_cmd(&home)
        .args(["check", "--no-defaults"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No keybindings configured."));
}

#[test]
fn test_check_json_includes_file_bindings() {
    let home = TempDir::new().unwrap();
    let config = write_keymap(
        home.path(),
        r#"{"include_defaults": false, "bindings": [
            {"keys": "Shift+N", "command": "pages:add", "scope": "global_except_text_edit"}
        ]}"#,
    );

    let output = keymaps_cmd(&home)
        .arg("--config")
        .arg(&config)
        .args(["check", "--output", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["bindings"].as_array().unwrap().len(), 1);
    assert_eq!(value["bindings"][0]["id"], "shift+n");
    assert_eq!(value["bindings"][0]["scope"], "GLOBAL_EXCEPT_TEXT_EDIT");
    assert_eq!(value["source"], config.display().to_string());
}

#[test]
fn test_file_override_replaces_default() {
    let home = TempDir::new().unwrap();
    let config = write_keymap(
        home.path(),
        r#"{"bindings": [{"keys": "ctrl+z", "command": "app:undo"}]}"#,
    );

    keymaps_cmd(&home)
        .env("KEYMAPS_CONFIG_PATH", &config)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("ctrl+z\tapp:undo\tGLOBAL\ttrue"))
        .stdout(predicate::str::contains("ctrl+z\tcore:undo").not());
}

#[test]
fn test_missing_explicit_config_exits_2() {
    let home = TempDir::new().unwrap();

    keymaps_cmd(&home)
        .args(["--config", "/nonexistent/keymaps.json", "check"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to read config file"));
}

#[test]
fn test_conflicting_config_exits_3() {
    let home = TempDir::new().unwrap();
    let config = write_keymap(
        home.path(),
        r#"{"bindings": [
            {"keys": "ctrl+alt+k", "command": "a"},
            {"keys": "Alt+Ctrl+K", "command": "b"}
        ]}"#,
    );

    keymaps_cmd(&home)
        .arg("--config")
        .arg(&config)
        .arg("check")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Conflicting keybindings"));
}

#[test]
fn test_invalid_output_format() {
    let home = TempDir::new().unwrap();

    keymaps_cmd(&home)
        .args(["check", "--output", "yaml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid output format"));
}
