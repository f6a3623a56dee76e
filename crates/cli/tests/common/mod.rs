//! Shared test utilities for `keymaps` integration tests.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic: no `.env`, no
//!   inherited `KEYMAPS_*` variables, and a config home with no keymap file.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Returns a hermetic `keymaps` command whose default config dir is under `home`.
pub fn keymaps_cmd(home: &TempDir) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("keymaps");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");
    cmd.env("XDG_CONFIG_HOME", home.path());
    cmd.env("HOME", home.path());

    cmd.env_remove("KEYMAPS_CONFIG_PATH")
        .env_remove("KEYMAPS_SEPARATOR")
        .env_remove("KEYMAPS_NO_DEFAULTS")
        .env_remove("RUST_LOG");

    cmd
}

/// Write a keymap file into `dir` and return its path.
#[allow(dead_code)]
pub fn write_keymap(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("keymaps.json");
    std::fs::write(&path, content).unwrap();
    path
}
