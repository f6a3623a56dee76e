//! Tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test builder methods and keymap file loading.
//! - Test environment variable handling and precedence.
//! - Test `.env` loading and the `DOTENV_DISABLED` gate.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::path::{Path, PathBuf};
use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Write `content` to `keymaps.json` under `dir` and return its path.
pub fn write_keymap_file(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("keymaps.json");
    std::fs::write(&path, content).unwrap();
    path
}
