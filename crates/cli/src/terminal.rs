//! Terminal state management and cleanup.
//!
//! Responsibilities:
//! - Ensure raw mode is disabled when the `listen` session ends, even during panics.
//!
//! Invariants / Assumptions:
//! - Must be created after raw mode is enabled.
//! - Drop implementation must not panic.

use anyhow::{Context, Result};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

/// Guard that restores cooked mode on drop.
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    /// Enable raw mode and return the guard that undoes it.
    pub fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw terminal mode")?;
        Ok(Self { _private: () })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Errors are ignored: this also runs while unwinding.
        let _ = disable_raw_mode();
    }
}
