//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map configuration and keybinding errors to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for specific error categories.

use keymaps_config::ConfigError;
use keymaps_core::KeymapError;

/// Structured exit codes for the `keymaps` binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Configuration error - unreadable or malformed keymap file, bad environment value.
    ///
    /// Scripts should fix the configuration and not retry unchanged.
    ConfigError = 2,

    /// Invalid keybinding - a combination failed to canonicalize or bindings conflict.
    InvalidKeybind = 3,

    /// Terminal error - the interactive session could not control the terminal.
    TerminalError = 4,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::Keybind(_) | ConfigError::Register(_) => ExitCode::InvalidKeybind,
            _ => ExitCode::ConfigError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
                return ExitCode::from(config_err);
            }
            if cause.downcast_ref::<KeymapError>().is_some() {
                return ExitCode::InvalidKeybind;
            }
            if cause.downcast_ref::<std::io::Error>().is_some() {
                return ExitCode::TerminalError;
            }
        }

        ExitCode::GeneralError
    }
}
