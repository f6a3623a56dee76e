//! Applying a resolved configuration to a registry.
//!
//! Stock bindings go in first so that file entries can override them by
//! registering the same storage key, which surfaces as `keymap:update`.

use std::sync::Arc;

use keymaps_core::{Host, Keymaps};
use tracing::info;

use crate::loader::ConfigError;
use crate::types::KeymapConfig;

impl KeymapConfig {
    /// Create a registry for `host` using the configured separator.
    pub fn create_keymaps<H: Host>(&self, host: Arc<H>) -> Keymaps<H> {
        Keymaps::with_separator(host, self.separator)
    }

    /// Register the stock bindings (when enabled) followed by the file bindings.
    ///
    /// Returns the number of registrations performed.
    ///
    /// # Errors
    /// Returns `ConfigError::Register` if a combination does not parse with
    /// the registry's separator. Bindings registered before the failure stay.
    pub fn install<H: Host>(&self, keymaps: &Keymaps<H>) -> Result<usize, ConfigError> {
        let mut count = 0;
        if self.include_defaults {
            count += keymaps.register_defaults()?;
        }
        for entry in &self.bindings {
            keymaps.register_with(
                &entry.keys,
                entry.command.as_str(),
                entry.scope,
                entry.prevent_default,
            )?;
            count += 1;
        }

        info!(
            registered = count,
            bindings = keymaps.len(),
            source = ?self.source,
            "Keymap configuration installed"
        );
        Ok(count)
    }
}
