//! Centralized constants for keymap configuration.

// =============================================================================
// Environment variables
// =============================================================================

/// Path to the keymap configuration file.
pub const ENV_CONFIG_PATH: &str = "KEYMAPS_CONFIG_PATH";

/// Separator between combination tokens (a single character).
pub const ENV_SEPARATOR: &str = "KEYMAPS_SEPARATOR";

/// Set to `true`/`1` to skip the stock editor bindings.
pub const ENV_NO_DEFAULTS: &str = "KEYMAPS_NO_DEFAULTS";

/// Set to `true`/`1` to skip `.env` loading.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";

// =============================================================================
// File locations
// =============================================================================

/// Application name used for platform config directories.
pub const APP_NAME: &str = "keymaps";

/// File name of the keymap configuration inside the config directory.
pub const CONFIG_FILE_NAME: &str = "keymaps.json";
