//! Centralized constants for the keymaps core.
//!
//! Notification names are built from a fixed namespace so that hosts can
//! filter every keymap-related event with a single prefix check.

// =============================================================================
// Combination syntax
// =============================================================================

/// Default separator between tokens of a combination string (`ctrl+z`).
pub const DEFAULT_SEPARATOR: char = '+';

// =============================================================================
// Notifications
// =============================================================================

/// Namespace prefix shared by every notification the registry emits.
pub const EVENT_NAMESPACE: &str = "keymap";

/// Emitted when a new storage key is registered.
pub const EVENT_ADD: &str = "keymap:add";

/// Emitted when an existing storage key is registered again.
pub const EVENT_UPDATE: &str = "keymap:update";

/// Emitted when a binding is removed.
pub const EVENT_REMOVE: &str = "keymap:remove";

/// Emitted for every binding triggered by a keyboard event.
pub const EVENT_EMIT: &str = "keymap:emit";

// =============================================================================
// Text input detection
// =============================================================================

/// `<input type=...>` values that accept free text.
///
/// An `<input>` without a type attribute is a text input as well.
pub const TEXT_INPUT_TYPES: &[&str] = &[
    "text", "search", "email", "password", "url", "tel", "number",
];
