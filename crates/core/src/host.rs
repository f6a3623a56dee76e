//! The editor host as seen by the keymap registry.
//!
//! Responsibilities:
//! - Define the capabilities the registry needs from its host: command execution,
//!   selection/editing introspection and a notification sink.
//!
//! Does NOT handle:
//! - Any concrete command, selection model or event bus; those belong to the host.
//!
//! Invariants:
//! - Introspection methods are queries and must not mutate host state; scopes
//!   may call them several times for the same event.

use crate::error::ActionError;
use crate::notify::Notification;

/// Capabilities an editor host exposes to the keymap registry.
///
/// The implementing type is the host context handed to scopes and callback actions.
pub trait Host: Send + Sync + Sized + 'static {
    /// Handle to an element of the host document.
    type Element;

    /// Execute a host command by name.
    fn run_command(&self, name: &str) -> Result<(), ActionError>;

    /// The currently selected element, if any.
    fn selected_element(&self) -> Option<Self::Element>;

    /// The element currently being edited as rich text, if any.
    fn active_text_edit_target(&self) -> Option<Self::Element>;

    /// Receive a keymap lifecycle notification.
    fn emit(&self, notification: &Notification<'_, Self>) {
        let _ = notification;
    }
}
