//! Lifecycle notifications emitted to the host.
//!
//! Every notification name starts with the `keymap:` namespace:
//! `keymap:add`, `keymap:update`, `keymap:remove`, `keymap:emit` and the
//! binding-specific `keymap:emit:<storage key>`.

use crate::constants::{EVENT_ADD, EVENT_EMIT, EVENT_REMOVE, EVENT_UPDATE};
use crate::event::KeyboardEvent;
use crate::keybind::KeyBind;

/// A notification sent through `Host::emit`.
pub enum Notification<'a, H> {
    /// A new storage key was registered.
    Add(&'a KeyBind<H>),
    /// An existing storage key was registered again; `previous` was replaced.
    Update {
        bind: &'a KeyBind<H>,
        previous: &'a KeyBind<H>,
    },
    /// A binding was removed.
    Remove(&'a KeyBind<H>),
    /// A binding was triggered by a keyboard event.
    Triggered {
        bind: &'a KeyBind<H>,
        event: &'a KeyboardEvent,
    },
    /// Same payload as `Triggered`, namespaced by the binding's storage key.
    TriggeredId {
        bind: &'a KeyBind<H>,
        event: &'a KeyboardEvent,
    },
}

impl<H> Notification<'_, H> {
    /// Event-bus name of this notification.
    pub fn name(&self) -> String {
        match self {
            Self::Add(_) => EVENT_ADD.to_string(),
            Self::Update { .. } => EVENT_UPDATE.to_string(),
            Self::Remove(_) => EVENT_REMOVE.to_string(),
            Self::Triggered { .. } => EVENT_EMIT.to_string(),
            Self::TriggeredId { bind, .. } => format!("{EVENT_EMIT}:{}", bind.id()),
        }
    }

    /// The binding the notification is about.
    pub fn keybind(&self) -> &KeyBind<H> {
        match self {
            Self::Add(bind)
            | Self::Update { bind, .. }
            | Self::Remove(bind)
            | Self::Triggered { bind, .. }
            | Self::TriggeredId { bind, .. } => bind,
        }
    }

    /// The triggering keyboard event, for `Triggered` and `TriggeredId`.
    pub fn event(&self) -> Option<&KeyboardEvent> {
        match self {
            Self::Triggered { event, .. } | Self::TriggeredId { event, .. } => Some(event),
            _ => None,
        }
    }
}
