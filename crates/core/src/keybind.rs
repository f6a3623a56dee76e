//! The registered unit: a canonical combination bound to an action and scope.

use std::fmt;

use serde::Serialize;

use crate::action::Action;
use crate::scope::TriggerScope;

/// A binding stored in the registry.
///
/// Bindings are immutable; registering the same storage key again replaces
/// the whole binding.
pub struct KeyBind<H> {
    pub(crate) id: String,
    pub(crate) key: String,
    pub(crate) modifiers: String,
    pub(crate) action: Action<H>,
    pub(crate) scope: TriggerScope<H>,
    pub(crate) prevent_default: bool,
}

impl<H> KeyBind<H> {
    /// Storage key (`modifiers + separator + key`).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Lowercased key token.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Canonical modifier string, empty when no modifiers are required.
    pub fn modifiers(&self) -> &str {
        &self.modifiers
    }

    pub fn action(&self) -> &Action<H> {
        &self.action
    }

    pub fn scope(&self) -> &TriggerScope<H> {
        &self.scope
    }

    pub fn prevent_default(&self) -> bool {
        self.prevent_default
    }

    /// Returns true if the canonical (modifiers, key) pair equals this binding's.
    pub fn matches(&self, modifiers: &str, key: &str) -> bool {
        self.modifiers == modifiers && self.key == key
    }

    pub fn summary(&self) -> BindingSummary {
        BindingSummary {
            id: self.id.clone(),
            modifiers: self.modifiers.clone(),
            key: self.key.clone(),
            action: self.action.label().to_string(),
            scope: self.scope.name().to_string(),
            prevent_default: self.prevent_default,
        }
    }
}

impl<H> Clone for KeyBind<H> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            key: self.key.clone(),
            modifiers: self.modifiers.clone(),
            action: self.action.clone(),
            scope: self.scope.clone(),
            prevent_default: self.prevent_default,
        }
    }
}

impl<H> fmt::Debug for KeyBind<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyBind")
            .field("id", &self.id)
            .field("action", &self.action)
            .field("scope", &self.scope.name())
            .field("prevent_default", &self.prevent_default)
            .finish()
    }
}

/// Serializable view of a binding, for listings and diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BindingSummary {
    pub id: String,
    pub modifiers: String,
    pub key: String,
    pub action: String,
    pub scope: String,
    pub prevent_default: bool,
}
