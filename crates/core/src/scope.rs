//! Trigger scopes gating when a binding may activate.
//!
//! Responsibilities:
//! - Define the single-method `ScopeCondition` capability.
//! - Provide the built-in scopes and a named wrapper for caller-defined ones.
//!
//! Does NOT handle:
//! - Matching key combinations (see `registry`).
//!
//! Invariants:
//! - Conditions are pure over (host, event): no mutation, same answer on repeat calls.
//! - `GlobalExceptTextEdit` is exactly the negation of `TextEdit` for the same pair.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::event::KeyboardEvent;
use crate::host::Host;

/// Predicate deciding whether a scope is active for an event.
pub trait ScopeCondition<H>: Send + Sync {
    fn evaluate(&self, host: &H, event: &KeyboardEvent) -> bool;
}

impl<H, F> ScopeCondition<H> for F
where
    F: Fn(&H, &KeyboardEvent) -> bool + Send + Sync,
{
    fn evaluate(&self, host: &H, event: &KeyboardEvent) -> bool {
        self(host, event)
    }
}

/// Scopes every host supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuiltinScope {
    /// Always active.
    Global,
    /// Active unless the user is editing text.
    GlobalExceptTextEdit,
    /// Active while an element is selected.
    ComponentSelection,
    /// Active while editing rich text or typing in a text field.
    TextEdit,
}

impl BuiltinScope {
    pub const ALL: [BuiltinScope; 4] = [
        BuiltinScope::Global,
        BuiltinScope::GlobalExceptTextEdit,
        BuiltinScope::ComponentSelection,
        BuiltinScope::TextEdit,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Global => "GLOBAL",
            Self::GlobalExceptTextEdit => "GLOBAL_EXCEPT_TEXT_EDIT",
            Self::ComponentSelection => "COMPONENT_SELECTION",
            Self::TextEdit => "TEXT_EDIT",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Global => "Always active",
            Self::GlobalExceptTextEdit => "Active unless editing text",
            Self::ComponentSelection => "Active while a component is selected",
            Self::TextEdit => "Active while editing text",
        }
    }
}

impl<H: Host> ScopeCondition<H> for BuiltinScope {
    fn evaluate(&self, host: &H, event: &KeyboardEvent) -> bool {
        match self {
            Self::Global => true,
            Self::GlobalExceptTextEdit => !Self::TextEdit.evaluate(host, event),
            Self::ComponentSelection => host.selected_element().is_some(),
            Self::TextEdit => {
                host.active_text_edit_target().is_some() || event.from_text_input()
            }
        }
    }
}

impl fmt::Display for BuiltinScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named, described condition attached to a binding.
pub struct TriggerScope<H> {
    name: String,
    description: String,
    condition: Arc<dyn ScopeCondition<H>>,
}

impl<H: Host> TriggerScope<H> {
    /// Define a caller-specific scope.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        condition: impl ScopeCondition<H> + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            condition: Arc::new(condition),
        }
    }

    pub fn builtin(scope: BuiltinScope) -> Self {
        Self::new(scope.name(), scope.description(), scope)
    }

    pub fn global() -> Self {
        Self::builtin(BuiltinScope::Global)
    }

    pub fn global_except_text_edit() -> Self {
        Self::builtin(BuiltinScope::GlobalExceptTextEdit)
    }

    pub fn component_selection() -> Self {
        Self::builtin(BuiltinScope::ComponentSelection)
    }

    pub fn text_edit() -> Self {
        Self::builtin(BuiltinScope::TextEdit)
    }

    pub fn is_active(&self, host: &H, event: &KeyboardEvent) -> bool {
        self.condition.evaluate(host, event)
    }
}

impl<H> TriggerScope<H> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl<H: Host> Default for TriggerScope<H> {
    fn default() -> Self {
        Self::global()
    }
}

impl<H: Host> From<BuiltinScope> for TriggerScope<H> {
    fn from(scope: BuiltinScope) -> Self {
        Self::builtin(scope)
    }
}

impl<H> Clone for TriggerScope<H> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            description: self.description.clone(),
            condition: Arc::clone(&self.condition),
        }
    }
}

impl<H> fmt::Debug for TriggerScope<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TriggerScope")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}
