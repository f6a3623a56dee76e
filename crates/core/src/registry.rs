//! Keybinding registry and dispatcher.
//!
//! Responsibilities:
//! - Own the storage key -> binding map for one host session.
//! - Register, update and remove bindings, emitting lifecycle notifications.
//! - Dispatch keyboard events to matching, scope-active bindings.
//!
//! Does NOT handle:
//! - Receiving events from the UI (see `listener`).
//! - Loading bindings from configuration files (see the `keymaps-config` crate).
//!
//! Invariants:
//! - A storage key maps to at most one binding; registering it again replaces it.
//! - A failed registration leaves the map untouched and emits nothing.
//! - register, remove, clear and dispatch are serialized by one re-entrant
//!   operation lock held for the whole operation, notifications and action
//!   calls included. Observers see notifications in operation order across
//!   threads, and actions may still register or remove on their own thread.
//! - The map lock is never held while host code (scopes, actions, `emit`) runs.
//! - Each matched binding is invoked independently: a failing action does not
//!   prevent the others from running.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use parking_lot::{ReentrantMutex, ReentrantMutexGuard};

use crate::action::Action;
use crate::combo::{event_key, modifier_string_from_event, parse_combination, storage_key};
use crate::constants::DEFAULT_SEPARATOR;
use crate::defaults::DEFAULT_BINDINGS;
use crate::error::{ActionError, KeymapError};
use crate::event::KeyboardEvent;
use crate::host::Host;
use crate::keybind::{BindingSummary, KeyBind};
use crate::notify::Notification;
use crate::scope::TriggerScope;

type BindingMap<H> = BTreeMap<String, Arc<KeyBind<H>>>;

/// Keybinding registry for one host session.
///
/// Cloning is cheap and yields another handle to the same registry.
pub struct Keymaps<H: Host> {
    inner: Arc<Inner<H>>,
}

struct Inner<H: Host> {
    host: Arc<H>,
    separator: char,
    bindings: Mutex<BindingMap<H>>,
    operation: ReentrantMutex<()>,
}

/// Outcome of dispatching one keyboard event.
#[derive(Debug, Default)]
pub struct DispatchReport {
    /// Storage keys of bindings whose action ran successfully.
    pub triggered: Vec<String>,
    /// Bindings whose action returned an error.
    pub failures: Vec<DispatchFailure>,
}

impl DispatchReport {
    /// Returns true if at least one binding matched and was invoked.
    pub fn is_handled(&self) -> bool {
        !self.triggered.is_empty() || !self.failures.is_empty()
    }
}

/// A binding whose action failed during dispatch.
#[derive(Debug)]
pub struct DispatchFailure {
    pub id: String,
    pub error: ActionError,
}

impl<H: Host> Keymaps<H> {
    /// Create an empty registry using the default `+` separator.
    pub fn new(host: Arc<H>) -> Self {
        Self::with_separator(host, DEFAULT_SEPARATOR)
    }

    /// Create an empty registry whose combinations use `separator`.
    pub fn with_separator(host: Arc<H>, separator: char) -> Self {
        Self {
            inner: Arc::new(Inner {
                host,
                separator,
                bindings: Mutex::new(BTreeMap::new()),
                operation: ReentrantMutex::new(()),
            }),
        }
    }

    pub fn host(&self) -> &Arc<H> {
        &self.inner.host
    }

    pub fn separator(&self) -> char {
        self.inner.separator
    }

    /// Register `combo` globally, suppressing the default action when triggered.
    ///
    /// # Errors
    ///
    /// Returns `KeymapError` if the combination cannot be parsed; nothing is
    /// registered in that case.
    pub fn register(
        &self,
        combo: &str,
        action: impl Into<Action<H>>,
    ) -> Result<Arc<KeyBind<H>>, KeymapError> {
        self.register_with(combo, action, TriggerScope::global(), true)
    }

    /// Register `combo` with an explicit scope and default-suppression flag.
    ///
    /// A new storage key emits `keymap:add`; an existing one is replaced and
    /// emits `keymap:update`.
    ///
    /// # Errors
    ///
    /// Returns `KeymapError` if the combination cannot be parsed.
    pub fn register_with(
        &self,
        combo: &str,
        action: impl Into<Action<H>>,
        scope: impl Into<TriggerScope<H>>,
        prevent_default: bool,
    ) -> Result<Arc<KeyBind<H>>, KeymapError> {
        let parsed = parse_combination(combo, self.inner.separator)?;
        let _operation = self.serialize();
        let bind = Arc::new(KeyBind {
            id: parsed.storage_key(),
            key: parsed.key().to_string(),
            modifiers: parsed.modifier_string(),
            action: action.into(),
            scope: scope.into(),
            prevent_default,
        });

        let previous = self.lock().insert(bind.id.clone(), Arc::clone(&bind));

        match previous {
            Some(previous) => {
                tracing::debug!(id = %bind.id, action = bind.action.label(), "Keybinding updated");
                self.emit(&Notification::Update {
                    bind: &bind,
                    previous: &previous,
                });
            }
            None => {
                tracing::debug!(id = %bind.id, action = bind.action.label(), "Keybinding added");
                self.emit(&Notification::Add(&bind));
            }
        }

        Ok(bind)
    }

    /// Register the stock editor bindings (see `defaults`).
    ///
    /// The table is written with `+`; it is rewritten to this registry's separator.
    pub fn register_defaults(&self) -> Result<usize, KeymapError> {
        let separator = self.inner.separator.to_string();
        let _operation = self.serialize();
        for default in DEFAULT_BINDINGS {
            self.register_with(
                &default.keys.replace(DEFAULT_SEPARATOR, &separator),
                default.command,
                default.scope,
                default.prevent_default,
            )?;
        }
        Ok(DEFAULT_BINDINGS.len())
    }

    /// Remove the binding stored under `storage_key`.
    ///
    /// Returns false, without emitting anything, when no such binding exists.
    pub fn remove(&self, storage_key: &str) -> bool {
        let _operation = self.serialize();
        let removed = self.lock().remove(storage_key);
        match removed {
            Some(bind) => {
                tracing::debug!(id = %bind.id, "Keybinding removed");
                self.emit(&Notification::Remove(&bind));
                true
            }
            None => false,
        }
    }

    /// Remove every binding, emitting `keymap:remove` for each.
    pub fn clear(&self) {
        let _operation = self.serialize();
        let drained = std::mem::take(&mut *self.lock());
        for bind in drained.values() {
            self.emit(&Notification::Remove(bind));
        }
        tracing::debug!(count = drained.len(), "Keybindings cleared");
    }

    pub fn get(&self, storage_key: &str) -> Option<Arc<KeyBind<H>>> {
        self.lock().get(storage_key).cloned()
    }

    pub fn contains(&self, storage_key: &str) -> bool {
        self.lock().contains_key(storage_key)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// All bindings, ordered by storage key.
    pub fn bindings(&self) -> Vec<Arc<KeyBind<H>>> {
        self.lock().values().cloned().collect()
    }

    pub fn summaries(&self) -> Vec<BindingSummary> {
        self.lock().values().map(|bind| bind.summary()).collect()
    }

    /// Storage key a combination would be registered under.
    ///
    /// # Errors
    ///
    /// Returns `KeymapError` if the combination cannot be parsed.
    pub fn storage_key_for(&self, combo: &str) -> Result<String, KeymapError> {
        parse_combination(combo, self.inner.separator).map(|parsed| parsed.storage_key())
    }

    /// Dispatch one keyboard event.
    ///
    /// For every binding matching the event's canonical (modifiers, key) pair whose
    /// scope is active: suppress the default action if requested, invoke the action,
    /// then emit `keymap:emit` and `keymap:emit:<storage key>`.
    pub fn dispatch(&self, event: &KeyboardEvent) -> DispatchReport {
        let separator = self.inner.separator;
        let modifiers = modifier_string_from_event(event, separator);
        let key = event_key(event);
        let id = storage_key(&modifiers, &key, separator);

        let _operation = self.serialize();
        let candidates: Vec<Arc<KeyBind<H>>> = self
            .lock()
            .get(&id)
            .filter(|bind| bind.matches(&modifiers, &key))
            .cloned()
            .into_iter()
            .collect();

        let host = self.inner.host.as_ref();
        let mut report = DispatchReport::default();

        for bind in candidates {
            if !bind.scope.is_active(host, event) {
                tracing::trace!(id = %bind.id, scope = bind.scope.name(), "Keybinding scope inactive");
                continue;
            }

            if bind.prevent_default {
                event.prevent_default();
            }

            match bind.action.invoke(host) {
                Ok(()) => {
                    tracing::trace!(id = %bind.id, action = bind.action.label(), "Keybinding triggered");
                    host.emit(&Notification::Triggered { bind: &bind, event });
                    host.emit(&Notification::TriggeredId { bind: &bind, event });
                    report.triggered.push(bind.id.clone());
                }
                Err(error) => {
                    tracing::warn!(id = %bind.id, action = bind.action.label(), error = %error, "Keybinding action failed");
                    report.failures.push(DispatchFailure {
                        id: bind.id.clone(),
                        error,
                    });
                }
            }
        }

        report
    }

    fn emit(&self, notification: &Notification<'_, H>) {
        self.inner.host.emit(notification);
    }

    fn serialize(&self) -> ReentrantMutexGuard<'_, ()> {
        self.inner.operation.lock()
    }

    fn lock(&self) -> MutexGuard<'_, BindingMap<H>> {
        self.inner
            .bindings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<H: Host> Clone for Keymaps<H> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
