//! Keyboard listener installation.
//!
//! Responsibilities:
//! - Define the `KeySource` a host exposes for its global keydown stream.
//! - Provide `KeyEventHub`, an in-process source hosts can publish into.
//! - Attach a registry to a source and detach it again.
//!
//! Does NOT handle:
//! - Reading terminal or window-system input (hosts publish events themselves).
//!
//! Invariants:
//! - One `attach` installs exactly one listener; the returned `Attachment`
//!   removes it on `detach` or drop.
//! - Listeners are invoked without the hub lock held.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::event::KeyboardEvent;
use crate::host::Host;
use crate::registry::Keymaps;

/// Callback receiving every keydown.
pub type KeyListener = Arc<dyn Fn(&KeyboardEvent) + Send + Sync>;

/// Identifies a subscribed listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// A global stream of keydown events.
pub trait KeySource: Send + Sync {
    fn subscribe(&self, listener: KeyListener) -> ListenerId;

    /// Returns false if the listener was not subscribed.
    fn unsubscribe(&self, id: ListenerId) -> bool;
}

/// In-process keydown broadcaster.
#[derive(Default)]
pub struct KeyEventHub {
    next_id: AtomicU64,
    listeners: Mutex<Vec<(ListenerId, KeyListener)>>,
}

impl KeyEventHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver `event` to every subscribed listener, in subscription order.
    pub fn publish(&self, event: &KeyboardEvent) {
        let listeners: Vec<KeyListener> = self
            .lock()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<(ListenerId, KeyListener)>> {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl KeySource for KeyEventHub {
    fn subscribe(&self, listener: KeyListener) -> ListenerId {
        let id = ListenerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.lock().push((id, listener));
        id
    }

    fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut listeners = self.lock();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }
}

impl fmt::Debug for KeyEventHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyEventHub")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// A registry's listener installed on a `KeySource`.
///
/// Dropping the attachment detaches the listener.
#[must_use = "dropping the attachment detaches the keyboard listener"]
pub struct Attachment {
    source: Arc<dyn KeySource>,
    id: Option<ListenerId>,
}

impl Attachment {
    pub fn is_attached(&self) -> bool {
        self.id.is_some()
    }

    /// Remove the listener from its source.
    pub fn detach(mut self) -> bool {
        self.release()
    }

    fn release(&mut self) -> bool {
        match self.id.take() {
            Some(id) => {
                let removed = self.source.unsubscribe(id);
                tracing::debug!(?id, removed, "Keymap listener detached");
                removed
            }
            None => false,
        }
    }
}

impl Drop for Attachment {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Attachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attachment").field("id", &self.id).finish()
    }
}

impl<H: Host> Keymaps<H> {
    /// Install a listener on `source` that dispatches every keydown to this registry.
    ///
    /// Action failures are logged; the listener keeps running.
    pub fn attach<S>(&self, source: Arc<S>) -> Attachment
    where
        S: KeySource + 'static,
    {
        let keymaps = self.clone();
        let listener: KeyListener = Arc::new(move |event: &KeyboardEvent| {
            let report = keymaps.dispatch(event);
            for failure in &report.failures {
                tracing::error!(id = %failure.id, error = %failure.error, "Keybinding action failed");
            }
        });
        let id = source.subscribe(listener);
        tracing::debug!(?id, "Keymap listener attached");
        Attachment {
            source,
            id: Some(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_hub_delivers_to_all_listeners() {
        let hub = KeyEventHub::new();
        let count = Arc::new(AtomicUsize::new(0));
        for _ in 0..2 {
            let count = Arc::clone(&count);
            hub.subscribe(Arc::new(move |_: &KeyboardEvent| {
                count.fetch_add(1, Ordering::SeqCst);
            }));
        }
        hub.publish(&KeyboardEvent::new("a"));
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_unsubscribe_unknown_id() {
        let hub = KeyEventHub::new();
        let id = hub.subscribe(Arc::new(|_: &KeyboardEvent| {}));
        assert!(hub.unsubscribe(id));
        assert!(!hub.unsubscribe(id));
        assert_eq!(hub.listener_count(), 0);
    }
}
