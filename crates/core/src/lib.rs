//! Keybinding registry and dispatcher for editor hosts.
//!
//! Callers register key combinations (`"ctrl+shift+z"`) bound to an action and a
//! trigger scope; a single keyboard listener dispatches every keydown to the
//! matching, scope-active binding.
//!
//! ```
//! use std::sync::Arc;
//! use keymaps_core::{ActionError, Host, KeyboardEvent, Keymaps, TriggerScope};
//!
//! struct Editor;
//!
//! impl Host for Editor {
//!     type Element = ();
//!     fn run_command(&self, _name: &str) -> Result<(), ActionError> { Ok(()) }
//!     fn selected_element(&self) -> Option<()> { None }
//!     fn active_text_edit_target(&self) -> Option<()> { None }
//! }
//!
//! let keymaps = Keymaps::new(Arc::new(Editor));
//! keymaps
//!     .register_with("shift+n", "core:new-page", TriggerScope::global_except_text_edit(), true)
//!     .unwrap();
//!
//! let event = KeyboardEvent::new("N").with_shift();
//! assert!(keymaps.dispatch(&event).is_handled());
//! assert!(event.default_prevented());
//! ```

pub mod action;
pub mod backend;
pub mod combo;
pub mod constants;
pub mod defaults;
pub mod error;
pub mod event;
pub mod host;
pub mod keybind;
pub mod listener;
pub mod notify;
pub mod registry;
pub mod scope;

pub use action::{Action, Callback};
pub use combo::{Combination, Modifier, ModifierFlags, parse_combination};
pub use error::{ActionError, KeymapError};
pub use event::{EventTarget, KeyboardEvent};
pub use host::Host;
pub use keybind::{BindingSummary, KeyBind};
pub use listener::{Attachment, KeyEventHub, KeyListener, KeySource, ListenerId};
pub use notify::Notification;
pub use registry::{DispatchFailure, DispatchReport, Keymaps};
pub use scope::{BuiltinScope, ScopeCondition, TriggerScope};
