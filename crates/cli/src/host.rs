//! In-memory editor document driven by keymap commands.
//!
//! Responsibilities:
//! - Implement `keymaps_core::Host` for the interactive `listen` session.
//! - Execute the stock `core:*` commands against a list of named components.
//! - Collect status lines for the terminal loop to print.
//!
//! Does NOT handle:
//! - Terminal I/O (see `commands::listen`).
//!
//! Invariants:
//! - The selection and editing indices always point inside `components`.
//! - Every mutating command pushes the previous component list on the undo stack.

use std::sync::{Mutex, MutexGuard, PoisonError};

use keymaps_core::{ActionError, Host, Notification};

#[derive(Debug, Default)]
struct Document {
    components: Vec<String>,
    selected: Option<usize>,
    editing: Option<usize>,
    clipboard: Option<String>,
    undo: Vec<Vec<String>>,
    redo: Vec<Vec<String>>,
    output: Vec<String>,
}

impl Document {
    fn snapshot(&mut self) {
        self.undo.push(self.components.clone());
        self.redo.clear();
    }

    fn restore(&mut self, components: Vec<String>) {
        self.components = components;
        self.editing = None;
        self.selected = match self.selected {
            Some(_) if self.components.is_empty() => None,
            Some(index) => Some(index.min(self.components.len() - 1)),
            None => None,
        };
    }

    fn selected_name(&self) -> Option<&str> {
        self.selected
            .and_then(|index| self.components.get(index))
            .map(String::as_str)
    }
}

/// Editor host used by the `listen` command.
#[derive(Debug)]
pub struct EditorHost {
    document: Mutex<Document>,
}

impl EditorHost {
    pub fn new<I, S>(components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            document: Mutex::new(Document {
                components: components.into_iter().map(Into::into).collect(),
                ..Document::default()
            }),
        }
    }

    fn document(&self) -> MutexGuard<'_, Document> {
        self.document.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn components(&self) -> Vec<String> {
        self.document().components.clone()
    }

    pub fn is_editing(&self) -> bool {
        self.document().editing.is_some()
    }

    /// Append typed text to the component being edited.
    pub fn type_text(&self, text: &str) {
        let mut doc = self.document();
        if let Some(index) = doc.editing {
            doc.components[index].push_str(text);
        }
    }

    /// Remove the last character of the component being edited.
    pub fn erase_char(&self) {
        let mut doc = self.document();
        if let Some(index) = doc.editing {
            doc.components[index].pop();
        }
    }

    /// Take the status lines produced since the last call.
    pub fn drain_output(&self) -> Vec<String> {
        std::mem::take(&mut self.document().output)
    }

    /// One-line rendering of the document: `[selected]`, `*editing*`.
    pub fn render(&self) -> String {
        let doc = self.document();
        doc.components
            .iter()
            .enumerate()
            .map(|(index, name)| {
                if doc.editing == Some(index) {
                    format!("*{name}*")
                } else if doc.selected == Some(index) {
                    format!("[{name}]")
                } else {
                    name.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn step_selection(doc: &mut Document, forward: bool) {
        let len = doc.components.len();
        if len == 0 {
            return;
        }
        doc.selected = Some(match (doc.selected, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(index), true) => (index + 1) % len,
            (Some(index), false) => (index + len - 1) % len,
        });
    }
}

impl Host for EditorHost {
    type Element = usize;

    fn run_command(&self, name: &str) -> Result<(), ActionError> {
        let mut doc = self.document();
        match name {
            "core:undo" => {
                if let Some(previous) = doc.undo.pop() {
                    let current = std::mem::take(&mut doc.components);
                    doc.redo.push(current);
                    doc.restore(previous);
                }
            }
            "core:redo" => {
                if let Some(next) = doc.redo.pop() {
                    let current = std::mem::take(&mut doc.components);
                    doc.undo.push(current);
                    doc.restore(next);
                }
            }
            "core:copy" => {
                doc.clipboard = doc.selected_name().map(str::to_string);
            }
            "core:paste" => {
                if let Some(copied) = doc.clipboard.clone() {
                    doc.snapshot();
                    let at = doc.selected.map_or(doc.components.len(), |index| index + 1);
                    doc.components.insert(at, copied);
                    doc.selected = Some(at);
                }
            }
            "core:component-duplicate" => {
                if let Some(index) = doc.selected {
                    doc.snapshot();
                    let copy = doc.components[index].clone();
                    doc.components.insert(index + 1, copy);
                    doc.selected = Some(index + 1);
                }
            }
            "core:component-delete" => {
                if let Some(index) = doc.selected {
                    doc.snapshot();
                    doc.components.remove(index);
                    doc.selected = None;
                    doc.editing = None;
                }
            }
            "core:component-next" => Self::step_selection(&mut doc, true),
            "core:component-prev" => Self::step_selection(&mut doc, false),
            "core:component-enter" => doc.editing = doc.selected,
            "core:component-exit" => doc.selected = None,
            "core:text-edit-exit" => doc.editing = None,
            other => return Err(ActionError::UnknownCommand(other.to_string())),
        }
        tracing::debug!(command = name, "Command executed");
        Ok(())
    }

    fn selected_element(&self) -> Option<usize> {
        self.document().selected
    }

    fn active_text_edit_target(&self) -> Option<usize> {
        self.document().editing
    }

    fn emit(&self, notification: &Notification<'_, Self>) {
        tracing::trace!(notification = %notification.name(), "Keymap notification");
        if let Notification::Triggered { bind, .. } = notification {
            let line = format!("{} -> {}", bind.id(), bind.action().label());
            self.document().output.push(line);
        }
    }
}
