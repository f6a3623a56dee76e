//! Keyboard events as seen by the dispatcher.
//!
//! Responsibilities:
//! - Carry the modifier flags, key identifier and originating element of one keydown.
//! - Record whether the host's default handling was suppressed.
//!
//! Does NOT handle:
//! - Converting terminal events (see `backend::crossterm`).
//! - Canonicalization (see `combo`).
//!
//! Invariants:
//! - Suppression is one-way: once prevented, an event stays prevented.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::constants::TEXT_INPUT_TYPES;

/// The UI element a keyboard event originated from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventTarget {
    tag: String,
    input_type: Option<String>,
}

impl EventTarget {
    /// An element with the given tag name (case-insensitive).
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            input_type: None,
        }
    }

    /// An `<input>` element with the given `type` attribute.
    pub fn input(input_type: impl Into<String>) -> Self {
        Self {
            tag: "input".to_string(),
            input_type: Some(input_type.into().to_ascii_lowercase()),
        }
    }

    /// A `<textarea>` element.
    pub fn textarea() -> Self {
        Self::new("textarea")
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn input_type(&self) -> Option<&str> {
        self.input_type.as_deref()
    }

    /// Returns true for textareas and `<input>` elements that accept free text.
    pub fn is_text_input(&self) -> bool {
        match self.tag.as_str() {
            "textarea" => true,
            "input" => self
                .input_type
                .as_deref()
                .is_none_or(|ty| TEXT_INPUT_TYPES.contains(&ty)),
            _ => false,
        }
    }
}

/// A single keydown delivered to the dispatcher.
#[derive(Debug, Default)]
pub struct KeyboardEvent {
    /// Textual key identifier (`d`, `Enter`, `ArrowUp`, ...).
    pub key: String,
    pub meta: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    /// Element that had focus when the key was pressed.
    pub target: Option<EventTarget>,
    default_prevented: AtomicBool,
}

impl KeyboardEvent {
    /// Create an event for `key` with no modifiers held.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn with_target(mut self, target: EventTarget) -> Self {
        self.target = Some(target);
        self
    }

    /// Suppress the host's default handling of this event.
    pub fn prevent_default(&self) {
        self.default_prevented.store(true, Ordering::Relaxed);
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented.load(Ordering::Relaxed)
    }

    /// Returns true when the event came from a plain text field.
    pub fn from_text_input(&self) -> bool {
        self.target.as_ref().is_some_and(EventTarget::is_text_input)
    }
}

impl Clone for KeyboardEvent {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            meta: self.meta,
            ctrl: self.ctrl,
            alt: self.alt,
            shift: self.shift,
            target: self.target.clone(),
            default_prevented: AtomicBool::new(self.default_prevented()),
        }
    }
}
