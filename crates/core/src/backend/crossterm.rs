//! Crossterm key event conversion.
//!
//! Responsibilities:
//! - Convert crossterm `KeyEvent`s into `KeyboardEvent`s with browser-style key names.
//!
//! Does NOT handle:
//! - Filtering key release/repeat events (callers decide which kinds to publish).
//!
//! Invariants:
//! - `SUPER` and `META` both map to the `meta` flag.
//! - `BackTab` is reported as `Tab` with shift held.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::event::KeyboardEvent;

impl From<KeyEvent> for KeyboardEvent {
    fn from(key: KeyEvent) -> Self {
        let mut event = KeyboardEvent::new(key_name(key.code));
        event.meta = key
            .modifiers
            .intersects(KeyModifiers::SUPER | KeyModifiers::META);
        event.ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        event.alt = key.modifiers.contains(KeyModifiers::ALT);
        event.shift = key.modifiers.contains(KeyModifiers::SHIFT) || key.code == KeyCode::BackTab;
        event
    }
}

/// Browser-style `KeyboardEvent.key` value for a crossterm key code.
fn key_name(code: KeyCode) -> String {
    let name = match code {
        KeyCode::Char(c) => return c.to_string(),
        KeyCode::F(n) => return format!("F{n}"),
        KeyCode::Backspace => "Backspace",
        KeyCode::Enter => "Enter",
        KeyCode::Left => "ArrowLeft",
        KeyCode::Right => "ArrowRight",
        KeyCode::Up => "ArrowUp",
        KeyCode::Down => "ArrowDown",
        KeyCode::Home => "Home",
        KeyCode::End => "End",
        KeyCode::PageUp => "PageUp",
        KeyCode::PageDown => "PageDown",
        KeyCode::Tab | KeyCode::BackTab => "Tab",
        KeyCode::Delete => "Delete",
        KeyCode::Insert => "Insert",
        KeyCode::Esc => "Escape",
        KeyCode::CapsLock => "CapsLock",
        KeyCode::ScrollLock => "ScrollLock",
        KeyCode::NumLock => "NumLock",
        KeyCode::PrintScreen => "PrintScreen",
        KeyCode::Pause => "Pause",
        KeyCode::Menu => "ContextMenu",
        _ => "Unidentified",
    };
    name.to_string()
}
