//! `keymaps listen`: dispatch live terminal key presses to the registry.
//!
//! Responsibilities:
//! - Install the configured bindings on an `EditorHost` registry.
//! - Feed crossterm key presses through a `KeyEventHub` the registry is attached to.
//! - Print triggered bindings and the document after every key.
//!
//! Invariants:
//! - `ctrl+q` ends the session and is never dispatched.
//! - Key presses that no binding consumed become typed text while editing.

use std::io::Write;
use std::sync::Arc;

use anyhow::{Context, Result};
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use keymaps_config::KeymapConfig;
use keymaps_core::{EventTarget, KeyEventHub, KeyboardEvent};

use crate::host::EditorHost;
use crate::terminal::TerminalGuard;

fn is_quit(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
}

/// Raw mode needs explicit carriage returns.
fn write_line(out: &mut impl Write, line: &str) -> Result<()> {
    write!(out, "{line}\r\n")?;
    out.flush()?;
    Ok(())
}

pub async fn run(config: &KeymapConfig, components: Vec<String>) -> Result<()> {
    let host = Arc::new(EditorHost::new(components));
    let keymaps = config.create_keymaps(Arc::clone(&host));
    let installed = config
        .install(&keymaps)
        .context("Failed to install keybindings")?;

    let hub = Arc::new(KeyEventHub::new());
    let _attachment = keymaps.attach(Arc::clone(&hub));
    tracing::info!(installed, "Listen session started");

    let _terminal = TerminalGuard::enter()?;
    let mut stdout = std::io::stdout();
    write_line(&mut stdout, "Press keys to dispatch them; ctrl+q quits.")?;
    write_line(&mut stdout, &host.render())?;

    let mut reader = EventStream::new();
    while let Some(event) = reader.next().await {
        let Event::Key(key) = event.context("Failed to read terminal event")? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if is_quit(&key) {
            break;
        }

        let mut event = KeyboardEvent::from(key);
        if host.is_editing() {
            event = event.with_target(EventTarget::input("text"));
        }
        hub.publish(&event);

        if !event.default_prevented() && host.is_editing() {
            let plain = !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER);
            match key.code {
                KeyCode::Char(c) if plain => host.type_text(&c.to_string()),
                KeyCode::Backspace => host.erase_char(),
                _ => {}
            }
        }

        for line in host.drain_output() {
            write_line(&mut stdout, &line)?;
        }
        write_line(&mut stdout, &host.render())?;
    }

    tracing::info!("Listen session ended");
    Ok(())
}
