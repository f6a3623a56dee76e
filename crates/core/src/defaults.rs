//! Stock editor keybindings.
//!
//! Bindings are command names only; the host decides what each command does.
//! Both `meta` and `ctrl` variants are listed so the table works on every platform.

use crate::scope::BuiltinScope;

/// One entry of the stock keymap table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultBinding {
    pub keys: &'static str,
    pub command: &'static str,
    pub scope: BuiltinScope,
    pub prevent_default: bool,
}

const fn bind(
    keys: &'static str,
    command: &'static str,
    scope: BuiltinScope,
) -> DefaultBinding {
    DefaultBinding {
        keys,
        command,
        scope,
        prevent_default: true,
    }
}

pub const DEFAULT_BINDINGS: &[DefaultBinding] = &[
    bind("meta+z", "core:undo", BuiltinScope::GlobalExceptTextEdit),
    bind("ctrl+z", "core:undo", BuiltinScope::GlobalExceptTextEdit),
    bind("meta+shift+z", "core:redo", BuiltinScope::GlobalExceptTextEdit),
    bind("ctrl+shift+z", "core:redo", BuiltinScope::GlobalExceptTextEdit),
    bind("meta+c", "core:copy", BuiltinScope::GlobalExceptTextEdit),
    bind("ctrl+c", "core:copy", BuiltinScope::GlobalExceptTextEdit),
    bind("meta+v", "core:paste", BuiltinScope::GlobalExceptTextEdit),
    bind("ctrl+v", "core:paste", BuiltinScope::GlobalExceptTextEdit),
    bind("meta+d", "core:component-duplicate", BuiltinScope::ComponentSelection),
    bind("ctrl+d", "core:component-duplicate", BuiltinScope::ComponentSelection),
    bind("backspace", "core:component-delete", BuiltinScope::GlobalExceptTextEdit),
    bind("delete", "core:component-delete", BuiltinScope::GlobalExceptTextEdit),
    bind("s", "core:component-next", BuiltinScope::GlobalExceptTextEdit),
    bind("w", "core:component-prev", BuiltinScope::GlobalExceptTextEdit),
    bind("d", "core:component-enter", BuiltinScope::GlobalExceptTextEdit),
    bind("a", "core:component-exit", BuiltinScope::GlobalExceptTextEdit),
    DefaultBinding {
        keys: "escape",
        command: "core:text-edit-exit",
        scope: BuiltinScope::TextEdit,
        prevent_default: false,
    },
];
