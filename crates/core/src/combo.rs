//! Canonicalization of key combinations.
//!
//! Responsibilities:
//! - Parse human-readable combination strings ("ctrl+alt+t") into a key and modifier set.
//! - Derive the same canonical modifier string from a live keyboard event.
//! - Build storage keys used by the registry.
//!
//! Does NOT handle:
//! - Storing bindings or matching scopes (see `registry`).
//!
//! Invariants:
//! - Canonical modifier strings list modifiers in the order meta, ctrl, alt, shift,
//!   without duplicates, joined by the separator.
//! - The same logical modifier set yields byte-identical strings from both sources.
//! - Keys are lowercase and never contain whitespace or the separator.

use std::fmt;

use crate::error::KeymapError;
use crate::event::KeyboardEvent;

/// One of the four supported modifier keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Modifier {
    Meta,
    Ctrl,
    Alt,
    Shift,
}

impl Modifier {
    /// All modifiers in canonical order.
    pub const ALL: [Modifier; 4] = [Modifier::Meta, Modifier::Ctrl, Modifier::Alt, Modifier::Shift];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Meta => "meta",
            Self::Ctrl => "ctrl",
            Self::Alt => "alt",
            Self::Shift => "shift",
        }
    }

    /// Look up a modifier by its (case-insensitive) name.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(token))
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Set of held modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct ModifierFlags {
    pub meta: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl ModifierFlags {
    /// Read the four modifier flags of a keyboard event.
    pub fn from_event(event: &KeyboardEvent) -> Self {
        Self {
            meta: event.meta,
            ctrl: event.ctrl,
            alt: event.alt,
            shift: event.shift,
        }
    }

    pub fn insert(&mut self, modifier: Modifier) {
        match modifier {
            Modifier::Meta => self.meta = true,
            Modifier::Ctrl => self.ctrl = true,
            Modifier::Alt => self.alt = true,
            Modifier::Shift => self.shift = true,
        }
    }

    pub fn contains(&self, modifier: Modifier) -> bool {
        match modifier {
            Modifier::Meta => self.meta,
            Modifier::Ctrl => self.ctrl,
            Modifier::Alt => self.alt,
            Modifier::Shift => self.shift,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.meta || self.ctrl || self.alt || self.shift)
    }

    /// Held modifiers in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = Modifier> + '_ {
        Modifier::ALL.into_iter().filter(|m| self.contains(*m))
    }

    /// Serialize the set in canonical order, joined by `separator`.
    pub fn to_canonical_string(&self, separator: char) -> String {
        let mut out = String::new();
        for modifier in self.iter() {
            if !out.is_empty() {
                out.push(separator);
            }
            out.push_str(modifier.as_str());
        }
        out
    }
}

/// A parsed, canonical key combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Combination {
    key: String,
    modifiers: ModifierFlags,
    separator: char,
}

impl Combination {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn modifier_flags(&self) -> ModifierFlags {
        self.modifiers
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    /// Canonical modifier string, empty when no modifiers are held.
    pub fn modifier_string(&self) -> String {
        self.modifiers.to_canonical_string(self.separator)
    }

    /// Registry key for this combination.
    pub fn storage_key(&self) -> String {
        storage_key(&self.modifier_string(), &self.key, self.separator)
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for modifier in self.modifiers.iter() {
            write!(f, "{}{}", modifier, self.separator)?;
        }
        f.write_str(&self.key)
    }
}

/// Parse a combination such as `"ctrl+alt+shift+t"`.
///
/// The last token is the key, every preceding token must be a modifier.
/// Matching is case-insensitive and tokens are trimmed.
///
/// # Examples
///
/// ```
/// use keymaps_core::combo::parse_combination;
///
/// let combo = parse_combination("Shift+Ctrl+T", '+').unwrap();
/// assert_eq!(combo.key(), "t");
/// assert_eq!(combo.modifier_string(), "ctrl+shift");
/// ```
pub fn parse_combination(text: &str, separator: char) -> Result<Combination, KeymapError> {
    let mut tokens: Vec<&str> = text.split(separator).map(str::trim).collect();

    // `split` always yields at least one token, possibly empty.
    let key = tokens.pop().unwrap_or_default();
    if key.is_empty() || key.chars().any(char::is_whitespace) {
        return Err(KeymapError::InvalidKeybind {
            combo: text.to_string(),
        });
    }

    let mut modifiers = ModifierFlags::default();
    for token in tokens {
        let modifier = Modifier::from_token(token).ok_or_else(|| KeymapError::InvalidModifier {
            modifier: token.to_string(),
            combo: text.to_string(),
        })?;
        modifiers.insert(modifier);
    }

    Ok(Combination {
        key: normalize_key(key),
        modifiers,
        separator,
    })
}

/// Canonical modifier string of a live keyboard event.
pub fn modifier_string_from_event(event: &KeyboardEvent, separator: char) -> String {
    ModifierFlags::from_event(event).to_canonical_string(separator)
}

/// Lowercased key identifier of a live keyboard event.
///
/// The space bar reports `" "`, which is stored as `space`.
pub fn event_key(event: &KeyboardEvent) -> String {
    if event.key == " " {
        return "space".to_string();
    }
    normalize_key(&event.key)
}

/// Build a storage key from a canonical modifier string and key.
pub fn storage_key(modifiers: &str, key: &str, separator: char) -> String {
    format!("{modifiers}{separator}{key}")
}

/// Lowercase a key token and resolve common aliases to the names keyboards report.
fn normalize_key(key: &str) -> String {
    let lower = key.to_lowercase();
    let canonical = match lower.as_str() {
        "esc" => "escape",
        "return" => "enter",
        "del" => "delete",
        "ins" => "insert",
        "up" => "arrowup",
        "down" => "arrowdown",
        "left" => "arrowleft",
        "right" => "arrowright",
        "pgup" => "pageup",
        "pgdn" => "pagedown",
        _ => return lower,
    };
    canonical.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_key() {
        let combo = parse_combination("d", '+').unwrap();
        assert_eq!(combo.key(), "d");
        assert!(combo.modifier_flags().is_empty());
        assert_eq!(combo.modifier_string(), "");
        assert_eq!(combo.storage_key(), "+d");
    }

    #[test]
    fn test_parse_orders_modifiers_canonically() {
        let combo = parse_combination("shift+alt+ctrl+meta+t", '+').unwrap();
        assert_eq!(combo.modifier_string(), "meta+ctrl+alt+shift");
        assert_eq!(combo.storage_key(), "meta+ctrl+alt+shift+t");
    }

    #[test]
    fn test_parse_collapses_duplicates() {
        let combo = parse_combination("ctrl+CTRL+ctrl+x", '+').unwrap();
        assert_eq!(combo.modifier_string(), "ctrl");
    }

    #[test]
    fn test_parse_is_case_insensitive_and_trims() {
        let combo = parse_combination(" Ctrl + Shift + Z ", '+').unwrap();
        assert_eq!(combo.key(), "z");
        assert_eq!(combo.modifier_string(), "ctrl+shift");
    }

    #[test]
    fn test_parse_empty_is_invalid_keybind() {
        for input in ["", "+", "ctrl+", "   "] {
            let err = parse_combination(input, '+').unwrap_err();
            assert_eq!(
                err,
                KeymapError::InvalidKeybind {
                    combo: input.to_string()
                },
                "input {input:?}"
            );
        }
    }

    #[test]
    fn test_parse_key_with_inner_whitespace_is_invalid() {
        let err = parse_combination("ctrl+page up", '+').unwrap_err();
        assert!(matches!(err, KeymapError::InvalidKeybind { .. }));
    }

    #[test]
    fn test_parse_unknown_modifier() {
        let err = parse_combination("foo+t", '+').unwrap_err();
        assert_eq!(
            err,
            KeymapError::InvalidModifier {
                modifier: "foo".to_string(),
                combo: "foo+t".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_doubled_separator_is_invalid_modifier() {
        let err = parse_combination("ctrl++t", '+').unwrap_err();
        assert!(matches!(err, KeymapError::InvalidModifier { modifier, .. } if modifier.is_empty()));
    }

    #[test]
    fn test_parse_custom_separator() {
        let combo = parse_combination("alt-ctrl-k", '-').unwrap();
        assert_eq!(combo.modifier_string(), "ctrl-alt");
        assert_eq!(combo.storage_key(), "ctrl-alt-k");
    }

    #[test]
    fn test_parse_resolves_key_aliases() {
        assert_eq!(parse_combination("esc", '+').unwrap().key(), "escape");
        assert_eq!(parse_combination("ctrl+Up", '+').unwrap().key(), "arrowup");
        assert_eq!(parse_combination("backspace", '+').unwrap().key(), "backspace");
    }

    #[test]
    fn test_event_modifier_string() {
        let event = KeyboardEvent::new("T").with_shift().with_meta().with_alt();
        assert_eq!(modifier_string_from_event(&event, '+'), "meta+alt+shift");
        assert_eq!(event_key(&event), "t");
    }

    #[test]
    fn test_event_key_space() {
        assert_eq!(event_key(&KeyboardEvent::new(" ")), "space");
        assert_eq!(
            parse_combination("ctrl+space", '+').unwrap().key(),
            event_key(&KeyboardEvent::new(" ").with_ctrl())
        );
    }

    #[test]
    fn test_display_round_trips_canonical_form() {
        let combo = parse_combination("shift+ctrl+k", '+').unwrap();
        assert_eq!(combo.to_string(), "ctrl+shift+k");
    }
}
