//! Property-based tests for combination canonicalization.
//!
//! Test coverage:
//! - Any permutation (with repeats) of modifier tokens yields the same canonical
//!   string as a keyboard event holding the same modifiers.
//! - Canonical strings never repeat a modifier and always follow meta, ctrl, alt, shift.
//! - Tokens outside the modifier set are always rejected.

use proptest::prelude::*;

use keymaps_core::combo::{event_key, modifier_string_from_event, parse_combination};
use keymaps_core::{KeyboardEvent, KeymapError, Modifier};

/// Strategy for a shuffled, possibly repeating, list of modifiers.
fn modifier_tokens_strategy() -> impl Strategy<Value = Vec<Modifier>> {
    prop::collection::vec(prop::sample::select(Modifier::ALL.to_vec()), 0..8)
        .prop_shuffle()
}

/// Strategy for key tokens: letters, digits and a few named keys.
fn key_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9]".prop_map(String::from),
        Just("Enter".to_string()),
        Just("Escape".to_string()),
        Just("F5".to_string()),
    ]
}

/// Randomize token casing.
fn cased(token: &str, upper: bool) -> String {
    if upper {
        token.to_ascii_uppercase()
    } else {
        token.to_string()
    }
}

fn event_for(modifiers: &[Modifier], key: &str) -> KeyboardEvent {
    let mut event = KeyboardEvent::new(key);
    for modifier in modifiers {
        event = match modifier {
            Modifier::Meta => event.with_meta(),
            Modifier::Ctrl => event.with_ctrl(),
            Modifier::Alt => event.with_alt(),
            Modifier::Shift => event.with_shift(),
        };
    }
    event
}

proptest! {
    #[test]
    fn parsed_and_event_modifier_strings_agree(
        modifiers in modifier_tokens_strategy(),
        key in key_strategy(),
        upper in any::<bool>(),
        separator in prop::sample::select(vec!['+', '-']),
    ) {
        let mut tokens: Vec<String> = modifiers
            .iter()
            .map(|m| cased(m.as_str(), upper))
            .collect();
        tokens.push(key.clone());
        let text = tokens.join(&separator.to_string());

        let combo = parse_combination(&text, separator).unwrap();
        let event = event_for(&modifiers, &key);

        prop_assert_eq!(combo.modifier_string(), modifier_string_from_event(&event, separator));
        prop_assert_eq!(combo.key(), event_key(&event));
    }

    #[test]
    fn canonical_strings_are_ordered_and_unique(modifiers in modifier_tokens_strategy()) {
        let mut tokens: Vec<&str> = modifiers.iter().map(|m| m.as_str()).collect();
        tokens.push("x");
        let combo = parse_combination(&tokens.join("+"), '+').unwrap();

        let rendered = combo.modifier_string();
        let parts: Vec<&str> = rendered.split('+').filter(|p| !p.is_empty()).collect();
        let positions: Vec<usize> = parts
            .iter()
            .map(|p| Modifier::ALL.iter().position(|m| m.as_str() == *p).unwrap())
            .collect();

        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn unknown_modifier_tokens_are_rejected(token in "[a-z]{2,8}") {
        prop_assume!(Modifier::from_token(&token).is_none());
        let text = format!("ctrl+{token}+t");

        let err = parse_combination(&text, '+').unwrap_err();

        prop_assert_eq!(err, KeymapError::InvalidModifier { modifier: token, combo: text });
    }
}
