//! Table formatter implementation.
//!
//! Responsibilities:
//! - Format keybindings as tab-separated tables.
//!
//! Does NOT handle:
//! - Other output formats.

use anyhow::Result;

use crate::formatters::{CheckOutput, Formatter};

/// Table formatter.
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format_check(&self, output: &CheckOutput) -> Result<String> {
        if output.bindings.is_empty() {
            return Ok("No keybindings configured.".to_string());
        }

        let mut text = String::from("KEYS\tACTION\tSCOPE\tPREVENT_DEFAULT\n");
        for binding in &output.bindings {
            text.push_str(&format!(
                "{}\t{}\t{}\t{}\n",
                binding.id, binding.action, binding.scope, binding.prevent_default
            ));
        }
        Ok(text)
    }
}
