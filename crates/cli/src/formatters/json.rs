//! JSON formatter implementation.

use anyhow::Result;

use crate::formatters::{CheckOutput, Formatter};

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_check(&self, output: &CheckOutput) -> Result<String> {
        Ok(serde_json::to_string_pretty(output)?)
    }
}
