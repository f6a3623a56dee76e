//! Output formatters for CLI results.
//!
//! Responsibilities:
//! - Select a formatter from the `--output` flag.
//! - Define the `Formatter` trait shared by all output formats.
//!
//! Does NOT handle:
//! - Writing to stdout (done by the command modules).

mod json;
mod table;

use anyhow::Result;
use keymaps_core::BindingSummary;
use serde::Serialize;

pub use json::JsonFormatter;
pub use table::TableFormatter;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Table,
}

impl OutputFormat {
    /// Parse from string.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            _ => anyhow::bail!("Invalid output format: {}. Valid options: json, table", s),
        }
    }
}

/// Result of `keymaps check`.
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutput {
    pub separator: char,
    pub source: Option<String>,
    pub bindings: Vec<BindingSummary>,
}

/// Formatter trait for different output types.
pub trait Formatter {
    fn format_check(&self, output: &CheckOutput) -> Result<String>;
}

pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter),
    }
}
