//! `keymaps check`: validate the configuration and list the effective bindings.

use std::sync::Arc;

use anyhow::{Context, Result};
use keymaps_config::KeymapConfig;
use keymaps_core::{ActionError, Host};

use crate::formatters::{CheckOutput, OutputFormat, get_formatter};

/// Host with no document; `check` never dispatches.
struct InspectHost;

impl Host for InspectHost {
    type Element = ();

    fn run_command(&self, name: &str) -> Result<(), ActionError> {
        Err(ActionError::UnknownCommand(name.to_string()))
    }

    fn selected_element(&self) -> Option<()> {
        None
    }

    fn active_text_edit_target(&self) -> Option<()> {
        None
    }
}

pub fn run(config: &KeymapConfig, output_format: &str) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;

    let keymaps = config.create_keymaps(Arc::new(InspectHost));
    config
        .install(&keymaps)
        .context("Failed to install keybindings")?;

    let output = CheckOutput {
        separator: keymaps.separator(),
        source: config
            .source
            .as_ref()
            .map(|path| path.display().to_string()),
        bindings: keymaps.summaries(),
    };

    let text = get_formatter(format).format_check(&output)?;
    println!("{}", text.trim_end());
    Ok(())
}
