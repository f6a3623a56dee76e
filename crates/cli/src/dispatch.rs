//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Logging setup (see `main()`).

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::commands;

/// Dispatch CLI commands to their respective handlers.
pub(crate) async fn run_command(cli: Cli) -> Result<()> {
    let config = commands::load_config(&cli)?;

    match cli.command {
        Commands::Check { ref output } => commands::check::run(&config, output)?,
        Commands::Canonical { ref combos } => commands::canonical::run(&config, combos)?,
        Commands::Listen { components, .. } => commands::listen::run(&config, components).await?,
    }

    Ok(())
}
