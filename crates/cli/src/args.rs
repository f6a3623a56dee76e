//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not read `KEYMAPS_*` variables; `ConfigLoader::from_env` does that
//!   for every value not given on the command line.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "keymaps")]
#[command(about = "Inspect and try out editor keybindings", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  keymaps check\n  keymaps --config ./keymaps.json check --output json\n  keymaps canonical 'Shift+Ctrl+Z' esc\n  keymaps listen --log-dir /tmp/keymaps\n"
)]
pub struct Cli {
    /// Path to the keymap file (defaults to the platform config directory)
    #[arg(short, long = "config", global = true, value_name = "PATH")]
    pub config_path: Option<PathBuf>,

    /// Separator between combination tokens
    #[arg(short, long, global = true)]
    pub separator: Option<char>,

    /// Skip the stock editor bindings
    #[arg(long, global = true)]
    pub no_defaults: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load, validate and list the effective keybindings
    Check {
        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        output: String,
    },

    /// Print the canonical storage key of each combination
    Canonical {
        /// Combinations such as `Shift+Ctrl+Z`
        #[arg(required = true)]
        combos: Vec<String>,
    },

    /// Run an interactive session that dispatches terminal key presses
    Listen {
        /// Directory for the session log file
        #[arg(long, default_value = "logs")]
        log_dir: PathBuf,

        /// Components of the demo document
        #[arg(long, value_delimiter = ',', default_value = "header,hero,footer")]
        components: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["keymaps", "check", "--separator", "-", "--no-defaults"]);
        assert_eq!(cli.separator, Some('-'));
        assert!(cli.no_defaults);
        assert!(matches!(cli.command, Commands::Check { ref output } if output == "table"));
    }

    #[test]
    fn test_listen_components() {
        let cli = Cli::parse_from(["keymaps", "listen", "--components", "a,b"]);
        match cli.command {
            Commands::Listen { components, .. } => assert_eq!(components, ["a", "b"]),
            other => panic!("unexpected command {other:?}"),
        }
    }
}
