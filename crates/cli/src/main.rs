//! Keymaps CLI - inspect and try out editor keybindings.
//!
//! Responsibilities:
//! - Parse command-line arguments.
//! - Initialize logging: stderr for one-shot commands, a daily log file for `listen`.
//! - Map command failures to structured exit codes.
//!
//! Does NOT handle:
//! - Keybinding semantics (see `keymaps-core`).
//! - Configuration precedence (see `keymaps-config`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` values reach the loader.
//! - `listen` never logs to the terminal it is drawing on.

mod args;
mod commands;
mod dispatch;
mod error;
mod formatters;
mod host;
mod terminal;

use args::{Cli, Commands};
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use keymaps_config::ConfigLoader;
use tracing_appender::non_blocking;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_FILE_NAME: &str = "keymaps.log";

fn init_logging(cli: &Cli) -> Option<WorkerGuard> {
    if let Commands::Listen { ref log_dir, .. } = cli.command {
        let file_appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_NAME);
        let (writer, guard) = non_blocking(file_appender);
        tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(fmt::layer().with_writer(writer).with_ansi(false))
            .init();
        Some(guard)
    } else {
        tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
        None
    }
}

#[tokio::main]
async fn main() {
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    // Must live for the whole run so buffered log lines are flushed.
    let _log_guard = init_logging(&cli);

    let exit_code = match run_command(cli).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    drop(_log_guard);
    std::process::exit(exit_code.as_i32());
}
