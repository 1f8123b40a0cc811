//! bkm: a command-line bookmark manager.
//!
//! Entry point: parses arguments, installs logging, resolves the data
//! directory and runs one command. Command output goes to stdout; failures
//! go to stderr one line each and exit with status 1.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use bkm::app::App;
use bkm::commands::{handle_command, Cli};
use bkm::platform;
use bkm::prompt::TerminalPrompt;

/// Environment variable holding the log filter, e.g. `BKM_LOG=debug`.
const LOG_ENV: &str = "BKM_LOG";

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    let data_dir = platform::resolve_data_dir(cli.data_dir.as_deref());
    tracing::debug!(data_dir = %data_dir.display(), "using data directory");
    let app = App::new(data_dir);

    match handle_command(&app, cli.command, &TerminalPrompt) {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            for message in err.messages() {
                eprintln!("{}", message);
            }
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
