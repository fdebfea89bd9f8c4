//! Codefence: configuration resolution for annotated fenced code blocks.
//!
//! This is the main entry point for the `codefence` CLI. It parses
//! arguments, sets up logging, dispatches to the appropriate command
//! handler, and handles errors with proper exit codes.

mod cli;
mod commands;

use cli::Cli;
use codefence::exit_codes;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "codefence=warn".into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse_args();

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
