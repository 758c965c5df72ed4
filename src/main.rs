//! Linescope: apply source tidy-ups only to the lines a diff touched.
//!
//! This is the main entry point for the `linescope` CLI. It parses arguments,
//! sets up logging, dispatches to the appropriate command handler, and
//! handles errors with proper exit codes.

use linescope::cli::Cli;
use linescope::{commands, exit_codes};
use log::LevelFilter;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    simple_logging::log_to_stderr(if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    });

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
