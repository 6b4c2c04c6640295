//! Trolley CLI

use std::{io, process::ExitCode};

use tracing::error;

use trolley::cli::Cli;

/// Trolley CLI entry point
pub fn main() -> ExitCode {
    let cli = Cli::load().unwrap_or_else(|err| err.exit());

    if let Err(err) = cli.init_logging() {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized, must use eprintln for logging errors"
        )]
        {
            eprintln!("{err}");
        }

        return ExitCode::FAILURE;
    }

    let stdout = io::stdout();

    match cli.run(stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "failed to price cart");

            ExitCode::FAILURE
        }
    }
}
