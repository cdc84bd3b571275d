//! Combiner CLI entry point
//!
//! Parses command-line arguments, runs the resolve-order-emit pipeline, and
//! turns any failure into a user-friendly diagnostic on stderr with a
//! non-zero exit status. No output is produced on failure.

use anyhow::Result;
use clap::Parser;
use combiner_cli::cli::Cli;
use combiner_cli::core::error::user_friendly_error;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.execute() {
        Ok(()) => Ok(()),
        Err(e) => {
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
