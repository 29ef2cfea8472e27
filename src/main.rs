//! gover - concatenate Go coverage profiles
//!
//! gover provides:
//! - Recursive discovery of *.coverprofile fragments, skipping vendor directories
//! - A single leading `mode:` header in the concatenated output
//! - Create-or-append output writing
//! - Optional jsonl/json report of merged and skipped files

use clap::Parser;
use std::process::ExitCode;

use gover::{cli, GoverError};

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    match cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Output write failures were already logged by `cli::run`.
            if err.downcast_ref::<GoverError>().is_none() {
                eprintln!("gover: {:#}", err);
            }
            ExitCode::FAILURE
        }
    }
}
