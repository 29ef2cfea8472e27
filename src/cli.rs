//! CLI module - Command-line interface definition and handler

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::core::logging::{init_logging, Verbosity};
use crate::core::paths::{DEFAULT_EXTENSION, DEFAULT_OUTPUT, DEFAULT_SKIP_DIR};
use crate::core::report::ReportFormat;
use crate::flows::concat::{ConcatOptions, Concatenator};

/// gover - concatenate Go coverage profiles into one file.
#[derive(Parser, Debug)]
#[command(name = "gover")]
#[command(
    author,
    version,
    about,
    long_about = r#"gover walks ROOT, concatenates every *.coverprofile file it finds
and appends the result to OUT.

Only the first fragment keeps its `mode:` header; the header of every later
fragment is dropped so the output is a single valid coverage profile.
Directories named `vendor` are never entered.

Examples:
    gover
    gover ./pkg coverage.out
    gover . all.coverprofile --report json --pretty
"#
)]
pub struct Cli {
    /// Directory to walk.
    #[arg(
        value_name = "ROOT",
        default_value = ".",
        env = "GOVER_ROOT",
        long_help = "Directory to walk (defaults to the current directory).\n\n\
A missing ROOT is not an error: nothing is found and an empty concatenation\n\
is written."
    )]
    pub root: PathBuf,

    /// File to append the concatenated profile to.
    #[arg(
        value_name = "OUT",
        default_value = DEFAULT_OUTPUT,
        env = "GOVER_OUT",
        long_help = "File to append the concatenated profile to.\n\n\
Created (mode 0666 before umask) if missing; existing content is kept and the\n\
new concatenation is appended after it."
    )]
    pub out: PathBuf,

    /// Extension of the files to concatenate.
    #[arg(
        long,
        value_name = "EXT",
        default_value = DEFAULT_EXTENSION,
        long_help = "Extension of the files to concatenate, dot included.\n\n\
Compared case-sensitively against the final dot-delimited suffix of each name."
    )]
    pub extension: String,

    /// Directory name to skip (repeatable).
    #[arg(
        long = "skip-dir",
        value_name = "NAME",
        default_value = DEFAULT_SKIP_DIR,
        action = clap::ArgAction::Append,
        long_help = "Directory name that is never descended into. May be given more than once.\n\n\
Giving this flag replaces the default (vendor)."
    )]
    pub skip_dirs: Vec<String>,

    /// Print a report of merged and skipped files to stdout.
    #[arg(
        long,
        value_enum,
        value_name = "FORMAT",
        long_help = "Print a report of merged and skipped files to stdout after a successful run.\n\n\
Supported values:\n\
- jsonl: one JSON object per fragment, then a summary object\n\
- json: a single JSON document\n\n\
No report is printed by default."
    )]
    pub report: Option<ReportFormat>,

    /// Pretty-print the report.
    #[arg(long)]
    pub pretty: bool,

    /// Quiet mode (errors only).
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (log every merged and skipped path).
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn options(&self) -> ConcatOptions {
        ConcatOptions {
            extension: self.extension.clone(),
            skip_dirs: self.skip_dirs.clone(),
        }
    }
}

/// Run the CLI.
///
/// A failed output write is logged here; `main` only sets the exit status.
pub fn run(cli: Cli) -> Result<()> {
    init_logging(Verbosity::from_flags(cli.quiet, cli.verbose))?;

    let report = Concatenator::new(&cli.root, &cli.out)
        .with_options(cli.options())
        .run()
        .map_err(|err| {
            tracing::error!("gover: {}", err);
            err
        })?;

    if let Some(format) = cli.report {
        println!("{}", report.render(format, cli.pretty));
    }

    Ok(())
}
