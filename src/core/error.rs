//! Error kinds
//!
//! Only two things can go wrong: a fragment cannot be read (recoverable, the
//! file is left out) or the output cannot be written (fatal to the caller).

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GoverError {
    /// A matched fragment could not be read. Logged and skipped, never returned
    /// from a concatenation.
    #[error("could not read file: {}: {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output file could not be created, opened or written.
    #[error("could not write to out: {}: {source}", path.display())]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl GoverError {
    /// Path the failure is about
    pub fn path(&self) -> &Path {
        match self {
            GoverError::ReadFailed { path, .. } | GoverError::OutputWriteFailed { path, .. } => {
                path
            }
        }
    }

    /// Stable code used in reports
    pub fn code(&self) -> &'static str {
        match self {
            GoverError::ReadFailed { .. } => "READ_FAILED",
            GoverError::OutputWriteFailed { .. } => "OUTPUT_WRITE_FAILED",
        }
    }
}
