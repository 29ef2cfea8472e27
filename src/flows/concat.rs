//! Concatenator
//!
//! Walks a tree, appends every coverage profile fragment to one buffer while
//! keeping a single leading mode header, then appends the buffer to the output.

use std::fs;
use std::path::{Path, PathBuf};

use crate::backends::output::append_output;
use crate::backends::walk::matching_files;
use crate::core::error::GoverError;
use crate::core::paths::{DEFAULT_EXTENSION, DEFAULT_SKIP_DIR};
use crate::core::profile::ProfileBuffer;
use crate::core::report::ConcatReport;

/// Traversal options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConcatOptions {
    /// Extension of fragments, dot included; matched case-sensitively
    pub extension: String,
    /// Directory names never descended into
    pub skip_dirs: Vec<String>,
}

impl Default for ConcatOptions {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            skip_dirs: vec![DEFAULT_SKIP_DIR.to_string()],
        }
    }
}

/// One concatenation from `root` into `out`
#[derive(Debug, Clone)]
pub struct Concatenator {
    root: PathBuf,
    out: PathBuf,
    options: ConcatOptions,
}

impl Concatenator {
    pub fn new(root: impl Into<PathBuf>, out: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            out: out.into(),
            options: ConcatOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ConcatOptions) -> Self {
        self.options = options;
        self
    }

    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.options.extension = extension.into();
        self
    }

    pub fn skip_dirs(mut self, skip_dirs: Vec<String>) -> Self {
        self.options.skip_dirs = skip_dirs;
        self
    }

    pub fn options(&self) -> &ConcatOptions {
        &self.options
    }

    /// Walk the tree and build the buffer without touching the output.
    ///
    /// Unreadable fragments are logged and recorded as skipped.
    pub fn collect(&self) -> (ProfileBuffer, ConcatReport) {
        let mut buffer = ProfileBuffer::new();
        let mut report = ConcatReport::new(&self.root, &self.out);

        for path in matching_files(&self.root, &self.options.extension, &self.options.skip_dirs) {
            match fs::read(&path) {
                Ok(content) => {
                    let added = buffer.push(&content);
                    tracing::debug!(path = %path.display(), bytes = added, "merged fragment");
                    report.record_merged(&path, added);
                }
                Err(source) => {
                    let err = GoverError::ReadFailed { path, source };
                    tracing::warn!("gover: {}", err);
                    report.record_skipped(&err);
                }
            }
        }

        report.mode = buffer.mode().map(str::to_string);
        (buffer, report)
    }

    /// Concatenate and append the result to the output file
    pub fn run(&self) -> Result<ConcatReport, GoverError> {
        let (buffer, mut report) = self.collect();

        append_output(&self.out, buffer.as_bytes())?;

        report.bytes_written = buffer.len();
        tracing::info!(
            output = %self.out.display(),
            merged = report.merged().count(),
            skipped = report.skipped().count(),
            bytes = report.bytes_written,
            "wrote coverage profile"
        );
        Ok(report)
    }
}

/// Concatenate every `.coverprofile` under `root` (skipping `vendor`
/// directories) and append the result to `out`.
///
/// A missing or empty `root` still creates `out`, empty.
pub fn concatenate(root: impl AsRef<Path>, out: impl AsRef<Path>) -> Result<ConcatReport, GoverError> {
    Concatenator::new(root.as_ref(), out.as_ref()).run()
}
