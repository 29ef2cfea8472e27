//! Concatenation report
//!
//! Records which fragments went into the output and which were skipped, and
//! renders that record as jsonl or json for `--report`.

use serde::Serialize;
use std::path::Path;

use crate::core::error::GoverError;
use crate::core::paths::normalize_path;

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    /// One JSON object per fragment, then a summary line
    #[default]
    Jsonl,
    /// A single JSON document
    Json,
}

/// Error information attached to a skipped fragment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportError {
    pub code: String,
    pub message: String,
}

impl From<&GoverError> for ReportError {
    fn from(err: &GoverError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }
}

/// What happened to one matched fragment, in traversal order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Fragment {
    /// Appended to the buffer; `bytes` is what was appended after header stripping
    Merged { path: String, bytes: usize },
    /// Left out because it could not be read
    Skipped { path: String, error: ReportError },
}

impl Fragment {
    pub fn path(&self) -> &str {
        match self {
            Fragment::Merged { path, .. } | Fragment::Skipped { path, .. } => path,
        }
    }
}

/// Outcome of a single concatenation
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConcatReport {
    pub root: String,
    pub output: String,

    /// Mode of the single header carried by the output, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,

    pub bytes_written: usize,
    pub fragments: Vec<Fragment>,
}

#[derive(Serialize)]
struct Summary<'a> {
    kind: &'static str,
    root: &'a str,
    output: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    mode: Option<&'a str>,
    merged: usize,
    skipped: usize,
    bytes_written: usize,
}

impl ConcatReport {
    pub fn new(root: &Path, output: &Path) -> Self {
        Self {
            root: normalize_path(root),
            output: normalize_path(output),
            ..Default::default()
        }
    }

    pub fn record_merged(&mut self, path: &Path, bytes: usize) {
        self.fragments.push(Fragment::Merged {
            path: normalize_path(path),
            bytes,
        });
    }

    pub fn record_skipped(&mut self, err: &GoverError) {
        self.fragments.push(Fragment::Skipped {
            path: normalize_path(err.path()),
            error: ReportError::from(err),
        });
    }

    pub fn merged(&self) -> impl Iterator<Item = &Fragment> {
        self.fragments
            .iter()
            .filter(|f| matches!(f, Fragment::Merged { .. }))
    }

    pub fn skipped(&self) -> impl Iterator<Item = &Fragment> {
        self.fragments
            .iter()
            .filter(|f| matches!(f, Fragment::Skipped { .. }))
    }

    fn summary(&self) -> Summary<'_> {
        Summary {
            kind: "summary",
            root: &self.root,
            output: &self.output,
            mode: self.mode.as_deref(),
            merged: self.merged().count(),
            skipped: self.skipped().count(),
            bytes_written: self.bytes_written,
        }
    }

    /// Render the report in the given format
    pub fn render(&self, format: ReportFormat, pretty: bool) -> String {
        match format {
            ReportFormat::Jsonl => self.render_jsonl(pretty),
            ReportFormat::Json => self.render_json(pretty),
        }
    }

    fn render_jsonl(&self, pretty: bool) -> String {
        let mut values: Vec<serde_json::Value> = self
            .fragments
            .iter()
            .filter_map(|f| serde_json::to_value(f).ok())
            .collect();
        values.extend(serde_json::to_value(self.summary()).ok());

        values
            .iter()
            .filter_map(|v| {
                if pretty {
                    serde_json::to_string_pretty(v).ok()
                } else {
                    serde_json::to_string(v).ok()
                }
            })
            .collect::<Vec<_>>()
            .join(if pretty { "\n\n" } else { "\n" })
    }

    fn render_json(&self, pretty: bool) -> String {
        let rendered = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        rendered.unwrap_or_else(|_| "{}".to_string())
    }
}
