//! Path helpers
//!
//! Extension matching follows the coverage tooling convention: the extension is
//! the final dot-delimited suffix of the file name, dot included, compared
//! case-sensitively. A file named `.coverprofile` therefore has the extension
//! `.coverprofile`, unlike `Path::extension`.

use std::path::Path;

/// Extension of coverage profile fragments
pub const DEFAULT_EXTENSION: &str = ".coverprofile";

/// Directory name that is never descended into
pub const DEFAULT_SKIP_DIR: &str = "vendor";

/// Default output file name
pub const DEFAULT_OUTPUT: &str = "gover.coverprofile";

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Final dot-delimited suffix of the file name, including the dot
pub fn dot_extension(path: &Path) -> Option<&str> {
    let name = path.file_name()?.to_str()?;
    name.rfind('.').map(|idx| &name[idx..])
}

/// Whether `path` ends in exactly `extension`
pub fn has_extension(path: &Path, extension: &str) -> bool {
    dot_extension(path) == Some(extension)
}

/// Whether a directory entry name is one of the skipped directory names
pub fn is_skipped_name(path: &Path, skip_dirs: &[String]) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| skip_dirs.iter().any(|skip| skip == name))
        .unwrap_or(false)
}
