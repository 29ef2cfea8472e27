//! Directory traversal
//!
//! Uses walkdir; `filter_entry` is the "skip this subtree" signal for skipped
//! directories, so nothing beneath them is ever read.

use std::io;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::core::paths::{has_extension, is_skipped_name};

/// Whether the walk should descend into / yield this entry
fn is_visible(entry: &DirEntry, skip_dirs: &[String]) -> bool {
    if entry.file_type().is_dir() && is_skipped_name(entry.path(), skip_dirs) {
        tracing::debug!(path = %entry.path().display(), "skipping directory");
        return false;
    }
    true
}

/// Walk `root` and yield every entry whose extension is exactly `extension`.
///
/// Siblings are visited in file-name order. Traversal errors (missing root,
/// unreadable directories) are logged and never stop the walk.
pub fn matching_files<'a>(
    root: &Path,
    extension: &'a str,
    skip_dirs: &'a [String],
) -> impl Iterator<Item = PathBuf> + 'a {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(move |entry| is_visible(entry, skip_dirs))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                log_walk_error(&err);
                None
            }
        })
        .filter(move |entry| has_extension(entry.path(), extension))
        .map(DirEntry::into_path)
}

fn log_walk_error(err: &walkdir::Error) {
    let path = err
        .path()
        .map(|p| p.display().to_string())
        .unwrap_or_default();

    match err.io_error().map(io::Error::kind) {
        Some(io::ErrorKind::NotFound) if err.depth() == 0 => {
            tracing::debug!(%path, "root does not exist, nothing to walk");
        }
        _ => tracing::warn!(%path, "could not walk: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn skip_vendor() -> Vec<String> {
        vec!["vendor".to_string()]
    }

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "").unwrap();
    }

    fn relative(root: &Path, paths: Vec<PathBuf>) -> Vec<String> {
        paths
            .iter()
            .map(|p| {
                p.strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    #[test]
    fn test_filters_by_extension() {
        let temp = tempdir().unwrap();
        touch(&temp.path().join("a.coverprofile"));
        touch(&temp.path().join("b.txt"));
        touch(&temp.path().join("c.coverprofile.bak"));
        touch(&temp.path().join("sub/d.coverprofile"));

        let skip = skip_vendor();
        let found: Vec<_> = matching_files(temp.path(), ".coverprofile", &skip).collect();
        assert_eq!(
            relative(temp.path(), found),
            vec!["a.coverprofile", "sub/d.coverprofile"]
        );
    }

    #[test]
    fn test_skips_vendor_at_any_depth() {
        let temp = tempdir().unwrap();
        touch(&temp.path().join("vendor/x.coverprofile"));
        touch(&temp.path().join("pkg/vendor/deep/y.coverprofile"));
        touch(&temp.path().join("pkg/z.coverprofile"));

        let skip = skip_vendor();
        let found: Vec<_> = matching_files(temp.path(), ".coverprofile", &skip).collect();
        assert_eq!(relative(temp.path(), found), vec!["pkg/z.coverprofile"]);
    }

    #[test]
    fn test_vendor_file_is_not_skipped() {
        let temp = tempdir().unwrap();
        touch(&temp.path().join("pkg/vendor"));

        let skip = skip_vendor();
        let names: Vec<_> = WalkDir::new(temp.path())
            .into_iter()
            .filter_entry(|e| is_visible(e, &skip))
            .filter_map(Result::ok)
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        assert!(names.contains(&"vendor".to_string()));
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_directory_does_not_stop_walk() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempdir().unwrap();
        touch(&temp.path().join("a/locked/x.coverprofile"));
        touch(&temp.path().join("z/y.coverprofile"));
        let locked = temp.path().join("a/locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        let skip = skip_vendor();
        let found: Vec<_> = matching_files(temp.path(), ".coverprofile", &skip).collect();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        // Siblings after the unreadable directory are still visited. Root can
        // read the locked directory anyway, so its content may or may not show.
        let found = relative(temp.path(), found);
        assert_eq!(found.last().map(String::as_str), Some("z/y.coverprofile"));
    }

    #[test]
    fn test_missing_root_yields_nothing() {
        let temp = tempdir().unwrap();
        let skip = skip_vendor();
        let found: Vec<_> =
            matching_files(&temp.path().join("missing"), ".coverprofile", &skip).collect();
        assert!(found.is_empty());
    }

    #[test]
    fn test_root_file_matches_itself() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("only.coverprofile");
        touch(&file);

        let skip = skip_vendor();
        let found: Vec<_> = matching_files(&file, ".coverprofile", &skip).collect();
        assert_eq!(found, vec![file]);
    }
}
