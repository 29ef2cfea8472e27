//! Output file writing
//!
//! The output is opened create-or-append: existing content is kept and the new
//! concatenation lands after it. New files get 0666 before the umask.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::core::error::GoverError;

fn open_append(path: &Path) -> std::io::Result<File> {
    let mut options = OpenOptions::new();
    options.create(true).append(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o666);
    }

    options.open(path)
}

/// Append `data` to the file at `path`, creating it if needed
pub fn append_output(path: &Path, data: &[u8]) -> Result<(), GoverError> {
    let wrap = |source| GoverError::OutputWriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let mut file = open_append(path).map_err(wrap)?;
    file.write_all(data).map_err(wrap)?;
    file.flush().map_err(wrap)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_creates_missing_file() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("out.coverprofile");

        append_output(&out, b"mode: set\n").unwrap();
        assert_eq!(fs::read(&out).unwrap(), b"mode: set\n");
    }

    #[test]
    fn test_empty_write_creates_empty_file() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("out.coverprofile");

        append_output(&out, b"").unwrap();
        assert!(out.exists());
        assert_eq!(fs::read(&out).unwrap().len(), 0);
    }

    #[test]
    fn test_appends_to_existing_file() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("out.coverprofile");
        fs::write(&out, "existing\n").unwrap();

        append_output(&out, b"more\n").unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), "existing\nmore\n");
    }

    #[test]
    fn test_missing_parent_fails() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("no/such/dir/out.coverprofile");

        let err = append_output(&out, b"x").unwrap_err();
        assert!(matches!(err, GoverError::OutputWriteFailed { .. }));
        assert_eq!(err.path(), out.as_path());
    }

    #[cfg(unix)]
    #[test]
    fn test_new_file_is_world_readable() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempdir().unwrap();
        let out = temp.path().join("out.coverprofile");
        append_output(&out, b"").unwrap();

        let mode = fs::metadata(&out).unwrap().permissions().mode();
        // 0666 minus whatever the umask removes; owner rw always survives a sane umask.
        assert_eq!(mode & 0o600, 0o600);
        assert_eq!(mode & 0o111, 0);
    }
}
