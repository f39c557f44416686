//! Directory and output file creation.

use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::Path;

use crate::errors::Result;

/// Creates `path` and its missing parents.
///
/// An existing directory is logged and tolerated; returns whether the
/// directory was newly created. Every other failure, including a regular
/// file sitting at `path`, is returned as an error.
pub fn ensure_dir(path: &Path) -> Result<bool> {
    if path.as_os_str().is_empty() {
        return Ok(false);
    }
    match fs::create_dir(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => {
            tracing::debug!("{} already exists; continuing...", path.display());
            Ok(false)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            fs::create_dir_all(path)?;
            Ok(true)
        }
        Err(e) => Err(e.into()),
    }
}

/// Creates (or truncates) an output file, creating its parent directories.
pub fn create_output_file(path: &Path) -> Result<BufWriter<File>> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    Ok(BufWriter::new(File::create(path)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_ensure_dir_creates_nested() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("a/b/c");
        assert!(ensure_dir(&target).unwrap());
        assert!(target.is_dir());
    }

    #[test]
    fn test_ensure_dir_tolerates_existing() {
        let dir = tempdir().unwrap();
        assert!(!ensure_dir(dir.path()).unwrap());
    }

    #[test]
    fn test_ensure_dir_rejects_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("plain");
        fs::write(&file, "x").unwrap();
        assert!(ensure_dir(&file).is_err());
    }

    #[test]
    fn test_create_output_file_truncates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sub/out.py");
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(&path, "old content\n").unwrap();

        let mut writer = create_output_file(&path).unwrap();
        writer.write_all(b"new\n").unwrap();
        drop(writer);

        assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
    }
}
