//! Filesystem writes and reads for generated projects.

use std::fs;
use std::path::Path;

use super::error::PathError;

/// Create `path` and any missing parents.
///
/// Fails with [`PathError::NotADirectory`] when a file is in the way.
pub fn ensure_directory(path: &Path) -> Result<(), PathError> {
    if path.exists() && !path.is_dir() {
        return Err(PathError::NotADirectory(path.to_path_buf()));
    }
    fs::create_dir_all(path).map_err(|e| PathError::CreateFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Write `contents` to `path`, replacing any existing file.
pub fn write_file(path: &Path, contents: &str) -> Result<(), PathError> {
    fs::write(path, contents).map_err(|e| PathError::WriteFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Read a text file, mapping failures to [`PathError::ReadFailed`].
pub fn read_file(path: &Path) -> Result<String, PathError> {
    fs::read_to_string(path).map_err(|e| PathError::ReadFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn creates_nested_directories() {
        let temp = tempdir().unwrap();
        let nested = temp.path().join("src").join("utils");

        ensure_directory(&nested).unwrap();
        ensure_directory(&nested).unwrap();

        assert!(nested.is_dir());
        assert_eq!(fs::read_dir(&nested).unwrap().count(), 0);
    }

    #[test]
    fn file_in_the_way_is_not_a_directory() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("data");
        fs::write(&file, "not a dir").unwrap();

        let err = ensure_directory(&file).unwrap_err();

        assert!(matches!(err, PathError::NotADirectory(_)));
    }

    #[test]
    fn write_file_overwrites() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("constants.py");
        write_file(&path, "old").unwrap();
        write_file(&path, "new").unwrap();
        assert_eq!(read_file(&path).unwrap(), "new");
    }

    #[test]
    fn write_file_into_missing_directory_fails() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("missing").join("README.md");
        assert!(matches!(
            write_file(&path, "x"),
            Err(PathError::WriteFailed { .. })
        ));
    }

    #[test]
    fn missing_template_is_a_read_failure() {
        let temp = tempdir().unwrap();
        let err = read_file(&temp.path().join("README_template.md")).unwrap_err();
        assert!(matches!(err, PathError::ReadFailed { .. }));
    }
}
