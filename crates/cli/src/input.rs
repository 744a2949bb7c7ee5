use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("File [{}] does not exist", .0.display())]
    NotFound(PathBuf),
    #[error("File [{}] is not a regular file", .0.display())]
    NotAFile(PathBuf),
    #[error("Failed to read [{}]: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Reads the source file to analyze, rejecting missing paths and directories.
pub fn read_source(path: &Path) -> Result<String, InputError> {
    if !path.exists() {
        return Err(InputError::NotFound(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(InputError::NotAFile(path.to_path_buf()));
    }
    std::fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Main.java");
        std::fs::write(&path, "class Main {}").unwrap();
        assert_eq!(read_source(&path).unwrap(), "class Main {}");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Missing.java");
        let err = read_source(&path).unwrap_err();
        assert!(matches!(err, InputError::NotFound(_)));
        assert_eq!(
            err.to_string(),
            format!("File [{}] does not exist", path.display())
        );
    }

    #[test]
    fn test_directory_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_source(dir.path()).unwrap_err();
        assert!(matches!(err, InputError::NotAFile(_)));
        assert!(err.to_string().ends_with("is not a regular file"));
    }
}
