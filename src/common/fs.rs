//! Common file system operations with unified error handling

use std::fs;
use std::path::Path;

use crate::error::{self, Result};

/// Read a UTF-8 file, mapping failures to file errors carrying the path
pub fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| error::fs::from_read_error(path, &e))
}

/// Overwrite `path` with `content`
///
/// The write is not atomic and parent directories are not created; a failed
/// run may leave a partially written file behind.
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)
        .map_err(|e| error::fs::write_failed(path.display().to_string(), e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IconregError;
    use tempfile::TempDir;

    #[test]
    fn test_read_missing_file_is_not_found() {
        let temp = TempDir::new().unwrap();
        let result = read_to_string(&temp.path().join("countries.json"));
        assert!(matches!(result, Err(IconregError::FileNotFound { .. })));
    }

    #[test]
    fn test_write_overwrites_existing_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("icons.xml");
        fs::write(&path, "old content that is longer").unwrap();

        write_output(&path, "new").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("profiles/default/registry/icons.xml");

        let result = write_output(&path, "content");
        assert!(matches!(result, Err(IconregError::FileWriteFailed { .. })));
    }
}
