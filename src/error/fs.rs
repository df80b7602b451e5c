//! File system errors

use std::io;
use std::path::Path;

use super::IconregError;

/// Creates a file not found error
pub fn not_found(path: impl Into<String>) -> IconregError {
    IconregError::FileNotFound { path: path.into() }
}

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> IconregError {
    IconregError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> IconregError {
    IconregError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Maps an I/O error raised while reading `path`, keeping "not found" distinct
pub fn from_read_error(path: &Path, err: &io::Error) -> IconregError {
    if err.kind() == io::ErrorKind::NotFound {
        not_found(path.display().to_string())
    } else {
        read_failed(path.display().to_string(), err.to_string())
    }
}
