//! Error types and handling for iconreg
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`fs`]: File system errors
//! - [`config`]: Configuration errors
//! - [`registry`]: Icon metadata and registry document errors

pub mod config;
pub mod fs;
pub mod registry;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for iconreg operations
#[derive(Error, Diagnostic, Debug)]
pub enum IconregError {
    // File system errors
    #[error("Icon directory not found: {path}")]
    #[diagnostic(
        code(iconreg::fs::directory_not_found),
        help("Check the `source` of the icon set or pass --root to point at the package")
    )]
    DirectoryNotFound { path: String },

    #[error("File not found: {path}")]
    #[diagnostic(code(iconreg::fs::not_found))]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(iconreg::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(
        code(iconreg::fs::write_failed),
        help("Output directories are not created automatically")
    )]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(iconreg::fs::io_error))]
    IoError { message: String },

    // Configuration errors
    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(iconreg::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(iconreg::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(iconreg::config::invalid))]
    ConfigInvalid { message: String },

    #[error("Unsupported shell: {shell}")]
    #[diagnostic(
        code(iconreg::config::unsupported_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnsupportedShell { shell: String },

    // Registry errors
    #[error("Failed to parse icon metadata: {path}: {reason}")]
    #[diagnostic(
        code(iconreg::registry::metadata_parse_failed),
        help("Icon metadata must be a JSON object mapping codes to labels")
    )]
    MetadataParseFailed { path: String, reason: String },

    #[error("Failed to parse registry document: {path}: {reason}")]
    #[diagnostic(code(iconreg::registry::xml_parse_failed))]
    XmlParseFailed { path: String, reason: String },

    #[error("Record without a name attribute in {path}")]
    #[diagnostic(code(iconreg::registry::missing_name))]
    RecordMissingName { path: String },

    #[error("Record '{name}' has no value in {path}")]
    #[diagnostic(code(iconreg::registry::missing_value))]
    RecordMissingValue { path: String, name: String },
}

impl From<std::io::Error> for IconregError {
    fn from(err: std::io::Error) -> Self {
        IconregError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for IconregError {
    fn from(err: serde_yaml::Error) -> Self {
        IconregError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for IconregError {
    fn from(err: serde_json::Error) -> Self {
        IconregError::MetadataParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, IconregError>;
