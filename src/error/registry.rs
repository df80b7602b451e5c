//! Icon metadata and registry document errors

use super::IconregError;

/// Creates a metadata parse failed error
pub fn metadata_parse_failed(path: impl Into<String>, reason: impl Into<String>) -> IconregError {
    IconregError::MetadataParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an XML parse failed error
pub fn xml_parse_failed(path: impl Into<String>, reason: impl Into<String>) -> IconregError {
    IconregError::XmlParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a record missing name error
pub fn missing_name(path: impl Into<String>) -> IconregError {
    IconregError::RecordMissingName { path: path.into() }
}

/// Creates a record missing value error
pub fn missing_value(path: impl Into<String>, name: impl Into<String>) -> IconregError {
    IconregError::RecordMissingValue {
        path: path.into(),
        name: name.into(),
    }
}
