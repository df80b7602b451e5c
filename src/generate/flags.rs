//! Metadata-driven generator for flag icon sets
//!
//! The metadata is a JSON object mapping a short code (`"US"`) to a label
//! (`"United States"`). The generated document starts with a fixed default
//! record, followed by one record per mapping item in the order the JSON
//! object lists them. Codes and labels are lower-cased before substitution.

use std::path::Path;

use serde_json::Value;

use crate::common::fs;
use crate::config::FixedRecord;
use crate::error::{self, Result};
use crate::registry::{RecordTemplate, RegistryDocument};
use crate::ui::Reporter;

/// Value substituted for `##EXT##` in flag templates
const FLAG_EXTENSION: &str = "svg";

/// A code and its human-readable label, as listed in the metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagLabel {
    pub code: String,
    pub label: String,
}

/// Parse code→label metadata, keeping the object's order
pub fn parse_labels(json: &str, path: &Path) -> Result<Vec<FlagLabel>> {
    let value: Value = serde_json::from_str(json)
        .map_err(|e| error::registry::metadata_parse_failed(path.display().to_string(), e.to_string()))?;

    let Value::Object(map) = value else {
        return Err(error::registry::metadata_parse_failed(
            path.display().to_string(),
            "expected a JSON object of code to label",
        ));
    };

    map.into_iter()
        .map(|(code, label)| match label {
            Value::String(label) => Ok(FlagLabel { code, label }),
            other => Err(error::registry::metadata_parse_failed(
                path.display().to_string(),
                format!("label of '{code}' is not a string: {other}"),
            )),
        })
        .collect()
}

/// Read and parse a metadata file
pub fn read_labels(path: &Path) -> Result<Vec<FlagLabel>> {
    let content = fs::read_to_string(path)?;
    parse_labels(&content, path)
}

/// Build the registry document: the default record, then one per label
pub fn build_document(
    name: &str,
    default_record: &FixedRecord,
    template: &RecordTemplate,
    labels: &[FlagLabel],
    reporter: &mut dyn Reporter,
) -> RegistryDocument {
    reporter.start_set(name, labels.len() as u64 + 1);

    let mut document = RegistryDocument::new();
    let default_entry = default_record.to_entry();
    reporter.entry(&default_entry.key);
    document.push(default_entry);

    for FlagLabel { code, label } in labels {
        let entry = template.entry(&code.to_lowercase(), &label.to_lowercase(), FLAG_EXTENSION);
        reporter.entry(&entry.key);
        document.push(entry);
    }

    reporter.finish_set();
    document
}
