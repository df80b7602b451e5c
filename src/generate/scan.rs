//! Directory-scan generator
//!
//! Every file directly inside the icon directory whose name ends in the
//! configured extension becomes one record, keyed by the file name without
//! the extension. Records are sorted by key so repeated runs over the same
//! directory render identical documents.

use std::path::Path;

use walkdir::WalkDir;

use crate::error::{self, IconregError, Result};
use crate::registry::{RecordTemplate, RegistryDocument};
use crate::ui::Reporter;

/// Icon keys found in `dir`, sorted ascending
///
/// Subdirectories, files with other extensions and names that are not valid
/// UTF-8 are skipped. An unreadable directory entry aborts the scan.
pub fn scan_icon_keys(dir: &Path, extension: &str, reporter: &mut dyn Reporter) -> Result<Vec<String>> {
    if !dir.is_dir() {
        return Err(IconregError::DirectoryNotFound {
            path: dir.display().to_string(),
        });
    }

    let suffix = format!(".{}", extension.trim_start_matches('.'));
    let mut keys = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).display().to_string();
            error::fs::read_failed(path, e.to_string())
        })?;
        if entry.file_type().is_dir() {
            continue;
        }

        let Some(file_name) = entry.file_name().to_str() else {
            reporter.detail(&format!("skipping non UTF-8 name {}", entry.path().display()));
            continue;
        };

        match file_name.strip_suffix(&suffix) {
            Some(key) if !key.is_empty() => keys.push(key.to_string()),
            _ => reporter.detail(&format!("skipping {file_name}")),
        }
    }

    keys.sort_unstable();
    Ok(keys)
}

/// Build the registry document for an icon directory
pub fn build_document(
    name: &str,
    dir: &Path,
    extension: &str,
    template: &RecordTemplate,
    reporter: &mut dyn Reporter,
) -> Result<RegistryDocument> {
    let keys = scan_icon_keys(dir, extension, reporter)?;
    let extension = extension.trim_start_matches('.');

    reporter.start_set(name, keys.len() as u64);
    let document = keys
        .iter()
        .map(|key| {
            let entry = template.entry(key, key, extension);
            reporter.entry(&entry.key);
            entry
        })
        .collect();
    reporter.finish_set();

    Ok(document)
}
