//! Record templates with literal placeholder substitution
//!
//! Placeholders are replaced verbatim: `##KEY##` with the icon key,
//! `##NAME##` with the display name and `##EXT##` with the file extension.
//! Markup escaping happens when the document is rendered, not here.

use serde::{Deserialize, Serialize};

use super::IconEntry;

pub const KEY_PLACEHOLDER: &str = "##KEY##";
pub const NAME_PLACEHOLDER: &str = "##NAME##";
pub const EXT_PLACEHOLDER: &str = "##EXT##";

/// Templates for the three parts of a registry record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordTemplate {
    /// Record name template, e.g. `plone.icon.##KEY##`
    pub record: String,
    /// Field title template, e.g. `Bootstrap Icon ##NAME##`
    pub title: String,
    /// Resource path template, e.g. `++plone++bootstrap-icons/##KEY##.##EXT##`
    pub resource: String,
}

impl RecordTemplate {
    pub fn new(
        record: impl Into<String>,
        title: impl Into<String>,
        resource: impl Into<String>,
    ) -> Self {
        Self {
            record: record.into(),
            title: title.into(),
            resource: resource.into(),
        }
    }

    /// Fill the templates for one icon
    pub fn entry(&self, key: &str, name: &str, ext: &str) -> IconEntry {
        IconEntry {
            key: substitute(&self.record, key, name, ext),
            title: substitute(&self.title, key, name, ext),
            resource: substitute(&self.resource, key, name, ext),
        }
    }

    /// A template that never mentions `##KEY##` in the record name would
    /// give every entry the same record name.
    pub fn has_key_placeholder(&self) -> bool {
        self.record.contains(KEY_PLACEHOLDER)
    }
}

fn substitute(template: &str, key: &str, name: &str, ext: &str) -> String {
    template
        .replace(KEY_PLACEHOLDER, key)
        .replace(NAME_PLACEHOLDER, name)
        .replace(EXT_PLACEHOLDER, ext)
}
