//! Registry records and generated registry documents
//!
//! A generated document is a flat list of `<record>` elements inside a
//! `<registry>` root. Each record carries a `TextLine` field definition with
//! a title and a single resource-path value:
//!
//! ```xml
//! <record name="plone.icon.activity">
//!   <field type="plone.registry.field.TextLine">
//!     <title>Bootstrap Icon activity</title>
//!   </field>
//!   <value key="resource">++plone++bootstrap-icons/activity.svg</value>
//! </record>
//! ```

pub mod template;

pub use template::RecordTemplate;

use quick_xml::escape::{escape, partial_escape};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

/// One registry record binding a symbolic icon name to a resource path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconEntry {
    /// Registry record name, e.g. `plone.icon.activity`
    pub key: String,
    /// Title of the record's field definition
    pub title: String,
    /// Resource path served by the publishing layer
    pub resource: String,
}

impl IconEntry {
    pub fn new(
        key: impl Into<String>,
        title: impl Into<String>,
        resource: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            resource: resource.into(),
        }
    }

    fn write_record(&self, out: &mut String) {
        out.push_str("\n  <record name=\"");
        out.push_str(&escape(self.key.as_str()));
        out.push_str("\">\n    <field type=\"plone.registry.field.TextLine\">\n      <title>");
        out.push_str(&partial_escape(self.title.as_str()));
        out.push_str("</title>\n    </field>\n    <value key=\"resource\">");
        out.push_str(&partial_escape(self.resource.as_str()));
        out.push_str("</value>\n  </record>\n");
    }
}

/// An ordered registry document, rendered in full on every run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryDocument {
    entries: Vec<IconEntry>,
}

impl RegistryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: IconEntry) {
        self.entries.push(entry);
    }

    #[allow(dead_code)]
    pub fn entries(&self) -> &[IconEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize the document. Output depends only on the entries, so
    /// rendering the same entries twice is byte-identical.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(64 + self.entries.len() * 256);
        out.push_str(XML_DECLARATION);
        out.push_str("\n<registry>");
        for entry in &self.entries {
            entry.write_record(&mut out);
        }
        out.push_str("\n</registry>\n");
        out
    }
}

impl FromIterator<IconEntry> for RegistryDocument {
    fn from_iter<I: IntoIterator<Item = IconEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
