//! Consolidated icon map
//!
//! Reads generated registry documents, collects every record's name and
//! value, and writes one JSON object mapping record name to resource path.
//! Documents are merged in order; a later document silently replaces the
//! value of a record name seen earlier.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::common::fs;
use crate::error::{self, IconregError, Result};
use crate::ui::Reporter;

/// Record name → resource path, ordered by record name
///
/// A record whose value has no text maps to `None`, serialized as `null`.
pub type IconMap = BTreeMap<String, Option<String>>;

struct OpenRecord {
    name: String,
    depth: usize,
    has_value: bool,
    value: Option<String>,
    in_value: bool,
    text_done: bool,
}

impl OpenRecord {
    fn new(name: String, depth: usize) -> Self {
        Self {
            name,
            depth,
            has_value: false,
            value: None,
            in_value: false,
            text_done: false,
        }
    }

    fn accepts_value(&self, depth: usize) -> bool {
        depth == self.depth + 1 && !self.has_value
    }

    /// Text of the value element up to its first child node
    fn collects_text(&self, depth: usize) -> bool {
        self.in_value && !self.text_done && depth == self.depth + 1
    }
}

/// Extract `(name, value)` for every `record` element of a registry document
///
/// Records may appear at any depth. Only a record's first direct `value`
/// child is used. Its value is the unescaped text before the first child
/// node, or `None` when there is no such text.
pub fn parse_records(xml: &str, path: &Path) -> Result<Vec<(String, Option<String>)>> {
    let xml_error = |reason: String| error::registry::xml_parse_failed(path.display().to_string(), reason);

    let mut reader = Reader::from_str(xml);
    let mut records = Vec::new();
    let mut current: Option<OpenRecord> = None;
    let mut depth = 0usize;
    let mut saw_root = false;

    loop {
        match reader.read_event().map_err(|e| xml_error(e.to_string()))? {
            Event::Start(start) => {
                depth += 1;
                saw_root = true;
                let local = start.local_name();
                if let Some(record) = current.as_mut() {
                    if record.in_value {
                        record.text_done = true;
                    } else if local.as_ref() == b"value" && record.accepts_value(depth) {
                        record.has_value = true;
                        record.in_value = true;
                    }
                } else if local.as_ref() == b"record" {
                    current = Some(OpenRecord::new(record_name(&start, path)?, depth));
                }
            }
            Event::Empty(start) => {
                saw_root = true;
                let local = start.local_name();
                if let Some(record) = current.as_mut() {
                    if record.in_value {
                        record.text_done = true;
                    } else if local.as_ref() == b"value" && record.accepts_value(depth + 1) {
                        record.has_value = true;
                    }
                } else if local.as_ref() == b"record" {
                    let name = record_name(&start, path)?;
                    return Err(error::registry::missing_value(path.display().to_string(), name));
                }
            }
            Event::Text(text) => {
                if let Some(record) = current.as_mut().filter(|r| r.collects_text(depth)) {
                    let text = text.unescape().map_err(|e| xml_error(e.to_string()))?;
                    record.value.get_or_insert_with(String::new).push_str(&text);
                }
            }
            Event::CData(cdata) => {
                if let Some(record) = current.as_mut().filter(|r| r.collects_text(depth)) {
                    record
                        .value
                        .get_or_insert_with(String::new)
                        .push_str(&String::from_utf8_lossy(&cdata));
                }
            }
            Event::Comment(_) | Event::PI(_) => {
                if let Some(record) = current.as_mut().filter(|r| r.in_value) {
                    record.text_done = true;
                }
            }
            Event::End(_) => {
                let closes_record = match current.as_mut() {
                    Some(record) if record.in_value && depth == record.depth + 1 => {
                        record.in_value = false;
                        false
                    }
                    Some(record) => depth == record.depth,
                    None => false,
                };
                if closes_record {
                    if let Some(OpenRecord {
                        name,
                        has_value,
                        value,
                        ..
                    }) = current.take()
                    {
                        if !has_value {
                            return Err(error::registry::missing_value(path.display().to_string(), name));
                        }
                        records.push((name, value.filter(|text| !text.is_empty())));
                    }
                }
                depth = depth.saturating_sub(1);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !saw_root {
        return Err(xml_error("document has no root element".to_string()));
    }
    if depth != 0 {
        return Err(xml_error("unexpected end of document".to_string()));
    }

    Ok(records)
}

fn record_name(start: &BytesStart<'_>, path: &Path) -> Result<String> {
    let attribute = start
        .try_get_attribute("name")
        .map_err(|e| error::registry::xml_parse_failed(path.display().to_string(), e.to_string()))?
        .ok_or_else(|| error::registry::missing_name(path.display().to_string()))?;

    let name = attribute
        .unescape_value()
        .map_err(|e| error::registry::xml_parse_failed(path.display().to_string(), e.to_string()))?;
    Ok(name.into_owned())
}

/// Merge the records of all `sources`, in order
///
/// Each source carries its document content when it is already in memory;
/// sources without content are read from disk.
pub fn merge_sources(sources: &[(PathBuf, Option<String>)], reporter: &mut dyn Reporter) -> Result<IconMap> {
    let mut map = IconMap::new();

    for (source, content) in sources {
        let records = match content {
            Some(xml) => parse_records(xml, source)?,
            None => parse_records(&fs::read_to_string(source)?, source)?,
        };
        reporter.detail(&format!("{}: {} records", source.display(), records.len()));

        for (name, value) in records {
            if let Some(previous) = map.insert(name.clone(), value) {
                reporter.detail(&format!(
                    "{name} overrides {}",
                    previous.as_deref().unwrap_or("null")
                ));
            }
        }
    }

    Ok(map)
}

/// Serialize the map as JSON with sorted keys and four-space indentation
pub fn render(map: &IconMap) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    map.serialize(&mut serializer).map_err(|e| IconregError::IoError {
        message: e.to_string(),
    })?;

    String::from_utf8(buf).map_err(|e| IconregError::IoError {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::SilentReporter;
    use tempfile::TempDir;

    const TOOLBAR: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<registry>
  <record name="plone.icon.toolbar-action/edit">
    <field type="plone.registry.field.TextLine">
      <title>Toolbar Icon Edit</title>
    </field>
    <value key="resource">++plone++bootstrap-icons/pencil.svg</value>
  </record>
  <record name="plone.icon.toolbar-action/view">
    <field type="plone.registry.field.TextLine">
      <title>Toolbar Icon View</title>
    </field>
    <value key="resource">++plone++bootstrap-icons/eye.svg</value>
  </record>
</registry>
"#;

    fn path() -> PathBuf {
        PathBuf::from("icons_toolbar.xml")
    }

    fn record(name: &str, value: &str) -> (String, Option<String>) {
        (name.to_string(), Some(value.to_string()))
    }

    #[test]
    fn test_parse_records() {
        let records = parse_records(TOOLBAR, &path()).unwrap();
        assert_eq!(
            records,
            vec![
                record("plone.icon.toolbar-action/edit", "++plone++bootstrap-icons/pencil.svg"),
                record("plone.icon.toolbar-action/view", "++plone++bootstrap-icons/eye.svg"),
            ]
        );
    }

    #[test]
    fn test_entities_are_unescaped() {
        let xml = r#"<registry><record name="a&amp;b"><value>x&lt;y</value></record></registry>"#;
        let records = parse_records(xml, &path()).unwrap();
        assert_eq!(records, vec![record("a&b", "x<y")]);
    }

    #[test]
    fn test_empty_value_is_none() {
        let xml = r#"<registry><record name="plone.icon.blank"><value/></record>
<record name="plone.icon.open"><value></value></record></registry>"#;
        let records = parse_records(xml, &path()).unwrap();
        assert_eq!(
            records,
            vec![
                ("plone.icon.blank".to_string(), None),
                ("plone.icon.open".to_string(), None),
            ]
        );
    }

    #[test]
    fn test_value_text_stops_at_first_child() {
        let xml = r#"<registry><record name="k"><value>head.svg<b>inner</b>tail</value></record></registry>"#;
        let records = parse_records(xml, &path()).unwrap();
        assert_eq!(records, vec![record("k", "head.svg")]);
    }

    #[test]
    fn test_value_starting_with_child_is_none() {
        let xml = r#"<registry><record name="k"><value><!-- moved -->late.svg</value></record></registry>"#;
        let records = parse_records(xml, &path()).unwrap();
        assert_eq!(records, vec![("k".to_string(), None)]);
    }

    #[test]
    fn test_first_value_wins() {
        let xml = r#"<registry><record name="k"><value>one</value><value>two</value></record></registry>"#;
        let records = parse_records(xml, &path()).unwrap();
        assert_eq!(records[0].1.as_deref(), Some("one"));
    }

    #[test]
    fn test_nested_value_is_not_a_record_value() {
        let xml = r#"<registry><record name="k"><field><value>nested</value></field></record></registry>"#;
        let err = parse_records(xml, &path()).unwrap_err();
        assert!(matches!(err, IconregError::RecordMissingValue { .. }));
    }

    #[test]
    fn test_record_without_name_fails() {
        let xml = r#"<registry><record><value>x.svg</value></record></registry>"#;
        let err = parse_records(xml, &path()).unwrap_err();
        assert!(matches!(err, IconregError::RecordMissingName { .. }));
    }

    #[test]
    fn test_record_without_value_fails() {
        let xml = r#"<registry><record name="plone.icon.lonely"/></registry>"#;
        let err = parse_records(xml, &path()).unwrap_err();
        assert!(matches!(err, IconregError::RecordMissingValue { .. }));
        assert!(err.to_string().contains("plone.icon.lonely"));
    }

    #[test]
    fn test_malformed_xml_fails() {
        let xml = r#"<registry><record name="k"><value>x</record></registry>"#;
        let err = parse_records(xml, &path()).unwrap_err();
        assert!(matches!(err, IconregError::XmlParseFailed { .. }));
    }

    #[test]
    fn test_truncated_xml_fails() {
        let err = parse_records("<registry><record name=\"k\">", &path()).unwrap_err();
        assert!(matches!(err, IconregError::XmlParseFailed { .. }));
    }

    #[test]
    fn test_empty_input_fails() {
        let err = parse_records("", &path()).unwrap_err();
        assert!(matches!(err, IconregError::XmlParseFailed { .. }));
    }

    #[test]
    fn test_later_document_wins() {
        let temp = TempDir::new().unwrap();
        let first = temp.path().join("icons_plone.xml");
        let second = temp.path().join("icons_toolbar.xml");
        std::fs::write(
            &first,
            r#"<registry><record name="plone.icon.edit"><value>old.svg</value></record>
<record name="plone.icon.only-first"><value>first.svg</value></record></registry>"#,
        )
        .unwrap();
        std::fs::write(
            &second,
            r#"<registry><record name="plone.icon.edit"><value>new.svg</value></record></registry>"#,
        )
        .unwrap();

        let map = merge_sources(&[(first, None), (second, None)], &mut SilentReporter).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["plone.icon.edit"].as_deref(), Some("new.svg"));
        assert_eq!(map["plone.icon.only-first"].as_deref(), Some("first.svg"));
    }

    #[test]
    fn test_in_memory_source_is_not_read_from_disk() {
        let temp = TempDir::new().unwrap();
        let unwritten = temp.path().join("icons_bootstrap.xml");
        let content = r#"<registry><record name="plone.icon.bag"><value>bag.svg</value></record></registry>"#;

        let map = merge_sources(&[(unwritten, Some(content.to_string()))], &mut SilentReporter).unwrap();
        assert_eq!(map["plone.icon.bag"].as_deref(), Some("bag.svg"));
    }

    #[test]
    fn test_missing_source_fails() {
        let temp = TempDir::new().unwrap();
        let result = merge_sources(&[(temp.path().join("icons_mimetype.xml"), None)], &mut SilentReporter);
        assert!(matches!(result, Err(IconregError::FileNotFound { .. })));
    }

    #[test]
    fn test_render_sorted_and_indented() {
        let mut map = IconMap::new();
        map.insert("plone.icon.zoom".to_string(), Some("zoom.svg".to_string()));
        map.insert("plone.icon.activity".to_string(), Some("activity.svg".to_string()));

        assert_eq!(
            render(&map).unwrap(),
            "{\n    \"plone.icon.activity\": \"activity.svg\",\n    \"plone.icon.zoom\": \"zoom.svg\"\n}"
        );
    }

    #[test]
    fn test_render_empty_value_as_null() {
        let mut map = IconMap::new();
        map.insert("plone.icon.blank".to_string(), None);

        assert_eq!(render(&map).unwrap(), "{\n    \"plone.icon.blank\": null\n}");
    }

    #[test]
    fn test_render_empty_map() {
        assert_eq!(render(&IconMap::new()).unwrap(), "{}");
    }
}
