//! Configuration file handling (`iconreg.yaml`)
//!
//! Every field has a built-in default describing the standard add-on layout,
//! so the configuration file is optional and a partial file only overrides
//! the sections it names. All paths are relative to the package root.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{self, Result};
use crate::registry::{IconEntry, RecordTemplate};

/// Name of the configuration file looked up in the package root
pub const CONFIG_FILE_NAME: &str = "iconreg.yaml";

const REGISTRY_DIR: &str = "profiles/default/registry";

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Icon sets generated by scanning a directory
    pub icon_sets: Vec<IconSetConfig>,
    /// Icon sets generated from code→label metadata
    pub flag_sets: Vec<FlagSetConfig>,
    /// Consolidated icon map
    pub iconmap: IconmapConfig,
}

/// A directory of icon files turned into one registry document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IconSetConfig {
    pub name: String,
    /// Directory holding the icon files
    pub source: PathBuf,
    /// Extension (without the dot) of files that become records
    #[serde(default = "default_extension")]
    pub extension: String,
    /// Registry document to overwrite
    pub output: PathBuf,
    pub template: RecordTemplate,
}

/// A JSON code→label mapping turned into one registry document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FlagSetConfig {
    pub name: String,
    /// JSON file with the code→label object
    pub source: PathBuf,
    /// Registry document to overwrite
    pub output: PathBuf,
    /// Fallback record written first, regardless of the metadata
    pub default_record: FixedRecord,
    pub template: RecordTemplate,
}

/// A record with no placeholders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FixedRecord {
    pub record: String,
    pub title: String,
    pub resource: String,
}

impl FixedRecord {
    pub fn to_entry(&self) -> IconEntry {
        IconEntry::new(&self.record, &self.title, &self.resource)
    }
}

/// Inputs and output of the consolidated map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IconmapConfig {
    /// Registry documents merged in order; later documents win on collisions
    pub sources: Vec<PathBuf>,
    pub output: PathBuf,
}

fn default_extension() -> String {
    "svg".to_string()
}

fn registry_path(file: &str) -> PathBuf {
    Path::new(REGISTRY_DIR).join(file)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            icon_sets: vec![IconSetConfig {
                name: "bootstrap".to_string(),
                source: PathBuf::from("static/icons-bootstrap"),
                extension: default_extension(),
                output: registry_path("icons_bootstrap.xml"),
                template: RecordTemplate::new(
                    "plone.icon.##KEY##",
                    "Bootstrap Icon ##NAME##",
                    "++plone++bootstrap-icons/##KEY##.##EXT##",
                ),
            }],
            flag_sets: vec![
                flag_set("country", "Country", "icons-country-flags/countries.json"),
                flag_set("language", "Language", "icons-language-flags/languages.json"),
            ],
            iconmap: IconmapConfig::default(),
        }
    }
}

fn flag_set(name: &str, label: &str, source: &str) -> FlagSetConfig {
    FlagSetConfig {
        name: name.to_string(),
        source: Path::new("static").join(source),
        output: registry_path(&format!("icons_{name}_flags.xml")),
        default_record: FixedRecord {
            record: format!("plone.icon.{name}flag"),
            title: format!("{label} Icon Flag Default"),
            resource: "++plone++bootstrap-icons/flag.svg".to_string(),
        },
        template: RecordTemplate::new(
            format!("plone.icon.{name}flag/##KEY##"),
            format!("{label} Icon Flag ##NAME##"),
            format!("++plone++{name}-flag-icons/##KEY##.svg"),
        ),
    }
}

impl Default for IconmapConfig {
    fn default() -> Self {
        let sources = [
            "icons_bootstrap.xml",
            "icons_contenttype.xml",
            "icons_country_flags.xml",
            "icons_language_flags.xml",
            "icons_mimetype.xml",
            "icons_plone.xml",
            "icons_toolbar.xml",
        ]
        .into_iter()
        .map(registry_path)
        .collect();

        Self {
            sources,
            output: PathBuf::from("static/iconmap.json"),
        }
    }
}

impl Config {
    /// Parse configuration from YAML, then validate it
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration for a package root
    ///
    /// An explicit path must exist and is taken as given. Without one,
    /// `<root>/iconreg.yaml` is used when present and the built-in defaults
    /// otherwise.
    pub fn load(root: &Path, explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let candidate = root.join(CONFIG_FILE_NAME);
                if !candidate.is_file() {
                    return Ok(Self::default());
                }
                candidate
            }
        };

        let content = std::fs::read_to_string(&path)
            .map_err(|e| error::config::read_failed(path.display().to_string(), e.to_string()))?;

        Self::from_yaml(&content).map_err(|e| match e {
            error::IconregError::ConfigParseFailed { reason, .. } => {
                error::config::parse_failed(path.display().to_string(), reason)
            }
            other => other,
        })
    }

    /// Reject settings that would produce unusable documents
    pub fn validate(&self) -> Result<()> {
        for set in &self.icon_sets {
            if set.extension.trim_start_matches('.').is_empty() {
                return Err(error::config::invalid(format!(
                    "icon set '{}' has an empty extension",
                    set.name
                )));
            }
            if !set.template.has_key_placeholder() {
                return Err(missing_key_placeholder(&set.name));
            }
        }

        for set in &self.flag_sets {
            if !set.template.has_key_placeholder() {
                return Err(missing_key_placeholder(&set.name));
            }
        }

        if self.iconmap.output.as_os_str().is_empty() {
            return Err(error::config::invalid("iconmap output path is empty"));
        }

        Ok(())
    }
}

fn missing_key_placeholder(set: &str) -> error::IconregError {
    error::config::invalid(format!(
        "record template of '{set}' does not contain {}",
        crate::registry::template::KEY_PLACEHOLDER
    ))
}
