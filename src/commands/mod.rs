//! Command implementations for the iconreg CLI

pub mod all;
pub mod completions;
pub mod flags;
pub mod iconmap;
pub mod icons;
pub mod profiles;
pub mod version;

use std::path::{Path, PathBuf};

use crate::common::fs;
use crate::config::Config;
use crate::error::{IconregError, Result};
use crate::ui::Reporter;

/// Package root and the configuration loaded for it
#[derive(Debug, Clone)]
pub struct Context {
    pub root: PathBuf,
    pub config: Config,
}

impl Context {
    /// Resolve the package root (current directory by default) and load its configuration
    pub fn load(root: Option<PathBuf>, config: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(|| PathBuf::from("."));
        let root = dunce::canonicalize(&root).map_err(|_| IconregError::DirectoryNotFound {
            path: root.display().to_string(),
        })?;
        let config = Config::load(&root, config.as_deref())?;
        Ok(Self { root, config })
    }

    /// Path of a configured file, relative to the package root
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

/// Documents rendered during this run, by output path
pub type Rendered = Vec<(PathBuf, String)>;

/// Write a rendered document unless this is a dry run, then report it
fn write_rendered(
    path: &Path,
    content: &str,
    entries: usize,
    dry_run: bool,
    reporter: &mut dyn Reporter,
) -> Result<()> {
    if !dry_run {
        fs::write_output(path, content)?;
    }
    reporter.wrote(path, entries, dry_run);
    Ok(())
}
