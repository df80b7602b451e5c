//! Common test utilities for iconreg integration tests

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Registry directory of the standard package layout
pub const REGISTRY_DIR: &str = "profiles/default/registry";

/// Registry documents maintained by hand, merged into the icon map as-is
pub const HAND_WRITTEN_REGISTRIES: &[&str] = &[
    "icons_contenttype.xml",
    "icons_mimetype.xml",
    "icons_plone.xml",
    "icons_toolbar.xml",
];

/// A temporary static resources package
#[allow(dead_code)]
pub struct TestPackage {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to package root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestPackage {
    /// Create an empty package
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create a package with the standard layout, a few icons and flag metadata
    pub fn standard() -> Self {
        let package = Self::new();
        package.create_dir(REGISTRY_DIR);
        package.add_icons(&["activity.svg", "zoom.svg"]);
        package.write_file(
            "static/icons-country-flags/countries.json",
            r#"{"US": "United States", "AD": "Andorra"}"#,
        );
        package.write_file(
            "static/icons-language-flags/languages.json",
            r#"{"de": "German"}"#,
        );
        for name in HAND_WRITTEN_REGISTRIES {
            package.write_file(&format!("{REGISTRY_DIR}/{name}"), "<registry/>\n");
        }
        package
    }

    /// Create a directory (and parents) in the package
    pub fn create_dir(&self, path: &str) -> PathBuf {
        let dir = self.path.join(path);
        std::fs::create_dir_all(&dir).expect("Failed to create directory");
        dir
    }

    /// Add files to the bootstrap icon directory
    pub fn add_icons(&self, names: &[&str]) {
        let dir = self.create_dir("static/icons-bootstrap");
        for name in names {
            std::fs::write(dir.join(name), "<svg xmlns=\"http://www.w3.org/2000/svg\"/>")
                .expect("Failed to write icon");
        }
    }

    /// Write a file in the package
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the package
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Read a registry document from the standard registry directory
    pub fn read_registry(&self, name: &str) -> String {
        self.read_file(&format!("{REGISTRY_DIR}/{name}"))
    }

    /// Check if a file exists in the package
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }
}

/// iconreg command with developer overrides removed
#[allow(deprecated)]
pub fn iconreg_cmd() -> Command {
    let mut cmd = Command::cargo_bin("iconreg").expect("iconreg binary should be built");
    cmd.env_remove("ICONREG_ROOT");
    cmd
}

/// iconreg command running inside a package
#[allow(dead_code)]
pub fn iconreg_cmd_for_package(path: &Path) -> Command {
    let mut cmd = iconreg_cmd();
    cmd.current_dir(path);
    cmd
}
