//! Installer profiles hidden from site creation and the add-on installer

const PACKAGE: &str = "plone.staticresources";

const PROFILES: &[&str] = &["default", "async", "uninstall"];

const UPGRADE_STEPS: &[u32] = &[2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 200, 201, 202, 203, 204, 205, 206];

/// Profile and upgrade-step identifiers, in installer order
pub fn hidden_profiles() -> Vec<String> {
    PROFILES
        .iter()
        .map(|profile| format!("{PACKAGE}:{profile}"))
        .chain(
            UPGRADE_STEPS
                .iter()
                .map(|step| format!("{PACKAGE}.upgrades:{step}")),
        )
        .collect()
}
