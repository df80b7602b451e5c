//! Version command: version, build and default layout details

use crate::config::{CONFIG_FILE_NAME, Config};
use crate::error::Result;

/// Run version command
pub fn run() -> Result<()> {
    print!("{}", version_info());
    Ok(())
}

fn version_info() -> String {
    let defaults = Config::default();

    format!(
        "iconreg {version}\n\n\
         Build: rustc {rust}, {profile}\n\
         Configuration: {CONFIG_FILE_NAME} in the package root (optional)\n\
         Default icon sets: {icons}\n\
         Default flag sets: {flags}\n\
         Default icon map: {iconmap} ({sources} sources)\n",
        version = env!("CARGO_PKG_VERSION"),
        rust = env!("CARGO_PKG_RUST_VERSION"),
        profile = if cfg!(debug_assertions) { "debug" } else { "release" },
        icons = join_names(defaults.icon_sets.iter().map(|set| set.name.as_str())),
        flags = join_names(defaults.flag_sets.iter().map(|set| set.name.as_str())),
        iconmap = defaults.iconmap.output.display(),
        sources = defaults.iconmap.sources.len(),
    )
}

fn join_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}
