//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - generate: Arguments shared by the generating commands
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod generate;

pub use completions::CompletionsArgs;
pub use generate::GenerateArgs;

/// iconreg - icon registry generator
///
/// Keeps registry records and the consolidated icon map in sync with the icon assets of a
/// static resources package.
#[derive(Parser, Debug)]
#[command(
    name = "iconreg",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Generate icon registry records and the consolidated icon map",
    long_about = "iconreg scans icon directories and flag metadata of a static resources package, \
                  regenerates the registry documents binding icon names to resource paths, and \
                  merges them into one icon map.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  iconreg icons                 \x1b[90m# Register icons found in the icon directory\x1b[0m\n   \
                  iconreg flags                 \x1b[90m# Register country and language flags\x1b[0m\n   \
                  iconreg iconmap               \x1b[90m# Rebuild the consolidated icon map\x1b[0m\n   \
                  iconreg all --dry-run         \x1b[90m# Show what a full run would write\x1b[0m\n   \
                  iconreg -r src/pkg profiles   \x1b[90m# List hidden installer profiles\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Package root all configured paths are relative to (defaults to current directory)
    #[arg(long, short = 'r', global = true, env = "ICONREG_ROOT")]
    pub root: Option<PathBuf>,

    /// Configuration file (defaults to iconreg.yaml in the package root, if present)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register every icon file of the configured icon directories
    Icons(GenerateArgs),

    /// Register country and language flags from their metadata
    Flags(GenerateArgs),

    /// Rebuild the consolidated icon map from the registry documents
    Iconmap(GenerateArgs),

    /// Run icons, flags and iconmap in that order
    All(GenerateArgs),

    /// List installer profiles hidden from the add-on installer
    Profiles,

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
