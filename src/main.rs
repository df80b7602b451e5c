//! iconreg - icon registry generator
//!
//! A command line tool that keeps the icon registry of a static resources
//! package in sync with its icon assets: registry records for icon
//! directories and flag metadata, and a consolidated icon map.

use clap::Parser;

mod cli;
mod commands;
mod common;
mod config;
mod error;
mod generate;
mod iconmap;
mod profiles;
mod registry;
mod ui;

use cli::{Cli, Commands};
use commands::Context;
use error::Result;
use ui::ConsoleReporter;

fn run(cli: Cli) -> Result<()> {
    let Cli {
        root,
        config,
        verbose,
        command,
    } = cli;
    let mut reporter = ConsoleReporter::new(verbose);
    let context = || Context::load(root.clone(), config.clone());

    match command {
        Commands::Icons(args) => commands::icons::run(&context()?, args, &mut reporter),
        Commands::Flags(args) => commands::flags::run(&context()?, args, &mut reporter),
        Commands::Iconmap(args) => commands::iconmap::run(&context()?, args, &mut reporter),
        Commands::All(args) => commands::all::run(&context()?, args, &mut reporter),
        Commands::Profiles => commands::profiles::run(),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(&args),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
