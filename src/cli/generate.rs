use clap::Parser;

/// Arguments shared by the generating commands
#[derive(Parser, Debug, Clone, Copy)]
#[command(after_help = "EXAMPLES:\n  \
                  Regenerate in the current directory:\n    iconreg icons\n\n\
                  Regenerate another package:\n    iconreg flags --root src/plone/staticresources\n\n\
                  Show what would be written:\n    iconreg iconmap --dry-run")]
pub struct GenerateArgs {
    /// Show what would be written without writing anything
    #[arg(long)]
    pub dry_run: bool,
}
