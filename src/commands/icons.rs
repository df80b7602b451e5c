//! Icons command: register every icon file of the configured directories

use crate::cli::GenerateArgs;
use crate::error::Result;
use crate::generate::scan;
use crate::ui::Reporter;

use super::{Context, Rendered, write_rendered};

/// Run icons command
pub fn run(ctx: &Context, args: GenerateArgs, reporter: &mut dyn Reporter) -> Result<()> {
    generate(ctx, args, reporter)?;
    reporter.done();
    Ok(())
}

/// Regenerate the registry document of every directory-scan icon set
pub(super) fn generate(
    ctx: &Context,
    args: GenerateArgs,
    reporter: &mut dyn Reporter,
) -> Result<Rendered> {
    let mut rendered = Rendered::new();
    for set in &ctx.config.icon_sets {
        let source = ctx.resolve(&set.source);
        reporter.detail(&format!("Scanning {}", source.display()));

        let document = scan::build_document(&set.name, &source, &set.extension, &set.template, reporter)?;
        let output = ctx.resolve(&set.output);
        let content = document.render();
        write_rendered(&output, &content, document.len(), args.dry_run, reporter)?;
        rendered.push((output, content));
    }
    Ok(rendered)
}
