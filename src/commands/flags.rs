//! Flags command: register flag icons from their code→label metadata

use crate::cli::GenerateArgs;
use crate::error::Result;
use crate::generate::flags;
use crate::ui::Reporter;

use super::{Context, Rendered, write_rendered};

/// Run flags command
pub fn run(ctx: &Context, args: GenerateArgs, reporter: &mut dyn Reporter) -> Result<()> {
    generate(ctx, args, reporter)?;
    reporter.done();
    Ok(())
}

/// Regenerate the registry document of every flag set
pub(super) fn generate(
    ctx: &Context,
    args: GenerateArgs,
    reporter: &mut dyn Reporter,
) -> Result<Rendered> {
    let mut rendered = Rendered::new();
    for set in &ctx.config.flag_sets {
        let source = ctx.resolve(&set.source);
        reporter.detail(&format!("Reading {}", source.display()));

        let labels = flags::read_labels(&source)?;
        let document = flags::build_document(
            &set.name,
            &set.default_record,
            &set.template,
            &labels,
            reporter,
        );
        let output = ctx.resolve(&set.output);
        let content = document.render();
        write_rendered(&output, &content, document.len(), args.dry_run, reporter)?;
        rendered.push((output, content));
    }
    Ok(rendered)
}
