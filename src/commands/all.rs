//! All command: icons, flags, then the icon map

use crate::cli::GenerateArgs;
use crate::error::Result;
use crate::ui::Reporter;

use super::Context;

/// Run all command
///
/// The icon map is merged last, from the documents rendered by the first two
/// steps, whether or not they were written.
pub fn run(ctx: &Context, args: GenerateArgs, reporter: &mut dyn Reporter) -> Result<()> {
    let mut rendered = super::icons::generate(ctx, args, reporter)?;
    rendered.extend(super::flags::generate(ctx, args, reporter)?);
    super::iconmap::build(ctx, args, reporter, &rendered)?;
    reporter.done();
    Ok(())
}
