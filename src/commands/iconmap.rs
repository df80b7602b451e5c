//! Iconmap command: merge the registry documents into one icon map

use std::path::PathBuf;

use crate::cli::GenerateArgs;
use crate::error::Result;
use crate::iconmap;
use crate::ui::Reporter;

use super::{Context, write_rendered};

/// Run iconmap command
pub fn run(ctx: &Context, args: GenerateArgs, reporter: &mut dyn Reporter) -> Result<()> {
    build(ctx, args, reporter, &[])
}

/// Merge the configured sources and write the map
///
/// Sources found in `rendered` are merged from memory; all others are read
/// from disk. A dry run of `all` therefore sees the documents it would write.
pub(super) fn build(
    ctx: &Context,
    args: GenerateArgs,
    reporter: &mut dyn Reporter,
    rendered: &[(PathBuf, String)],
) -> Result<()> {
    let sources: Vec<_> = ctx
        .config
        .iconmap
        .sources
        .iter()
        .map(|source| {
            let path = ctx.resolve(source);
            let content = rendered
                .iter()
                .find(|(output, _)| *output == path)
                .map(|(_, content)| content.clone());
            (path, content)
        })
        .collect();

    let map = iconmap::merge_sources(&sources, reporter)?;
    write_rendered(
        &ctx.resolve(&ctx.config.iconmap.output),
        &iconmap::render(&map)?,
        map.len(),
        args.dry_run,
        reporter,
    )
}
