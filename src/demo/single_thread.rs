//! Baseline: both texts printed in order from the calling thread.

use super::DemoContext;
use crate::error::Result;

/// Header printed before the texts.
pub const HEADER: &str = "Displaying texts in single thread:\n";

/// Prints both texts, each preceded by its banner, as a single write.
pub fn run(ctx: &DemoContext) -> Result<()> {
    let first = &ctx.texts.first;
    let second = &ctx.texts.second;
    let mut out = String::with_capacity(HEADER.len() + first.content().len() + second.content().len() + 128);
    out.push_str(HEADER);
    out.push_str(&first.banner());
    out.push_str(first.content());
    out.push('\n');
    out.push_str(&second.banner());
    out.push_str(second.content());
    out.push_str("\n\n");

    ctx.emit(&out)?;
    log::info!("single-thread demo finished");
    Ok(())
}
