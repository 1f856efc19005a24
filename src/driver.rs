//! Runs every demo in sequence.

use std::sync::Arc;

use crate::config::{Config, TimingConfig};
use crate::demo::{ordered, race, single_thread, DemoContext};
use crate::error::Result;
use crate::output::Output;
use crate::text::TextPair;

/// Loads both configured texts and runs the demos against `output`.
///
/// # Errors
///
/// A text that cannot be loaded stops everything before any demo output is
/// written. Output and worker failures abort the remaining demos.
pub fn run(config: &Config, output: Arc<dyn Output>) -> Result<()> {
    let texts = TextPair::load(&config.texts)?;
    run_with_texts(texts, config.timing, output)
}

/// Runs the baseline, the race demo and the monitor demo, in that order.
pub fn run_with_texts(texts: TextPair, timing: TimingConfig, output: Arc<dyn Output>) -> Result<()> {
    let ctx = DemoContext::new(texts, timing, output);
    log::info!(
        "running demos with '{}' and '{}' ({} chars, {} ms per char)",
        ctx.texts.first.label(),
        ctx.texts.second.label(),
        ctx.texts.total_chars(),
        timing.char_delay_ms
    );

    single_thread::run(&ctx)?;
    race::run(&ctx)?;
    ordered::run(&ctx)?;
    Ok(())
}
