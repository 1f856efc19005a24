//! Two workers printing at the same time with nothing ordering them.
//!
//! The characters of the two texts interleave on the output. The orchestrating
//! thread still waits on the run's completion flag (set by the second worker) so
//! this demo's output does not run into the next one.

use std::sync::Arc;
use std::thread;

use super::{print_text, DemoContext, DemoRun};
use crate::error::Result;

/// Header printed before the workers start.
pub const HEADER: &str = "Displaying texts with race conditions: \n";

/// Runs the unsynchronized demo and returns once both workers have finished.
pub fn run(ctx: &Arc<DemoContext>) -> Result<()> {
    ctx.emit(HEADER)?;
    let mut run = DemoRun::new("race");

    {
        let ctx = Arc::clone(ctx);
        run.spawn("first", move || {
            let printer = ctx.printer();
            print_text(&ctx, &printer, &ctx.texts.first)
        })?;
    }

    {
        let ctx = Arc::clone(ctx);
        let flag = Arc::clone(run.flag());
        run.spawn("second", move || {
            let printer = ctx.printer();
            let printed = print_text(&ctx, &printer, &ctx.texts.second);
            // Set even on failure; the orchestrator would otherwise wait forever.
            flag.complete();
            printed
        })?;
    }

    {
        let done = run.flag().wait();
        log::debug!("[{}] second worker signalled completion", run.name());
        thread::sleep(ctx.timing.grace_period());
        drop(done);
    }

    // The first worker is not tied to the flag and may still be printing.
    run.join()?;
    ctx.emit("\n")?;
    log::info!("race demo finished");
    Ok(())
}
