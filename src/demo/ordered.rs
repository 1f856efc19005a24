//! Two workers printing in a guaranteed order.
//!
//! The first worker prints straight away and sets the run's completion flag when
//! it is done. The second worker blocks on that flag before printing anything,
//! so the whole of the first text always precedes the second banner.

use std::sync::Arc;
use std::thread;

use super::{print_text, DemoContext, DemoRun};
use crate::error::Result;

/// Header printed before the workers start.
pub const HEADER: &str = "Displaying texts in correct order with a monitor: \n";

/// Runs the monitor demo and returns once both workers have finished.
pub fn run(ctx: &Arc<DemoContext>) -> Result<()> {
    ctx.emit(HEADER)?;
    let mut run = DemoRun::new("ordered");

    {
        let ctx = Arc::clone(ctx);
        let flag = Arc::clone(run.flag());
        run.spawn("first", move || {
            let printer = ctx.printer();
            let printed = print_text(&ctx, &printer, &ctx.texts.first);
            // The second worker must never be left waiting.
            flag.complete();
            printed
        })?;
    }

    {
        let ctx = Arc::clone(ctx);
        let flag = Arc::clone(run.flag());
        run.spawn("second", move || {
            let _turn = flag.wait();
            log::debug!("second worker passed the monitor");
            let printer = ctx.printer();
            print_text(&ctx, &printer, &ctx.texts.second)
        })?;
    }

    // The orchestrator stays out of the monitor and only waits for output to drain.
    let budget = ctx.timing.output_budget(ctx.texts.total_chars());
    log::debug!("[{}] waiting {:?} for output", run.name(), budget);
    thread::sleep(budget);

    run.join()?;
    ctx.emit("\n")?;
    log::info!("monitor demo finished");
    Ok(())
}
