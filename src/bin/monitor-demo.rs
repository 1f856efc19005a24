//! monitor-demo - prints two texts sequentially, racing, and ordered by a monitor

use std::{process, sync::Arc};

use monitor_demo::{init_logging, Config, StdoutOutput};

fn main() -> anyhow::Result<()> {
    if let Err(e) = run_application() {
        eprintln!("Fatal Error: {:#}", anyhow::Error::new(e));
        process::exit(1);
    }

    // Exit explicitly once every demo has finished.
    process::exit(0)
}

fn run_application() -> monitor_demo::Result<()> {
    let config = Config::discover()?;
    init_logging(&config.logging)?;

    monitor_demo::run(&config, Arc::new(StdoutOutput))
}
