//! The three demos and the state they share.
//!
//! Every demo prints the same two texts. [`single_thread`] prints them in order
//! on the calling thread, [`race`] prints them from two uncoordinated threads,
//! and [`ordered`] prints them from two threads coordinated by a monitor.

pub mod ordered;
pub mod race;
pub mod single_thread;

use std::fmt;
use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::config::TimingConfig;
use crate::error::{DemoError, Result};
use crate::output::Output;
use crate::printer::SlowPrinter;
use crate::sync::CompletionFlag;
use crate::text::{TextBlob, TextPair};

/// Everything a demo needs, shared by the orchestrating thread and its workers.
pub struct DemoContext {
    /// The texts to print.
    pub texts: TextPair,
    /// Delay constants.
    pub timing: TimingConfig,
    output: Arc<dyn Output>,
}

impl DemoContext {
    /// Builds a shareable context.
    pub fn new(texts: TextPair, timing: TimingConfig, output: Arc<dyn Output>) -> Arc<Self> {
        Arc::new(Self {
            texts,
            timing,
            output,
        })
    }

    /// Writes `text` to the shared output in one piece.
    pub fn emit(&self, text: &str) -> io::Result<()> {
        self.output.emit(text)
    }

    /// A slow printer over the shared output using the configured delay.
    pub fn printer(&self) -> SlowPrinter {
        SlowPrinter::new(Arc::clone(&self.output), self.timing.char_delay())
    }
}

impl fmt::Debug for DemoContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DemoContext")
            .field("texts", &self.texts)
            .field("timing", &self.timing)
            .finish_non_exhaustive()
    }
}

struct Worker {
    name: String,
    handle: JoinHandle<io::Result<()>>,
}

/// One invocation of a multi-threaded demo: its workers and its own completion flag.
///
/// Each run gets a fresh flag, so no two demos ever share coordination state.
pub struct DemoRun {
    name: &'static str,
    flag: Arc<CompletionFlag>,
    workers: Vec<Worker>,
}

impl DemoRun {
    /// Starts an empty run with an unset flag.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            flag: Arc::new(CompletionFlag::new()),
            workers: Vec::with_capacity(2),
        }
    }

    /// Name used for worker threads and logs.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The run's completion flag.
    pub fn flag(&self) -> &Arc<CompletionFlag> {
        &self.flag
    }

    /// Spawns a named worker thread.
    pub fn spawn<F>(&mut self, worker: &str, body: F) -> Result<()>
    where
        F: FnOnce() -> io::Result<()> + Send + 'static,
    {
        let name = format!("{}-{}", self.name, worker);
        let handle = thread::Builder::new().name(name.clone()).spawn(body)?;
        log::debug!("[{}] spawned worker {}", self.name, name);
        self.workers.push(Worker { name, handle });
        Ok(())
    }

    /// Joins every worker and returns the first failure, if any.
    ///
    /// All workers are joined even when an earlier one failed.
    pub fn join(self) -> Result<()> {
        let mut first_error = None;
        for worker in self.workers {
            let outcome = match worker.handle.join() {
                Ok(Ok(())) => {
                    log::debug!("[{}] worker {} finished", self.name, worker.name);
                    continue;
                }
                Ok(Err(e)) => {
                    log::error!("[{}] worker {} failed: {}", self.name, worker.name, e);
                    DemoError::Io(e)
                }
                Err(_) => {
                    log::error!("[{}] worker {} panicked", self.name, worker.name);
                    DemoError::WorkerPanicked(worker.name)
                }
            };
            first_error.get_or_insert(outcome);
        }
        first_error.map_or(Ok(()), Err)
    }
}

/// Banner followed by the slowly printed text.
fn print_text(ctx: &DemoContext, printer: &SlowPrinter, text: &TextBlob) -> io::Result<()> {
    ctx.emit(&text.banner())?;
    printer.display(text.content())
}
