//! The output stream shared by every demo thread.
//!
//! Writes are never coordinated here: two threads emitting at the same time
//! interleave at whatever granularity they emit. That is what the race demo
//! shows and what the monitor demo avoids.

use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// A destination for demo text.
pub trait Output: Send + Sync {
    /// Writes `text` and flushes it immediately.
    fn emit(&self, text: &str) -> io::Result<()>;
}

/// Writes to the process's standard output, flushing after each call.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutOutput;

impl Output for StdoutOutput {
    fn emit(&self, text: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(text.as_bytes())?;
        out.flush()
    }
}

#[derive(Default)]
struct Captured {
    text: String,
    writes: usize,
}

/// In-memory output, primarily for tests.
///
/// Clones share the same buffer, so a test can keep one handle and give
/// another to the demo.
#[derive(Clone, Default)]
pub struct MemoryOutput {
    inner: Arc<Mutex<Captured>>,
}

impl MemoryOutput {
    /// Creates an empty capture buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything emitted so far, in emission order.
    pub fn contents(&self) -> String {
        self.inner.lock().text.clone()
    }

    /// Number of `emit` calls so far.
    pub fn write_count(&self) -> usize {
        self.inner.lock().writes
    }
}

impl Output for MemoryOutput {
    fn emit(&self, text: &str) -> io::Result<()> {
        let mut inner = self.inner.lock();
        inner.text.push_str(text);
        inner.writes += 1;
        Ok(())
    }
}

impl fmt::Debug for MemoryOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("MemoryOutput")
            .field("chars", &inner.text.chars().count())
            .field("writes", &inner.writes)
            .finish()
    }
}
