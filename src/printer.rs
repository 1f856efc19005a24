//! Character-at-a-time printing.

use std::io;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::output::Output;

/// Writes text one character per write, pausing between characters so that
/// concurrent printers visibly interleave on a shared output.
#[derive(Clone)]
pub struct SlowPrinter {
    output: Arc<dyn Output>,
    delay: Duration,
}

impl SlowPrinter {
    /// Creates a printer writing to `output` with `delay` between characters.
    pub fn new(output: Arc<dyn Output>, delay: Duration) -> Self {
        Self { output, delay }
    }

    /// Writes `text` to the output one character at a time.
    ///
    /// An empty text performs no writes. The first write error stops printing.
    pub fn display(&self, text: &str) -> io::Result<()> {
        let mut buf = [0u8; 4];
        for (i, c) in text.chars().enumerate() {
            if i > 0 && !self.delay.is_zero() {
                thread::sleep(self.delay);
            }
            self.output.emit(c.encode_utf8(&mut buf))?;
        }
        Ok(())
    }
}
