// src/test_utils.rs

#![cfg(test)] // Ensure this module is only compiled for tests

use crate::config::TimingConfig;
use crate::demo::DemoContext;
use crate::output::MemoryOutput;
use crate::text::{TextBlob, TextPair};
use std::sync::Arc;

/// Timing that keeps interleaving observable without slowing tests down.
pub fn quick_timing() -> TimingConfig {
    TimingConfig {
        char_delay_ms: 1,
        grace_period_ms: 0,
    }
}

/// A context over two titled in-memory texts, plus a handle on its captured output.
pub fn memory_context(
    first: (&str, &str),
    second: (&str, &str),
    timing: TimingConfig,
) -> (MemoryOutput, Arc<DemoContext>) {
    let out = MemoryOutput::new();
    let texts = TextPair::new(
        TextBlob::new("first", first.1).with_title(first.0),
        TextBlob::new("second", second.1).with_title(second.0),
    );
    let ctx = DemoContext::new(texts, timing, Arc::new(out.clone()));
    (out, ctx)
}
