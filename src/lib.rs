// src/lib.rs

//! Thread interleaving and monitor-based synchronization, demonstrated.
//!
//! Two texts are printed three ways: sequentially, from two uncoordinated
//! threads (the output interleaves), and from two threads ordered by a monitor
//! (a mutex paired with a condition variable).

pub mod config;
pub mod demo;
pub mod driver;
pub mod error;
pub mod logging;
pub mod output;
pub mod printer;
pub mod sync;
pub mod text;
pub mod types;

#[cfg(test)]
mod test_utils;

pub use config::Config;
pub use driver::run;
pub use error::{DemoError, Result};
pub use logging::init_logging;
pub use output::{MemoryOutput, Output, StdoutOutput};
pub use printer::SlowPrinter;
pub use sync::{CompletionFlag, Monitor};
pub use text::{TextBlob, TextPair};
pub use types::LogLevel;
