//! Core type definitions for the monitor demo

mod log_level;

pub use log_level::LogLevel;
