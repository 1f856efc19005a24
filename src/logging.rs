//! Logger setup.
//!
//! Logs go to stderr so they never mix into the demo text on stdout.

use crate::config::LoggingConfig;
use crate::error::Result;

/// Installs the global logger at the configured level. `RUST_LOG`, when set,
/// overrides the configured level.
///
/// # Errors
///
/// Returns [`DemoError::Logger`](crate::DemoError::Logger) if a logger is already installed.
#[cfg(feature = "logging")]
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    env_logger::Builder::new()
        .filter_level(config.level.to_level_filter())
        .parse_env(env_logger::Env::default())
        .target(env_logger::Target::Stderr)
        .try_init()
        .map_err(|e| crate::DemoError::Logger(e.to_string()))?;
    log::debug!("logger initialised at level {}", config.level);
    Ok(())
}

/// Without the `logging` feature only the `log` facade's max level is set.
#[cfg(not(feature = "logging"))]
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    log::set_max_level(config.level.to_level_filter());
    Ok(())
}
