//! Configuration validation for the monitor demo
//!
//! Checks that the text resources are usable identifiers and that the delay
//! constants stay within a range where the demos still finish in reasonable time.

use super::error::ConfigError;
use super::{Config, TextSourceConfig, TextsConfig, TimingConfig};

/// Upper bound for the per-character delay.
pub const MAX_CHAR_DELAY_MS: u64 = 1_000;

/// Upper bound for the orchestrator grace period.
pub const MAX_GRACE_PERIOD_MS: u64 = 60_000;

/// Validates the application configuration.
///
/// # Errors
///
/// Returns a `ConfigError` for the first check that fails.
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    validate_texts_config(&config.texts)?;
    validate_timing_config(&config.timing)?;
    Ok(())
}

fn validate_text_source(field: &str, source: &TextSourceConfig) -> Result<(), ConfigError> {
    if source.label.trim().is_empty() {
        return Err(ConfigError::missing_value(format!("{}.label", field)));
    }
    if source.path.trim().is_empty() {
        return Err(ConfigError::missing_value(format!("{}.path", field)));
    }
    Ok(())
}

/// Validates both text resources and that they can be told apart.
fn validate_texts_config(config: &TextsConfig) -> Result<(), ConfigError> {
    validate_text_source("texts.first", &config.first)?;
    validate_text_source("texts.second", &config.second)?;

    if config.first.label == config.second.label {
        return Err(ConfigError::invalid_value(
            "texts.second.label",
            &config.second.label,
            "Text labels must be distinct",
        ));
    }

    if config.first.path == config.second.path {
        log::warn!(
            "Both texts are read from '{}'; the demos will print the same content twice.",
            config.first.path
        );
    }

    Ok(())
}

/// Validates the delay constants.
fn validate_timing_config(config: &TimingConfig) -> Result<(), ConfigError> {
    if config.char_delay_ms > MAX_CHAR_DELAY_MS {
        return Err(ConfigError::invalid_value(
            "timing.char_delay_ms",
            config.char_delay_ms,
            format!("Per-character delay must be at most {} ms", MAX_CHAR_DELAY_MS),
        ));
    }

    if config.grace_period_ms > MAX_GRACE_PERIOD_MS {
        return Err(ConfigError::invalid_value(
            "timing.grace_period_ms",
            config.grace_period_ms,
            format!("Grace period must be at most {} ms", MAX_GRACE_PERIOD_MS),
        ));
    }

    // Without a delay the race demo rarely shows any interleaving.
    if config.char_delay_ms == 0 {
        log::warn!("timing.char_delay_ms is 0; interleaving will be hard to observe.");
    }

    Ok(())
}
