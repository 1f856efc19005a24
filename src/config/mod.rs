//! Configuration management for the monitor demo
//!
//! This module handles loading, validating, and providing access to the
//! application configuration. The built-in defaults are the fixed constants the
//! demos were designed around; a TOML file or `MD_` environment variables may
//! re-tune only the delays and the log level. The text resources are fixed.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

mod error;
pub mod validation;

#[cfg(test)]
#[path = "tests/validation_tests.rs"]
mod validation_tests;

#[cfg(test)]
#[path = "tests/config_mod_tests.rs"]
mod config_mod_tests;

use std::{
    env, fs,
    path::{Path, PathBuf},
    time::Duration,
};
use directories::ProjectDirs;

use serde::{Deserialize, Serialize};

use crate::LogLevel;

/// Re-export the error type
pub use error::ConfigError;

/// The environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "MD_";

/// The application name used for finding config directories
const APP_NAME: &str = "monitor-demo";

/// Name of the configuration file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "monitor-demo.toml";

/// Main configuration structure for the monitor demo.
///
/// # Example
///
/// ```no_run
/// use monitor_demo::config::Config;
///
/// // A path that does not exist falls back to the built-in defaults.
/// let config = Config::load("path/that/hopefully/does/not/exist.toml").unwrap();
/// assert_eq!(config.timing.char_delay_ms, 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// The two text resources printed by every demo; never read from file or env
    #[serde(skip)]
    pub texts: TextsConfig,

    /// Delay constants
    #[serde(default)]
    pub timing: TimingConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// One text resource and the banner printed before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSourceConfig {
    /// Short label used in logs and errors
    pub label: String,
    /// File the text is read from
    pub path: String,
    /// Banner line printed before the text (without the trailing newline)
    pub title: String,
}

impl TextSourceConfig {
    /// Creates a text source description.
    pub fn new(label: impl Into<String>, path: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
            title: title.into(),
        }
    }
}

/// The pair of texts used by the demos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextsConfig {
    /// Text printed by the first worker of each demo
    pub first: TextSourceConfig,
    /// Text printed by the second worker of each demo
    pub second: TextSourceConfig,
}

impl Default for TextsConfig {
    fn default() -> Self {
        Self {
            first: TextSourceConfig::new(
                "rock",
                "i_wanna_rock.txt",
                "I Wanna Rock by Twisted Sister: ",
            ),
            second: TextSourceConfig::new("hamlet", "hamlet.txt", "Hamlet Act III Scene I: "),
        }
    }
}

/// Delay constants driving the demos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimingConfig {
    /// Pause between successive characters written by the slow printer
    pub char_delay_ms: u64,
    /// Extra time the orchestrating thread waits once the workers are done
    pub grace_period_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            char_delay_ms: 3,
            grace_period_ms: 1000,
        }
    }
}

impl TimingConfig {
    /// Pause between successive characters.
    pub fn char_delay(&self) -> Duration {
        Duration::from_millis(self.char_delay_ms)
    }

    /// Grace period added after a demo's workers are expected to be done.
    pub fn grace_period(&self) -> Duration {
        Duration::from_millis(self.grace_period_ms)
    }

    /// Conservative bound on how long printing `total_chars` characters takes,
    /// grace period included.
    pub fn output_budget(&self, total_chars: usize) -> Duration {
        let chars = u32::try_from(total_chars).unwrap_or(u32::MAX);
        self.grace_period()
            .saturating_add(self.char_delay().saturating_mul(chars))
    }
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log level; `RUST_LOG` takes precedence when set
    pub level: LogLevel,
}

impl Config {
    /// Loads the configuration from the specified path.
    ///
    /// A missing file is not an error: the built-in defaults are used instead.
    /// Environment overrides are applied afterwards, then the result is validated.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed, or if
    /// the final configuration is invalid.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let mut config = match fs::read_to_string(path) {
            Ok(config_str) => {
                toml::from_str::<Config>(&config_str).map_err(|source| ConfigError::Parse {
                    path: path.to_path_buf(),
                    source,
                })?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("Config file not found at {}, using defaults", path.display());
                Self::default()
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        config.apply_env_vars()?;
        config.validate()?;
        Ok(config)
    }

    /// Finds and loads the configuration.
    ///
    /// Looks for `monitor-demo.toml` in the working directory, then for
    /// `config.toml` in the OS-specific config directory, and otherwise uses
    /// the defaults (still subject to environment overrides).
    pub fn discover() -> Result<Self, ConfigError> {
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.is_file() {
            return Self::load(local);
        }
        if let Some(dir) = Self::config_dir() {
            let candidate = dir.join("config.toml");
            if candidate.is_file() {
                return Self::load(candidate);
            }
        }
        Self::load(local)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported keys: `MD_LOGGING_LEVEL`, `MD_TIMING_CHAR_DELAY_MS` and
    /// `MD_TIMING_GRACE_PERIOD_MS`. Empty values are ignored, and so is every
    /// variable outside that set, whatever its encoding.
    ///
    /// # Errors
    ///
    /// Returns an error if a recognised variable is not UTF-8 or cannot be parsed.
    pub fn apply_env_vars(&mut self) -> Result<(), ConfigError> {
        for (key, value) in env::vars_os() {
            let Some(name) = key.to_str().and_then(|k| k.strip_prefix(ENV_PREFIX)) else {
                continue;
            };
            let field = match name.to_lowercase().as_str() {
                "logging_level" => "logging.level",
                "timing_char_delay_ms" => "timing.char_delay_ms",
                "timing_grace_period_ms" => "timing.grace_period_ms",
                _ => continue,
            };

            let value = value.into_string().map_err(|raw| {
                ConfigError::invalid_value(field, raw.to_string_lossy(), "Value is not valid UTF-8")
            })?;
            let value = value.trim();
            if value.is_empty() {
                continue;
            }

            match field {
                "logging.level" => {
                    self.logging.level = value.parse().map_err(|_| {
                        ConfigError::invalid_value(field, value, "Invalid log level")
                    })?;
                }
                "timing.char_delay_ms" => self.timing.char_delay_ms = parse_millis(field, value)?,
                _ => self.timing.grace_period_ms = parse_millis(field, value)?,
            }
        }

        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validation::validate_config(self)
    }

    /// Serializes the configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    /// Returns the path to the directory where configuration files should be stored.
    ///
    /// This is OS-specific, e.g. `$HOME/.config/monitor-demo` on Linux.
    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("org", "monitor-demo", APP_NAME)
            .map(|proj_dirs| proj_dirs.config_dir().to_path_buf())
    }
}

fn parse_millis(field: &str, value: &str) -> Result<u64, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::invalid_value(field, value, "Expected a number of milliseconds"))
}
