//! Errors raised while reading, overriding and checking the configuration.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Why a configuration could not be produced.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file exists but reading it failed.
    #[error("Failed to read config file {}", path.display())]
    Read {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The file is not valid TOML for this configuration.
    #[error("Failed to parse config file {}", path.display())]
    Parse {
        /// File that was being parsed.
        path: PathBuf,
        /// Parser diagnostics.
        #[source]
        source: toml::de::Error,
    },

    /// The configuration could not be written back out as TOML.
    #[error("Failed to serialize configuration")]
    Serialize(#[from] toml::ser::Error),

    /// A required value is empty.
    #[error("Missing required configuration: {0}")]
    MissingValue(String),

    /// A value is present but unusable.
    #[error("Invalid value for '{field}': '{value}'. {reason}")]
    InvalidValue {
        /// Dotted name of the offending field.
        field: String,
        /// The value as given.
        value: String,
        /// What is wrong with it.
        reason: String,
    },
}

impl ConfigError {
    /// Rejects `value` for `field`.
    pub fn invalid_value<S1, S2, S3>(field: S1, value: S2, reason: S3) -> Self
    where
        S1: Into<String>,
        S2: std::fmt::Display,
        S3: Into<String>,
    {
        ConfigError::InvalidValue {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Reports an empty required field.
    pub fn missing_value<S: Into<String>>(field: S) -> Self {
        ConfigError::MissingValue(field.into())
    }
}
