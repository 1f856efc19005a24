//! Error types for the monitor demo
//!
//! The only failure the demos themselves treat as fatal is a text resource that
//! cannot be loaded. Everything else here covers the ambient layers around them
//! (configuration, logger setup, the output stream and worker threads).

use thiserror::Error;

/// Main error type for the monitor demo
#[derive(Error, Debug)]
pub enum DemoError {
    /// A named text resource could not be opened or read
    #[error("Could not open input file '{name}'")]
    ResourceLoad {
        /// Resource identifier as it was requested.
        name: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Writing to the output stream failed
    #[error("I/O error")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error")]
    Config(#[from] crate::config::ConfigError),

    /// The global logger could not be installed
    #[error("Logger error: {0}")]
    Logger(String),

    /// A demo worker thread panicked before finishing
    #[error("Worker '{0}' panicked")]
    WorkerPanicked(String),
}

/// Result type alias for operations that can fail with a [DemoError]
pub type Result<T> = std::result::Result<T, DemoError>;

impl DemoError {
    /// Create a new resource load error
    pub fn resource_load<S: Into<String>>(name: S, source: std::io::Error) -> Self {
        DemoError::ResourceLoad {
            name: name.into(),
            source,
        }
    }

    /// Whether this error came from loading a text resource.
    pub fn is_resource_load(&self) -> bool {
        matches!(self, DemoError::ResourceLoad { .. })
    }
}
