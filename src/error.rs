//! Error types for the log tail library.

use thiserror::Error;

/// The main error type for log tail operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The caller cancelled the wait. Tailing must stop.
    #[error("context cancelled")]
    Cancelled,

    /// The notification source kept failing until the retry budget ran out.
    #[error("file watcher failed {retries} times in a row: {source}")]
    RetriesExhausted {
        retries: u32,
        #[source]
        source: notify::Error,
    },

    /// File watching errors from the notify crate.
    #[error("File watcher error: {0}")]
    Watcher(#[from] notify::Error),

    /// I/O errors when reading configuration.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File path errors.
    #[error("Invalid file path: {message}")]
    InvalidPath { message: String },

    /// Configuration values that cannot drive a waiter.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Malformed TOML configuration.
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The subscription side of a manual feed has been dropped.
    #[error("Subscription closed")]
    SubscriptionClosed,
}

/// A convenient Result type for log tail operations.
pub type Result<T> = std::result::Result<T, Error>;
