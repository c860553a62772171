//! Structured error types for pear-db.
//!
//! The binary (pear-cli) wraps these in `anyhow` with context; library
//! callers get matchable variants.

use std::io;
use thiserror::Error;

/// Main error type for pear-db operations
#[derive(Error, Debug)]
pub enum DbError {
    /// Configuration value missing, malformed, or out of range
    #[error("Configuration error: {reason}")]
    Config { reason: String },

    /// Reading a config file failed
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// Config file is not valid TOML
    #[error("Invalid config file: {source}")]
    Toml {
        #[from]
        source: toml::de::Error,
    },

    /// The handle never connected; carries the original connect failure
    #[error("Database unavailable: {reason}")]
    Unavailable { reason: String },

    /// Driver error while using an open connection
    #[error("Database error: {source}")]
    Sqlx {
        #[from]
        source: sqlx::Error,
    },
}

/// Result type alias for pear-db operations
pub type Result<T> = std::result::Result<T, DbError>;

impl DbError {
    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// Create an unavailable-connection error
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }
}
