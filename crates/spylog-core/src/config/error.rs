//! Configuration error types
//!
//! None of these reach callers of the read API. Resolution logs them and
//! moves on to the next source.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Properties file missing or unreadable
    #[error("Properties file {path} unavailable: {source}")]
    SourceUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Line in the properties file that is not a `key=value` pair
    #[error("Malformed entry at {path}:{line}: {content:?}")]
    MalformedEntry {
        path: PathBuf,
        line: usize,
        content: String,
    },

    /// Value that does not parse as the setting's kind
    #[error("Invalid value {value:?} for {key}: expected {expected}")]
    InvalidValue {
        key: String,
        value: String,
        expected: &'static str,
    },

    /// Key not present in the settings catalogue
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),
}
