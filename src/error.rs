//! Error types for alertmanager-config-codec
//!
//! This module defines structured error types using the `thiserror` crate.
//! The only hard failure a decode can produce is a shape mismatch in the
//! untyped input; everything else (bad durations, bad host:port strings,
//! unparsable URLs) falls back to a zero value by design.

use std::io;
use thiserror::Error;

/// Main error type for the configuration codec
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An input cell did not hold the expected scalar/list/map shape.
    ///
    /// `path` is a dotted field path into the untyped document, e.g.
    /// `receiver[1].webhook_configs[0].url`, so callers can report exactly
    /// which key was malformed.
    #[error("type mismatch at `{path}`: expected {expected}, found {found}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        found: &'static str,
    },

    /// Error occurred during JSON parsing or serialization
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error occurred while reading or writing a document file
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl ConfigError {
    /// Build a type-mismatch error for the given field path.
    pub fn mismatch(path: impl Into<String>, expected: &'static str, found: &'static str) -> Self {
        ConfigError::TypeMismatch {
            path: path.into(),
            expected,
            found,
        }
    }
}

/// Result type alias for the configuration codec
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatch_display_includes_path() {
        let err = ConfigError::mismatch("route.group_wait", "string", "bool");
        let msg = err.to_string();
        assert!(msg.contains("route.group_wait"));
        assert!(msg.contains("expected string"));
        assert!(msg.contains("found bool"));
    }
}
