//! Error types for DocBridge.
//!
//! Library crates use [`DocBridgeError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.
//!
//! Note that the documentation engine itself never propagates failures past
//! its boundary — fetch and catalog-load failures are absorbed into text
//! payloads. This type covers the ambient surface (config loading, CLI
//! argument handling) where a hard error is the right answer.

use std::path::PathBuf;

/// Top-level error type for all DocBridge operations.
#[derive(Debug, thiserror::Error)]
pub enum DocBridgeError {
    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Structured-data parsing error (TOML config, JSON catalog).
    #[error("parse error: {message}")]
    Parse { message: String },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, DocBridgeError>;

impl DocBridgeError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a parse error from any displayable message.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formatting() {
        let err = DocBridgeError::config("missing paths section");
        assert_eq!(err.to_string(), "config error: missing paths section");

        let err = DocBridgeError::parse("unexpected end of input at line 3");
        assert!(err.to_string().contains("line 3"));
    }
}
