//! Error types for docstring extraction, configuration and page generation

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while isolating a script's docstring.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocstringError {
    #[error("expected at least two '\"\"\"' delimiters, found {found}")]
    MissingDelimiter { found: usize },
}

/// Errors that can occur when loading a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for '{field}': {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Errors that abort a generation run.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed script '{}': {source}", .path.display())]
    Docstring {
        path: PathBuf,
        source: DocstringError,
    },

    #[error("failed to report progress: {0}")]
    Progress(#[source] std::io::Error),
}
