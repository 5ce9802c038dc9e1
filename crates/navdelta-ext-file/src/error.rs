//! Error types for snapshot loading.

use std::path::{Path, PathBuf};

use navdelta_core::HoldingsError;
use thiserror::Error;

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Errors raised while reading the registry or snapshot files.
#[derive(Error, Debug)]
pub enum LoadError {
    /// A file or directory could not be read.
    #[error("IO error on {}: {source}", path.display())]
    Io {
        /// Offending path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A snapshot file is not valid JSON or does not match the format.
    #[error("Parse error in {}: {message}", path.display())]
    Parse {
        /// Offending path.
        path: PathBuf,
        /// Parser message.
        message: String,
    },

    /// The registry file is invalid.
    #[error("Config error: {0}")]
    Config(String),

    /// A file name does not follow `{prefix}-{Month}-{Year}.json`.
    #[error("Invalid snapshot file name '{0}'")]
    InvalidFileName(String),

    /// No fund with this key is registered.
    #[error("Unknown fund '{0}'")]
    UnknownFund(String),

    /// The loaded data violates a holdings contract.
    #[error(transparent)]
    Holdings(#[from] HoldingsError),
}

impl LoadError {
    /// Create an IO error for a path.
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Create a parse error for a path.
    pub fn parse(path: &Path, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }
}
