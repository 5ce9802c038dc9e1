//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Fund key not in the registry.
    #[error("Unknown fund '{key}'. Registered funds: {known}")]
    UnknownFund {
        /// Requested key.
        key: String,
        /// Comma-separated registered keys.
        known: String,
    },

    /// Invalid period argument.
    #[error("Invalid period: {0}. Use Month-Year, e.g. June-2025 or 2025-06.")]
    InvalidPeriod(String),

    /// Invalid category or sort argument.
    #[error("Invalid option: {0}")]
    InvalidOption(String),

    /// Nothing loaded for the request.
    #[error("No data: {0}")]
    NoData(String),

    /// Snapshot data breaks an input contract (duplicate company, wrong fund).
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
