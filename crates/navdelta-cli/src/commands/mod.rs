//! CLI command implementations.

pub mod diff;
pub mod funds;
pub mod matrix;
pub mod periods;
pub mod verify;

// Re-export submodules for convenience
pub use diff::DiffArgs;
pub use matrix::MatrixArgs;
pub use periods::PeriodsArgs;
pub use verify::VerifyArgs;

use std::path::Path;

use anyhow::Result;
use navdelta_core::{FundId, HoldingsError, Period, SnapshotStore};
use navdelta_ext_file::{load_store, FundConfig, RegistryConfig};
use tracing::debug;

use crate::error::{CliError, CliResult};

/// Registry file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "navdelta.toml";

/// Loads the fund registry.
///
/// An explicit path must exist. Without one, `./navdelta.toml` is used if
/// present, otherwise the built-in registry.
pub fn load_registry(path: Option<&Path>) -> CliResult<RegistryConfig> {
    let path = match path {
        Some(path) => path,
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => Path::new(DEFAULT_CONFIG_FILE),
        None => {
            debug!("No registry file, using built-in funds");
            return Ok(RegistryConfig::default());
        }
    };

    debug!(path = %path.display(), "Loading registry");
    RegistryConfig::from_file(path).map_err(|e| CliError::Config(e.to_string()))
}

/// Looks up a fund by key.
pub fn find_fund<'a>(registry: &'a RegistryConfig, key: &str) -> CliResult<&'a FundConfig> {
    registry.fund(key).map_err(|_| CliError::UnknownFund {
        key: key.to_string(),
        known: registry
            .funds
            .iter()
            .map(|f| f.key.as_str())
            .collect::<Vec<_>>()
            .join(", "),
    })
}

/// Loads the snapshot store for the registry.
pub fn load(registry: &RegistryConfig) -> Result<SnapshotStore> {
    Ok(load_store(registry)?)
}

/// Parses a period argument such as `June-2025`.
pub fn parse_period(s: &str) -> CliResult<Period> {
    s.parse().map_err(|_| CliError::InvalidPeriod(s.to_string()))
}

/// Maps a core error to a CLI error, keeping "no data" distinct.
pub fn holdings_error(error: HoldingsError) -> CliError {
    match error {
        HoldingsError::InvalidPeriod { input, .. } => CliError::InvalidPeriod(input),
        HoldingsError::InvalidOption { .. } => CliError::InvalidOption(error.to_string()),
        HoldingsError::DuplicateCompany { .. } | HoldingsError::FundMismatch { .. } => {
            CliError::InvalidData(error.to_string())
        }
        HoldingsError::MissingSnapshot { .. }
        | HoldingsError::NoData { .. }
        | HoldingsError::NoPreviousPeriod { .. } => CliError::NoData(error.to_string()),
    }
}

/// Fails with [`CliError::NoData`] if the fund has nothing loaded.
pub fn require_data(store: &SnapshotStore, fund: &FundConfig) -> CliResult<FundId> {
    let id = fund.fund_id();
    if store.periods(&id).is_empty() {
        return Err(CliError::NoData(format!(
            "no snapshots for {} in {}",
            fund.key,
            fund.data_dir.display()
        )));
    }
    Ok(id)
}
