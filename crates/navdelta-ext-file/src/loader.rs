//! Snapshot discovery, parallel loading and store reload.

use std::sync::Arc;

use navdelta_core::{Period, SharedStore, Snapshot, SnapshotStore};
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::error::{LoadError, LoadResult};
use crate::file_format::{parse_snapshot_file_name, read_snapshot_file, snapshot_file_name};
use crate::registry::{FundConfig, RegistryConfig};

/// Lists the periods with a snapshot file for `fund`, oldest first.
///
/// A missing data directory yields no periods. Files that do not follow the
/// naming scheme or belong to another fund are ignored. A file whose month is
/// not spelled out in full (`Jun`, `6`) is skipped with a warning, since
/// loading only reads the canonical `{prefix}-{Month}-{Year}.json` name.
pub fn discover_periods(fund: &FundConfig) -> LoadResult<Vec<Period>> {
    let dir = &fund.data_dir;
    if !dir.exists() {
        debug!(fund = %fund.key, dir = %dir.display(), "Data directory does not exist");
        return Ok(Vec::new());
    }

    let entries = std::fs::read_dir(dir).map_err(|e| LoadError::io(dir, e))?;
    let mut periods = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| LoadError::io(dir, e))?;
        let file_name = entry.file_name();
        let Some(file_name) = file_name.to_str() else {
            continue;
        };
        match parse_snapshot_file_name(file_name) {
            Ok((prefix, period)) if prefix == fund.normalized_name => {
                let canonical = snapshot_file_name(&fund.normalized_name, period);
                if file_name == canonical {
                    periods.push(period);
                } else {
                    warn!(
                        fund = %fund.key,
                        file = file_name,
                        expected = %canonical,
                        "Ignoring snapshot file with non-canonical name"
                    );
                }
            }
            _ => {}
        }
    }

    periods.sort();
    periods.dedup();
    Ok(periods)
}

/// Loads one period of a fund.
///
/// The file name decides the period; a file whose content names another
/// period is loaded under its file name period with a warning.
pub fn load_snapshot(fund: &FundConfig, period: Period, normalize: bool) -> LoadResult<Snapshot> {
    let path = fund.snapshot_path(period);
    let mut file = read_snapshot_file(&path)?;

    if file.period() != period {
        warn!(
            fund = %fund.key,
            path = %path.display(),
            content = %file.period(),
            "Snapshot content period differs from file name"
        );
        file.month = period.month;
        file.year = period.year;
    }

    Ok(file.into_snapshot(fund.fund_id(), normalize))
}

/// Loads every period of a fund in parallel.
///
/// Periods that cannot be read or parsed are logged and skipped.
pub fn load_fund(fund: &FundConfig, normalize: bool) -> LoadResult<Vec<Snapshot>> {
    let periods = discover_periods(fund)?;

    let snapshots: Vec<Snapshot> = periods
        .par_iter()
        .filter_map(|&period| match load_snapshot(fund, period, normalize) {
            Ok(snapshot) => Some(snapshot),
            Err(error) => {
                warn!(fund = %fund.key, %period, %error, "Skipping unreadable snapshot");
                None
            }
        })
        .collect();

    debug!(
        fund = %fund.key,
        discovered = periods.len(),
        loaded = snapshots.len(),
        "Loaded fund"
    );
    Ok(snapshots)
}

/// Loads every registered fund into a new store.
///
/// Funds whose data directory cannot be listed are logged and skipped, so
/// the store holds whatever could be read.
///
/// # Errors
///
/// Returns [`LoadError::Config`] if the registry is invalid.
pub fn load_store(registry: &RegistryConfig) -> LoadResult<SnapshotStore> {
    registry.validate()?;

    let loaded: Vec<Vec<Snapshot>> = registry
        .funds
        .par_iter()
        .filter_map(|fund| match load_fund(fund, registry.normalize_names) {
            Ok(snapshots) => Some(snapshots),
            Err(error) => {
                warn!(fund = %fund.key, %error, "Skipping fund");
                None
            }
        })
        .collect();

    let store = SnapshotStore::builder()
        .add_all(loaded.into_iter().flatten())
        .build();
    info!(
        funds = registry.funds.len(),
        snapshots = store.len(),
        "Snapshot store loaded"
    );
    Ok(store)
}

/// Loads a fresh store and swaps it into `shared` once complete.
///
/// On error the shared store is left untouched.
pub fn reload(shared: &SharedStore, registry: &RegistryConfig) -> LoadResult<Arc<SnapshotStore>> {
    let store = load_store(registry)?;
    shared.replace(store);
    Ok(shared.snapshot())
}
