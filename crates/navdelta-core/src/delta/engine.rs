//! Snapshot comparison.

use std::cmp::Ordering;

use crate::error::{HoldingsError, HoldingsResult};
use crate::identity::index_holdings;
use crate::types::Snapshot;

use super::{DeltaRecord, DeltaSet};

/// Compares two snapshots of the same fund.
///
/// Every company of `current` lands in `added` (not held in `previous`) or
/// `changed` (held in both), in `current` order. Every company only in
/// `previous` lands in `removed`, in `previous` order. `all` concatenates
/// added, changed and removed and stable-sorts them by descending absolute
/// delta, so equal magnitudes keep that concatenation order.
///
/// # Errors
///
/// - [`HoldingsError::FundMismatch`] if the snapshots belong to different funds
/// - [`HoldingsError::DuplicateCompany`] if either snapshot repeats a company
///
/// # Example
///
/// ```rust
/// use navdelta_core::prelude::*;
///
/// let june = Snapshot::new("mirae", "2025-06".parse()?, vec![
///     Holding::new("AAA", 10.0),
///     Holding::new("BBB", 5.0),
/// ]);
/// let july = Snapshot::new("mirae", "2025-07".parse()?, vec![
///     Holding::new("AAA", 12.0),
///     Holding::new("CCC", 3.0),
/// ]);
///
/// let delta = compute_delta(&july, &june)?;
/// let order: Vec<_> = delta.all.iter().map(|r| r.company.as_str()).collect();
/// assert_eq!(order, ["BBB", "CCC", "AAA"]);
/// # Ok::<(), HoldingsError>(())
/// ```
pub fn compute_delta(current: &Snapshot, previous: &Snapshot) -> HoldingsResult<DeltaSet> {
    if current.fund != previous.fund {
        return Err(HoldingsError::fund_mismatch(&current.fund, &previous.fund));
    }

    let current_index = index_holdings(current)?;
    let previous_index = index_holdings(previous)?;

    let mut added = Vec::new();
    let mut changed = Vec::new();

    for holding in &current.holdings {
        match previous_index.get(&holding.key()) {
            Some(prev) => changed.push(DeltaRecord::changed(holding, prev)),
            None => added.push(DeltaRecord::added(holding)),
        }
    }

    let removed: Vec<DeltaRecord> = previous
        .holdings
        .iter()
        .filter(|h| !current_index.contains_key(&h.key()))
        .map(DeltaRecord::removed)
        .collect();

    let mut all: Vec<DeltaRecord> = added
        .iter()
        .chain(changed.iter())
        .chain(removed.iter())
        .cloned()
        .collect();
    all.sort_by(by_abs_delta_desc);

    Ok(DeltaSet {
        fund: current.fund.clone(),
        current_period: current.period,
        previous_period: previous.period,
        added,
        removed,
        changed,
        all,
    })
}

fn by_abs_delta_desc(a: &DeltaRecord, b: &DeltaRecord) -> Ordering {
    b.nav_delta
        .abs()
        .partial_cmp(&a.nav_delta.abs())
        .unwrap_or(Ordering::Equal)
}
