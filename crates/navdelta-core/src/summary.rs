//! Per-snapshot data quality summary.
//!
//! Used to sanity-check freshly extracted snapshots: how many holdings, how
//! much of NAV they account for, and which positions are largest.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::types::{FundId, Holding, Period, Snapshot};

/// Summary of one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotSummary {
    /// Fund summarized.
    pub fund: FundId,

    /// Reporting period.
    pub period: Period,

    /// Number of holdings in the snapshot.
    pub holdings_count: usize,

    /// Holdings with a disclosed weight.
    pub disclosed_count: usize,

    /// Sum of disclosed weights, in percent of NAV.
    pub total_nav: f64,

    /// Sum of market values, `None` if no holding reports one.
    pub total_value: Option<Decimal>,

    /// Largest holdings, descending weight, undisclosed last.
    pub top: Vec<Holding>,
}

impl SnapshotSummary {
    /// Holdings without a disclosed weight.
    #[must_use]
    pub fn undisclosed_count(&self) -> usize {
        self.holdings_count - self.disclosed_count
    }
}

/// Summarizes a snapshot, keeping the `top_n` largest holdings.
///
/// Ties keep snapshot order.
#[must_use]
pub fn summarize_snapshot(snapshot: &Snapshot, top_n: usize) -> SnapshotSummary {
    let disclosed: Vec<f64> = snapshot
        .holdings
        .iter()
        .filter_map(|h| h.percent_of_nav)
        .collect();

    let values: Vec<Decimal> = snapshot.holdings.iter().filter_map(|h| h.value).collect();
    let total_value = if values.is_empty() {
        None
    } else {
        Some(values.iter().sum())
    };

    let mut top: Vec<Holding> = snapshot.holdings.clone();
    top.sort_by(|a, b| by_weight_desc(a.percent_of_nav, b.percent_of_nav));
    top.truncate(top_n);

    SnapshotSummary {
        fund: snapshot.fund.clone(),
        period: snapshot.period,
        holdings_count: snapshot.holdings.len(),
        disclosed_count: disclosed.len(),
        total_nav: disclosed.iter().sum(),
        total_value,
        top,
    }
}

fn by_weight_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
