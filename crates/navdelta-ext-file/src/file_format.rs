//! JSON snapshot file format and file naming.
//!
//! One file per fund and period, named `{normalized_name}-{Month}-{Year}.json`:
//!
//! ```json
//! {
//!   "fundName": "Mirae Asset Large & Midcap Fund",
//!   "month": "June",
//!   "year": 2025,
//!   "extractedAt": "2025-07-10T14:23:11.482913",
//!   "holdingsCount": 2,
//!   "holdings": [
//!     {"company": "HDFC Bank Ltd.", "percentOfNAV": 9.1, "shares": 1200000, "value": 23456.78},
//!     {"company": "ICICI Bank Ltd.", "percentOfNAV": 6.8}
//!   ]
//! }
//! ```

use std::path::Path;

use chrono::{DateTime, NaiveDateTime, Utc};
use navdelta_core::{FundId, Holding, Month, Period, Snapshot};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{LoadError, LoadResult};
use crate::normalize::normalize_company_name;

/// On-disk representation of one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotFile {
    /// Fund display name.
    pub fund_name: String,

    /// Reporting month.
    pub month: Month,

    /// Reporting year.
    pub year: i32,

    /// Extraction timestamp, ISO-8601 with or without offset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extracted_at: Option<String>,

    /// Holdings count written by the extractor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holdings_count: Option<usize>,

    /// Holdings in extractor order.
    #[serde(default)]
    pub holdings: Vec<Holding>,
}

impl SnapshotFile {
    /// Builds the file representation of a snapshot.
    pub fn from_snapshot(snapshot: &Snapshot, fund_name: impl Into<String>) -> Self {
        Self {
            fund_name: fund_name.into(),
            month: snapshot.period.month,
            year: snapshot.period.year,
            extracted_at: snapshot.extracted_at.map(|at| at.to_rfc3339()),
            holdings_count: Some(snapshot.holdings.len()),
            holdings: snapshot.holdings.clone(),
        }
    }

    /// Reporting period of the file.
    pub fn period(&self) -> Period {
        Period::new(self.month, self.year)
    }

    /// Converts to a core snapshot of `fund`.
    ///
    /// With `normalize` set, company names go through
    /// [`normalize_company_name`]; names that normalize to nothing are dropped.
    pub fn into_snapshot(self, fund: FundId, normalize: bool) -> Snapshot {
        let period = self.period();

        if let Some(expected) = self.holdings_count {
            if expected != self.holdings.len() {
                warn!(
                    %fund,
                    %period,
                    expected,
                    actual = self.holdings.len(),
                    "holdingsCount does not match holdings list"
                );
            }
        }

        let extracted_at = self.extracted_at.as_deref().and_then(|raw| {
            let parsed = parse_extracted_at(raw);
            if parsed.is_none() {
                warn!(%fund, %period, raw, "Ignoring unparseable extractedAt");
            }
            parsed
        });

        let holdings = if normalize {
            self.holdings
                .into_iter()
                .filter_map(|mut holding| {
                    holding.company = normalize_company_name(&holding.company)?;
                    Some(holding)
                })
                .collect()
        } else {
            self.holdings
        };

        let snapshot = Snapshot::new(fund, period, holdings);
        match extracted_at {
            Some(at) => snapshot.with_extracted_at(at),
            None => snapshot,
        }
    }
}

/// Parses an extraction timestamp. Naive timestamps are taken as UTC.
pub fn parse_extracted_at(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Some(at.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// File name of a snapshot: `{prefix}-{Month}-{Year}.json`.
pub fn snapshot_file_name(prefix: &str, period: Period) -> String {
    format!("{prefix}-{}-{}.json", period.month.name(), period.year)
}

/// Splits a snapshot file name into its prefix and period.
pub fn parse_snapshot_file_name(file_name: &str) -> LoadResult<(String, Period)> {
    let invalid = || LoadError::InvalidFileName(file_name.to_string());

    let stem = file_name.strip_suffix(".json").ok_or_else(invalid)?;
    let mut parts = stem.rsplitn(3, '-');
    let (Some(year), Some(month), Some(prefix)) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(invalid());
    };
    if prefix.is_empty() {
        return Err(invalid());
    }

    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: Month = month.parse().map_err(|_| invalid())?;
    Ok((prefix.to_string(), Period::new(month, year)))
}

/// Reads and parses a snapshot file.
pub fn read_snapshot_file(path: &Path) -> LoadResult<SnapshotFile> {
    let content = std::fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
    serde_json::from_str(&content).map_err(|e| LoadError::parse(path, e.to_string()))
}

/// Writes a snapshot file, pretty-printed like the extractor does.
pub fn write_snapshot_file(path: &Path, file: &SnapshotFile) -> LoadResult<()> {
    let content =
        serde_json::to_string_pretty(file).map_err(|e| LoadError::parse(path, e.to_string()))?;
    std::fs::write(path, content).map_err(|e| LoadError::io(path, e))
}
