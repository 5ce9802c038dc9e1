//! Fund identifiers and holdings snapshots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Holding, Period};

/// Fund identifier (registry key such as `mirae`).
#[derive(Debug, Clone, Hash, Eq, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FundId(pub String);

impl FundId {
    /// Create a new fund ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for FundId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for FundId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Store key of a snapshot.
#[derive(Debug, Clone, Hash, Eq, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SnapshotKey {
    /// Fund the snapshot belongs to.
    pub fund: FundId,
    /// Reporting period.
    pub period: Period,
}

impl SnapshotKey {
    /// Creates a new key.
    #[must_use]
    pub fn new(fund: FundId, period: Period) -> Self {
        Self { fund, period }
    }
}

impl fmt::Display for SnapshotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.fund, self.period)
    }
}

/// All disclosed equity holdings of one fund for one period.
///
/// Holdings keep the order the loader supplied; nothing downstream relies on
/// that order being sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Fund identifier.
    pub fund: FundId,

    /// Reporting period.
    pub period: Period,

    /// Holdings as supplied.
    pub holdings: Vec<Holding>,

    /// When the loader extracted the data, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extracted_at: Option<DateTime<Utc>>,
}

impl Snapshot {
    /// Creates a new snapshot.
    #[must_use]
    pub fn new(fund: impl Into<FundId>, period: Period, holdings: Vec<Holding>) -> Self {
        Self {
            fund: fund.into(),
            period,
            holdings,
            extracted_at: None,
        }
    }

    /// Sets the extraction timestamp.
    #[must_use]
    pub fn with_extracted_at(mut self, at: DateTime<Utc>) -> Self {
        self.extracted_at = Some(at);
        self
    }

    /// Returns the store key for this snapshot.
    #[must_use]
    pub fn key(&self) -> SnapshotKey {
        SnapshotKey::new(self.fund.clone(), self.period)
    }

    /// Number of holdings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.holdings.len()
    }

    /// Returns true if the snapshot has no holdings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Month;

    #[test]
    fn test_snapshot_key() {
        let snapshot = Snapshot::new(
            "mirae",
            Period::new(Month::June, 2025),
            vec![Holding::new("AAA", 10.0)],
        );

        let key = snapshot.key();
        assert_eq!(key.fund, FundId::new("mirae"));
        assert_eq!(key.period, Period::new(Month::June, 2025));
        assert_eq!(key.to_string(), "mirae June 2025");
        assert_eq!(snapshot.len(), 1);
        assert!(!snapshot.is_empty());
    }

    #[test]
    fn test_key_ordering_groups_by_fund() {
        let a = SnapshotKey::new(FundId::new("canara"), Period::new(Month::December, 2025));
        let b = SnapshotKey::new(FundId::new("mirae"), Period::new(Month::January, 2024));
        let c = SnapshotKey::new(FundId::new("mirae"), Period::new(Month::March, 2024));
        assert!(a < b);
        assert!(b < c);
    }
}
