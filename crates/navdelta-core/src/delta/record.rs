//! Delta records and the partitioned delta set.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{FundId, Holding, NavWeight, Period};

/// How a position moved between the previous and the current snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeltaStatus {
    /// Present now, not held before.
    New,
    /// Held before, not present now.
    Exited,
    /// Held in both, weight went up.
    Increased,
    /// Held in both, weight went down.
    Decreased,
    /// Held in both, weight identical.
    Unchanged,
}

impl DeltaStatus {
    /// Status of a position held in both snapshots, from the sign of its delta.
    #[must_use]
    pub fn from_delta(nav_delta: f64) -> Self {
        if nav_delta > 0.0 {
            DeltaStatus::Increased
        } else if nav_delta < 0.0 {
            DeltaStatus::Decreased
        } else {
            DeltaStatus::Unchanged
        }
    }

    /// Status seen from the other direction of the comparison.
    #[must_use]
    pub fn reversed(&self) -> Self {
        match self {
            DeltaStatus::New => DeltaStatus::Exited,
            DeltaStatus::Exited => DeltaStatus::New,
            DeltaStatus::Increased => DeltaStatus::Decreased,
            DeltaStatus::Decreased => DeltaStatus::Increased,
            DeltaStatus::Unchanged => DeltaStatus::Unchanged,
        }
    }
}

impl fmt::Display for DeltaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DeltaStatus::New => "new",
            DeltaStatus::Exited => "exited",
            DeltaStatus::Increased => "increased",
            DeltaStatus::Decreased => "decreased",
            DeltaStatus::Unchanged => "unchanged",
        };
        write!(f, "{name}")
    }
}

/// One row of a comparison between two snapshots.
///
/// Never both sides [`NavWeight::NotHeld`]: a company absent from both
/// snapshots has no record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeltaRecord {
    /// Company display name (current spelling when held in both).
    pub company: String,

    /// Weight in the current snapshot.
    #[serde(rename = "currentNAV")]
    pub current: NavWeight,

    /// Weight in the previous snapshot.
    #[serde(rename = "previousNAV")]
    pub previous: NavWeight,

    /// current - previous, undisclosed or not-held weights counting as 0.
    #[serde(rename = "navDelta")]
    pub nav_delta: f64,

    /// Movement classification.
    pub status: DeltaStatus,
}

impl DeltaRecord {
    /// Record for a position that only exists in the current snapshot.
    #[must_use]
    pub fn added(current: &Holding) -> Self {
        let weight = current.weight();
        Self {
            company: current.company.clone(),
            current: weight,
            previous: NavWeight::NotHeld,
            nav_delta: weight.value(),
            status: DeltaStatus::New,
        }
    }

    /// Record for a position that only exists in the previous snapshot.
    #[must_use]
    pub fn removed(previous: &Holding) -> Self {
        let weight = previous.weight();
        Self {
            company: previous.company.clone(),
            current: NavWeight::NotHeld,
            previous: weight,
            nav_delta: -weight.value(),
            status: DeltaStatus::Exited,
        }
    }

    /// Record for a position held in both snapshots.
    #[must_use]
    pub fn changed(current: &Holding, previous: &Holding) -> Self {
        let (cur, prev) = (current.weight(), previous.weight());
        let nav_delta = cur.value() - prev.value();
        Self {
            company: current.company.clone(),
            current: cur,
            previous: prev,
            nav_delta,
            status: DeltaStatus::from_delta(nav_delta),
        }
    }

    /// Weight shown for the row: the current weight, or the previous one for
    /// exited positions.
    #[must_use]
    pub fn display_weight(&self) -> f64 {
        if self.current.is_held() {
            self.current.value()
        } else {
            self.previous.value()
        }
    }
}

/// Per-status record counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeltaCounts {
    /// New positions.
    pub added: usize,
    /// Exited positions.
    pub removed: usize,
    /// Positions whose weight went up.
    pub increased: usize,
    /// Positions whose weight went down.
    pub decreased: usize,
    /// Positions with identical weight.
    pub unchanged: usize,
}

/// Result of comparing two snapshots of one fund.
///
/// `added`, `changed` and `removed` partition every company present in either
/// snapshot. `all` is their union ordered by descending absolute delta.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeltaSet {
    /// Fund compared.
    pub fund: FundId,
    /// Period of the current snapshot.
    pub current_period: Period,
    /// Period of the previous snapshot.
    pub previous_period: Period,
    /// Positions only in the current snapshot, in current order.
    pub added: Vec<DeltaRecord>,
    /// Positions only in the previous snapshot, in previous order.
    pub removed: Vec<DeltaRecord>,
    /// Positions in both snapshots, in current order.
    pub changed: Vec<DeltaRecord>,
    /// Union of the three buckets by descending |navDelta|.
    pub all: Vec<DeltaRecord>,
}

impl DeltaSet {
    /// Total number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.all.len()
    }

    /// Returns true if neither snapshot had holdings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    /// Counts records by status.
    #[must_use]
    pub fn counts(&self) -> DeltaCounts {
        let mut counts = DeltaCounts {
            added: self.added.len(),
            removed: self.removed.len(),
            ..DeltaCounts::default()
        };
        for record in &self.changed {
            match record.status {
                DeltaStatus::Increased => counts.increased += 1,
                DeltaStatus::Decreased => counts.decreased += 1,
                _ => counts.unchanged += 1,
            }
        }
        counts
    }

    /// Finds a record by company, ignoring case.
    #[must_use]
    pub fn find(&self, company: &str) -> Option<&DeltaRecord> {
        self.all
            .iter()
            .find(|r| crate::identity::same_company(&r.company, company))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_delta() {
        assert_eq!(DeltaStatus::from_delta(0.5), DeltaStatus::Increased);
        assert_eq!(DeltaStatus::from_delta(-0.01), DeltaStatus::Decreased);
        assert_eq!(DeltaStatus::from_delta(0.0), DeltaStatus::Unchanged);
        assert_eq!(DeltaStatus::from_delta(-0.0), DeltaStatus::Unchanged);
    }

    #[test]
    fn test_status_reversed() {
        assert_eq!(DeltaStatus::New.reversed(), DeltaStatus::Exited);
        assert_eq!(DeltaStatus::Increased.reversed(), DeltaStatus::Decreased);
        assert_eq!(DeltaStatus::Unchanged.reversed(), DeltaStatus::Unchanged);
    }

    #[test]
    fn test_added_record() {
        let record = DeltaRecord::added(&Holding::new("CCC", 3.0));
        assert_eq!(record.current, NavWeight::Percent(3.0));
        assert_eq!(record.previous, NavWeight::NotHeld);
        assert_eq!(record.nav_delta, 3.0);
        assert_eq!(record.status, DeltaStatus::New);
    }

    #[test]
    fn test_removed_record() {
        let record = DeltaRecord::removed(&Holding::new("BBB", 5.0));
        assert_eq!(record.current, NavWeight::NotHeld);
        assert_eq!(record.previous, NavWeight::Percent(5.0));
        assert_eq!(record.nav_delta, -5.0);
        assert_eq!(record.status, DeltaStatus::Exited);
        assert_eq!(record.display_weight(), 5.0);
    }

    #[test]
    fn test_undisclosed_weight_is_preserved() {
        let record = DeltaRecord::changed(&Holding::undisclosed("AAA"), &Holding::new("AAA", 2.0));
        assert_eq!(record.current, NavWeight::Undisclosed);
        assert_eq!(record.nav_delta, -2.0);
        assert_eq!(record.status, DeltaStatus::Decreased);

        let record = DeltaRecord::added(&Holding::undisclosed("DDD"));
        assert_eq!(record.current, NavWeight::Undisclosed);
        assert_eq!(record.nav_delta, 0.0);
        assert_eq!(record.status, DeltaStatus::New);
    }

    #[test]
    fn test_serde_field_names() {
        let record = DeltaRecord::changed(&Holding::new("AAA", 12.0), &Holding::new("AAA", 10.0));
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"currentNAV\""));
        assert!(json.contains("\"previousNAV\""));
        assert!(json.contains("\"navDelta\":2.0"));
        assert!(json.contains("\"status\":\"increased\""));
    }
}
