//! Category filter, search and sort over a [`DeltaSet`].

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::delta::{DeltaRecord, DeltaSet};
use crate::error::HoldingsError;

/// Which bucket of the delta set to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    /// Every record (the pre-sorted `all` bucket).
    #[default]
    All,
    /// New positions only.
    Added,
    /// Exited positions only.
    Removed,
    /// Positions held in both periods.
    Changed,
}

impl CategoryFilter {
    /// Selects the source bucket.
    #[must_use]
    pub fn select<'a>(&self, delta: &'a DeltaSet) -> &'a [DeltaRecord] {
        match self {
            CategoryFilter::All => &delta.all,
            CategoryFilter::Added => &delta.added,
            CategoryFilter::Removed => &delta.removed,
            CategoryFilter::Changed => &delta.changed,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CategoryFilter::All => "all",
            CategoryFilter::Added => "added",
            CategoryFilter::Removed => "removed",
            CategoryFilter::Changed => "changed",
        };
        write!(f, "{name}")
    }
}

impl FromStr for CategoryFilter {
    type Err = HoldingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(CategoryFilter::All),
            "added" | "new" => Ok(CategoryFilter::Added),
            "removed" | "exited" => Ok(CategoryFilter::Removed),
            "changed" => Ok(CategoryFilter::Changed),
            _ => Err(HoldingsError::InvalidOption {
                option: "category",
                input: s.to_string(),
            }),
        }
    }
}

/// Display ordering of delta records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Largest weight first.
    #[default]
    NavDesc,
    /// Smallest weight first.
    NavAsc,
    /// Largest signed delta first.
    DeltaDesc,
    /// Smallest signed delta first.
    DeltaAsc,
    /// Company name A-Z, ignoring case.
    NameAsc,
}

impl SortKey {
    /// Compares two records under this key.
    #[must_use]
    pub fn compare(&self, a: &DeltaRecord, b: &DeltaRecord) -> Ordering {
        match self {
            SortKey::NavDesc => cmp_f64(b.display_weight(), a.display_weight()),
            SortKey::NavAsc => cmp_f64(a.display_weight(), b.display_weight()),
            SortKey::DeltaDesc => cmp_f64(b.nav_delta, a.nav_delta),
            SortKey::DeltaAsc => cmp_f64(a.nav_delta, b.nav_delta),
            SortKey::NameAsc => a.company.to_lowercase().cmp(&b.company.to_lowercase()),
        }
    }
}

fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortKey::NavDesc => "nav-desc",
            SortKey::NavAsc => "nav-asc",
            SortKey::DeltaDesc => "delta-desc",
            SortKey::DeltaAsc => "delta-asc",
            SortKey::NameAsc => "name-asc",
        };
        write!(f, "{name}")
    }
}

impl FromStr for SortKey {
    type Err = HoldingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "nav-desc" | "nav" => Ok(SortKey::NavDesc),
            "nav-asc" => Ok(SortKey::NavAsc),
            "delta-desc" | "delta" => Ok(SortKey::DeltaDesc),
            "delta-asc" => Ok(SortKey::DeltaAsc),
            "name-asc" | "name" => Ok(SortKey::NameAsc),
            _ => Err(HoldingsError::InvalidOption {
                option: "sort key",
                input: s.to_string(),
            }),
        }
    }
}

/// Caller-supplied display criteria for a delta set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeltaQuery {
    /// Bucket to show.
    pub category: CategoryFilter,
    /// Case-insensitive substring of the company name; blank matches all.
    pub search: Option<String>,
    /// Ordering of the result.
    pub sort: SortKey,
}

impl DeltaQuery {
    /// Creates a query showing every record, largest weight first.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the category filter.
    #[must_use]
    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    /// Sets the search text.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Sets the sort key.
    #[must_use]
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Returns true if the record passes the search text.
    ///
    /// Blank search text matches everything; otherwise the text is matched
    /// as given, surrounding whitespace included.
    #[must_use]
    pub fn matches(&self, record: &DeltaRecord) -> bool {
        match self.search.as_deref() {
            None => true,
            Some(needle) if needle.trim().is_empty() => true,
            Some(needle) => record
                .company
                .to_lowercase()
                .contains(&needle.to_lowercase()),
        }
    }

    /// Filters, searches and sorts `delta` for display.
    ///
    /// The sort is stable: records with equal keys keep their order in the
    /// selected bucket (for `all`, descending |delta|).
    #[must_use]
    pub fn apply(&self, delta: &DeltaSet) -> Vec<DeltaRecord> {
        let mut records: Vec<DeltaRecord> = self
            .category
            .select(delta)
            .iter()
            .filter(|r| self.matches(r))
            .cloned()
            .collect();

        records.sort_by(|a, b| self.sort.compare(a, b));
        records
    }
}
