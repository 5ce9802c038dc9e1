//! Company identity matching across snapshots.
//!
//! The policy is deliberately narrow: two names refer to the same position
//! when they are equal ignoring case. No fuzzy matching and no punctuation
//! stripping happen here; legal-suffix drift ("Ltd" vs "Limited") must be
//! normalized by the loader before snapshots reach this crate.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::error::{HoldingsError, HoldingsResult};
use crate::types::{Holding, Snapshot};

/// Canonical (lower-cased) company identity.
#[derive(Debug, Clone, Hash, Eq, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CompanyKey(String);

impl CompanyKey {
    /// Canonicalizes a display name.
    pub fn new(company: &str) -> Self {
        Self(company.to_lowercase())
    }

    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CompanyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Returns true if both names refer to the same position.
#[must_use]
pub fn same_company(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Indexes a snapshot's holdings by canonical identity.
///
/// # Errors
///
/// Returns [`HoldingsError::DuplicateCompany`] on the first holding whose
/// identity was already seen in the same snapshot.
pub fn index_holdings(snapshot: &Snapshot) -> HoldingsResult<HashMap<CompanyKey, &Holding>> {
    let mut index = HashMap::with_capacity(snapshot.holdings.len());

    for holding in &snapshot.holdings {
        if index.insert(holding.key(), holding).is_some() {
            return Err(HoldingsError::duplicate_company(
                &snapshot.fund,
                snapshot.period,
                &holding.company,
            ));
        }
    }

    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Month, Period};

    #[test]
    fn test_same_company_ignores_case() {
        assert!(same_company("Reliance Industries Ltd.", "RELIANCE INDUSTRIES LTD."));
        assert!(same_company("tata motors", "Tata Motors"));
    }

    #[test]
    fn test_same_company_is_exact_otherwise() {
        assert!(!same_company("Reliance Industries Ltd.", "Reliance Industries Limited"));
        assert!(!same_company("Tata Motors", "Tata Motors "));
        assert!(!same_company("L&T", "L & T"));
    }

    #[test]
    fn test_company_key() {
        assert_eq!(CompanyKey::new("Infosys Ltd.").as_str(), "infosys ltd.");
        assert_eq!(CompanyKey::new("INFOSYS LTD."), CompanyKey::new("infosys ltd."));
    }

    #[test]
    fn test_index_holdings() {
        let snapshot = Snapshot::new(
            "mirae",
            Period::new(Month::June, 2025),
            vec![Holding::new("AAA", 10.0), Holding::new("BBB", 5.0)],
        );

        let index = index_holdings(&snapshot).unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(index[&CompanyKey::new("aaa")].percent_of_nav, Some(10.0));
    }

    #[test]
    fn test_index_rejects_duplicates() {
        let snapshot = Snapshot::new(
            "mirae",
            Period::new(Month::June, 2025),
            vec![
                Holding::new("HDFC Bank Ltd.", 9.0),
                Holding::new("Infosys Ltd.", 4.0),
                Holding::new("hdfc bank ltd.", 1.0),
            ],
        );

        let err = index_holdings(&snapshot).unwrap_err();
        assert_eq!(
            err,
            HoldingsError::DuplicateCompany {
                fund: "mirae".into(),
                period: Period::new(Month::June, 2025),
                company: "hdfc bank ltd.".to_string(),
            }
        );
    }
}
