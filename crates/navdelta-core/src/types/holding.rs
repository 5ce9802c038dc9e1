//! Equity holding as disclosed in a monthly portfolio.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::NavWeight;
use crate::identity::CompanyKey;

/// A single equity position in one snapshot.
///
/// `company` is the display name exactly as the loader supplied it. Matching
/// across snapshots goes through [`Holding::key`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Company display name.
    pub company: String,

    /// Weight as percentage of fund NAV (0-100). `None` when the source
    /// did not disclose one; never silently defaulted to zero.
    #[serde(rename = "percentOfNAV", default)]
    pub percent_of_nav: Option<f64>,

    /// Number of shares held, if disclosed.
    #[serde(default)]
    pub shares: Option<Decimal>,

    /// Market value of the position, if disclosed.
    #[serde(default)]
    pub value: Option<Decimal>,
}

impl Holding {
    /// Creates a holding with a disclosed weight.
    #[must_use]
    pub fn new(company: impl Into<String>, percent_of_nav: f64) -> Self {
        Self {
            company: company.into(),
            percent_of_nav: Some(percent_of_nav),
            shares: None,
            value: None,
        }
    }

    /// Creates a holding whose weight was not disclosed.
    #[must_use]
    pub fn undisclosed(company: impl Into<String>) -> Self {
        Self {
            company: company.into(),
            percent_of_nav: None,
            shares: None,
            value: None,
        }
    }

    /// Sets the share count.
    #[must_use]
    pub fn with_shares(mut self, shares: Decimal) -> Self {
        self.shares = Some(shares);
        self
    }

    /// Sets the market value.
    #[must_use]
    pub fn with_value(mut self, value: Decimal) -> Self {
        self.value = Some(value);
        self
    }

    /// Canonical identity used to match this position across snapshots.
    #[must_use]
    pub fn key(&self) -> CompanyKey {
        CompanyKey::new(&self.company)
    }

    /// Weight of this (present) position.
    #[must_use]
    pub fn weight(&self) -> NavWeight {
        NavWeight::held(self.percent_of_nav)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_weight() {
        assert_eq!(Holding::new("Infosys Ltd.", 5.1).weight(), NavWeight::Percent(5.1));
        assert_eq!(Holding::undisclosed("Infosys Ltd.").weight(), NavWeight::Undisclosed);
    }

    #[test]
    fn test_optional_fields() {
        let holding = Holding::new("ICICI Bank Ltd.", 7.25)
            .with_shares(dec!(1_250_000))
            .with_value(dec!(15_400_000_000));

        assert_eq!(holding.shares, Some(dec!(1_250_000)));
        assert_eq!(holding.value, Some(dec!(15_400_000_000)));
    }

    #[test]
    fn test_key_is_case_insensitive() {
        let a = Holding::new("HDFC Bank Ltd.", 1.0);
        let b = Holding::new("hdfc bank ltd.", 2.0);
        assert_eq!(a.key(), b.key());
    }

    #[test]
    fn test_serde_source_shape() {
        let json = r#"{"company": "Axis Bank Ltd.", "percentOfNAV": 3.12, "shares": null, "value": null}"#;
        let holding: Holding = serde_json::from_str(json).unwrap();
        assert_eq!(holding.company, "Axis Bank Ltd.");
        assert_eq!(holding.percent_of_nav, Some(3.12));
        assert!(holding.shares.is_none());

        let json = r#"{"company": "Axis Bank Ltd."}"#;
        let holding: Holding = serde_json::from_str(json).unwrap();
        assert_eq!(holding.percent_of_nav, None);

        let out = serde_json::to_string(&Holding::new("X Ltd.", 1.5)).unwrap();
        assert!(out.contains("\"percentOfNAV\":1.5"));
    }
}
