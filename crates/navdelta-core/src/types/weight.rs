//! Portfolio weight of a position in one snapshot.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Weight of a company in one snapshot, as percentage of NAV.
///
/// The three states stay distinct through every layer: a disclosed 0% holding
/// is not the same thing as a holding with no disclosed weight, and neither
/// is the same as no holding at all.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "percent", rename_all = "snake_case")]
pub enum NavWeight {
    /// The company is not in the snapshot.
    NotHeld,
    /// The company is in the snapshot without a disclosed weight.
    Undisclosed,
    /// Disclosed weight (0-100%).
    Percent(f64),
}

impl NavWeight {
    /// Builds the weight of a position present in a snapshot.
    #[must_use]
    pub fn held(percent_of_nav: Option<f64>) -> Self {
        percent_of_nav.map_or(NavWeight::Undisclosed, NavWeight::Percent)
    }

    /// Numeric weight for arithmetic; anything not disclosed counts as 0.
    #[must_use]
    pub fn value(&self) -> f64 {
        match self {
            NavWeight::Percent(p) => *p,
            NavWeight::NotHeld | NavWeight::Undisclosed => 0.0,
        }
    }

    /// Disclosed weight, if any.
    #[must_use]
    pub fn percent(&self) -> Option<f64> {
        match self {
            NavWeight::Percent(p) => Some(*p),
            _ => None,
        }
    }

    /// Returns true if the company has a position in the snapshot.
    #[must_use]
    pub fn is_held(&self) -> bool {
        !matches!(self, NavWeight::NotHeld)
    }
}

impl fmt::Display for NavWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavWeight::NotHeld => f.write_str("-"),
            NavWeight::Undisclosed => f.write_str("n/a"),
            NavWeight::Percent(p) => match f.precision() {
                Some(prec) => write!(f, "{p:.prec$}"),
                None => write!(f, "{p:.2}"),
            },
        }
    }
}
