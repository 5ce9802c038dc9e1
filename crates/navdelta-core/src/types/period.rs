//! Reporting periods (month, year).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::HoldingsError;

/// Calendar month of a disclosure.
///
/// Declaration order is the chronological order used to sort periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Month {
    /// January
    January,
    /// February
    February,
    /// March
    March,
    /// April
    April,
    /// May
    May,
    /// June
    June,
    /// July
    July,
    /// August
    August,
    /// September
    September,
    /// October
    October,
    /// November
    November,
    /// December
    December,
}

impl Month {
    /// All months in chronological order.
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Returns the month number (1 = January).
    #[must_use]
    pub fn number(&self) -> u32 {
        *self as u32 + 1
    }

    /// Returns the month for a number in `1..=12`.
    #[must_use]
    pub fn from_number(number: u32) -> Option<Self> {
        number
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i as usize))
            .copied()
    }

    /// Returns the full English name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Month {
    type Err = HoldingsError;

    /// Accepts full names, three-letter abbreviations, `sept`, and month
    /// numbers, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();

        if let Ok(number) = lower.parse::<u32>() {
            return Self::from_number(number)
                .ok_or_else(|| HoldingsError::invalid_period(s, "month number out of range"));
        }

        if lower == "sept" {
            return Ok(Month::September);
        }

        Self::ALL
            .iter()
            .copied()
            .find(|m| {
                let name = m.name().to_lowercase();
                lower == name || (lower.len() == 3 && name.starts_with(&lower))
            })
            .ok_or_else(|| HoldingsError::invalid_period(s, "unknown month"))
    }
}

/// A reporting period.
///
/// Ordering is chronological: year first, then month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Period {
    /// Calendar year.
    pub year: i32,
    /// Calendar month.
    pub month: Month,
}

impl Period {
    /// Creates a new period.
    #[must_use]
    pub fn new(month: Month, year: i32) -> Self {
        Self { year, month }
    }

    /// Returns the period as a sortable `YYYY-MM` key.
    #[must_use]
    pub fn key(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month.number())
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month, self.year)
    }
}

impl FromStr for Period {
    type Err = HoldingsError;

    /// Parses `June-2025`, `June 2025`, `jun/2025` or `2025-06`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s
            .split(|c: char| c == '-' || c == '/' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();

        let [first, second] = parts.as_slice() else {
            return Err(HoldingsError::invalid_period(s, "expected month and year"));
        };

        let (month, year) = if first.len() == 4 && first.chars().all(|c| c.is_ascii_digit()) {
            (second, first)
        } else {
            (first, second)
        };

        let year: i32 = year
            .parse()
            .map_err(|_| HoldingsError::invalid_period(s, "invalid year"))?;
        let month: Month = month
            .parse()
            .map_err(|_| HoldingsError::invalid_period(s, "unknown month"))?;

        Ok(Period::new(month, year))
    }
}
