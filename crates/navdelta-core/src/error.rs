//! Error types for holdings comparison.
//!
//! Every variant is a contract violation or a "no data" condition detected
//! before any result is produced. A failed computation never touches the
//! snapshot store.

use thiserror::Error;

use crate::types::{FundId, Period};

/// Result type for holdings operations.
pub type HoldingsResult<T> = Result<T, HoldingsError>;

/// Errors that can occur while comparing or aggregating snapshots.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HoldingsError {
    /// Two holdings of one snapshot share a canonical identity.
    #[error("Duplicate company '{company}' in {fund} {period}")]
    DuplicateCompany {
        /// Fund of the offending snapshot.
        fund: FundId,
        /// Period of the offending snapshot.
        period: Period,
        /// Display name of the second occurrence.
        company: String,
    },

    /// Snapshots of different funds were passed to one computation.
    #[error("Fund mismatch: cannot compare {current} with {previous}")]
    FundMismatch {
        /// Fund of the current (or expected) snapshot.
        current: FundId,
        /// Fund of the previous (or offending) snapshot.
        previous: FundId,
    },

    /// The store has no snapshot for the requested key.
    #[error("No snapshot for {fund} {period}")]
    MissingSnapshot {
        /// Requested fund.
        fund: FundId,
        /// Requested period.
        period: Period,
    },

    /// The store has no snapshot at all for the fund.
    #[error("No data for fund {fund}")]
    NoData {
        /// Requested fund.
        fund: FundId,
    },

    /// The selected period is the earliest one, so nothing precedes it.
    #[error("No period before {period} for fund {fund}")]
    NoPreviousPeriod {
        /// Requested fund.
        fund: FundId,
        /// The selected current period.
        period: Period,
    },

    /// A month or period string could not be parsed.
    #[error("Invalid period '{input}': {reason}")]
    InvalidPeriod {
        /// The rejected input.
        input: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A string could not be parsed into a query option.
    #[error("Invalid {option} '{input}'")]
    InvalidOption {
        /// Which option was being parsed.
        option: &'static str,
        /// The rejected input.
        input: String,
    },
}

impl HoldingsError {
    /// Create a duplicate company error.
    #[must_use]
    pub fn duplicate_company(fund: &FundId, period: Period, company: impl Into<String>) -> Self {
        Self::DuplicateCompany {
            fund: fund.clone(),
            period,
            company: company.into(),
        }
    }

    /// Create a fund mismatch error.
    #[must_use]
    pub fn fund_mismatch(current: &FundId, previous: &FundId) -> Self {
        Self::FundMismatch {
            current: current.clone(),
            previous: previous.clone(),
        }
    }

    /// Create a missing snapshot error.
    #[must_use]
    pub fn missing_snapshot(fund: &FundId, period: Period) -> Self {
        Self::MissingSnapshot {
            fund: fund.clone(),
            period,
        }
    }

    /// Create an invalid period error.
    #[must_use]
    pub fn invalid_period(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPeriod {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Returns true if the error means "nothing to show" rather than bad input.
    #[must_use]
    pub fn is_no_data(&self) -> bool {
        matches!(
            self,
            Self::MissingSnapshot { .. } | Self::NoData { .. } | Self::NoPreviousPeriod { .. }
        )
    }
}
