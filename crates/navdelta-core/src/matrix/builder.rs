//! Period x company allocation matrix.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::HashSet;

use crate::error::{HoldingsError, HoldingsResult};
use crate::identity::{index_holdings, CompanyKey};
use crate::types::{FundId, NavWeight, Period, Snapshot};

/// Row ordering of the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompanyOrder {
    /// Display name as sourced, case-sensitive byte order.
    ///
    /// Identity matching ignores case but this ordering does not, so
    /// "axis Bank" sorts after "Zydus". Kept as the default for stable output.
    #[default]
    DisplayName,
    /// Display name ignoring case.
    CaseInsensitive,
}

/// Options for [`build_matrix_with`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixOptions {
    /// Row ordering.
    pub order: CompanyOrder,
}

impl MatrixOptions {
    /// Creates options with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the row ordering.
    #[must_use]
    pub fn with_order(mut self, order: CompanyOrder) -> Self {
        self.order = order;
        self
    }
}

/// One company's weight in every period of the matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixRow {
    /// Company display name (first spelling encountered).
    pub company: String,
    /// One cell per matrix period, same order as [`HoldingsMatrix::periods`].
    pub cells: Vec<NavWeight>,
}

impl MatrixRow {
    /// Number of periods in which the company was held.
    #[must_use]
    pub fn periods_held(&self) -> usize {
        self.cells.iter().filter(|c| c.is_held()).count()
    }

    /// Weight in the first period.
    #[must_use]
    pub fn first_weight(&self) -> Option<NavWeight> {
        self.cells.first().copied()
    }

    /// Weight in the last period.
    #[must_use]
    pub fn latest_weight(&self) -> Option<NavWeight> {
        self.cells.last().copied()
    }

    /// Latest minus first numeric weight (not held counts as 0).
    #[must_use]
    pub fn net_change(&self) -> f64 {
        match (self.first_weight(), self.latest_weight()) {
            (Some(first), Some(latest)) => latest.value() - first.value(),
            _ => 0.0,
        }
    }
}

/// Dense period x company table for one fund.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingsMatrix {
    /// Fund the matrix describes.
    pub fund: FundId,
    /// Column periods, in the order the snapshots were supplied.
    pub periods: Vec<Period>,
    /// One row per company across all periods.
    pub rows: Vec<MatrixRow>,
}

impl HoldingsMatrix {
    /// Looks up a cell by company (ignoring case) and period.
    #[must_use]
    pub fn cell(&self, company: &str, period: Period) -> Option<NavWeight> {
        let col = self.periods.iter().position(|p| *p == period)?;
        let key = CompanyKey::new(company);
        self.rows
            .iter()
            .find(|r| CompanyKey::new(&r.company) == key)
            .and_then(|r| r.cells.get(col).copied())
    }

    /// Returns true if the matrix has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Builds the allocation matrix with default options.
///
/// See [`build_matrix_with`].
///
/// # Errors
///
/// Same as [`build_matrix_with`].
pub fn build_matrix<S: Borrow<Snapshot>>(
    fund: &FundId,
    periods: &[S],
) -> HoldingsResult<HoldingsMatrix> {
    build_matrix_with(fund, periods, &MatrixOptions::default())
}

/// Builds the allocation matrix for `fund` from `periods`.
///
/// Rows are the union of canonical identities across all snapshots, each
/// cell holding the snapshot's weight unchanged or [`NavWeight::NotHeld`].
/// Columns follow the order of `periods`, which may hold owned snapshots or
/// the `Arc`s handed out by the store.
///
/// # Errors
///
/// - [`HoldingsError::FundMismatch`] if a snapshot belongs to another fund
/// - [`HoldingsError::DuplicateCompany`] if a snapshot repeats a company
pub fn build_matrix_with<S: Borrow<Snapshot>>(
    fund: &FundId,
    periods: &[S],
    options: &MatrixOptions,
) -> HoldingsResult<HoldingsMatrix> {
    let periods: Vec<&Snapshot> = periods.iter().map(Borrow::borrow).collect();

    let mut indexes = Vec::with_capacity(periods.len());
    for snapshot in &periods {
        if snapshot.fund != *fund {
            return Err(HoldingsError::fund_mismatch(fund, &snapshot.fund));
        }
        indexes.push(index_holdings(snapshot)?);
    }

    // Union of identities, remembering the first display spelling.
    let mut seen: HashSet<CompanyKey> = HashSet::new();
    let mut companies: Vec<(CompanyKey, &str)> = Vec::new();
    for snapshot in &periods {
        for holding in &snapshot.holdings {
            let key = holding.key();
            if seen.insert(key.clone()) {
                companies.push((key, holding.company.as_str()));
            }
        }
    }

    match options.order {
        CompanyOrder::DisplayName => companies.sort_by(|a, b| a.1.cmp(b.1)),
        CompanyOrder::CaseInsensitive => companies.sort_by(|a, b| a.0.cmp(&b.0)),
    }

    let rows = companies
        .into_iter()
        .map(|(key, company)| MatrixRow {
            company: company.to_string(),
            cells: indexes
                .iter()
                .map(|index| index.get(&key).map_or(NavWeight::NotHeld, |h| h.weight()))
                .collect(),
        })
        .collect();

    Ok(HoldingsMatrix {
        fund: fund.clone(),
        periods: periods.iter().map(|s| s.period).collect(),
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Holding, Month};

    fn snapshot(month: Month, holdings: Vec<Holding>) -> Snapshot {
        Snapshot::new("mirae", Period::new(month, 2025), holdings)
    }

    fn fund() -> FundId {
        FundId::new("mirae")
    }

    #[test]
    fn test_matrix_cells() {
        let periods = vec![
            snapshot(Month::June, vec![Holding::new("AAA", 10.0), Holding::new("BBB", 5.0)]),
            snapshot(Month::July, vec![Holding::new("AAA", 12.0), Holding::new("CCC", 3.0)]),
        ];

        let matrix = build_matrix(&fund(), &periods).unwrap();

        assert_eq!(
            matrix.periods,
            vec![Period::new(Month::June, 2025), Period::new(Month::July, 2025)]
        );
        let names: Vec<_> = matrix.rows.iter().map(|r| r.company.as_str()).collect();
        assert_eq!(names, vec!["AAA", "BBB", "CCC"]);

        assert_eq!(
            matrix.rows[0].cells,
            vec![NavWeight::Percent(10.0), NavWeight::Percent(12.0)]
        );
        assert_eq!(
            matrix.rows[1].cells,
            vec![NavWeight::Percent(5.0), NavWeight::NotHeld]
        );
        assert_eq!(
            matrix.rows[2].cells,
            vec![NavWeight::NotHeld, NavWeight::Percent(3.0)]
        );
    }

    #[test]
    fn test_zero_weight_is_not_absence() {
        let periods = vec![
            snapshot(Month::June, vec![Holding::new("AAA", 0.0)]),
            snapshot(Month::July, vec![Holding::undisclosed("AAA"), Holding::new("BBB", 1.0)]),
        ];

        let matrix = build_matrix(&fund(), &periods).unwrap();
        let june = Period::new(Month::June, 2025);
        let july = Period::new(Month::July, 2025);

        assert_eq!(matrix.cell("AAA", june), Some(NavWeight::Percent(0.0)));
        assert_eq!(matrix.cell("aaa", july), Some(NavWeight::Undisclosed));
        assert_eq!(matrix.cell("BBB", june), Some(NavWeight::NotHeld));
        assert_eq!(matrix.cell("ZZZ", june), None);
    }

    #[test]
    fn test_identity_merges_case_variants() {
        let periods = vec![
            snapshot(Month::June, vec![Holding::new("Infosys Ltd.", 4.0)]),
            snapshot(Month::July, vec![Holding::new("INFOSYS LTD.", 4.5)]),
        ];

        let matrix = build_matrix(&fund(), &periods).unwrap();
        assert_eq!(matrix.rows.len(), 1);
        assert_eq!(matrix.rows[0].company, "Infosys Ltd.");
        assert_eq!(matrix.rows[0].periods_held(), 2);
    }

    #[test]
    fn test_display_name_order_is_case_sensitive() {
        let periods = vec![snapshot(
            Month::June,
            vec![
                Holding::new("axis Bank", 1.0),
                Holding::new("Zydus Lifesciences", 2.0),
                Holding::new("Bharti Airtel", 3.0),
            ],
        )];

        let matrix = build_matrix(&fund(), &periods).unwrap();
        let names: Vec<_> = matrix.rows.iter().map(|r| r.company.as_str()).collect();
        assert_eq!(names, vec!["Bharti Airtel", "Zydus Lifesciences", "axis Bank"]);

        let options = MatrixOptions::new().with_order(CompanyOrder::CaseInsensitive);
        let matrix = build_matrix_with(&fund(), &periods, &options).unwrap();
        let names: Vec<_> = matrix.rows.iter().map(|r| r.company.as_str()).collect();
        assert_eq!(names, vec!["axis Bank", "Bharti Airtel", "Zydus Lifesciences"]);
    }

    #[test]
    fn test_row_trend_helpers() {
        let periods = vec![
            snapshot(Month::May, vec![Holding::new("AAA", 2.0)]),
            snapshot(Month::June, vec![Holding::new("BBB", 1.0)]),
            snapshot(Month::July, vec![Holding::new("AAA", 3.5)]),
        ];

        let matrix = build_matrix(&fund(), &periods).unwrap();
        let aaa = &matrix.rows[0];
        assert_eq!(aaa.periods_held(), 2);
        assert_eq!(aaa.first_weight(), Some(NavWeight::Percent(2.0)));
        assert_eq!(aaa.latest_weight(), Some(NavWeight::Percent(3.5)));
        assert_eq!(aaa.net_change(), 1.5);

        let bbb = &matrix.rows[1];
        assert_eq!(bbb.net_change(), 0.0);
    }

    #[test]
    fn test_rejects_other_fund() {
        let periods = vec![
            snapshot(Month::June, vec![Holding::new("AAA", 1.0)]),
            Snapshot::new("canara", Period::new(Month::July, 2025), vec![]),
        ];

        let err = build_matrix(&fund(), &periods).unwrap_err();
        assert!(matches!(err, HoldingsError::FundMismatch { .. }));
    }

    #[test]
    fn test_rejects_duplicates() {
        let periods = vec![snapshot(
            Month::June,
            vec![Holding::new("AAA", 1.0), Holding::new("AAA", 2.0)],
        )];

        assert!(matches!(
            build_matrix(&fund(), &periods),
            Err(HoldingsError::DuplicateCompany { .. })
        ));
    }

    #[test]
    fn test_empty_input() {
        let matrix = build_matrix::<Snapshot>(&fund(), &[]).unwrap();
        assert!(matrix.is_empty());
        assert!(matrix.periods.is_empty());
    }
}
