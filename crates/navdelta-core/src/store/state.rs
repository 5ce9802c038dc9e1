//! Explicit application state: the loaded store plus what the user selected.
//!
//! A view is a pure function of [`AppState`]. Changing the selection or
//! reloading the store produces a new state; nothing is cached between views.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use super::SnapshotStore;
use crate::delta::{compute_delta, DeltaRecord, DeltaSet};
use crate::error::{HoldingsError, HoldingsResult};
use crate::matrix::{build_matrix_with, HoldingsMatrix, MatrixOptions};
use crate::query::DeltaQuery;
use crate::types::{FundId, Period};

/// Fund, periods and display criteria chosen by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    /// Fund to inspect.
    pub fund: FundId,
    /// Current period; `None` means the latest loaded period.
    pub current: Option<Period>,
    /// Previous period; `None` means the period just before `current`.
    /// Ignored in compare-all mode.
    pub previous: Option<Period>,
    /// Compare against the earliest period and include the full history.
    pub compare_all: bool,
    /// Category, search and sort applied to the delta.
    pub query: DeltaQuery,
    /// Matrix options used by the history view.
    pub matrix: MatrixOptions,
}

impl Selection {
    /// Selects the latest two periods of `fund` with the default query.
    #[must_use]
    pub fn new(fund: impl Into<FundId>) -> Self {
        Self {
            fund: fund.into(),
            current: None,
            previous: None,
            compare_all: false,
            query: DeltaQuery::default(),
            matrix: MatrixOptions::default(),
        }
    }

    /// Sets the current period.
    #[must_use]
    pub fn with_current(mut self, period: Period) -> Self {
        self.current = Some(period);
        self
    }

    /// Sets the previous period.
    #[must_use]
    pub fn with_previous(mut self, period: Period) -> Self {
        self.previous = Some(period);
        self
    }

    /// Turns compare-all mode on or off.
    #[must_use]
    pub fn with_compare_all(mut self, compare_all: bool) -> Self {
        self.compare_all = compare_all;
        self
    }

    /// Sets the display query.
    #[must_use]
    pub fn with_query(mut self, query: DeltaQuery) -> Self {
        self.query = query;
        self
    }

    /// Sets the matrix options.
    #[must_use]
    pub fn with_matrix(mut self, matrix: MatrixOptions) -> Self {
        self.matrix = matrix;
        self
    }
}

/// The pair of periods a view compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    /// Period shown as "now".
    pub current: Period,
    /// Period compared against.
    pub previous: Period,
}

/// A delta set together with the records selected for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeltaView {
    /// Full, unfiltered delta.
    pub delta: DeltaSet,
    /// Records after category, search and sort.
    pub records: Vec<DeltaRecord>,
}

/// What the consumer should render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum View {
    /// Two-period comparison.
    Delta(DeltaView),
    /// Compare-all: the comparison against the earliest period plus the
    /// matrix over every loaded period.
    History {
        /// Comparison against the earliest period.
        delta: DeltaView,
        /// Allocation matrix over the fund's full history.
        matrix: HoldingsMatrix,
    },
}

impl View {
    /// The delta part, present in both variants.
    #[must_use]
    pub fn delta(&self) -> &DeltaView {
        match self {
            View::Delta(delta) | View::History { delta, .. } => delta,
        }
    }

    /// The matrix, only present in the history view.
    #[must_use]
    pub fn matrix(&self) -> Option<&HoldingsMatrix> {
        match self {
            View::Delta(_) => None,
            View::History { matrix, .. } => Some(matrix),
        }
    }
}

/// Loaded data plus the user's selection.
#[derive(Debug, Clone)]
pub struct AppState {
    store: Arc<SnapshotStore>,
    selection: Selection,
}

impl AppState {
    /// Creates a state over a loaded store.
    #[must_use]
    pub fn new(store: Arc<SnapshotStore>, selection: Selection) -> Self {
        Self { store, selection }
    }

    /// The store this state reads from.
    #[must_use]
    pub fn store(&self) -> &SnapshotStore {
        &self.store
    }

    /// The current selection.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Same store, new selection.
    #[must_use]
    pub fn with_selection(self, selection: Selection) -> Self {
        Self {
            store: self.store,
            selection,
        }
    }

    /// New store, same selection. Used after a reload.
    #[must_use]
    pub fn reload(self, store: Arc<SnapshotStore>) -> Self {
        Self {
            store,
            selection: self.selection,
        }
    }

    /// Resolves the selected periods against the store.
    ///
    /// In compare-all mode the previous period is always the fund's earliest,
    /// so selecting the earliest period as current compares it with itself.
    ///
    /// # Errors
    ///
    /// - [`HoldingsError::NoData`] if the fund has no snapshots
    /// - [`HoldingsError::MissingSnapshot`] if a selected period is not loaded
    /// - [`HoldingsError::NoPreviousPeriod`] if nothing precedes `current`
    pub fn resolve(&self) -> HoldingsResult<Comparison> {
        let fund = &self.selection.fund;
        let (Some(earliest), Some(latest)) = (self.store.earliest(fund), self.store.latest(fund))
        else {
            return Err(HoldingsError::NoData { fund: fund.clone() });
        };

        let current = self.selection.current.unwrap_or(latest);
        self.store.require(fund, current)?;

        let previous = if self.selection.compare_all {
            earliest
        } else {
            match self.selection.previous {
                Some(period) => period,
                None => self.store.period_before(fund, current).ok_or_else(|| {
                    HoldingsError::NoPreviousPeriod {
                        fund: fund.clone(),
                        period: current,
                    }
                })?,
            }
        };
        self.store.require(fund, previous)?;

        Ok(Comparison { current, previous })
    }

    /// Computes what to display for the current selection.
    ///
    /// # Errors
    ///
    /// Any error from [`AppState::resolve`], or a contract violation from the
    /// delta engine or matrix builder.
    pub fn view(&self) -> HoldingsResult<View> {
        let fund = &self.selection.fund;
        let Comparison { current, previous } = self.resolve()?;
        debug!(%fund, %current, %previous, compare_all = self.selection.compare_all, "Building view");

        let delta = compute_delta(
            self.store.require(fund, current)?,
            self.store.require(fund, previous)?,
        )?;
        let records = self.selection.query.apply(&delta);
        let delta = DeltaView { delta, records };

        if !self.selection.compare_all {
            return Ok(View::Delta(delta));
        }

        let history = self.store.history(fund);
        let matrix = build_matrix_with(fund, &history, &self.selection.matrix)?;
        debug!(periods = matrix.periods.len(), rows = matrix.rows.len(), "Built history matrix");
        Ok(View::History { delta, matrix })
    }
}
