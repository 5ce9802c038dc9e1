//! # Navdelta Core
//!
//! Month-over-month holdings comparison for mutual fund disclosures.
//!
//! Given monthly snapshots of a fund's equity holdings, this crate computes
//! which positions were added, exited, increased, decreased or left
//! unchanged, ranks them by magnitude, and assembles a period x company
//! matrix for trend inspection.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: comparisons take snapshots and return new values
//! - **Absent is not zero**: [`NavWeight`] keeps "not held" and "undisclosed"
//!   apart from a disclosed `0.0`
//! - **Case-insensitive identity**: the same company matches across periods
//!   regardless of capitalization; display names are never rewritten
//! - **Explicit state**: [`AppState`] pairs an immutable [`SnapshotStore`]
//!   with the user's [`Selection`]; reloads swap the whole store
//!
//! ## Quick Start
//!
//! ```rust
//! use navdelta_core::prelude::*;
//!
//! let store = SnapshotStore::builder()
//!     .add(Snapshot::new("mirae", Period::new(Month::June, 2025), vec![
//!         Holding::new("HDFC Bank Ltd.", 9.0),
//!         Holding::new("Infosys Ltd.", 4.0),
//!     ]))
//!     .add(Snapshot::new("mirae", Period::new(Month::July, 2025), vec![
//!         Holding::new("HDFC Bank Ltd.", 8.5),
//!         Holding::new("Axis Bank Ltd.", 2.0),
//!     ]))
//!     .build();
//!
//! let state = AppState::new(std::sync::Arc::new(store), Selection::new("mirae"));
//! let view = state.view()?;
//! let counts = view.delta().delta.counts();
//! assert_eq!((counts.added, counts.removed, counts.decreased), (1, 1, 1));
//! # Ok::<(), HoldingsError>(())
//! ```
//!
//! ## Module Overview
//!
//! - [`types`] - Holdings, snapshots, periods and weights
//! - [`identity`] - Canonical company identity
//! - [`delta`] - Two-snapshot comparison
//! - [`matrix`] - Multi-period allocation matrix
//! - [`query`] - Category filter, search and sort
//! - [`store`] - Snapshot store, shared handle and application state
//! - [`summary`] - Per-snapshot data quality summary

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod delta;
pub mod error;
pub mod identity;
pub mod matrix;
pub mod query;
pub mod store;
pub mod summary;
pub mod types;

pub use error::{HoldingsError, HoldingsResult};

pub use types::{FundId, Holding, Month, NavWeight, Period, Snapshot, SnapshotKey};

pub use identity::{same_company, CompanyKey};

pub use delta::{compute_delta, DeltaCounts, DeltaRecord, DeltaSet, DeltaStatus};

pub use matrix::{
    build_matrix, build_matrix_with, CompanyOrder, HoldingsMatrix, MatrixOptions, MatrixRow,
};

pub use query::{CategoryFilter, DeltaQuery, SortKey};

pub use store::{
    AppState, Comparison, DeltaView, Selection, SharedStore, SnapshotStore, SnapshotStoreBuilder,
    View,
};

pub use summary::{summarize_snapshot, SnapshotSummary};

/// Prelude module for convenient imports.
///
/// ```rust
/// use navdelta_core::prelude::*;
/// ```
pub mod prelude {
    // Error types
    pub use crate::error::{HoldingsError, HoldingsResult};

    // Data model
    pub use crate::types::{FundId, Holding, Month, NavWeight, Period, Snapshot};

    // Comparison
    pub use crate::delta::{compute_delta, DeltaRecord, DeltaSet, DeltaStatus};
    pub use crate::matrix::{build_matrix, CompanyOrder, HoldingsMatrix, MatrixOptions};
    pub use crate::query::{CategoryFilter, DeltaQuery, SortKey};

    // State
    pub use crate::store::{AppState, Selection, SharedStore, SnapshotStore, View};

    // Summary
    pub use crate::summary::{summarize_snapshot, SnapshotSummary};
}
