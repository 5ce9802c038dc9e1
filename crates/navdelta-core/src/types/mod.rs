//! Domain types for holdings comparison.
//!
//! - [`Holding`]: one equity position with an optional disclosed weight
//! - [`Snapshot`]: all holdings of one fund for one [`Period`]
//! - [`NavWeight`]: weight cell that keeps "not held" and "undisclosed" apart from zero
//! - [`FundId`] / [`SnapshotKey`]: store identifiers

mod holding;
mod period;
mod snapshot;
mod weight;

pub use holding::Holding;
pub use period::{Month, Period};
pub use snapshot::{FundId, Snapshot, SnapshotKey};
pub use weight::NavWeight;
