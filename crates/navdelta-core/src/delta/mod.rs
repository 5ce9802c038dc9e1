//! Delta engine.
//!
//! Partitions two snapshots of one fund into added, removed and changed
//! positions.

mod engine;
mod record;

pub use engine::compute_delta;
pub use record::{DeltaCounts, DeltaRecord, DeltaSet, DeltaStatus};
