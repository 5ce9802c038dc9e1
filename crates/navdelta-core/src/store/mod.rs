//! Snapshot storage and application state.

mod snapshot_store;
mod state;

pub use snapshot_store::{SharedStore, SnapshotStore, SnapshotStoreBuilder};
pub use state::{AppState, Comparison, DeltaView, Selection, View};
