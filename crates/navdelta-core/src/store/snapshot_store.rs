//! Immutable snapshot store and its atomically swapped shared handle.

use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info};

use crate::error::{HoldingsError, HoldingsResult};
use crate::types::{FundId, Period, Snapshot, SnapshotKey};

/// One snapshot per (fund, period), frozen for a load cycle.
///
/// Built once through [`SnapshotStore::builder`] and read-only afterwards.
/// Keys are ordered, so a fund's periods iterate chronologically.
#[derive(Debug, Clone, Default)]
pub struct SnapshotStore {
    snapshots: BTreeMap<SnapshotKey, Arc<Snapshot>>,
}

impl SnapshotStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts building a store.
    #[must_use]
    pub fn builder() -> SnapshotStoreBuilder {
        SnapshotStoreBuilder::default()
    }

    /// Returns the snapshot for a key, if loaded.
    #[must_use]
    pub fn get(&self, fund: &FundId, period: Period) -> Option<&Arc<Snapshot>> {
        self.snapshots
            .get(&SnapshotKey::new(fund.clone(), period))
    }

    /// Returns the snapshot for a key.
    ///
    /// # Errors
    ///
    /// Returns [`HoldingsError::MissingSnapshot`] if the period has no data.
    pub fn require(&self, fund: &FundId, period: Period) -> HoldingsResult<&Arc<Snapshot>> {
        self.get(fund, period)
            .ok_or_else(|| HoldingsError::missing_snapshot(fund, period))
    }

    /// All funds with at least one snapshot, sorted.
    #[must_use]
    pub fn funds(&self) -> Vec<FundId> {
        let mut funds: Vec<FundId> = self.snapshots.keys().map(|k| k.fund.clone()).collect();
        funds.dedup();
        funds
    }

    /// Periods available for a fund, oldest first.
    #[must_use]
    pub fn periods(&self, fund: &FundId) -> Vec<Period> {
        self.fund_range(fund).map(|(k, _)| k.period).collect()
    }

    /// Snapshots of a fund, oldest first.
    #[must_use]
    pub fn history(&self, fund: &FundId) -> Vec<Arc<Snapshot>> {
        self.fund_range(fund).map(|(_, s)| Arc::clone(s)).collect()
    }

    /// Earliest period of a fund.
    #[must_use]
    pub fn earliest(&self, fund: &FundId) -> Option<Period> {
        self.fund_range(fund).next().map(|(k, _)| k.period)
    }

    /// Latest period of a fund.
    #[must_use]
    pub fn latest(&self, fund: &FundId) -> Option<Period> {
        self.fund_range(fund).next_back().map(|(k, _)| k.period)
    }

    /// Latest period of a fund strictly before `period`.
    #[must_use]
    pub fn period_before(&self, fund: &FundId, period: Period) -> Option<Period> {
        self.fund_range(fund)
            .map(|(k, _)| k.period)
            .take_while(|p| *p < period)
            .last()
    }

    /// Total number of snapshots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns true if nothing is loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    fn fund_range<'a>(
        &'a self,
        fund: &'a FundId,
    ) -> impl DoubleEndedIterator<Item = (&'a SnapshotKey, &'a Arc<Snapshot>)> + 'a {
        self.snapshots.iter().filter(move |(k, _)| k.fund == *fund)
    }
}

/// Collects snapshots for a new [`SnapshotStore`].
#[derive(Debug, Default)]
pub struct SnapshotStoreBuilder {
    snapshots: BTreeMap<SnapshotKey, Arc<Snapshot>>,
}

impl SnapshotStoreBuilder {
    /// Adds a snapshot. A later snapshot for the same key replaces the earlier one.
    #[must_use]
    pub fn add(mut self, snapshot: Snapshot) -> Self {
        self.insert(snapshot);
        self
    }

    /// Adds several snapshots.
    #[must_use]
    pub fn add_all(mut self, snapshots: impl IntoIterator<Item = Snapshot>) -> Self {
        for snapshot in snapshots {
            self.insert(snapshot);
        }
        self
    }

    /// Adds a snapshot in place.
    pub fn insert(&mut self, snapshot: Snapshot) {
        let key = snapshot.key();
        if self.snapshots.insert(key.clone(), Arc::new(snapshot)).is_some() {
            debug!(%key, "Replaced snapshot already present in store builder");
        }
    }

    /// Freezes the store.
    #[must_use]
    pub fn build(self) -> SnapshotStore {
        SnapshotStore {
            snapshots: self.snapshots,
        }
    }
}

/// Shared handle to the current store of a session.
///
/// Readers take an `Arc` of the whole store and keep using it for the rest of
/// their computation. [`SharedStore::replace`] swaps in a complete new store,
/// so a reader never sees a mix of old and newly loaded periods.
#[derive(Debug, Default)]
pub struct SharedStore {
    current: RwLock<Arc<SnapshotStore>>,
}

impl SharedStore {
    /// Wraps an initial store.
    #[must_use]
    pub fn new(store: SnapshotStore) -> Self {
        Self {
            current: RwLock::new(Arc::new(store)),
        }
    }

    /// The store as of now.
    #[must_use]
    pub fn snapshot(&self) -> Arc<SnapshotStore> {
        Arc::clone(&*self.current.read())
    }

    /// Replaces the whole store, returning the previous one.
    pub fn replace(&self, store: SnapshotStore) -> Arc<SnapshotStore> {
        let store = Arc::new(store);
        let snapshots = store.len();
        let previous = std::mem::replace(&mut *self.current.write(), store);
        info!(snapshots, previous = previous.len(), "Snapshot store replaced");
        previous
    }
}
