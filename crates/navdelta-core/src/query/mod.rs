//! Query layer: what the consumer asked to see of a delta set.

mod filter;

pub use filter::{CategoryFilter, DeltaQuery, SortKey};
