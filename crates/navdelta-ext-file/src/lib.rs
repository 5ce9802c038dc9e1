//! # Navdelta Ext File
//!
//! File-based snapshot loading for navdelta.
//!
//! This crate reads the monthly JSON snapshots written by the holdings
//! extractor and turns them into a [`navdelta_core::SnapshotStore`]:
//! - TOML fund registry ([`RegistryConfig`])
//! - JSON snapshot file format and `{prefix}-{Month}-{Year}.json` naming
//! - Company name normalization
//! - Parallel loading with an atomic swap into a [`navdelta_core::SharedStore`]

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod file_format;
pub mod loader;
pub mod normalize;
pub mod registry;

pub use error::{LoadError, LoadResult};
pub use file_format::{
    parse_extracted_at, parse_snapshot_file_name, read_snapshot_file, snapshot_file_name,
    write_snapshot_file, SnapshotFile,
};
pub use loader::{discover_periods, load_fund, load_snapshot, load_store, reload};
pub use normalize::normalize_company_name;
pub use registry::{FundConfig, RegistryConfig};
