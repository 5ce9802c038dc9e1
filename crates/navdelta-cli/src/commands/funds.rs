//! Funds command implementation.

use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;

use navdelta_core::Period;
use navdelta_ext_file::RegistryConfig;

use crate::cli::OutputFormat;
use crate::output::print_output;

/// One registered fund.
#[derive(Debug, Serialize, Tabled)]
struct FundRow {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Fund")]
    name: String,
    #[tabled(rename = "Periods")]
    periods: usize,
    #[tabled(rename = "Earliest")]
    earliest: String,
    #[tabled(rename = "Latest")]
    latest: String,
}

/// Execute the funds command.
pub fn execute(registry: &RegistryConfig, format: OutputFormat) -> Result<()> {
    let store = super::load(registry)?;

    let rows: Vec<FundRow> = registry
        .funds
        .iter()
        .map(|fund| {
            let id = fund.fund_id();
            FundRow {
                key: fund.key.clone(),
                name: fund.name.clone(),
                periods: store.periods(&id).len(),
                earliest: show(store.earliest(&id)),
                latest: show(store.latest(&id)),
            }
        })
        .collect();

    print_output(&rows, format)
}

fn show(period: Option<Period>) -> String {
    period.map(|p| p.to_string()).unwrap_or_default()
}
