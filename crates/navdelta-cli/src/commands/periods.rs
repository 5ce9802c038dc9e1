//! Periods command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use navdelta_ext_file::RegistryConfig;

use crate::cli::OutputFormat;
use crate::commands::{find_fund, require_data};
use crate::output::print_output;

/// Arguments for the periods command.
#[derive(Args, Debug)]
pub struct PeriodsArgs {
    /// Fund key (see `navdelta funds`)
    pub fund: String,
}

/// One loaded period.
#[derive(Debug, Serialize, Tabled)]
struct PeriodRow {
    #[tabled(rename = "Period")]
    period: String,
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Holdings")]
    holdings: usize,
}

/// Execute the periods command.
pub fn execute(args: PeriodsArgs, registry: &RegistryConfig, format: OutputFormat) -> Result<()> {
    let fund = find_fund(registry, &args.fund)?;
    let store = super::load(registry)?;
    let id = require_data(&store, fund)?;

    let rows: Vec<PeriodRow> = store
        .history(&id)
        .iter()
        .map(|snapshot| PeriodRow {
            period: snapshot.period.to_string(),
            key: snapshot.period.key(),
            holdings: snapshot.len(),
        })
        .collect();

    print_output(&rows, format)
}
