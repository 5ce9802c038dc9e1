//! Diff command implementation.
//!
//! Compares two periods of a fund, or with `--compare-all` the selected period
//! against the earliest one followed by the full allocation history. CSV
//! output then holds two blocks, the delta rows and the matrix, separated by a
//! blank line.

use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use navdelta_core::{
    AppState, CategoryFilter, CompanyOrder, DeltaQuery, DeltaRecord, FundId, MatrixOptions,
    Selection, SortKey,
};
use navdelta_ext_file::RegistryConfig;

use crate::cli::OutputFormat;
use crate::commands::{find_fund, holdings_error, parse_period, require_data};
use crate::output::{
    format_delta, format_weight, print_header, print_json_value, print_matrix_csv,
    print_matrix_table, print_output,
};

/// Arguments for the diff command.
#[derive(Args, Debug)]
pub struct DiffArgs {
    /// Fund key (see `navdelta funds`)
    pub fund: String,

    /// Current period, e.g. July-2025. Defaults to the latest loaded period.
    #[arg(long)]
    pub current: Option<String>,

    /// Previous period. Defaults to the period just before current.
    #[arg(long)]
    pub previous: Option<String>,

    /// Compare against the earliest period and show the full history
    #[arg(long)]
    pub compare_all: bool,

    /// Category: all, added, removed, changed
    #[arg(long, default_value = "all")]
    pub category: String,

    /// Case-insensitive company name filter
    #[arg(short, long)]
    pub search: Option<String>,

    /// Sort: nav-desc, nav-asc, delta-desc, delta-asc, name-asc
    #[arg(long, default_value = "nav-desc")]
    pub sort: String,

    /// Sort history rows ignoring case
    #[arg(long)]
    pub case_insensitive: bool,
}

/// One displayed delta record.
#[derive(Debug, Serialize, Tabled)]
struct DeltaRow {
    #[tabled(rename = "Company")]
    company: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Current %")]
    current: String,
    #[tabled(rename = "Previous %")]
    previous: String,
    #[tabled(rename = "Delta")]
    delta: String,
}

impl From<&DeltaRecord> for DeltaRow {
    fn from(record: &DeltaRecord) -> Self {
        Self {
            company: record.company.clone(),
            status: record.status.to_string(),
            current: format_weight(record.current),
            previous: format_weight(record.previous),
            delta: format_delta(record.nav_delta),
        }
    }
}

impl DiffArgs {
    fn selection(&self, fund: FundId) -> Result<Selection> {
        let category: CategoryFilter = self.category.parse().map_err(holdings_error)?;
        let sort: SortKey = self.sort.parse().map_err(holdings_error)?;

        let mut query = DeltaQuery::new().with_category(category).with_sort(sort);
        if let Some(search) = &self.search {
            query = query.with_search(search.as_str());
        }

        let order = if self.case_insensitive {
            CompanyOrder::CaseInsensitive
        } else {
            CompanyOrder::DisplayName
        };

        let mut selection = Selection::new(fund)
            .with_compare_all(self.compare_all)
            .with_query(query)
            .with_matrix(MatrixOptions::new().with_order(order));
        if let Some(current) = &self.current {
            selection = selection.with_current(parse_period(current)?);
        }
        if let Some(previous) = &self.previous {
            selection = selection.with_previous(parse_period(previous)?);
        }
        Ok(selection)
    }
}

/// Execute the diff command.
pub fn execute(args: DiffArgs, registry: &RegistryConfig, format: OutputFormat) -> Result<()> {
    let fund = find_fund(registry, &args.fund)?;
    let selection = args.selection(fund.fund_id())?;

    let store = super::load(registry)?;
    require_data(&store, fund)?;

    let state = AppState::new(Arc::new(store), selection);
    let view = state.view().map_err(holdings_error)?;
    let delta_view = view.delta();
    let rows: Vec<DeltaRow> = delta_view.records.iter().map(DeltaRow::from).collect();

    match format {
        OutputFormat::Json => print_json_value(&view)?,
        OutputFormat::Csv => {
            print_output(&rows, format)?;
            if let Some(matrix) = view.matrix() {
                println!();
                print_matrix_csv(matrix)?;
            }
        }
        OutputFormat::Table => {
            let delta = &delta_view.delta;
            print_header(&format!(
                "{}: {} vs {}",
                fund.name, delta.current_period, delta.previous_period
            ));
            print_output(&rows, format)?;

            let counts = delta.counts();
            println!(
                "Added: {}  Removed: {}  Increased: {}  Decreased: {}  Unchanged: {}  (showing {} of {})",
                counts.added,
                counts.removed,
                counts.increased,
                counts.decreased,
                counts.unchanged,
                rows.len(),
                delta.len()
            );

            if let Some(matrix) = view.matrix() {
                print_header(&format!("{} history", fund.name));
                print_matrix_table(matrix);
            }
        }
    }

    Ok(())
}
