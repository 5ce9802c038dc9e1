//! Matrix command implementation.

use anyhow::Result;
use clap::Args;

use navdelta_core::{build_matrix_with, CompanyOrder, MatrixOptions};
use navdelta_ext_file::RegistryConfig;

use crate::cli::OutputFormat;
use crate::commands::{find_fund, holdings_error, require_data};
use crate::output::{print_header, print_json_value, print_matrix_csv, print_matrix_table};

/// Arguments for the matrix command.
#[derive(Args, Debug)]
pub struct MatrixArgs {
    /// Fund key (see `navdelta funds`)
    pub fund: String,

    /// Sort companies ignoring case
    #[arg(long)]
    pub case_insensitive: bool,
}

/// Execute the matrix command.
pub fn execute(args: MatrixArgs, registry: &RegistryConfig, format: OutputFormat) -> Result<()> {
    let fund = find_fund(registry, &args.fund)?;
    let store = super::load(registry)?;
    let id = require_data(&store, fund)?;

    let order = if args.case_insensitive {
        CompanyOrder::CaseInsensitive
    } else {
        CompanyOrder::DisplayName
    };
    let options = MatrixOptions::new().with_order(order);
    let matrix =
        build_matrix_with(&id, &store.history(&id), &options).map_err(holdings_error)?;

    match format {
        OutputFormat::Json => print_json_value(&matrix)?,
        OutputFormat::Csv => print_matrix_csv(&matrix)?,
        OutputFormat::Table => {
            print_header(&format!(
                "{}: {} companies over {} periods",
                fund.name,
                matrix.rows.len(),
                matrix.periods.len()
            ));
            print_matrix_table(&matrix);
        }
    }

    Ok(())
}
