//! Verify command implementation.
//!
//! Data quality report per loaded period: holdings count, top holdings and
//! how much of NAV the disclosed weights add up to.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use navdelta_core::identity::index_holdings;
use navdelta_core::{summarize_snapshot, SnapshotSummary};
use navdelta_ext_file::{FundConfig, RegistryConfig};

use crate::cli::OutputFormat;
use crate::commands::find_fund;
use crate::output::{
    format_weight, print_divider, print_header, print_json_value, print_output, print_warning,
    KeyValue,
};

/// Number of top holdings listed per period.
const TOP_HOLDINGS: usize = 5;

/// Arguments for the verify command.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Fund key; all registered funds when omitted
    pub fund: Option<String>,
}

/// One period of the report.
#[derive(Debug, Serialize)]
struct PeriodReport {
    #[serde(flatten)]
    summary: SnapshotSummary,
    /// Contract violation found in the snapshot, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    issue: Option<String>,
}

/// Flat row for CSV output.
#[derive(Debug, Serialize, Tabled)]
struct ReportRow {
    #[tabled(rename = "Fund")]
    fund: String,
    #[tabled(rename = "Period")]
    period: String,
    #[tabled(rename = "Holdings")]
    holdings: usize,
    #[tabled(rename = "Disclosed")]
    disclosed: usize,
    #[tabled(rename = "Total NAV %")]
    total_nav: String,
    #[tabled(rename = "Issue")]
    issue: String,
}

impl From<&PeriodReport> for ReportRow {
    fn from(report: &PeriodReport) -> Self {
        Self {
            fund: report.summary.fund.to_string(),
            period: report.summary.period.key(),
            holdings: report.summary.holdings_count,
            disclosed: report.summary.disclosed_count,
            total_nav: format!("{:.2}", report.summary.total_nav),
            issue: report.issue.clone().unwrap_or_default(),
        }
    }
}

/// Execute the verify command.
pub fn execute(args: VerifyArgs, registry: &RegistryConfig, format: OutputFormat) -> Result<()> {
    let funds: Vec<&FundConfig> = match &args.fund {
        Some(key) => vec![find_fund(registry, key)?],
        None => registry.funds.iter().collect(),
    };
    let store = super::load(registry)?;

    let mut reports = Vec::new();
    for fund in &funds {
        for snapshot in store.history(&fund.fund_id()) {
            reports.push(PeriodReport {
                summary: summarize_snapshot(&snapshot, TOP_HOLDINGS),
                issue: index_holdings(&snapshot).err().map(|e| e.to_string()),
            });
        }
    }

    match format {
        OutputFormat::Json => print_json_value(&reports)?,
        OutputFormat::Csv => {
            let rows: Vec<ReportRow> = reports.iter().map(ReportRow::from).collect();
            print_output(&rows, format)?;
        }
        OutputFormat::Table => print_report(&funds, &reports)?,
    }

    Ok(())
}

fn print_report(funds: &[&FundConfig], reports: &[PeriodReport]) -> Result<()> {
    print_header("Data Verification Report");

    for fund in funds {
        let id = fund.fund_id();
        let fund_reports: Vec<&PeriodReport> =
            reports.iter().filter(|r| r.summary.fund == id).collect();

        print_divider();
        println!("{} ({} files)", fund.name, fund_reports.len());
        if fund_reports.is_empty() {
            print_warning(&format!("No snapshots in {}", fund.data_dir.display()));
            continue;
        }

        for report in fund_reports {
            let summary = &report.summary;
            println!("\n{}:", summary.period);

            let mut rows = vec![
                KeyValue::new("Total Holdings", summary.holdings_count.to_string()),
                KeyValue::new("Total NAV %", format!("{:.2}%", summary.total_nav)),
            ];
            if summary.undisclosed_count() > 0 {
                rows.push(KeyValue::new(
                    "Undisclosed",
                    summary.undisclosed_count().to_string(),
                ));
            }
            if let Some(value) = summary.total_value {
                rows.push(KeyValue::new("Total Value", value.round_dp(2).to_string()));
            }
            print_output(&rows, OutputFormat::Table)?;

            println!("  Top {}:", TOP_HOLDINGS);
            for (i, holding) in summary.top.iter().enumerate() {
                println!(
                    "    {}. {}: {}%",
                    i + 1,
                    holding.company,
                    format_weight(holding.weight())
                );
            }

            if let Some(issue) = &report.issue {
                print_warning(issue);
            }
        }
    }

    print_divider();
    println!("Total files: {}", reports.len());
    Ok(())
}
