//! Navdelta CLI - month-over-month mutual fund holdings analysis.
//!
//! # Usage
//!
//! ```bash
//! # List registered funds
//! navdelta funds
//!
//! # Compare the latest two months
//! navdelta diff mirae
//!
//! # Compare two specific months, only new positions, largest first
//! navdelta diff mirae --current July-2025 --previous June-2025 --category added
//!
//! # Compare against the earliest month and show the full history
//! navdelta diff mirae --compare-all
//!
//! # Allocation matrix across all loaded months
//! navdelta matrix canara --format csv
//!
//! # Data quality report
//! navdelta verify
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so table/JSON/CSV output on stdout stays clean
    let filter = if cli.verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let format = cli.format;
    let registry = commands::load_registry(cli.config.as_deref())?;

    match cli.command {
        Commands::Funds => commands::funds::execute(&registry, format)?,
        Commands::Periods(args) => commands::periods::execute(args, &registry, format)?,
        Commands::Diff(args) => commands::diff::execute(args, &registry, format)?,
        Commands::Matrix(args) => commands::matrix::execute(args, &registry, format)?,
        Commands::Verify(args) => commands::verify::execute(args, &registry, format)?,
    }

    Ok(())
}
