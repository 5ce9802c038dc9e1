//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::commands::{DiffArgs, MatrixArgs, PeriodsArgs, VerifyArgs};

/// Navdelta - Mutual fund holdings change analytics
#[derive(Parser)]
#[command(name = "navdelta")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Fund registry file (defaults to ./navdelta.toml, then the built-in registry)
    #[arg(short, long, global = true, env = "NAVDELTA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// List registered funds and their loaded periods
    Funds,

    /// List available periods of a fund, oldest first
    Periods(PeriodsArgs),

    /// Compare holdings between two periods
    Diff(DiffArgs),

    /// Show the period x company allocation matrix
    Matrix(MatrixArgs),

    /// Data quality report per period
    Verify(VerifyArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}
