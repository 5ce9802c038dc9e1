//! Output formatting utilities.

use colored::Colorize;
use navdelta_core::{HoldingsMatrix, NavWeight};
use serde::Serialize;
use tabled::{
    builder::Builder,
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::cli::OutputFormat;

/// Formats and prints rows based on the specified format.
pub fn print_output<T: Serialize + Tabled>(data: &[T], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => print_table(data),
        OutputFormat::Json => print_json(data),
        OutputFormat::Csv => print_csv(data),
    }
}

/// Prints a single value as pretty JSON.
pub fn print_json_value<T: Serialize + ?Sized>(data: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Prints data as a formatted table.
fn print_table<T: Tabled>(data: &[T]) -> anyhow::Result<()> {
    if data.is_empty() {
        println!("No results.");
        return Ok(());
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{}", table);
    Ok(())
}

/// Prints data as JSON.
fn print_json<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    print_json_value(data)
}

/// Prints data as CSV.
fn print_csv<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for item in data {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Formats a weight cell, "-" when not held.
pub fn format_weight(weight: NavWeight) -> String {
    format!("{weight:.2}")
}

/// Formats a signed delta.
pub fn format_delta(delta: f64) -> String {
    format!("{delta:+.2}")
}

/// Prints the matrix as a table, one column per period.
pub fn print_matrix_table(matrix: &HoldingsMatrix) {
    if matrix.is_empty() {
        println!("No results.");
        return;
    }

    let mut builder = Builder::default();
    let mut header = vec!["Company".to_string()];
    header.extend(matrix.periods.iter().map(|p| p.to_string()));
    builder.push_record(header);

    for row in &matrix.rows {
        let mut record = vec![row.company.clone()];
        record.extend(row.cells.iter().map(|c| format_weight(*c)));
        builder.push_record(record);
    }

    let table = builder
        .build()
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
        .to_string();
    println!("{}", table);
}

/// Prints the matrix as CSV with `YYYY-MM` period headers.
pub fn print_matrix_csv(matrix: &HoldingsMatrix) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());

    let mut header = vec!["company".to_string()];
    header.extend(matrix.periods.iter().map(|p| p.key()));
    wtr.write_record(&header)?;

    for row in &matrix.rows {
        let mut record = vec![row.company.clone()];
        record.extend(
            row.cells
                .iter()
                .map(|c| c.percent().map(|p| p.to_string()).unwrap_or_default()),
        );
        wtr.write_record(&record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Prints a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Metric")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}

/// Prints a divider line.
pub fn print_divider() {
    println!("{}", "─".repeat(60).dimmed());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_weight() {
        assert_eq!(format_weight(NavWeight::Percent(9.1)), "9.10");
        assert_eq!(format_weight(NavWeight::NotHeld), "-");
        assert_eq!(format_weight(NavWeight::Undisclosed), "n/a");
    }

    #[test]
    fn test_format_delta() {
        assert_eq!(format_delta(0.5), "+0.50");
        assert_eq!(format_delta(-1.25), "-1.25");
        assert_eq!(format_delta(0.0), "+0.00");
    }
}
