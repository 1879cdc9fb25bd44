//! Rendering of command results as tables or JSON.

use serde::Serialize;
use tabled::{Table, Tabled};

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// Render rows in the selected format.
pub fn render_list<T: Serialize + Tabled>(rows: &[T], format: OutputFormat) -> String {
    match format {
        OutputFormat::Table if rows.is_empty() => "No results found.".to_string(),
        OutputFormat::Table => Table::new(rows).to_string(),
        OutputFormat::Json => render_json(&rows),
    }
}

/// Render a value as pretty JSON.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "null".to_string())
}

/// Render labelled values, one per line, with the values aligned.
pub fn render_totals(entries: &[(&str, String)]) -> String {
    let width = entries.iter().map(|(label, _)| label.len()).max().unwrap_or(0) + 1;
    entries
        .iter()
        .map(|(label, value)| format!("  {:<width$} {value}", format!("{label}:")))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Print rows in the selected format.
pub fn print_list<T: Serialize + Tabled>(rows: &[T], format: OutputFormat) {
    println!("{}", render_list(rows, format));
}

/// Print a success message.
pub fn print_success(msg: &str) {
    println!("✓ {msg}");
}
