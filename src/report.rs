//! Result Table Rendering
//!
//! Turns a [`ResultTable`] into an aligned plain-text table for the terminal
//! or a Markdown report. Times are mean milliseconds; missing cells print as
//! `N/A`.

use std::fmt::Write;
use std::fs;
use std::io;
use std::path::Path;

use crate::benchmark::ResultTable;

/// Width of the algorithm name column in the text table.
const NAME_WIDTH: usize = 16;
/// Minimum width of a timing column in the text table.
const CELL_WIDTH: usize = 10;

fn format_ms(ms: f64) -> String {
    if ms.is_nan() {
        "N/A".to_string()
    } else {
        format!("{:.3}", ms)
    }
}

fn format_verified(verified: Option<bool>) -> &'static str {
    match verified {
        Some(true) => "yes",
        Some(false) => "NO",
        None => "N/A",
    }
}

/// Render the table with sizes as columns and one line per algorithm.
pub fn to_text_table(table: &ResultTable) -> String {
    let widths: Vec<usize> = table
        .sizes()
        .iter()
        .map(|size| size.to_string().len().max(CELL_WIDTH))
        .collect();

    let mut output = String::new();

    write!(output, "{:>NAME_WIDTH$}", "n").unwrap();
    for (size, width) in table.sizes().iter().zip(&widths) {
        write!(output, " | {:>width$}", size, width = width).unwrap();
    }
    writeln!(output).unwrap();

    write!(output, "{:-<NAME_WIDTH$}", "").unwrap();
    for width in &widths {
        write!(output, "-+-{:-<width$}", "", width = width).unwrap();
    }
    writeln!(output).unwrap();

    for row in table.rows() {
        write!(output, "{:>NAME_WIDTH$}", row.algorithm).unwrap();
        for (&ms, width) in row.mean_ms.iter().zip(&widths) {
            write!(output, " | {:>width$}", format_ms(ms), width = width).unwrap();
        }
        writeln!(output).unwrap();
    }

    output
}

/// Render the table as a Markdown report.
pub fn to_markdown_table(table: &ResultTable) -> String {
    let mut output = String::new();

    writeln!(output, "# Sorting Benchmark Report").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "Mean wall-clock time per sort, in milliseconds.").unwrap();
    writeln!(output).unwrap();

    write!(output, "| Algorithm |").unwrap();
    for size in table.sizes() {
        write!(output, " n = {} |", size).unwrap();
    }
    writeln!(output, " Verified |").unwrap();

    write!(output, "|-----------|").unwrap();
    for _ in table.sizes() {
        write!(output, "------:|").unwrap();
    }
    writeln!(output, "----------|").unwrap();

    for row in table.rows() {
        write!(output, "| {} |", row.algorithm).unwrap();
        for &ms in &row.mean_ms {
            write!(output, " {} |", format_ms(ms)).unwrap();
        }
        writeln!(output, " {} |", format_verified(row.verified)).unwrap();
    }

    writeln!(output).unwrap();
    writeln!(output, "---").unwrap();
    writeln!(output, "*Report generated by sorting-bench*").unwrap();

    output
}

/// Save the table as a Markdown file.
pub fn save_markdown(table: &ResultTable, path: &Path) -> io::Result<()> {
    fs::write(path, to_markdown_table(table))
}
