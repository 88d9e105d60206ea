//! Raw Timings to Markdown Converter
//!
//! Rebuilds the table of means from a raw timings file written by
//! `sorting-bench --save-raw` and renders it as Markdown.
//!
//! Usage:
//!   raw2md timings.json [output.md]
//!
//! If output is not specified, prints to stdout.

use std::env;
use std::path::Path;

use sorting_bench::{report, RawTimings};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <timings.json> [output.md]", args[0]);
        eprintln!();
        eprintln!("Converts a raw benchmark timings file to a Markdown table of means.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  timings.json  Path to the raw timings file");
        eprintln!("  output.md     Optional output path (prints to stdout if not specified)");
        std::process::exit(1);
    }

    let input_path = Path::new(&args[1]);

    let raw = match RawTimings::load(input_path) {
        Ok(raw) => raw,
        Err(e) => {
            eprintln!("Error reading {}: {}", input_path.display(), e);
            std::process::exit(1);
        }
    };

    if raw.times.is_empty() {
        eprintln!("Error: {} contains no timings", input_path.display());
        std::process::exit(1);
    }

    let table = raw.summarize();

    if args.len() >= 3 {
        let output_path = Path::new(&args[2]);
        match report::save_markdown(&table, output_path) {
            Ok(()) => {
                println!("Markdown report written to: {}", output_path.display());
            }
            Err(e) => {
                eprintln!("Error writing output file: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        print!("{}", report::to_markdown_table(&table));
    }
}
