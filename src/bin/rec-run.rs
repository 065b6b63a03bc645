//! CLI tool to parse fixed-width data files against a layout table.
//!
//! The layout table is a JSON array of layouts:
//!
//! ```json
//! [{"tag": "SVCL", "fields": [{"start": 4, "end": 18, "name": "customer-name"}]}]
//! ```
//!
//! Each parsed record prints as one line: the tag followed by
//! `name="value"` pairs in layout order. Parsing is fail-fast: the first
//! bad line is reported with its 1-based line number and the process
//! exits non-zero.

use clap::Parser;
use fixedrec_rs::Registry;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "rec-run")]
#[command(about = "Parse fixed-width record files against a layout table", long_about = None)]
struct Cli {
    /// Layout table file (JSON array of layouts)
    layouts: PathBuf,

    /// Input data file (one fixed-width record per line)
    input: PathBuf,

    /// Skip blank lines instead of failing on them
    #[arg(long)]
    skip_blank: bool,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let layout_json = match fs::read_to_string(&cli.layouts) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading layout file '{}': {}", cli.layouts.display(), e);
            process::exit(1);
        }
    };

    let registry = match Registry::from_json(&layout_json) {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("Error in layout file '{}': {}", cli.layouts.display(), e);
            process::exit(1);
        }
    };

    let input_text = match fs::read_to_string(&cli.input) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading input file '{}': {}", cli.input.display(), e);
            process::exit(1);
        }
    };

    // Line-number reporting is a CLI policy, so the loop enumerates raw
    // lines here instead of going through Registry::parse_lines.
    let mut report = String::new();
    let mut count = 0usize;
    for (line_no, line) in input_text.lines().enumerate() {
        if cli.skip_blank && line.is_empty() {
            continue;
        }
        match registry.dispatch(line) {
            Ok(record) => {
                report.push_str(record.tag());
                for (name, value) in record.fields() {
                    report.push_str(&format!(" {}={:?}", name, value));
                }
                report.push('\n');
                count += 1;
            }
            Err(e) => {
                eprintln!("line {}: {}", line_no + 1, e);
                process::exit(1);
            }
        }
    }

    if let Some(out_path) = &cli.output {
        if let Err(e) = fs::write(out_path, &report) {
            eprintln!("Error writing output file '{}': {}", out_path.display(), e);
            process::exit(1);
        }
        eprintln!("Parsed {} records, output: {}", count, out_path.display());
    } else {
        if let Err(e) = io::stdout().write_all(report.as_bytes()) {
            eprintln!("Error writing output: {}", e);
            process::exit(1);
        }
        eprintln!("Parsed {} records", count);
    }
}
