//! Lino to Markdown Converter
//!
//! Converts a Links Notation benchmark report to Markdown.
//!
//! Usage:
//!   lino2md input.lino [output.md]
//!
//! If output is not specified, prints to stdout.

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::{error, info};

use parallel_sorting::lino_report::parse_lino_report;

/// Convert a Links Notation benchmark report to Markdown
#[derive(Parser, Debug)]
#[command(name = "lino2md", version, about)]
struct Args {
    /// Path to the Links Notation report file
    input: PathBuf,

    /// Output path (prints to stdout if not specified)
    output: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let content = match fs::read_to_string(&args.input) {
        Ok(c) => c,
        Err(e) => {
            error!("error reading {}: {}", args.input.display(), e);
            process::exit(1);
        }
    };

    let report = match parse_lino_report(&content) {
        Some(r) => r,
        None => {
            error!("could not parse the Links Notation report");
            error!("make sure the file contains benchmark results");
            process::exit(1);
        }
    };

    let markdown = report.to_markdown_table();

    match args.output {
        Some(path) => match fs::write(&path, &markdown) {
            Ok(()) => info!("Markdown report written to: {}", path.display()),
            Err(e) => {
                error!("error writing {}: {}", path.display(), e);
                process::exit(1);
            }
        },
        None => print!("{}", markdown),
    }
}
