//! Parallel Sorting Benchmark
//!
//! Times sequential and loop-parallel bubble, selection and insertion sort on
//! random integer arrays and compares them:
//! - **Selection sort**: per-pass minimum search split across a worker pool,
//!   local minima merged by a configurable reduction
//! - **Bubble sort**: sequential sweeps vs. parallel odd-even transposition
//! - **Insertion sort**: sequential only
//!
//! The library sorts (`sort_unstable`, rayon's `par_sort_unstable`) are the
//! reference every output is verified against.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::{error, info};

use parallel_sorting::benchmark::{default_workers, run_benchmarks, BenchConfig};
use parallel_sorting::config::{format_size, get_profile, parse_sizes};
use parallel_sorting::lino_report::{BenchmarkReport, BenchmarkResult};
use parallel_sorting::{Algorithm, MinReduction, SortError};

/// Sequential vs. parallel quadratic sort benchmark
#[derive(Parser, Debug)]
#[command(name = "parallel-sorting", version, about)]
struct Args {
    /// Array sizes to benchmark (e.g., 1K,10K,100000)
    #[arg(long, value_delimiter = ',')]
    sizes: Option<Vec<String>>,

    /// Preset sizes and value range: assignment (1K,10K in [0,10000]) or
    /// practice (1K,10K,100K in [0,99999])
    #[arg(long)]
    profile: Option<String>,

    /// Algorithms to run (default: all)
    #[arg(long, value_enum, value_delimiter = ',')]
    algorithms: Option<Vec<Algorithm>>,

    /// Worker counts for the parallel algorithms (default: all hardware threads)
    #[arg(long, value_delimiter = ',')]
    workers: Option<Vec<usize>>,

    /// Smallest generated value
    #[arg(long, allow_negative_numbers = true)]
    min: Option<i32>,

    /// Largest generated value
    #[arg(long, allow_negative_numbers = true)]
    max: Option<i32>,

    /// Timed runs per algorithm; the mean is reported
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    runs: u32,

    /// Seed for reproducible inputs
    #[arg(long)]
    seed: Option<u64>,

    /// How parallel selection sort merges per-worker minima
    #[arg(long, value_enum, default_value_t = MinReduction::Collect)]
    reduction: MinReduction,

    /// Suffix length below which selection sort scans on one worker
    #[arg(long, default_value_t = 0)]
    sequential_cutoff: usize,

    /// Write the report in Links Notation to this file
    #[arg(long)]
    lino_file: Option<PathBuf>,

    /// Write the report as Markdown to this file
    #[arg(long)]
    markdown_file: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    match run(args) {
        Ok(true) => {}
        Ok(false) => {
            error!("some algorithms produced unsorted output");
            process::exit(2);
        }
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    }
}

/// Run the benchmark; returns whether every output verified.
fn run(args: Args) -> Result<bool, SortError> {
    let config = build_config(&args)?;

    println!("Parallel Sorting Benchmark");
    println!("==========================\n");
    println!(
        "Sizes: {}",
        config
            .sizes
            .iter()
            .map(|&s| format_size(s))
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!("Workers: {:?}", config.workers);
    println!("Value range: [{}, {}]", config.low, config.high);
    println!("Reduction: {:?}", config.reduction);
    println!("Runs per algorithm: {}\n", config.runs);

    println!(
        "{:>8} | {:<22} | {:>7} | {:>12} | {:>8}",
        "Size", "Algorithm", "Workers", "Time (ms)", "Verified"
    );
    println!("{:-<8}-+-{:-<22}-+-{:-<7}-+-{:-<12}-+-{:-<8}", "", "", "", "", "");

    let results = run_benchmarks(&config, print_result)?;

    let mut report = BenchmarkReport::new(&format!(
        "{} runs, values in [{}, {}], {:?} reduction",
        config.runs, config.low, config.high, config.reduction
    ));
    for result in results {
        report.add_result(result);
    }

    let speedups = report.speedups();
    if !speedups.is_empty() {
        println!("\n--- Parallel vs Sequential ---");
        for speedup in &speedups {
            if speedup.factor > 1.0 {
                println!(
                    "{:>8} {:<10}: parallel ({} workers) is {:.2}x faster",
                    format_size(speedup.array_size),
                    speedup.family,
                    speedup.workers,
                    speedup.factor
                );
            } else {
                println!(
                    "{:>8} {:<10}: sequential is {:.2}x faster",
                    format_size(speedup.array_size),
                    speedup.family,
                    1.0 / speedup.factor
                );
            }
        }
    }

    if let Some(ref path) = args.lino_file {
        report.save_lino(path)?;
        info!("Lino report written to: {}", path.display());
    }
    if let Some(ref path) = args.markdown_file {
        report.save_markdown(path)?;
        info!("Markdown report written to: {}", path.display());
    }

    Ok(report.results.iter().all(|r| r.verified))
}

/// Resolve CLI flags into a benchmark configuration.
///
/// Explicit `--sizes`, `--min` and `--max` override the profile.
fn build_config(args: &Args) -> Result<BenchConfig, SortError> {
    let profile = args.profile.as_deref().map(get_profile).transpose()?;
    let defaults = BenchConfig::default();

    let sizes = match (&args.sizes, &profile) {
        (Some(raw), _) => parse_sizes(raw)?,
        (None, Some(p)) => p.sizes.clone(),
        (None, None) => defaults.sizes,
    };
    let low = args
        .min
        .or(profile.as_ref().map(|p| p.low))
        .unwrap_or(defaults.low);
    let high = args
        .max
        .or(profile.as_ref().map(|p| p.high))
        .unwrap_or(defaults.high);
    if low > high {
        return Err(SortError::InvalidRange { low, high });
    }

    Ok(BenchConfig {
        sizes,
        workers: args.workers.clone().unwrap_or_else(|| vec![default_workers()]),
        algorithms: args
            .algorithms
            .clone()
            .unwrap_or_else(|| Algorithm::ALL.to_vec()),
        low,
        high,
        runs: args.runs,
        seed: args.seed,
        reduction: args.reduction,
        sequential_cutoff: args.sequential_cutoff,
    })
}

fn print_result(result: &BenchmarkResult) {
    println!(
        "{:>8} | {:<22} | {:>7} | {:>12.3} | {:>8}",
        format_size(result.array_size),
        result.algorithm,
        result.workers,
        result.time_ms,
        if result.verified { "OK" } else { "FAILED" }
    );
}
