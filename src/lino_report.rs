//! Links Notation (Lino) Report Generator
//!
//! Benchmark reports are written in Links Notation, an indentation-based
//! format of named blocks and `key value` links:
//!
//! ```text
//! results:
//!   size_1000:
//!     selection_parallel_w4:
//!       mode parallel
//!       workers 4
//!       time_ms 1.25
//!       verified true
//! ```
//!
//! The same report renders to Markdown, and `parse_lino_report` reads the
//! Lino form back (used by the `lino2md` binary).

use std::collections::BTreeMap;
use std::fmt::Write;
use std::fs;
use std::io;
use std::path::Path;

use crate::algorithm::Algorithm;
use crate::config::format_size;

/// One algorithm timed at one array size with one worker count.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkResult {
    /// Name of the algorithm (e.g., "selection_parallel", "bubble_sequential")
    pub algorithm: String,
    /// "sequential" or "parallel"
    pub mode: String,
    /// Worker threads used; 1 for sequential algorithms
    pub workers: usize,
    /// Array size in elements
    pub array_size: usize,
    /// Mean execution time in milliseconds
    pub time_ms: f64,
    /// Whether the output matched the reference sort
    pub verified: bool,
}

impl BenchmarkResult {
    /// Block label, unique within a size: parallel runs carry their worker count.
    pub fn label(&self) -> String {
        if self.mode == "parallel" {
            format!("{}_w{}", self.algorithm, self.workers)
        } else {
            self.algorithm.clone()
        }
    }

    /// `selection` for `selection_parallel`, and so on.
    pub fn family(&self) -> &str {
        match Algorithm::from_name(&self.algorithm) {
            Some(algorithm) => algorithm.family(),
            None => self
                .algorithm
                .rsplit_once('_')
                .map(|(family, _)| family)
                .unwrap_or(&self.algorithm),
        }
    }
}

/// Represents a complete benchmark report
#[derive(Debug, Clone)]
pub struct BenchmarkReport {
    /// Timestamp of when the benchmark was run (ISO 8601, UTC)
    pub timestamp: String,
    pub description: String,
    pub system_info: SystemInfo,
    pub results: Vec<BenchmarkResult>,
}

/// Host the benchmark ran on
#[derive(Debug, Clone, PartialEq)]
pub struct SystemInfo {
    pub os: String,
    pub arch: String,
    /// Hardware threads available to the process
    pub logical_cpus: usize,
}

/// Parallel-over-sequential speedup of one sort family at one size.
#[derive(Debug, Clone, PartialEq)]
pub struct Speedup {
    pub family: String,
    pub array_size: usize,
    /// Worker count of the fastest parallel run
    pub workers: usize,
    /// Sequential time divided by the fastest parallel time
    pub factor: f64,
}

impl BenchmarkReport {
    /// Create a new empty benchmark report
    pub fn new(description: &str) -> Self {
        BenchmarkReport {
            timestamp: utc_timestamp(),
            description: description.to_string(),
            system_info: SystemInfo::default(),
            results: Vec::new(),
        }
    }

    pub fn add_result(&mut self, result: BenchmarkResult) {
        self.results.push(result);
    }

    /// Distinct array sizes in ascending order.
    pub fn sizes(&self) -> Vec<usize> {
        let mut sizes: Vec<usize> = self.results.iter().map(|r| r.array_size).collect();
        sizes.sort_unstable();
        sizes.dedup();
        sizes
    }

    /// For each size and each family with both a sequential and a parallel
    /// result, the speedup of its fastest parallel run.
    pub fn speedups(&self) -> Vec<Speedup> {
        let mut speedups = Vec::new();

        for size in self.sizes() {
            let mut families: BTreeMap<&str, (Option<&BenchmarkResult>, Option<&BenchmarkResult>)> =
                BTreeMap::new();

            for result in self.results.iter().filter(|r| r.array_size == size) {
                let entry = families.entry(result.family()).or_default();
                let slot = if result.mode == "parallel" {
                    &mut entry.1
                } else {
                    &mut entry.0
                };
                if slot.map_or(true, |best| result.time_ms < best.time_ms) {
                    *slot = Some(result);
                }
            }

            for (family, pair) in families {
                if let (Some(sequential), Some(parallel)) = pair {
                    if parallel.time_ms > 0.0 {
                        speedups.push(Speedup {
                            family: family.to_string(),
                            array_size: size,
                            workers: parallel.workers,
                            factor: sequential.time_ms / parallel.time_ms,
                        });
                    }
                }
            }
        }

        speedups
    }

    /// Generate the report in Links Notation format
    pub fn to_lino(&self) -> String {
        let mut output = String::new();

        // Writing into a String cannot fail
        let _ = self.write_lino(&mut output);
        output
    }

    fn write_lino(&self, output: &mut String) -> std::fmt::Result {
        writeln!(output, "benchmark_report:")?;
        writeln!(output, "  timestamp '{}'", self.timestamp)?;
        writeln!(output, "  description '{}'", escape_lino_string(&self.description))?;

        writeln!(output)?;
        writeln!(output, "system_info:")?;
        writeln!(output, "  os '{}'", escape_lino_string(&self.system_info.os))?;
        writeln!(output, "  arch '{}'", escape_lino_string(&self.system_info.arch))?;
        writeln!(output, "  logical_cpus {}", self.system_info.logical_cpus)?;

        writeln!(output)?;
        writeln!(output, "results:")?;
        for size in self.sizes() {
            writeln!(output, "  size_{}:", size)?;
            for result in self.results.iter().filter(|r| r.array_size == size) {
                writeln!(output, "    {}:", result.label())?;
                writeln!(output, "      mode {}", result.mode)?;
                writeln!(output, "      workers {}", result.workers)?;
                writeln!(output, "      time_ms {}", result.time_ms)?;
                writeln!(output, "      verified {}", result.verified)?;
            }
        }

        writeln!(output)?;
        writeln!(output, "comparisons:")?;
        let speedups = self.speedups();
        for size in self.sizes() {
            let for_size: Vec<&Speedup> =
                speedups.iter().filter(|s| s.array_size == size).collect();
            if for_size.is_empty() {
                continue;
            }

            writeln!(output, "  size_{}:", size)?;
            for speedup in for_size {
                writeln!(output, "    {}_parallel_vs_sequential:", speedup.family)?;
                writeln!(output, "      workers {}", speedup.workers)?;
                writeln!(output, "      speedup {:.2}", speedup.factor)?;
                writeln!(
                    output,
                    "      faster {}",
                    if speedup.factor > 1.0 { "parallel" } else { "sequential" }
                )?;
            }
        }

        Ok(())
    }

    pub fn save_lino(&self, path: &Path) -> io::Result<()> {
        fs::write(path, self.to_lino())
    }

    /// Generate a markdown table from the report
    pub fn to_markdown_table(&self) -> String {
        let mut output = String::new();
        let _ = self.write_markdown(&mut output);
        output
    }

    fn write_markdown(&self, output: &mut String) -> std::fmt::Result {
        writeln!(output, "# Parallel Sorting Benchmark Report")?;
        writeln!(output)?;
        writeln!(output, "**Timestamp:** {}", self.timestamp)?;
        writeln!(output, "**Description:** {}", self.description)?;
        writeln!(output)?;

        writeln!(output, "## System Information")?;
        writeln!(output)?;
        writeln!(output, "| Property | Value |")?;
        writeln!(output, "|----------|-------|")?;
        writeln!(output, "| OS | {} |", self.system_info.os)?;
        writeln!(output, "| Arch | {} |", self.system_info.arch)?;
        writeln!(output, "| Logical CPUs | {} |", self.system_info.logical_cpus)?;
        writeln!(output)?;

        // One column per distinct label, in first-seen order
        let mut labels: Vec<String> = Vec::new();
        for result in &self.results {
            let label = result.label();
            if !labels.contains(&label) {
                labels.push(label);
            }
        }

        writeln!(output, "## Benchmark Results (ms)")?;
        writeln!(output)?;
        write!(output, "| Size |")?;
        for label in &labels {
            write!(output, " {} |", label)?;
        }
        writeln!(output)?;
        write!(output, "|------|")?;
        for label in &labels {
            write!(output, "{}|", "-".repeat(label.len() + 2))?;
        }
        writeln!(output)?;

        for size in self.sizes() {
            write!(output, "| {} |", format_size(size))?;
            for label in &labels {
                let cell = self
                    .results
                    .iter()
                    .find(|r| r.array_size == size && &r.label() == label)
                    .map(|r| {
                        if r.verified {
                            format!("{:.3}", r.time_ms)
                        } else {
                            format!("{:.3} (FAILED)", r.time_ms)
                        }
                    })
                    .unwrap_or_else(|| "N/A".to_string());
                write!(output, " {} |", cell)?;
            }
            writeln!(output)?;
        }
        writeln!(output)?;

        let speedups = self.speedups();
        if !speedups.is_empty() {
            writeln!(output, "## Parallel vs Sequential")?;
            writeln!(output)?;
            writeln!(output, "| Size | Family | Best Workers | Result |")?;
            writeln!(output, "|------|--------|--------------|--------|")?;
            for speedup in &speedups {
                let verdict = if speedup.factor > 1.0 {
                    format!("parallel {:.2}x faster", speedup.factor)
                } else {
                    format!("sequential {:.2}x faster", 1.0 / speedup.factor)
                };
                writeln!(
                    output,
                    "| {} | {} | {} | {} |",
                    format_size(speedup.array_size),
                    speedup.family,
                    speedup.workers,
                    verdict
                )?;
            }
            writeln!(output)?;
        }

        writeln!(output, "---")?;
        writeln!(output, "*Report generated by parallel-sorting*")?;
        Ok(())
    }

    pub fn save_markdown(&self, path: &Path) -> io::Result<()> {
        fs::write(path, self.to_markdown_table())
    }
}

impl Default for SystemInfo {
    fn default() -> Self {
        SystemInfo {
            os: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
            logical_cpus: std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
        }
    }
}

/// Escape a string for use in Links Notation (handle single quotes)
fn escape_lino_string(s: &str) -> String {
    s.replace('\'', "\\'")
}

/// Current UTC time as `YYYY-MM-DDTHH:MM:SSZ`.
fn utc_timestamp() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};

    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    format_unix_timestamp(secs)
}

/// Format seconds since the Unix epoch as an ISO 8601 UTC timestamp.
fn format_unix_timestamp(secs: u64) -> String {
    let days = (secs / 86_400) as i64;
    let time_of_day = secs % 86_400;
    let (year, month, day) = civil_from_days(days);

    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
        year,
        month,
        day,
        time_of_day / 3600,
        (time_of_day % 3600) / 60,
        time_of_day % 60
    )
}

/// Proleptic Gregorian date for a count of days since 1970-01-01.
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let day_of_era = z.rem_euclid(146_097);
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let mp = (5 * day_of_year + 2) / 153;
    let day = (day_of_year - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let year = year_of_era + era * 400 + i64::from(month <= 2);
    (year, month, day)
}

/// Parse a Links Notation report produced by [`BenchmarkReport::to_lino`].
///
/// Returns `None` if the content holds no results.
pub fn parse_lino_report(content: &str) -> Option<BenchmarkReport> {
    // Only what the content states; nothing from the current host
    let mut report = BenchmarkReport {
        timestamp: String::new(),
        description: String::new(),
        system_info: SystemInfo {
            os: String::new(),
            arch: String::new(),
            logical_cpus: 0,
        },
        results: Vec::new(),
    };
    let mut section = "";
    let mut current_size: Option<usize> = None;
    let mut current_result: Option<BenchmarkResult> = None;

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        // Top-level section headers are not indented
        if !line.starts_with(' ') && trimmed.ends_with(':') {
            if let Some(result) = current_result.take() {
                report.results.push(result);
            }
            section = match trimmed {
                "benchmark_report:" => "report",
                "system_info:" => "system",
                "results:" => "results",
                _ => "",
            };
            current_size = None;
            continue;
        }

        match section {
            "report" => {
                if let Some(ts) = extract_quoted_value(trimmed, "timestamp") {
                    report.timestamp = ts;
                } else if let Some(desc) = extract_quoted_value(trimmed, "description") {
                    report.description = desc;
                }
            }
            "system" => {
                if let Some(os) = extract_quoted_value(trimmed, "os") {
                    report.system_info.os = os;
                } else if let Some(arch) = extract_quoted_value(trimmed, "arch") {
                    report.system_info.arch = arch;
                } else if let Some(cpus) = trimmed.strip_prefix("logical_cpus ") {
                    if let Ok(cpus) = cpus.parse() {
                        report.system_info.logical_cpus = cpus;
                    }
                }
            }
            "results" => {
                if let Some(size) = trimmed
                    .strip_prefix("size_")
                    .and_then(|s| s.strip_suffix(':'))
                {
                    if let Some(result) = current_result.take() {
                        report.results.push(result);
                    }
                    current_size = size.parse().ok();
                    continue;
                }

                if trimmed.ends_with(':') && !trimmed.contains(' ') {
                    if let Some(size) = current_size {
                        if let Some(result) = current_result.take() {
                            report.results.push(result);
                        }
                        current_result = Some(result_from_label(trimmed.trim_end_matches(':'), size));
                    }
                    continue;
                }

                if let Some(ref mut result) = current_result {
                    if let Some(mode) = trimmed.strip_prefix("mode ") {
                        result.mode = mode.to_string();
                    } else if let Some(workers) = trimmed.strip_prefix("workers ") {
                        if let Ok(workers) = workers.parse() {
                            result.workers = workers;
                        }
                    } else if let Some(time) = trimmed.strip_prefix("time_ms ") {
                        if let Ok(time) = time.parse() {
                            result.time_ms = time;
                        }
                    } else if let Some(verified) = trimmed.strip_prefix("verified ") {
                        result.verified = verified == "true";
                    }
                }
            }
            _ => {}
        }
    }

    if let Some(result) = current_result {
        report.results.push(result);
    }

    if report.results.is_empty() {
        None
    } else {
        Some(report)
    }
}

/// Start a result from a block label such as `selection_parallel_w4`.
fn result_from_label(label: &str, array_size: usize) -> BenchmarkResult {
    let worker_suffix = label.rsplit_once("_w").and_then(|(name, workers)| {
        workers.parse::<usize>().ok().map(|workers| (name, workers))
    });

    let (algorithm, workers, mode) = match worker_suffix {
        Some((name, workers)) => (name, workers, "parallel"),
        None => (label, 1, "sequential"),
    };

    BenchmarkResult {
        algorithm: algorithm.to_string(),
        mode: mode.to_string(),
        workers,
        array_size,
        time_ms: 0.0,
        verified: false,
    }
}

fn extract_quoted_value(line: &str, key: &str) -> Option<String> {
    let value = line.strip_prefix(key)?.trim();
    if value.len() >= 2 && value.starts_with('\'') && value.ends_with('\'') {
        Some(value[1..value.len() - 1].replace("\\'", "'"))
    } else {
        None
    }
}
