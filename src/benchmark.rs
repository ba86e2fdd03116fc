//! Measurement harness: for every size, generate one input, then time each
//! selected algorithm on its own copy and check the output against the
//! standard library's sort.

use log::{debug, info, warn};

use crate::algorithm::Algorithm;
use crate::baseline::expected_output;
use crate::config::format_size;
use crate::data_gen::DataGenerator;
use crate::error::SortError;
use crate::lino_report::BenchmarkResult;
use crate::parallel_selection_sort::{MinReduction, ParallelSelectionSorter};
use crate::timing::{as_millis_f64, measure};

/// Configuration for a benchmark run.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    pub sizes: Vec<usize>,
    /// Worker counts each parallel algorithm is run with.
    pub workers: Vec<usize>,
    pub algorithms: Vec<Algorithm>,
    pub low: i32,
    pub high: i32,
    /// Timed repetitions per algorithm; the reported time is their mean.
    pub runs: u32,
    pub seed: Option<u64>,
    pub reduction: MinReduction,
    pub sequential_cutoff: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            sizes: vec![1_000, 10_000],
            workers: vec![default_workers()],
            algorithms: Algorithm::ALL.to_vec(),
            low: 0,
            high: 10_000,
            runs: 1,
            seed: None,
            reduction: MinReduction::Collect,
            sequential_cutoff: 0,
        }
    }
}

/// Number of hardware threads, or 1 if it cannot be queried.
pub fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Run every configured algorithm over every configured size.
///
/// Sequential algorithms run once per size; parallel ones once per worker
/// count. `on_result` is called as soon as each measurement is done.
pub fn run_benchmarks(
    config: &BenchConfig,
    mut on_result: impl FnMut(&BenchmarkResult),
) -> Result<Vec<BenchmarkResult>, SortError> {
    let worker_counts = if config.workers.is_empty() {
        vec![default_workers()]
    } else {
        config.workers.clone()
    };

    let sorters = worker_counts
        .iter()
        .map(|&workers| {
            ParallelSelectionSorter::new(workers).map(|s| {
                s.with_reduction(config.reduction)
                    .with_sequential_cutoff(config.sequential_cutoff)
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut gen = match config.seed {
        Some(seed) => DataGenerator::new(seed),
        None => DataGenerator::from_entropy(),
    };
    let runs = config.runs.max(1);
    let mut results = Vec::new();

    for &size in &config.sizes {
        info!(
            "size {}: generating values in [{}, {}]",
            format_size(size),
            config.low,
            config.high
        );
        let input = gen.uniform_i32(size, config.low, config.high)?;
        let expected = expected_output(&input);

        for &algorithm in &config.algorithms {
            let sorters_for_run = if algorithm.is_parallel() {
                &sorters[..]
            } else {
                &sorters[..1]
            };

            for sorter in sorters_for_run {
                let result = measure_algorithm(algorithm, &input, &expected, sorter, runs);
                if !result.verified {
                    warn!(
                        "{} @ {} ({} workers) produced unsorted output",
                        algorithm,
                        format_size(size),
                        result.workers
                    );
                }
                on_result(&result);
                results.push(result);
            }
        }
    }

    Ok(results)
}

/// Time `runs` sorts of copies of `input` and compare each output to `expected`.
pub fn measure_algorithm(
    algorithm: Algorithm,
    input: &[i32],
    expected: &[i32],
    sorter: &ParallelSelectionSorter,
    runs: u32,
) -> BenchmarkResult {
    let workers = if algorithm.is_parallel() {
        sorter.workers()
    } else {
        1
    };

    let mut total_ms = 0.0;
    let mut verified = true;
    for run in 0..runs.max(1) {
        let mut data = input.to_vec();
        let elapsed = measure(|| algorithm.run(&mut data, sorter));
        debug!(
            "{} @ {} run {}: {:.3} ms",
            algorithm,
            input.len(),
            run,
            as_millis_f64(elapsed)
        );
        total_ms += as_millis_f64(elapsed);
        verified &= data == expected;
    }

    BenchmarkResult {
        algorithm: algorithm.name().to_string(),
        mode: algorithm.mode().to_string(),
        workers,
        array_size: input.len(),
        time_ms: total_ms / f64::from(runs.max(1)),
        verified,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> BenchConfig {
        BenchConfig {
            sizes: vec![200, 500],
            workers: vec![1, 2],
            algorithms: vec![
                Algorithm::SelectionSequential,
                Algorithm::SelectionParallel,
                Algorithm::InsertionSequential,
            ],
            seed: Some(7),
            ..BenchConfig::default()
        }
    }

    #[test]
    fn test_run_benchmarks_result_shape() {
        let mut seen = 0;
        let results = run_benchmarks(&small_config(), |_| seen += 1).unwrap();

        // Per size: 1 sequential selection + 2 parallel selection + 1 insertion
        assert_eq!(results.len(), 8);
        assert_eq!(seen, 8);
        assert!(results.iter().all(|r| r.verified));

        let parallel: Vec<usize> = results
            .iter()
            .filter(|r| r.array_size == 200 && r.algorithm == "selection_parallel")
            .map(|r| r.workers)
            .collect();
        assert_eq!(parallel, vec![1, 2]);
    }

    #[test]
    fn test_run_benchmarks_sequential_reports_one_worker() {
        let results = run_benchmarks(&small_config(), |_| {}).unwrap();
        assert!(results
            .iter()
            .filter(|r| r.mode == "sequential")
            .all(|r| r.workers == 1));
    }

    #[test]
    fn test_run_benchmarks_invalid_range() {
        let config = BenchConfig {
            low: 10,
            high: 0,
            ..small_config()
        };
        assert!(matches!(
            run_benchmarks(&config, |_| {}),
            Err(SortError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_run_benchmarks_zero_workers() {
        let config = BenchConfig {
            workers: vec![0],
            ..small_config()
        };
        assert!(matches!(
            run_benchmarks(&config, |_| {}),
            Err(SortError::NoWorkers)
        ));
    }

    #[test]
    fn test_measure_algorithm_detects_wrong_expectation() {
        let sorter = ParallelSelectionSorter::new(2).unwrap();
        let input = vec![3, 1, 2];
        let wrong = vec![3, 2, 1];
        let result = measure_algorithm(Algorithm::SelectionParallel, &input, &wrong, &sorter, 2);
        assert!(!result.verified);
        assert_eq!(result.workers, 2);
        assert_eq!(result.array_size, 3);
    }
}
