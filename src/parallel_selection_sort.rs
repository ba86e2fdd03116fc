//! Parallel Selection Sort
//!
//! Selection sort whose per-pass minimum search is split across a fixed pool
//! of workers. Each outer pass `i` is one fork-join region:
//!
//! 1. The unsorted suffix `(i, N)` is cut into one contiguous partition per worker.
//! 2. Every worker scans its partition for a local minimum index
//!    (strict `<`, so the first occurrence inside the partition wins).
//! 3. Local minima are merged into the pass minimum, which starts at `i`.
//!    Only a strictly smaller value replaces it.
//! 4. After the join, `data[i]` is swapped with the pass minimum.
//!
//! The work is still O(n²) comparisons; parallelism only shortens the inner
//! scan, and every pass pays one synchronisation.
//!
//! ## Reductions
//!
//! - [`MinReduction::Collect`]: every partition returns its local minimum and the
//!   results are merged in ascending partition order after the join. No locking,
//!   and ties always resolve to the lowest index.
//! - [`MinReduction::Mutex`]: workers update a shared index inside a critical
//!   section as soon as they finish scanning.
//! - [`MinReduction::Atomic`]: workers publish their local minimum with a
//!   compare-and-swap loop on an `AtomicUsize`.
//!
//! With `Mutex` and `Atomic` the winning index among equal minima depends on
//! scheduling; the sorted output does not.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use log::debug;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::error::SortError;

/// How per-partition minima are merged into the pass minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum MinReduction {
    /// Gather local minima after the join and scan them in partition order.
    #[default]
    Collect,
    /// Critical section around the shared minimum index.
    Mutex,
    /// Lock-free compare-and-swap on the shared minimum index.
    Atomic,
}

/// Selection sort backed by a persistent rayon pool.
///
/// The pool is built once and reused for every pass of every call, so the
/// n - 1 fork-join regions of a sort never spawn threads.
///
/// # Example
///
/// ```
/// use parallel_sorting::parallel_selection_sort::ParallelSelectionSorter;
///
/// let sorter = ParallelSelectionSorter::new(4).unwrap();
/// let mut data = vec![5, 3, 1, 4, 2];
/// sorter.sort(&mut data);
/// assert_eq!(data, vec![1, 2, 3, 4, 5]);
/// ```
pub struct ParallelSelectionSorter {
    pool: ThreadPool,
    reduction: MinReduction,
    sequential_cutoff: usize,
}

impl ParallelSelectionSorter {
    /// Build a sorter with its own pool of `workers` threads.
    pub fn new(workers: usize) -> Result<Self, SortError> {
        if workers == 0 {
            return Err(SortError::NoWorkers);
        }

        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("selection-worker-{}", i))
            .build()?;
        debug!("built selection sort pool with {} workers", workers);

        Ok(Self {
            pool,
            reduction: MinReduction::default(),
            sequential_cutoff: 0,
        })
    }

    /// Use `reduction` to merge local minima.
    pub fn with_reduction(mut self, reduction: MinReduction) -> Self {
        self.reduction = reduction;
        self
    }

    /// Scan suffixes shorter than `cutoff` on a single worker.
    ///
    /// The default of 0 keeps every pass parallel.
    pub fn with_sequential_cutoff(mut self, cutoff: usize) -> Self {
        self.sequential_cutoff = cutoff;
        self
    }

    pub fn workers(&self) -> usize {
        self.pool.current_num_threads()
    }

    pub fn reduction(&self) -> MinReduction {
        self.reduction
    }

    /// Run `op` inside this sorter's pool.
    ///
    /// Parallel iterators used by `op` are scheduled on the sorter's workers.
    pub fn install<OP, R>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        self.pool.install(op)
    }

    /// Sort `data` in place in non-decreasing order.
    pub fn sort<T>(&self, data: &mut [T])
    where
        T: Ord + Send + Sync,
    {
        if data.len() <= 1 {
            return;
        }

        let workers = self.workers();
        debug!(
            "parallel selection sort: {} elements, {} workers, {:?} reduction",
            data.len(),
            workers,
            self.reduction
        );

        let reduction = self.reduction;
        let cutoff = self.sequential_cutoff;
        self.pool.install(|| sort_passes(data, workers, reduction, cutoff));
    }
}

/// Sort `data` on the current rayon pool.
///
/// Partitions the suffix into `rayon::current_num_threads()` chunks and uses
/// [`MinReduction::Collect`].
pub fn sort<T>(data: &mut [T])
where
    T: Ord + Send + Sync,
{
    if data.len() <= 1 {
        return;
    }
    sort_passes(data, rayon::current_num_threads(), MinReduction::Collect, 0);
}

fn sort_passes<T>(data: &mut [T], workers: usize, reduction: MinReduction, cutoff: usize)
where
    T: Ord + Send + Sync,
{
    let n = data.len();
    for i in 0..n - 1 {
        let min_index = find_min_index(data, i, workers, reduction, cutoff);
        if min_index != i {
            data.swap(i, min_index);
        }
    }
}

/// Index of a minimum of `data[start..]`.
///
/// `start` must be a valid index of `data`.
fn find_min_index<T>(
    data: &[T],
    start: usize,
    workers: usize,
    reduction: MinReduction,
    cutoff: usize,
) -> usize
where
    T: Ord + Sync,
{
    let first = start + 1;
    let tail = &data[first..];
    if tail.is_empty() {
        return start;
    }

    if tail.len() < cutoff {
        let local = first + local_min_index(tail);
        return if data[local] < data[start] { local } else { start };
    }

    let chunk_len = tail.len().div_ceil(workers.max(1));
    let partitions = tail.par_chunks(chunk_len).enumerate();

    match reduction {
        MinReduction::Collect => {
            let local_minima: Vec<usize> = partitions
                .map(|(part, chunk)| first + part * chunk_len + local_min_index(chunk))
                .collect();

            local_minima.into_iter().fold(start, |best, candidate| {
                if data[candidate] < data[best] {
                    candidate
                } else {
                    best
                }
            })
        }
        MinReduction::Mutex => {
            let shared = Mutex::new(start);
            partitions.for_each(|(part, chunk)| {
                let local = first + part * chunk_len + local_min_index(chunk);
                let mut min_index = shared.lock().unwrap_or_else(PoisonError::into_inner);
                if data[local] < data[*min_index] {
                    *min_index = local;
                }
            });
            shared.into_inner().unwrap_or_else(PoisonError::into_inner)
        }
        MinReduction::Atomic => {
            let shared = AtomicUsize::new(start);
            partitions.for_each(|(part, chunk)| {
                let local = first + part * chunk_len + local_min_index(chunk);
                let mut current = shared.load(Ordering::Acquire);
                while data[local] < data[current] {
                    match shared.compare_exchange_weak(
                        current,
                        local,
                        Ordering::AcqRel,
                        Ordering::Acquire,
                    ) {
                        Ok(_) => break,
                        Err(actual) => current = actual,
                    }
                }
            });
            shared.into_inner()
        }
    }
}

/// Position of the first minimum in a non-empty partition.
#[inline]
fn local_min_index<T: Ord>(chunk: &[T]) -> usize {
    let mut min = 0;
    for (j, item) in chunk.iter().enumerate().skip(1) {
        if *item < chunk[min] {
            min = j;
        }
    }
    min
}
