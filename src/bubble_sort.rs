//! Bubble Sort Implementations
//!
//! Two variants of the same compare-exchange idea:
//!
//! - `sort`: classic sequential bubble sort, one sweep per pass, stopping once a
//!   sweep makes no swap.
//! - `parallel_sort`: odd-even transposition sort. A sequential sweep cannot be
//!   split across threads because neighbouring comparisons share an element, so
//!   each phase instead compares only disjoint pairs: `(0,1), (2,3), ...` on even
//!   phases and `(1,2), (3,4), ...` on odd phases. All pairs of a phase run in
//!   parallel.
//!
//! Complexity: O(n²) comparisons for both; the parallel variant needs at most
//! n phases.

use std::sync::atomic::{AtomicBool, Ordering};

use rayon::prelude::*;

/// Sort a slice in place using sequential bubble sort.
pub fn sort<T: Ord>(data: &mut [T]) {
    let n = data.len();
    if n <= 1 {
        return;
    }

    for pass in 0..n - 1 {
        let mut swapped = false;
        // The last `pass` elements are already in their final position
        for j in 0..n - pass - 1 {
            if data[j] > data[j + 1] {
                data.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

/// Sort a slice in place using parallel odd-even transposition sort.
///
/// Runs on whichever rayon pool is current when called.
pub fn parallel_sort<T: Ord + Send>(data: &mut [T]) {
    let n = data.len();
    if n <= 1 {
        return;
    }

    let mut previous_swapped = true;
    for phase in 0..n {
        let swapped = transposition_phase(data, phase % 2);

        // An even and an odd phase in a row without swaps means every
        // adjacent pair is in order
        if !swapped && !previous_swapped {
            break;
        }
        previous_swapped = swapped;
    }
}

/// Compare-exchange every pair starting at `offset`, `offset + 2`, ...
///
/// Returns whether any pair was swapped.
fn transposition_phase<T: Ord + Send>(data: &mut [T], offset: usize) -> bool {
    if data.len() <= offset + 1 {
        return false;
    }

    // One task per worker of the current pool
    let pairs = (data.len() - offset) / 2;
    let pairs_per_task = pairs.div_ceil(rayon::current_num_threads()).max(1);

    let swapped = AtomicBool::new(false);
    data[offset..]
        .par_chunks_mut(2)
        .with_min_len(pairs_per_task)
        .for_each(|pair| {
            if pair.len() == 2 && pair[0] > pair[1] {
                pair.swap(0, 1);
                swapped.store(true, Ordering::Relaxed);
            }
        });
    swapped.into_inner()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::baseline::is_sorted;
    use rand::Rng;
    use std::collections::HashSet;
    use std::sync::Mutex;
    use std::time::Duration;

    #[test]
    fn test_sort_empty() {
        let mut data: Vec<i32> = vec![];
        sort(&mut data);
        assert!(data.is_empty());
    }

    #[test]
    fn test_sort_single() {
        let mut data = vec![42];
        sort(&mut data);
        assert_eq!(data, vec![42]);
    }

    #[test]
    fn test_sort_two_elements() {
        let mut data = vec![5, 3];
        sort(&mut data);
        assert_eq!(data, vec![3, 5]);
    }

    #[test]
    fn test_sort_duplicates() {
        let mut data = vec![5, 3, 5, 1, 3, 5, 1, 1];
        sort(&mut data);
        assert_eq!(data, vec![1, 1, 1, 3, 3, 5, 5, 5]);
    }

    #[test]
    fn test_sort_random() {
        let mut rng = rand::thread_rng();
        let mut data: Vec<i32> = (0..1000).map(|_| rng.gen()).collect();
        let mut expected = data.clone();
        expected.sort_unstable();

        sort(&mut data);
        assert!(is_sorted(&data));
        assert_eq!(data, expected);
    }

    #[test]
    fn test_parallel_sort_empty() {
        let mut data: Vec<i32> = vec![];
        parallel_sort(&mut data);
        assert!(data.is_empty());
    }

    #[test]
    fn test_parallel_sort_single() {
        let mut data = vec![7];
        parallel_sort(&mut data);
        assert_eq!(data, vec![7]);
    }

    #[test]
    fn test_parallel_sort_small() {
        let mut data = vec![5, 3, 1, 4, 2];
        parallel_sort(&mut data);
        assert_eq!(data, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_parallel_sort_reverse_worst_case() {
        // Reverse order needs every one of the n phases
        let mut data: Vec<i32> = (0..257).rev().collect();
        parallel_sort(&mut data);
        assert_eq!(data, (0..257).collect::<Vec<i32>>());
    }

    #[test]
    fn test_parallel_sort_random_matches_std() {
        let mut rng = rand::thread_rng();
        let mut data: Vec<i32> = (0..5000).map(|_| rng.gen_range(0..=10000)).collect();
        let mut expected = data.clone();
        expected.sort_unstable();

        parallel_sort(&mut data);
        assert!(is_sorted(&data));
        assert_eq!(data, expected);
    }

    #[test]
    fn test_parallel_sort_already_sorted() {
        let mut data: Vec<i32> = (0..3000).collect();
        let expected = data.clone();
        parallel_sort(&mut data);
        assert_eq!(data, expected);
    }

    #[test]
    fn test_transposition_phase_reports_swaps() {
        let mut data = vec![2, 1, 4, 3, 5];
        assert!(transposition_phase(&mut data, 0));
        assert_eq!(data, vec![1, 2, 3, 4, 5]);
        assert!(!transposition_phase(&mut data, 0));
        assert!(!transposition_phase(&mut data, 1));
    }

    /// Element that records which pool thread compared it.
    struct Traced<'a> {
        value: i32,
        seen: &'a Mutex<HashSet<Option<usize>>>,
    }

    impl PartialEq for Traced<'_> {
        fn eq(&self, other: &Self) -> bool {
            self.value == other.value
        }
    }

    impl Eq for Traced<'_> {}

    impl PartialOrd for Traced<'_> {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Traced<'_> {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            self.seen
                .lock()
                .unwrap()
                .insert(rayon::current_thread_index());
            std::thread::sleep(Duration::from_micros(20));
            self.value.cmp(&other.value)
        }
    }

    #[test]
    fn test_transposition_phase_spreads_small_arrays_across_workers() {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(4)
            .build()
            .unwrap();
        let seen = Mutex::new(HashSet::new());
        let mut data: Vec<Traced> = (0..1000)
            .rev()
            .map(|value| Traced { value, seen: &seen })
            .collect();

        assert!(pool.install(|| transposition_phase(&mut data, 0)));
        let threads = seen.lock().unwrap();
        assert!(threads.len() > 1, "phase ran on {:?}", threads);
    }

    #[test]
    fn test_transposition_phase_offset_past_end() {
        let mut data = vec![1];
        assert!(!transposition_phase(&mut data, 1));
    }
}
