//! Reference Sorts
//!
//! Library sorts used as ground truth when verifying the quadratic variants,
//! and as the "how fast could this be" rows in benchmark reports.
//!
//! - `std_sort`: single-threaded pattern-defeating quicksort (`sort_unstable`)
//! - `rayon_sort`: rayon's parallel `par_sort_unstable`

use rayon::prelude::*;

/// Sort a slice in place with the standard library's unstable sort.
#[inline]
pub fn std_sort<T: Ord>(data: &mut [T]) {
    data.sort_unstable();
}

/// Sort a slice in place with rayon's parallel unstable sort.
///
/// Runs on whichever rayon pool is current when called.
#[inline]
pub fn rayon_sort<T: Ord + Send>(data: &mut [T]) {
    data.par_sort_unstable();
}

/// Check if a slice is sorted in ascending order.
#[inline]
pub fn is_sorted<T: Ord>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

/// Sorted copy of `data`, used as the expected output of every variant.
pub fn expected_output<T: Ord + Clone>(data: &[T]) -> Vec<T> {
    let mut expected = data.to_vec();
    std_sort(&mut expected);
    expected
}
