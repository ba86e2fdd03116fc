//! Sequential Selection Sort
//!
//! The single-threaded counterpart of [`crate::parallel_selection_sort`]:
//! for each position, scan the unsorted suffix for its first minimum and swap
//! it into place. O(n²) comparisons, at most n - 1 swaps.

/// Sort a slice in place using selection sort.
pub fn sort<T: Ord>(data: &mut [T]) {
    let n = data.len();
    if n <= 1 {
        return;
    }

    for i in 0..n - 1 {
        let mut min_index = i;
        for j in i + 1..n {
            if data[j] < data[min_index] {
                min_index = j;
            }
        }

        if min_index != i {
            data.swap(i, min_index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::baseline::is_sorted;
    use rand::Rng;

    #[test]
    fn test_sort_empty() {
        let mut data: Vec<i32> = vec![];
        sort(&mut data);
        assert!(data.is_empty());
    }

    #[test]
    fn test_sort_single() {
        let mut data = vec![7];
        sort(&mut data);
        assert_eq!(data, vec![7]);
    }

    #[test]
    fn test_sort_small() {
        let mut data = vec![5, 3, 1, 4, 2];
        sort(&mut data);
        assert_eq!(data, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_sort_reverse() {
        let mut data: Vec<i32> = (0..100).rev().collect();
        sort(&mut data);
        assert_eq!(data, (0..100).collect::<Vec<i32>>());
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
        let mut data: Vec<i32> = (0..1000).map(|_| rng.gen_range(0..=10000)).collect();
        let mut expected = data.clone();
        expected.sort_unstable();

        sort(&mut data);
        assert!(is_sorted(&data));
        assert_eq!(data, expected);
    }
}
