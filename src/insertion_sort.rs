//! Sequential Insertion Sort
//!
//! Every element is shifted left past the larger elements of the sorted prefix.
//! Each step depends on the one before, so there is no loop-parallel variant.

/// Sort a slice in place using insertion sort.
pub fn sort<T: Ord>(data: &mut [T]) {
    for i in 1..data.len() {
        let mut j = i;
        while j > 0 && data[j - 1] > data[j] {
            data.swap(j - 1, j);
            j -= 1;
        }
    }
}
