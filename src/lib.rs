//! Parallel Sorting
//!
//! Sequential and loop-parallel variants of the classic O(n²) sorts, timed
//! against each other on random integer arrays:
//! - **Selection sort**: per-pass minimum search split across a worker pool
//!   ([`parallel_selection_sort`])
//! - **Bubble sort**: sequential sweeps vs. parallel odd-even transposition
//! - **Insertion sort**: sequential only
//!
//! `std::sort_unstable` and rayon's `par_sort_unstable` serve as references.

pub mod algorithm;
pub mod baseline;
pub mod benchmark;
pub mod bubble_sort;
pub mod config;
pub mod data_gen;
pub mod error;
pub mod insertion_sort;
pub mod lino_report;
pub mod parallel_selection_sort;
pub mod selection_sort;
pub mod timing;

pub use algorithm::Algorithm;
pub use error::SortError;
pub use parallel_selection_sort::{MinReduction, ParallelSelectionSorter};
