//! The set of benchmarked sort variants.

use std::fmt;

use crate::parallel_selection_sort::ParallelSelectionSorter;
use crate::{baseline, bubble_sort, insertion_sort, selection_sort};

/// One benchmarked sort variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Algorithm {
    BubbleSequential,
    BubbleParallel,
    SelectionSequential,
    SelectionParallel,
    InsertionSequential,
    StdUnstable,
    RayonUnstable,
}

impl Algorithm {
    pub const ALL: [Algorithm; 7] = [
        Algorithm::BubbleSequential,
        Algorithm::BubbleParallel,
        Algorithm::SelectionSequential,
        Algorithm::SelectionParallel,
        Algorithm::InsertionSequential,
        Algorithm::StdUnstable,
        Algorithm::RayonUnstable,
    ];

    /// Stable snake_case name used in reports.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::BubbleSequential => "bubble_sequential",
            Algorithm::BubbleParallel => "bubble_parallel",
            Algorithm::SelectionSequential => "selection_sequential",
            Algorithm::SelectionParallel => "selection_parallel",
            Algorithm::InsertionSequential => "insertion_sequential",
            Algorithm::StdUnstable => "std_unstable",
            Algorithm::RayonUnstable => "rayon_unstable",
        }
    }

    pub fn from_name(name: &str) -> Option<Algorithm> {
        Algorithm::ALL.into_iter().find(|a| a.name() == name)
    }

    /// Sort family shared by the sequential and parallel variant, e.g. `selection`.
    pub fn family(self) -> &'static str {
        match self {
            Algorithm::BubbleSequential | Algorithm::BubbleParallel => "bubble",
            Algorithm::SelectionSequential | Algorithm::SelectionParallel => "selection",
            Algorithm::InsertionSequential => "insertion",
            Algorithm::StdUnstable | Algorithm::RayonUnstable => "library",
        }
    }

    /// Whether the variant uses the worker pool, and so is run once per worker count.
    pub fn is_parallel(self) -> bool {
        matches!(
            self,
            Algorithm::BubbleParallel | Algorithm::SelectionParallel | Algorithm::RayonUnstable
        )
    }

    pub fn mode(self) -> &'static str {
        if self.is_parallel() {
            "parallel"
        } else {
            "sequential"
        }
    }

    /// Sort `data` with this variant.
    ///
    /// Parallel variants run inside `sorter`'s worker pool.
    pub fn run<T>(self, data: &mut [T], sorter: &ParallelSelectionSorter)
    where
        T: Ord + Send + Sync,
    {
        match self {
            Algorithm::BubbleSequential => bubble_sort::sort(data),
            Algorithm::BubbleParallel => sorter.install(|| bubble_sort::parallel_sort(data)),
            Algorithm::SelectionSequential => selection_sort::sort(data),
            Algorithm::SelectionParallel => sorter.sort(data),
            Algorithm::InsertionSequential => insertion_sort::sort(data),
            Algorithm::StdUnstable => baseline::std_sort(data),
            Algorithm::RayonUnstable => sorter.install(|| baseline::rayon_sort(data)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
