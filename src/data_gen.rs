//! Random input generation for the benchmarks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::SortError;

/// Uniform integer generator, seedable for reproducible runs.
pub struct DataGenerator {
    rng: StdRng,
}

impl DataGenerator {
    /// Create a generator with a fixed seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a generator seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Generate `count` values uniformly drawn from `[low, high]`.
    pub fn uniform_i32(&mut self, count: usize, low: i32, high: i32) -> Result<Vec<i32>, SortError> {
        if low > high {
            return Err(SortError::InvalidRange { low, high });
        }
        Ok((0..count).map(|_| self.rng.gen_range(low..=high)).collect())
    }
}

/// Generate `size` values uniformly drawn from `[low, high]`.
pub fn generate(size: usize, low: i32, high: i32) -> Result<Vec<i32>, SortError> {
    DataGenerator::from_entropy().uniform_i32(size, low, high)
}
