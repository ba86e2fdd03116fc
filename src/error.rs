//! Error type for the fallible parts of the crate.
//!
//! The sort routines themselves never fail; everything around them (building
//! worker pools, generating inputs, parsing CLI sizes, writing reports) does.

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum SortError {
    #[error("a worker pool needs at least one worker")]
    NoWorkers,
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    #[error("invalid value range: low={low}, high={high}")]
    InvalidRange { low: i32, high: i32 },
    #[error("invalid size '{0}'")]
    InvalidSize(String),
    #[error("unknown profile '{0}' (valid: assignment, practice)")]
    UnknownProfile(String),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
