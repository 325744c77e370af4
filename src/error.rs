//! Error type for benchmark runs.
//!
//! The GCD arithmetic cannot fail, so the only failure a run can hit is writing the result stream.

use std::io;

use thiserror::Error;

/// Errors that occur while running the benchmark
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("failed to write benchmark output: {0}")]
    Output(#[from] io::Error),
}

impl BenchError {
    /// True when the reader on the other end of stdout went away (e.g. `gcd-bench | head`).
    pub fn is_broken_pipe(&self) -> bool {
        match self {
            BenchError::Output(e) => e.kind() == io::ErrorKind::BrokenPipe,
        }
    }
}

/// Result type for benchmark operations.
pub type BenchResult<T> = Result<T, BenchError>;
