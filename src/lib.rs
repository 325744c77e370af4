#![forbid(unsafe_code)]
//! Euclidean GCD micro-benchmark
//!
//! Computes `gcd(987654321, 123456789)` one million times and writes each result to stdout.
//! The crate is split into the pure computation (`gcd`), the fixed workload parameters (`workload`),
//! the iteration/printing harness (`driver`), and the process entry point (`cli`).
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` with `?` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **Arithmetic**: `gcd` is total over `i32`; it never panics, including for `i32::MIN` operands.

pub mod cli;
pub mod driver;
pub mod error;
pub mod gcd;
pub mod version;
pub mod workload;

pub use driver::{RunSummary, run, run_stdout};
pub use error::{BenchError, BenchResult};
pub use gcd::gcd;
pub use workload::Workload;
