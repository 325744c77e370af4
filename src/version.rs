//! Benchmark version information.
//!
//! The value is taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile time.

/// The crate version string (for example, `0.1.0`).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
