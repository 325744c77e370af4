//! Fixed benchmark parameters.
//!
//! The benchmark always runs [`Workload::FIXED`]. The operands and iteration count are compile-time
//! constants; nothing at runtime (arguments, environment) can change them. Custom workloads built with
//! [`Workload::new`] exist for short test runs.

use crate::gcd::gcd;

/// Left operand of every GCD call.
pub const LHS: i32 = 987_654_321;

/// Right operand of every GCD call.
pub const RHS: i32 = 123_456_789;

/// Number of loop iterations (and output lines).
pub const ITERATIONS: u64 = 1_000_000;

/// `gcd(LHS, RHS)`; every output line carries this value.
pub const EXPECTED_GCD: i32 = 9;

const _: () = assert!(gcd(LHS, RHS) == EXPECTED_GCD);

/// Operands and iteration count for one benchmark run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Workload {
    pub lhs: i32,
    pub rhs: i32,
    pub iterations: u64,
}

impl Workload {
    /// The benchmark's workload: `gcd(987654321, 123456789)` one million times.
    pub const FIXED: Workload = Workload::new(LHS, RHS, ITERATIONS);

    pub const fn new(lhs: i32, rhs: i32, iterations: u64) -> Self {
        Self { lhs, rhs, iterations }
    }
}

impl Default for Workload {
    fn default() -> Self {
        Self::FIXED
    }
}
