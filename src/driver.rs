//! Benchmark driver: the iteration/printing harness around [`gcd`].
//!
//! Every iteration recomputes the GCD from the workload operands and writes one decimal line.
//! The operands pass through [`black_box`] so the call is not hoisted out of the loop.

use std::hint::black_box;
use std::io::{self, BufWriter, Write};
use std::time::Instant;

use crate::error::BenchResult;
use crate::gcd::gcd;
use crate::workload::Workload;

/// What a completed run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of iterations executed (equals the number of lines written).
    pub iterations: u64,
    /// Result of the final iteration, `None` for an empty workload.
    pub last_result: Option<i32>,
}

/// Run `workload`, writing each result followed by `\n` to `out`.
///
/// The writer is not flushed; callers that hand in a buffered writer flush it themselves.
/// A write failure stops the loop and is returned as [`BenchError::Output`](crate::BenchError::Output).
#[tracing::instrument(skip_all, fields(lhs = workload.lhs, rhs = workload.rhs, iterations = workload.iterations))]
pub fn run<W: Write>(workload: &Workload, out: &mut W) -> BenchResult<RunSummary> {
    let start = Instant::now();
    let mut last_result = None;

    for _ in 0..workload.iterations {
        let r = gcd(black_box(workload.lhs), black_box(workload.rhs));
        writeln!(out, "{r}")?;
        last_result = Some(r);
    }

    let summary = RunSummary {
        iterations: workload.iterations,
        last_result,
    };
    tracing::info!(
        iterations = summary.iterations,
        last_result = ?summary.last_result,
        elapsed_secs = start.elapsed().as_secs_f64(),
        "benchmark finished"
    );
    Ok(summary)
}

/// Run `workload` against a locked, buffered stdout and flush it afterwards.
pub fn run_stdout(workload: &Workload) -> BenchResult<RunSummary> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let summary = run(workload, &mut out)?;
    out.flush()?;
    Ok(summary)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::workload::EXPECTED_GCD;

    /// Writer that fails every write.
    struct FailingWriter {
        kind: io::ErrorKind,
    }

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(self.kind, "write refused"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_every_line_is_the_same_result() {
        let workload = Workload::new(987_654_321, 123_456_789, 1_000);
        let mut out = Vec::new();
        let summary = run(&workload, &mut out).unwrap();

        assert_eq!(summary.iterations, 1_000);
        assert_eq!(summary.last_result, Some(EXPECTED_GCD));

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1_000);
        assert!(text.lines().all(|line| line == "9"));
        assert!(text.ends_with("9\n"));
    }

    #[test]
    fn test_output_is_exact() {
        let workload = Workload::new(48, 18, 3);
        let mut out = Vec::new();
        run(&workload, &mut out).unwrap();
        assert_eq!(out, b"6\n6\n6\n");
    }

    #[test]
    fn test_negative_results_are_printed_with_sign() {
        let workload = Workload::new(48, -18, 2);
        let mut out = Vec::new();
        run(&workload, &mut out).unwrap();
        assert_eq!(out, b"-6\n-6\n");
    }

    #[test]
    fn test_zero_iterations_writes_nothing() {
        let workload = Workload::new(48, 18, 0);
        let mut out = Vec::new();
        let summary = run(&workload, &mut out).unwrap();

        assert!(out.is_empty());
        assert_eq!(
            summary,
            RunSummary {
                iterations: 0,
                last_result: None
            }
        );
    }

    #[test]
    fn test_write_failure_propagates() {
        let mut out = FailingWriter {
            kind: io::ErrorKind::BrokenPipe,
        };
        let err = run(&Workload::FIXED, &mut out).unwrap_err();
        assert!(err.is_broken_pipe());

        let mut out = FailingWriter {
            kind: io::ErrorKind::Other,
        };
        let err = run(&Workload::FIXED, &mut out).unwrap_err();
        assert!(!err.is_broken_pipe());
    }

    #[test]
    fn test_fixed_workload_output_size() {
        let mut out = Vec::new();
        let summary = run(&Workload::FIXED, &mut out).unwrap();

        assert_eq!(summary.iterations, 1_000_000);
        assert_eq!(out.len(), 2 * 1_000_000);
        assert!(out.chunks_exact(2).all(|line| line == b"9\n"));
    }
}
