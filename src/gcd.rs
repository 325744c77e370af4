//! Greatest common divisor via the iterative Euclidean algorithm.
//!
//! ## Sign semantics
//!
//! Remainders follow Rust's `%` (truncated division): the remainder takes the sign of the dividend.
//! No normalization is applied, so negative operands can produce a negative result.
//!
//! `i32::MIN % -1` overflows under `%`; the loop uses `wrapping_rem`, which yields `0` for that pair
//! and agrees with `%` everywhere else.

/// Greatest common divisor of `a` and `b`.
///
/// Repeatedly replaces `(a, b)` with `(b, a mod b)` until `b` is zero and returns the final `a`.
/// `gcd(a, 0) == a`.
///
/// ```
/// use gcd_bench::gcd;
///
/// assert_eq!(gcd(987_654_321, 123_456_789), 9);
/// assert_eq!(gcd(48, 18), 6);
/// assert_eq!(gcd(5, 0), 5);
/// ```
#[inline]
pub const fn gcd(mut a: i32, mut b: i32) -> i32 {
    while b != 0 {
        let t = b;
        b = a.wrapping_rem(b);
        a = t;
    }
    a
}

// ============================================================================
// Tests
// ============================================================================
