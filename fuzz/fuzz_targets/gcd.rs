#![no_main]

use gcd_bench::gcd;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|pair: (i32, i32)| {
    let (a, b) = pair;
    // Must not panic for any pair, including i32::MIN operands
    let g = gcd(a, b);
    if g != 0 {
        assert_eq!(a.wrapping_rem(g), 0);
        assert_eq!(b.wrapping_rem(g), 0);
    }
});
