#![no_main]

use arbitrary::Arbitrary;
use horae_core::{HighPrecision, Seconds};
use horae_time::{Clock, Duration};
use libfuzzer_sys::fuzz_target;

const ATTOS_PER_SEC: u128 = 1_000_000_000_000_000_000;

#[derive(Arbitrary, Debug)]
struct Input {
    whole: i32,
    attos: u64,
    divisor: i16,
    lhs: i128,
    rhs: i128,
}

fn check_small(input: &Input) {
    let frac = Seconds::from_attos((input.attos % 1_000_000_000_000_000_000) as i128);
    let value = Seconds::from_i64(input.whole as i64) + frac;

    assert_eq!(value.trunc() + value.fract(), value);
    assert!(value.floor() <= value);

    let clock = Clock::from_secs(value);
    assert_eq!(clock.total_seconds(), value);
    assert!((0..60).contains(&clock.minutes()));

    let duration = Duration::new(value);
    assert!((duration - duration).is_zero());

    if input.divisor != 0 {
        let divisor = Seconds::from_i64(input.divisor as i64);
        let quotient = value / divisor;
        // Truncating division never overshoots in magnitude
        let back = quotient * divisor;
        assert!(if value.is_negative() { back >= value } else { back <= value });
    }
}

// Full-range operands, restricted to results that fit
fn check_wide(lhs: i128, rhs: i128) {
    let (a, b) = (Seconds::from_attos(lhs), Seconds::from_attos(rhs));
    let opposite = (lhs < 0) != (rhs < 0);

    if rhs != 0 && lhs.unsigned_abs() / rhs.unsigned_abs() < 100_000_000_000_000_000_000 {
        let quotient = a / b;
        assert!(quotient.is_zero() || quotient.is_negative() == opposite);
        assert_eq!(b / b, Seconds::ONE);
    }

    // Whole parts below 5e19 keep the full product under 1e20 seconds
    let whole = (lhs.unsigned_abs() / ATTOS_PER_SEC)
        .checked_mul(rhs.unsigned_abs() / ATTOS_PER_SEC);
    if whole.is_some_and(|w| w < 50_000_000_000_000_000_000) {
        let product = a * b;
        assert_eq!(product, b * a);
        assert!(product.is_zero() || product.is_negative() == opposite);
    }
    assert_eq!(a * Seconds::ONE, a);
}

fuzz_target!(|input: Input| {
    check_small(&input);
    check_wide(input.lhs, input.rhs);
});
