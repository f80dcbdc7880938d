//! Fixed-point decimal seconds
//!
//! `Seconds` stores a signed count of attoseconds (10^-18 s) in an `i128`,
//! which covers about ±5.4 trillion years at full resolution.

use std::fmt::{self, Write as _};
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use crate::{trim_fixed, HighPrecision, HoraeError};

const FRACTION_DIGITS: u32 = 18;
const ATTOS_PER_SEC: i128 = 1_000_000_000_000_000_000;
const ATTOS_PER_SEC_U: u128 = ATTOS_PER_SEC as u128;

#[inline]
const fn pow10(exp: u32) -> u128 {
    10u128.pow(exp)
}

/// Signed decimal seconds with 18 fractional digits
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Seconds(i128);

impl Seconds {
    pub const ZERO: Seconds = Seconds(0);
    pub const ONE: Seconds = Seconds(ATTOS_PER_SEC);

    #[inline]
    pub const fn from_attos(attos: i128) -> Self {
        Seconds(attos)
    }

    #[inline]
    pub const fn from_int(secs: i64) -> Self {
        Seconds(secs as i128 * ATTOS_PER_SEC)
    }

    /// Signed value from an unsigned magnitude; panics outside `i128`
    #[inline]
    fn from_magnitude(magnitude: u128, negative: bool) -> Self {
        let value = if negative {
            0i128.checked_sub_unsigned(magnitude)
        } else {
            i128::try_from(magnitude).ok()
        };
        match value {
            Some(attos) => Seconds(attos),
            None => overflow(),
        }
    }
}

#[cold]
#[track_caller]
fn overflow() -> ! {
    panic!("Seconds arithmetic overflowed")
}

/// `10 * rem` as a quotient and remainder of `b`, for `rem < b`
///
/// Past `u128::MAX / 10` the product itself no longer fits, so the digit is
/// counted by adding `rem` ten times modulo `b`.
#[inline]
fn shift_digit(rem: u128, b: u128) -> (u128, u128) {
    if rem <= u128::MAX / 10 {
        let wide = rem * 10;
        return (wide / b, wide % b);
    }
    let (mut digit, mut acc) = (0, 0u128);
    for _ in 0..10 {
        // acc + rem >= b, written without forming the sum
        if acc >= b - rem {
            acc -= b - rem;
            digit += 1;
        } else {
            acc += rem;
        }
    }
    (digit, acc)
}

impl HighPrecision for Seconds {
    const ZERO: Self = Seconds(0);
    const MAX_DIGITS: u32 = FRACTION_DIGITS;

    #[inline]
    fn from_i64(n: i64) -> Self {
        Seconds::from_int(n)
    }

    fn from_f64(x: f64) -> Self {
        if !x.is_finite() {
            tracing::warn!(value = x, "non-finite seconds value coerced to zero");
            return Seconds::ZERO;
        }
        // Scaling the whole value at once would lose the fraction of large inputs
        let whole = x.trunc();
        let frac = ((x - whole) * ATTOS_PER_SEC as f64).round() as i128;
        Seconds((whole as i128).saturating_mul(ATTOS_PER_SEC).saturating_add(frac))
    }

    #[inline]
    fn floor(self) -> Self {
        Seconds(self.0.div_euclid(ATTOS_PER_SEC) * ATTOS_PER_SEC)
    }

    #[inline]
    fn trunc(self) -> Self {
        Seconds(self.0 / ATTOS_PER_SEC * ATTOS_PER_SEC)
    }

    #[inline]
    fn fract(self) -> Self {
        Seconds(self.0 % ATTOS_PER_SEC)
    }

    fn round_to(self, digits: u32) -> Self {
        if digits >= FRACTION_DIGITS {
            return self;
        }
        let unit = pow10(FRACTION_DIGITS - digits);
        let magnitude = self.0.unsigned_abs();
        let mut units = magnitude / unit;
        if (magnitude % unit) * 2 >= unit {
            units += 1;
        }
        Seconds::from_magnitude(units * unit, self.0 < 0)
    }

    #[inline]
    fn to_i128(self) -> i128 {
        self.0 / ATTOS_PER_SEC
    }

    #[inline]
    fn to_f64(self) -> f64 {
        (self.0 / ATTOS_PER_SEC) as f64 + (self.0 % ATTOS_PER_SEC) as f64 / ATTOS_PER_SEC as f64
    }

    fn write_fixed(&self, out: &mut dyn fmt::Write, digits: u32, int_width: usize) -> fmt::Result {
        let rounded = self.round_to(digits);
        let magnitude = rounded.0.unsigned_abs();
        if rounded.0 < 0 {
            out.write_char('-')?;
        }
        write!(out, "{:0width$}", magnitude / ATTOS_PER_SEC_U, width = int_width)?;
        if digits == 0 {
            return Ok(());
        }
        let shown = digits.min(FRACTION_DIGITS);
        let frac = (magnitude % ATTOS_PER_SEC_U) / pow10(FRACTION_DIGITS - shown);
        write!(out, ".{:0width$}", frac, width = shown as usize)?;
        for _ in shown..digits {
            out.write_char('0')?;
        }
        Ok(())
    }
}

impl From<i64> for Seconds {
    #[inline]
    fn from(secs: i64) -> Self {
        Seconds::from_int(secs)
    }
}

impl Add for Seconds {
    type Output = Seconds;

    #[inline]
    fn add(self, rhs: Seconds) -> Self::Output {
        Seconds(self.0 + rhs.0)
    }
}

impl Sub for Seconds {
    type Output = Seconds;

    #[inline]
    fn sub(self, rhs: Seconds) -> Self::Output {
        Seconds(self.0 - rhs.0)
    }
}

impl Neg for Seconds {
    type Output = Seconds;

    #[inline]
    fn neg(self) -> Self::Output {
        Seconds(-self.0)
    }
}

impl Mul for Seconds {
    type Output = Seconds;

    /// Truncating product
    fn mul(self, rhs: Seconds) -> Self::Output {
        let negative = (self.0 < 0) != (rhs.0 < 0);
        let (a, b) = (self.0.unsigned_abs(), rhs.0.unsigned_abs());
        let (a_int, a_frac) = (a / ATTOS_PER_SEC_U, a % ATTOS_PER_SEC_U);
        let (b_int, b_frac) = (b / ATTOS_PER_SEC_U, b % ATTOS_PER_SEC_U);
        // Each cross term stays below 2^127, so only the whole part and the
        // final sums can overflow
        let magnitude = a_int
            .checked_mul(b_int)
            .and_then(|whole| whole.checked_mul(ATTOS_PER_SEC_U))
            .and_then(|m| m.checked_add(a_int * b_frac))
            .and_then(|m| m.checked_add(a_frac * b_int))
            .and_then(|m| m.checked_add(a_frac * b_frac / ATTOS_PER_SEC_U))
            .unwrap_or_else(|| overflow());
        Seconds::from_magnitude(magnitude, negative)
    }
}

impl Div for Seconds {
    type Output = Seconds;

    /// Quotient truncated toward zero; panics on a zero divisor
    fn div(self, rhs: Seconds) -> Self::Output {
        let negative = (self.0 < 0) != (rhs.0 < 0);
        let (a, b) = (self.0.unsigned_abs(), rhs.0.unsigned_abs());
        let mut rem = a % b;
        let mut frac = 0u128;
        // Long division keeps the dividend from being scaled past u128
        for _ in 0..FRACTION_DIGITS {
            let (digit, next) = shift_digit(rem, b);
            frac = frac * 10 + digit;
            rem = next;
        }
        let magnitude = (a / b)
            .checked_mul(ATTOS_PER_SEC_U)
            .and_then(|whole| whole.checked_add(frac))
            .unwrap_or_else(|| overflow());
        Seconds::from_magnitude(magnitude, negative)
    }
}

impl Sum for Seconds {
    fn sum<I: Iterator<Item = Seconds>>(iter: I) -> Self {
        iter.fold(Seconds::ZERO, Add::add)
    }
}

impl FromStr for Seconds {
    type Err = HoraeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || HoraeError::InvalidDecimal(s.to_string());

        let (negative, body) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        let (whole, frac) = body.split_once('.').unwrap_or((body, ""));
        if whole.is_empty() && frac.is_empty() {
            return Err(invalid());
        }
        if !whole.bytes().chain(frac.bytes()).all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        if frac.len() > FRACTION_DIGITS as usize {
            return Err(HoraeError::FractionTooLong {
                digits: frac.len(),
                max: FRACTION_DIGITS,
            });
        }

        let whole: i128 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| HoraeError::OutOfRange)?
        };
        let mut attos = whole
            .checked_mul(ATTOS_PER_SEC)
            .ok_or(HoraeError::OutOfRange)?;
        if !frac.is_empty() {
            let digits: i128 = frac.parse().map_err(|_| invalid())?;
            let scale = pow10(FRACTION_DIGITS - frac.len() as u32) as i128;
            attos = attos
                .checked_add(digits * scale)
                .ok_or(HoraeError::OutOfRange)?;
        }

        Ok(Seconds(if negative { -attos } else { attos }))
    }
}

impl fmt::Display for Seconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(digits) => self.write_fixed(f, u32::try_from(digits).unwrap_or(u32::MAX), 1),
            None => f.write_str(trim_fixed(&self.to_fixed(FRACTION_DIGITS, 1))),
        }
    }
}

impl fmt::Debug for Seconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Seconds({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn secs(text: &str) -> Seconds {
        text.parse().unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!(secs("1.5").to_string(), "1.5");
        assert_eq!(secs("-0.25").to_string(), "-0.25");
        assert_eq!(secs("+42").to_string(), "42");
        assert_eq!(secs(".5"), secs("0.5"));
        assert_eq!(secs("0.000000000000000001"), Seconds::from_attos(1));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!("".parse::<Seconds>(), Err(HoraeError::InvalidDecimal(_))));
        assert!(matches!(".".parse::<Seconds>(), Err(HoraeError::InvalidDecimal(_))));
        assert!(matches!("1.2.3".parse::<Seconds>(), Err(HoraeError::InvalidDecimal(_))));
        assert!(matches!("--1".parse::<Seconds>(), Err(HoraeError::InvalidDecimal(_))));
        assert_eq!(
            "0.0000000000000000001".parse::<Seconds>(),
            Err(HoraeError::FractionTooLong { digits: 19, max: 18 })
        );
        assert_eq!(
            "999999999999999999999999".parse::<Seconds>(),
            Err(HoraeError::OutOfRange)
        );
    }

    #[test]
    fn test_floor_trunc_fract_negative() {
        let x = secs("-1.25");
        assert_eq!(x.floor(), secs("-2"));
        assert_eq!(x.trunc(), secs("-1"));
        assert_eq!(x.fract(), secs("-0.25"));
        assert_eq!(x.to_i128(), -1);
    }

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(secs("2.5").round_to(0), secs("3"));
        assert_eq!(secs("-2.5").round_to(0), secs("-3"));
        assert_eq!(secs("1.2345").round_to(3), secs("1.235"));
        assert_eq!(secs("1.2344").round_to(3), secs("1.234"));
        assert_eq!(secs("1.2344").round_to(40), secs("1.2344"));
    }

    #[test]
    fn test_write_fixed() {
        assert_eq!(secs("5.5").to_fixed(3, 2), "05.500");
        assert_eq!(secs("59.9996").to_fixed(3, 2), "60.000");
        assert_eq!(secs("-0.5").to_fixed(1, 1), "-0.5");
        assert_eq!(secs("7").to_fixed(0, 2), "07");
        assert_eq!(secs("0.1").to_fixed(20, 1), "0.10000000000000000000");
        assert_eq!(format!("{:.2}", secs("3.14159")), "3.14");
    }

    #[test]
    fn test_mul_div_keep_precision() {
        assert_eq!(secs("1.5") * secs("2"), secs("3"));
        assert_eq!(secs("-0.001") * secs("1000"), secs("-1"));
        assert_eq!(secs("1") / secs("3"), secs("0.333333333333333333"));
        assert_eq!(secs("-7") / secs("2"), secs("-3.5"));
        // Product of large operands must not overflow the intermediate
        let big = Seconds::from_int(31_536_000_000);
        assert_eq!(big * secs("1000000"), Seconds::from_int(31_536_000_000_000_000));
        assert_eq!(big / secs("1000"), Seconds::from_int(31_536_000));
    }

    #[test]
    fn test_division_by_huge_divisor() {
        let attos = |mantissa: i128, exp: u32| Seconds::from_attos(mantissa * 10i128.pow(exp));
        // Remainders past u128::MAX / 10 take the slow digit path
        assert_eq!(attos(15, 37) / attos(1, 38), secs("1.5"));
        assert_eq!(attos(16, 37) / attos(7, 37), secs("2.285714285714285714"));
        assert_eq!(attos(-16, 37) / attos(7, 37), secs("-2.285714285714285714"));
        assert_eq!(attos(1, 38) / attos(1, 38), Seconds::ONE);
    }

    #[test]
    fn test_product_at_range_edge() {
        let big = Seconds::from_int(10_000_000_000);
        assert_eq!(big * big, secs("100000000000000000000"));
        assert_eq!(-big * big, secs("-100000000000000000000"));
    }

    #[test]
    #[should_panic(expected = "overflowed")]
    fn test_mul_overflow_panics() {
        let _ = Seconds::from_int(10_000_000_000) * Seconds::from_int(20_000_000_000);
    }

    #[test]
    #[should_panic(expected = "overflowed")]
    fn test_negative_mul_overflow_panics() {
        let _ = Seconds::from_int(-10_000_000_000) * Seconds::from_int(20_000_000_000);
    }

    #[test]
    #[should_panic(expected = "overflowed")]
    fn test_div_overflow_panics() {
        let _ = Seconds::from_int(1_000_000_000_000) / Seconds::from_attos(1);
    }

    #[test]
    fn test_display_precision_beyond_fraction() {
        assert_eq!(format!("{:.20}", secs("0.1")), "0.10000000000000000000");
        assert_eq!(format!("{:.0}", secs("-2.5")), "-3");
    }

    #[test]
    fn test_from_f64() {
        assert_eq!(Seconds::from_f64(0.5), secs("0.5"));
        assert_eq!(Seconds::from_f64(-90.25), secs("-90.25"));
        assert_eq!(Seconds::from_f64(f64::NAN), Seconds::ZERO);
        assert_eq!(Seconds::from_f64(f64::INFINITY), Seconds::ZERO);
    }

    #[test]
    fn test_sum() {
        let total: Seconds = ["0.1", "0.2", "0.7"].iter().map(|s| secs(s)).sum();
        assert_eq!(total, Seconds::ONE);
    }

    proptest! {
        #[test]
        fn prop_trunc_plus_fract_is_identity(attos in any::<i64>()) {
            let x = Seconds::from_attos(attos as i128 * 1_000);
            prop_assert_eq!(x.trunc() + x.fract(), x);
        }

        #[test]
        fn prop_floor_never_exceeds_value(attos in any::<i64>()) {
            let x = Seconds::from_attos(attos as i128 * 1_000);
            prop_assert!(x.floor() <= x);
            prop_assert!(x - x.floor() < Seconds::ONE);
        }

        #[test]
        fn prop_display_parses_back(attos in any::<i64>()) {
            let x = Seconds::from_attos(attos as i128);
            prop_assert_eq!(x.to_string().parse::<Seconds>(), Ok(x));
        }
    }
}
