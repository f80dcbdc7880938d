//! The high-precision seconds interface
//!
//! Calendar types never depend on a particular decimal implementation.
//! Anything that can be built from integers and floats, truncated, rounded
//! to a number of fractional digits and printed in fixed-point notation can
//! carry their seconds. `Seconds` is the implementation shipped here.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Signed decimal seconds with more precision than an `f64`
pub trait HighPrecision:
    Copy
    + Ord
    + fmt::Debug
    + fmt::Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    const ZERO: Self;

    /// Number of fractional decimal digits the type can hold exactly
    const MAX_DIGITS: u32;

    fn from_i64(n: i64) -> Self;

    /// Nearest representable value; non-finite input becomes `ZERO`
    fn from_f64(x: f64) -> Self;

    /// Largest integral value not greater than `self`
    fn floor(self) -> Self;

    /// Integral part, rounded toward zero
    fn trunc(self) -> Self;

    /// `self - self.trunc()`, carrying the sign of `self`
    fn fract(self) -> Self;

    /// Round to `digits` fractional digits, half away from zero
    fn round_to(self, digits: u32) -> Self;

    /// Integral part as an integer, rounded toward zero
    fn to_i128(self) -> i128;

    fn to_f64(self) -> f64;

    /// Write `self` rounded to exactly `digits` fractional digits, with the
    /// integral part zero-padded to at least `int_width` digits. A sign is
    /// written only for negative values and does not count toward the width.
    fn write_fixed(&self, out: &mut dyn fmt::Write, digits: u32, int_width: usize) -> fmt::Result;

    #[inline]
    fn to_fixed(&self, digits: u32, int_width: usize) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = self.write_fixed(&mut out, digits, int_width);
        out
    }

    #[inline]
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    #[inline]
    fn is_negative(self) -> bool {
        self < Self::ZERO
    }

    #[inline]
    fn is_positive(self) -> bool {
        self > Self::ZERO
    }
}

/// Drop trailing fractional zeros from fixed-point text, and the point
/// itself when no digits remain
pub fn trim_fixed(text: &str) -> &str {
    if !text.contains('.') {
        return text;
    }
    let trimmed = text.trim_end_matches('0');
    trimmed.strip_suffix('.').unwrap_or(trimmed)
}
