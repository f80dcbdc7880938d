//! Elapsed SI seconds
//!
//! A `Duration` counts atomic-clock seconds, not Earth-rotation (UT1)
//! seconds. The unit constructors assume fixed factors: 60 s per minute,
//! 86 400 s per day, 365 days per year. They suit rough elapsed-time
//! arithmetic, not calendar stepping.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Neg, Sub};

use horae_core::{trim_fixed, HighPrecision, HoraeError, HoraeResult, Seconds, Timestamp};

const SECS_PER_MINUTE: i64 = 60;
const SECS_PER_HOUR: i64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: i64 = 24 * SECS_PER_HOUR;
const SECS_PER_WEEK: i64 = 7 * SECS_PER_DAY;
const SECS_PER_YEAR: i64 = 365 * SECS_PER_DAY;

const MILLIS_PER_SEC: i64 = 1_000;
const NANOS_PER_SEC: i64 = 1_000_000_000;

/// Default fractional digits when rendering
pub const DEFAULT_PRECISION: u32 = 9;

/// Signed elapsed time in SI seconds
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Duration<S = Seconds>(S);

impl<S: HighPrecision> Duration<S> {
    pub const ZERO: Duration<S> = Duration(S::ZERO);

    #[inline]
    pub fn new(secs: S) -> Self {
        Duration(secs)
    }

    /// Same as [`Duration::new`]; the name records that `secs` are SI seconds
    #[inline]
    pub fn from_si_seconds(secs: S) -> Self {
        Duration(secs)
    }

    /// Whole seconds plus a fractional part
    #[inline]
    pub fn from_secs_frac(secs: i64, frac: f64) -> Self {
        Duration(S::from_i64(secs) + S::from_f64(frac))
    }

    #[inline]
    pub fn from_secs_f64(secs: f64) -> Self {
        Duration(S::from_f64(secs))
    }

    #[inline]
    pub fn from_millis(millis: i64) -> Self {
        Duration(S::from_i64(millis) / S::from_i64(MILLIS_PER_SEC))
    }

    #[inline]
    pub fn from_secs(secs: i64) -> Self {
        Duration(S::from_i64(secs))
    }

    #[inline]
    pub fn from_minutes(minutes: i64) -> Self {
        Self::scaled(minutes, SECS_PER_MINUTE)
    }

    #[inline]
    pub fn from_hours(hours: i64) -> Self {
        Self::scaled(hours, SECS_PER_HOUR)
    }

    #[inline]
    pub fn from_days(days: i64) -> Self {
        Self::scaled(days, SECS_PER_DAY)
    }

    #[inline]
    pub fn from_weeks(weeks: i64) -> Self {
        Self::scaled(weeks, SECS_PER_WEEK)
    }

    /// 365-day years
    #[inline]
    pub fn from_years(years: i64) -> Self {
        Self::scaled(years, SECS_PER_YEAR)
    }

    // Scale in S so large counts cannot overflow i64
    #[inline]
    fn scaled(count: i64, secs_per_unit: i64) -> Self {
        Duration(S::from_i64(count) * S::from_i64(secs_per_unit))
    }

    #[inline]
    pub fn from_timestamp(timestamp: Timestamp<S>) -> Self {
        Duration(timestamp.since_epoch())
    }

    #[inline]
    pub fn to_timestamp(self) -> Timestamp<S> {
        Timestamp::from_epoch_offset(self.0)
    }

    #[inline]
    pub fn as_secs(self) -> S {
        self.0
    }

    /// Rounded to the nearest millisecond
    #[inline]
    pub fn as_millis(self) -> i128 {
        (self.0 * S::from_i64(MILLIS_PER_SEC)).round_to(0).to_i128()
    }

    /// Rounded to the nearest nanosecond
    #[inline]
    pub fn as_nanos(self) -> i128 {
        (self.0 * S::from_i64(NANOS_PER_SEC)).round_to(0).to_i128()
    }

    /// Whole seconds, rounded toward zero
    #[inline]
    pub fn trunc(self) -> i128 {
        self.0.to_i128()
    }

    /// Fractional seconds as a float; lossy, meant for display
    #[inline]
    pub fn fraction(self) -> f64 {
        self.0.fract().to_f64()
    }

    #[inline]
    pub fn is_negative(self) -> bool {
        self.0.is_negative()
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    #[inline]
    pub fn is_positive(self) -> bool {
        self.0.is_positive()
    }

    /// Fixed-point seconds with at most `max_prec` fractional digits,
    /// suffixed with `s`
    pub fn show(self, max_prec: u32) -> String {
        format!("{}s", trim_fixed(&self.0.to_fixed(max_prec, 1)))
    }
}

impl<S: HighPrecision> Add for Duration<S> {
    type Output = Duration<S>;

    #[inline]
    fn add(self, rhs: Duration<S>) -> Self::Output {
        Duration(self.0 + rhs.0)
    }
}

impl<S: HighPrecision> Neg for Duration<S> {
    type Output = Duration<S>;

    #[inline]
    fn neg(self) -> Self::Output {
        Duration(-self.0)
    }
}

impl<S: HighPrecision> Sub for Duration<S> {
    type Output = Duration<S>;

    #[inline]
    fn sub(self, rhs: Duration<S>) -> Self::Output {
        self + -rhs
    }
}

impl<S: HighPrecision> Sum for Duration<S> {
    fn sum<I: Iterator<Item = Duration<S>>>(iter: I) -> Self {
        iter.fold(Duration::ZERO, Add::add)
    }
}

impl<S: HighPrecision> From<Timestamp<S>> for Duration<S> {
    #[inline]
    fn from(timestamp: Timestamp<S>) -> Self {
        Duration::from_timestamp(timestamp)
    }
}

impl<S: HighPrecision> From<Duration<S>> for Timestamp<S> {
    #[inline]
    fn from(duration: Duration<S>) -> Self {
        duration.to_timestamp()
    }
}

impl<S: HighPrecision> TryFrom<std::time::Duration> for Duration<S> {
    type Error = HoraeError;

    fn try_from(d: std::time::Duration) -> HoraeResult<Self> {
        let secs = i64::try_from(d.as_secs()).map_err(|_| HoraeError::OutOfRange)?;
        let nanos = S::from_i64(d.subsec_nanos() as i64) / S::from_i64(NANOS_PER_SEC);
        Ok(Duration(S::from_i64(secs) + nanos))
    }
}

impl<S: HighPrecision> TryFrom<Duration<S>> for std::time::Duration {
    type Error = HoraeError;

    /// Truncates below one nanosecond
    fn try_from(d: Duration<S>) -> HoraeResult<Self> {
        if d.is_negative() {
            return Err(HoraeError::NegativeDuration(d.show(DEFAULT_PRECISION)));
        }
        let secs = u64::try_from(d.trunc()).map_err(|_| HoraeError::OutOfRange)?;
        let nanos = (d.0.fract() * S::from_i64(NANOS_PER_SEC)).to_i128() as u32;
        Ok(std::time::Duration::new(secs, nanos))
    }
}

impl<S: HighPrecision> fmt::Display for Duration<S> {
    /// `{:.N}` caps the fractional digits at `N`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let max_prec = f
            .precision()
            .map_or(DEFAULT_PRECISION, |p| u32::try_from(p).unwrap_or(u32::MAX));
        f.write_str(&self.show(max_prec))
    }
}

impl<S: HighPrecision> fmt::Debug for Duration<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Duration({})", self.show(S::MAX_DIGITS))
    }
}
