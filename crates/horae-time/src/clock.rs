//! Hours, minutes and fractional seconds
//!
//! Every minute has exactly 60 seconds and every hour 60 minutes; there is
//! no leap-second model. Hours are never wrapped at 24.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;
use std::str::FromStr;

use horae_core::{HighPrecision, HoraeError, HoraeResult, Seconds};

use crate::duration::DEFAULT_PRECISION;
use crate::Duration;

const SIXTY: i64 = 60;

/// Time of day, or any span split into h:m:s
///
/// Equality and ordering compare [`Clock::total_seconds`], so two clocks
/// with different field splits of the same span are equal.
#[derive(Clone, Copy, Debug)]
pub struct Clock<S = Seconds> {
    hours: i64,
    minutes: i64,
    seconds: S,
}

impl<S: HighPrecision> Clock<S> {
    pub const ZERO: Clock<S> = Clock {
        hours: 0,
        minutes: 0,
        seconds: S::ZERO,
    };

    /// Fields taken as given, without normalization
    #[inline]
    pub fn new(hours: i64, minutes: i64, seconds: S) -> Self {
        Clock {
            hours,
            minutes,
            seconds,
        }
    }

    /// Split a span of seconds into hours, minutes and seconds
    ///
    /// Minutes and seconds land in `[0, 60)`. Negative spans borrow from
    /// the hours, so `-0.5` becomes `-1:59:59.5`.
    pub fn from_secs(total: S) -> Self {
        let floored = total.floor();
        let whole = floored.to_i128();
        let hm = whole.div_euclid(SIXTY as i128);
        // total - hm * 60, without building hm * 60 in S
        let seconds = total - floored + S::from_i64(whole.rem_euclid(SIXTY as i128) as i64);
        Clock {
            hours: hm.div_euclid(SIXTY as i128) as i64,
            minutes: hm.rem_euclid(SIXTY as i128) as i64,
            seconds,
        }
    }

    #[inline]
    pub fn from_duration(duration: Duration<S>) -> Self {
        Clock::from_secs(duration.as_secs())
    }

    /// Whole seconds plus a fractional part
    #[inline]
    pub fn from_secs_frac(secs: i64, frac: f64) -> Self {
        Clock::from_secs(S::from_i64(secs) + S::from_f64(frac))
    }

    #[inline]
    pub fn hours(self) -> i64 {
        self.hours
    }

    #[inline]
    pub fn minutes(self) -> i64 {
        self.minutes
    }

    #[inline]
    pub fn seconds(self) -> S {
        self.seconds
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.hours == 0 && self.minutes == 0 && self.seconds.is_zero()
    }

    /// `(hours * 60 + minutes) * 60 + seconds`
    pub fn total_seconds(self) -> S {
        let sixty = S::from_i64(SIXTY);
        (S::from_i64(self.hours) * sixty + S::from_i64(self.minutes)) * sixty + self.seconds
    }

    #[inline]
    pub fn to_duration(self) -> Duration<S> {
        Duration::new(self.total_seconds())
    }

    /// The seconds field, truncated
    #[inline]
    pub fn whole_seconds(self) -> i64 {
        self.seconds.to_i128() as i64
    }

    /// Milliseconds within the current second, truncated
    #[inline]
    pub fn milli_seconds(self) -> i64 {
        self.scaled_fraction(1_000)
    }

    /// Nanoseconds within the current second, truncated
    #[inline]
    pub fn nano_seconds(self) -> i64 {
        self.scaled_fraction(1_000_000_000)
    }

    #[inline]
    fn scaled_fraction(self, per_second: i64) -> i64 {
        (self.seconds.fract() * S::from_i64(per_second)).to_i128() as i64
    }

    /// Round the seconds field to `prec` fractional digits
    ///
    /// Hours and minutes are left alone, so `59.9999` may become `60.000`.
    #[inline]
    pub fn round_to_prec(self, prec: u32) -> Self {
        Clock {
            seconds: self.seconds.round_to(prec),
            ..self
        }
    }

    /// Render as `HH:MM:SS` with `prec` fractional digits
    pub fn show(self, prec: u32) -> String {
        format!(
            "{:02}:{:02}:{}",
            self.hours,
            self.minutes,
            self.seconds.to_fixed(prec, 2)
        )
    }
}

impl<S: HighPrecision> Default for Clock<S> {
    fn default() -> Self {
        Clock::ZERO
    }
}

impl<S: HighPrecision> PartialEq for Clock<S> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<S: HighPrecision> Eq for Clock<S> {}

impl<S: HighPrecision> PartialOrd for Clock<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S: HighPrecision> Ord for Clock<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.total_seconds().cmp(&other.total_seconds())
    }
}

impl<S: HighPrecision> Add for Clock<S> {
    type Output = Clock<S>;

    /// Field-wise sum; minutes and seconds may reach 60 or more
    #[inline]
    fn add(self, rhs: Clock<S>) -> Self::Output {
        Clock {
            hours: self.hours + rhs.hours,
            minutes: self.minutes + rhs.minutes,
            seconds: self.seconds + rhs.seconds,
        }
    }
}

impl<S: HighPrecision> From<Duration<S>> for Clock<S> {
    #[inline]
    fn from(duration: Duration<S>) -> Self {
        Clock::from_duration(duration)
    }
}

impl<S: HighPrecision> fmt::Display for Clock<S> {
    /// `{:.N}` selects the number of fractional digits
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prec = f
            .precision()
            .map_or(DEFAULT_PRECISION, |p| u32::try_from(p).unwrap_or(u32::MAX));
        f.write_str(&self.show(prec))
    }
}

fn parse_digits(text: &str, min_width: usize) -> Option<i64> {
    if text.len() < min_width || !text.bytes().all(|c| c.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

impl<S: HighPrecision + FromStr> FromStr for Clock<S> {
    type Err = HoraeError;

    /// Parses `HH:MM:SS[.frac]` field by field, without normalizing
    fn from_str(s: &str) -> HoraeResult<Self> {
        let invalid = || HoraeError::InvalidClock(s.to_string());

        let mut fields = s.splitn(3, ':');
        let (hours, minutes, seconds) = match (fields.next(), fields.next(), fields.next()) {
            (Some(h), Some(m), Some(sec)) => (h, m, sec),
            _ => return Err(invalid()),
        };
        let whole = seconds.split_once('.').map_or(seconds, |(whole, _)| whole);
        if whole.len() != 2 || !seconds.bytes().all(|c| c.is_ascii_digit() || c == b'.') {
            return Err(invalid());
        }
        if minutes.len() != 2 {
            return Err(invalid());
        }

        Ok(Clock::new(
            parse_digits(hours, 2).ok_or_else(invalid)?,
            parse_digits(minutes, 2).ok_or_else(invalid)?,
            seconds.parse().map_err(|_| invalid())?,
        ))
    }
}
