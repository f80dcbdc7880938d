//! Days of the week with ISO numbering

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use horae_core::{HoraeError, HoraeResult};

/// Day of the week
///
/// ISO 8601 numbers the days Monday = 1 through Sunday = 7.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// ISO day number, 1..=7
    #[inline]
    pub fn to_iso(self) -> i64 {
        match self {
            Weekday::Monday => 1,
            Weekday::Tuesday => 2,
            Weekday::Wednesday => 3,
            Weekday::Thursday => 4,
            Weekday::Friday => 5,
            Weekday::Saturday => 6,
            Weekday::Sunday => 7,
        }
    }

    /// Weekday for an ISO day number, wrapping every seven days
    ///
    /// The offset is reduced with Rust's truncating `%`, so any `n < 0`
    /// produces a negative remainder. Every remainder outside `0..=5`,
    /// negative ones included, resolves to Sunday.
    pub fn from_iso(n: i64) -> Weekday {
        let d = (n - 1) % 7;
        match d {
            0 => Weekday::Monday,
            1 => Weekday::Tuesday,
            2 => Weekday::Wednesday,
            3 => Weekday::Thursday,
            4 => Weekday::Friday,
            5 => Weekday::Saturday,
            _ => {
                if d < 0 {
                    tracing::trace!(n, d, "negative weekday offset resolved to Sunday");
                }
                Weekday::Sunday
            }
        }
    }

    /// Full English name
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    /// First three letters of the name
    #[inline]
    pub fn short_name(self) -> &'static str {
        &self.name()[..3]
    }
}

impl PartialOrd for Weekday {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Weekday {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_iso().cmp(&other.to_iso())
    }
}

impl Add<i64> for Weekday {
    type Output = Weekday;

    #[inline]
    fn add(self, days: i64) -> Self::Output {
        Weekday::from_iso(self.to_iso() + days)
    }
}

impl Sub<i64> for Weekday {
    type Output = Weekday;

    #[inline]
    fn sub(self, days: i64) -> Self::Output {
        Weekday::from_iso(self.to_iso() - days)
    }
}

impl Sub for Weekday {
    type Output = i64;

    /// Days forward from `rhs` to `self`, in `0..=6`
    #[inline]
    fn sub(self, rhs: Weekday) -> Self::Output {
        (self.to_iso() - rhs.to_iso()).rem_euclid(7)
    }
}

impl fmt::Display for Weekday {
    /// `{}` prints the full name, `{:#}` the short one
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str(self.short_name())
        } else {
            f.write_str(self.name())
        }
    }
}

impl FromStr for Weekday {
    type Err = HoraeError;

    /// Accepts full or three-letter names in any case
    fn from_str(s: &str) -> HoraeResult<Self> {
        Weekday::ALL
            .into_iter()
            .find(|wd| wd.name().eq_ignore_ascii_case(s) || wd.short_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| HoraeError::UnknownWeekday(s.to_string()))
    }
}
