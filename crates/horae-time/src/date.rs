//! Generic year/month/day fields
//!
//! `Date` carries fields only. Whether a triple names a real calendar day
//! is decided by whichever calendar interprets it. An ISO week date reuses
//! the same representation with the week number in the month slot and the
//! ISO weekday number in the day slot.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;
use std::str::FromStr;

use horae_core::{HoraeError, HoraeResult};

use crate::Weekday;

/// Month prefix that marks a week date
pub const WEEK_PREFIX: &str = "W";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Date {
    year: i32,
    month: i32,
    day: i32,
}

impl Date {
    #[inline]
    pub const fn new(year: i32, month: i32, day: i32) -> Self {
        Date { year, month, day }
    }

    /// ISO week date; `week` is stored as the month
    #[inline]
    pub fn weekdate(year: i32, week: i32, weekday: Weekday) -> Self {
        Date::new(year, week, weekday.to_iso() as i32)
    }

    #[inline]
    pub fn year(self) -> i32 {
        self.year
    }

    #[inline]
    pub fn month(self) -> i32 {
        self.month
    }

    #[inline]
    pub fn day(self) -> i32 {
        self.day
    }

    /// Week number of a week date (the month slot)
    #[inline]
    pub fn week(self) -> i32 {
        self.month
    }

    /// Weekday of a week date, if the day slot holds an ISO day number
    pub fn weekday(self) -> Option<Weekday> {
        (1..=7)
            .contains(&self.day)
            .then(|| Weekday::from_iso(self.day as i64))
    }

    /// Year as ISO 8601 text
    ///
    /// Four digits for 0..=9999; outside that range a sign and at least
    /// five digits.
    pub fn show_year(self) -> String {
        match self.year {
            0..=9999 => format!("{:04}", self.year),
            y if y > 9999 => format!("+{:05}", y),
            y => format!("-{:05}", y.unsigned_abs()),
        }
    }

    /// Render as `year-<prefix>MM-DD`
    ///
    /// With the week prefix `"W"` the day is a single weekday digit, giving
    /// `YYYY-Www-D`. Any other prefix keeps a two-digit day.
    pub fn show(self, month_prefix: &str) -> String {
        let day_width = if month_prefix == WEEK_PREFIX { 1 } else { 2 };
        format!(
            "{}-{}{:02}-{:0width$}",
            self.show_year(),
            month_prefix,
            self.month,
            self.day,
            width = day_width
        )
    }
}

impl PartialOrd for Date {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Date {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl Add for Date {
    type Output = Date;

    /// Field-wise sum without carrying between fields
    #[inline]
    fn add(self, rhs: Date) -> Self::Output {
        Date::new(self.year + rhs.year, self.month + rhs.month, self.day + rhs.day)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.show(""))
    }
}

fn parse_year(text: &str) -> Option<i32> {
    let digits_ok = |s: &str| !s.is_empty() && s.bytes().all(|c| c.is_ascii_digit());
    match text.as_bytes().first()? {
        b'+' | b'-' => {
            let digits = &text[1..];
            if digits.len() < 5 || !digits_ok(digits) {
                return None;
            }
            let year: i32 = digits.parse().ok()?;
            Some(if text.starts_with('-') { -year } else { year })
        }
        _ if text.len() == 4 && digits_ok(text) => text.parse().ok(),
        _ => None,
    }
}

fn parse_field(text: &str, width: usize) -> Option<i32> {
    if text.len() != width || !text.bytes().all(|c| c.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

impl FromStr for Date {
    type Err = HoraeError;

    /// Parses `YYYY-MM-DD`, `±YYYYY-MM-DD` and `YYYY-Www-D`
    fn from_str(s: &str) -> HoraeResult<Self> {
        let invalid = || HoraeError::InvalidDate(s.to_string());

        // A leading sign belongs to the year, not to a separator
        let split_at = s.get(1..).and_then(|rest| rest.find('-')).ok_or_else(invalid)? + 1;
        let (year, rest) = (&s[..split_at], &s[split_at + 1..]);
        let year = parse_year(year).ok_or_else(invalid)?;

        let (month, day) = rest.split_once('-').ok_or_else(invalid)?;
        let date = match month.strip_prefix(WEEK_PREFIX) {
            Some(week) => Date::new(
                year,
                parse_field(week, 2).ok_or_else(invalid)?,
                parse_field(day, 1).ok_or_else(invalid)?,
            ),
            None => Date::new(
                year,
                parse_field(month, 2).ok_or_else(invalid)?,
                parse_field(day, 2).ok_or_else(invalid)?,
            ),
        };
        Ok(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_show_year_ranges() {
        assert_eq!(Date::new(2000, 1, 1).to_string(), "2000-01-01");
        assert_eq!(Date::new(10000, 1, 1).to_string(), "+10000-01-01");
        assert_eq!(Date::new(-1, 1, 1).to_string(), "-00001-01-01");
        assert_eq!(Date::new(0, 12, 31).to_string(), "0000-12-31");
        assert_eq!(Date::new(9999, 12, 31).to_string(), "9999-12-31");
        assert_eq!(Date::new(123456, 7, 8).to_string(), "+123456-07-08");
    }

    #[test]
    fn test_week_date_rendering() {
        let d = Date::weekdate(2024, 5, Weekday::Wednesday);
        assert_eq!(d.week(), 5);
        assert_eq!(d.weekday(), Some(Weekday::Wednesday));
        assert_eq!(d.show("W"), "2024-W05-3");
        // Only the exact week prefix narrows the day
        assert_eq!(d.show("M"), "2024-M05-03");
        assert_eq!(d.show("w"), "2024-w05-03");
    }

    #[test]
    fn test_weekday_slot_out_of_range() {
        assert_eq!(Date::new(2024, 5, 0).weekday(), None);
        assert_eq!(Date::new(2024, 5, 8).weekday(), None);
    }

    #[test]
    fn test_lexicographic_order() {
        let a = Date::new(2024, 1, 31);
        let b = Date::new(2024, 2, 1);
        let c = Date::new(2025, 1, 1);
        assert!(a < b && b < c);
        assert_eq!(a.cmp(&a), Ordering::Equal);
        assert!(Date::new(-1, 12, 31) < Date::new(0, 1, 1));
    }

    #[test]
    fn test_add_does_not_carry() {
        let sum = Date::new(2024, 11, 25) + Date::new(0, 3, 10);
        assert_eq!(sum, Date::new(2024, 14, 35));
    }

    #[test]
    fn test_parse() {
        assert_eq!("2024-03-31".parse::<Date>(), Ok(Date::new(2024, 3, 31)));
        assert_eq!("+10000-01-01".parse::<Date>(), Ok(Date::new(10000, 1, 1)));
        assert_eq!("-00001-01-01".parse::<Date>(), Ok(Date::new(-1, 1, 1)));
        assert_eq!(
            "2024-W05-3".parse::<Date>(),
            Ok(Date::weekdate(2024, 5, Weekday::Wednesday))
        );
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for text in ["", "2024", "2024-3-31", "24-03-31", "+2024-03-31", "2024-03-31x", "2024-W05-03", "-"] {
            assert_eq!(
                text.parse::<Date>(),
                Err(HoraeError::InvalidDate(text.to_string())),
                "{text}"
            );
        }
    }

    fn any_date() -> impl Strategy<Value = Date> {
        (-20000i32..20000, 1i32..=12, 1i32..=31).prop_map(|(y, m, d)| Date::new(y, m, d))
    }

    proptest! {
        #[test]
        fn prop_order_matches_field_tuples(a in any_date(), b in any_date()) {
            prop_assert_eq!(a.cmp(&b), (a.year(), a.month(), a.day()).cmp(&(b.year(), b.month(), b.day())));
            prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
        }

        #[test]
        fn prop_display_parses_back(d in any_date()) {
            prop_assert_eq!(d.to_string().parse::<Date>(), Ok(d));
        }
    }
}
