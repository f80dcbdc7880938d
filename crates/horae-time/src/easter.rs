//! Gregorian Easter Sunday
//!
//! Oudin's (1940) integer formulation of the Gregorian computus. Every
//! division truncates toward zero, matching the reference formula; for the
//! positive years it is defined on, no intermediate term is negative. The
//! terms are computed in `i64` since `year + year / 4` leaves `i32` range
//! for years past 1.7 billion.

use crate::Date;

/// Date of Easter Sunday in the Gregorian calendar
///
/// Only positive Gregorian years are meaningful. Other inputs are not
/// rejected, and what they return is unspecified.
pub fn easter(year: i32) -> Date {
    let y = i64::from(year);
    let c = y / 100;
    let n = y % 19;
    let k = (c - 17) / 25;

    // Days from the March equinox to the paschal full moon
    let i0 = (c - c / 4) - (c - k) / 3 + 19 * n + 15;
    let i1 = i0 - 30 * (i0 / 30);
    let i = i1 - (i1 / 28) * (1 - (i1 / 28) * (29 / (i1 + 1)) * ((21 - n) / 11));

    // Weekday of the paschal full moon
    let j0 = y + y / 4 + i + 2 - c + c / 4;
    let j = j0 - 7 * (j0 / 7);

    let l = i - j;
    let month = 3 + (l + 40) / 44;
    let day = l + 28 - 31 * (month / 4);

    tracing::trace!(year, month, day, "computed Easter date");
    // Month and day are single- or two-digit values, so the narrowing is lossless
    Date::new(year, month as i32, day as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_dates() {
        assert_eq!(easter(2024), Date::new(2024, 3, 31));
        assert_eq!(easter(2000), Date::new(2000, 4, 23));
        assert_eq!(easter(2025), Date::new(2025, 4, 20));
        assert_eq!(easter(1961), Date::new(1961, 4, 2));
    }

    #[test]
    fn test_extreme_dates() {
        // Earliest and latest possible Gregorian Easter Sundays
        assert_eq!(easter(1818), Date::new(1818, 3, 22));
        assert_eq!(easter(2285), Date::new(2285, 3, 22));
        assert_eq!(easter(1943), Date::new(1943, 4, 25));
        assert_eq!(easter(2038), Date::new(2038, 4, 25));
    }

    #[test]
    fn test_month_is_march_or_april() {
        for year in 1583..=4099 {
            let date = easter(year);
            assert!(
                matches!((date.month(), date.day()), (3, 22..=31) | (4, 1..=25)),
                "{year}: {date}"
            );
        }
    }

    #[test]
    fn test_large_years_do_not_overflow() {
        assert_eq!(easter(2_000_000_000), Date::new(2_000_000_000, 4, 23));
        assert_eq!(easter(i32::MAX), Date::new(i32::MAX, 4, 14));
    }
}
