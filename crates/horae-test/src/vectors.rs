//! Reference vectors
//!
//! Easter dates below come from published Gregorian tables, not from the
//! formula under test.

use horae_time::{Date, Weekday};

/// (year, month, day) of Easter Sunday
pub const EASTER_SUNDAYS: &[(i32, i32, i32)] = &[
    (1900, 4, 15), (1904, 4, 3), (1911, 4, 16), (1918, 3, 31),
    (1925, 4, 12), (1932, 3, 27), (1939, 4, 9), (1946, 4, 21),
    (1953, 4, 5), (1960, 4, 17), (1967, 3, 26), (1974, 4, 14),
    (1981, 4, 19), (1988, 4, 3), (1995, 4, 16), (2000, 4, 23),
    (2002, 3, 31), (2009, 4, 12), (2016, 3, 27), (2023, 4, 9),
    (2024, 3, 31), (2025, 4, 20), (2030, 4, 21), (2037, 4, 5),
    (2044, 4, 17), (2051, 4, 2), (2058, 4, 14), (2065, 3, 29),
    (2072, 4, 10), (2079, 4, 23), (2086, 3, 31), (2093, 4, 12),
    (2100, 3, 28),
];

pub fn easter_sundays() -> impl Iterator<Item = Date> {
    EASTER_SUNDAYS
        .iter()
        .map(|&(year, month, day)| Date::new(year, month, day))
}

/// Day of the week of a proleptic Gregorian date (Sakamoto's method)
///
/// Kept here rather than in `horae-time`, which has no calendar rules.
pub fn gregorian_weekday(date: Date) -> Weekday {
    const MONTH_OFFSETS: [i32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
    let month = date.month();
    let year = if month < 3 { date.year() - 1 } else { date.year() };
    let index = ((month - 1).rem_euclid(12)) as usize;
    // 0 = Sunday
    let dow = (year + year.div_euclid(4) - year.div_euclid(100) + year.div_euclid(400)
        + MONTH_OFFSETS[index]
        + date.day())
    .rem_euclid(7);
    if dow == 0 {
        Weekday::Sunday
    } else {
        Weekday::from_iso(dow as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gregorian_weekday() {
        assert_eq!(gregorian_weekday(Date::new(2000, 1, 1)), Weekday::Saturday);
        assert_eq!(gregorian_weekday(Date::new(2024, 2, 29)), Weekday::Thursday);
        assert_eq!(gregorian_weekday(Date::new(1970, 1, 1)), Weekday::Thursday);
        assert_eq!(gregorian_weekday(Date::new(2026, 10, 12)), Weekday::Monday);
    }

    #[test]
    fn test_vectors_are_sundays() {
        for date in easter_sundays() {
            assert_eq!(gregorian_weekday(date), Weekday::Sunday, "{date}");
        }
    }
}
