//! Rendering configuration

use horae_core::HighPrecision;

use crate::date::WEEK_PREFIX;
use crate::duration::DEFAULT_PRECISION;
use crate::{Clock, Date, Duration};

/// How a [`Date`] is rendered
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DateStyle {
    /// `YYYY-MM-DD`
    #[default]
    Calendar,
    /// `YYYY-Www-D`, for dates built with [`Date::weekdate`]
    Week,
}

impl DateStyle {
    /// Prefix written before the month field
    pub fn month_prefix(self) -> &'static str {
        match self {
            DateStyle::Calendar => "",
            DateStyle::Week => WEEK_PREFIX,
        }
    }
}

/// Rendering configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatConfig {
    /// Fractional digits of a clock's seconds field
    pub clock_precision: u32,
    /// Maximum fractional digits of a duration
    pub duration_precision: u32,
    /// Date layout
    pub date_style: DateStyle,
}

impl Default for FormatConfig {
    fn default() -> Self {
        FormatConfig {
            clock_precision: DEFAULT_PRECISION,
            duration_precision: DEFAULT_PRECISION,
            date_style: DateStyle::Calendar,
        }
    }
}

impl FormatConfig {
    /// Millisecond resolution
    pub fn millis() -> Self {
        FormatConfig {
            clock_precision: 3,
            duration_precision: 3,
            ..FormatConfig::default()
        }
    }

    /// No fractional seconds at all
    pub fn whole_seconds() -> Self {
        FormatConfig {
            clock_precision: 0,
            duration_precision: 0,
            ..FormatConfig::default()
        }
    }

    pub fn with_date_style(mut self, date_style: DateStyle) -> Self {
        self.date_style = date_style;
        self
    }

    pub fn date(&self, date: &Date) -> String {
        date.show(self.date_style.month_prefix())
    }

    pub fn clock<S: HighPrecision>(&self, clock: &Clock<S>) -> String {
        clock.show(self.clock_precision)
    }

    pub fn duration<S: HighPrecision>(&self, duration: &Duration<S>) -> String {
        duration.show(self.duration_precision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Weekday;
    use horae_core::Seconds;

    #[test]
    fn test_default_matches_display() {
        let config = FormatConfig::default();
        let clock = Clock::new(7, 8, "9.25".parse::<Seconds>().unwrap());
        let duration = Duration::<Seconds>::from_millis(1250);
        let date = Date::new(1999, 12, 31);

        assert_eq!(config.clock(&clock), clock.to_string());
        assert_eq!(config.duration(&duration), duration.to_string());
        assert_eq!(config.date(&date), date.to_string());
    }

    #[test]
    fn test_presets() {
        let clock = Clock::new(0, 0, "1.23456".parse::<Seconds>().unwrap());
        let duration = Duration::<Seconds>::from_millis(1_250);

        assert_eq!(FormatConfig::millis().clock(&clock), "00:00:01.235");
        assert_eq!(FormatConfig::millis().duration(&duration), "1.25s");
        assert_eq!(FormatConfig::whole_seconds().clock(&clock), "00:00:01");
        assert_eq!(FormatConfig::whole_seconds().duration(&duration), "1s");
    }

    #[test]
    fn test_week_style() {
        let config = FormatConfig::default().with_date_style(DateStyle::Week);
        let date = Date::weekdate(2020, 53, Weekday::Friday);
        assert_eq!(config.date(&date), "2020-W53-5");
    }
}
