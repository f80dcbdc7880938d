//! Error types for Horae

use thiserror::Error;

/// Horae errors
///
/// The value types themselves are total; only text parsing and conversions
/// to foreign time types can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HoraeError {
    // Decimal errors
    #[error("Invalid decimal literal: {0:?}")]
    InvalidDecimal(String),

    #[error("Too many fractional digits: {digits} (max {max})")]
    FractionTooLong { digits: usize, max: u32 },

    // Text errors
    #[error("Invalid date: {0:?}")]
    InvalidDate(String),

    #[error("Invalid clock: {0:?}")]
    InvalidClock(String),

    #[error("Unknown weekday: {0:?}")]
    UnknownWeekday(String),

    // Conversion errors
    #[error("Negative duration cannot be represented: {0}")]
    NegativeDuration(String),

    #[error("Value out of range")]
    OutOfRange,
}

/// Result type for Horae operations
pub type HoraeResult<T> = Result<T, HoraeError>;
