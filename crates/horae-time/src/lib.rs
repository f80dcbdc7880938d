//! Horae Time - Calendar-agnostic building blocks for human-readable time
//!
//! This crate implements the value types:
//! - `Date`: year/month/day fields, also used for ISO week dates
//! - `Clock`: hours/minutes/fractional seconds
//! - `Weekday`: ISO-numbered days of the week
//! - `Duration`: elapsed SI seconds
//! - `easter`: the Gregorian Easter date of a year
//!
//! No type enforces calendar validity; that belongs to the calendar that
//! interprets the fields.

pub mod clock;
pub mod date;
pub mod duration;
pub mod easter;
pub mod format;
pub mod weekday;

pub use clock::*;
pub use date::*;
pub use duration::*;
pub use easter::*;
pub use format::*;
pub use weekday::*;

pub use horae_core::{HighPrecision, HoraeError, HoraeResult, Seconds, Timestamp};
