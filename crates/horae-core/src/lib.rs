//! Horae Core - High-precision seconds and shared primitives
//!
//! This crate defines the collaborators the calendar types are built on:
//! - The `HighPrecision` interface over signed decimal seconds
//! - `Seconds`, a fixed 128-bit decimal with attosecond resolution
//! - `Timestamp`, an instant measured from an unspecified epoch
//! - Error types shared by every Horae crate

pub mod precision;
pub mod seconds;
pub mod epoch;
pub mod error;

pub use precision::*;
pub use seconds::*;
pub use epoch::*;
pub use error::*;
