//! Horae Test Harness - Reference data and cross-crate checks
//!
//! This crate provides:
//! - Published Gregorian Easter dates
//! - An independent day-of-week computation for cross-checking
//! - An elapsed-time tally tying durations, timestamps and clocks together

pub mod vectors;
pub mod integration;

pub use vectors::*;
pub use integration::*;
