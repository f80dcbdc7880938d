//! Epoch-relative timestamps
//!
//! Which instant the epoch denotes is up to the caller; a `Timestamp` only
//! records how many seconds have elapsed since it.

use std::fmt;
use std::ops::{Add, Sub};

use crate::{HighPrecision, Seconds};

/// Instant measured in elapsed seconds since the epoch
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp<S = Seconds>(S);

impl<S: HighPrecision> Timestamp<S> {
    pub const EPOCH: Timestamp<S> = Timestamp(S::ZERO);

    #[inline]
    pub fn from_epoch_offset(elapsed: S) -> Self {
        Timestamp(elapsed)
    }

    #[inline]
    pub fn since_epoch(self) -> S {
        self.0
    }
}

impl<S: HighPrecision> Add<S> for Timestamp<S> {
    type Output = Timestamp<S>;

    #[inline]
    fn add(self, rhs: S) -> Self::Output {
        Timestamp(self.0 + rhs)
    }
}

impl<S: HighPrecision> Sub<S> for Timestamp<S> {
    type Output = Timestamp<S>;

    #[inline]
    fn sub(self, rhs: S) -> Self::Output {
        Timestamp(self.0 - rhs)
    }
}

impl<S: HighPrecision> Sub for Timestamp<S> {
    type Output = S;

    /// Signed span from `rhs` to `self`
    #[inline]
    fn sub(self, rhs: Timestamp<S>) -> Self::Output {
        self.0 - rhs.0
    }
}

impl<S: HighPrecision> fmt::Debug for Timestamp<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "epoch+{}s", self.0)
    }
}
