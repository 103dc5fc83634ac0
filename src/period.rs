// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Directed time periods and the algebra over them.
//!
//! A [`Period`] is an ordered pair of [`Instant`]s.  It may run **backward**
//! (start after end); that is a regular state, reflected by a negative
//! [`Period::distance`].
//!
//! Relations between periods ([`abuts`](Period::abuts),
//! [`overlaps`](Period::overlaps), [`contains`](Period::contains),
//! [`merge`](Period::merge), [`intersection`](Period::intersection)) are
//! evaluated on the forward-normalised spans, so orientation never changes
//! their answer.

use crate::leap_seconds::{LeapSecondTable, LeapSeconds};
use crate::subdivide::{Direction, Subdivisions};
use crate::{Duration, Error, Instant, IntervalBoundary, Result};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A directed span between two instants.
///
/// # Examples
///
/// ```
/// use tempora::{Duration, Instant, Period};
///
/// let start = Instant::from_unix_seconds(0);
/// let end = Instant::from_unix_seconds(90);
/// let period = Period::new(start, end);
///
/// assert_eq!(period.distance(), Duration::seconds(90));
/// assert!(period.revert().is_backward());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Period {
    pub start: Instant,
    pub end: Instant,
}

impl Period {
    pub const fn new(start: Instant, end: Instant) -> Self {
        Period { start, end }
    }

    /// Signed distance `end − start`; negative for backward periods.
    pub fn distance(&self) -> Duration {
        self.end - self.start
    }

    /// Same as `distance().is_positive()`, without the subtraction.
    pub fn is_forward(&self) -> bool {
        self.start < self.end
    }

    pub fn is_backward(&self) -> bool {
        self.start > self.end
    }

    /// Swap start and end.
    pub const fn revert(&self) -> Self {
        Self::new(self.end, self.start)
    }

    /// Same span, oriented forward.  Zero-length periods are unchanged.
    pub fn normalized(&self) -> Self {
        if self.is_backward() {
            self.revert()
        } else {
            *self
        }
    }

    /// `true` when one period ends exactly where the other begins.
    pub fn abuts(&self, other: &Self) -> bool {
        let (a, b) = (self.normalized(), other.normalized());
        a.end == b.start || a.start == b.end
    }

    /// `true` when the periods share interior time.
    ///
    /// Abutting periods do not overlap.  Identical and nested periods do.
    pub fn overlaps(&self, other: &Self) -> bool {
        if self.abuts(other) {
            return false;
        }
        let (a, b) = (self.normalized(), other.normalized());
        a.start < b.end && b.start < a.end
    }

    /// `true` when `other` lies within `self`, endpoints included.
    ///
    /// Both periods are normalised first, so a backward period contains the
    /// same spans as its forward counterpart.
    pub fn contains(&self, other: &Self) -> bool {
        let (a, b) = (self.normalized(), other.normalized());
        a.start <= b.start && a.end >= b.end
    }

    /// Smallest forward period covering both operands.
    ///
    /// Fails with [`Error::InvalidOperation`] unless the periods overlap or
    /// abut.
    pub fn merge(&self, other: &Self) -> Result<Self> {
        if !self.overlaps(other) && !self.abuts(other) {
            return Err(Error::InvalidOperation(format!(
                "periods do not overlap or abut: [{self}] and [{other}]"
            )));
        }
        let (a, b) = (self.normalized(), other.normalized());
        Ok(Self::new(a.start.min(b.start), a.end.max(b.end)))
    }

    /// Shared forward sub-period, or `None` when the periods do not overlap.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        if !self.overlaps(other) {
            return None;
        }
        let (a, b) = (self.normalized(), other.normalized());
        Some(Self::new(a.start.max(b.start), a.end.min(b.end)))
    }

    /// Leap seconds whose effective instant falls inside this period.
    pub fn leap_seconds<'a>(&self, table: &'a LeapSecondTable) -> LeapSeconds<'a> {
        table.between(self)
    }

    // ── subdivision ───────────────────────────────────────────────────

    /// Consecutive forward sub-periods of length `step`, from the earlier
    /// endpoint to the later one, the last one clipped.
    ///
    /// Fails with [`Error::InvalidArgument`] when `step` is not positive.
    ///
    /// # Examples
    ///
    /// ```
    /// use tempora::{Duration, Instant, IntervalBoundary, Period};
    ///
    /// let day = Period::new(Instant::from_unix_seconds(0), Instant::from_unix_seconds(86_400));
    /// let hours = day
    ///     .subdivide_forward(Duration::hours(1), IntervalBoundary::Closed)
    ///     .unwrap();
    /// assert_eq!(hours.count(), 24);
    /// ```
    pub fn subdivide_forward(&self, step: Duration, boundary: IntervalBoundary) -> Result<Subdivisions> {
        Self::check_step(step)?;
        Ok(Subdivisions::new(self, step, boundary, Direction::Forward))
    }

    /// Backward sub-periods `(cursor, cursor − step)` walking from the later
    /// endpoint to the earlier one, emitted in ascending order.
    ///
    /// Fails with [`Error::InvalidArgument`] when `step` is not positive.
    pub fn subdivide_backward(&self, step: Duration, boundary: IntervalBoundary) -> Result<Subdivisions> {
        Self::check_step(step)?;
        Ok(Subdivisions::new(self, step, boundary, Direction::Backward))
    }

    fn check_step(step: Duration) -> Result<()> {
        if step.is_positive() {
            Ok(())
        } else {
            Err(Error::InvalidArgument(format!(
                "subdivision step must be positive, got {step}"
            )))
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}
