// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Absolute, leap-second-agnostic instant.
//!
//! [`Instant`] is the core type of the crate.  It stores signed whole seconds
//! since the Unix epoch (1970-01-01T00:00:00Z) plus a microsecond fraction in
//! `[0, 1_000_000)`.  The fraction never carries a sign: one quarter second
//! before the epoch is `(-1 s, 750 000 µs)`.
//!
//! Arithmetic against [`Duration`] is exact integer arithmetic with
//! carry/borrow across the microsecond boundary.  The operators panic on
//! overflow instead of wrapping; use [`Instant::checked_add`] and
//! [`Instant::checked_sub`] where the range is not known in advance.
//!
//! Civil-calendar construction lives in [`crate::civil`]; epoch timestamps
//! live in [`crate::epoch`].

use crate::duration::{Duration, MICROS_PER_SECOND};
use crate::epoch::{Epoch, EpochConverter};
use crate::interval::IntervalBoundary;
use crate::leap_seconds::LeapSecondTable;
use crate::period::Period;
use crate::subdivide::Subdivisions;
use crate::Result;
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════════
// Instant
// ═══════════════════════════════════════════════════════════════════════════

/// A point in time with microsecond resolution.
///
/// Ordering is the natural chronological order.  The struct is `Copy` and
/// holds no cached state, so equality and hashing are purely structural.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Instant {
    seconds: i64,
    micros: u32,
}

impl Instant {
    /// 1970-01-01T00:00:00Z.
    pub const UNIX_EPOCH: Instant = Instant {
        seconds: 0,
        micros: 0,
    };

    // ── constructors ──────────────────────────────────────────────────

    /// Create from Unix seconds and a microsecond component.
    ///
    /// `micros` may be negative or exceed one second; the excess is carried
    /// into `seconds` so the stored fraction stays non-negative.
    ///
    /// # Panics
    ///
    /// Panics if the normalised value leaves the `i64` seconds range.
    ///
    /// # Examples
    ///
    /// ```
    /// use tempora::Instant;
    ///
    /// let t = Instant::new(0, -250_000);
    /// assert_eq!(t.unix_seconds(), -1);
    /// assert_eq!(t.micros(), 750_000);
    /// ```
    pub fn new(seconds: i64, micros: i64) -> Self {
        Self::checked_new(seconds, micros).expect("instant overflow")
    }

    /// Fallible counterpart of [`Instant::new`].
    pub fn checked_new(seconds: i64, micros: i64) -> Option<Self> {
        Duration::checked_new(seconds, micros).map(Self::from_offset)
    }

    /// Create from whole Unix seconds.
    #[inline]
    pub const fn from_unix_seconds(seconds: i64) -> Self {
        Self { seconds, micros: 0 }
    }

    #[inline]
    fn from_offset(offset: Duration) -> Self {
        Self {
            seconds: offset.seconds_part(),
            micros: offset.micros_part(),
        }
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// Whole seconds since the Unix epoch (floored).
    #[inline]
    pub const fn unix_seconds(&self) -> i64 {
        self.seconds
    }

    /// Non-negative microsecond fraction.
    #[inline]
    pub const fn micros(&self) -> u32 {
        self.micros
    }

    /// Offset from the Unix epoch as a [`Duration`].
    #[inline]
    pub fn since_unix_epoch(&self) -> Duration {
        Duration::new(self.seconds, i64::from(self.micros))
    }

    #[inline]
    pub(crate) fn from_micros(total: i128) -> Option<Self> {
        Duration::from_micros_i128(total).map(Self::from_offset)
    }

    #[inline]
    pub(crate) fn as_micros(&self) -> i128 {
        i128::from(self.seconds) * i128::from(MICROS_PER_SECOND) + i128::from(self.micros)
    }

    // ── arithmetic ────────────────────────────────────────────────────

    pub fn checked_add(self, duration: Duration) -> Option<Self> {
        self.since_unix_epoch()
            .checked_add(duration)
            .map(Self::from_offset)
    }

    pub fn checked_sub(self, duration: Duration) -> Option<Self> {
        self.since_unix_epoch()
            .checked_sub(duration)
            .map(Self::from_offset)
    }

    /// Signed distance from `self` to `other` (`other − self`).
    pub fn distance(&self, other: &Self) -> Duration {
        *other - *self
    }

    /// Unsigned distance between two instants.
    pub fn absolute_difference(&self, other: &Self) -> Duration {
        self.distance(other).abs()
    }

    // ── comparison helpers ────────────────────────────────────────────

    #[inline]
    pub fn is_before(&self, other: &Self) -> bool {
        self < other
    }

    #[inline]
    pub fn is_before_or_equal(&self, other: &Self) -> bool {
        self <= other
    }

    #[inline]
    pub fn is_after(&self, other: &Self) -> bool {
        self > other
    }

    #[inline]
    pub fn is_after_or_equal(&self, other: &Self) -> bool {
        self >= other
    }

    // ── periods ───────────────────────────────────────────────────────

    /// Period running from `self` to `other`.
    #[inline]
    pub fn until(self, other: Self) -> Period {
        Period::new(self, other)
    }

    /// Period running from `other` to `self`.
    #[inline]
    pub fn since(self, other: Self) -> Period {
        Period::new(other, self)
    }

    /// Closed subdivision from `self` toward `other` in steps of `step`.
    ///
    /// Walks forward when `other` is later than `self`, otherwise walks
    /// backward from `self` and yields backward sub-periods.
    pub fn iterate(self, other: Self, step: Duration) -> Result<Subdivisions> {
        if other.is_before(&self) {
            self.since(other)
                .subdivide_backward(step, IntervalBoundary::Closed)
        } else {
            self.until(other)
                .subdivide_forward(step, IntervalBoundary::Closed)
        }
    }

    // ── epochs ────────────────────────────────────────────────────────

    /// Elapsed time since the origin of `epoch`, using the built-in
    /// leap-second table.
    ///
    /// See [`EpochConverter::timestamp`].
    pub fn timestamp(&self, epoch: Epoch) -> Result<Duration> {
        EpochConverter::default().timestamp(*self, epoch)
    }

    /// Shift this instant onto the TAI axis by the TAI−UTC offset in effect.
    pub fn to_atomic_time(&self) -> Self {
        *self + Duration::seconds(LeapSecondTable::builtin().until(*self))
    }

    /// Shift this instant onto the GPS axis by the number of leap seconds
    /// inserted since the GPS epoch origin.
    pub fn to_gps_time(&self) -> Self {
        let inserted = LeapSecondTable::builtin()
            .since(Epoch::Gps.origin())
            .count_until(*self);
        *self + Duration::seconds(inserted as i64)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Trait implementations
// ═══════════════════════════════════════════════════════════════════════════

impl fmt::Display for Instant {
    /// RFC 3339 in UTC with microseconds, or raw Unix seconds when the value
    /// is outside chrono's calendar range.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime(&chrono::Utc) {
            Some(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S%.6fZ")),
            None => write!(f, "@{}.{:06}", self.seconds, self.micros),
        }
    }
}

impl Add<Duration> for Instant {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Duration) -> Self::Output {
        self.checked_add(rhs).expect("instant overflow")
    }
}

impl AddAssign<Duration> for Instant {
    #[inline]
    fn add_assign(&mut self, rhs: Duration) {
        *self = *self + rhs;
    }
}

impl Sub<Duration> for Instant {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Duration) -> Self::Output {
        self.checked_sub(rhs).expect("instant overflow")
    }
}

impl SubAssign<Duration> for Instant {
    #[inline]
    fn sub_assign(&mut self, rhs: Duration) {
        *self = *self - rhs;
    }
}

impl Sub for Instant {
    type Output = Duration;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Duration::from_micros_i128(self.as_micros() - rhs.as_micros()).expect("instant overflow")
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
