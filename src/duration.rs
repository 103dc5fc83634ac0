// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Signed spans of time with microsecond resolution.
//!
//! [`Duration`] shares the representation of [`Instant`](crate::Instant):
//! whole seconds plus a microsecond fraction that is **always** in
//! `[0, 1_000_000)`.  A negative duration therefore borrows from the seconds
//! component, e.g. `-0.25 s` is stored as `(-1 s, 750 000 µs)`.
//!
//! All arithmetic is exact integer arithmetic; floating point only appears
//! in the [`qtty`] views returned by [`Duration::to_seconds`] and
//! [`Duration::to_days`].

use qtty::{Days, Seconds};
use std::fmt;
use std::ops::{Add, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub(crate) const MICROS_PER_SECOND: i64 = 1_000_000;

/// Signed amount of elapsed time.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Duration {
    seconds: i64,
    micros: u32,
}

impl Duration {
    pub const ZERO: Duration = Duration {
        seconds: 0,
        micros: 0,
    };

    // ── constructors ──────────────────────────────────────────────────

    /// Build from whole seconds and a (possibly out-of-range) microsecond
    /// component.  The microseconds are carried into the seconds.
    ///
    /// # Panics
    ///
    /// Panics if the carried value does not fit the seconds range.
    pub fn new(seconds: i64, micros: i64) -> Self {
        Self::checked_new(seconds, micros).expect("duration overflow")
    }

    /// Fallible counterpart of [`Duration::new`].
    pub fn checked_new(seconds: i64, micros: i64) -> Option<Self> {
        let total = i128::from(seconds) * i128::from(MICROS_PER_SECOND) + i128::from(micros);
        Self::from_micros_i128(total)
    }

    pub const fn seconds(seconds: i64) -> Self {
        Self { seconds, micros: 0 }
    }

    /// # Panics
    ///
    /// Panics if the length does not fit the seconds range; likewise for
    /// [`hours`](Self::hours), [`days`](Self::days), [`weeks`](Self::weeks)
    /// and [`milliseconds`](Self::milliseconds).
    pub fn minutes(minutes: i64) -> Self {
        Self::checked_minutes(minutes).expect("duration overflow")
    }

    pub fn hours(hours: i64) -> Self {
        Self::checked_hours(hours).expect("duration overflow")
    }

    pub fn days(days: i64) -> Self {
        Self::checked_days(days).expect("duration overflow")
    }

    pub fn weeks(weeks: i64) -> Self {
        Self::checked_weeks(weeks).expect("duration overflow")
    }

    pub fn milliseconds(millis: i64) -> Self {
        Self::checked_milliseconds(millis).expect("duration overflow")
    }

    pub const fn checked_minutes(minutes: i64) -> Option<Self> {
        Self::checked_scaled(minutes, 60)
    }

    pub const fn checked_hours(hours: i64) -> Option<Self> {
        Self::checked_scaled(hours, 3_600)
    }

    pub const fn checked_days(days: i64) -> Option<Self> {
        Self::checked_scaled(days, 86_400)
    }

    pub const fn checked_weeks(weeks: i64) -> Option<Self> {
        Self::checked_scaled(weeks, 604_800)
    }

    pub fn checked_milliseconds(millis: i64) -> Option<Self> {
        Self::checked_new(0, millis.checked_mul(1_000)?)
    }

    const fn checked_scaled(count: i64, unit: i64) -> Option<Self> {
        match count.checked_mul(unit) {
            Some(seconds) => Some(Self::seconds(seconds)),
            None => None,
        }
    }

    pub fn microseconds(micros: i64) -> Self {
        Self::new(0, micros)
    }

    pub(crate) fn from_micros_i128(total: i128) -> Option<Self> {
        let per = i128::from(MICROS_PER_SECOND);
        let seconds = i64::try_from(total.div_euclid(per)).ok()?;
        let micros = total.rem_euclid(per) as u32;
        Some(Self { seconds, micros })
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// Whole-second component (floored for negative durations).
    #[inline]
    pub const fn seconds_part(&self) -> i64 {
        self.seconds
    }

    /// Non-negative microsecond fraction.
    #[inline]
    pub const fn micros_part(&self) -> u32 {
        self.micros
    }

    /// Total length in microseconds.
    #[inline]
    pub fn as_micros(&self) -> i128 {
        i128::from(self.seconds) * i128::from(MICROS_PER_SECOND) + i128::from(self.micros)
    }

    /// Whole seconds, truncated toward zero.
    pub fn in_seconds(&self) -> i64 {
        (self.as_micros() / i128::from(MICROS_PER_SECOND)) as i64
    }

    /// Length as a floating-point seconds quantity.
    pub fn to_seconds(&self) -> Seconds {
        Seconds::new(self.seconds as f64 + f64::from(self.micros) / 1e6)
    }

    /// Length as a floating-point days quantity.
    pub fn to_days(&self) -> Days {
        self.to_seconds().to::<qtty::Day>()
    }

    // ── sign ──────────────────────────────────────────────────────────

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.seconds == 0 && self.micros == 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.seconds < 0
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        !self.is_negative() && !self.is_zero()
    }

    pub fn abs(self) -> Self {
        if self.is_negative() {
            -self
        } else {
            self
        }
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        Self::from_micros_i128(self.as_micros() + rhs.as_micros())
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        Self::from_micros_i128(self.as_micros() - rhs.as_micros())
    }
}

impl Add for Duration {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs).expect("duration overflow")
    }
}

impl Sub for Duration {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs).expect("duration overflow")
    }
}

impl Neg for Duration {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self::from_micros_i128(-self.as_micros()).expect("duration overflow")
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let abs = self.as_micros().unsigned_abs();
        let per = MICROS_PER_SECOND as u128;
        write!(f, "{sign}{}.{:06}s", abs / per, abs % per)
    }
}

// ── chrono interop ────────────────────────────────────────────────────────

impl From<chrono::TimeDelta> for Duration {
    /// Sub-microsecond precision is truncated toward negative infinity.
    fn from(delta: chrono::TimeDelta) -> Self {
        let nanos = i128::from(delta.num_seconds()) * 1_000_000_000
            + i128::from(delta.subsec_nanos());
        Self::from_micros_i128(nanos.div_euclid(1_000))
            .expect("chrono::TimeDelta always fits a Duration")
    }
}

impl TryFrom<Duration> for chrono::TimeDelta {
    type Error = crate::Error;

    fn try_from(duration: Duration) -> Result<Self, Self::Error> {
        i64::try_from(duration.as_micros())
            .map(chrono::TimeDelta::microseconds)
            .map_err(|_| {
                crate::Error::InvalidArgument(format!(
                    "{duration} exceeds the chrono::TimeDelta range"
                ))
            })
    }
}
