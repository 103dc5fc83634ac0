// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Timekeeping epochs and leap-second-aware timestamps.
//!
//! | Epoch | Origin | Leap seconds |
//! |-------|--------|--------------|
//! | [`Epoch::Unix`] | 1970-01-01T00:00:00Z | ignored (POSIX) |
//! | [`Epoch::Gps`]  | 1980-01-06T00:00:00Z | inserted after the origin |
//! | [`Epoch::Tai`]  | 1958-01-01T00:00:00Z | full TAI − UTC |
//!
//! Every timestamp starts from the Unix distance between the epoch origin
//! and the instant, then adds the leap seconds the epoch accumulates.

use crate::{Duration, Error, Instant, LeapSecondTable, Result};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const GPS_ORIGIN: Instant = Instant::from_unix_seconds(315_964_800);
const TAI_ORIGIN: Instant = Instant::from_unix_seconds(-378_691_200);

/// Named origin plus leap-second accumulation rule.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Epoch {
    /// UNIX / UTC time, not leap-second corrected.
    Unix,
    /// GPS time; counts leap seconds inserted since its origin.
    Gps,
    /// International Atomic Time.
    Tai,
}

impl Epoch {
    /// First instant of the epoch.
    pub const fn origin(&self) -> Instant {
        match self {
            Epoch::Unix => Instant::UNIX_EPOCH,
            Epoch::Gps => GPS_ORIGIN,
            Epoch::Tai => TAI_ORIGIN,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Epoch::Unix => "UNIX",
            Epoch::Gps => "GPS",
            Epoch::Tai => "TAI",
        }
    }
}

impl fmt::Display for Epoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Converts instants into durations since an epoch origin.
#[derive(Debug, Copy, Clone)]
pub struct EpochConverter<'a> {
    table: &'a LeapSecondTable,
}

impl Default for EpochConverter<'static> {
    /// Converter backed by [`LeapSecondTable::builtin`].
    fn default() -> Self {
        Self::new(LeapSecondTable::builtin())
    }
}

impl<'a> EpochConverter<'a> {
    pub const fn new(table: &'a LeapSecondTable) -> Self {
        Self { table }
    }

    pub const fn table(&self) -> &'a LeapSecondTable {
        self.table
    }

    /// Elapsed time between `epoch`'s origin and `instant`.
    ///
    /// Fails with [`Error::Range`] when `instant` precedes the origin.
    ///
    /// # Examples
    ///
    /// ```
    /// use tempora::{Duration, Epoch, EpochConverter, Instant};
    ///
    /// let converter = EpochConverter::default();
    /// let t = Instant::from_unix_seconds(1_577_836_800); // 2020-01-01
    ///
    /// let unix = converter.timestamp(t, Epoch::Unix).unwrap();
    /// let gps = converter.timestamp(t, Epoch::Gps).unwrap();
    /// assert_eq!(unix - gps, Duration::seconds(315_964_800 - 18));
    /// ```
    pub fn timestamp(&self, instant: Instant, epoch: Epoch) -> Result<Duration> {
        let origin = epoch.origin();
        if instant < origin {
            return Err(Error::Range {
                epoch,
                origin,
                instant,
            });
        }

        let leap = match epoch {
            Epoch::Unix => 0,
            Epoch::Gps => self.table.until(instant) - self.table.until(origin),
            Epoch::Tai => self.table.since(origin).until(instant),
        };
        instant
            .since_unix_epoch()
            .checked_sub(origin.since_unix_epoch())
            .and_then(|elapsed| elapsed.checked_add(Duration::seconds(leap)))
            .ok_or_else(|| {
                Error::InvalidArgument(format!("{epoch} timestamp out of range for {instant}"))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LeapSecond;
    use assert_matches::assert_matches;

    const Y2020: Instant = Instant::from_unix_seconds(1_577_836_800);

    #[test]
    fn test_timestamp_overflow_is_an_error() {
        let far = Instant::from_unix_seconds(i64::MAX - 10);
        let converter = EpochConverter::default();
        assert_matches!(converter.timestamp(far, Epoch::Tai), Err(Error::InvalidArgument(_)));
        assert!(converter.timestamp(far, Epoch::Gps).is_ok());
        assert_eq!(
            converter.timestamp(far, Epoch::Unix).unwrap(),
            Duration::seconds(i64::MAX - 10)
        );
    }

    #[test]
    fn test_unix_timestamp_is_uncorrected() {
        let ts = EpochConverter::default().timestamp(Y2020, Epoch::Unix).unwrap();
        assert_eq!(ts, Duration::seconds(1_577_836_800));
    }

    #[test]
    fn test_gps_timestamp_counts_leap_seconds_since_origin() {
        let converter = EpochConverter::default();
        let ts = converter.timestamp(Y2020, Epoch::Gps).unwrap();
        assert_eq!(ts, Duration::seconds(1_577_836_800 - 315_964_800 + 18));

        let at_origin = converter.timestamp(GPS_ORIGIN, Epoch::Gps).unwrap();
        assert!(at_origin.is_zero());
    }

    #[test]
    fn test_tai_timestamp_adds_full_offset() {
        let ts = EpochConverter::default().timestamp(Y2020, Epoch::Tai).unwrap();
        assert_eq!(ts, Duration::seconds(1_577_836_800 + 378_691_200 + 37));
    }

    #[test]
    fn test_tai_at_origin_is_zero() {
        let ts = EpochConverter::default()
            .timestamp(TAI_ORIGIN, Epoch::Tai)
            .unwrap();
        assert!(ts.is_zero());
    }

    #[test]
    fn test_timestamp_keeps_microseconds() {
        let t = Y2020 + Duration::microseconds(42);
        let ts = EpochConverter::default().timestamp(t, Epoch::Gps).unwrap();
        assert_eq!(ts.micros_part(), 42);
    }

    #[test]
    fn test_pre_origin_fails_for_every_epoch() {
        let converter = EpochConverter::default();
        for epoch in [Epoch::Unix, Epoch::Gps, Epoch::Tai] {
            let before = epoch.origin() - Duration::microseconds(1);
            assert_matches!(
                converter.timestamp(before, epoch),
                Err(Error::Range { epoch: e, .. }) if e == epoch
            );
        }
    }

    #[test]
    fn test_custom_table() {
        let table = LeapSecondTable::new(vec![
            LeapSecond::new(Instant::from_unix_seconds(100), 1),
            LeapSecond::new(Instant::from_unix_seconds(200), 2),
        ])
        .unwrap();
        let converter = EpochConverter::new(&table);
        let ts = converter
            .timestamp(Instant::from_unix_seconds(250), Epoch::Tai)
            .unwrap();
        assert_eq!(ts, Duration::seconds(250 + 378_691_200 + 2));
    }

    #[test]
    fn test_range_error_message() {
        let err = EpochConverter::default()
            .timestamp(Instant::UNIX_EPOCH, Epoch::Gps)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "1970-01-01T00:00:00.000000Z precedes the GPS epoch origin 1980-01-06T00:00:00.000000Z"
        );
    }
}
