// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Bridge to the civil Gregorian calendar.
//!
//! Calendar-field validation and time-zone rules are delegated to `chrono`.
//! Every function takes the time zone as an explicit argument; nothing here
//! reads or mutates a process-wide default zone.

use crate::{Error, Instant, Result};
use chrono::{DateTime, FixedOffset, LocalResult, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc};

impl Instant {
    /// Build an instant from civil fields observed at a fixed UTC offset.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::FixedOffset;
    /// use tempora::Instant;
    ///
    /// let utc = FixedOffset::east_opt(0).unwrap();
    /// let t = Instant::from_civil(2020, 1, 1, 0, 0, 0, 0, &utc).unwrap();
    /// assert_eq!(t.unix_seconds(), 1_577_836_800);
    /// ```
    #[allow(clippy::too_many_arguments)]
    pub fn from_civil(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        micro: u32,
        offset: &FixedOffset,
    ) -> Result<Self> {
        let naive = NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_micro_opt(hour, minute, second, micro))
            .ok_or_else(|| {
                Error::InvalidArgument(format!(
                    "{year:04}-{month:02}-{day:02}T{hour:02}:{minute:02}:{second:02}.{micro:06} \
                     is not a valid Gregorian date-time"
                ))
            })?;
        Self::from_local(&naive, offset)
    }

    /// Build an instant from a wall-clock reading in `tz`.
    ///
    /// Ambiguous readings (clocks turned back) resolve to the earlier
    /// instant; readings that do not exist in `tz` are rejected.
    pub fn from_local<Tz: TimeZone>(naive: &NaiveDateTime, tz: &Tz) -> Result<Self> {
        match tz.from_local_datetime(naive) {
            LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => Ok(Self::from_datetime(&dt)),
            LocalResult::None => Err(Error::InvalidArgument(format!(
                "{naive} does not exist in the requested time zone"
            ))),
        }
    }

    /// Build an instant from any `chrono` date-time.
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        Self::new(
            datetime.timestamp(),
            i64::from(datetime.timestamp_subsec_micros()),
        )
    }

    /// Civil representation of this instant in `tz`.
    ///
    /// Returns `None` if the value falls outside chrono's representable range.
    pub fn to_datetime<Tz: TimeZone>(&self, tz: &Tz) -> Option<DateTime<Tz>> {
        DateTime::<Utc>::from_timestamp(self.unix_seconds(), self.micros() * 1_000)
            .map(|utc| utc.with_timezone(tz))
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Instant {
    #[inline]
    fn from(datetime: DateTime<Tz>) -> Self {
        Self::from_datetime(&datetime)
    }
}

/// Offset of `tz` from UTC at `instant`, in seconds east of Greenwich.
///
/// Returns `None` if `instant` is outside chrono's representable range.
pub fn utc_offset<Tz: TimeZone>(tz: &Tz, instant: Instant) -> Option<i32> {
    let utc = instant.to_datetime(&Utc)?;
    Some(
        tz.offset_from_utc_datetime(&utc.naive_utc())
            .fix()
            .local_minus_utc(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::{Datelike, Timelike};

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    #[test]
    fn test_from_civil_utc() {
        let t = Instant::from_civil(2020, 1, 5, 0, 0, 0, 0, &utc()).unwrap();
        assert_eq!(t.unix_seconds(), 1_578_182_400);
        assert_eq!(t.micros(), 0);
    }

    #[test]
    fn test_from_civil_applies_offset() {
        let cet = FixedOffset::east_opt(3_600).unwrap();
        let local = Instant::from_civil(2020, 1, 1, 1, 0, 0, 0, &cet).unwrap();
        let utc = Instant::from_civil(2020, 1, 1, 0, 0, 0, 0, &utc()).unwrap();
        assert_eq!(local, utc);
    }

    #[test]
    fn test_from_civil_pre_epoch_keeps_positive_fraction() {
        let t = Instant::from_civil(1969, 12, 31, 23, 59, 59, 250_000, &utc()).unwrap();
        assert_eq!(t.unix_seconds(), -1);
        assert_eq!(t.micros(), 250_000);
    }

    #[test]
    fn test_from_civil_rejects_invalid_fields() {
        assert_matches!(
            Instant::from_civil(2021, 2, 29, 0, 0, 0, 0, &utc()),
            Err(Error::InvalidArgument(_))
        );
        assert_matches!(
            Instant::from_civil(2021, 1, 1, 24, 0, 0, 0, &utc()),
            Err(Error::InvalidArgument(_))
        );
    }

    #[test]
    fn test_to_datetime_roundtrip_with_offset() {
        let tz = FixedOffset::west_opt(5 * 3_600).unwrap();
        let t = Instant::from_civil(2024, 3, 10, 12, 30, 15, 123_456, &tz).unwrap();
        let dt = t.to_datetime(&tz).unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2024, 3, 10));
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (12, 30, 15));
        assert_eq!(dt.timestamp_subsec_micros(), 123_456);
        assert_eq!(Instant::from(dt), t);
    }

    #[test]
    fn test_utc_offset_of_fixed_zone() {
        let tz = FixedOffset::east_opt(-2 * 3_600).unwrap();
        assert_eq!(utc_offset(&tz, Instant::UNIX_EPOCH), Some(-7_200));
        assert_eq!(utc_offset(&Utc, Instant::UNIX_EPOCH), Some(0));
    }
}
