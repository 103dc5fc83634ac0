// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Leap-second table
//!
//! An ordered, immutable list of `(effective instant, TAI − UTC)` entries.
//! Each entry takes effect at 00:00:00 UTC on the day following the inserted
//! second, and carries the cumulative TAI − UTC offset from that instant on.
//!
//! ## Boundary rules
//! * [`LeapSeconds::until`] uses `effective ≤ instant`: the leap second has
//!   already occurred at its effective instant.
//! * [`LeapSeconds::count_between`] counts entries in the closed range
//!   `[min(start, end), max(start, end)]`.
//!
//! ## Sources
//! [`LeapSecondTable::builtin`] is compiled from IERS Bulletin C and covers
//! 1972–2017 (28 entries).  Other tables can be loaded from the IETF/IANA
//! `leap-seconds.list` format with [`LeapSecondTable::parse_ietf`].

use crate::{Error, Instant, Period, Result};
use once_cell::sync::Lazy;

/// Seconds between the NTP epoch (1900-01-01) and the Unix epoch.
const NTP_UNIX_OFFSET: i64 = 2_208_988_800;

/// IERS Bulletin C: (Unix seconds of the effective instant, TAI − UTC after).
const IERS_BULLETIN_C: [(i64, i64); 28] = [
    (63_072_000, 10),    // 1972-01-01
    (78_796_800, 11),    // 1972-07-01
    (94_694_400, 12),    // 1973-01-01
    (126_230_400, 13),   // 1974-01-01
    (157_766_400, 14),   // 1975-01-01
    (189_302_400, 15),   // 1976-01-01
    (220_924_800, 16),   // 1977-01-01
    (252_460_800, 17),   // 1978-01-01
    (283_996_800, 18),   // 1979-01-01
    (315_532_800, 19),   // 1980-01-01
    (362_793_600, 20),   // 1981-07-01
    (394_329_600, 21),   // 1982-07-01
    (425_865_600, 22),   // 1983-07-01
    (489_024_000, 23),   // 1985-07-01
    (567_993_600, 24),   // 1988-01-01
    (631_152_000, 25),   // 1990-01-01
    (662_688_000, 26),   // 1991-01-01
    (709_948_800, 27),   // 1992-07-01
    (741_484_800, 28),   // 1993-07-01
    (773_020_800, 29),   // 1994-07-01
    (820_454_400, 30),   // 1996-01-01
    (867_715_200, 31),   // 1997-07-01
    (915_148_800, 32),   // 1999-01-01
    (1_136_073_600, 33), // 2006-01-01
    (1_230_768_000, 34), // 2009-01-01
    (1_341_100_800, 35), // 2012-07-01
    (1_435_708_800, 36), // 2015-07-01
    (1_483_228_800, 37), // 2017-01-01
];

static BUILTIN: Lazy<LeapSecondTable> = Lazy::new(|| {
    tracing::debug!(
        entries = IERS_BULLETIN_C.len(),
        "initialising built-in leap-second table"
    );
    LeapSecondTable {
        entries: IERS_BULLETIN_C
            .iter()
            .map(|&(unix, offset)| LeapSecond::new(Instant::from_unix_seconds(unix), offset))
            .collect(),
    }
});

/// One table entry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct LeapSecond {
    effective: Instant,
    offset_tai: i64,
}

impl LeapSecond {
    pub const fn new(effective: Instant, offset_tai: i64) -> Self {
        Self {
            effective,
            offset_tai,
        }
    }

    /// Instant from which this entry's offset applies.
    #[inline]
    pub const fn effective(&self) -> Instant {
        self.effective
    }

    /// Cumulative TAI − UTC in seconds from [`Self::effective`] on.
    #[inline]
    pub const fn offset_tai(&self) -> i64 {
        self.offset_tai
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Owned table
// ═══════════════════════════════════════════════════════════════════════════

/// Owned leap-second table, strictly increasing by effective instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeapSecondTable {
    entries: Vec<LeapSecond>,
}

impl LeapSecondTable {
    /// Build a table from ordered entries.
    ///
    /// Fails with [`Error::InvalidArgument`] unless effective instants are
    /// strictly increasing.
    pub fn new(entries: Vec<LeapSecond>) -> Result<Self> {
        if let Some(pair) = entries
            .windows(2)
            .find(|pair| pair[0].effective >= pair[1].effective)
        {
            return Err(Error::InvalidArgument(format!(
                "leap-second entries out of order: {} is not before {}",
                pair[0].effective, pair[1].effective
            )));
        }
        Ok(Self { entries })
    }

    /// Parse the IETF/IANA `leap-seconds.list` format.
    ///
    /// Data lines hold an NTP timestamp (seconds since 1900-01-01) and the
    /// TAI − UTC offset, optionally followed by a `#` comment.  Lines
    /// starting with `#` are ignored.
    pub fn parse_ietf(text: &str) -> Result<Self> {
        let mut entries = Vec::new();
        for (index, raw) in text.lines().enumerate() {
            let line = raw.split('#').next().unwrap_or_default().trim();
            if line.is_empty() {
                continue;
            }
            let mut fields = line.split_whitespace();
            let parsed = match (fields.next(), fields.next()) {
                (Some(ntp), Some(offset)) => ntp.parse::<i64>().ok().zip(offset.parse::<i64>().ok()),
                _ => None,
            };
            let (ntp, offset) = parsed.ok_or_else(|| {
                Error::InvalidArgument(format!(
                    "malformed leap-second line {}: {raw:?}",
                    index + 1
                ))
            })?;
            entries.push(LeapSecond::new(
                Instant::from_unix_seconds(ntp - NTP_UNIX_OFFSET),
                offset,
            ));
        }
        tracing::debug!(entries = entries.len(), "parsed IETF leap-second list");
        Self::new(entries)
    }

    /// Process-wide table compiled from IERS Bulletin C.
    ///
    /// Built on first use; concurrent first callers wait for the complete
    /// table.
    pub fn builtin() -> &'static LeapSecondTable {
        &BUILTIN
    }

    /// Borrowed view over every entry.
    #[inline]
    pub fn view(&self) -> LeapSeconds<'_> {
        LeapSeconds {
            entries: &self.entries,
        }
    }

    // ── delegating queries ────────────────────────────────────────────

    /// See [`LeapSeconds::until`].
    pub fn until(&self, instant: Instant) -> i64 {
        self.view().until(instant)
    }

    /// See [`LeapSeconds::since`].
    pub fn since(&self, epoch: Instant) -> LeapSeconds<'_> {
        self.view().since(epoch)
    }

    /// See [`LeapSeconds::count_between`].
    pub fn count_between(&self, period: &Period) -> usize {
        self.view().count_between(period)
    }

    /// See [`LeapSeconds::between`].
    pub fn between(&self, period: &Period) -> LeapSeconds<'_> {
        self.view().between(period)
    }

    /// See [`LeapSeconds::count_until`].
    pub fn count_until(&self, instant: Instant) -> usize {
        self.view().count_until(instant)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LeapSecond> {
        self.entries.iter()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Borrowed view
// ═══════════════════════════════════════════════════════════════════════════

/// Contiguous, ordered sub-table of a [`LeapSecondTable`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LeapSeconds<'a> {
    entries: &'a [LeapSecond],
}

impl<'a> LeapSeconds<'a> {
    /// Cumulative TAI − UTC in effect at `instant`.
    ///
    /// Uses the last entry whose effective instant is `≤ instant`; returns
    /// zero when `instant` precedes every entry of this view.
    pub fn until(&self, instant: Instant) -> i64 {
        match self.count_until(instant) {
            0 => 0,
            n => self.entries[n - 1].offset_tai,
        }
    }

    /// Number of entries whose effective instant is `≤ instant`.
    pub fn count_until(&self, instant: Instant) -> usize {
        self.entries.partition_point(|e| e.effective <= instant)
    }

    /// Entries effective at or after `epoch`.
    pub fn since(&self, epoch: Instant) -> LeapSeconds<'a> {
        let from = self.entries.partition_point(|e| e.effective < epoch);
        LeapSeconds {
            entries: &self.entries[from..],
        }
    }

    /// Entries effective inside `period`, boundaries included, regardless
    /// of the period's orientation.
    pub fn between(&self, period: &Period) -> LeapSeconds<'a> {
        let span = period.normalized();
        let from = self.entries.partition_point(|e| e.effective < span.start);
        let to = self.entries.partition_point(|e| e.effective <= span.end);
        LeapSeconds {
            entries: &self.entries[from..to.max(from)],
        }
    }

    /// Number of entries effective inside `period`.
    pub fn count_between(&self, period: &Period) -> usize {
        self.between(period).len()
    }

    /// Offset of the last entry in this view, zero when empty.
    pub fn offset_tai(&self) -> i64 {
        self.entries.last().map_or(0, |e| e.offset_tai)
    }

    pub fn first(&self) -> Option<&'a LeapSecond> {
        self.entries.first()
    }

    pub fn last(&self) -> Option<&'a LeapSecond> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'a, LeapSecond> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for LeapSeconds<'a> {
    type Item = &'a LeapSecond;
    type IntoIter = std::slice::Iter<'a, LeapSecond>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
