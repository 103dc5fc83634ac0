// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Gregorian time periods with exact arithmetic.
//!
//! This crate provides points and spans of time with microsecond resolution,
//! the algebra over spans (overlap, abutment, containment, merging, gaps,
//! subdivision), and leap-second-aware timestamps on the UNIX, GPS and TAI
//! epochs.
//!
//! # Core types
//!
//! - [`Instant`] — absolute point in time, Unix seconds + microseconds.
//! - [`Duration`] — signed span in the same representation.
//! - [`Period`] — directed span between two instants; may run backward.
//! - [`IntervalBoundary`] — endpoint policy for subdivision.
//! - [`Subdivisions`] — lazy iterator over the sub-periods of a period.
//! - [`PeriodSet`] — ordered collection of periods with gap detection.
//! - [`LeapSecondTable`] / [`LeapSeconds`] — TAI − UTC offsets.
//! - [`Epoch`] / [`EpochConverter`] — timestamps since an epoch origin.
//!
//! # Epochs
//!
//! | Epoch | Origin | Leap seconds |
//! |-------|--------|--------------|
//! | [`Epoch::Unix`] | 1970-01-01 | none |
//! | [`Epoch::Gps`] | 1980-01-06 | inserted since origin |
//! | [`Epoch::Tai`] | 1958-01-01 | full TAI − UTC |
//!
//! # Civil calendar
//!
//! Civil fields and time zones are handled by `chrono`.  Time zones are
//! always passed explicitly, see [`Instant::from_civil`],
//! [`Instant::to_datetime`] and [`civil::utc_offset`].

pub mod civil;
mod duration;
mod epoch;
mod error;
pub(crate) mod instant;
mod interval;
mod leap_seconds;
mod period;
mod period_set;
mod subdivide;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use duration::Duration;
pub use epoch::{Epoch, EpochConverter};
pub use error::{Error, Result};
pub use instant::Instant;
pub use interval::IntervalBoundary;
pub use leap_seconds::{LeapSecond, LeapSecondTable, LeapSeconds};
pub use period::Period;
pub use period_set::{PeriodSet, SortKey, SortOrder};
pub use subdivide::Subdivisions;
