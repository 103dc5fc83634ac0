// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Lazy subdivision of a period into fixed-length sub-periods.
//!
//! The covered span `[lo, hi]` is cut into `n = ⌈(hi − lo) / step⌉` slots.
//! Slot `k` (counted from `lo`) is computed directly from its index, so the
//! iterator holds no running cursor: it can be cloned, reversed, or rebuilt
//! from the same period with identical output.
//!
//! * Forward subdivision yields `(lo + k·step, min(lo + (k+1)·step, hi))`.
//! * Backward subdivision walks from `hi` toward `lo` and yields backward
//!   sub-periods `(cursor, max(cursor − step, lo))`, emitted from the slot
//!   nearest `lo` to the slot nearest `hi`.
//!
//! The slot touching an excluded endpoint of the parent is skipped.

use crate::{Duration, Instant, IntervalBoundary, Period};
use std::iter::FusedIterator;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Direction {
    Forward,
    Backward,
}

/// Iterator over the sub-periods of a period.
///
/// Created by [`Period::subdivide_forward`] and
/// [`Period::subdivide_backward`].
#[derive(Debug, Clone)]
pub struct Subdivisions {
    lo: i128,
    hi: i128,
    step: i128,
    /// Slot count; the last slot is clipped to `hi`.
    slots: u128,
    direction: Direction,
    front: u128,
    back: u128,
}

impl Subdivisions {
    /// `step` must already be validated as positive.
    pub(crate) fn new(
        parent: &Period,
        step: Duration,
        boundary: IntervalBoundary,
        direction: Direction,
    ) -> Self {
        let span = parent.normalized();
        let (lo, hi) = (span.start.as_micros(), span.end.as_micros());
        let step = step.as_micros();
        let length = (hi - lo) as u128;
        let slots = length.div_ceil(step as u128);

        // Orientation of the parent decides which physical end is "start".
        let (lo_included, hi_included) = if parent.is_backward() {
            (boundary.includes_end(), boundary.includes_start())
        } else {
            (boundary.includes_start(), boundary.includes_end())
        };
        let front = if lo_included { 0 } else { 1 };
        let back = if hi_included {
            slots
        } else {
            slots.saturating_sub(1)
        };

        tracing::trace!(slots = %slots, ?direction, ?boundary, "subdividing period");

        Self {
            lo,
            hi,
            step,
            slots,
            direction,
            front: front.min(back),
            back,
        }
    }

    fn instant(&self, micros: i128) -> Instant {
        Instant::from_micros(micros.clamp(self.lo, self.hi))
            .expect("sub-period bounds lie within the parent period")
    }

    fn slot(&self, k: u128) -> Period {
        let k = k as i128;
        match self.direction {
            Direction::Forward => {
                let start = self.lo + k * self.step;
                Period::new(self.instant(start), self.instant(start + self.step))
            }
            Direction::Backward => {
                // Slot k is generated (slots − 1 − k) steps back from `hi`.
                let j = self.slots as i128 - 1 - k;
                let cursor = self.hi - j * self.step;
                Period::new(self.instant(cursor), self.instant(cursor - self.step))
            }
        }
    }
}

impl Iterator for Subdivisions {
    type Item = Period;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let period = self.slot(self.front);
        self.front += 1;
        Some(period)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.front = self.front.saturating_add(n as u128).min(self.back);
        self.next()
    }
}

impl DoubleEndedIterator for Subdivisions {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.slot(self.back))
    }
}

impl FusedIterator for Subdivisions {}

#[cfg(test)]
mod tests {
    use crate::{Duration, Error, Instant, IntervalBoundary, Period};
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    fn h(hours: i64, minutes: i64) -> Instant {
        Instant::UNIX_EPOCH + Duration::hours(hours) + Duration::minutes(minutes)
    }

    fn p(a: Instant, b: Instant) -> Period {
        Period::new(a, b)
    }

    #[test]
    fn test_forward_closed_clips_last() {
        let parent = p(h(0, 0), h(2, 30));
        let got: Vec<_> = parent
            .subdivide_forward(Duration::hours(1), IntervalBoundary::Closed)
            .unwrap()
            .collect();
        assert_eq!(
            got,
            vec![p(h(0, 0), h(1, 0)), p(h(1, 0), h(2, 0)), p(h(2, 0), h(2, 30))]
        );
    }

    #[test]
    fn test_forward_exact_multiple() {
        let parent = p(h(0, 0), h(3, 0));
        let got: Vec<_> = parent
            .subdivide_forward(Duration::hours(1), IntervalBoundary::Closed)
            .unwrap()
            .collect();
        assert_eq!(
            got,
            vec![p(h(0, 0), h(1, 0)), p(h(1, 0), h(2, 0)), p(h(2, 0), h(3, 0))]
        );
    }

    #[test]
    fn test_forward_boundaries() {
        let parent = p(h(0, 0), h(2, 30));
        let step = Duration::hours(1);
        let collect = |b| -> Vec<Period> { parent.subdivide_forward(step, b).unwrap().collect() };

        assert_eq!(
            collect(IntervalBoundary::LeftOpen),
            vec![p(h(1, 0), h(2, 0)), p(h(2, 0), h(2, 30))]
        );
        assert_eq!(
            collect(IntervalBoundary::RightOpen),
            vec![p(h(0, 0), h(1, 0)), p(h(1, 0), h(2, 0))]
        );
        assert_eq!(collect(IntervalBoundary::Open), vec![p(h(1, 0), h(2, 0))]);
    }

    #[test]
    fn test_right_open_drops_exact_end() {
        let parent = p(h(0, 0), h(2, 0));
        let got: Vec<_> = parent
            .subdivide_forward(Duration::hours(1), IntervalBoundary::RightOpen)
            .unwrap()
            .collect();
        assert_eq!(got, vec![p(h(0, 0), h(1, 0))]);
    }

    #[test]
    fn test_backward_closed_emits_ascending_backward_periods() {
        let parent = p(h(0, 0), h(2, 30));
        let got: Vec<_> = parent
            .subdivide_backward(Duration::hours(1), IntervalBoundary::Closed)
            .unwrap()
            .collect();
        assert_eq!(
            got,
            vec![p(h(0, 30), h(0, 0)), p(h(1, 30), h(0, 30)), p(h(2, 30), h(1, 30))]
        );
        assert!(got.iter().all(Period::is_backward));
    }

    #[test]
    fn test_backward_boundaries() {
        let parent = p(h(0, 0), h(2, 30));
        let step = Duration::hours(1);
        let collect = |b| -> Vec<Period> { parent.subdivide_backward(step, b).unwrap().collect() };

        assert_eq!(
            collect(IntervalBoundary::LeftOpen),
            vec![p(h(1, 30), h(0, 30)), p(h(2, 30), h(1, 30))]
        );
        assert_eq!(
            collect(IntervalBoundary::RightOpen),
            vec![p(h(0, 30), h(0, 0)), p(h(1, 30), h(0, 30))]
        );
        assert_eq!(collect(IntervalBoundary::Open), vec![p(h(1, 30), h(0, 30))]);
    }

    #[test]
    fn test_backward_parent_swaps_endpoint_roles() {
        // The parent's own start is the later instant.
        let parent = p(h(2, 0), h(0, 0));
        let got: Vec<_> = parent
            .subdivide_forward(Duration::hours(1), IntervalBoundary::LeftOpen)
            .unwrap()
            .collect();
        assert_eq!(got, vec![p(h(0, 0), h(1, 0))]);
    }

    #[test]
    fn test_zero_length_is_empty() {
        let parent = p(h(1, 0), h(1, 0));
        for boundary in [
            IntervalBoundary::Closed,
            IntervalBoundary::Open,
            IntervalBoundary::LeftOpen,
            IntervalBoundary::RightOpen,
        ] {
            let step = Duration::minutes(1);
            assert_eq!(parent.subdivide_forward(step, boundary).unwrap().count(), 0);
            assert_eq!(parent.subdivide_backward(step, boundary).unwrap().count(), 0);
        }
    }

    #[test]
    fn test_single_slot_open_is_empty() {
        let parent = p(h(0, 0), h(1, 0));
        let iter = parent
            .subdivide_forward(Duration::hours(1), IntervalBoundary::Open)
            .unwrap();
        assert_eq!(iter.count(), 0);
    }

    #[test]
    fn test_non_positive_step_is_rejected() {
        let parent = p(h(0, 0), h(1, 0));
        assert_matches!(
            parent.subdivide_forward(Duration::ZERO, IntervalBoundary::Closed),
            Err(Error::InvalidArgument(_))
        );
        assert_matches!(
            parent.subdivide_backward(Duration::seconds(-1), IntervalBoundary::Closed),
            Err(Error::InvalidArgument(_))
        );
    }

    #[test]
    fn test_restartable_and_double_ended() {
        let parent = p(h(0, 0), h(5, 0));
        let iter = parent
            .subdivide_forward(Duration::hours(1), IntervalBoundary::Closed)
            .unwrap();
        assert_eq!(iter.size_hint(), (5, Some(5)));

        let first: Vec<_> = iter.clone().collect();
        let mut reversed: Vec<_> = iter.rev().collect();
        reversed.reverse();
        assert_eq!(first, reversed);

        let again: Vec<_> = parent
            .subdivide_forward(Duration::hours(1), IntervalBoundary::Closed)
            .unwrap()
            .collect();
        assert_eq!(first, again);
    }

    #[test]
    fn test_nth_skips_slots() {
        let parent = p(h(0, 0), h(5, 0));
        let mut iter = parent
            .subdivide_forward(Duration::hours(1), IntervalBoundary::Closed)
            .unwrap();
        assert_eq!(iter.nth(3), Some(p(h(3, 0), h(4, 0))));
        assert_eq!(iter.next(), Some(p(h(4, 0), h(5, 0))));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.nth(10), None);
    }

    #[test]
    fn test_microsecond_steps_are_lazy() {
        let parent = p(h(0, 0), h(24 * 365, 0));
        let mut iter = parent
            .subdivide_forward(Duration::microseconds(1), IntervalBoundary::Closed)
            .unwrap();
        let last = iter.next_back().unwrap();
        assert_eq!(last.distance(), Duration::microseconds(1));
        assert_eq!(last.end, h(24 * 365, 0));
    }
}
