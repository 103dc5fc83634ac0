// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Ordered collections of periods.

use crate::Period;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Endpoint used as the sort key.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SortKey {
    Start,
    End,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// A sequence of periods in insertion order.
///
/// Duplicates and overlaps are kept as-is; coalescing only happens through
/// [`PeriodSet::gaps`] or an explicit [`Period::merge`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PeriodSet {
    periods: Vec<Period>,
}

impl PeriodSet {
    pub fn new(periods: Vec<Period>) -> Self {
        Self { periods }
    }

    pub fn all(&self) -> &[Period] {
        &self.periods
    }

    pub fn len(&self) -> usize {
        self.periods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    pub fn first(&self) -> Option<&Period> {
        self.periods.first()
    }

    pub fn last(&self) -> Option<&Period> {
        self.periods.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Period> {
        self.periods.iter()
    }

    /// Periods for which `predicate` holds, order preserved.
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&Period) -> bool,
    {
        self.periods.iter().copied().filter(|p| predicate(p)).collect()
    }

    pub fn map<T, F>(&self, f: F) -> Vec<T>
    where
        F: FnMut(&Period) -> T,
    {
        self.periods.iter().map(f).collect()
    }

    /// Append `periods` after the current members.
    pub fn add<I>(&self, periods: I) -> Self
    where
        I: IntoIterator<Item = Period>,
    {
        self.periods.iter().copied().chain(periods).collect()
    }

    /// Concatenate two sets; no deduplication or coalescing.
    pub fn merge_all(&self, other: &Self) -> Self {
        self.add(other.periods.iter().copied())
    }

    /// Ascending by start.
    pub fn sort(&self) -> Self {
        self.sort_by(SortKey::Start, SortOrder::Ascending)
    }

    /// Stable sort: members with equal keys keep their relative order.
    pub fn sort_by(&self, key: SortKey, order: SortOrder) -> Self {
        let mut periods = self.periods.clone();
        periods.sort_by(|a, b| {
            let ordering = match key {
                SortKey::Start => a.start.cmp(&b.start),
                SortKey::End => a.end.cmp(&b.end),
            };
            match order {
                SortOrder::Ascending => ordering,
                SortOrder::Descending => ordering.reverse(),
            }
        });
        Self::new(periods)
    }

    /// Uncovered spans between the merged coverage of the members.
    ///
    /// Members are normalised forward and swept in ascending start order;
    /// overlapping or abutting members are merged into a running span, and a
    /// gap is emitted each time the next member starts after that span ends.
    ///
    /// # Examples
    ///
    /// ```
    /// use tempora::{Instant, Period, PeriodSet};
    ///
    /// let at = Instant::from_unix_seconds;
    /// let set = PeriodSet::new(vec![
    ///     Period::new(at(0), at(10)),
    ///     Period::new(at(30), at(20)),
    /// ]);
    /// let gaps = set.gaps();
    /// assert_eq!(gaps.all(), &[Period::new(at(10), at(20))]);
    /// ```
    pub fn gaps(&self) -> Self {
        let mut periods: Vec<Period> = self.periods.iter().map(Period::normalized).collect();
        periods.sort_by(|a, b| a.start.cmp(&b.start));

        let mut members = periods.into_iter();
        let Some(mut covered) = members.next() else {
            return Self::default();
        };

        let mut gaps = Vec::new();
        for period in members {
            if covered.overlaps(&period) || covered.abuts(&period) {
                covered = Period::new(covered.start, covered.end.max(period.end));
            } else {
                gaps.push(Period::new(covered.end, period.start));
                covered = period;
            }
        }
        tracing::trace!(members = self.len(), gaps = gaps.len(), "computed period gaps");
        Self::new(gaps)
    }
}

impl FromIterator<Period> for PeriodSet {
    fn from_iter<I: IntoIterator<Item = Period>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Extend<Period> for PeriodSet {
    fn extend<I: IntoIterator<Item = Period>>(&mut self, iter: I) {
        self.periods.extend(iter);
    }
}

impl IntoIterator for PeriodSet {
    type Item = Period;
    type IntoIter = std::vec::IntoIter<Period>;

    fn into_iter(self) -> Self::IntoIter {
        self.periods.into_iter()
    }
}

impl<'a> IntoIterator for &'a PeriodSet {
    type Item = &'a Period;
    type IntoIter = std::slice::Iter<'a, Period>;

    fn into_iter(self) -> Self::IntoIter {
        self.periods.iter()
    }
}

impl From<Vec<Period>> for PeriodSet {
    fn from(periods: Vec<Period>) -> Self {
        Self::new(periods)
    }
}
