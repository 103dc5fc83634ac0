// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Endpoint inclusion policy for period subdivision.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which endpoints of a parent period a subdivision may touch.
///
/// The policy refers to the period's own start and end, not to calendar
/// boundaries.  An excluded endpoint removes the single sub-period that
/// touches it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IntervalBoundary {
    /// `[start, end]`
    #[default]
    Closed,
    /// `(start, end)`
    Open,
    /// `(start, end]`
    LeftOpen,
    /// `[start, end)`
    RightOpen,
}

impl IntervalBoundary {
    #[inline]
    pub const fn includes_start(&self) -> bool {
        matches!(self, Self::Closed | Self::RightOpen)
    }

    #[inline]
    pub const fn includes_end(&self) -> bool {
        matches!(self, Self::Closed | Self::LeftOpen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_inclusion() {
        assert!(IntervalBoundary::Closed.includes_start());
        assert!(IntervalBoundary::Closed.includes_end());
        assert!(!IntervalBoundary::Open.includes_start());
        assert!(!IntervalBoundary::Open.includes_end());
        assert!(!IntervalBoundary::LeftOpen.includes_start());
        assert!(IntervalBoundary::LeftOpen.includes_end());
        assert!(IntervalBoundary::RightOpen.includes_start());
        assert!(!IntervalBoundary::RightOpen.includes_end());
    }
}
