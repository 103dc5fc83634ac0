// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

use crate::{Epoch, Instant};

/// Errors returned by period, leap-second and epoch operations.
///
/// All variants describe a programming or input error. None of them is
/// transient, and no operation returns a partial result alongside one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An argument was rejected before any computation took place
    /// (non-positive subdivision step, unordered leap-second table, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The operation is undefined for the given operands.
    #[error("invalid operation: {0}")]
    InvalidOperation(String),
    /// A timestamp was requested for an instant preceding the epoch origin.
    #[error("{instant} precedes the {epoch} epoch origin {origin}")]
    Range {
        epoch: Epoch,
        origin: Instant,
        instant: Instant,
    },
}

/// Crate-wide result alias.
pub type Result<T, E = Error> = std::result::Result<T, E>;
