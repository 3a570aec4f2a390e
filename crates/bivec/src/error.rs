// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for bivec.

use thiserror::Error;

/// How stale an invalidated cursor is.
///
/// Ordered from least to most severe, so `Severity::Severe > Severity::Mild`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(u8)]
pub enum Severity {
    /// The container changed shape but the buffer did not move, or the cursor
    /// was a past-the-end position that never referred to an element.
    Mild = 0,

    /// The buffer was reallocated; the position still exists but every
    /// address derived from the old buffer is gone.
    Moderate = 1,

    /// The position referred to an element that no longer exists.
    Severe = 2,
}

impl core::fmt::Display for Severity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let label = match self {
            Self::Mild => "Mild",
            Self::Moderate => "Moderate",
            Self::Severe => "Severe",
        };

        f.write_str(label)
    }
}

/// Errors that can occur when working with a [`BiVec`](crate::BiVec) or its cursors.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum BiVecError {
    /// Indexed access beyond the occupied range.
    #[error("index {index} out of range for length {len}")]
    OutOfRange {
        /// The requested index.
        index: usize,
        /// The container length at the time of the access.
        len: usize,
    },

    /// `pop_*`, `front*` or `back*` on a container with no elements.
    #[error("container is empty")]
    Empty,

    /// The cursor was issued before a structural mutation of its container.
    #[error("invalid cursor: {0}")]
    InvalidCursor(Severity),

    /// Cursor arithmetic would leave the `0..=len` position range.
    #[error("cursor at {index} moved by {delta} leaves positions 0..={len}")]
    CursorOutOfBounds {
        /// Position of the cursor before the move.
        index: usize,
        /// The requested displacement.
        delta: isize,
        /// The container length at the time of the move.
        len: usize,
    },

    /// The cursor was issued by a different container.
    #[error("cursor belongs to a different container")]
    ForeignCursor,
}
