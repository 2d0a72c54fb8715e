//! Errors shared by lists, windows and cursors.

use thiserror::Error;

/// Error returned by every fallible list, sub-list and cursor operation.
///
/// A failed call never commits a partial change: the structure is left exactly
/// as it was before the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// An index argument was outside the operation's valid bound.
    #[error("index {index} out of range for length {len}")]
    OutOfRange { index: usize, len: usize },

    /// A window range was not contained in `0..=len`, or `from > to`.
    #[error("range {from}..{to} out of range for length {len}")]
    InvalidRange { from: usize, to: usize, len: usize },

    /// `next` or `previous` was called with no element in that direction.
    #[error("no element left in this direction")]
    Exhausted,

    /// `remove` or `set` was called on a cursor with no current element.
    #[error("cursor has no current element")]
    NoCurrent,

    /// A window was requested over a missing parent.
    #[error("sub-list requires a parent sequence")]
    MissingParent,
}

impl ListError {
    /// True for both index and range errors.
    pub fn is_out_of_range(&self) -> bool {
        return matches!(self, ListError::OutOfRange { .. } | ListError::InvalidRange { .. });
    }
}

/// Check `index < len`, for reads, writes and removals.
#[inline]
pub(crate) fn check_index(index: usize, len: usize) -> Result<(), ListError> {
    if index >= len {
        return Err(ListError::OutOfRange { index, len });
    }
    return Ok(());
}

/// Check `index <= len`, for insertions and cursor starting points.
#[inline]
pub(crate) fn check_position(index: usize, len: usize) -> Result<(), ListError> {
    if index > len {
        return Err(ListError::OutOfRange { index, len });
    }
    return Ok(());
}

/// Check `from <= to <= len`, for window construction.
#[inline]
pub(crate) fn check_range(from: usize, to: usize, len: usize) -> Result<(), ListError> {
    if from > to || to > len {
        return Err(ListError::InvalidRange { from, to, len });
    }
    return Ok(());
}
