//! Bidirectional cursors.
//!
//! A cursor sits *between* elements: position `p` means `next` yields element
//! `p` and `previous` yields element `p - 1`. The element most recently
//! yielded by either call is the cursor's "last returned" element, the only
//! one `remove` and `set` may touch. `add` inserts at the position and clears
//! the last returned element, as does `remove`.
//!
//! Structural edits (`remove`, `add`) return a [`Delta`]. A layer that wraps a
//! cursor (e.g. a sub-list cursor) applies the delta to its own bookkeeping,
//! so no counter is shared between layers.

use std::marker::PhantomData;

use crate::error::{ListError, check_position};
use crate::sequence::Sequence;

/// The cursor interface.
pub trait Cursor<T> {
    /// Whether `next` would yield an element.
    fn has_next(&self) -> bool;

    /// Whether `previous` would yield an element.
    fn has_previous(&self) -> bool;

    /// Yield the element after the cursor and step past it.
    fn next(&mut self) -> Result<&T, ListError>;

    /// Step back and yield the element before the cursor.
    fn previous(&mut self) -> Result<&T, ListError>;

    /// Index the next call to `next` would yield.
    fn next_index(&self) -> usize;

    /// Index the next call to `previous` would yield, `None` at the start.
    fn previous_index(&self) -> Option<usize>;

    /// Remove the last returned element.
    fn remove(&mut self) -> Result<Delta, ListError>;

    /// Replace the last returned element, returning the old value.
    fn set(&mut self, value: T) -> Result<T, ListError>;

    /// Insert `value` at the cursor and step past it.
    fn add(&mut self, value: T) -> Result<Delta, ListError>;
}

/// Structural change made by a cursor edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delta {
    /// Change in the length of the edited sequence.
    pub len: isize,
    /// Change in the cursor position.
    pub position: isize,
}

impl Delta {
    /// An insertion before the cursor.
    pub const ADDED: Delta = Delta { len: 1, position: 1 };
    /// A removal of the element before the cursor (after `next`).
    pub const REMOVED_BEHIND: Delta = Delta { len: -1, position: -1 };
    /// A removal of the element after the cursor (after `previous`).
    pub const REMOVED_AHEAD: Delta = Delta { len: -1, position: 0 };

    /// Apply the length change to a bound or length counter.
    #[inline]
    pub fn apply_len(&self, value: usize) -> usize {
        return shift(value, self.len);
    }

    /// Apply the position change to a cursor position.
    #[inline]
    pub fn apply_position(&self, value: usize) -> usize {
        return shift(value, self.position);
    }
}

#[inline(always)]
fn shift(value: usize, by: isize) -> usize {
    debug_assert!(value.checked_add_signed(by).is_some());
    return value.wrapping_add_signed(by);
}

/// A cursor over any [`Sequence`].
///
/// Holds the sequence mutably for its lifetime, so the sequence cannot change
/// behind the cursor's back.
pub struct ListCursor<'a, T, S: ?Sized> {
    seq: &'a mut S,
    position: usize,
    last_returned: Option<usize>,
    _marker: PhantomData<fn() -> T>,
}

impl<'a, T, S: Sequence<T> + ?Sized> ListCursor<'a, T, S> {
    /// Create a cursor at `index`, for `index <= seq.len()`.
    pub fn new(seq: &'a mut S, index: usize) -> Result<ListCursor<'a, T, S>, ListError> {
        check_position(index, seq.len())?;
        return Ok(ListCursor::starting_at(seq, index));
    }

    /// Create a cursor before the first element.
    pub fn at_start(seq: &'a mut S) -> ListCursor<'a, T, S> {
        return ListCursor::starting_at(seq, 0);
    }

    /// Create a cursor at an index the caller already knows is `<= seq.len()`.
    pub(crate) fn starting_at(seq: &'a mut S, index: usize) -> ListCursor<'a, T, S> {
        debug_assert!(index <= seq.len());
        return ListCursor {
            seq,
            position: index,
            last_returned: None,
            _marker: PhantomData,
        };
    }

    /// Length of the underlying sequence.
    #[inline]
    pub fn len(&self) -> usize {
        return self.seq.len();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        return self.seq.is_empty();
    }

    /// Index of the last returned element, if any.
    #[inline]
    pub fn last_returned(&self) -> Option<usize> {
        return self.last_returned;
    }
}

impl<'a, T, S: Sequence<T> + ?Sized> Cursor<T> for ListCursor<'a, T, S> {
    #[inline]
    fn has_next(&self) -> bool {
        return self.position < self.seq.len();
    }

    #[inline]
    fn has_previous(&self) -> bool {
        return self.position > 0;
    }

    fn next(&mut self) -> Result<&T, ListError> {
        if !self.has_next() {
            return Err(ListError::Exhausted);
        }
        let index = self.position;
        self.position += 1;
        self.last_returned = Some(index);
        return self.seq.get(index);
    }

    fn previous(&mut self) -> Result<&T, ListError> {
        if !self.has_previous() {
            return Err(ListError::Exhausted);
        }
        self.position -= 1;
        self.last_returned = Some(self.position);
        return self.seq.get(self.position);
    }

    #[inline]
    fn next_index(&self) -> usize {
        return self.position;
    }

    #[inline]
    fn previous_index(&self) -> Option<usize> {
        return self.position.checked_sub(1);
    }

    fn remove(&mut self) -> Result<Delta, ListError> {
        let index = self.last_returned.ok_or(ListError::NoCurrent)?;
        self.seq.remove(index)?;
        self.last_returned = None;
        // Keep a forward scan from skipping the successor.
        let delta = if index < self.position {
            Delta::REMOVED_BEHIND
        } else {
            Delta::REMOVED_AHEAD
        };
        self.position = delta.apply_position(self.position);
        tracing::trace!(index, position = self.position, "cursor removed element");
        return Ok(delta);
    }

    fn set(&mut self, value: T) -> Result<T, ListError> {
        let index = self.last_returned.ok_or(ListError::NoCurrent)?;
        return self.seq.set(index, value);
    }

    fn add(&mut self, value: T) -> Result<Delta, ListError> {
        self.seq.insert(self.position, value)?;
        self.last_returned = None;
        let delta = Delta::ADDED;
        self.position = delta.apply_position(self.position);
        tracing::trace!(position = self.position, "cursor inserted element");
        return Ok(delta);
    }
}
