//! Live sub-range windows.
//!
//! A [`SubList`] is a non-owning window `[offset, bound)` over a parent
//! [`Sequence`], which may be an [`ArrayList`] or another window. Reads and
//! writes translate through `offset`; insertions and removals are forwarded
//! to the parent and then move `bound` by one, so the window keeps covering
//! the same logical range.
//!
//! The window holds its parent by `&mut`, so nothing can edit the parent
//! while the window is alive except through the window itself. A window
//! over a window forwards to its parent window, so every layer of a nested
//! chain sees structural edits made through the innermost one.
//!
//! [`SubListCursor`] wraps a cursor over the parent and borrows the window's
//! `bound`, applying each [`Delta`] the wrapped cursor reports.
//!
//! [`ArrayList`]: crate::ArrayList

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::array_list::ArrayList;
use crate::cursor::{Cursor, Delta, ListCursor};
use crate::error::{ListError, check_index, check_position, check_range};
use crate::sequence::Sequence;

/// A live window over `offset..bound` of a parent sequence.
pub struct SubList<'a, T> {
    parent: &'a mut dyn Sequence<T>,
    offset: usize,
    bound: usize,
}

impl<'a, T> SubList<'a, T> {
    /// Window over `from..to` of `parent`, for `from <= to <= parent.len()`.
    pub fn new(parent: &'a mut dyn Sequence<T>, from: usize, to: usize) -> Result<SubList<'a, T>, ListError> {
        if let Err(err) = check_range(from, to, parent.len()) {
            tracing::debug!(%err, "rejected sub-list range");
            return Err(err);
        }
        tracing::trace!(from, to, "created sub-list");
        return Ok(SubList {
            parent,
            offset: from,
            bound: to,
        });
    }

    /// Like [`SubList::new`], failing with [`ListError::MissingParent`] on `None`.
    pub fn from_parent(
        parent: Option<&'a mut dyn Sequence<T>>,
        from: usize,
        to: usize,
    ) -> Result<SubList<'a, T>, ListError> {
        match parent {
            Some(parent) => return SubList::new(parent, from, to),
            None => {
                tracing::debug!("rejected sub-list without parent");
                return Err(ListError::MissingParent);
            }
        }
    }

    /// Start of the window in parent coordinates.
    #[inline]
    pub fn offset(&self) -> usize {
        return self.offset;
    }

    /// End (exclusive) of the window in parent coordinates.
    #[inline]
    pub fn bound(&self) -> usize {
        return self.bound;
    }

    /// Window over `from..to` of this window.
    pub fn sub_list(&mut self, from: usize, to: usize) -> Result<SubList<'_, T>, ListError> {
        return SubList::new(self, from, to);
    }

    /// Forward cursor from the start of the window.
    pub fn iterator(&mut self) -> SubListCursor<'_, 'a, T> {
        return self.cursor();
    }

    /// Bidirectional cursor from the start of the window.
    pub fn cursor(&mut self) -> SubListCursor<'_, 'a, T> {
        return SubListCursor {
            inner: ListCursor::starting_at(&mut *self.parent, self.offset),
            bound: &mut self.bound,
            offset: self.offset,
            position: 0,
        };
    }

    /// Bidirectional cursor starting at window index `index`, for `index <= len`.
    pub fn list_iterator(&mut self, index: usize) -> Result<SubListCursor<'_, 'a, T>, ListError> {
        check_position(index, self.len())?;
        let inner = ListCursor::new(&mut *self.parent, self.offset + index)?;
        return Ok(SubListCursor {
            inner,
            bound: &mut self.bound,
            offset: self.offset,
            position: index,
        });
    }
}

impl<'a, T> Sequence<T> for SubList<'a, T> {
    #[inline]
    fn len(&self) -> usize {
        return self.bound - self.offset;
    }

    fn get(&self, index: usize) -> Result<&T, ListError> {
        check_index(index, self.len())?;
        return self.parent.get(self.offset + index);
    }

    fn set(&mut self, index: usize, value: T) -> Result<T, ListError> {
        check_index(index, self.len())?;
        return self.parent.set(self.offset + index, value);
    }

    fn insert(&mut self, index: usize, value: T) -> Result<(), ListError> {
        check_position(index, self.len())?;
        self.parent.insert(self.offset + index, value)?;
        self.bound += 1;
        return Ok(());
    }

    fn remove(&mut self, index: usize) -> Result<T, ListError> {
        check_index(index, self.len())?;
        let value = self.parent.remove(self.offset + index)?;
        self.bound -= 1;
        return Ok(value);
    }
}

impl<'a, T: fmt::Debug> fmt::Debug for SubList<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_list().entries(self.iter()).finish();
    }
}

impl<'a, 'b, T: PartialEq> PartialEq<SubList<'b, T>> for SubList<'a, T> {
    fn eq(&self, other: &SubList<'b, T>) -> bool {
        return self.content_eq(other);
    }
}

impl<'a, T: PartialEq> PartialEq<ArrayList<T>> for SubList<'a, T> {
    fn eq(&self, other: &ArrayList<T>) -> bool {
        return self.content_eq(other);
    }
}

impl<'a, T: Hash> Hash for SubList<'a, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

/// A cursor over a [`SubList`].
///
/// Positions are window-relative. The wrapped parent cursor owns the
/// last-returned bookkeeping; this layer only translates positions and keeps
/// the window's bound in step with `remove` and `add`.
pub struct SubListCursor<'b, 'a, T> {
    inner: ListCursor<'b, T, dyn Sequence<T> + 'a>,
    bound: &'b mut usize,
    offset: usize,
    position: usize,
}

impl<'b, 'a, T> SubListCursor<'b, 'a, T> {
    /// Current length of the window.
    #[inline]
    pub fn len(&self) -> usize {
        return *self.bound - self.offset;
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        return self.len() == 0;
    }

    /// Apply a structural change reported by the wrapped cursor.
    fn apply(&mut self, delta: Delta) -> Delta {
        *self.bound = delta.apply_len(*self.bound);
        self.position = delta.apply_position(self.position);
        return delta;
    }
}

impl<'b, 'a, T> Cursor<T> for SubListCursor<'b, 'a, T> {
    #[inline]
    fn has_next(&self) -> bool {
        return self.position < self.len();
    }

    #[inline]
    fn has_previous(&self) -> bool {
        return self.position > 0;
    }

    fn next(&mut self) -> Result<&T, ListError> {
        if !self.has_next() || !self.inner.has_next() {
            return Err(ListError::Exhausted);
        }
        self.position += 1;
        return self.inner.next();
    }

    fn previous(&mut self) -> Result<&T, ListError> {
        if !self.has_previous() || !self.inner.has_previous() {
            return Err(ListError::Exhausted);
        }
        self.position -= 1;
        return self.inner.previous();
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
        let delta = self.inner.remove()?;
        return Ok(self.apply(delta));
    }

    fn set(&mut self, value: T) -> Result<T, ListError> {
        return self.inner.set(value);
    }

    fn add(&mut self, value: T) -> Result<Delta, ListError> {
        let delta = self.inner.add(value)?;
        return Ok(self.apply(delta));
    }
}
