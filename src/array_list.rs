//! Growable array list.
//!
//! `ArrayList` owns its elements in a contiguous buffer and is the single
//! source of truth for contents and length. Cursors and sub-lists built from
//! it only borrow it.
//!
//! - get/set: O(1)
//! - push: O(1) amortized
//! - insert/remove at `i`: O(len - i)

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::cursor::ListCursor;
use crate::error::{ListError, check_index, check_position};
use crate::sequence::Sequence;
use crate::sub_list::SubList;

/// An indexed, growable list.
#[derive(Clone)]
pub struct ArrayList<T> {
    items: Vec<T>,
}

impl<T> ArrayList<T> {
    pub fn new() -> ArrayList<T> {
        return ArrayList { items: Vec::new() };
    }

    /// Create an empty list with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> ArrayList<T> {
        return ArrayList {
            items: Vec::with_capacity(capacity),
        };
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        return self.items.capacity();
    }

    /// Append `value`. Never fails.
    #[inline]
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        return &self.items;
    }

    pub fn into_vec(self) -> Vec<T> {
        return self.items;
    }

    /// Forward cursor from the start.
    pub fn iterator(&mut self) -> ListCursor<'_, T, ArrayList<T>> {
        return self.cursor();
    }

    /// Bidirectional cursor from the start.
    pub fn cursor(&mut self) -> ListCursor<'_, T, ArrayList<T>> {
        return ListCursor::at_start(self);
    }

    /// Bidirectional cursor starting at `index`, for `index <= len`.
    pub fn list_iterator(&mut self, index: usize) -> Result<ListCursor<'_, T, ArrayList<T>>, ListError> {
        return ListCursor::new(self, index);
    }

    /// Live window over `from..to`.
    pub fn sub_list(&mut self, from: usize, to: usize) -> Result<SubList<'_, T>, ListError> {
        return SubList::new(self, from, to);
    }
}

impl<T> Sequence<T> for ArrayList<T> {
    #[inline]
    fn len(&self) -> usize {
        return self.items.len();
    }

    #[inline]
    fn get(&self, index: usize) -> Result<&T, ListError> {
        check_index(index, self.items.len())?;
        return Ok(&self.items[index]);
    }

    fn set(&mut self, index: usize, value: T) -> Result<T, ListError> {
        check_index(index, self.items.len())?;
        return Ok(std::mem::replace(&mut self.items[index], value));
    }

    fn insert(&mut self, index: usize, value: T) -> Result<(), ListError> {
        check_position(index, self.items.len())?;
        self.items.insert(index, value);
        return Ok(());
    }

    fn remove(&mut self, index: usize) -> Result<T, ListError> {
        check_index(index, self.items.len())?;
        return Ok(self.items.remove(index));
    }

    fn append(&mut self, value: T) -> Result<(), ListError> {
        self.items.push(value);
        return Ok(());
    }

    fn clear(&mut self) {
        self.items.clear();
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        return self.items.clone();
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> ArrayList<T> {
        return ArrayList::new();
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_list().entries(self.items.iter()).finish();
    }
}

impl<T: PartialEq> PartialEq for ArrayList<T> {
    fn eq(&self, other: &ArrayList<T>) -> bool {
        return self.content_eq(other);
    }
}

impl<T: Eq> Eq for ArrayList<T> {}

impl<'a, T: PartialEq> PartialEq<SubList<'a, T>> for ArrayList<T> {
    fn eq(&self, other: &SubList<'a, T>) -> bool {
        return self.content_eq(other);
    }
}

impl<T: Hash> Hash for ArrayList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl<T> From<Vec<T>> for ArrayList<T> {
    fn from(items: Vec<T>) -> ArrayList<T> {
        return ArrayList { items };
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> ArrayList<T> {
        return ArrayList {
            items: iter.into_iter().collect(),
        };
    }
}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for ArrayList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        return self.items.into_iter();
    }
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        return self.items.iter();
    }
}
