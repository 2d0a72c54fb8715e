//! The indexed sequence interface shared by [`ArrayList`] and [`SubList`].
//!
//! Implementors provide five primitives (`len`, `get`, `set`, `insert`,
//! `remove`). Everything else (search, bulk edits, snapshots, equality and
//! hashing) is written once here in terms of those primitives, with linear
//! scans. A [`SubList`] therefore gets every derived operation for free, and
//! because each structural edit goes through its own `insert`/`remove`, its
//! bound stays correct.
//!
//! [`ArrayList`]: crate::ArrayList
//! [`SubList`]: crate::SubList

use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;
use std::marker::PhantomData;

use rustc_hash::FxHasher;

use crate::error::{ListError, check_position};

/// Seed of the order-sensitive hash fold.
const HASH_SEED: u64 = 1;
/// Multiplier of the order-sensitive hash fold.
const HASH_MULTIPLIER: u64 = 31;

/// Element equality: reference identity first, then value equality.
#[inline]
pub(crate) fn same<T: PartialEq>(a: &T, b: &T) -> bool {
    return std::ptr::eq(a, b) || a == b;
}

/// Hash a single element with a deterministic hasher.
#[inline]
pub fn element_hash<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = FxHasher::default();
    value.hash(&mut hasher);
    return hasher.finish();
}

/// Fold element hashes in order: `h = 31 * h + e`, seeded at `1`.
pub fn fold_hash<I: IntoIterator<Item = u64>>(hashes: I) -> u64 {
    let mut h = HASH_SEED;
    for e in hashes {
        h = h.wrapping_mul(HASH_MULTIPLIER).wrapping_add(e);
    }
    return h;
}

/// An ordered, zero-indexed, mutable sequence.
pub trait Sequence<T> {
    /// Number of elements.
    fn len(&self) -> usize;

    /// Element at `index`, for `index < len`.
    fn get(&self, index: usize) -> Result<&T, ListError>;

    /// Replace the element at `index`, returning the previous value.
    fn set(&mut self, index: usize, value: T) -> Result<T, ListError>;

    /// Insert `value` at `index` for `index <= len`, shifting later elements right.
    fn insert(&mut self, index: usize, value: T) -> Result<(), ListError>;

    /// Remove and return the element at `index`, shifting later elements left.
    fn remove(&mut self, index: usize) -> Result<T, ListError>;

    fn is_empty(&self) -> bool {
        return self.len() == 0;
    }

    /// Insert `value` at the end.
    fn append(&mut self, value: T) -> Result<(), ListError> {
        let end = self.len();
        return self.insert(end, value);
    }

    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        return self.index_of(value).is_some();
    }

    /// Index of the first element equal to `value`.
    fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        return (0..self.len()).find(|&i| self.get(i).is_ok_and(|e| same(e, value)));
    }

    /// Index of the last element equal to `value`.
    fn last_index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        return (0..self.len()).rev().find(|&i| self.get(i).is_ok_and(|e| same(e, value)));
    }

    /// Remove the first element equal to `value`. Returns whether one was found.
    fn remove_value(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self.index_of(value) {
            Some(index) => return self.remove(index).is_ok(),
            None => return false,
        }
    }

    fn contains_all(&self, values: &[T]) -> bool
    where
        T: PartialEq,
    {
        return values.iter().all(|v| self.contains(v));
    }

    /// Append every value in order. Returns whether anything was inserted.
    fn add_all<I>(&mut self, values: I) -> Result<bool, ListError>
    where
        I: IntoIterator<Item = T>,
        Self: Sized,
    {
        let end = self.len();
        return self.add_all_at(end, values);
    }

    /// Insert every value starting at `index`, keeping their order.
    ///
    /// `index` is validated before anything is inserted.
    fn add_all_at<I>(&mut self, index: usize, values: I) -> Result<bool, ListError>
    where
        I: IntoIterator<Item = T>,
        Self: Sized,
    {
        check_position(index, self.len())?;
        let mut at = index;
        for value in values {
            self.insert(at, value)?;
            at += 1;
        }
        return Ok(at > index);
    }

    /// Remove every element equal to any of `values`.
    fn remove_all(&mut self, values: &[T]) -> bool
    where
        T: PartialEq,
    {
        return self.remove_where(&mut |e| values.iter().any(|v| same(v, e)));
    }

    /// Keep only the elements equal to one of `values`.
    fn retain_all(&mut self, values: &[T]) -> bool
    where
        T: PartialEq,
    {
        return self.remove_where(&mut |e| !values.iter().any(|v| same(v, e)));
    }

    /// Remove every element matching `pred`, scanning from the front.
    /// Returns whether anything was removed.
    fn remove_where(&mut self, pred: &mut dyn FnMut(&T) -> bool) -> bool {
        let mut modified = false;
        let mut i = 0;
        while i < self.len() {
            let hit = match self.get(i) {
                Ok(e) => pred(e),
                Err(_) => break,
            };
            if !hit {
                i += 1;
                continue;
            }
            if self.remove(i).is_err() {
                break;
            }
            modified = true;
        }
        return modified;
    }

    /// Remove every element, from the high end down.
    fn clear(&mut self) {
        for i in (0..self.len()).rev() {
            if self.remove(i).is_err() {
                break;
            }
        }
    }

    /// Snapshot of the elements in order.
    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
        Self: Sized,
    {
        return self.iter().cloned().collect();
    }

    /// Copy the elements into `buf` if it is long enough, else into a fresh
    /// buffer of exactly `len` slots.
    ///
    /// When `buf` is longer than the sequence, the slot just past the copied
    /// range is set to `None`; slots after that are left untouched.
    fn to_array_in(&self, buf: Vec<Option<T>>) -> Vec<Option<T>>
    where
        T: Clone,
        Self: Sized,
    {
        let len = self.len();
        let mut out = buf;
        if out.len() < len {
            out = Vec::with_capacity(len);
            out.resize_with(len, || None);
        }
        for (slot, e) in out.iter_mut().zip(self.iter()) {
            *slot = Some(e.clone());
        }
        if out.len() > len {
            out[len] = None;
        }
        return out;
    }

    /// Same length and pairwise equal elements, in order.
    fn content_eq(&self, other: &dyn Sequence<T>) -> bool
    where
        T: PartialEq,
    {
        if self.len() != other.len() {
            return false;
        }
        return (0..self.len()).all(|i| match (self.get(i), other.get(i)) {
            (Ok(a), Ok(b)) => same(a, b),
            _ => false,
        });
    }

    /// Order-sensitive hash of the contents, see [`fold_hash`].
    fn hash_code(&self) -> u64
    where
        T: Hash,
        Self: Sized,
    {
        return fold_hash(self.iter().map(element_hash));
    }

    /// Like [`hash_code`](Sequence::hash_code) with a caller-supplied element hash,
    /// e.g. one that maps absent elements to `0`.
    fn hash_code_with<F>(&self, f: F) -> u64
    where
        F: FnMut(&T) -> u64,
        Self: Sized,
    {
        return fold_hash(self.iter().map(f));
    }

    /// Read-only iterator over the elements.
    fn iter(&self) -> Iter<'_, T, Self>
    where
        Self: Sized,
    {
        return Iter::new(self);
    }
}

/// Read-only, double-ended iterator over any [`Sequence`].
pub struct Iter<'a, T, S: ?Sized> {
    seq: &'a S,
    front: usize,
    back: usize,
    _marker: PhantomData<&'a T>,
}

impl<'a, T, S: Sequence<T> + ?Sized> Iter<'a, T, S> {
    pub fn new(seq: &'a S) -> Iter<'a, T, S> {
        return Iter {
            seq,
            front: 0,
            back: seq.len(),
            _marker: PhantomData,
        };
    }
}

impl<'a, T: 'a, S: Sequence<T> + ?Sized> Iterator for Iter<'a, T, S> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.front >= self.back {
            return None;
        }
        let item = self.seq.get(self.front).ok();
        self.front += 1;
        return item;
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        return (n, Some(n));
    }
}

impl<'a, T: 'a, S: Sequence<T> + ?Sized> DoubleEndedIterator for Iter<'a, T, S> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        return self.seq.get(self.back).ok();
    }
}

impl<'a, T: 'a, S: Sequence<T> + ?Sized> ExactSizeIterator for Iter<'a, T, S> {}

impl<'a, T: 'a, S: Sequence<T> + ?Sized> FusedIterator for Iter<'a, T, S> {}
