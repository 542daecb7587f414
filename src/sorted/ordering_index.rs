//! Binary min-heap of key-value pairs under a caller-supplied order.
//!
//! This module provides [`OrderingIndex`], the half of a
//! [`SortedMap`](super::SortedMap) that knows how to hand entries back in
//! order, and [`Snapshot`], a non-destructive ordered drain over it.
//!
//! # Overview
//!
//! Entries live in a `Vec` of [`SharedEntry`] handles laid out as an
//! implicit binary tree: the children of position `i` are `2i + 1` and
//! `2i + 2`. For every non-root position
//! `i` the heap invariant `!less(xs[i], xs[parent(i)])` holds, so the root
//! is always a minimum.
//!
//! - O(log N) push
//! - O(log N) pop of the minimum
//! - O(log N) removal at a known position
//! - O(1) len, `is_empty` and `peek_min`
//!
//! The index never looks entries up by key. Callers that need to remove a
//! particular key scan with [`OrderingIndex::position`] first.
//!
//! # Snapshots
//!
//! Popping rearranges the backing `Vec` in place. A [`Snapshot`] therefore
//! copies the backing sequence (as references) into storage of its own and
//! pops from that copy, leaving the index it came from untouched.
//!
//! # Examples
//!
//! ```rust
//! use heapmap::{KeyValue, OrderingIndex, order};
//!
//! let mut index = OrderingIndex::new(order::by_key());
//! index.push(KeyValue::new(3, "three"));
//! index.push(KeyValue::new(1, "one"));
//! index.push(KeyValue::new(2, "two"));
//!
//! let keys: Vec<i32> = index.snapshot().map(|entry| entry.key).collect();
//! assert_eq!(keys, vec![1, 2, 3]);
//! assert_eq!(index.len(), 3);
//!
//! assert_eq!(index.pop_min().map(|entry| entry.key), Ok(1));
//! ```

use std::fmt;
use std::iter::FusedIterator;

use super::{KeyValue, SharedEntry};
use crate::SortedMapError;

// =============================================================================
// Heap Primitives
// =============================================================================

#[inline]
const fn parent(index: usize) -> usize {
    (index - 1) / 2
}

/// Moves the element at `index` towards the root until its parent is not
/// greater than it.
fn sift_up<T, F>(elements: &mut [T], mut index: usize, less: &F)
where
    F: Fn(&T, &T) -> bool,
{
    while index > 0 {
        let parent = parent(index);
        if !less(&elements[index], &elements[parent]) {
            break;
        }
        elements.swap(index, parent);
        index = parent;
    }
}

/// Moves the element at `start` towards the leaves until neither child is
/// less than it. Returns `true` if the element moved.
fn sift_down<T, F>(elements: &mut [T], start: usize, less: &F) -> bool
where
    F: Fn(&T, &T) -> bool,
{
    let length = elements.len();
    let mut index = start;
    loop {
        let left = 2 * index + 1;
        if left >= length {
            break;
        }
        let right = left + 1;
        let smallest = if right < length && less(&elements[right], &elements[left]) {
            right
        } else {
            left
        };
        if !less(&elements[smallest], &elements[index]) {
            break;
        }
        elements.swap(index, smallest);
        index = smallest;
    }
    index > start
}

/// Removes the element at `index`, moving the last element into the hole
/// and repairing the heap around it.
fn remove_at<T, F>(elements: &mut Vec<T>, index: usize, less: &F) -> Option<T>
where
    F: Fn(&T, &T) -> bool,
{
    let last = elements.len().checked_sub(1)?;
    if index > last {
        return None;
    }
    elements.swap(index, last);
    let removed = elements.pop();
    if index < last && !sift_down(elements, index, less) {
        sift_up(elements, index, less);
    }
    removed
}

fn is_heap<T, F>(elements: &[T], less: &F) -> bool
where
    F: Fn(&T, &T) -> bool,
{
    (1..elements.len()).all(|index| !less(&elements[index], &elements[parent(index)]))
}

/// Lifts a comparator over pairs to one over shared handles.
#[inline]
fn shared<K, V, C>(
    less: &C,
) -> impl Fn(&SharedEntry<K, V>, &SharedEntry<K, V>) -> bool + '_
where
    C: Fn(&KeyValue<K, V>, &KeyValue<K, V>) -> bool,
{
    move |left: &SharedEntry<K, V>, right: &SharedEntry<K, V>| less(&**left, &**right)
}

// =============================================================================
// OrderingIndex Definition
// =============================================================================

/// A binary min-heap of [`KeyValue`] entries.
///
/// Entries are stored as [`SharedEntry`] handles so that a map can keep the
/// same allocation in its lookup table. Removal hands the handle back.
///
/// The comparator `less` is fixed at construction and must be a strict weak
/// ordering; with anything else the heap still holds every entry but hands
/// them back in an unspecified order.
///
/// # Time Complexity
///
/// | Operation    | Complexity |
/// |--------------|------------|
/// | `push`       | O(log N)   |
/// | `pop_min`    | O(log N)   |
/// | `remove_at`  | O(log N)   |
/// | `position`   | O(N)       |
/// | `peek_min`   | O(1)       |
/// | `snapshot`   | O(N)       |
/// | `len`        | O(1)       |
pub struct OrderingIndex<K, V, C> {
    entries: Vec<SharedEntry<K, V>>,
    less: C,
}

impl<K, V, C> OrderingIndex<K, V, C> {
    /// Returns the number of entries.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the index holds no entries.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns a minimal entry without removing it.
    #[inline]
    #[must_use]
    pub fn peek_min(&self) -> Option<&KeyValue<K, V>> {
        self.entries.first().map(|entry| &**entry)
    }

    /// Returns the backing sequence in heap layout.
    ///
    /// Only the first element is guaranteed to be in order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[SharedEntry<K, V>] {
        &self.entries
    }

    /// Iterates over the entries in heap layout, not in sorted order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, SharedEntry<K, V>> {
        self.entries.iter()
    }

    /// Returns the comparator.
    #[inline]
    pub const fn comparator(&self) -> &C {
        &self.less
    }

    /// Removes every entry, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the position of the first entry, in heap layout, that
    /// satisfies `predicate`.
    ///
    /// # Complexity
    ///
    /// O(N)
    pub fn position<P>(&self, mut predicate: P) -> Option<usize>
    where
        P: FnMut(&KeyValue<K, V>) -> bool,
    {
        self.entries.iter().position(|entry| predicate(&**entry))
    }
}

impl<K, V, C> OrderingIndex<K, V, C>
where
    C: Fn(&KeyValue<K, V>, &KeyValue<K, V>) -> bool,
{
    /// Creates an empty index ordered by `less`.
    #[inline]
    #[must_use]
    pub const fn new(less: C) -> Self {
        Self {
            entries: Vec::new(),
            less,
        }
    }

    /// Creates an empty index with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize, less: C) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            less,
        }
    }

    /// Adds an entry.
    ///
    /// # Complexity
    ///
    /// O(log N)
    pub fn push(&mut self, entry: KeyValue<K, V>) {
        self.push_shared(SharedEntry::new(entry));
    }

    /// Adds an entry that may also be held elsewhere.
    ///
    /// # Complexity
    ///
    /// O(log N)
    pub fn push_shared(&mut self, entry: SharedEntry<K, V>) {
        self.entries.push(entry);
        let last = self.entries.len() - 1;
        sift_up(&mut self.entries, last, &shared(&self.less));
    }

    /// Removes and returns a minimal entry.
    ///
    /// # Errors
    ///
    /// Returns [`SortedMapError::EmptyIndex`] if the index is empty.
    ///
    /// # Complexity
    ///
    /// O(log N)
    pub fn pop_min(&mut self) -> Result<SharedEntry<K, V>, SortedMapError> {
        remove_at(&mut self.entries, 0, &shared(&self.less)).ok_or(SortedMapError::EmptyIndex)
    }

    /// Removes and returns the entry at `index` in heap layout.
    ///
    /// Returns `None` if `index` is out of bounds.
    ///
    /// # Complexity
    ///
    /// O(log N)
    pub fn remove_at(&mut self, index: usize) -> Option<SharedEntry<K, V>> {
        remove_at(&mut self.entries, index, &shared(&self.less))
    }

    /// Returns `true` if every entry is ordered after its parent.
    ///
    /// # Complexity
    ///
    /// O(N)
    #[must_use]
    pub fn is_heap(&self) -> bool {
        is_heap(&self.entries, &shared(&self.less))
    }

    /// Returns an iterator over the entries in ascending order that leaves
    /// this index untouched.
    ///
    /// The snapshot owns a copy of the backing sequence, so popping from it
    /// never reorders the index.
    ///
    /// # Complexity
    ///
    /// O(N) to take the snapshot, then O(log N) per element.
    pub fn snapshot(&self) -> Snapshot<'_, K, V, C> {
        tracing::trace!(length = self.entries.len(), "taking ordering index snapshot");
        Snapshot {
            entries: self.entries.iter().map(|entry| &**entry).collect(),
            less: &self.less,
        }
    }

    /// Consumes the index and returns its entries in ascending order.
    ///
    /// # Complexity
    ///
    /// O(N log N)
    #[must_use]
    pub fn into_sorted_vec(mut self) -> Vec<SharedEntry<K, V>> {
        let mut sorted = Vec::with_capacity(self.entries.len());
        while let Ok(entry) = self.pop_min() {
            sorted.push(entry);
        }
        sorted
    }
}

/// Clones every entry into a fresh allocation, so the copy shares nothing
/// with `self`.
impl<K: Clone, V: Clone, C: Clone> Clone for OrderingIndex<K, V, C> {
    fn clone(&self) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .map(|entry| SharedEntry::new((**entry).clone()))
                .collect(),
            less: self.less.clone(),
        }
    }
}

impl<'a, K, V, C> IntoIterator for &'a OrderingIndex<K, V, C> {
    type Item = &'a SharedEntry<K, V>;
    type IntoIter = std::slice::Iter<'a, SharedEntry<K, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for OrderingIndex<K, V, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("OrderingIndex")
            .field("entries", &self.entries)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Snapshot
// =============================================================================

/// An ascending drain over a private copy of an [`OrderingIndex`].
///
/// Created by [`OrderingIndex::snapshot`].
pub struct Snapshot<'a, K, V, C> {
    entries: Vec<&'a KeyValue<K, V>>,
    less: &'a C,
}

impl<'a, K, V, C> Iterator for Snapshot<'a, K, V, C>
where
    C: Fn(&KeyValue<K, V>, &KeyValue<K, V>) -> bool,
{
    type Item = &'a KeyValue<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let less = self.less;
        remove_at(
            &mut self.entries,
            0,
            &|left: &&KeyValue<K, V>, right: &&KeyValue<K, V>| less(*left, *right),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.entries.len();
        (remaining, Some(remaining))
    }
}

impl<K, V, C> ExactSizeIterator for Snapshot<'_, K, V, C> where
    C: Fn(&KeyValue<K, V>, &KeyValue<K, V>) -> bool
{
}

impl<K, V, C> FusedIterator for Snapshot<'_, K, V, C> where
    C: Fn(&KeyValue<K, V>, &KeyValue<K, V>) -> bool
{
}

impl<K, V, C> Clone for Snapshot<'_, K, V, C> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            less: self.less,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
