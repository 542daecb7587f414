//! Hash map with caller-defined ordered enumeration.
//!
//! This module provides [`SortedMap`], which pairs a `HashMap` lookup table
//! with an [`OrderingIndex`] holding the same entries.
//!
//! # Overview
//!
//! Point reads go to the lookup table and never touch the heap. Mutations
//! update both halves before returning, so that at every method boundary the
//! two hold exactly the same keys with exactly the same values. Ordered
//! enumeration drains a [`Snapshot`] of the heap, which never disturbs the
//! map itself.
//!
//! Each pair is allocated once, as a [`SharedEntry`], and both halves hold a
//! handle to it. Only the key is cloned, to serve as the table's key.
//!
//! Removing a key has to find its entry inside the heap. The heap keeps no
//! key-to-position map, because positions move on every push and pop, so the
//! search is a linear scan by address.
//!
//! # Examples
//!
//! ```rust
//! use heapmap::{KeyValue, SortedMap};
//!
//! let mut ages = SortedMap::new(|left: &KeyValue<&str, u32>, right: &KeyValue<&str, u32>| {
//!     left.key < right.key
//! });
//! ages.insert("Bob", 42);
//! ages.insert("Alice", 30);
//! ages.insert("Charlie", 25);
//!
//! assert_eq!(ages.get("Bob"), Some(&42));
//! assert_eq!(ages.collect_keys(), vec!["Alice", "Bob", "Charlie"]);
//!
//! // Replacing keeps one entry per key
//! ages.insert("Alice", 35);
//! assert_eq!(ages.len(), 3);
//! assert_eq!(ages.collect_values(), vec![35, 42, 25]);
//! ```

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;

use super::builder::missing_comparator;
use super::ordering_index::{OrderingIndex, Snapshot};
use super::{KeyValue, SharedEntry, SortedMapBuilder};
use crate::{DefaultHashBuilder, SortedMapError};

// =============================================================================
// SortedMap Definition
// =============================================================================

/// A hash map whose entries can be enumerated in the order of a
/// caller-supplied comparator.
///
/// The comparator `less(a, b)` sees whole [`KeyValue`] pairs, so entries can
/// be ordered by key, by value, or by any mix of the two. It is fixed for the
/// lifetime of the map; to re-sort, build a new map with
/// [`SortedMap::from_map`].
///
/// Values carry no bounds beyond what the comparator asks of them. Keys must
/// be `Hash + Eq + Clone`: the lookup table owns a copy of each key, while
/// the pair itself is shared between the two halves.
///
/// # Time Complexity
///
/// | Operation           | Complexity            |
/// |---------------------|-----------------------|
/// | `new`               | O(1)                  |
/// | `from_map`          | O(N log N)            |
/// | `get`               | O(1)                  |
/// | `contains_key`      | O(1)                  |
/// | `insert` (new key)  | O(log N)              |
/// | `insert` (replace)  | O(N)                  |
/// | `delete`            | O(N)                  |
/// | `first`             | O(1)                  |
/// | `pop_first`         | O(log N)              |
/// | `iter`              | O(N) + O(log N) each  |
/// | `collect_all`       | O(N log N)            |
/// | `collect`           | O(N)                  |
/// | `len`               | O(1)                  |
///
/// # Concurrency
///
/// Entries are shared through `Rc`, so the map is not `Send` unless the
/// `arc` feature is enabled. There is no internal locking; share a map
/// between threads by wrapping the whole map in one lock, since both halves
/// change together on every mutation.
pub struct SortedMap<K, V, C, S = DefaultHashBuilder> {
    /// Source of truth for membership and current values
    table: HashMap<K, SharedEntry<K, V>, S>,
    /// The same entries in heap order
    index: OrderingIndex<K, V, C>,
}

impl<K, V, C, S> SortedMap<K, V, C, S> {
    /// Returns the number of entries in the map.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if the map contains no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns the comparator the map was built with.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use heapmap::{KeyValue, SortedMap, order};
    ///
    /// let map: SortedMap<&str, i32, _> = SortedMap::new(order::by_value());
    /// let less = map.comparator();
    /// assert!(less(&KeyValue::new("Alice", 30), &KeyValue::new("Bob", 42)));
    /// ```
    #[inline]
    pub const fn comparator(&self) -> &C {
        self.index.comparator()
    }

    /// Returns the hasher of the lookup table.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use heapmap::{SortedMap, order};
    /// use std::hash::{BuildHasher, RandomState};
    ///
    /// let hasher = RandomState::new();
    /// let map: SortedMap<&str, i32, _, _> = SortedMap::with_hasher(order::by_key(), hasher.clone());
    /// assert_eq!(map.hasher().hash_one("Alice"), hasher.hash_one("Alice"));
    /// ```
    #[inline]
    pub fn hasher(&self) -> &S {
        self.table.hasher()
    }

    /// Removes every entry from both the lookup table and the heap.
    pub fn clear(&mut self) {
        self.table.clear();
        self.index.clear();
    }

    #[inline]
    fn debug_assert_consistent(&self) {
        debug_assert_eq!(
            self.table.len(),
            self.index.len(),
            "lookup table and ordering index disagree on size"
        );
    }
}

/// Takes a pair back once neither half holds it any more.
fn unshare<K, V>(entry: SharedEntry<K, V>) -> Option<KeyValue<K, V>> {
    let entry = SharedEntry::into_inner(entry);
    debug_assert!(entry.is_some(), "entry still shared after leaving both halves");
    entry
}

impl<K, V, C> SortedMap<K, V, C>
where
    C: Fn(&KeyValue<K, V>, &KeyValue<K, V>) -> bool,
{
    /// Creates an empty map ordered by `less`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use heapmap::{SortedMap, order};
    ///
    /// let map: SortedMap<String, i32, _> = SortedMap::new(order::by_key());
    /// assert!(map.is_empty());
    /// ```
    #[must_use]
    pub fn new(less: C) -> Self {
        Self::with_hasher(less, DefaultHashBuilder::default())
    }

    /// Returns a builder for a map with the default hasher.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use heapmap::{SortedMap, order};
    ///
    /// let map = SortedMap::builder()
    ///     .comparator(order::by_key())
    ///     .source([(2, "two"), (1, "one")])
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(map.collect_keys(), vec![1, 2]);
    /// ```
    #[must_use]
    pub fn builder() -> SortedMapBuilder<K, V, C> {
        SortedMapBuilder::new()
    }

    /// Creates an empty map, failing when no comparator is given.
    ///
    /// # Errors
    ///
    /// Returns [`SortedMapError::MissingComparator`] if `less` is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use heapmap::{LessFn, SortedMap, SortedMapError};
    ///
    /// let result = SortedMap::<&str, i32, LessFn<&str, i32>>::try_new(None);
    /// assert_eq!(result.err(), Some(SortedMapError::MissingComparator));
    /// ```
    pub fn try_new(less: Option<C>) -> Result<Self, SortedMapError> {
        less.map(Self::new).ok_or_else(missing_comparator)
    }

    /// Creates an empty map with room for `capacity` entries in both halves.
    #[must_use]
    pub fn with_capacity(capacity: usize, less: C) -> Self {
        Self::with_capacity_and_hasher(capacity, less, DefaultHashBuilder::default())
    }

    /// Creates a map ordered by `less` holding every pair of `source`.
    ///
    /// Later pairs replace earlier ones with the same key.
    ///
    /// # Complexity
    ///
    /// O(N log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use heapmap::{SortedMap, order};
    /// use std::collections::HashMap;
    ///
    /// let source = HashMap::from([("Bob", 42), ("Alice", 30), ("Charlie", 25)]);
    /// let map = SortedMap::from_map(source, order::by_value_descending());
    /// assert_eq!(map.collect_keys(), vec!["Bob", "Alice", "Charlie"]);
    /// ```
    #[must_use]
    pub fn from_map<I>(source: I, less: C) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Hash + Eq + Clone,
    {
        let source = source.into_iter();
        let mut map = Self::with_capacity(source.size_hint().0, less);
        map.extend(source);
        map
    }
}

impl<K, V, C, S> SortedMap<K, V, C, S>
where
    C: Fn(&KeyValue<K, V>, &KeyValue<K, V>) -> bool,
{
    /// Creates an empty map whose lookup table uses `hasher`.
    #[must_use]
    pub const fn with_hasher(less: C, hasher: S) -> Self {
        Self {
            table: HashMap::with_hasher(hasher),
            index: OrderingIndex::new(less),
        }
    }

    /// Creates an empty map with room for `capacity` entries whose lookup
    /// table uses `hasher`.
    #[must_use]
    pub fn with_capacity_and_hasher(capacity: usize, less: C, hasher: S) -> Self {
        Self {
            table: HashMap::with_capacity_and_hasher(capacity, hasher),
            index: OrderingIndex::with_capacity(capacity, less),
        }
    }

    /// Returns a minimal entry under the comparator without removing it.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn first(&self) -> Option<(&K, &V)> {
        self.index.peek_min().map(KeyValue::as_pair)
    }

    /// Returns an iterator over the entries in comparator order.
    ///
    /// The iterator drains a private snapshot of the heap. It can be dropped
    /// at any point, and calling `iter` again starts a fresh pass.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use heapmap::{SortedMap, order};
    ///
    /// let map = SortedMap::from_map([(2, "b"), (1, "a")], order::by_key());
    /// let entries: Vec<(&i32, &&str)> = map.iter().collect();
    /// assert_eq!(entries, vec![(&1, &"a"), (&2, &"b")]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V, C> {
        Iter {
            snapshot: self.index.snapshot(),
        }
    }

    /// Returns an iterator over the keys in comparator order.
    pub fn keys(&self) -> Keys<'_, K, V, C> {
        Keys { inner: self.iter() }
    }

    /// Returns an iterator over the values in comparator order.
    pub fn values(&self) -> Values<'_, K, V, C> {
        Values { inner: self.iter() }
    }

    /// Returns every entry, cloned, in comparator order.
    ///
    /// # Complexity
    ///
    /// O(N log N)
    #[must_use]
    pub fn collect_all(&self) -> Vec<(K, V)>
    where
        K: Clone,
        V: Clone,
    {
        self.iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Returns every key, cloned, in comparator order.
    #[must_use]
    pub fn collect_keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.keys().cloned().collect()
    }

    /// Returns every value, cloned, in comparator order.
    #[must_use]
    pub fn collect_values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.values().cloned().collect()
    }

    /// Consumes the map and returns its entries in comparator order.
    #[must_use]
    pub fn into_sorted_vec(self) -> Vec<(K, V)> {
        let Self { table, index } = self;
        drop(table);
        index
            .into_sorted_vec()
            .into_iter()
            .filter_map(unshare)
            .map(KeyValue::into_pair)
            .collect()
    }
}

impl<K, V, C, S> SortedMap<K, V, C, S>
where
    K: Hash + Eq,
    C: Fn(&KeyValue<K, V>, &KeyValue<K, V>) -> bool,
    S: BuildHasher,
{
    /// Returns the value for `key`, if present.
    ///
    /// Served by the lookup table alone.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.table.get(key).map(|entry| &entry.value)
    }

    /// Returns `true` if the map contains `key`.
    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.table.contains_key(key)
    }

    /// Removes `key` and returns its value.
    ///
    /// Returns `None`, leaving the map untouched, if `key` is absent.
    ///
    /// # Complexity
    ///
    /// O(N): the heap entry is found by a linear scan comparing addresses.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use heapmap::{SortedMap, order};
    ///
    /// let mut map = SortedMap::from_map([("Alice", 30), ("Bob", 42)], order::by_key());
    /// assert_eq!(map.delete("Alice"), Some(30));
    /// assert_eq!(map.delete("Alice"), None);
    /// assert_eq!(map.collect_keys(), vec!["Bob"]);
    /// ```
    pub fn delete<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let entry = self.table.remove(key)?;
        let position = self
            .index
            .position(|candidate| std::ptr::eq(candidate, &*entry));
        tracing::trace!(?position, length = self.index.len(), "deleting entry");
        if let Some(position) = position {
            self.index.remove_at(position);
        }
        self.debug_assert_consistent();
        unshare(entry).map(|entry| entry.value)
    }

    /// Removes and returns a minimal entry under the comparator.
    ///
    /// # Complexity
    ///
    /// O(log N)
    pub fn pop_first(&mut self) -> Option<(K, V)> {
        let entry = self.index.pop_min().ok()?;
        self.table.remove(&entry.key);
        self.debug_assert_consistent();
        unshare(entry).map(KeyValue::into_pair)
    }

    /// Returns the contents as a plain `HashMap`.
    ///
    /// # Complexity
    ///
    /// O(N)
    #[must_use]
    pub fn collect(&self) -> HashMap<K, V, S>
    where
        K: Clone,
        V: Clone,
        S: Clone,
    {
        let mut collected =
            HashMap::with_capacity_and_hasher(self.len(), self.table.hasher().clone());
        collected.extend(
            self.table
                .iter()
                .map(|(key, entry)| (key.clone(), entry.value.clone())),
        );
        collected
    }
}

impl<K, V, C, S> SortedMap<K, V, C, S>
where
    K: Hash + Eq + Clone,
    C: Fn(&KeyValue<K, V>, &KeyValue<K, V>) -> bool,
    S: BuildHasher,
{
    /// Inserts `value` under `key`, returning the value it replaced.
    ///
    /// An existing entry for `key` is removed from both halves first, so the
    /// map never holds two entries for one key.
    ///
    /// # Complexity
    ///
    /// O(log N) for a new key, O(N) when replacing.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let replaced = if self.table.contains_key(&key) {
            tracing::trace!(length = self.table.len(), "replacing existing entry");
            self.delete(&key)
        } else {
            None
        };
        let entry = SharedEntry::new(KeyValue::new(key.clone(), value));
        self.table.insert(key, SharedEntry::clone(&entry));
        self.index.push_shared(entry);
        self.debug_assert_consistent();
        replaced
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// An iterator over the entries of a [`SortedMap`] in comparator order.
///
/// Created by [`SortedMap::iter`].
pub struct Iter<'a, K, V, C> {
    snapshot: Snapshot<'a, K, V, C>,
}

impl<'a, K, V, C> Iterator for Iter<'a, K, V, C>
where
    C: Fn(&KeyValue<K, V>, &KeyValue<K, V>) -> bool,
{
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.snapshot.next().map(KeyValue::as_pair)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.snapshot.size_hint()
    }
}

impl<K, V, C> ExactSizeIterator for Iter<'_, K, V, C> where
    C: Fn(&KeyValue<K, V>, &KeyValue<K, V>) -> bool
{
}

impl<K, V, C> FusedIterator for Iter<'_, K, V, C> where
    C: Fn(&KeyValue<K, V>, &KeyValue<K, V>) -> bool
{
}

/// An iterator over the keys of a [`SortedMap`] in comparator order.
///
/// Created by [`SortedMap::keys`].
pub struct Keys<'a, K, V, C> {
    inner: Iter<'a, K, V, C>,
}

impl<'a, K, V, C> Iterator for Keys<'a, K, V, C>
where
    C: Fn(&KeyValue<K, V>, &KeyValue<K, V>) -> bool,
{
    type Item = &'a K;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V, C> ExactSizeIterator for Keys<'_, K, V, C> where
    C: Fn(&KeyValue<K, V>, &KeyValue<K, V>) -> bool
{
}

impl<K, V, C> FusedIterator for Keys<'_, K, V, C> where
    C: Fn(&KeyValue<K, V>, &KeyValue<K, V>) -> bool
{
}

/// An iterator over the values of a [`SortedMap`] in comparator order.
///
/// Created by [`SortedMap::values`].
pub struct Values<'a, K, V, C> {
    inner: Iter<'a, K, V, C>,
}

impl<'a, K, V, C> Iterator for Values<'a, K, V, C>
where
    C: Fn(&KeyValue<K, V>, &KeyValue<K, V>) -> bool,
{
    type Item = &'a V;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V, C> ExactSizeIterator for Values<'_, K, V, C> where
    C: Fn(&KeyValue<K, V>, &KeyValue<K, V>) -> bool
{
}

impl<K, V, C> FusedIterator for Values<'_, K, V, C> where
    C: Fn(&KeyValue<K, V>, &KeyValue<K, V>) -> bool
{
}

/// An owning iterator over the entries of a [`SortedMap`] in comparator
/// order.
///
/// The map is consumed, so this pops straight from its heap without taking
/// a snapshot.
pub struct IntoIter<K, V, C> {
    index: OrderingIndex<K, V, C>,
}

impl<K, V, C> Iterator for IntoIter<K, V, C>
where
    C: Fn(&KeyValue<K, V>, &KeyValue<K, V>) -> bool,
{
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.index.pop_min().ok()?;
        unshare(entry).map(KeyValue::into_pair)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.index.len(), Some(self.index.len()))
    }
}

impl<K, V, C> ExactSizeIterator for IntoIter<K, V, C> where
    C: Fn(&KeyValue<K, V>, &KeyValue<K, V>) -> bool
{
}

impl<K, V, C> FusedIterator for IntoIter<K, V, C> where
    C: Fn(&KeyValue<K, V>, &KeyValue<K, V>) -> bool
{
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V, C, S> IntoIterator for SortedMap<K, V, C, S>
where
    C: Fn(&KeyValue<K, V>, &KeyValue<K, V>) -> bool,
{
    type Item = (K, V);
    type IntoIter = IntoIter<K, V, C>;

    fn into_iter(self) -> Self::IntoIter {
        let Self { table, index } = self;
        drop(table);
        IntoIter { index }
    }
}

impl<'a, K, V, C, S> IntoIterator for &'a SortedMap<K, V, C, S>
where
    C: Fn(&KeyValue<K, V>, &KeyValue<K, V>) -> bool,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, C, S> Extend<(K, V)> for SortedMap<K, V, C, S>
where
    K: Hash + Eq + Clone,
    C: Fn(&KeyValue<K, V>, &KeyValue<K, V>) -> bool,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

/// Copies every entry into fresh allocations, so edits to the copy never
/// reach the original.
impl<K, V, C, S> Clone for SortedMap<K, V, C, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    C: Clone,
    S: BuildHasher + Clone,
{
    fn clone(&self) -> Self {
        let index = self.index.clone();
        let mut table =
            HashMap::with_capacity_and_hasher(index.len(), self.table.hasher().clone());
        for entry in &index {
            table.insert(entry.key.clone(), SharedEntry::clone(entry));
        }
        Self { table, index }
    }
}

/// Maps are equal when they hold the same entries, whatever their order.
impl<K, V, C, D, S> PartialEq<SortedMap<K, V, D, S>> for SortedMap<K, V, C, S>
where
    K: Hash + Eq,
    V: PartialEq,
    S: BuildHasher,
{
    fn eq(&self, other: &SortedMap<K, V, D, S>) -> bool {
        self.table == other.table
    }
}

impl<K, V, C, S> fmt::Debug for SortedMap<K, V, C, S>
where
    K: fmt::Debug,
    V: fmt::Debug,
    C: Fn(&KeyValue<K, V>, &KeyValue<K, V>) -> bool,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
