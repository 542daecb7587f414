//! Validated construction of a [`SortedMap`].
//!
//! [`SortedMapBuilder`] collects the construction options (comparator,
//! initial source, capacity and hasher) and checks them in
//! [`SortedMapBuilder::build`]. The comparator is the only mandatory option.

use std::fmt;
use std::hash::{BuildHasher, Hash};

use super::{KeyValue, SortedMap};
use crate::{DefaultHashBuilder, SortedMapError};

pub fn missing_comparator() -> SortedMapError {
    tracing::debug!("rejecting sorted map construction without a comparator");
    SortedMapError::MissingComparator
}

/// Builder for [`SortedMap`].
///
/// # Examples
///
/// ```rust
/// use heapmap::{SortedMapBuilder, order};
///
/// let map = SortedMapBuilder::new()
///     .comparator(order::by_key())
///     .source([("Bob", 42), ("Alice", 30)])
///     .build()
///     .unwrap();
/// assert_eq!(map.collect_keys(), vec!["Alice", "Bob"]);
/// ```
///
/// Leaving out the comparator is an error:
///
/// ```rust
/// use heapmap::{LessFn, SortedMapBuilder, SortedMapError};
///
/// let result = SortedMapBuilder::<&str, i32, LessFn<&str, i32>>::new()
///     .source([("Bob", 42)])
///     .build();
/// assert_eq!(result.err(), Some(SortedMapError::MissingComparator));
/// ```
pub struct SortedMapBuilder<K, V, C, S = DefaultHashBuilder> {
    comparator: Option<C>,
    source: Vec<(K, V)>,
    capacity: usize,
    hasher: S,
}

impl<K, V, C> SortedMapBuilder<K, V, C> {
    /// Creates a builder with no comparator, no source and the default hasher.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<K, V, C, S> SortedMapBuilder<K, V, C, S> {
    /// Pre-allocates room for at least `capacity` entries.
    #[must_use]
    pub const fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Adds pairs to insert once the map is built.
    ///
    /// May be called more than once; later pairs replace earlier ones with
    /// the same key.
    #[must_use]
    pub fn source<I>(mut self, source: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        self.source.extend(source);
        self
    }

    /// Uses `hasher` for the lookup table.
    #[must_use]
    pub fn hasher<T>(self, hasher: T) -> SortedMapBuilder<K, V, C, T> {
        SortedMapBuilder {
            comparator: self.comparator,
            source: self.source,
            capacity: self.capacity,
            hasher,
        }
    }
}

impl<K, V, C, S> SortedMapBuilder<K, V, C, S>
where
    C: Fn(&KeyValue<K, V>, &KeyValue<K, V>) -> bool,
{
    /// Sets the comparator.
    #[must_use]
    pub fn comparator(mut self, less: C) -> Self {
        self.comparator = Some(less);
        self
    }

    /// Builds the map and inserts the collected source pairs.
    ///
    /// # Errors
    ///
    /// Returns [`SortedMapError::MissingComparator`] if no comparator was set.
    pub fn build(self) -> Result<SortedMap<K, V, C, S>, SortedMapError>
    where
        K: Hash + Eq + Clone,
        S: BuildHasher,
    {
        let less = self.comparator.ok_or_else(missing_comparator)?;
        let capacity = self.capacity.max(self.source.len());
        let mut map = SortedMap::with_capacity_and_hasher(capacity, less, self.hasher);
        map.extend(self.source);
        Ok(map)
    }
}

impl<K, V, C, S: Default> Default for SortedMapBuilder<K, V, C, S> {
    fn default() -> Self {
        Self {
            comparator: None,
            source: Vec::new(),
            capacity: 0,
            hasher: S::default(),
        }
    }
}

impl<K, V, C, S> fmt::Debug for SortedMapBuilder<K, V, C, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SortedMapBuilder")
            .field("has_comparator", &self.comparator.is_some())
            .field("source_length", &self.source.len())
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}
