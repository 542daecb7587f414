//! Hash maps enumerable in a caller-defined order.
//!
//! This module provides the pieces of a [`SortedMap`]:
//!
//! - [`KeyValue`]: the pair both halves of the map share
//! - [`SharedEntry`]: the reference-counted handle to a stored pair
//! - [`OrderingIndex`]: a binary heap of pairs under a comparator
//! - [`SortedMap`]: a `HashMap` and an `OrderingIndex` kept in lockstep
//! - [`SortedMapBuilder`]: validated construction
//! - [`order`]: ready-made comparators
//!
//! # Comparators
//!
//! A comparator is any `Fn(&KeyValue<K, V>, &KeyValue<K, V>) -> bool` that
//! answers "does `a` sort strictly before `b`?". It must be a strict weak
//! ordering. Entries it considers equivalent come out in no fixed order.
//!
//! # Examples
//!
//! ```rust
//! use heapmap::{KeyValue, SortedMap, order};
//!
//! let scores = [("Bob", 42), ("Alice", 30), ("Charlie", 25)];
//!
//! let by_name = SortedMap::from_map(scores, order::by_key());
//! assert_eq!(by_name.collect_keys(), vec!["Alice", "Bob", "Charlie"]);
//!
//! let by_score = SortedMap::from_map(scores, order::by_value_descending());
//! assert_eq!(by_score.collect_keys(), vec!["Bob", "Alice", "Charlie"]);
//!
//! // Any closure over key-value pairs works
//! let by_name_length = SortedMap::from_map(
//!     scores,
//!     |left: &KeyValue<&str, i32>, right: &KeyValue<&str, i32>| {
//!         (left.key.len(), left.key) < (right.key.len(), right.key)
//!     },
//! );
//! assert_eq!(by_name_length.collect_keys(), vec!["Bob", "Alice", "Charlie"]);
//! ```

mod builder;
mod entry;
mod map;
mod ordering_index;
pub mod order;

pub use builder::SortedMapBuilder;
pub use entry::KeyValue;
pub use entry::LessFn;
pub use entry::SharedEntry;
pub use map::IntoIter;
pub use map::Iter;
pub use map::Keys;
pub use map::SortedMap;
pub use map::Values;
pub use ordering_index::OrderingIndex;
pub use ordering_index::Snapshot;
