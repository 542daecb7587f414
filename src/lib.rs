//! # heapmap
//!
//! A hash map that can enumerate its entries in any caller-defined order.
//!
//! ## Overview
//!
//! [`SortedMap`] files every entry in two places: a `HashMap` for O(1)
//! lookups and a binary heap ([`OrderingIndex`]) ordered by a comparator
//! over whole key-value pairs. Both hold the same reference-counted pair,
//! so values need not be `Clone`; only the key is cloned, once, for the
//! table. Point reads never pay for the order; ordered enumeration
//! drains a private copy of the heap.
//!
//! - O(1) `get`, `contains_key` and `len`
//! - O(log N) insertion of a new key
//! - O(N) `delete` and replacing insert (the heap entry is found by a scan)
//! - O(N log N) full ordered enumeration
//!
//! ## Feature Flags
//!
//! - `fxhash`: use `rustc-hash`'s `FxBuildHasher` for the lookup table
//! - `ahash`: use `ahash`'s `RandomState` for the lookup table
//!
//! Neither hasher is `HashDoS`-resistant; only enable them for trusted keys.
//!
//! - `arc`: share entries through `Arc` instead of `Rc`, making maps `Send`
//!   and `Sync` when their keys, values and comparator are
//!
//! ## Example
//!
//! ```rust
//! use heapmap::{SortedMap, order};
//!
//! let mut map = SortedMap::new(order::by_key());
//! map.insert("Bob", 42);
//! map.insert("Alice", 30);
//!
//! assert_eq!(map.get("Alice"), Some(&30));
//! assert_eq!(map.collect_all(), vec![("Alice", 30), ("Bob", 42)]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Constructors are marked `#[must_use]` the same way everywhere
#![allow(clippy::double_must_use)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use heapmap::prelude::*;
///
/// let map: SortedMap<i32, i32, _> = SortedMap::new(order::by_key());
/// assert!(map.is_empty());
/// ```
pub mod prelude {
    pub use crate::error::SortedMapError;
    pub use crate::sorted::*;
}

mod error;
mod hasher;
pub mod sorted;

pub use error::SortedMapError;
pub use hasher::DefaultHashBuilder;
pub use sorted::{
    IntoIter, Iter, KeyValue, Keys, LessFn, OrderingIndex, SharedEntry, Snapshot, SortedMap,
    SortedMapBuilder, Values, order,
};
