//! The key-value pair stored by both halves of a [`SortedMap`](super::SortedMap).

/// A key paired with its value.
///
/// Comparators receive two `KeyValue`s and decide which one sorts first, so
/// an order may look at the key, the value, or both.
///
/// # Examples
///
/// ```rust
/// use heapmap::KeyValue;
///
/// let entry = KeyValue::new("Alice", 30);
/// assert_eq!(entry.key, "Alice");
/// assert_eq!(entry.into_pair(), ("Alice", 30));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyValue<K, V> {
    /// The lookup key.
    pub key: K,
    /// The value associated with `key`.
    pub value: V,
}

impl<K, V> KeyValue<K, V> {
    /// Creates a new pair.
    #[inline]
    #[must_use]
    pub const fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Borrows the key and the value as a tuple.
    #[inline]
    #[must_use]
    pub const fn as_pair(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }

    /// Splits the pair into an owned tuple.
    #[inline]
    #[must_use]
    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for KeyValue<K, V> {
    #[inline]
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

impl<K, V> From<KeyValue<K, V>> for (K, V) {
    #[inline]
    fn from(entry: KeyValue<K, V>) -> Self {
        entry.into_pair()
    }
}

/// A comparator as a plain function pointer.
///
/// Handy for naming a map type whose comparator is a non-capturing closure
/// or a free function.
pub type LessFn<K, V> = fn(&KeyValue<K, V>, &KeyValue<K, V>) -> bool;

/// A reference-counted [`KeyValue`], held by both halves of a map.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`, so maps can
/// be sent between threads.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`.
#[cfg(feature = "arc")]
pub type SharedEntry<K, V> = std::sync::Arc<KeyValue<K, V>>;

/// A reference-counted [`KeyValue`], held by both halves of a map.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`, so maps can
/// be sent between threads.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`.
#[cfg(not(feature = "arc"))]
pub type SharedEntry<K, V> = std::rc::Rc<KeyValue<K, V>>;
