//! Ready-made comparators.
//!
//! Each function returns a strict "less than" over [`KeyValue`] pairs that
//! can be handed straight to [`SortedMap::new`](super::SortedMap::new).
//!
//! ```rust
//! use heapmap::{SortedMap, order};
//!
//! let mut map = SortedMap::new(order::by_value_descending());
//! map.insert("Alice", 30);
//! map.insert("Bob", 42);
//!
//! assert_eq!(map.collect_keys(), vec!["Bob", "Alice"]);
//! ```

use super::KeyValue;

/// Ascending by key.
#[must_use]
pub fn by_key<K: Ord, V>() -> impl Fn(&KeyValue<K, V>, &KeyValue<K, V>) -> bool + Copy {
    |left, right| left.key < right.key
}

/// Descending by key.
#[must_use]
pub fn by_key_descending<K: Ord, V>()
-> impl Fn(&KeyValue<K, V>, &KeyValue<K, V>) -> bool + Copy {
    |left, right| right.key < left.key
}

/// Ascending by value. Entries with equal values come out in no fixed order.
#[must_use]
pub fn by_value<K, V: Ord>() -> impl Fn(&KeyValue<K, V>, &KeyValue<K, V>) -> bool + Copy {
    |left, right| left.value < right.value
}

/// Descending by value. Entries with equal values come out in no fixed order.
#[must_use]
pub fn by_value_descending<K, V: Ord>()
-> impl Fn(&KeyValue<K, V>, &KeyValue<K, V>) -> bool + Copy {
    |left, right| right.value < left.value
}

/// Ascending by value, ties broken by ascending key.
#[must_use]
pub fn by_value_then_key<K: Ord, V: Ord>()
-> impl Fn(&KeyValue<K, V>, &KeyValue<K, V>) -> bool + Copy {
    |left, right| (&left.value, &left.key) < (&right.value, &right.key)
}

/// Flips any comparator.
#[must_use]
pub fn reverse<K, V, C>(less: C) -> impl Fn(&KeyValue<K, V>, &KeyValue<K, V>) -> bool
where
    C: Fn(&KeyValue<K, V>, &KeyValue<K, V>) -> bool,
{
    move |left, right| less(right, left)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn alice() -> KeyValue<&'static str, i32> {
        KeyValue::new("Alice", 30)
    }

    fn bob() -> KeyValue<&'static str, i32> {
        KeyValue::new("Bob", 42)
    }

    #[rstest]
    fn test_by_key() {
        let less = by_key();
        assert!(less(&alice(), &bob()));
        assert!(!less(&bob(), &alice()));
        assert!(!less(&alice(), &alice()));
    }

    #[rstest]
    fn test_by_key_descending() {
        let less = by_key_descending();
        assert!(less(&bob(), &alice()));
        assert!(!less(&alice(), &bob()));
    }

    #[rstest]
    fn test_by_value_and_descending() {
        assert!(by_value()(&alice(), &bob()));
        assert!(by_value_descending()(&bob(), &alice()));
    }

    #[rstest]
    fn test_by_value_then_key_breaks_ties() {
        let less = by_value_then_key();
        let carol = KeyValue::new("Carol", 30);
        assert!(less(&alice(), &carol));
        assert!(!less(&carol, &alice()));
        assert!(less(&carol, &bob()));
    }

    #[rstest]
    fn test_reverse() {
        let less = reverse(by_key::<&str, i32>());
        assert!(less(&bob(), &alice()));
        assert!(!less(&alice(), &alice()));
    }
}
