//! Property-based tests for SortedMap.
//!
//! This module verifies that SortedMap keeps its lookup table and its
//! ordering index in agreement, using proptest.

use heapmap::{KeyValue, LessFn, SortedMap, order};
use proptest::prelude::*;
use std::collections::HashMap;

type ByKey = LessFn<String, i32>;

fn ascending_by_key(left: &KeyValue<String, i32>, right: &KeyValue<String, i32>) -> bool {
    left.key < right.key
}

fn descending_by_value(left: &KeyValue<String, i32>, right: &KeyValue<String, i32>) -> bool {
    left.value > right.value
}

// =============================================================================
// Strategy for generating test data
// =============================================================================

fn arbitrary_key() -> impl Strategy<Value = String> {
    "[a-h]{1,3}".prop_map(|s| s)
}

fn arbitrary_value() -> impl Strategy<Value = i32> {
    -100..100
}

fn arbitrary_entries() -> impl Strategy<Value = Vec<(String, i32)>> {
    prop::collection::vec((arbitrary_key(), arbitrary_value()), 0..60)
}

#[derive(Debug, Clone)]
enum Operation {
    Insert(String, i32),
    Delete(String),
    Enumerate,
    PopFirst,
}

fn arbitrary_operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        4 => (arbitrary_key(), arbitrary_value())
            .prop_map(|(key, value)| Operation::Insert(key, value)),
        2 => arbitrary_key().prop_map(Operation::Delete),
        1 => Just(Operation::Enumerate),
        1 => Just(Operation::PopFirst),
    ]
}

fn arbitrary_operations() -> impl Strategy<Value = Vec<Operation>> {
    prop::collection::vec(arbitrary_operation(), 0..120)
}

fn assert_sorted_by<C>(entries: &[(String, i32)], less: C) -> Result<(), TestCaseError>
where
    C: Fn(&KeyValue<String, i32>, &KeyValue<String, i32>) -> bool,
{
    for window in entries.windows(2) {
        let earlier = KeyValue::from(window[0].clone());
        let later = KeyValue::from(window[1].clone());
        prop_assert!(!less(&later, &earlier), "{:?} before {:?}", window[0], window[1]);
    }
    Ok(())
}

// =============================================================================
// Model Law: a SortedMap behaves like a HashMap under any operation sequence
// =============================================================================

proptest! {
    #[test]
    fn prop_matches_hash_map_model(operations in arbitrary_operations()) {
        let mut map: SortedMap<String, i32, ByKey> = SortedMap::new(ascending_by_key);
        let mut model: HashMap<String, i32> = HashMap::new();

        for operation in operations {
            match operation {
                Operation::Insert(key, value) => {
                    prop_assert_eq!(map.insert(key.clone(), value), model.insert(key, value));
                }
                Operation::Delete(key) => {
                    prop_assert_eq!(map.delete(&key), model.remove(&key));
                }
                Operation::Enumerate => {
                    let _ = map.collect_all();
                }
                Operation::PopFirst => {
                    let expected = model.keys().min().cloned();
                    let popped = map.pop_first();
                    prop_assert_eq!(popped.as_ref().map(|(key, _)| key.clone()), expected);
                    if let Some((key, value)) = popped {
                        prop_assert_eq!(model.remove(&key), Some(value));
                    }
                }
            }

            prop_assert_eq!(map.len(), model.len());
            let entries = map.collect_all();
            prop_assert_eq!(entries.len(), model.len());
            for (key, value) in &entries {
                prop_assert_eq!(model.get(key), Some(value));
                prop_assert_eq!(map.get(key), Some(value));
            }
            assert_sorted_by(&entries, ascending_by_key)?;
        }
    }
}

// =============================================================================
// Order Law: consecutive enumerated entries never violate the comparator
// =============================================================================

proptest! {
    #[test]
    fn prop_collect_all_is_sorted_by_key(entries in arbitrary_entries()) {
        let map: SortedMap<String, i32, ByKey> = SortedMap::from_map(entries, ascending_by_key);
        assert_sorted_by(&map.collect_all(), ascending_by_key)?;
    }

    #[test]
    fn prop_collect_all_is_sorted_by_value(entries in arbitrary_entries()) {
        let map: SortedMap<String, i32, ByKey> = SortedMap::from_map(entries, descending_by_value);
        assert_sorted_by(&map.collect_all(), descending_by_value)?;
    }
}

// =============================================================================
// Replace Law: inserting an existing key never grows the map
// =============================================================================

proptest! {
    #[test]
    fn prop_replace_keeps_length(
        entries in arbitrary_entries(),
        value in arbitrary_value()
    ) {
        let mut map: SortedMap<String, i32, ByKey> = SortedMap::from_map(entries, ascending_by_key);
        let keys = map.collect_keys();

        for key in keys {
            let length = map.len();
            map.insert(key.clone(), value);
            prop_assert_eq!(map.len(), length);
            prop_assert_eq!(map.get(&key), Some(&value));
            prop_assert_eq!(map.keys().filter(|candidate| **candidate == key).count(), 1);
        }
    }
}

// =============================================================================
// Idempotent Enumeration Law: enumerating twice gives the same answer and
// leaves later operations unaffected
// =============================================================================

proptest! {
    #[test]
    fn prop_enumeration_is_idempotent(
        entries in arbitrary_entries(),
        key in arbitrary_key()
    ) {
        let mut enumerated: SortedMap<String, i32, ByKey> =
            SortedMap::from_map(entries.clone(), ascending_by_key);
        let mut untouched: SortedMap<String, i32, ByKey> =
            SortedMap::from_map(entries, ascending_by_key);

        let first = enumerated.collect_all();
        let second = enumerated.collect_all();
        prop_assert_eq!(&first, &second);

        prop_assert_eq!(enumerated.delete(&key), untouched.delete(&key));
        prop_assert_eq!(enumerated.first(), untouched.first());
        prop_assert_eq!(enumerated.collect_all(), untouched.collect_all());
    }
}

// =============================================================================
// Round Trip Law: from_map(m, less).collect() == m for any comparator
// =============================================================================

proptest! {
    #[test]
    fn prop_round_trip(entries in arbitrary_entries()) {
        let source: HashMap<String, i32> = entries.into_iter().collect();

        let by_key = SortedMap::from_map(source.clone(), order::by_key());
        let by_value = SortedMap::from_map(source.clone(), order::by_value_descending());

        let collected_by_key: HashMap<String, i32> = by_key.collect().into_iter().collect();
        let collected_by_value: HashMap<String, i32> = by_value.collect().into_iter().collect();
        prop_assert_eq!(collected_by_key, source.clone());
        prop_assert_eq!(collected_by_value, source);
    }
}

// =============================================================================
// Pop Law: draining with pop_first yields the same order as enumeration
// =============================================================================

proptest! {
    #[test]
    fn prop_pop_first_matches_enumeration(entries in arbitrary_entries()) {
        let mut map: SortedMap<String, i32, ByKey> = SortedMap::from_map(entries, ascending_by_key);
        let enumerated = map.collect_all();

        let mut drained = Vec::new();
        while let Some(entry) = map.pop_first() {
            drained.push(entry);
        }

        prop_assert_eq!(drained, enumerated);
        prop_assert!(map.is_empty());
    }
}
