//! Property tests for the data iterator.

use std::collections::BTreeSet;

use proptest::prelude::*;

use objview::{DataIterator, Heap, KeySort, Value};

fn keys() -> impl Strategy<Value = BTreeSet<String>> {
    proptest::collection::btree_set("[a-z]{1,6}", 0..=10)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A plain object yields each enumerable key exactly once, in
    /// insertion order.
    #[test]
    fn property_plain_object_keys_in_insertion_order(keys in keys(), reverse in any::<bool>()) {
        let mut ordered: Vec<String> = keys.into_iter().collect();
        if reverse {
            ordered.reverse();
        }

        let mut heap = Heap::new();
        let obj = heap.plain();
        for (i, key) in ordered.iter().enumerate() {
            heap.insert(obj, key.as_str(), i as f64);
        }

        let names: Vec<String> = DataIterator::default()
            .iterate(&heap, &Value::Object(obj))
            .map(|child| child.name)
            .collect();
        prop_assert_eq!(names, ordered);
    }

    /// PROPERTY: Alphabetical sorting yields sorted names regardless of
    /// insertion order.
    #[test]
    fn property_alphabetical_sort_is_sorted(keys in keys()) {
        let mut heap = Heap::new();
        let obj = heap.plain();
        for key in keys.iter().rev() {
            heap.insert(obj, key.as_str(), true);
        }

        let iterator = DataIterator::new(false, KeySort::Alphabetical);
        let names: Vec<String> = iterator
            .iterate(&heap, &Value::Object(obj))
            .map(|child| child.name)
            .collect();
        let expected: Vec<String> = keys.into_iter().collect();
        prop_assert_eq!(names, expected);
    }

    /// PROPERTY: Arrays yield their indices in order and `has_children`
    /// agrees with the iterator.
    #[test]
    fn property_array_indices_in_order(items in proptest::collection::vec(any::<i32>(), 0..=20)) {
        let mut heap = Heap::new();
        let array = heap.array(items.iter().map(|n| Value::from(*n as f64)).collect());
        let value = Value::Object(array);

        let iterator = DataIterator::default();
        let children: Vec<_> = iterator.iterate(&heap, &value).collect();

        prop_assert_eq!(children.len(), items.len());
        prop_assert_eq!(iterator.has_children(&heap, &value), !items.is_empty());
        for (i, child) in children.iter().enumerate() {
            prop_assert_eq!(&child.name, &i.to_string());
            prop_assert_eq!(&child.value, &Value::from(items[i] as f64));
        }
    }
}
