//! Cross-module behavior exercised through the public API only.
//!
//! Component internals are covered by per-module unit tests; these scenarios
//! check the observable contracts a user of the crate relies on, plus
//! property tests that compare the containers against std models.

use proptest::prelude::*;
use std::collections::HashMap;

use datakit::sort::{
    bubble_sort, heap_sort, insertion_sort, merge_sort, quick_sort, selection_sort,
};
use datakit::{DynVec, HashTable, PriorityQueue, RbTree, Reverse};

#[test]
fn test_hash_table_doubles_on_twelfth_insert() {
    let mut table = HashTable::new();
    for key in 0u64..12 {
        table.insert(key, key * 10);
    }
    assert_eq!(table.capacity(), 32);
    assert_eq!(table.len(), 12);
    for key in 0u64..12 {
        assert_eq!(table.get(&key), Some(&(key * 10)));
    }
}

#[test]
fn test_priority_queue_pops_ascending() {
    let mut queue = PriorityQueue::new();
    for v in [5, 3, 8, 1] {
        queue.push(v).unwrap();
    }
    let mut popped = Vec::new();
    while let Some(v) = queue.pop() {
        popped.push(v);
    }
    assert_eq!(popped, vec![1, 3, 5, 8]);
}

#[test]
fn test_tree_feeds_heap_through_shared_comparator_convention() {
    // the same data flows tree -> sorted vec -> max-heap
    let mut tree = RbTree::new();
    for v in [40, 10, 30, 20] {
        tree.insert(v);
    }
    assert_eq!(tree.elements(), vec![&10, &20, &30, &40]);

    let mut queue = PriorityQueue::with_comparator(Reverse);
    for v in tree.into_sorted_vec() {
        queue.push(v).unwrap();
    }
    assert_eq!(queue.pop(), Some(40));
    assert_eq!(queue.pop(), Some(30));
}

#[test]
fn test_dyn_vec_basic_lifecycle() {
    let mut vec = DynVec::new();
    for v in 0..100 {
        vec.push(v).unwrap();
    }
    assert_eq!(vec.len(), 100);
    assert!(vec.contains(&42));
    assert!(!vec.contains(&100));
    assert_eq!(vec.pop(), Some(99));
    assert_eq!(vec.len(), 99);
}

proptest! {
    #[test]
    fn prop_hash_table_agrees_with_std_hashmap(
        ops in prop::collection::vec((any::<bool>(), 0u16..300, any::<u32>()), 0..300)
    ) {
        let mut table = HashTable::new();
        let mut model: HashMap<u16, u32> = HashMap::new();

        for (is_insert, key, value) in ops {
            if is_insert {
                // first value wins in both on duplicate keys
                let fresh = table.insert(key, value);
                prop_assert_eq!(fresh, !model.contains_key(&key));
                model.entry(key).or_insert(value);
            } else {
                prop_assert_eq!(table.remove(&key), model.remove(&key));
            }
            prop_assert_eq!(table.len(), model.len());
        }

        for (key, value) in &model {
            prop_assert_eq!(table.get(key), Some(value));
        }
    }

    #[test]
    fn prop_priority_queue_pops_in_comparator_order(
        values in prop::collection::vec(any::<i64>(), 0..200)
    ) {
        let mut queue = PriorityQueue::new();
        for &v in &values {
            queue.push(v).unwrap();
        }

        let mut popped = Vec::with_capacity(values.len());
        while let Some(v) = queue.pop() {
            popped.push(v);
        }
        let mut expected = values;
        expected.sort();
        prop_assert_eq!(popped, expected);
    }

    #[test]
    fn prop_every_sort_matches_std(values in prop::collection::vec(any::<i32>(), 0..150)) {
        let mut expected = values.clone();
        expected.sort();

        let sorts: [(&str, fn(&mut [i32])); 6] = [
            ("bubble", bubble_sort),
            ("insertion", insertion_sort),
            ("selection", selection_sort),
            ("merge", merge_sort),
            ("quick", quick_sort),
            ("heap", heap_sort),
        ];
        for (name, sort) in sorts {
            let mut data = values.clone();
            sort(&mut data);
            prop_assert_eq!(&data, &expected, "{} sort diverged", name);
        }
    }

    #[test]
    fn prop_dyn_vec_push_pop_is_lifo(values in prop::collection::vec(any::<u64>(), 0..200)) {
        let mut vec = DynVec::new();
        for &v in &values {
            vec.push(v).unwrap();
        }
        prop_assert_eq!(vec.as_slice(), values.as_slice());

        for &v in values.iter().rev() {
            prop_assert_eq!(vec.pop(), Some(v));
        }
        prop_assert_eq!(vec.pop(), None);
    }
}
