//! Property-based testing for the red-black tree.
//!
//! Every mutation is followed by the deep structural check (root color,
//! red-red prohibition, equal black height, strict ordering), not just a
//! final validation, and the tree is compared against `BTreeSet` as a model.

use proptest::prelude::*;
use std::collections::BTreeSet;

use datakit::RbTree;

/// Operations a tree workload is made of.
#[derive(Debug, Clone)]
enum TreeOp {
    Insert(i64),
    Remove(i64),
}

fn tree_ops_strategy() -> impl Strategy<Value = Vec<TreeOp>> {
    prop::collection::vec(
        prop_oneof![
            (-200i64..200).prop_map(TreeOp::Insert),
            (-200i64..200).prop_map(TreeOp::Remove),
        ],
        0..400,
    )
}

proptest! {
    #[test]
    fn prop_inorder_equals_sorted_input(
        values in prop::collection::hash_set(any::<i64>(), 0..200)
    ) {
        let mut tree = RbTree::new();
        for &v in &values {
            prop_assert!(tree.insert(v));
            tree.check_deep().unwrap();
        }
        prop_assert_eq!(tree.len(), values.len());

        let mut expected: Vec<i64> = values.iter().copied().collect();
        expected.sort();
        let inorder: Vec<i64> = tree.elements().into_iter().copied().collect();
        prop_assert_eq!(inorder, expected);
    }

    #[test]
    fn prop_invariants_hold_under_mixed_ops(ops in tree_ops_strategy()) {
        let mut tree = RbTree::new();
        let mut model = BTreeSet::new();

        for op in ops {
            match op {
                TreeOp::Insert(v) => {
                    prop_assert_eq!(tree.insert(v), model.insert(v));
                }
                TreeOp::Remove(v) => {
                    let removed = tree.remove(&v);
                    prop_assert_eq!(removed.is_some(), model.remove(&v));
                    if let Some(r) = removed {
                        prop_assert_eq!(r, v);
                    }
                }
            }
            tree.check_deep().unwrap();
            prop_assert_eq!(tree.len(), model.len());
        }

        let inorder: Vec<i64> = tree.elements().into_iter().copied().collect();
        let expected: Vec<i64> = model.iter().copied().collect();
        prop_assert_eq!(inorder, expected);
    }

    #[test]
    fn prop_predecessor_successor_chain(
        values in prop::collection::btree_set(any::<i64>(), 1..100)
    ) {
        let mut tree = RbTree::new();
        for &v in &values {
            tree.insert(v);
        }
        let sorted: Vec<i64> = values.iter().copied().collect();

        for (i, v) in sorted.iter().enumerate() {
            if i == 0 {
                prop_assert_eq!(tree.predecessor(v), None);
            } else {
                prop_assert_eq!(tree.predecessor(v), Some(&sorted[i - 1]));
            }
            if i == sorted.len() - 1 {
                prop_assert_eq!(tree.successor(v), None);
            } else {
                prop_assert_eq!(tree.successor(v), Some(&sorted[i + 1]));
            }
        }
    }

    #[test]
    fn prop_min_max_match_model(
        values in prop::collection::btree_set(any::<i64>(), 0..100)
    ) {
        let mut tree = RbTree::new();
        for &v in &values {
            tree.insert(v);
        }
        prop_assert_eq!(tree.min(), values.iter().next());
        prop_assert_eq!(tree.max(), values.iter().next_back());
    }

    #[test]
    fn prop_remove_leaves_other_keys_intact(
        values in prop::collection::hash_set(-500i64..500, 2..150),
        seed in any::<u64>()
    ) {
        let values: Vec<i64> = values.into_iter().collect();
        let victim = values[(seed as usize) % values.len()];

        let mut tree = RbTree::new();
        for &v in &values {
            tree.insert(v);
        }

        let before = tree.len();
        prop_assert_eq!(tree.remove(&victim), Some(victim));
        tree.check_deep().unwrap();
        prop_assert_eq!(tree.len(), before - 1);
        prop_assert!(!tree.contains(&victim));
        for &v in &values {
            if v != victim {
                prop_assert_eq!(tree.get(&v), Some(&v));
            }
        }

        // removing it again reports absent and changes nothing
        prop_assert_eq!(tree.remove(&victim), None);
        prop_assert_eq!(tree.len(), before - 1);
    }

    #[test]
    fn prop_into_sorted_vec_is_sorted(
        values in prop::collection::hash_set(any::<i64>(), 0..200)
    ) {
        let mut tree = RbTree::new();
        for &v in &values {
            tree.insert(v);
        }
        let drained = tree.into_sorted_vec();
        let mut expected: Vec<i64> = values.into_iter().collect();
        expected.sort();
        prop_assert_eq!(drained, expected);
    }
}
