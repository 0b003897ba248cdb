//! Property tests for the B-tree.
//!
//! The tree is checked against `std::collections::BTreeSet` as a model:
//! every operation must agree with the model's answer, and the structural
//! invariants must hold after each step.

use std::collections::BTreeSet;

use btree_index::BTree;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

#[derive(Debug, Clone)]
enum Op {
    Insert(i64),
    Remove(i64),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    // A narrow key range so removes actually hit and nodes churn through
    // borrows and merges instead of only growing.
    prop_oneof![
        (0i64..256).prop_map(Op::Insert),
        (0i64..256).prop_map(Op::Remove),
    ]
}

proptest! {
    #[test]
    fn invariants_hold_across_operation_sequences(
        ops in prop::collection::vec(op_strategy(), 0..300),
        t in 2usize..6,
    ) {
        let mut tree = BTree::new(t).unwrap();
        let mut model = BTreeSet::new();

        for op in ops {
            match op {
                Op::Insert(k) => prop_assert_eq!(tree.insert(k), model.insert(k)),
                Op::Remove(k) => prop_assert_eq!(tree.remove(&k), model.remove(&k)),
            }
            prop_assert!(tree.validate().is_ok());
            prop_assert_eq!(tree.len(), model.len());
        }

        for k in 0i64..256 {
            prop_assert_eq!(tree.contains(&k), model.contains(&k));
        }
    }

    #[test]
    fn round_trip_insert_search_remove(
        keys in prop::collection::btree_set(any::<i32>(), 0..200),
        t in 2usize..6,
    ) {
        let mut tree = BTree::new(t).unwrap();

        for &k in &keys {
            prop_assert!(tree.insert(k));
        }
        for k in &keys {
            prop_assert_eq!(tree.get(k), Some(k));
        }

        for k in &keys {
            prop_assert!(tree.remove(k));
            prop_assert!(tree.validate().is_ok());
        }
        prop_assert!(tree.is_empty());
        for k in &keys {
            prop_assert_eq!(tree.get(k), None);
        }
    }

    #[test]
    fn removing_an_absent_key_is_a_reported_no_op(
        keys in prop::collection::btree_set(0i32..1000, 1..100),
        absent in 1000i32..2000,
        t in 2usize..6,
    ) {
        let mut tree = BTree::new(t).unwrap();
        for &k in &keys {
            tree.insert(k);
        }

        prop_assert!(!tree.remove(&absent));
        prop_assert!(tree.validate().is_ok());
        prop_assert_eq!(tree.len(), keys.len());
        for k in &keys {
            prop_assert_eq!(tree.get(k), Some(k));
        }
    }

    #[test]
    fn insertion_order_does_not_affect_membership(
        keys in prop::collection::btree_set(any::<i16>(), 0..150),
        seed in any::<u64>(),
        t in 2usize..6,
    ) {
        let in_order: Vec<i16> = keys.iter().copied().collect();
        let mut shuffled = in_order.clone();
        shuffled.shuffle(&mut StdRng::seed_from_u64(seed));

        let mut a = BTree::new(t).unwrap();
        let mut b = BTree::new(t).unwrap();
        for &k in &in_order {
            a.insert(k);
        }
        for &k in &shuffled {
            b.insert(k);
        }

        prop_assert!(a.validate().is_ok());
        prop_assert!(b.validate().is_ok());
        prop_assert_eq!(a.len(), b.len());
        for k in &in_order {
            prop_assert!(a.contains(k));
            prop_assert!(b.contains(k));
        }
        // Near-miss probes must agree as well.
        for probe in in_order.iter().map(|k| k.wrapping_add(1)) {
            prop_assert_eq!(a.contains(&probe), b.contains(&probe));
        }
    }
}
