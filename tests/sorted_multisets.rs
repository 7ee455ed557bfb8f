const NUM_OF_OPERATIONS: usize = 10_000;

macro_rules! sorted_multiset_tests {
    ($($module_name:ident: $type_name:ident,)*) => {
        $(
            mod $module_name {
                use ordered_collections::$module_name::$type_name;
                use rand::Rng;
                use super::NUM_OF_OPERATIONS;

                #[test]
                fn int_test_multiset() {
                    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                    let mut set = $type_name::new();
                    let mut expected: Vec<u32> = Vec::new();

                    for _ in 0..NUM_OF_OPERATIONS {
                        let val = rng.gen_range(0, 1000);

                        set.insert(val);
                        let pos = expected.binary_search(&val).unwrap_or_else(|e| e);
                        expected.insert(pos, val);
                    }

                    assert_eq!(set.len(), expected.len());
                    assert_eq!(set.to_sorted_vec(), expected);
                    assert_eq!(set.min(), expected.first());
                    assert_eq!(set.max(), expected.last());

                    for i in 0..NUM_OF_OPERATIONS {
                        let val = rng.gen_range(0, 1000);

                        match expected.binary_search(&val) {
                            Ok(pos) => {
                                expected.remove(pos);
                                assert!(set.remove(&val));
                            }
                            Err(_) => assert!(!set.remove(&val)),
                        }
                        assert_eq!(set.len(), expected.len());

                        if i % 1000 == 0 {
                            assert_eq!(set.to_sorted_vec(), expected);
                        }
                    }

                    assert_eq!(set.to_sorted_vec(), expected);
                }

                #[test]
                fn int_test_lookup_does_not_mutate() {
                    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                    let mut set = $type_name::new();

                    for _ in 0..100 {
                        set.insert(rng.gen_range(0, 50));
                    }

                    let snapshot = set.to_sorted_vec();
                    for val in 0..100 {
                        set.contains(&val);
                    }

                    assert_eq!(set.len(), snapshot.len());
                    assert_eq!(set.to_sorted_vec(), snapshot);
                }
            }
        )*
    }
}

sorted_multiset_tests!(
    avl_tree: AvlMultiset,
    bst_tree: BstMultiset,
);
