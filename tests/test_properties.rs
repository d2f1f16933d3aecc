use balanced_maps::avl_tree::AvlMap;
use balanced_maps::treap::TreapMap;
use balanced_maps::Error;
use proptest::prelude::*;
use std::collections::BTreeMap;

#[derive(Clone, Debug)]
enum Op {
    Put(u16, u32),
    Remove(u16),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        2 => (0u16..256, any::<u32>()).prop_map(|(key, val)| Op::Put(key, val)),
        1 => (0u16..256).prop_map(Op::Remove),
    ]
}

proptest! {
    #[test]
    fn avl_map_matches_btreemap(entries in prop::collection::vec((0u16..256, any::<u32>()), 0..400)) {
        let mut map = AvlMap::new();
        let mut expected = BTreeMap::new();
        for (key, val) in entries {
            prop_assert_eq!(map.put(key, val), expected.insert(key, val));
        }

        map.check_consistency();
        prop_assert_eq!(map.len(), expected.len());
        prop_assert_eq!(map.traverse(), expected.iter().collect::<Vec<(&u16, &u32)>>());
        for key in 0u16..256 {
            match expected.get(&key) {
                Some(val) => prop_assert_eq!(map.get(&key), Ok(val)),
                None => prop_assert_eq!(map.get(&key), Err(Error::KeyNotFound)),
            }
        }
    }

    #[test]
    fn treap_map_matches_btreemap(
        seed in (1u32.., any::<u32>(), any::<u32>(), any::<u32>()),
        ops in prop::collection::vec(op(), 0..400),
    ) {
        let mut map = TreapMap::with_seed([seed.0, seed.1, seed.2, seed.3]);
        let mut expected = BTreeMap::new();
        for op in ops {
            match op {
                Op::Put(key, val) => {
                    prop_assert_eq!(map.put(key, val), expected.insert(key, val));
                },
                Op::Remove(key) => {
                    prop_assert_eq!(map.remove(&key), expected.remove(&key).map(|val| (key, val)));
                    prop_assert_eq!(map.get(&key), Err(Error::KeyNotFound));
                },
            }
        }

        map.check_consistency();
        prop_assert_eq!(map.len(), expected.len());
        prop_assert_eq!(map.traverse(), expected.iter().collect::<Vec<(&u16, &u32)>>());
    }

    #[test]
    fn overwrite_keeps_one_entry(key in any::<u16>(), first in any::<u32>(), second in any::<u32>()) {
        let mut avl_map = AvlMap::new();
        avl_map.put(key, first);
        prop_assert_eq!(avl_map.put(key, second), Some(first));
        prop_assert_eq!(avl_map.traverse(), vec![(&key, &second)]);

        let mut treap_map = TreapMap::with_seed([1, 1, 1, 1]);
        treap_map.put(key, first);
        prop_assert_eq!(treap_map.put(key, second), Some(first));
        prop_assert_eq!(treap_map.traverse(), vec![(&key, &second)]);
    }
}
