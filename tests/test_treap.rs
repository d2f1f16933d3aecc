extern crate balanced_maps;
extern crate rand;

use self::rand::Rng;
use balanced_maps::treap::TreapMap;
use balanced_maps::Error;
use std::collections::BTreeMap;
use std::vec::Vec;

#[test]
fn int_test_treap_map() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut map = TreapMap::with_seed([1, 2, 3, 4]);
    let mut expected = Vec::new();
    for _ in 0..100_000 {
        let key = rng.gen::<u32>();
        let val = rng.gen::<u32>();

        map.put(key, val);
        expected.push((key, val));
    }

    map.check_consistency();

    expected.reverse();
    expected.sort_by(|l, r| l.0.cmp(&r.0));
    expected.dedup_by_key(|pair| pair.0);

    assert_eq!(map.len(), expected.len());

    for entry in &expected {
        assert!(map.contains_key(&entry.0));
        assert_eq!(map.get(&entry.0), Ok(&entry.1));
    }

    let actual = map.traverse();
    assert_eq!(actual.len(), expected.len());
    for (actual_entry, expected_entry) in actual.iter().zip(expected.iter()) {
        assert_eq!(actual_entry.0, &expected_entry.0);
        assert_eq!(actual_entry.1, &expected_entry.1);
    }

    for entry in expected.iter().step_by(2) {
        assert_eq!(map.remove(&entry.0), Some(*entry));
    }

    map.check_consistency();
    assert_eq!(map.len(), expected.len() / 2);

    for (i, entry) in expected.iter().enumerate() {
        if i % 2 == 0 {
            assert_eq!(map.get(&entry.0), Err(Error::KeyNotFound));
        } else {
            assert_eq!(map.get(&entry.0), Ok(&entry.1));
        }
    }
}

#[test]
fn int_test_treap_map_against_btreemap() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([2, 3, 5, 7]);
    let mut map = TreapMap::with_seed([7, 5, 3, 2]);
    let mut expected = BTreeMap::new();
    for i in 0..20_000 {
        let key = rng.gen_range(0, 2_000);
        if rng.gen_range(0, 3) == 0 {
            assert_eq!(map.remove(&key), expected.remove(&key).map(|val| (key, val)));
        } else {
            let val = rng.gen::<u32>();
            assert_eq!(map.put(key, val), expected.insert(key, val));
        }

        let probe = rng.gen_range(0, 2_000);
        match expected.get(&probe) {
            Some(val) => assert_eq!(map.get(&probe), Ok(val)),
            None => assert_eq!(map.get(&probe), Err(Error::KeyNotFound)),
        }

        if i % 1_000 == 0 {
            map.check_consistency();
        }
    }

    map.check_consistency();
    assert_eq!(map.len(), expected.len());
    assert_eq!(map.traverse(), expected.iter().collect::<Vec<(&u32, &u32)>>());
}

#[test]
fn int_test_treap_map_drain() {
    let mut map = TreapMap::with_seed([9, 9, 9, 9]);
    for key in 0..10_000u32 {
        map.put(key, key * 2);
    }
    for key in (0..10_000u32).rev() {
        assert_eq!(map.remove(&key), Some((key, key * 2)));
    }
    assert!(map.is_empty());
    assert_eq!(map.height(), 0);
    map.check_consistency();
}
