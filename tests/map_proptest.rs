use std::collections::HashMap;

use prim_hash::LongObjectHashMap;
use prim_hash::PhiMixer;
use prim_hash::PrimitiveHashMap;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Operation {
    Insert(i16, u16),
    Get(i16),
    Remove(i16),
    IndexInsert(i16, u16),
    RemoveAll(u8),
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        4 => (any::<i16>(), any::<u16>()).prop_map(|(k, v)| Operation::Insert(k, v)),
        2 => any::<i16>().prop_map(Operation::Get),
        3 => any::<i16>().prop_map(Operation::Remove),
        2 => (any::<i16>(), any::<u16>()).prop_map(|(k, v)| Operation::IndexInsert(k, v)),
        1 => (2u8..8).prop_map(Operation::RemoveAll),
    ]
}

proptest! {
    #[test]
    fn test_map_matches_std_map(
        seed in any::<u64>(),
        ops in proptest::collection::vec(operation(), 1..400),
    ) {
        let mut std_map = HashMap::new();
        let mut map: PrimitiveHashMap<i16, u16, PhiMixer> =
            PrimitiveHashMap::with_hasher(PhiMixer::with_seed(seed));

        for op in ops {
            match op {
                Operation::Insert(k, v) => {
                    prop_assert_eq!(map.insert(k, v), std_map.insert(k, v), "insert {}", k);
                }
                Operation::Get(k) => {
                    prop_assert_eq!(map.get(k), std_map.get(&k), "get {}", k);
                }
                Operation::Remove(k) => {
                    prop_assert_eq!(map.remove(k), std_map.remove(&k), "remove {}", k);
                }
                Operation::IndexInsert(k, v) => match map.index_of(k) {
                    Ok(slot) => {
                        prop_assert_eq!(Some(map.index_replace(slot, v)), std_map.insert(k, v));
                    }
                    Err(slot) => {
                        prop_assert!(!map.index_exists(slot));
                        map.index_insert(slot, k, v);
                        prop_assert_eq!(std_map.insert(k, v), None);
                    }
                },
                Operation::RemoveAll(modulus) => {
                    let modulus = modulus as i16;
                    let removed = map.remove_all(|k, _| k % modulus == 0);
                    let before = std_map.len();
                    std_map.retain(|k, _| k % modulus != 0);
                    prop_assert_eq!(removed, before - std_map.len());
                }
            }
            prop_assert_eq!(map.len(), std_map.len());
        }

        // No false negatives: every model key is found, and nothing else.
        for (k, v) in &std_map {
            prop_assert_eq!(map.get(*k), Some(v), "final content for key {}", k);
        }
        let mut keys: Vec<_> = map.keys().collect();
        keys.sort_unstable();
        let mut expected: Vec<_> = std_map.keys().copied().collect();
        expected.sort_unstable();
        prop_assert_eq!(keys, expected);
        prop_assert!(map.len() <= map.capacity() + 1);
    }

    #[test]
    fn test_zero_key_survives_other_removals(
        keys in proptest::collection::hash_set(1i64..10_000, 0..200),
        value in any::<u32>(),
    ) {
        let mut map = LongObjectHashMap::with_hasher(PhiMixer::default());
        map.insert(0, value);
        for &k in &keys {
            map.insert(k, k as u32);
        }
        for &k in &keys {
            prop_assert_eq!(map.remove(k), Some(k as u32));
            prop_assert_eq!(map.get(0), Some(&value));
        }
        prop_assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_load_factor_keeps_a_vacant_slot(
        load_factor in 0.01f64..=0.99,
        count in 0usize..2_000,
    ) {
        let mut map = LongObjectHashMap::with_load_factor(0, load_factor, PhiMixer::default())
            .unwrap();
        for k in 1..=count as i64 {
            map.insert(k, ());
        }
        prop_assert_eq!(map.len(), count);
        prop_assert!(map.len() < map.slot_count());
        prop_assert!(map.slot_count().is_power_of_two());
        for k in 1..=count as i64 {
            prop_assert!(map.contains_key(k));
        }
    }
}
