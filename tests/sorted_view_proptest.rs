use std::collections::BTreeMap;

use prim_hash::Error;
use prim_hash::IterationOrder;
use prim_hash::PhiMixer;
use prim_hash::PrimitiveHashMap;
use prim_hash::PrimitiveMap;
use prim_hash::SortedIterationView;
use proptest::prelude::*;

fn build(entries: &[(i32, u8)]) -> (PrimitiveHashMap<i32, u8, PhiMixer>, BTreeMap<i32, u8>) {
    let mut map = PrimitiveHashMap::with_hasher(PhiMixer::default());
    let mut model = BTreeMap::new();
    for &(k, v) in entries {
        map.insert(k, v);
        model.insert(k, v);
    }
    (map, model)
}

proptest! {
    #[test]
    fn test_view_matches_btree_order(
        entries in proptest::collection::vec((any::<i32>(), any::<u8>()), 0..300),
    ) {
        let (map, model) = build(&entries);
        let view = SortedIterationView::new(&map, |a, b| a.cmp(&b));

        let seen: Vec<_> = view.iter().map(|(k, v)| (k, *v)).collect();
        let expected: Vec<_> = model.iter().map(|(k, v)| (*k, *v)).collect();
        prop_assert_eq!(seen, expected);
        prop_assert_eq!(view.len(), model.len());

        let mut slots = view.iteration_order().to_vec();
        slots.sort_unstable();
        slots.dedup();
        prop_assert_eq!(slots.len(), model.len());
    }

    #[test]
    fn test_entry_order_is_sorted(
        entries in proptest::collection::vec((any::<i32>(), any::<u8>()), 0..300),
    ) {
        let (map, _) = build(&entries);
        let view = SortedIterationView::with_entry_comparator(&map, |ka, va, kb, vb| {
            va.cmp(vb).then(ka.cmp(&kb))
        });
        let seen: Vec<_> = view.iter().map(|(k, v)| (*v, k)).collect();
        let mut expected = seen.clone();
        expected.sort_unstable();
        prop_assert_eq!(seen, expected);
    }

    #[test]
    fn test_view_rejects_writes(
        entries in proptest::collection::vec((any::<i32>(), any::<u8>()), 1..100),
        key in any::<i32>(),
        value in any::<u8>(),
    ) {
        let (map, model) = build(&entries);
        let mut view = SortedIterationView::new(&map, |a, b| a.cmp(&b));

        prop_assert!(matches!(view.put(key, value), Err(Error::ReadOnly { .. })), "{}", stringify!(matches!(view.put(key, value), Err(Error::ReadOnly { .. }))));
        prop_assert!(matches!(view.remove(key), Err(Error::ReadOnly { .. })), "{}", stringify!(matches!(view.remove(key), Err(Error::ReadOnly { .. }))));
        let slot = view.index_of(key).unwrap_or_else(|slot| slot);
        prop_assert!(matches!(view.index_remove(slot), Err(Error::ReadOnly { .. })), "{}", stringify!(matches!(view.index_remove(slot), Err(Error::ReadOnly { .. }))));
        prop_assert!(matches!(view.index_insert(slot, key, value), Err(Error::ReadOnly { .. })), "{}", stringify!(matches!(view.index_insert(slot, key, value), Err(Error::ReadOnly { .. }))));
        prop_assert!(matches!(PrimitiveMap::clear(&mut view), Err(Error::ReadOnly { .. })), "{}", stringify!(matches!(PrimitiveMap::clear(&mut view), Err(Error::ReadOnly { .. }))));

        prop_assert_eq!(view.len(), model.len());
        prop_assert_eq!(view.get(key), model.get(&key));
    }

    #[test]
    fn test_reattached_view_sees_overwrites(
        entries in proptest::collection::vec((any::<i32>(), any::<u8>()), 1..200),
        bump in 1u8..=255,
    ) {
        let (mut map, model) = build(&entries);
        let order = IterationOrder::by_key(&map, |a, b| a.cmp(&b));

        for value in map.values_mut() {
            *value = value.wrapping_add(bump);
        }

        let view = order.attach(&map).unwrap();
        let seen: Vec<_> = view.iter().map(|(k, v)| (k, *v)).collect();
        let expected: Vec<_> = model.iter().map(|(k, v)| (*k, v.wrapping_add(bump))).collect();
        prop_assert_eq!(seen, expected);
    }
}
