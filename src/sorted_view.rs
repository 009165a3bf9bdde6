//! Read-only views presenting a map's entries in comparator order.
//!
//! A view is a [`PrimitiveHashMap`] borrowed together with an
//! [`IterationOrder`], a permutation of the map's occupied slot numbers. The
//! permutation is computed once by sorting slot numbers indirectly (the
//! comparator sees keys and values, the sort moves `usize`s); traversal then
//! walks the permutation and reads each slot live from the map.
//!
//! The view holds slot numbers, not copies. Detaching the order with
//! [`SortedIterationView::into_order`], overwriting values in the map and
//! attaching again makes the new values visible without re-sorting, as long
//! as no key was inserted or removed in between.

use alloc::boxed::Box;
use alloc::string::String;
use core::cmp::Ordering;
use core::fmt::Debug;
use core::hash::BuildHasher;
use core::iter::FusedIterator;

use crate::cursor::Cursor;
use crate::cursor::Entries;
use crate::cursor::Keys;
use crate::cursor::Values;
use crate::error::Error;
use crate::key::PrimitiveKey;
use crate::map::PrimitiveMap;
use crate::mixer::DefaultHashBuilder;
use crate::primitive_map::PrimitiveHashMap;

/// A permutation of a map's occupied slots.
///
/// An order is only meaningful for the map it was built from, and only while
/// that map keeps the same set of keys. [`attach`](IterationOrder::attach)
/// detects size changes; it cannot detect a key being swapped for another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterationOrder {
    slots: Box<[usize]>,
}

impl IterationOrder {
    /// Sorts the occupied slots of `map` by key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use prim_hash::IterationOrder;
    /// use prim_hash::LongObjectHashMap;
    ///
    /// let mut map = LongObjectHashMap::new();
    /// map.insert(20, "b");
    /// map.insert(10, "a");
    ///
    /// let order = IterationOrder::by_key(&map, |a, b| a.cmp(&b));
    /// let values: Vec<_> = order
    ///     .as_slice()
    ///     .iter()
    ///     .filter_map(|&slot| map.index_get(slot).copied())
    ///     .collect();
    /// assert_eq!(values, ["a", "b"]);
    /// ```
    pub fn by_key<K, V, S>(
        map: &PrimitiveHashMap<K, V, S>,
        mut comparator: impl FnMut(K, K) -> Ordering,
    ) -> Self
    where
        K: PrimitiveKey,
    {
        let mut slots: Box<[usize]> = map.occupied_slots().collect();
        slots.sort_unstable_by(|&a, &b| comparator(map.slot_key(a), map.slot_key(b)));
        Self { slots }
    }

    /// Sorts the occupied slots of `map` by key and value.
    pub fn by_entry<K, V, S>(
        map: &PrimitiveHashMap<K, V, S>,
        mut comparator: impl FnMut(K, &V, K, &V) -> Ordering,
    ) -> Self
    where
        K: PrimitiveKey,
    {
        let mut slots: Box<[usize]> = map.occupied_slots().collect();
        slots.sort_unstable_by(|&a, &b| match (map.slot_entry(a), map.slot_entry(b)) {
            (Some((ka, va)), Some((kb, vb))) => comparator(ka, va, kb, vb),
            _ => Ordering::Equal,
        });
        Self { slots }
    }

    /// Number of slots in the order.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the order covers no slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The slot numbers in iteration order.
    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.slots
    }

    /// Binds the order to `map`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StaleView`] if `map` no longer holds as many entries
    /// as the order covers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use prim_hash::Error;
    /// use prim_hash::LongObjectHashMap;
    /// use prim_hash::SortedIterationView;
    ///
    /// let mut map = LongObjectHashMap::new();
    /// map.insert(1, 10);
    ///
    /// let order = SortedIterationView::new(&map, |a, b| a.cmp(&b)).into_order();
    /// map.insert(2, 20);
    ///
    /// assert_eq!(
    ///     order.attach(&map).unwrap_err(),
    ///     Error::StaleView { expected: 1, actual: 2 }
    /// );
    /// ```
    pub fn attach<K, V, S>(
        self,
        map: &PrimitiveHashMap<K, V, S>,
    ) -> Result<SortedIterationView<'_, K, V, S>, Error>
    where
        K: PrimitiveKey,
        S: BuildHasher,
    {
        if map.len() != self.len() {
            return Err(Error::StaleView {
                expected: self.len(),
                actual: map.len(),
            });
        }
        Ok(self.attach_unchecked(map))
    }

    /// Binds the order to `map` without checking that it still fits.
    ///
    /// Traversing a stale view never reads out of bounds, but it may skip
    /// entries, and it fails the staleness assertion when that is enabled.
    pub fn attach_unchecked<K, V, S>(
        self,
        map: &PrimitiveHashMap<K, V, S>,
    ) -> SortedIterationView<'_, K, V, S> {
        SortedIterationView {
            delegate: map,
            order: self,
        }
    }
}

/// A read-only view of a [`PrimitiveHashMap`] that iterates in sorted order.
///
/// Lookups pass straight through to the map. Traversal follows the
/// [`IterationOrder`] computed at construction. Every write attempted through
/// [`PrimitiveMap`] fails with [`Error::ReadOnly`].
///
/// ## Example
///
/// ```rust
/// use prim_hash::LongObjectHashMap;
/// use prim_hash::SortedIterationView;
///
/// let mut map = LongObjectHashMap::new();
/// map.insert(5, "x");
/// map.insert(1, "y");
/// map.insert(3, "z");
///
/// let view = SortedIterationView::new(&map, |a, b| a.cmp(&b));
/// assert_eq!(view.keys().collect::<Vec<_>>(), [1, 3, 5]);
/// assert_eq!(view.values().copied().collect::<Vec<_>>(), ["y", "z", "x"]);
/// assert_eq!(view.get(3), Some(&"z"));
/// ```
pub struct SortedIterationView<'a, K, V, S = DefaultHashBuilder> {
    delegate: &'a PrimitiveHashMap<K, V, S>,
    order: IterationOrder,
}

impl<K, V, S> Clone for SortedIterationView<'_, K, V, S> {
    fn clone(&self) -> Self {
        Self {
            delegate: self.delegate,
            order: self.order.clone(),
        }
    }
}

impl<K, V, S> Debug for SortedIterationView<'_, K, V, S>
where
    K: PrimitiveKey,
    V: Debug,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a, K, V, S> SortedIterationView<'a, K, V, S>
where
    K: PrimitiveKey,
    S: BuildHasher,
{
    /// Creates a view iterating `map` in the order given by a key comparator.
    pub fn new(
        map: &'a PrimitiveHashMap<K, V, S>,
        comparator: impl FnMut(K, K) -> Ordering,
    ) -> Self {
        IterationOrder::by_key(map, comparator).attach_unchecked(map)
    }

    /// Creates a view iterating `map` in the order given by an entry
    /// comparator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use prim_hash::LongObjectHashMap;
    /// use prim_hash::SortedIterationView;
    ///
    /// let mut map = LongObjectHashMap::new();
    /// map.insert(1, 30);
    /// map.insert(2, 10);
    /// map.insert(3, 20);
    ///
    /// let by_value = SortedIterationView::with_entry_comparator(&map, |_, a, _, b| a.cmp(b));
    /// assert_eq!(by_value.keys().collect::<Vec<_>>(), [2, 3, 1]);
    /// ```
    pub fn with_entry_comparator(
        map: &'a PrimitiveHashMap<K, V, S>,
        comparator: impl FnMut(K, &V, K, &V) -> Ordering,
    ) -> Self {
        IterationOrder::by_entry(map, comparator).attach_unchecked(map)
    }

    /// Detaches the view, keeping its iteration order.
    pub fn into_order(self) -> IterationOrder {
        self.order
    }

    /// The map the view reads from.
    pub fn delegate(&self) -> &'a PrimitiveHashMap<K, V, S> {
        self.delegate
    }

    /// The slot numbers in iteration order.
    pub fn iteration_order(&self) -> &[usize] {
        self.order.as_slice()
    }

    /// Asserts that the delegate still holds as many entries as the
    /// iteration order covers.
    ///
    /// Compiled in with `debug_assertions` or the `strict-views` feature.
    #[inline]
    pub fn check_unmodified(&self) {
        #[cfg(any(debug_assertions, feature = "strict-views"))]
        assert!(
            self.order.len() == self.delegate.len(),
            "{}",
            Error::StaleView {
                expected: self.order.len(),
                actual: self.delegate.len(),
            }
        );
    }

    /// Returns the number of entries in the delegate.
    #[inline]
    pub fn len(&self) -> usize {
        self.check_unmodified();
        self.delegate.len()
    }

    /// Returns `true` if the delegate is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Looks `key` up in the delegate.
    #[inline]
    pub fn get(&self, key: K) -> Option<&'a V> {
        self.delegate.get(key)
    }

    /// Looks `key` up in the delegate, falling back to `default`.
    #[inline]
    pub fn get_or_default<'b>(&self, key: K, default: &'b V) -> &'b V
    where
        'a: 'b,
    {
        self.delegate.get_or_default(key, default)
    }

    /// Returns `true` if the delegate contains `key`.
    #[inline]
    pub fn contains_key(&self, key: K) -> bool {
        self.delegate.contains_key(key)
    }

    /// See [`PrimitiveHashMap::index_of`].
    #[inline]
    pub fn index_of(&self, key: K) -> Result<usize, usize> {
        self.delegate.index_of(key)
    }

    /// See [`PrimitiveHashMap::index_exists`].
    #[inline]
    pub fn index_exists(&self, index: usize) -> bool {
        self.delegate.index_exists(index)
    }

    /// See [`PrimitiveHashMap::index_get`].
    #[inline]
    pub fn index_get(&self, index: usize) -> Option<&'a V> {
        self.delegate.index_get(index)
    }

    /// Returns an iterator over the entries in sorted order.
    pub fn cursors(&self) -> SortedCursors<'_, K, V, S> {
        self.check_unmodified();
        SortedCursors {
            map: self.delegate,
            slots: self.order.slots.iter(),
        }
    }

    /// Returns an iterator over `(key, &value)` pairs in sorted order.
    pub fn iter(&self) -> Entries<SortedCursors<'_, K, V, S>> {
        Entries::new(self.cursors())
    }

    /// Returns an iterator over the keys in sorted order.
    pub fn keys(&self) -> Keys<SortedCursors<'_, K, V, S>> {
        Keys::new(self.cursors())
    }

    /// Returns an iterator over the values in sorted order.
    pub fn values(&self) -> Values<SortedCursors<'_, K, V, S>> {
        Values::new(self.cursors())
    }

    /// Calls `f` for every entry in sorted order.
    pub fn for_each(&self, mut f: impl FnMut(K, &V)) {
        for cursor in self.cursors() {
            f(cursor.key, cursor.value);
        }
    }

    /// Calls `f` for entries in sorted order until it returns `false`.
    ///
    /// Returns `true` if every entry was visited.
    pub fn for_each_while(&self, mut f: impl FnMut(K, &V) -> bool) -> bool {
        self.cursors().all(|cursor| f(cursor.key, cursor.value))
    }

    /// Returns `true` if some entry holds `value`.
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.values().any(|v| v == value)
    }

    /// See [`PrimitiveHashMap::visualize_key_distribution`].
    pub fn visualize_key_distribution(&self, characters: usize) -> String {
        self.delegate.visualize_key_distribution(characters)
    }
}

impl<'b, K, V, S> IntoIterator for &'b SortedIterationView<'_, K, V, S>
where
    K: PrimitiveKey,
    S: BuildHasher,
{
    type IntoIter = Entries<SortedCursors<'b, K, V, S>>;
    type Item = (K, &'b V);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, S> PrimitiveMap<K, V> for SortedIterationView<'_, K, V, S>
where
    K: PrimitiveKey,
    S: BuildHasher,
{
    fn len(&self) -> usize {
        SortedIterationView::len(self)
    }

    fn contains_key(&self, key: K) -> bool {
        SortedIterationView::contains_key(self, key)
    }

    fn get(&self, key: K) -> Option<&V> {
        SortedIterationView::get(self, key)
    }

    fn index_of(&self, key: K) -> Result<usize, usize> {
        SortedIterationView::index_of(self, key)
    }

    fn index_exists(&self, index: usize) -> bool {
        SortedIterationView::index_exists(self, index)
    }

    fn index_get(&self, index: usize) -> Option<&V> {
        SortedIterationView::index_get(self, index)
    }

    fn put(&mut self, _key: K, _value: V) -> Result<Option<V>, Error> {
        Err(Error::ReadOnly { operation: "put" })
    }

    fn put_all<I>(&mut self, _entries: I) -> Result<usize, Error>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        Err(Error::ReadOnly {
            operation: "put_all",
        })
    }

    fn remove(&mut self, _key: K) -> Result<Option<V>, Error> {
        Err(Error::ReadOnly {
            operation: "remove",
        })
    }

    fn remove_all<F>(&mut self, _predicate: F) -> Result<usize, Error>
    where
        F: FnMut(K, &V) -> bool,
    {
        Err(Error::ReadOnly {
            operation: "remove_all",
        })
    }

    fn index_replace(&mut self, _index: usize, _value: V) -> Result<V, Error> {
        Err(Error::ReadOnly {
            operation: "index_replace",
        })
    }

    fn index_insert(&mut self, _index: usize, _key: K, _value: V) -> Result<(), Error> {
        Err(Error::ReadOnly {
            operation: "index_insert",
        })
    }

    fn index_remove(&mut self, _index: usize) -> Result<V, Error> {
        Err(Error::ReadOnly {
            operation: "index_remove",
        })
    }

    fn clear(&mut self) -> Result<(), Error> {
        Err(Error::ReadOnly { operation: "clear" })
    }

    fn release(&mut self) -> Result<(), Error> {
        Err(Error::ReadOnly {
            operation: "release",
        })
    }
}

/// An iterator over the entries of a [`SortedIterationView`], in sorted
/// order.
///
/// Slots that are out of range or vacant in the delegate are skipped, so the
/// iterator may yield fewer entries than its upper size bound.
///
/// This struct is created by [`SortedIterationView::cursors`].
pub struct SortedCursors<'b, K, V, S> {
    map: &'b PrimitiveHashMap<K, V, S>,
    slots: core::slice::Iter<'b, usize>,
}

impl<K, V, S> Clone for SortedCursors<'_, K, V, S> {
    fn clone(&self) -> Self {
        Self {
            map: self.map,
            slots: self.slots.clone(),
        }
    }
}

impl<'b, K, V, S> Iterator for SortedCursors<'b, K, V, S>
where
    K: PrimitiveKey,
{
    type Item = Cursor<'b, K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        for &index in self.slots.by_ref() {
            if let Some((key, value)) = self.map.slot_entry(index) {
                return Some(Cursor { index, key, value });
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.slots.len()))
    }
}

impl<K, V, S> DoubleEndedIterator for SortedCursors<'_, K, V, S>
where
    K: PrimitiveKey,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        while let Some(&index) = self.slots.next_back() {
            if let Some((key, value)) = self.map.slot_entry(index) {
                return Some(Cursor { index, key, value });
            }
        }
        None
    }
}

impl<K: PrimitiveKey, V, S> FusedIterator for SortedCursors<'_, K, V, S> {}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::format;
    use alloc::string::String;
    use alloc::string::ToString;
    use alloc::vec;
    use alloc::vec::Vec;

    use rand::Rng;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;
    use crate::mixer::PhiMixer;

    type Map<V> = PrimitiveHashMap<i64, V, PhiMixer>;

    fn xyz() -> Map<&'static str> {
        let mut map = Map::with_hasher(PhiMixer::default());
        map.insert(5, "x");
        map.insert(1, "y");
        map.insert(3, "z");
        map
    }

    #[test]
    fn iterates_in_key_order() {
        let map = xyz();
        let view = SortedIterationView::new(&map, |a, b| a.cmp(&b));

        assert_eq!(view.keys().collect::<Vec<_>>(), vec![1, 3, 5]);
        assert_eq!(view.values().copied().collect::<Vec<_>>(), vec!["y", "z", "x"]);
        assert_eq!(view.len(), 3);
        assert_eq!(view.iteration_order().len(), 3);

        for cursor in view.cursors() {
            assert_eq!(map.index_of(cursor.key), Ok(cursor.index));
        }
    }

    #[test]
    fn zero_key_takes_its_place_in_the_order() {
        let mut map = Map::with_hasher(PhiMixer::default());
        for k in [7, 0, -2, 3] {
            map.insert(k, k * 10);
        }

        let ascending = SortedIterationView::new(&map, |a, b| a.cmp(&b));
        assert_eq!(ascending.keys().collect::<Vec<_>>(), vec![-2, 0, 3, 7]);

        let descending = SortedIterationView::new(&map, |a, b| b.cmp(&a));
        assert_eq!(descending.keys().collect::<Vec<_>>(), vec![7, 3, 0, -2]);
        assert_eq!(
            descending.cursors().rev().map(|c| c.key).collect::<Vec<_>>(),
            vec![-2, 0, 3, 7]
        );
    }

    #[test]
    fn entry_comparator_sees_values() {
        let mut map = Map::with_hasher(PhiMixer::default());
        map.insert(1, "pear".to_string());
        map.insert(2, "apple".to_string());
        map.insert(3, "fig".to_string());
        map.insert(4, "apple".to_string());

        let view = SortedIterationView::with_entry_comparator(&map, |ka, va, kb, vb| {
            va.cmp(vb).then(kb.cmp(&ka))
        });
        assert_eq!(view.keys().collect::<Vec<_>>(), vec![4, 2, 3, 1]);
    }

    #[test]
    fn writes_are_rejected() {
        let map = xyz();
        let snapshot = map.clone();
        let mut view = SortedIterationView::new(&map, |a, b| a.cmp(&b));

        let rejected = |result: Result<(), Error>, operation: &str| match result {
            Err(Error::ReadOnly { operation: op }) => assert_eq!(op, operation),
            other => panic!("expected read-only error, got {other:?}"),
        };

        rejected(view.put(9, "w").map(drop), "put");
        rejected(view.put(5, "w").map(drop), "put");
        rejected(view.put_all([(9, "w")]).map(drop), "put_all");
        rejected(view.remove(5).map(drop), "remove");
        rejected(view.remove_all(|_, _| true).map(drop), "remove_all");
        rejected(view.index_replace(0, "w").map(drop), "index_replace");
        rejected(view.index_insert(0, 9, "w"), "index_insert");
        rejected(view.index_remove(0).map(drop), "index_remove");
        rejected(PrimitiveMap::clear(&mut view), "clear");
        rejected(PrimitiveMap::release(&mut view), "release");

        assert_eq!(view.keys().collect::<Vec<_>>(), vec![1, 3, 5]);
        drop(view);
        assert_eq!(map, snapshot);
    }

    #[test]
    fn read_only_error_message() {
        let map = xyz();
        let mut view = SortedIterationView::new(&map, |a, b| a.cmp(&b));
        let err = view.remove(1).unwrap_err();
        assert!(err.to_string().starts_with("read-only view cannot be modified"));
    }

    #[test]
    fn reads_pass_through() {
        let map = xyz();
        let view = SortedIterationView::new(&map, |a, b| a.cmp(&b));

        assert_eq!(view.get(5), Some(&"x"));
        assert_eq!(view.get(6), None);
        assert_eq!(view.get_or_default(6, &"none"), &"none");
        assert!(view.contains_key(1));
        assert!(!view.contains_key(0));

        let slot = view.index_of(3).unwrap();
        assert!(view.index_exists(slot));
        assert_eq!(view.index_get(slot), Some(&"z"));
        assert_eq!(view.index_of(4), map.index_of(4));
        assert_eq!(
            view.visualize_key_distribution(8),
            map.visualize_key_distribution(8)
        );
        assert!(core::ptr::eq(view.delegate(), &map));
    }

    #[test]
    fn view_reflects_value_overwrites() {
        let mut map = xyz();
        let order = SortedIterationView::new(&map, |a, b| a.cmp(&b)).into_order();

        map.insert(3, "updated");
        *map.get_mut(5).unwrap() = "also";

        let view = order.attach(&map).unwrap();
        assert_eq!(
            view.values().copied().collect::<Vec<_>>(),
            vec!["y", "updated", "also"]
        );
    }

    #[test]
    fn attach_rejects_resized_map() {
        let mut map = xyz();
        let order = IterationOrder::by_key(&map, |a, b| a.cmp(&b));
        map.remove(1);

        assert_eq!(
            order.clone().attach(&map).unwrap_err(),
            Error::StaleView {
                expected: 3,
                actual: 2
            }
        );
    }

    #[cfg(any(debug_assertions, feature = "strict-views"))]
    #[test]
    #[should_panic(expected = "delegate map changed")]
    fn stale_traversal_is_asserted() {
        let mut map = xyz();
        let order = IterationOrder::by_key(&map, |a, b| a.cmp(&b));
        map.insert(11, "new");

        let view = order.attach_unchecked(&map);
        let _ = view.keys().count();
    }

    #[test]
    fn stale_slots_are_skipped() {
        let mut map = xyz();
        let vacant = map.index_of(42).unwrap_err();
        let occupied = map.index_of(3).unwrap();
        let slots = [vacant, occupied, usize::MAX, map.slot_count() + 7];
        map.insert(0, "zero");

        let cursors = SortedCursors {
            map: &map,
            slots: slots.iter(),
        };
        assert_eq!(cursors.size_hint(), (0, Some(4)));
        let seen: Vec<_> = cursors.map(|c| c.key).collect();
        assert_eq!(seen, vec![3]);
    }

    #[test]
    fn for_each_variants() {
        let map = xyz();
        let view = SortedIterationView::new(&map, |a, b| a.cmp(&b));

        let mut seen = String::new();
        view.for_each(|_, v| seen.push_str(v));
        assert_eq!(seen, "yzx");

        let mut visited = Vec::new();
        let completed = view.for_each_while(|k, _| {
            visited.push(k);
            k < 3
        });
        assert!(!completed);
        assert_eq!(visited, vec![1, 3]);
        assert!(view.for_each_while(|_, _| true));

        assert!(view.contains_value(&"z"));
        assert!(!view.contains_value(&"q"));
    }

    #[test]
    fn empty_view() {
        let map: Map<u8> = Map::with_hasher(PhiMixer::default());
        let view = SortedIterationView::new(&map, |a, b| a.cmp(&b));
        assert!(view.is_empty());
        assert_eq!(view.iter().next(), None);
        assert!(view.iteration_order().is_empty());
    }

    #[test]
    fn matches_btree_order_on_random_keys() {
        let mut rng = SmallRng::seed_from_u64(0xC0FFEE);
        let mut map = Map::with_hasher(PhiMixer::with_seed(rng.random()));
        let mut model = BTreeMap::new();
        for _ in 0..5_000 {
            let key = rng.random_range(-10_000i64..10_000);
            let value = rng.random::<u16>();
            map.insert(key, value);
            model.insert(key, value);
        }
        for _ in 0..1_000 {
            let key = rng.random_range(-10_000i64..10_000);
            assert_eq!(map.remove(key), model.remove(&key));
        }

        let view = SortedIterationView::new(&map, |a, b| a.cmp(&b));
        let entries: Vec<_> = view.iter().map(|(k, v)| (k, *v)).collect();
        let expected: Vec<_> = model.into_iter().collect();
        assert_eq!(entries, expected);
    }

    #[test]
    fn debug_lists_sorted_entries() {
        let map = xyz();
        let view = SortedIterationView::new(&map, |a, b| a.cmp(&b));
        assert_eq!(format!("{view:?}"), r#"{1: "y", 3: "z", 5: "x"}"#);
    }
}
