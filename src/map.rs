use crate::error::Error;
use crate::key::PrimitiveKey;

/// The capability contract shared by [`PrimitiveHashMap`] and
/// [`SortedIterationView`].
///
/// The read path is always available. The write path is fallible: a
/// [`PrimitiveHashMap`] always succeeds, while a [`SortedIterationView`]
/// rejects every write with [`Error::ReadOnly`] and leaves both itself and its
/// delegate untouched.
///
/// Slot indices returned by [`index_of`](PrimitiveMap::index_of) stay valid
/// until the next structural change of the map (insertion of a new key,
/// removal, clearing or reallocation).
///
/// [`PrimitiveHashMap`]: crate::PrimitiveHashMap
/// [`SortedIterationView`]: crate::SortedIterationView
///
/// # Examples
///
/// ```rust
/// use prim_hash::Error;
/// use prim_hash::LongObjectHashMap;
/// use prim_hash::PrimitiveMap;
/// use prim_hash::SortedIterationView;
///
/// fn bump(map: &mut impl PrimitiveMap<i64, u32>, key: i64) -> Result<(), Error> {
///     let next = map.get(key).copied().unwrap_or(0) + 1;
///     map.put(key, next)?;
///     Ok(())
/// }
///
/// let mut map = LongObjectHashMap::new();
/// bump(&mut map, 3).unwrap();
/// assert_eq!(map.get(3), Some(&1));
///
/// let mut view = SortedIterationView::new(&map, |a, b| a.cmp(&b));
/// assert!(matches!(bump(&mut view, 3), Err(Error::ReadOnly { .. })));
/// ```
pub trait PrimitiveMap<K: PrimitiveKey, V> {
    /// Returns the number of entries.
    fn len(&self) -> usize;

    /// Returns `true` if there are no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `key` is present.
    fn contains_key(&self, key: K) -> bool;

    /// Returns the value stored for `key`.
    fn get(&self, key: K) -> Option<&V>;

    /// Returns the value stored for `key`, or `default` when absent.
    fn get_or_default<'a>(&'a self, key: K, default: &'a V) -> &'a V {
        self.get(key).unwrap_or(default)
    }

    /// Locates `key`: `Ok(slot)` when present, `Err(slot)` with the slot an
    /// insertion would use when absent.
    fn index_of(&self, key: K) -> Result<usize, usize>;

    /// Returns `true` if `index` addresses an occupied slot.
    fn index_exists(&self, index: usize) -> bool;

    /// Returns the value at an occupied slot.
    fn index_get(&self, index: usize) -> Option<&V>;

    /// Inserts or overwrites `key`, returning the previous value.
    fn put(&mut self, key: K, value: V) -> Result<Option<V>, Error>;

    /// Inserts every pair, returning how many keys were new.
    fn put_all<I>(&mut self, entries: I) -> Result<usize, Error>
    where
        I: IntoIterator<Item = (K, V)>;

    /// Removes `key`, returning its value.
    fn remove(&mut self, key: K) -> Result<Option<V>, Error>;

    /// Removes every entry matching `predicate`, returning how many were
    /// removed.
    fn remove_all<F>(&mut self, predicate: F) -> Result<usize, Error>
    where
        F: FnMut(K, &V) -> bool;

    /// Replaces the value at an occupied slot, returning the old value.
    fn index_replace(&mut self, index: usize, value: V) -> Result<V, Error>;

    /// Inserts at a vacant slot obtained from `index_of(key)`.
    fn index_insert(&mut self, index: usize, key: K, value: V) -> Result<(), Error>;

    /// Removes the entry at an occupied slot, returning its value.
    fn index_remove(&mut self, index: usize) -> Result<V, Error>;

    /// Removes every entry, keeping the allocated buffers.
    fn clear(&mut self) -> Result<(), Error>;

    /// Removes every entry and returns to the default-sized buffers.
    fn release(&mut self) -> Result<(), Error>;
}
