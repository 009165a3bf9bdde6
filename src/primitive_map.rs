use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::BuildHasher;
use core::iter::Enumerate;
use core::iter::FusedIterator;
use core::marker::PhantomData;

use crate::cursor::Cursor;
use crate::cursor::Entries;
use crate::cursor::Keys;
use crate::cursor::Values;
use crate::error::Error;
use crate::key::PrimitiveKey;
use crate::map::PrimitiveMap;
use crate::mixer::DefaultHashBuilder;

/// Load factor used unless one is given explicitly.
pub const DEFAULT_LOAD_FACTOR: f64 = 0.75;

/// Smallest accepted load factor.
pub const MIN_LOAD_FACTOR: f64 = 1.0 / 100.0;

/// Largest accepted load factor.
pub const MAX_LOAD_FACTOR: f64 = 99.0 / 100.0;

/// Number of entries a default map holds before its first growth.
pub const DEFAULT_EXPECTED_ELEMENTS: usize = 4;

/// Smallest number of regular slots ever allocated.
const MIN_SLOT_COUNT: usize = 4;

#[inline(always)]
fn ceil_to_usize(value: f64) -> usize {
    let truncated = value as usize;
    if (truncated as f64) < value {
        truncated.checked_add(1).expect("capacity overflow")
    } else {
        truncated
    }
}

/// Number of regular slots needed to hold `elements` entries without growth.
///
/// Always leaves at least one slot vacant so probe sequences terminate.
#[inline]
fn min_slot_count(elements: usize, load_factor: f64) -> usize {
    let mut length = ceil_to_usize(elements as f64 / load_factor);
    if length == elements {
        length = length.checked_add(1).expect("capacity overflow");
    }
    length
        .max(MIN_SLOT_COUNT)
        .checked_next_power_of_two()
        .expect("capacity overflow")
}

#[inline]
fn expand_at_count(slot_count: usize, load_factor: f64) -> usize {
    (slot_count - 1).min(ceil_to_usize(slot_count as f64 * load_factor))
}

/// Allocates `slot_count` regular slots plus the reserved zero-key slot.
fn allocate_buffers<K: PrimitiveKey, V>(slot_count: usize) -> (Box<[K]>, Box<[Option<V>]>) {
    let len = slot_count.checked_add(1).expect("capacity overflow");
    let keys = vec![K::EMPTY; len].into_boxed_slice();
    let values = core::iter::repeat_with(|| None).take(len).collect();
    (keys, values)
}

/// An open-addressing hash map over primitive keys.
///
/// Keys and values live in two parallel arrays of `2^k + 1` slots. Collisions
/// are resolved by linear probing; removal uses backward-shift deletion, so
/// there are no tombstones and probe chains never degrade over time. The zero
/// key marks vacant slots and is stored separately, in the extra slot at the
/// end of the arrays.
///
/// Besides the usual hash-based operations the map exposes the slot indices
/// it uses internally ([`index_of`], [`index_get`], [`index_insert`], ...),
/// which lets a caller look a key up once and then read, replace, insert or
/// remove at that slot without hashing again.
///
/// ## Performance Characteristics
///
/// - **Memory**: `size_of::<K>() + size_of::<Option<V>>()` per slot, with
///   between `1 / load_factor` and `2 / load_factor` slots per entry.
/// - **Growth**: the slot count doubles whenever a new key would push the
///   number of regular entries past the load factor.
///
/// [`index_of`]: PrimitiveHashMap::index_of
/// [`index_get`]: PrimitiveHashMap::index_get
/// [`index_insert`]: PrimitiveHashMap::index_insert
///
/// ## Example
///
/// ```rust
/// use prim_hash::LongObjectHashMap;
///
/// let mut map = LongObjectHashMap::new();
/// map.insert(0, "zero");
/// map.insert(42, "answer");
///
/// match map.index_of(7) {
///     Ok(_) => unreachable!(),
///     Err(slot) => map.index_insert(slot, 7, "seven"),
/// }
///
/// assert_eq!(map.len(), 3);
/// assert_eq!(map.get(0), Some(&"zero"));
/// assert_eq!(map.get(7), Some(&"seven"));
/// ```
#[derive(Clone)]
pub struct PrimitiveHashMap<K, V, S = DefaultHashBuilder> {
    keys: Box<[K]>,
    values: Box<[Option<V>]>,

    mask: usize,
    assigned: usize,
    resize_at: usize,
    has_empty_key: bool,
    load_factor: f64,

    hash_builder: S,
}

/// A map from 64-bit signed integers to arbitrary values.
pub type LongObjectHashMap<V, S = DefaultHashBuilder> = PrimitiveHashMap<i64, V, S>;

impl<K, V, S> Debug for PrimitiveHashMap<K, V, S>
where
    K: PrimitiveKey,
    V: Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> PrimitiveHashMap<K, V, DefaultHashBuilder>
where
    K: PrimitiveKey,
{
    /// Creates an empty map using the default hasher builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use prim_hash::PrimitiveHashMap;
    ///
    /// let map: PrimitiveHashMap<u32, String> = PrimitiveHashMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }

    /// Creates an empty map able to hold `capacity` entries without growing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use prim_hash::PrimitiveHashMap;
    ///
    /// let map: PrimitiveHashMap<u32, String> = PrimitiveHashMap::with_capacity(100);
    /// assert!(map.capacity() >= 100);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }
}

impl<K, V, S> PrimitiveHashMap<K, V, S>
where
    K: PrimitiveKey,
    S: BuildHasher,
{
    /// Creates an empty map with the given hasher builder.
    pub fn with_hasher(hash_builder: S) -> Self {
        Self::with_capacity_and_hasher(DEFAULT_EXPECTED_ELEMENTS, hash_builder)
    }

    /// Creates an empty map able to hold `capacity` entries without growing,
    /// hashing keys with `hash_builder`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use prim_hash::PhiMixer;
    /// use prim_hash::PrimitiveHashMap;
    ///
    /// let map: PrimitiveHashMap<i16, (), _> =
    ///     PrimitiveHashMap::with_capacity_and_hasher(1000, PhiMixer::default());
    /// assert!(map.capacity() >= 1000);
    /// assert!(map.slot_count().is_power_of_two());
    /// ```
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self::build(capacity, DEFAULT_LOAD_FACTOR, hash_builder)
    }

    /// Creates an empty map with an explicit load factor.
    ///
    /// The load factor is the fraction of regular slots that may be occupied
    /// before the map doubles its slot count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LoadFactorOutOfRange`] unless `load_factor` lies in
    /// `[`[`MIN_LOAD_FACTOR`]`, `[`MAX_LOAD_FACTOR`]`]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use prim_hash::Error;
    /// use prim_hash::PhiMixer;
    /// use prim_hash::PrimitiveHashMap;
    ///
    /// let dense = PrimitiveHashMap::<u64, u8, _>::with_load_factor(64, 0.9, PhiMixer::default())
    ///     .unwrap();
    /// assert!(dense.capacity() >= 64);
    ///
    /// let err = PrimitiveHashMap::<u64, u8, _>::with_load_factor(64, 1.5, PhiMixer::default());
    /// assert_eq!(err.unwrap_err(), Error::LoadFactorOutOfRange(1.5));
    /// ```
    pub fn with_load_factor(
        capacity: usize,
        load_factor: f64,
        hash_builder: S,
    ) -> Result<Self, Error> {
        if !(MIN_LOAD_FACTOR..=MAX_LOAD_FACTOR).contains(&load_factor) {
            return Err(Error::LoadFactorOutOfRange(load_factor));
        }
        Ok(Self::build(capacity, load_factor, hash_builder))
    }

    fn build(capacity: usize, load_factor: f64, hash_builder: S) -> Self {
        let slot_count = min_slot_count(capacity, load_factor);
        let (keys, values) = allocate_buffers(slot_count);
        Self {
            keys,
            values,
            mask: slot_count - 1,
            assigned: 0,
            resize_at: expand_at_count(slot_count, load_factor),
            has_empty_key: false,
            load_factor,
            hash_builder,
        }
    }

    /// Returns the number of entries in the map.
    #[inline]
    pub fn len(&self) -> usize {
        self.assigned + self.has_empty_key as usize
    }

    /// Returns `true` if the map contains no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of non-zero keys the map can hold before it grows.
    ///
    /// The zero key never counts against the capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.resize_at
    }

    /// Returns the number of regular slots, always a power of two.
    #[inline]
    pub fn slot_count(&self) -> usize {
        self.mask + 1
    }

    /// Returns the load factor the map grows at.
    #[inline]
    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    /// Returns a reference to the map's hasher builder.
    #[inline]
    pub fn hasher(&self) -> &S {
        &self.hash_builder
    }

    #[inline(always)]
    fn ideal_slot(&self, key: K) -> usize {
        (self.hash_builder.hash_one(key) as usize) & self.mask
    }

    #[inline(always)]
    fn empty_key_slot(&self) -> usize {
        self.mask + 1
    }

    /// Linear probe for a non-zero key.
    #[inline]
    fn probe(&self, key: K) -> Result<usize, usize> {
        debug_assert!(!key.is_empty_key());
        let mask = self.mask;
        let mut slot = self.ideal_slot(key);
        loop {
            let existing = self.keys[slot];
            if existing.is_empty_key() {
                return Err(slot);
            }
            if existing == key {
                return Ok(slot);
            }
            slot = (slot + 1) & mask;
        }
    }

    /// Locates `key` in the slot arrays.
    ///
    /// Returns `Ok(slot)` if the key is present and `Err(slot)` with the slot
    /// an insertion of `key` would use otherwise. The zero key always maps to
    /// the reserved slot at [`slot_count`](Self::slot_count).
    ///
    /// The returned index stays valid until the map is structurally modified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use prim_hash::LongObjectHashMap;
    ///
    /// let mut map = LongObjectHashMap::new();
    /// map.insert(5, 50);
    ///
    /// let slot = map.index_of(5).unwrap();
    /// assert_eq!(map.index_get(slot), Some(&50));
    /// assert!(map.index_of(6).is_err());
    /// assert_eq!(map.index_of(0), Err(map.slot_count()));
    /// ```
    #[inline]
    pub fn index_of(&self, key: K) -> Result<usize, usize> {
        if key.is_empty_key() {
            let slot = self.empty_key_slot();
            return if self.has_empty_key { Ok(slot) } else { Err(slot) };
        }
        self.probe(key)
    }

    /// Returns `true` if `index` addresses an occupied slot.
    #[inline]
    pub fn index_exists(&self, index: usize) -> bool {
        if index <= self.mask {
            !self.keys[index].is_empty_key()
        } else {
            index == self.empty_key_slot() && self.has_empty_key
        }
    }

    /// Returns the value stored at slot `index`, if occupied.
    #[inline]
    pub fn index_get(&self, index: usize) -> Option<&V> {
        self.values.get(index)?.as_ref()
    }

    /// Returns a mutable reference to the value stored at slot `index`, if
    /// occupied.
    #[inline]
    pub fn index_get_mut(&mut self, index: usize) -> Option<&mut V> {
        self.values.get_mut(index)?.as_mut()
    }

    /// Replaces the value at an occupied slot and returns the previous one.
    ///
    /// # Panics
    ///
    /// Panics if `index` does not address an occupied slot.
    pub fn index_replace(&mut self, index: usize, value: V) -> V {
        match self.values.get_mut(index) {
            Some(Some(current)) => core::mem::replace(current, value),
            _ => panic!("slot {index} is not occupied"),
        }
    }

    /// Inserts `key` at a vacant slot previously returned as `Err(index)` by
    /// [`index_of(key)`](Self::index_of).
    ///
    /// If the insertion makes the map grow, `index` and every other slot
    /// index obtained earlier are invalid afterwards; look the key up again.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a vacant slot suitable for `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use prim_hash::LongObjectHashMap;
    ///
    /// let mut map = LongObjectHashMap::new();
    /// if let Err(slot) = map.index_of(11) {
    ///     map.index_insert(slot, 11, "eleven");
    /// }
    /// assert_eq!(map.get(11), Some(&"eleven"));
    /// ```
    pub fn index_insert(&mut self, index: usize, key: K, value: V) {
        if key.is_empty_key() {
            assert!(
                index == self.empty_key_slot() && !self.has_empty_key,
                "slot {index} is not the vacant zero-key slot"
            );
            self.values[index] = Some(value);
            self.has_empty_key = true;
            return;
        }

        assert!(
            index <= self.mask && self.keys[index].is_empty_key(),
            "slot {index} is not vacant"
        );
        debug_assert_eq!(self.probe(key), Err(index));

        self.keys[index] = key;
        self.values[index] = Some(value);
        self.assigned += 1;
        if self.assigned > self.resize_at {
            let next = self.slot_count().checked_mul(2).expect("capacity overflow");
            self.reallocate(next);
        }
    }

    /// Removes the entry at an occupied slot and returns its value.
    ///
    /// Entries of the same probe cluster may move to close the gap, which
    /// invalidates their previously obtained slot indices.
    ///
    /// # Panics
    ///
    /// Panics if `index` does not address an occupied slot.
    pub fn index_remove(&mut self, index: usize) -> V {
        let Some(value) = self.values.get_mut(index).and_then(Option::take) else {
            panic!("slot {index} is not occupied");
        };

        if index == self.empty_key_slot() {
            self.has_empty_key = false;
        } else {
            self.shift_conflicting_keys(index);
        }
        value
    }

    /// Returns a reference to the value stored for `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use prim_hash::PrimitiveHashMap;
    ///
    /// let mut map = PrimitiveHashMap::new();
    /// map.insert(-3i32, "minus three");
    /// assert_eq!(map.get(-3), Some(&"minus three"));
    /// assert_eq!(map.get(3), None);
    /// ```
    #[inline]
    pub fn get(&self, key: K) -> Option<&V> {
        match self.index_of(key) {
            Ok(slot) => self.values[slot].as_ref(),
            Err(_) => None,
        }
    }

    /// Returns a mutable reference to the value stored for `key`.
    #[inline]
    pub fn get_mut(&mut self, key: K) -> Option<&mut V> {
        match self.index_of(key) {
            Ok(slot) => self.values[slot].as_mut(),
            Err(_) => None,
        }
    }

    /// Returns the value stored for `key`, or `default` if the key is absent.
    #[inline]
    pub fn get_or_default<'a>(&'a self, key: K, default: &'a V) -> &'a V {
        self.get(key).unwrap_or(default)
    }

    /// Returns `true` if the map contains `key`.
    #[inline]
    pub fn contains_key(&self, key: K) -> bool {
        self.index_of(key).is_ok()
    }

    /// Inserts a key-value pair, returning the previous value for the key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use prim_hash::LongObjectHashMap;
    ///
    /// let mut map = LongObjectHashMap::new();
    /// assert_eq!(map.insert(1, "a"), None);
    /// assert_eq!(map.insert(1, "b"), Some("a"));
    /// assert_eq!(map.len(), 1);
    /// ```
    #[inline]
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.index_of(key) {
            Ok(slot) => self.values[slot].replace(value),
            Err(slot) => {
                self.index_insert(slot, key, value);
                None
            }
        }
    }

    /// Inserts the pair only if `key` is absent. Returns `true` if inserted.
    pub fn put_if_absent(&mut self, key: K, value: V) -> bool {
        match self.index_of(key) {
            Ok(_) => false,
            Err(slot) => {
                self.index_insert(slot, key, value);
                true
            }
        }
    }

    /// Inserts every pair, returning how many keys were not present before.
    pub fn put_all<I>(&mut self, entries: I) -> usize
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let before = self.len();
        for (key, value) in entries {
            self.insert(key, value);
        }
        self.len() - before
    }

    /// Removes `key` from the map, returning its value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use prim_hash::LongObjectHashMap;
    ///
    /// let mut map = LongObjectHashMap::new();
    /// map.insert(9, "nine");
    /// assert_eq!(map.remove(9), Some("nine"));
    /// assert_eq!(map.remove(9), None);
    /// ```
    #[inline]
    pub fn remove(&mut self, key: K) -> Option<V> {
        match self.index_of(key) {
            Ok(slot) => Some(self.index_remove(slot)),
            Err(_) => None,
        }
    }

    /// Removes every entry for which `predicate` returns `true` and returns
    /// how many were removed.
    ///
    /// `predicate` is called exactly once per entry.
    pub fn remove_all(&mut self, mut predicate: impl FnMut(K, &V) -> bool) -> usize {
        let before = self.len();

        if self.has_empty_key {
            let slot = self.empty_key_slot();
            if self.values[slot]
                .as_ref()
                .is_some_and(|value| predicate(K::EMPTY, value))
            {
                self.values[slot] = None;
                self.has_empty_key = false;
            }
        }

        // Start right after a vacant slot so no cluster straddles the scan
        // start. Backward shifts then only pull entries not yet visited.
        let mask = self.mask;
        let vacant = self.keys[..=mask]
            .iter()
            .position(|key| key.is_empty_key())
            .unwrap_or(mask);
        let mut slot = (vacant + 1) & mask;
        let mut unvisited = mask + 1;
        while unvisited > 0 {
            let key = self.keys[slot];
            let matched = !key.is_empty_key()
                && self.values[slot]
                    .as_ref()
                    .is_some_and(|value| predicate(key, value));
            if matched {
                self.values[slot] = None;
                // The shift may pull an unvisited entry into `slot`.
                self.shift_conflicting_keys(slot);
            } else {
                slot = (slot + 1) & mask;
                unvisited -= 1;
            }
        }

        before - self.len()
    }

    /// Keeps only the entries for which `keep` returns `true`.
    pub fn retain(&mut self, mut keep: impl FnMut(K, &V) -> bool) {
        self.remove_all(|key, value| !keep(key, value));
    }

    /// Closes the gap left at `gap_slot` by moving later cluster members
    /// backwards. The value at `gap_slot` must already have been taken.
    fn shift_conflicting_keys(&mut self, mut gap_slot: usize) {
        let mask = self.mask;
        let mut distance = 0;
        loop {
            distance += 1;
            let slot = (gap_slot + distance) & mask;
            let existing = self.keys[slot];
            if existing.is_empty_key() {
                break;
            }

            let shift = slot.wrapping_sub(self.ideal_slot(existing)) & mask;
            if shift >= distance {
                self.keys[gap_slot] = existing;
                self.values[gap_slot] = self.values[slot].take();
                gap_slot = slot;
                distance = 0;
            }
        }

        debug_assert!(self.values[gap_slot].is_none());
        self.keys[gap_slot] = K::EMPTY;
        self.assigned -= 1;
    }

    /// Removes every entry, keeping the allocated slots.
    pub fn clear(&mut self) {
        if self.is_empty() {
            return;
        }
        self.keys.fill(K::EMPTY);
        self.values.iter_mut().for_each(|value| *value = None);
        self.assigned = 0;
        self.has_empty_key = false;
    }

    /// Removes every entry and shrinks back to the default allocation.
    pub fn release(&mut self) {
        let slot_count = min_slot_count(DEFAULT_EXPECTED_ELEMENTS, self.load_factor);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            from = self.slot_count(),
            to = slot_count,
            len = self.len(),
            "releasing primitive hash map buffers"
        );

        let (keys, values) = allocate_buffers(slot_count);
        self.keys = keys;
        self.values = values;
        self.mask = slot_count - 1;
        self.resize_at = expand_at_count(slot_count, self.load_factor);
        self.assigned = 0;
        self.has_empty_key = false;
    }

    /// Reserves room for at least `additional` more entries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use prim_hash::LongObjectHashMap;
    ///
    /// let mut map: LongObjectHashMap<u8> = LongObjectHashMap::new();
    /// map.reserve(500);
    /// assert!(map.capacity() >= 500);
    /// ```
    pub fn reserve(&mut self, additional: usize) {
        let required = self.len().saturating_add(additional);
        if required > self.resize_at {
            let slot_count = min_slot_count(required, self.load_factor);
            if slot_count > self.slot_count() {
                self.reallocate(slot_count);
            }
        }
    }

    /// Shrinks the slot arrays to the smallest size that holds the current
    /// entries.
    pub fn shrink_to_fit(&mut self) {
        let slot_count = min_slot_count(self.assigned, self.load_factor);
        if slot_count < self.slot_count() {
            self.reallocate(slot_count);
        }
    }

    /// Moves every entry into freshly allocated arrays of `slot_count`
    /// regular slots.
    #[cold]
    fn reallocate(&mut self, slot_count: usize) {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            from = self.slot_count(),
            to = slot_count,
            len = self.len(),
            "reallocating primitive hash map buffers"
        );

        let (keys, values) = allocate_buffers(slot_count);
        let old_keys = core::mem::replace(&mut self.keys, keys);
        let mut old_values = core::mem::replace(&mut self.values, values);
        self.mask = slot_count - 1;
        self.resize_at = expand_at_count(slot_count, self.load_factor);

        let mask = self.mask;
        let last = old_keys.len() - 1;
        self.values[mask + 1] = old_values[last].take();
        for from in (0..last).rev() {
            let key = old_keys[from];
            if key.is_empty_key() {
                continue;
            }
            let mut slot = self.ideal_slot(key);
            while !self.keys[slot].is_empty_key() {
                slot = (slot + 1) & mask;
            }
            self.keys[slot] = key;
            self.values[slot] = old_values[from].take();
        }
    }

    /// Renders how occupied slots are spread over the table.
    ///
    /// The regular slots are split into `characters` segments (fewer if there
    /// are fewer slots). Each segment prints `.` when (nearly) empty, `1`
    /// through `9` for the filled tenths, and `X` when full.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use prim_hash::LongObjectHashMap;
    ///
    /// let map: LongObjectHashMap<()> = LongObjectHashMap::with_capacity(100);
    /// let picture = map.visualize_key_distribution(16);
    /// assert_eq!(picture, "................");
    /// ```
    pub fn visualize_key_distribution(&self, characters: usize) -> String {
        const LEVELS: &[u8] = b".123456789X";

        let slot_count = self.slot_count();
        let mut out = String::with_capacity(characters.min(slot_count));
        let mut start = 0;
        for i in 1..=characters {
            let end = ((i as u128 * slot_count as u128) / characters as u128) as usize;
            if end > start {
                let occupied = self.keys[start..end]
                    .iter()
                    .filter(|key| !key.is_empty_key())
                    .count();
                let level = (occupied * LEVELS.len() / (end - start)).min(LEVELS.len() - 1);
                out.push(LEVELS[level] as char);
                start = end;
            }
        }
        out
    }
}

impl<K, V, S> PrimitiveHashMap<K, V, S>
where
    K: PrimitiveKey,
{
    /// Returns an iterator over the occupied slots in array order, the zero
    /// key last.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use prim_hash::LongObjectHashMap;
    ///
    /// let mut map = LongObjectHashMap::new();
    /// map.insert(3, "c");
    ///
    /// for cursor in map.cursors() {
    ///     assert_eq!(map.index_get(cursor.index), Some(cursor.value));
    /// }
    /// ```
    pub fn cursors(&self) -> SlotCursors<'_, K, V> {
        SlotCursors {
            keys: &self.keys,
            values: self.values.iter().enumerate(),
            remaining: self.assigned + self.has_empty_key as usize,
        }
    }

    /// Returns an iterator over `(key, &value)` pairs in slot order.
    pub fn iter(&self) -> Entries<SlotCursors<'_, K, V>> {
        Entries::new(self.cursors())
    }

    /// Returns an iterator over the keys in slot order.
    pub fn keys(&self) -> Keys<SlotCursors<'_, K, V>> {
        Keys::new(self.cursors())
    }

    /// Returns an iterator over the values in slot order.
    pub fn values(&self) -> Values<SlotCursors<'_, K, V>> {
        Values::new(self.cursors())
    }

    /// Returns an iterator over mutable references to the values.
    pub fn values_mut(&mut self) -> ValuesMut<'_, V> {
        ValuesMut {
            remaining: self.assigned + self.has_empty_key as usize,
            values: self.values.iter_mut(),
        }
    }

    /// Removes and yields every entry, leaving the map empty with the same
    /// slot count.
    ///
    /// The map is emptied as soon as the iterator is created. Entries the
    /// iterator has not yielded are dropped with it, and nothing is put back
    /// if the iterator is leaked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use prim_hash::LongObjectHashMap;
    ///
    /// let mut map = LongObjectHashMap::new();
    /// map.insert(1, "one");
    /// map.insert(0, "zero");
    ///
    /// let mut drained: Vec<_> = map.drain().collect();
    /// drained.sort();
    /// assert_eq!(drained, vec![(0, "zero"), (1, "one")]);
    /// assert!(map.is_empty());
    /// ```
    pub fn drain(&mut self) -> Drain<'_, K, V> {
        let remaining = self.assigned + self.has_empty_key as usize;
        let (keys, values) = allocate_buffers(self.mask + 1);
        let keys = core::mem::replace(&mut self.keys, keys);
        let values = core::mem::replace(&mut self.values, values);
        self.assigned = 0;
        self.has_empty_key = false;

        Drain {
            inner: IntoIter {
                keys,
                values: values.into_vec().into_iter().enumerate(),
                remaining,
            },
            marker: PhantomData,
        }
    }

    /// Reads the entry stored at `slot`, if any.
    #[inline]
    pub(crate) fn slot_entry(&self, slot: usize) -> Option<(K, &V)> {
        let value = self.values.get(slot)?.as_ref()?;
        Some((self.keys[slot], value))
    }

    /// Key stored at `slot`. The reserved slot reads as the zero key.
    #[inline]
    pub(crate) fn slot_key(&self, slot: usize) -> K {
        self.keys[slot]
    }

    /// Occupied slots, the zero-key slot first.
    pub(crate) fn occupied_slots(&self) -> impl Iterator<Item = usize> + '_ {
        let zero = self.has_empty_key.then_some(self.mask + 1);
        zero.into_iter().chain(
            self.keys[..=self.mask]
                .iter()
                .enumerate()
                .filter(|(_, key)| !key.is_empty_key())
                .map(|(slot, _)| slot),
        )
    }
}

impl<K, V, S> PrimitiveHashMap<K, V, S>
where
    K: PrimitiveKey,
    S: BuildHasher + Default,
{
    /// Builds a map from parallel arrays of keys and values.
    ///
    /// Later duplicates of a key overwrite earlier ones.
    ///
    /// # Panics
    ///
    /// Panics if the two arrays differ in length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use prim_hash::LongObjectHashMap;
    ///
    /// let map: LongObjectHashMap<&str> =
    ///     LongObjectHashMap::from_parallel(&[1, 2, 1], vec!["a", "b", "c"]);
    /// assert_eq!(map.len(), 2);
    /// assert_eq!(map.get(1), Some(&"c"));
    /// ```
    pub fn from_parallel(keys: &[K], values: Vec<V>) -> Self {
        assert_eq!(
            keys.len(),
            values.len(),
            "keys and values must have the same length"
        );
        let mut map = Self::with_capacity_and_hasher(keys.len(), S::default());
        map.put_all(keys.iter().copied().zip(values));
        map
    }
}

impl<K, V, S> Default for PrimitiveHashMap<K, V, S>
where
    K: PrimitiveKey,
    S: BuildHasher + Default,
{
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<K, V, S> PartialEq for PrimitiveHashMap<K, V, S>
where
    K: PrimitiveKey,
    V: PartialEq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter().all(|(key, value)| other.get(key) == Some(value))
    }
}

impl<K, V, S> Eq for PrimitiveHashMap<K, V, S>
where
    K: PrimitiveKey,
    V: Eq,
    S: BuildHasher,
{
}

impl<K, V, S> Extend<(K, V)> for PrimitiveHashMap<K, V, S>
where
    K: PrimitiveKey,
    S: BuildHasher,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V, S> FromIterator<(K, V)> for PrimitiveHashMap<K, V, S>
where
    K: PrimitiveKey,
    S: BuildHasher + Default,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let iter = iter.into_iter();
        let mut map = Self::with_capacity_and_hasher(iter.size_hint().0, S::default());
        map.extend(iter);
        map
    }
}

impl<'a, K, V, S> IntoIterator for &'a PrimitiveHashMap<K, V, S>
where
    K: PrimitiveKey,
{
    type IntoIter = Entries<SlotCursors<'a, K, V>>;
    type Item = (K, &'a V);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, S> IntoIterator for PrimitiveHashMap<K, V, S>
where
    K: PrimitiveKey,
{
    type IntoIter = IntoIter<K, V>;
    type Item = (K, V);

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            remaining: self.assigned + self.has_empty_key as usize,
            keys: self.keys,
            values: self.values.into_vec().into_iter().enumerate(),
        }
    }
}

impl<K, V, S> PrimitiveMap<K, V> for PrimitiveHashMap<K, V, S>
where
    K: PrimitiveKey,
    S: BuildHasher,
{
    fn len(&self) -> usize {
        PrimitiveHashMap::len(self)
    }

    fn contains_key(&self, key: K) -> bool {
        PrimitiveHashMap::contains_key(self, key)
    }

    fn get(&self, key: K) -> Option<&V> {
        PrimitiveHashMap::get(self, key)
    }

    fn index_of(&self, key: K) -> Result<usize, usize> {
        PrimitiveHashMap::index_of(self, key)
    }

    fn index_exists(&self, index: usize) -> bool {
        PrimitiveHashMap::index_exists(self, index)
    }

    fn index_get(&self, index: usize) -> Option<&V> {
        PrimitiveHashMap::index_get(self, index)
    }

    fn put(&mut self, key: K, value: V) -> Result<Option<V>, Error> {
        Ok(self.insert(key, value))
    }

    fn put_all<I>(&mut self, entries: I) -> Result<usize, Error>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        Ok(PrimitiveHashMap::put_all(self, entries))
    }

    fn remove(&mut self, key: K) -> Result<Option<V>, Error> {
        Ok(PrimitiveHashMap::remove(self, key))
    }

    fn remove_all<F>(&mut self, predicate: F) -> Result<usize, Error>
    where
        F: FnMut(K, &V) -> bool,
    {
        Ok(PrimitiveHashMap::remove_all(self, predicate))
    }

    fn index_replace(&mut self, index: usize, value: V) -> Result<V, Error> {
        Ok(PrimitiveHashMap::index_replace(self, index, value))
    }

    fn index_insert(&mut self, index: usize, key: K, value: V) -> Result<(), Error> {
        PrimitiveHashMap::index_insert(self, index, key, value);
        Ok(())
    }

    fn index_remove(&mut self, index: usize) -> Result<V, Error> {
        Ok(PrimitiveHashMap::index_remove(self, index))
    }

    fn clear(&mut self) -> Result<(), Error> {
        PrimitiveHashMap::clear(self);
        Ok(())
    }

    fn release(&mut self) -> Result<(), Error> {
        PrimitiveHashMap::release(self);
        Ok(())
    }
}

/// An iterator over the occupied slots of a [`PrimitiveHashMap`], in slot
/// order with the zero key last.
///
/// This struct is created by [`PrimitiveHashMap::cursors`].
#[derive(Debug, Clone)]
pub struct SlotCursors<'a, K, V> {
    keys: &'a [K],
    values: Enumerate<core::slice::Iter<'a, Option<V>>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for SlotCursors<'a, K, V>
where
    K: PrimitiveKey,
{
    type Item = Cursor<'a, K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        for (index, value) in self.values.by_ref() {
            if let Some(value) = value {
                self.remaining -= 1;
                return Some(Cursor {
                    index,
                    key: self.keys[index],
                    value,
                });
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K: PrimitiveKey, V> ExactSizeIterator for SlotCursors<'_, K, V> {}

impl<K: PrimitiveKey, V> FusedIterator for SlotCursors<'_, K, V> {}

/// A mutable iterator over the values of a [`PrimitiveHashMap`].
///
/// This struct is created by [`PrimitiveHashMap::values_mut`].
pub struct ValuesMut<'a, V> {
    values: core::slice::IterMut<'a, Option<V>>,
    remaining: usize,
}

impl<'a, V> Iterator for ValuesMut<'a, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        for value in self.values.by_ref() {
            if let Some(value) = value.as_mut() {
                self.remaining -= 1;
                return Some(value);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for ValuesMut<'_, V> {}

/// A draining iterator over the entries of a [`PrimitiveHashMap`].
///
/// This struct is created by [`PrimitiveHashMap::drain`].
pub struct Drain<'a, K, V> {
    inner: IntoIter<K, V>,
    marker: PhantomData<&'a mut ()>,
}

impl<K: PrimitiveKey, V> Iterator for Drain<'_, K, V> {
    type Item = (K, V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K: PrimitiveKey, V> ExactSizeIterator for Drain<'_, K, V> {}

/// An owning iterator over the entries of a [`PrimitiveHashMap`].
pub struct IntoIter<K, V> {
    keys: Box<[K]>,
    values: Enumerate<vec::IntoIter<Option<V>>>,
    remaining: usize,
}

impl<K: PrimitiveKey, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        for (slot, value) in self.values.by_ref() {
            if let Some(value) = value {
                self.remaining -= 1;
                return Some((self.keys[slot], value));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K: PrimitiveKey, V> ExactSizeIterator for IntoIter<K, V> {}

/// Probe-length statistics for a [`PrimitiveHashMap`].
///
/// Requires the `stats` feature.
#[cfg(feature = "stats")]
#[derive(Debug, Clone)]
pub struct DebugStats {
    /// Number of entries currently in the map
    pub populated: usize,
    /// Maximum number of non-zero keys before growth
    pub capacity: usize,
    /// Number of regular slots allocated
    pub slot_count: usize,
    /// Occupancy of the regular slots (non-zero keys / slot count)
    pub load_factor: f64,
    /// Longest distance between an entry and its ideal slot
    pub max_probe_length: usize,
    /// Mean distance between an entry and its ideal slot
    pub mean_probe_length: f64,
    /// Total memory in bytes used by the slot arrays
    pub total_bytes: usize,
    /// Memory in bytes held by vacant slots
    pub wasted_bytes: usize,
}

#[cfg(feature = "stats")]
impl DebugStats {
    /// Pretty-print the debug statistics.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        println!("=== Primitive Hash Map Statistics ===");
        println!(
            "Population: {}/{} ({:.2}% of slots occupied)",
            self.populated,
            self.slot_count,
            self.load_factor * 100.0
        );
        println!("Capacity before growth: {}", self.capacity);
        println!(
            "Probe length: max {}, mean {:.3}",
            self.max_probe_length, self.mean_probe_length
        );
        println!("Total Allocated: {} bytes", self.total_bytes);
        println!(
            "Memory: {} bytes wasted ({:.02}%)",
            self.wasted_bytes,
            if self.total_bytes == 0 {
                0.0
            } else {
                (self.wasted_bytes as f64 / self.total_bytes as f64) * 100.0
            }
        );
    }
}

/// Histogram of probe lengths: `counts()[d]` is the number of entries stored
/// `d` slots after their ideal slot.
///
/// Requires the `stats` feature.
#[cfg(feature = "stats")]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeHistogram {
    counts: Vec<usize>,
}

#[cfg(feature = "stats")]
impl ProbeHistogram {
    /// Entry counts per probe length.
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Pretty-prints the histogram as a horizontal bar chart.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        let max = self.counts.iter().copied().max().unwrap_or(0);
        if max == 0 {
            println!("probe histogram: empty");
            return;
        }

        let max_bar = 60usize;
        let total_units = max_bar * 8;
        println!(
            "probe histogram ({} entries):",
            self.counts.iter().sum::<usize>()
        );

        let make_bar = |count: usize| -> String {
            if count == 0 {
                return String::new();
            }
            let units = ((count as u128 * total_units as u128).div_ceil(max as u128)) as usize;
            let mut bar = "█".repeat(units / 8);
            let partial = match units % 8 {
                1 => Some('▏'),
                2 => Some('▎'),
                3 => Some('▍'),
                4 => Some('▌'),
                5 => Some('▋'),
                6 => Some('▊'),
                7 => Some('▉'),
                _ => None,
            };
            bar.extend(partial);
            bar
        };

        for (distance, &count) in self.counts.iter().enumerate() {
            println!("{:>3} | {} ({})", distance, make_bar(count), count);
        }
    }
}

#[cfg(feature = "stats")]
impl<K, V, S> PrimitiveHashMap<K, V, S>
where
    K: PrimitiveKey,
    S: BuildHasher,
{
    fn probe_lengths(&self) -> impl Iterator<Item = usize> + '_ {
        let mask = self.mask;
        self.keys[..=mask]
            .iter()
            .enumerate()
            .filter(|(_, key)| !key.is_empty_key())
            .map(move |(slot, &key)| slot.wrapping_sub(self.ideal_slot(key)) & mask)
    }

    /// Computes the histogram of probe lengths of the non-zero keys.
    pub fn probe_histogram(&self) -> ProbeHistogram {
        let mut counts = Vec::new();
        for distance in self.probe_lengths() {
            if counts.len() <= distance {
                counts.resize(distance + 1, 0);
            }
            counts[distance] += 1;
        }
        ProbeHistogram { counts }
    }

    /// Returns occupancy and probe-length statistics.
    pub fn debug_stats(&self) -> DebugStats {
        let slot_count = self.slot_count();
        let (max_probe_length, total_probe_length) = self
            .probe_lengths()
            .fold((0, 0), |(max, total), d| (max.max(d), total + d));

        let slot_bytes = core::mem::size_of::<K>() + core::mem::size_of::<Option<V>>();
        let total_slots = slot_count + 1;

        DebugStats {
            populated: self.len(),
            capacity: self.resize_at,
            slot_count,
            load_factor: self.assigned as f64 / slot_count as f64,
            max_probe_length,
            mean_probe_length: if self.assigned == 0 {
                0.0
            } else {
                total_probe_length as f64 / self.assigned as f64
            },
            total_bytes: total_slots * slot_bytes,
            wasted_bytes: (total_slots - self.len()) * slot_bytes,
        }
    }
}
