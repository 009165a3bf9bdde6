//! Cursor-based traversal shared by maps and sorted views.
//!
//! Both [`PrimitiveHashMap`](crate::PrimitiveHashMap) and
//! [`SortedIterationView`](crate::SortedIterationView) expose their contents
//! as a pull-based sequence of [`Cursor`]s. A cursor carries the slot index
//! alongside the key and value so callers can go back to the index-based API
//! without another hash lookup. The adaptors in this module turn a cursor
//! sequence into the usual entry, key and value iterators.

use core::iter::FusedIterator;

/// A single occupied slot produced during traversal.
///
/// Cursors are plain values: every step of an iterator yields a new one, so
/// a cursor may be kept around after the iterator has moved on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'a, K, V> {
    /// Slot index of the entry in the backing map.
    pub index: usize,
    /// The entry's key.
    pub key: K,
    /// The entry's value.
    pub value: &'a V,
}

impl<'a, K, V> Cursor<'a, K, V> {
    /// Splits the cursor into a `(key, value)` pair.
    #[inline]
    pub fn into_pair(self) -> (K, &'a V) {
        (self.key, self.value)
    }
}

/// Iterator adaptor yielding `(key, &value)` pairs from cursors.
#[derive(Debug, Clone)]
pub struct Entries<I> {
    inner: I,
}

impl<I> Entries<I> {
    pub(crate) fn new(inner: I) -> Self {
        Self { inner }
    }
}

impl<'a, K: 'a, V: 'a, I> Iterator for Entries<I>
where
    I: Iterator<Item = Cursor<'a, K, V>>,
{
    type Item = (K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Cursor::into_pair)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K: 'a, V: 'a, I> ExactSizeIterator for Entries<I> where
    I: ExactSizeIterator<Item = Cursor<'a, K, V>>
{
}

impl<'a, K: 'a, V: 'a, I> FusedIterator for Entries<I> where
    I: FusedIterator<Item = Cursor<'a, K, V>>
{
}

/// Iterator adaptor yielding keys from cursors.
#[derive(Debug, Clone)]
pub struct Keys<I> {
    inner: I,
}

impl<I> Keys<I> {
    pub(crate) fn new(inner: I) -> Self {
        Self { inner }
    }
}

impl<'a, K: 'a, V: 'a, I> Iterator for Keys<I>
where
    I: Iterator<Item = Cursor<'a, K, V>>,
{
    type Item = K;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|cursor| cursor.key)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K: 'a, V: 'a, I> ExactSizeIterator for Keys<I> where
    I: ExactSizeIterator<Item = Cursor<'a, K, V>>
{
}

impl<'a, K: 'a, V: 'a, I> FusedIterator for Keys<I> where
    I: FusedIterator<Item = Cursor<'a, K, V>>
{
}

/// Iterator adaptor yielding value references from cursors.
#[derive(Debug, Clone)]
pub struct Values<I> {
    inner: I,
}

impl<I> Values<I> {
    pub(crate) fn new(inner: I) -> Self {
        Self { inner }
    }
}

impl<'a, K: 'a, V: 'a, I> Iterator for Values<I>
where
    I: Iterator<Item = Cursor<'a, K, V>>,
{
    type Item = &'a V;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|cursor| cursor.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K: 'a, V: 'a, I> ExactSizeIterator for Values<I> where
    I: ExactSizeIterator<Item = Cursor<'a, K, V>>
{
}

impl<'a, K: 'a, V: 'a, I> FusedIterator for Values<I> where
    I: FusedIterator<Item = Cursor<'a, K, V>>
{
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;

    fn cursors() -> Vec<Cursor<'static, i64, &'static str>> {
        vec![
            Cursor {
                index: 3,
                key: 10,
                value: &"ten",
            },
            Cursor {
                index: 0,
                key: 20,
                value: &"twenty",
            },
        ]
    }

    #[test]
    fn adaptors_project_fields() {
        let entries: Vec<_> = Entries::new(cursors().into_iter()).collect();
        assert_eq!(entries, vec![(10, &"ten"), (20, &"twenty")]);

        let keys: Vec<_> = Keys::new(cursors().into_iter()).collect();
        assert_eq!(keys, vec![10, 20]);

        let values: Vec<_> = Values::new(cursors().into_iter()).collect();
        assert_eq!(values, vec![&"ten", &"twenty"]);
    }

    #[test]
    fn adaptors_forward_exact_size() {
        let keys = Keys::new(cursors().into_iter());
        assert_eq!(keys.len(), 2);
    }

    #[test]
    fn cursors_outlive_their_step() {
        let mut iter = cursors().into_iter();
        let first = iter.next().unwrap();
        let second = iter.next().unwrap();
        assert!(iter.next().is_none());
        assert_eq!(first.index, 3);
        assert_eq!(second.index, 0);
        assert_eq!(first.into_pair(), (10, &"ten"));
    }
}
