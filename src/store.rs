//! Insertion-ordered element storage.
//!
//! [`OrderedElementStore`] pairs a hash index with a vector of slots. Each
//! present element occupies one slot; the index maps the element to its slot
//! position. Removing an element leaves an empty slot (a tombstone) so that
//! removal stays O(1); tombstones are compacted away once they outnumber the
//! live elements.
//!
//! # Time Complexity
//!
//! | Operation   | Complexity                                  |
//! |-------------|---------------------------------------------|
//! | `contains`  | O(1) expected                               |
//! | `insert`    | O(1) expected, amortized                    |
//! | `remove`    | O(1) expected, amortized                    |
//! | `pop_last`  | O(1) expected, amortized                    |
//! | `get`       | O(1) without tombstones, O(n) otherwise     |
//! | `iter`      | O(1) + O(slots)                             |

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use crate::iter::{IntoIter, Iter};

/// The `BuildHasher` used for the hash index.
///
/// Selected at compile time: `ahash` wins over `fxhash`, and the standard
/// library's `RandomState` is used when neither feature is enabled.
#[cfg(feature = "ahash")]
pub type ElementHasher = ahash::RandomState;

/// The `BuildHasher` used for the hash index.
///
/// Selected at compile time: `ahash` wins over `fxhash`, and the standard
/// library's `RandomState` is used when neither feature is enabled.
#[cfg(all(feature = "fxhash", not(feature = "ahash")))]
pub type ElementHasher = rustc_hash::FxBuildHasher;

/// The `BuildHasher` used for the hash index.
///
/// Selected at compile time: `ahash` wins over `fxhash`, and the standard
/// library's `RandomState` is used when neither feature is enabled.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type ElementHasher = std::collections::hash_map::RandomState;

/// An ordered associative container from elements to a unit marker.
///
/// Iteration order is the insertion order of the currently present
/// elements. Removing an element does not reorder the survivors, and
/// re-inserting a removed element appends it at the end.
#[derive(Clone)]
pub struct OrderedElementStore<T> {
    slots: Vec<Option<T>>,
    positions: HashMap<T, usize, ElementHasher>,
}

impl<T: Clone + Eq + Hash> OrderedElementStore<T> {
    pub(crate) fn new() -> Self {
        Self::with_capacity(0)
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity_and_hasher(capacity, ElementHasher::default()),
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[inline]
    pub(crate) fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions.contains_key(element)
    }

    /// Appends `element` if absent. Returns `true` if it was inserted.
    pub(crate) fn insert(&mut self, element: T) -> bool {
        if self.positions.contains_key(&element) {
            return false;
        }
        self.positions.insert(element.clone(), self.slots.len());
        self.slots.push(Some(element));
        true
    }

    pub(crate) fn remove<Q>(&mut self, element: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let position = self.positions.remove(element)?;
        let removed = self.slots[position].take();
        self.trim_trailing_tombstones();
        if self.tombstone_count() > self.len() {
            self.compact();
        }
        removed
    }

    /// Removes and returns the most recently inserted present element.
    pub(crate) fn pop_last(&mut self) -> Option<T> {
        self.trim_trailing_tombstones();
        let element = self.slots.pop().flatten()?;
        self.positions.remove(&element);
        self.trim_trailing_tombstones();
        Some(element)
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.positions.clear();
    }

    /// Keeps only the elements for which `predicate` returns `true`,
    /// preserving their relative order.
    pub(crate) fn retain<F>(&mut self, mut predicate: F)
    where
        F: FnMut(&T) -> bool,
    {
        let mut kept = Vec::with_capacity(self.len());
        for element in self.slots.drain(..).flatten() {
            if predicate(&element) {
                kept.push(element);
            } else {
                self.positions.remove(&element);
            }
        }
        self.slots = kept.into_iter().map(Some).collect();
        self.reindex();
    }

    #[inline]
    pub(crate) fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len() {
            return None;
        }
        if self.tombstone_count() == 0 {
            self.slots[index].as_ref()
        } else {
            self.iter().nth(index)
        }
    }

    #[inline]
    pub(crate) fn first(&self) -> Option<&T> {
        self.iter().next()
    }

    #[inline]
    pub(crate) fn last(&self) -> Option<&T> {
        self.iter().next_back()
    }

    #[inline]
    pub(crate) fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.slots.iter(), self.len())
    }

    pub(crate) fn into_elements(self) -> IntoIter<T> {
        let length = self.len();
        IntoIter::new(self.slots.into_iter(), length)
    }

    #[inline]
    fn tombstone_count(&self) -> usize {
        self.slots.len() - self.positions.len()
    }

    fn trim_trailing_tombstones(&mut self) {
        while matches!(self.slots.last(), Some(None)) {
            self.slots.pop();
        }
    }

    fn compact(&mut self) {
        self.slots.retain(Option::is_some);
        self.reindex();
    }

    fn reindex(&mut self) {
        for (position, slot) in self.slots.iter().enumerate() {
            if let Some(element) = slot
                && let Some(entry) = self.positions.get_mut(element)
            {
                *entry = position;
            }
        }
    }
}

impl<T: Clone + Eq + Hash> Default for OrderedElementStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Eq + Hash> FromIterator<T> for OrderedElementStore<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let mut store = Self::with_capacity(lower);
        for element in iter {
            store.insert(element);
        }
        store
    }
}

impl<T: Clone + Eq + Hash> Extend<T> for OrderedElementStore<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn elements(store: &OrderedElementStore<i32>) -> Vec<i32> {
        store.iter().copied().collect()
    }

    #[rstest]
    fn test_from_iter_keeps_first_occurrence() {
        let store: OrderedElementStore<i32> = [3, 1, 2, 1, 3].into_iter().collect();
        assert_eq!(elements(&store), vec![3, 1, 2]);
        assert_eq!(store.len(), 3);
    }

    #[rstest]
    fn test_insert_duplicate_is_noop() {
        let mut store: OrderedElementStore<i32> = [1, 2].into_iter().collect();
        assert!(!store.insert(1));
        assert!(store.insert(3));
        assert_eq!(elements(&store), vec![1, 2, 3]);
    }

    #[rstest]
    fn test_remove_preserves_survivor_order() {
        let mut store: OrderedElementStore<i32> = [1, 2, 3, 4].into_iter().collect();
        assert_eq!(store.remove(&2), Some(2));
        assert_eq!(elements(&store), vec![1, 3, 4]);
        assert_eq!(store.remove(&2), None);
    }

    #[rstest]
    fn test_reinsert_after_remove_appends() {
        let mut store: OrderedElementStore<i32> = [1, 2, 3].into_iter().collect();
        store.remove(&1);
        store.insert(1);
        assert_eq!(elements(&store), vec![2, 3, 1]);
    }

    #[rstest]
    fn test_get_skips_tombstones() {
        let mut store: OrderedElementStore<i32> = (0..10).collect();
        store.remove(&3);
        assert_eq!(store.get(3), Some(&4));
        assert_eq!(store.get(8), Some(&9));
        assert_eq!(store.get(9), None);
    }

    #[rstest]
    fn test_compaction_keeps_positions_consistent() {
        let mut store: OrderedElementStore<i32> = (0..10).collect();
        for element in 0..6 {
            store.remove(&element);
        }
        assert_eq!(store.tombstone_count(), 0);
        assert_eq!(elements(&store), vec![6, 7, 8, 9]);
        store.remove(&8);
        assert_eq!(elements(&store), vec![6, 7, 9]);
        assert_eq!(store.get(2), Some(&9));
        assert!(store.contains(&9));
    }

    #[rstest]
    fn test_pop_last_returns_last_present() {
        let mut store: OrderedElementStore<i32> = [1, 2, 3].into_iter().collect();
        store.remove(&3);
        assert_eq!(store.pop_last(), Some(2));
        assert_eq!(store.pop_last(), Some(1));
        assert_eq!(store.pop_last(), None);
        assert!(store.is_empty());
    }

    #[rstest]
    fn test_retain_keeps_order_and_index() {
        let mut store: OrderedElementStore<i32> = [5, 4, 3, 2, 1].into_iter().collect();
        store.retain(|element| element % 2 == 1);
        assert_eq!(elements(&store), vec![5, 3, 1]);
        assert_eq!(store.get(1), Some(&3));
        assert_eq!(store.remove(&3), Some(3));
        assert_eq!(elements(&store), vec![5, 1]);
    }

    #[rstest]
    fn test_first_and_last() {
        let mut store: OrderedElementStore<i32> = [7, 8, 9].into_iter().collect();
        store.remove(&7);
        assert_eq!(store.first(), Some(&8));
        assert_eq!(store.last(), Some(&9));
    }

    #[rstest]
    fn test_borrowed_lookup() {
        let store: OrderedElementStore<String> =
            ["alpha".to_string(), "beta".to_string()].into_iter().collect();
        assert!(store.contains("alpha"));
        assert!(!store.contains("gamma"));
    }

    #[rstest]
    fn test_into_elements_yields_insertion_order() {
        let mut store: OrderedElementStore<i32> = [4, 5, 6].into_iter().collect();
        store.remove(&5);
        let collected: Vec<i32> = store.into_elements().collect();
        assert_eq!(collected, vec![4, 6]);
    }
}
