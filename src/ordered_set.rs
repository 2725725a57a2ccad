//! Mutable insertion-ordered set.
//!
//! This module provides [`OrderedSet`], a hash-indexed set that remembers the
//! order in which its elements were first added and exposes that order for
//! iteration, positional access and slicing.
//!
//! # Overview
//!
//! - Membership, insertion and removal are O(1) expected.
//! - Iteration yields the present elements in insertion order. Removing an
//!   element does not reorder the others; re-adding it appends it at the end.
//! - Set algebra (`union`, `intersection`, `difference`,
//!   `symmetric_difference`) comes from [`OrderedSetOps`] and always returns
//!   an `OrderedSet`. The operators `&`, `|`, `-`, `^` are aliases, and
//!   `&=`, `|=`, `-=`, `^=` apply the operation in place.
//!
//! `OrderedSet` is not `Hash`; freeze it with [`OrderedSet::freeze`] to use
//! it as a key. It is not synchronized: sharing one between threads for
//! mutation requires external locking.
//!
//! # Examples
//!
//! ```rust
//! use orderedset::{OrderedSet, OrderedSetOps};
//!
//! let mut set: OrderedSet<i32> = [3, 1, 2, 1, 3].into_iter().collect();
//! assert_eq!(set, vec![3, 1, 2]);
//! assert_eq!(set.to_string(), "{3, 1, 2}");
//!
//! set.add(0);
//! assert_eq!(set.pop(), Ok(0));
//!
//! let other: OrderedSet<i32> = [1, 7].into_iter().collect();
//! assert_eq!(&set | &other, vec![3, 1, 2, 7]);
//! assert_eq!(&set & &other, vec![1]);
//! assert_eq!(&set - &other, vec![3, 2]);
//! assert_eq!(&set ^ &other, vec![3, 2, 7]);
//! ```

use std::borrow::Borrow;
use std::hash::Hash;
use std::ops::{BitAndAssign, BitOrAssign, BitXorAssign, SubAssign};

use crate::error::OrderedSetError;
use crate::frozen::FrozenOrderedSet;
use crate::iter::IntoIter;
use crate::mutation::SetMutation;
use crate::ops::OrderedSetOps;
use crate::ops::sealed::Storage;
use crate::source::ElementSource;
use crate::store::OrderedElementStore;

/// A mutable set that preserves insertion order.
///
/// # Type Parameters
///
/// * `T` - The element type. Must implement `Clone`, `Eq` and `Hash`.
///
/// # Examples
///
/// ```rust
/// use orderedset::{OrderedSet, OrderedSetOps};
///
/// let mut set = OrderedSet::new();
/// set.add("b");
/// set.add("a");
/// set.add("b");
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set[0], "b");
/// assert_eq!(set.get(-1), Ok(&"a"));
/// ```
#[derive(Clone)]
pub struct OrderedSet<T> {
    store: OrderedElementStore<T>,
}

impl<T: Clone + Eq + Hash> OrderedSet<T> {
    /// Creates an empty set.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: OrderedElementStore::new(),
        }
    }

    /// Creates an empty set with room for at least `capacity` elements.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            store: OrderedElementStore::with_capacity(capacity),
        }
    }

    /// Appends `element` if absent. Returns `true` if it was added.
    ///
    /// An element that is already present keeps its position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderedset::OrderedSet;
    ///
    /// let mut set: OrderedSet<i32> = [3, 1, 2].into_iter().collect();
    /// assert!(set.add(0));
    /// assert!(!set.add(3));
    /// assert_eq!(set, vec![3, 1, 2, 0]);
    /// ```
    pub fn add(&mut self, element: T) -> bool {
        self.store.insert(element)
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Removes `element`, keeping the order of the remaining elements.
    ///
    /// # Errors
    ///
    /// Returns [`OrderedSetError::ElementNotFound`] if `element` is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderedset::{OrderedSet, OrderedSetError};
    ///
    /// let mut set: OrderedSet<i32> = [3, 1, 2].into_iter().collect();
    /// assert_eq!(set.discard(&1), Ok(()));
    /// assert_eq!(set, vec![3, 2]);
    /// assert_eq!(set.discard(&42), Err(OrderedSetError::ElementNotFound));
    /// ```
    pub fn discard<Q>(&mut self, element: &Q) -> Result<(), OrderedSetError>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.store
            .remove(element)
            .map(|_| ())
            .ok_or(OrderedSetError::ElementNotFound)
    }

    /// Same as [`discard`](Self::discard).
    ///
    /// # Errors
    ///
    /// Returns [`OrderedSetError::ElementNotFound`] if `element` is absent.
    pub fn remove<Q>(&mut self, element: &Q) -> Result<(), OrderedSetError>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.discard(element)
    }

    /// Removes and returns the most recently inserted element.
    ///
    /// # Errors
    ///
    /// Returns [`OrderedSetError::EmptyCollection`] if the set is empty.
    pub fn pop(&mut self) -> Result<T, OrderedSetError> {
        self.store
            .pop_last()
            .ok_or(OrderedSetError::EmptyCollection)
    }

    /// Appends the elements of `other` that are not yet present, in
    /// `other`'s order.
    pub fn update<O>(&mut self, other: &O)
    where
        O: ElementSource<T> + ?Sized,
    {
        self.store.extend(other.elements().cloned());
    }

    /// Removes every element that is in `other`.
    pub fn difference_update<O>(&mut self, other: &O)
    where
        O: ElementSource<T> + ?Sized,
    {
        self.store
            .retain(|element| !other.contains_element(element));
    }

    /// Keeps only the elements that are also in `other`.
    pub fn intersection_update<O>(&mut self, other: &O)
    where
        O: ElementSource<T> + ?Sized,
    {
        self.store.retain(|element| other.contains_element(element));
    }

    /// Replaces the contents with the symmetric difference of this set and
    /// `other`.
    pub fn symmetric_difference_update<O>(&mut self, other: &O)
    where
        O: ElementSource<T> + ?Sized,
    {
        *self = self.symmetric_difference(other);
    }

    /// Converts this set into a [`FrozenOrderedSet`] without copying its
    /// storage.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderedset::{OrderedSet, OrderedSetOps};
    ///
    /// let set: OrderedSet<i32> = [3, 1, 2].into_iter().collect();
    /// let frozen = set.freeze();
    /// assert_eq!(frozen.to_vec(), vec![3, 1, 2]);
    /// ```
    #[must_use]
    pub fn freeze(self) -> FrozenOrderedSet<T> {
        FrozenOrderedSet::from_store(self.store)
    }
}

impl<T> Storage<T> for OrderedSet<T> {
    #[inline]
    fn store(&self) -> &OrderedElementStore<T> {
        &self.store
    }

    #[inline]
    fn from_store(store: OrderedElementStore<T>) -> Self {
        Self { store }
    }
}

impl<T: Clone + Eq + Hash> OrderedSetOps<T> for OrderedSet<T> {}

impl<T: Clone + Eq + Hash> SetMutation<T> for OrderedSet<T> {
    fn add(&mut self, element: T) -> Result<(), OrderedSetError> {
        Self::add(self, element);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), OrderedSetError> {
        Self::clear(self);
        Ok(())
    }

    fn discard(&mut self, element: &T) -> Result<(), OrderedSetError> {
        Self::discard(self, element)
    }

    fn remove(&mut self, element: &T) -> Result<(), OrderedSetError> {
        Self::discard(self, element)
    }

    fn pop(&mut self) -> Result<T, OrderedSetError> {
        Self::pop(self)
    }

    fn update<O>(&mut self, other: &O) -> Result<(), OrderedSetError>
    where
        O: ElementSource<T> + ?Sized,
    {
        Self::update(self, other);
        Ok(())
    }

    fn difference_update<O>(&mut self, other: &O) -> Result<(), OrderedSetError>
    where
        O: ElementSource<T> + ?Sized,
    {
        Self::difference_update(self, other);
        Ok(())
    }

    fn intersection_update<O>(&mut self, other: &O) -> Result<(), OrderedSetError>
    where
        O: ElementSource<T> + ?Sized,
    {
        Self::intersection_update(self, other);
        Ok(())
    }

    fn symmetric_difference_update<O>(&mut self, other: &O) -> Result<(), OrderedSetError>
    where
        O: ElementSource<T> + ?Sized,
    {
        Self::symmetric_difference_update(self, other);
        Ok(())
    }
}

impl<T: Clone + Eq + Hash> Default for OrderedSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Eq + Hash> Extend<T> for OrderedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.store.extend(iter);
    }
}

impl<T: Clone + Eq + Hash> IntoIterator for OrderedSet<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.store.into_elements()
    }
}

impl<T: Clone + Eq + Hash> From<FrozenOrderedSet<T>> for OrderedSet<T> {
    fn from(frozen: FrozenOrderedSet<T>) -> Self {
        frozen.into_mutable()
    }
}

impl<T, O> BitAndAssign<&O> for OrderedSet<T>
where
    T: Clone + Eq + Hash,
    O: ElementSource<T> + ?Sized,
{
    fn bitand_assign(&mut self, other: &O) {
        self.intersection_update(other);
    }
}

impl<T, O> BitOrAssign<&O> for OrderedSet<T>
where
    T: Clone + Eq + Hash,
    O: ElementSource<T> + ?Sized,
{
    fn bitor_assign(&mut self, other: &O) {
        self.update(other);
    }
}

impl<T, O> SubAssign<&O> for OrderedSet<T>
where
    T: Clone + Eq + Hash,
    O: ElementSource<T> + ?Sized,
{
    fn sub_assign(&mut self, other: &O) {
        self.difference_update(other);
    }
}

impl<T, O> BitXorAssign<&O> for OrderedSet<T>
where
    T: Clone + Eq + Hash,
    O: ElementSource<T> + ?Sized,
{
    fn bitxor_assign(&mut self, other: &O) {
        self.symmetric_difference_update(other);
    }
}

impl_ordered_set_traits!(OrderedSet, "OrderedSet", FrozenOrderedSet);

static_assertions::assert_not_impl_any!(OrderedSet<i32>: Hash);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn set_of(elements: &[i32]) -> OrderedSet<i32> {
        elements.iter().copied().collect()
    }

    #[rstest]
    fn test_new_is_empty() {
        let set: OrderedSet<i32> = OrderedSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.first(), None);
    }

    #[rstest]
    fn test_mutators_through_capability_trait() {
        let mut set = set_of(&[3, 1, 2]);
        SetMutation::add(&mut set, 0).unwrap();
        SetMutation::remove(&mut set, &1).unwrap();
        assert_eq!(SetMutation::pop(&mut set), Ok(0));
        SetMutation::update(&mut set, &[5, 3]).unwrap();
        assert_eq!(set, vec![3, 2, 5]);
        SetMutation::clear(&mut set).unwrap();
        assert!(set.is_empty());
        assert_eq!(
            SetMutation::discard(&mut set, &9),
            Err(OrderedSetError::ElementNotFound)
        );
    }

    #[rstest]
    fn test_failed_discard_leaves_set_unchanged() {
        let mut set = set_of(&[3, 1, 2]);
        assert!(set.discard(&42).is_err());
        assert_eq!(set, vec![3, 1, 2]);
    }

    #[rstest]
    fn test_pop_empty_fails() {
        let mut set: OrderedSet<i32> = OrderedSet::new();
        assert_eq!(set.pop(), Err(OrderedSetError::EmptyCollection));
    }

    #[rstest]
    fn test_assign_operators() {
        let other = set_of(&[1, 7]);

        let mut intersection = set_of(&[3, 1, 2]);
        intersection &= &other;
        assert_eq!(intersection, vec![1]);

        let mut union = set_of(&[3, 1, 2]);
        union |= &other;
        assert_eq!(union, vec![3, 1, 2, 7]);

        let mut difference = set_of(&[3, 1, 2]);
        difference -= &other;
        assert_eq!(difference, vec![3, 2]);

        let mut symmetric = set_of(&[3, 1, 2]);
        symmetric ^= &other;
        assert_eq!(symmetric, vec![3, 2, 7]);
    }

    #[rstest]
    fn test_debug_names_variant() {
        assert_eq!(format!("{:?}", set_of(&[3, 1, 2])), "OrderedSet({3, 1, 2})");
    }

    #[rstest]
    fn test_into_iter_owned() {
        let mut set = set_of(&[4, 5, 6]);
        set.discard(&5).unwrap();
        assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![4, 6]);
    }

    #[rstest]
    fn test_index_operator() {
        let set = set_of(&[3, 2, 1]);
        assert_eq!(set[0], 3);
        assert_eq!(set[2], 1);
    }

    #[rstest]
    #[should_panic(expected = "index 3 out of range for ordered set of length 3")]
    fn test_index_operator_panics_out_of_range() {
        let set = set_of(&[3, 2, 1]);
        let _element: i32 = set[3];
    }

    #[rstest]
    fn test_borrowed_discard() {
        let mut set: OrderedSet<String> = ["a".to_string(), "b".to_string()].into_iter().collect();
        set.discard("a").unwrap();
        assert!(!set.contains("a"));
        assert!(set.contains("b"));
    }
}
