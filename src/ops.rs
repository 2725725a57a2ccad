//! The query and set-algebra surface shared by both ordered set variants.
//!
//! [`OrderedSetOps`] is implemented by [`OrderedSet`](crate::OrderedSet) and
//! [`FrozenOrderedSet`](crate::FrozenOrderedSet). Every algebraic operation
//! builds its result through the receiver's own `from_store`, so a mutable
//! set produces a mutable set and a frozen set produces a frozen set.
//!
//! # Time Complexity
//!
//! | Operation              | Complexity                         |
//! |------------------------|------------------------------------|
//! | `len`                  | O(1)                               |
//! | `contains`             | O(1) expected                      |
//! | `get`                  | O(1) on a compact store, else O(n) |
//! | `get_slice`            | O(n)                               |
//! | `union`                | O(n + m)                           |
//! | `intersection`         | O(n * c)                           |
//! | `difference`           | O(n * c)                           |
//! | `symmetric_difference` | O(n * c + m)                       |
//!
//! where `c` is the cost of [`ElementSource::contains_element`] on the other
//! operand: O(1) for hashed sources, O(m) for plain sequences.

use std::borrow::Borrow;
use std::hash::Hash;

use crate::error::OrderedSetError;
use crate::iter::Iter;
use crate::source::{ElementSource, SourceKind, distinct_count};
use crate::store::OrderedElementStore;

pub(crate) mod sealed {
    use crate::store::OrderedElementStore;

    /// Access to the backing store. Not nameable outside the crate.
    pub trait Storage<T> {
        fn store(&self) -> &OrderedElementStore<T>;

        /// Wraps `store` in the implementing variant without copying it.
        fn from_store(store: OrderedElementStore<T>) -> Self;
    }
}

/// Queries and set algebra common to [`OrderedSet`](crate::OrderedSet) and
/// [`FrozenOrderedSet`](crate::FrozenOrderedSet).
///
/// This trait is sealed and cannot be implemented outside this crate.
///
/// # Examples
///
/// ```rust
/// use orderedset::{FrozenOrderedSet, OrderedSet, OrderedSetOps};
///
/// let mutable: OrderedSet<i32> = [3, 1, 2].into_iter().collect();
/// let union: OrderedSet<i32> = mutable.union(&[1, 7]);
/// assert_eq!(union.to_vec(), vec![3, 1, 2, 7]);
///
/// let frozen: FrozenOrderedSet<i32> = [3, 1, 2].into_iter().collect();
/// let union: FrozenOrderedSet<i32> = frozen.union(&[1, 7]);
/// assert_eq!(union.to_vec(), vec![3, 1, 2, 7]);
/// ```
pub trait OrderedSetOps<T>: sealed::Storage<T> + Clone
where
    T: Clone + Eq + Hash,
{
    /// Returns the number of elements in the set.
    #[inline]
    fn len(&self) -> usize {
        self.store().len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.store().is_empty()
    }

    /// Returns `true` if the set contains `element`.
    ///
    /// Supports borrowed lookups, e.g. `&str` against a set of `String`.
    #[inline]
    fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.store().contains(element)
    }

    /// Returns an iterator over the elements in insertion order.
    #[inline]
    fn iter(&self) -> Iter<'_, T> {
        self.store().iter()
    }

    /// Returns the earliest inserted element, or `None` if empty.
    #[inline]
    fn first(&self) -> Option<&T> {
        self.store().first()
    }

    /// Returns the latest inserted element, or `None` if empty.
    #[inline]
    fn last(&self) -> Option<&T> {
        self.store().last()
    }

    /// Returns the element at position `index` in insertion order.
    ///
    /// A negative `index` counts from the end: `-1` is the last element.
    ///
    /// # Errors
    ///
    /// Returns [`OrderedSetError::IndexOutOfRange`] if the normalized index
    /// is outside `[0, len)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderedset::{OrderedSet, OrderedSetOps};
    ///
    /// let set: OrderedSet<i32> = [3, 2, 1].into_iter().collect();
    /// assert_eq!(set.get(0), Ok(&3));
    /// assert_eq!(set.get(-2), Ok(&2));
    /// assert!(set.get(5).is_err());
    /// ```
    fn get(&self, index: isize) -> Result<&T, OrderedSetError> {
        let length = self.len();
        let position = if index < 0 {
            length.checked_sub(index.unsigned_abs())
        } else {
            Some(index.unsigned_abs())
        };
        position
            .and_then(|position| self.store().get(position))
            .ok_or(OrderedSetError::IndexOutOfRange { index, length })
    }

    /// Returns a new set of the same variant holding the elements selected
    /// by `start`, `stop` and `step` over the insertion order.
    ///
    /// `start` defaults to the beginning, `stop` to the end and `step` to
    /// `1`. Bounds past the end are clamped. A negative `step` walks
    /// backwards from `start`.
    ///
    /// Unlike single-element [`get`](Self::get), negative `start` and `stop`
    /// are rejected rather than counted from the end.
    ///
    /// # Errors
    ///
    /// Returns [`OrderedSetError::InvalidSliceArgument`] if `start` or `stop`
    /// is negative or `step` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderedset::{OrderedSet, OrderedSetOps};
    ///
    /// let set: OrderedSet<i32> = (1..=5).collect();
    /// assert_eq!(set.get_slice(Some(1), Some(3), None).unwrap(), vec![2, 3]);
    /// assert_eq!(set.get_slice(Some(1), Some(700), None).unwrap(), vec![2, 3, 4, 5]);
    /// assert!(set.get_slice(Some(-1), Some(700), None).is_err());
    /// ```
    fn get_slice(
        &self,
        start: Option<isize>,
        stop: Option<isize>,
        step: Option<isize>,
    ) -> Result<Self, OrderedSetError> {
        let positions = slice_positions(self.len(), start, stop, step)?;
        let elements: Vec<&T> = self.iter().collect();
        Ok(Self::from_store(
            positions
                .into_iter()
                .map(|position| elements[position].clone())
                .collect(),
        ))
    }

    /// Returns the elements in insertion order as a `Vec`.
    fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// Returns a set equal to this one.
    ///
    /// For a mutable set the copy owns independent storage. For a frozen set
    /// the copy shares storage with the original.
    #[inline]
    #[must_use]
    fn copy(&self) -> Self {
        self.clone()
    }

    /// Returns `true` if no element of this set is in `other`.
    fn is_disjoint<O>(&self, other: &O) -> bool
    where
        O: ElementSource<T> + ?Sized,
    {
        self.iter().all(|element| !other.contains_element(element))
    }

    /// Returns `true` if every element of this set is in `other`, ignoring
    /// order.
    fn is_subset<O>(&self, other: &O) -> bool
    where
        O: ElementSource<T> + ?Sized,
    {
        self.iter().all(|element| other.contains_element(element))
    }

    /// Returns `true` if every element of `other` is in this set, ignoring
    /// order.
    fn is_superset<O>(&self, other: &O) -> bool
    where
        O: ElementSource<T> + ?Sized,
    {
        other.elements().all(|element| self.contains(element))
    }

    /// Subset test that additionally requires this set to be shorter than
    /// `other`.
    ///
    /// The length of `other` is its raw [`element_count`], so a sequence with
    /// duplicates counts every occurrence.
    ///
    /// [`element_count`]: ElementSource::element_count
    fn is_strict_subset<O>(&self, other: &O) -> bool
    where
        O: ElementSource<T> + ?Sized,
    {
        self.is_subset(other) && self.len() < other.element_count()
    }

    /// Content superset test that additionally requires `other` to hold
    /// fewer distinct elements than this set.
    fn is_strict_superset<O>(&self, other: &O) -> bool
    where
        O: ElementSource<T> + ?Sized,
    {
        self.is_superset(other) && distinct_count(other) < self.len()
    }

    /// Compares this set with `other` according to `other`'s
    /// [`SourceKind`].
    ///
    /// Against a sequence (including another ordered set) the comparison is
    /// order-sensitive; against an unordered set it compares contents only.
    fn equals<O>(&self, other: &O) -> bool
    where
        O: ElementSource<T> + ?Sized,
    {
        if self.len() != other.element_count() {
            return false;
        }
        match other.kind() {
            SourceKind::Sequence => self.iter().eq(other.elements()),
            SourceKind::Set => self.is_subset(other),
        }
    }

    /// Returns the elements of this set followed by the elements of `other`
    /// not already present, each in its own order.
    #[must_use]
    fn union<O>(&self, other: &O) -> Self
    where
        O: ElementSource<T> + ?Sized,
    {
        let mut store = self.store().clone();
        store.extend(other.elements().cloned());
        Self::from_store(store)
    }

    /// Returns the elements of this set that are also in `other`, in this
    /// set's order.
    #[must_use]
    fn intersection<O>(&self, other: &O) -> Self
    where
        O: ElementSource<T> + ?Sized,
    {
        Self::from_store(
            self.iter()
                .filter(|element| other.contains_element(element))
                .cloned()
                .collect(),
        )
    }

    /// Returns the elements of this set that are not in `other`, in this
    /// set's order.
    #[must_use]
    fn difference<O>(&self, other: &O) -> Self
    where
        O: ElementSource<T> + ?Sized,
    {
        Self::from_store(
            self.iter()
                .filter(|element| !other.contains_element(element))
                .cloned()
                .collect(),
        )
    }

    /// Returns the elements of this set not in `other` (this set's order),
    /// followed by the elements of `other` not in this set (`other`'s order).
    #[must_use]
    fn symmetric_difference<O>(&self, other: &O) -> Self
    where
        O: ElementSource<T> + ?Sized,
    {
        let mut store: OrderedElementStore<T> = self
            .iter()
            .filter(|element| !other.contains_element(element))
            .cloned()
            .collect();
        store.extend(
            other
                .elements()
                .filter(|element| !self.contains(*element))
                .cloned(),
        );
        Self::from_store(store)
    }
}

/// Resolves slice arguments against `length` into the selected positions.
fn slice_positions(
    length: usize,
    start: Option<isize>,
    stop: Option<isize>,
    step: Option<isize>,
) -> Result<Vec<usize>, OrderedSetError> {
    let step = step.unwrap_or(1);
    if step == 0 {
        return Err(OrderedSetError::InvalidSliceArgument {
            argument: "step",
            value: step,
        });
    }
    let start = slice_bound("start", start)?;
    let stop = slice_bound("stop", stop)?;
    let stride = step.unsigned_abs();

    if step > 0 {
        let start = start.unwrap_or(0).min(length);
        let stop = stop.unwrap_or(length).min(length);
        return Ok((start..stop).step_by(stride).collect());
    }

    let Some(last) = length.checked_sub(1) else {
        return Ok(Vec::new());
    };
    let start = start.map_or(last, |start| start.min(last));
    // `stop` is exclusive when walking backwards; `None` runs through index 0.
    let lowest = stop.map_or(0, |stop| stop + 1);
    if lowest > start {
        return Ok(Vec::new());
    }
    Ok((lowest..=start).rev().step_by(stride).collect())
}

fn slice_bound(
    argument: &'static str,
    value: Option<isize>,
) -> Result<Option<usize>, OrderedSetError> {
    value
        .map(|value| {
            usize::try_from(value)
                .map_err(|_| OrderedSetError::InvalidSliceArgument { argument, value })
        })
        .transpose()
}
