//! Immutable insertion-ordered set.
//!
//! This module provides [`FrozenOrderedSet`], the immutable counterpart of
//! [`OrderedSet`]. It shares the full query and algebra surface through
//! [`OrderedSetOps`]; algebraic operations return new frozen sets.
//!
//! # Overview
//!
//! - Storage is built once and shared behind an `Arc`; cloning and
//!   [`copy`](OrderedSetOps::copy) never copy elements.
//! - Every [`SetMutation`] operation fails with
//!   [`OrderedSetError::UnsupportedMutation`], and the in-place operators
//!   (`&=`, `|=`, `-=`, `^=`) are not implemented.
//! - It implements `Hash`, so it can be a `HashMap` key or an element of
//!   another hashed collection. The hash depends only on the contents, not
//!   their order, so equal sets always hash equally.
//! - Once constructed it is `Send + Sync` whenever `T` is.
//!
//! # Examples
//!
//! ```rust
//! use orderedset::{FrozenOrderedSet, OrderedSetOps};
//! use std::collections::HashMap;
//!
//! let key: FrozenOrderedSet<i32> = [1, 2].into_iter().collect();
//! let mut index = HashMap::new();
//! index.insert(key.clone(), "first");
//!
//! let lookup: FrozenOrderedSet<i32> = [1, 2].into_iter().collect();
//! assert_eq!(index.get(&lookup), Some(&"first"));
//!
//! let union = &key | &[3];
//! assert_eq!(union.to_string(), "{1, 2, 3}");
//! ```

use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::{Arc, OnceLock};

use crate::error::OrderedSetError;
use crate::mutation::SetMutation;
use crate::ops::OrderedSetOps;
use crate::ops::sealed::Storage;
use crate::ordered_set::OrderedSet;
use crate::source::ElementSource;
use crate::store::OrderedElementStore;

/// Multiplier applied to the content hash, separating frozen set hashes from
/// a plain combination of element hashes.
const HASH_SALT: u64 = 17;

struct FrozenStorage<T> {
    store: OrderedElementStore<T>,
    content_hash: OnceLock<u64>,
}

/// An immutable set that preserves insertion order.
///
/// # Type Parameters
///
/// * `T` - The element type. Must implement `Clone`, `Eq` and `Hash`.
///
/// # In-place operators
///
/// `&=`, `|=`, `-=` and `^=` are not implemented, so applying them to a
/// frozen set does not compile:
///
/// ```compile_fail
/// use orderedset::FrozenOrderedSet;
///
/// let mut set: FrozenOrderedSet<i32> = [3, 1, 2].into_iter().collect();
/// set |= &[7];
/// ```
///
/// Code that needs a runtime failure instead goes through
/// [`SetMutation::update`], [`SetMutation::difference_update`],
/// [`SetMutation::intersection_update`] or
/// [`SetMutation::symmetric_difference_update`], which return
/// [`OrderedSetError::UnsupportedMutation`]:
///
/// ```rust
/// use orderedset::{FrozenOrderedSet, OrderedSetError, SetMutation};
///
/// let mut set: FrozenOrderedSet<i32> = [3, 1, 2].into_iter().collect();
/// assert_eq!(
///     set.update(&[7]),
///     Err(OrderedSetError::UnsupportedMutation { operation: "update" })
/// );
/// ```
///
/// # Examples
///
/// ```rust
/// use orderedset::{FrozenOrderedSet, OrderedSetError, OrderedSetOps, SetMutation};
///
/// let mut set: FrozenOrderedSet<i32> = [3, 1, 2].into_iter().collect();
/// assert_eq!(set.get(0), Ok(&3));
/// assert_eq!(
///     set.add(0),
///     Err(OrderedSetError::UnsupportedMutation { operation: "add to" })
/// );
/// assert_eq!(set, vec![3, 1, 2]);
/// ```
pub struct FrozenOrderedSet<T> {
    inner: Arc<FrozenStorage<T>>,
}

impl<T: Clone + Eq + Hash> FrozenOrderedSet<T> {
    /// Creates an empty frozen set.
    #[must_use]
    pub fn new() -> Self {
        Self::from_store(OrderedElementStore::new())
    }

    /// Returns a mutable copy of this set.
    #[must_use]
    pub fn to_mutable(&self) -> OrderedSet<T> {
        OrderedSet::from_store(self.inner.store.clone())
    }

    /// Converts this set into a mutable one, reusing the storage when no
    /// other handle shares it.
    #[must_use]
    pub fn into_mutable(self) -> OrderedSet<T> {
        match Arc::try_unwrap(self.inner) {
            Ok(storage) => OrderedSet::from_store(storage.store),
            Err(shared) => OrderedSet::from_store(shared.store.clone()),
        }
    }

    /// Order-insensitive combination of the element hashes, computed once.
    fn content_hash(&self) -> u64 {
        *self.inner.content_hash.get_or_init(|| {
            self.iter().fold(0, |accumulator: u64, element| {
                let mut hasher = DefaultHasher::new();
                element.hash(&mut hasher);
                accumulator.wrapping_add(hasher.finish())
            })
        })
    }

    const fn unsupported<R>(operation: &'static str) -> Result<R, OrderedSetError> {
        Err(OrderedSetError::UnsupportedMutation { operation })
    }
}

impl<T> Storage<T> for FrozenOrderedSet<T> {
    #[inline]
    fn store(&self) -> &OrderedElementStore<T> {
        &self.inner.store
    }

    #[inline]
    fn from_store(store: OrderedElementStore<T>) -> Self {
        Self {
            inner: Arc::new(FrozenStorage {
                store,
                content_hash: OnceLock::new(),
            }),
        }
    }
}

impl<T: Clone + Eq + Hash> OrderedSetOps<T> for FrozenOrderedSet<T> {}

impl<T: Clone + Eq + Hash> SetMutation<T> for FrozenOrderedSet<T> {
    fn add(&mut self, _element: T) -> Result<(), OrderedSetError> {
        Self::unsupported("add to")
    }

    fn clear(&mut self) -> Result<(), OrderedSetError> {
        Self::unsupported("clear")
    }

    fn discard(&mut self, _element: &T) -> Result<(), OrderedSetError> {
        Self::unsupported("discard from")
    }

    fn remove(&mut self, _element: &T) -> Result<(), OrderedSetError> {
        Self::unsupported("remove from")
    }

    fn pop(&mut self) -> Result<T, OrderedSetError> {
        Self::unsupported("pop from")
    }

    fn update<O>(&mut self, _other: &O) -> Result<(), OrderedSetError>
    where
        O: ElementSource<T> + ?Sized,
    {
        Self::unsupported("update")
    }

    fn difference_update<O>(&mut self, _other: &O) -> Result<(), OrderedSetError>
    where
        O: ElementSource<T> + ?Sized,
    {
        Self::unsupported("update")
    }

    fn intersection_update<O>(&mut self, _other: &O) -> Result<(), OrderedSetError>
    where
        O: ElementSource<T> + ?Sized,
    {
        Self::unsupported("update")
    }

    fn symmetric_difference_update<O>(&mut self, _other: &O) -> Result<(), OrderedSetError>
    where
        O: ElementSource<T> + ?Sized,
    {
        Self::unsupported("update")
    }
}

impl<T> Clone for FrozenOrderedSet<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone + Eq + Hash> Default for FrozenOrderedSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Eq + Hash> Hash for FrozenOrderedSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.content_hash().wrapping_mul(HASH_SALT));
    }
}

impl<T: Clone + Eq + Hash> From<OrderedSet<T>> for FrozenOrderedSet<T> {
    fn from(set: OrderedSet<T>) -> Self {
        set.freeze()
    }
}

impl_ordered_set_traits!(FrozenOrderedSet, "FrozenOrderedSet", OrderedSet);

static_assertions::assert_impl_all!(FrozenOrderedSet<i32>: Send, Sync, Hash, Eq);
static_assertions::assert_impl_all!(FrozenOrderedSet<String>: Send, Sync, Hash, Eq);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    fn frozen_of(elements: &[i32]) -> FrozenOrderedSet<i32> {
        elements.iter().copied().collect()
    }

    fn hash_of<V: Hash>(value: &V) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[rstest]
    fn test_copy_shares_storage() {
        let set = frozen_of(&[3, 1, 2]);
        let copy = set.copy();
        assert!(Arc::ptr_eq(&set.inner, &copy.inner));
        assert_eq!(copy, set);
    }

    #[rstest]
    fn test_freeze_adopts_storage() {
        let mutable: OrderedSet<i32> = [3, 1, 2].into_iter().collect();
        let frozen = FrozenOrderedSet::from(mutable);
        assert_eq!(frozen, vec![3, 1, 2]);
    }

    #[rstest]
    #[case::add("add to")]
    #[case::clear("clear")]
    #[case::discard("discard from")]
    #[case::remove("remove from")]
    #[case::pop("pop from")]
    #[case::update("update")]
    fn test_mutations_are_rejected(#[case] operation: &'static str) {
        let mut set = frozen_of(&[3, 1, 2]);
        let result = match operation {
            "add to" => set.add(0),
            "clear" => SetMutation::clear(&mut set),
            "discard from" => set.discard(&1),
            "remove from" => set.remove(&1),
            "pop from" => set.pop().map(|_| ()),
            _ => set.update(&[7]),
        };
        assert_eq!(
            result,
            Err(OrderedSetError::UnsupportedMutation { operation })
        );
        assert_eq!(set, vec![3, 1, 2]);
    }

    #[rstest]
    fn test_in_place_algebra_is_rejected() {
        let mut set = frozen_of(&[3, 1, 2]);
        let other = frozen_of(&[1, 7]);
        let expected = Err(OrderedSetError::UnsupportedMutation { operation: "update" });
        assert_eq!(set.difference_update(&other), expected);
        assert_eq!(set.intersection_update(&other), expected);
        assert_eq!(set.symmetric_difference_update(&other), expected);
        assert_eq!(set, vec![3, 1, 2]);
    }

    #[rstest]
    fn test_hash_is_content_derived() {
        assert_eq!(hash_of(&frozen_of(&[1, 2])), hash_of(&frozen_of(&[1, 2])));
        assert_eq!(hash_of(&frozen_of(&[1, 2])), hash_of(&frozen_of(&[2, 1])));
        assert_ne!(hash_of(&frozen_of(&[1, 2])), hash_of(&frozen_of(&[1, 3])));
    }

    #[rstest]
    fn test_hash_is_cached_across_copies() {
        let set = frozen_of(&[5, 6]);
        let first = hash_of(&set);
        assert!(set.inner.content_hash.get().is_some());
        assert_eq!(hash_of(&set.copy()), first);
    }

    #[rstest]
    fn test_nested_in_hash_set() {
        let mut outer: HashSet<FrozenOrderedSet<i32>> = HashSet::new();
        outer.insert(frozen_of(&[1, 2]));
        outer.insert(frozen_of(&[1, 2]));
        outer.insert(frozen_of(&[3]));
        assert_eq!(outer.len(), 2);
        assert!(outer.contains(&frozen_of(&[1, 2])));
    }

    #[rstest]
    fn test_into_mutable_is_independent() {
        let frozen = frozen_of(&[3, 1, 2]);
        let mut mutable = frozen.clone().into_mutable();
        mutable.add(4);
        assert_eq!(frozen, vec![3, 1, 2]);
        assert_eq!(mutable, vec![3, 1, 2, 4]);
    }

    #[rstest]
    fn test_debug_names_variant() {
        assert_eq!(
            format!("{:?}", frozen_of(&[3, 1, 2])),
            "FrozenOrderedSet({3, 1, 2})"
        );
    }

    #[rstest]
    fn test_empty_frozen_set() {
        let set: FrozenOrderedSet<i32> = FrozenOrderedSet::new();
        assert!(set.is_empty());
        assert_eq!(set.to_string(), "{}");
    }
}
