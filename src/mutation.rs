//! The mutating capability set of an ordered set.
//!
//! [`SetMutation`] lists every in-place operation. Both variants implement
//! it: [`OrderedSet`](crate::OrderedSet) performs the operation, and
//! [`FrozenOrderedSet`](crate::FrozenOrderedSet) rejects every call with
//! [`OrderedSetError::UnsupportedMutation`]. Code written against the trait
//! therefore receives an inspectable error instead of a missing method.
//!
//! # Examples
//!
//! ```rust
//! use orderedset::{FrozenOrderedSet, OrderedSet, OrderedSetError, SetMutation};
//!
//! fn append<S: SetMutation<i32>>(set: &mut S) -> Result<(), OrderedSetError> {
//!     set.add(0)
//! }
//!
//! let mut mutable: OrderedSet<i32> = [3, 1, 2].into_iter().collect();
//! assert!(append(&mut mutable).is_ok());
//!
//! let mut frozen: FrozenOrderedSet<i32> = [3, 1, 2].into_iter().collect();
//! assert_eq!(
//!     append(&mut frozen),
//!     Err(OrderedSetError::UnsupportedMutation { operation: "add to" })
//! );
//! ```

use crate::error::OrderedSetError;
use crate::source::ElementSource;

/// In-place operations on an ordered set.
///
/// Every method either completes or returns an error without modifying the
/// set.
pub trait SetMutation<T> {
    /// Appends `element` if absent; a present element keeps its position.
    ///
    /// # Errors
    ///
    /// [`OrderedSetError::UnsupportedMutation`] on a frozen set.
    fn add(&mut self, element: T) -> Result<(), OrderedSetError>;

    /// Removes every element.
    ///
    /// # Errors
    ///
    /// [`OrderedSetError::UnsupportedMutation`] on a frozen set.
    fn clear(&mut self) -> Result<(), OrderedSetError>;

    /// Removes `element`.
    ///
    /// # Errors
    ///
    /// [`OrderedSetError::ElementNotFound`] if `element` is absent,
    /// [`OrderedSetError::UnsupportedMutation`] on a frozen set.
    fn discard(&mut self, element: &T) -> Result<(), OrderedSetError>;

    /// Same as [`discard`](Self::discard).
    ///
    /// # Errors
    ///
    /// See [`discard`](Self::discard).
    fn remove(&mut self, element: &T) -> Result<(), OrderedSetError>;

    /// Removes and returns the most recently inserted element.
    ///
    /// # Errors
    ///
    /// [`OrderedSetError::EmptyCollection`] if the set is empty,
    /// [`OrderedSetError::UnsupportedMutation`] on a frozen set.
    fn pop(&mut self) -> Result<T, OrderedSetError>;

    /// Replaces the contents with the union of the set and `other`.
    ///
    /// # Errors
    ///
    /// [`OrderedSetError::UnsupportedMutation`] on a frozen set.
    fn update<O>(&mut self, other: &O) -> Result<(), OrderedSetError>
    where
        O: ElementSource<T> + ?Sized;

    /// Replaces the contents with the difference of the set and `other`.
    ///
    /// # Errors
    ///
    /// [`OrderedSetError::UnsupportedMutation`] on a frozen set.
    fn difference_update<O>(&mut self, other: &O) -> Result<(), OrderedSetError>
    where
        O: ElementSource<T> + ?Sized;

    /// Replaces the contents with the intersection of the set and `other`.
    ///
    /// # Errors
    ///
    /// [`OrderedSetError::UnsupportedMutation`] on a frozen set.
    fn intersection_update<O>(&mut self, other: &O) -> Result<(), OrderedSetError>
    where
        O: ElementSource<T> + ?Sized;

    /// Replaces the contents with the symmetric difference of the set and
    /// `other`.
    ///
    /// # Errors
    ///
    /// [`OrderedSetError::UnsupportedMutation`] on a frozen set.
    fn symmetric_difference_update<O>(&mut self, other: &O) -> Result<(), OrderedSetError>
    where
        O: ElementSource<T> + ?Sized;
}
