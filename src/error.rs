//! Error types for ordered sets.
//!
//! Every fallible operation on [`OrderedSet`](crate::OrderedSet) and
//! [`FrozenOrderedSet`](crate::FrozenOrderedSet) reports failure through
//! [`OrderedSetError`]. A failed operation never modifies the set it was
//! called on.

use std::error::Error;
use std::fmt;

/// Errors that can occur when querying or mutating an ordered set.
///
/// # Examples
///
/// ```rust
/// use orderedset::{OrderedSet, OrderedSetError, OrderedSetOps};
///
/// let set: OrderedSet<i32> = [3, 2, 1].into_iter().collect();
/// assert_eq!(
///     set.get(5),
///     Err(OrderedSetError::IndexOutOfRange { index: 5, length: 3 })
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderedSetError {
    /// A positional index fell outside `[0, length)` after negative indices
    /// were normalized against the length.
    IndexOutOfRange {
        /// The index as passed by the caller.
        index: isize,
        /// The length of the set at the time of the call.
        length: usize,
    },

    /// A slice bound was negative, or the slice step was zero.
    InvalidSliceArgument {
        /// Which argument was rejected: `"start"`, `"stop"` or `"step"`.
        argument: &'static str,
        /// The rejected value.
        value: isize,
    },

    /// `discard` or `remove` was asked to delete an element that is not
    /// in the set.
    ElementNotFound,

    /// `pop` was called on an empty set.
    EmptyCollection,

    /// A mutating operation was invoked on a frozen set.
    UnsupportedMutation {
        /// The name of the rejected operation.
        operation: &'static str,
    },
}

impl fmt::Display for OrderedSetError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, length } => {
                write!(
                    formatter,
                    "index {index} out of range for ordered set of length {length}"
                )
            }
            Self::InvalidSliceArgument { argument, value } => {
                if *argument == "step" {
                    write!(formatter, "slice step must not be zero")
                } else {
                    write!(
                        formatter,
                        "slice {argument} must not be negative (got {value})"
                    )
                }
            }
            Self::ElementNotFound => write!(formatter, "element not found in ordered set"),
            Self::EmptyCollection => write!(formatter, "pop from an empty ordered set"),
            Self::UnsupportedMutation { operation } => {
                write!(formatter, "cannot {operation} a FrozenOrderedSet")
            }
        }
    }
}

impl Error for OrderedSetError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::index(
        OrderedSetError::IndexOutOfRange { index: -4, length: 3 },
        "index -4 out of range for ordered set of length 3"
    )]
    #[case::slice_start(
        OrderedSetError::InvalidSliceArgument { argument: "start", value: -1 },
        "slice start must not be negative (got -1)"
    )]
    #[case::slice_step(
        OrderedSetError::InvalidSliceArgument { argument: "step", value: 0 },
        "slice step must not be zero"
    )]
    #[case::not_found(OrderedSetError::ElementNotFound, "element not found in ordered set")]
    #[case::empty(OrderedSetError::EmptyCollection, "pop from an empty ordered set")]
    #[case::frozen(
        OrderedSetError::UnsupportedMutation { operation: "add to" },
        "cannot add to a FrozenOrderedSet"
    )]
    fn test_display(#[case] error: OrderedSetError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    fn test_is_std_error() {
        let error: Box<dyn Error> = Box::new(OrderedSetError::EmptyCollection);
        assert!(error.source().is_none());
    }
}
