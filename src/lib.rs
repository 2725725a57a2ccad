//! # orderedset
//!
//! Sets that remember insertion order.
//!
//! ## Overview
//!
//! This library provides two set types with ordinary mathematical set
//! semantics (membership, union, intersection, difference, symmetric
//! difference, subset and superset tests) that also expose the order in which
//! elements were first added as an indexable sequence:
//!
//! - [`OrderedSet`]: mutable, with O(1) expected insertion, removal and
//!   membership tests.
//! - [`FrozenOrderedSet`]: immutable, cheaply cloneable, and `Hash`, so it
//!   can be used as a map key or nested in other hashed collections.
//!
//! Both implement [`OrderedSetOps`] (queries, slicing and set algebra) and
//! [`SetMutation`] (the in-place operations, all of which fail on the frozen
//! variant). Algebraic operations return a set of the same variant as the
//! receiver.
//!
//! ## Feature Flags
//!
//! - `fxhash`: index elements with `rustc_hash::FxBuildHasher`
//! - `ahash`: index elements with `ahash::RandomState` (takes precedence
//!   over `fxhash`)
//!
//! ## Example
//!
//! ```rust
//! use orderedset::prelude::*;
//! use std::collections::HashSet;
//!
//! let set: OrderedSet<i32> = [3, 1, 2, 1, 3].into_iter().collect();
//!
//! // Duplicates collapse to their first occurrence
//! assert_eq!(set.to_vec(), vec![3, 1, 2]);
//! assert_eq!(set.to_string(), "{3, 1, 2}");
//!
//! // Order matters against sequences, not against unordered sets
//! assert_eq!(set, vec![3, 1, 2]);
//! assert_eq!(set, HashSet::from([1, 2, 3]));
//!
//! // Positional access
//! assert_eq!(set.get(-1), Ok(&2));
//! assert_eq!(set.get_slice(Some(1), None, None).unwrap(), vec![1, 2]);
//!
//! // Set algebra keeps the receiver's order first
//! assert_eq!(set.union(&[1, 7]), vec![3, 1, 2, 7]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the set types and the traits that carry their methods.
///
/// # Usage
///
/// ```rust
/// use orderedset::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::OrderedSetError;
    pub use crate::frozen::FrozenOrderedSet;
    pub use crate::mutation::SetMutation;
    pub use crate::ops::OrderedSetOps;
    pub use crate::ordered_set::OrderedSet;
    pub use crate::source::{ElementSource, SourceKind};
}

#[macro_use]
mod macros;

mod error;
mod frozen;
mod iter;
mod mutation;
mod ops;
mod ordered_set;
mod source;
mod store;

pub use error::OrderedSetError;
pub use frozen::FrozenOrderedSet;
pub use iter::{IntoIter, Iter};
pub use mutation::SetMutation;
pub use ops::OrderedSetOps;
pub use ordered_set::OrderedSet;
pub use source::{ElementSource, SourceKind};
pub use store::ElementHasher;
