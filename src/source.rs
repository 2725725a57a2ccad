//! Element sources accepted by set algebra and comparisons.
//!
//! Every operation that takes "another collection" accepts any
//! [`ElementSource`]. A source reports whether it is sequence-like or
//! set-like through [`SourceKind`]; equality with an ordered set depends on
//! that tag:
//!
//! - [`SourceKind::Sequence`]: equal iff both have the same length and yield
//!   identical elements in the same order.
//! - [`SourceKind::Set`]: equal iff both hold the same elements, in any
//!   order.
//!
//! # Examples
//!
//! ```rust
//! use orderedset::{OrderedSet, OrderedSetOps};
//! use std::collections::HashSet;
//!
//! let set: OrderedSet<i32> = [3, 1, 2].into_iter().collect();
//!
//! assert!(set.equals(&vec![3, 1, 2]));
//! assert!(!set.equals(&vec![1, 2, 3]));
//! assert!(set.equals(&HashSet::from([1, 2, 3])));
//! ```

use std::collections::{BTreeSet, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};

/// Whether an [`ElementSource`] is compared by order or by content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// Ordered, possibly containing duplicates.
    Sequence,
    /// Unordered, without duplicates.
    Set,
}

/// A finite collection of elements that ordered sets can compare against and
/// combine with.
pub trait ElementSource<T> {
    /// The comparison rule that applies to this source.
    fn kind(&self) -> SourceKind;

    /// The number of elements the source yields, counting duplicates.
    fn element_count(&self) -> usize;

    /// Returns `true` if the source holds `element`.
    ///
    /// O(1) expected for hashed sources, O(n) for plain sequences.
    fn contains_element(&self, element: &T) -> bool;

    /// The elements of the source in its own iteration order.
    fn elements<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a;
}

impl<T: PartialEq> ElementSource<T> for [T] {
    fn kind(&self) -> SourceKind {
        SourceKind::Sequence
    }

    fn element_count(&self) -> usize {
        self.len()
    }

    fn contains_element(&self, element: &T) -> bool {
        self.contains(element)
    }

    fn elements<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.iter()
    }
}

impl<T: PartialEq, const N: usize> ElementSource<T> for [T; N] {
    fn kind(&self) -> SourceKind {
        SourceKind::Sequence
    }

    fn element_count(&self) -> usize {
        N
    }

    fn contains_element(&self, element: &T) -> bool {
        self.contains(element)
    }

    fn elements<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.iter()
    }
}

impl<T: PartialEq> ElementSource<T> for Vec<T> {
    fn kind(&self) -> SourceKind {
        SourceKind::Sequence
    }

    fn element_count(&self) -> usize {
        self.len()
    }

    fn contains_element(&self, element: &T) -> bool {
        self.contains(element)
    }

    fn elements<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.iter()
    }
}

impl<T: PartialEq> ElementSource<T> for VecDeque<T> {
    fn kind(&self) -> SourceKind {
        SourceKind::Sequence
    }

    fn element_count(&self) -> usize {
        self.len()
    }

    fn contains_element(&self, element: &T) -> bool {
        self.contains(element)
    }

    fn elements<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.iter()
    }
}

impl<T: Eq + Hash, S: BuildHasher> ElementSource<T> for HashSet<T, S> {
    fn kind(&self) -> SourceKind {
        SourceKind::Set
    }

    fn element_count(&self) -> usize {
        self.len()
    }

    fn contains_element(&self, element: &T) -> bool {
        self.contains(element)
    }

    fn elements<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.iter()
    }
}

impl<T: Ord> ElementSource<T> for BTreeSet<T> {
    fn kind(&self) -> SourceKind {
        SourceKind::Set
    }

    fn element_count(&self) -> usize {
        self.len()
    }

    fn contains_element(&self, element: &T) -> bool {
        self.contains(element)
    }

    fn elements<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.iter()
    }
}

/// Number of distinct elements in `source`.
pub(crate) fn distinct_count<T, O>(source: &O) -> usize
where
    T: Eq + Hash,
    O: ElementSource<T> + ?Sized,
{
    match source.kind() {
        SourceKind::Set => source.element_count(),
        SourceKind::Sequence => source.elements().collect::<HashSet<&T>>().len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn kind_of<O: ElementSource<i32> + ?Sized>(source: &O) -> SourceKind {
        source.kind()
    }

    #[rstest]
    fn test_sequence_kinds() {
        assert_eq!(kind_of(&vec![1]), SourceKind::Sequence);
        assert_eq!(kind_of(&[1, 2]), SourceKind::Sequence);
        assert_eq!(kind_of(&VecDeque::from([1])), SourceKind::Sequence);
        assert_eq!(kind_of(&[1, 2][..]), SourceKind::Sequence);
    }

    #[rstest]
    fn test_set_kinds() {
        assert_eq!(kind_of(&HashSet::from([1])), SourceKind::Set);
        assert_eq!(kind_of(&BTreeSet::from([1])), SourceKind::Set);
    }

    #[rstest]
    #[case::sequence_with_duplicates(vec![1, 2, 1, 3, 2], 3)]
    #[case::sequence_without_duplicates(vec![4, 5], 2)]
    #[case::empty(vec![], 0)]
    fn test_distinct_count_of_sequence(#[case] elements: Vec<i32>, #[case] expected: usize) {
        assert_eq!(distinct_count::<i32, _>(&elements), expected);
    }

    #[rstest]
    fn test_element_count_counts_duplicates() {
        let elements: Vec<i32> = vec![1, 1, 1];
        assert_eq!(ElementSource::<i32>::element_count(&elements), 3);
        assert!(elements.contains_element(&1));
        assert!(!elements.contains_element(&2));
    }

    fn first_element<'a, O: ElementSource<i32> + ?Sized>(source: &'a O) -> Option<&'a i32> {
        source.elements().next()
    }

    #[rstest]
    fn test_elements_borrow_the_source() {
        let elements = vec![4, 5];
        let first = first_element(&elements);
        assert_eq!(first, Some(&4));
        assert_eq!(first_element(&HashSet::from([9])), Some(&9));
    }

    #[rstest]
    fn test_elements_of_borrowed_element_type() {
        let owned = String::from("red green");
        let words: Vec<&str> = owned.split(' ').collect();
        let collected: Vec<&&str> = words.elements().collect();
        assert_eq!(collected, vec![&"red", &"green"]);
    }
}
