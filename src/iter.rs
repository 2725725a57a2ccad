//! Iterators over ordered sets.

use std::iter::FusedIterator;

/// Iterator over references to the elements of an ordered set, in
/// insertion order.
///
/// Created by [`OrderedSetOps::iter`](crate::OrderedSetOps::iter).
pub struct Iter<'a, T> {
    slots: std::slice::Iter<'a, Option<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) const fn new(slots: std::slice::Iter<'a, Option<T>>, remaining: usize) -> Self {
        Self { slots, remaining }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let element = self.slots.by_ref().find_map(Option::as_ref)?;
        self.remaining -= 1;
        Some(element)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let element = self.slots.by_ref().rev().find_map(Option::as_ref)?;
        self.remaining -= 1;
        Some(element)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over the elements of an [`OrderedSet`](crate::OrderedSet),
/// in insertion order.
pub struct IntoIter<T> {
    slots: std::vec::IntoIter<Option<T>>,
    remaining: usize,
}

impl<T> IntoIter<T> {
    pub(crate) const fn new(slots: std::vec::IntoIter<Option<T>>, remaining: usize) -> Self {
        Self { slots, remaining }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let element = self.slots.by_ref().flatten().next()?;
        self.remaining -= 1;
        Some(element)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let element = self.slots.by_ref().rev().flatten().next()?;
        self.remaining -= 1;
        Some(element)
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    #[inline]
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for IntoIter<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_iter_skips_empty_slots_from_both_ends() {
        let slots = vec![None, Some(1), None, Some(2), Some(3), None];
        let mut iter = Iter::new(slots.iter(), 3);
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&3));
        assert_eq!(iter.len(), 1);
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[rstest]
    fn test_into_iter_skips_empty_slots() {
        let slots = vec![Some("a"), None, Some("b")];
        let iter = IntoIter::new(slots.into_iter(), 2);
        assert_eq!(iter.rev().collect::<Vec<_>>(), vec!["b", "a"]);
    }
}
