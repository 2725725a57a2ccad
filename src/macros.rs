//! Trait implementations shared by both ordered set variants.

/// Implements comparison, formatting, indexing, iteration and the binary
/// set operators for an ordered set type.
///
/// `$set` is the type being implemented, `$name` its name in `Debug`
/// output, and `$other` the sibling variant it is also compared against.
macro_rules! impl_ordered_set_traits {
    ($set:ident, $name:literal, $other:ident) => {
        impl<T: Clone + Eq + ::std::hash::Hash> $crate::source::ElementSource<T> for $set<T> {
            fn kind(&self) -> $crate::source::SourceKind {
                $crate::source::SourceKind::Sequence
            }

            fn element_count(&self) -> usize {
                $crate::ops::OrderedSetOps::len(self)
            }

            fn contains_element(&self, element: &T) -> bool {
                $crate::ops::OrderedSetOps::contains(self, element)
            }

            fn elements<'a>(&'a self) -> impl Iterator<Item = &'a T>
            where
                T: 'a,
            {
                $crate::ops::OrderedSetOps::iter(self)
            }
        }

        // ---------------------------------------------------------------
        // Equality
        // ---------------------------------------------------------------

        impl<T: Clone + Eq + ::std::hash::Hash> PartialEq for $set<T> {
            fn eq(&self, other: &Self) -> bool {
                $crate::ops::OrderedSetOps::equals(self, other)
            }
        }

        impl<T: Clone + Eq + ::std::hash::Hash> Eq for $set<T> {}

        impl<T: Clone + Eq + ::std::hash::Hash> PartialEq<$other<T>> for $set<T> {
            fn eq(&self, other: &$other<T>) -> bool {
                $crate::ops::OrderedSetOps::equals(self, other)
            }
        }

        impl<T: Clone + Eq + ::std::hash::Hash> PartialEq<Vec<T>> for $set<T> {
            fn eq(&self, other: &Vec<T>) -> bool {
                $crate::ops::OrderedSetOps::equals(self, other)
            }
        }

        impl<T: Clone + Eq + ::std::hash::Hash> PartialEq<[T]> for $set<T> {
            fn eq(&self, other: &[T]) -> bool {
                $crate::ops::OrderedSetOps::equals(self, other)
            }
        }

        impl<T: Clone + Eq + ::std::hash::Hash, const N: usize> PartialEq<[T; N]> for $set<T> {
            fn eq(&self, other: &[T; N]) -> bool {
                $crate::ops::OrderedSetOps::equals(self, other)
            }
        }

        impl<T: Clone + Eq + ::std::hash::Hash> PartialEq<::std::collections::VecDeque<T>>
            for $set<T>
        {
            fn eq(&self, other: &::std::collections::VecDeque<T>) -> bool {
                $crate::ops::OrderedSetOps::equals(self, other)
            }
        }

        impl<T, S> PartialEq<::std::collections::HashSet<T, S>> for $set<T>
        where
            T: Clone + Eq + ::std::hash::Hash,
            S: ::std::hash::BuildHasher,
        {
            fn eq(&self, other: &::std::collections::HashSet<T, S>) -> bool {
                $crate::ops::OrderedSetOps::equals(self, other)
            }
        }

        impl<T: Clone + Ord + ::std::hash::Hash> PartialEq<::std::collections::BTreeSet<T>>
            for $set<T>
        {
            fn eq(&self, other: &::std::collections::BTreeSet<T>) -> bool {
                $crate::ops::OrderedSetOps::equals(self, other)
            }
        }

        impl<T: Clone + Eq + ::std::hash::Hash> PartialEq<$set<T>> for Vec<T> {
            fn eq(&self, other: &$set<T>) -> bool {
                $crate::ops::OrderedSetOps::equals(other, self)
            }
        }

        impl<T, S> PartialEq<$set<T>> for ::std::collections::HashSet<T, S>
        where
            T: Clone + Eq + ::std::hash::Hash,
            S: ::std::hash::BuildHasher,
        {
            fn eq(&self, other: &$set<T>) -> bool {
                $crate::ops::OrderedSetOps::equals(other, self)
            }
        }

        impl<T: Clone + Eq + ::std::hash::Hash> PartialEq<$set<T>> for [T] {
            fn eq(&self, other: &$set<T>) -> bool {
                $crate::ops::OrderedSetOps::equals(other, self)
            }
        }

        impl<T: Clone + Eq + ::std::hash::Hash, const N: usize> PartialEq<$set<T>> for [T; N] {
            fn eq(&self, other: &$set<T>) -> bool {
                $crate::ops::OrderedSetOps::equals(other, self)
            }
        }

        impl<T: Clone + Eq + ::std::hash::Hash> PartialEq<$set<T>>
            for ::std::collections::VecDeque<T>
        {
            fn eq(&self, other: &$set<T>) -> bool {
                $crate::ops::OrderedSetOps::equals(other, self)
            }
        }

        impl<T: Clone + Ord + ::std::hash::Hash> PartialEq<$set<T>>
            for ::std::collections::BTreeSet<T>
        {
            fn eq(&self, other: &$set<T>) -> bool {
                $crate::ops::OrderedSetOps::equals(other, self)
            }
        }

        // ---------------------------------------------------------------
        // Ordering
        // ---------------------------------------------------------------

        impl_ordered_set_traits!(@ordering $set, $set);
        impl_ordered_set_traits!(@ordering $set, $other);

        // ---------------------------------------------------------------
        // Formatting
        // ---------------------------------------------------------------

        impl<T: Clone + Eq + ::std::hash::Hash + ::std::fmt::Display> ::std::fmt::Display
            for $set<T>
        {
            fn fmt(&self, formatter: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(formatter, "{{")?;
                let mut first = true;
                for element in $crate::ops::OrderedSetOps::iter(self) {
                    if first {
                        first = false;
                    } else {
                        write!(formatter, ", ")?;
                    }
                    write!(formatter, "{element}")?;
                }
                write!(formatter, "}}")
            }
        }

        impl<T: Clone + Eq + ::std::hash::Hash + ::std::fmt::Debug> ::std::fmt::Debug
            for $set<T>
        {
            fn fmt(&self, formatter: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(formatter, concat!($name, "("))?;
                formatter
                    .debug_set()
                    .entries($crate::ops::OrderedSetOps::iter(self))
                    .finish()?;
                write!(formatter, ")")
            }
        }

        // ---------------------------------------------------------------
        // Indexing and iteration
        // ---------------------------------------------------------------

        /// Returns the element at position `index` in insertion order.
        ///
        /// # Panics
        ///
        /// Panics if `index >= len`. Use `get` for a fallible lookup that
        /// also accepts negative indices.
        impl<T: Clone + Eq + ::std::hash::Hash> ::std::ops::Index<usize> for $set<T> {
            type Output = T;

            fn index(&self, index: usize) -> &T {
                match $crate::ops::sealed::Storage::store(self).get(index) {
                    Some(element) => element,
                    None => panic!(
                        "index {index} out of range for ordered set of length {}",
                        $crate::ops::OrderedSetOps::len(self)
                    ),
                }
            }
        }

        impl<'a, T: Clone + Eq + ::std::hash::Hash> IntoIterator for &'a $set<T> {
            type Item = &'a T;
            type IntoIter = $crate::iter::Iter<'a, T>;

            #[inline]
            fn into_iter(self) -> Self::IntoIter {
                $crate::ops::OrderedSetOps::iter(self)
            }
        }

        impl<T: Clone + Eq + ::std::hash::Hash> FromIterator<T> for $set<T> {
            fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
                <Self as $crate::ops::sealed::Storage<T>>::from_store(iter.into_iter().collect())
            }
        }

        impl<T: Clone + Eq + ::std::hash::Hash> From<Vec<T>> for $set<T> {
            fn from(elements: Vec<T>) -> Self {
                elements.into_iter().collect()
            }
        }

        impl<T: Clone + Eq + ::std::hash::Hash, const N: usize> From<[T; N]> for $set<T> {
            fn from(elements: [T; N]) -> Self {
                elements.into_iter().collect()
            }
        }

        // ---------------------------------------------------------------
        // Binary set operators
        // ---------------------------------------------------------------

        impl_ordered_set_traits!(@operator $set, BitAnd, bitand, intersection);
        impl_ordered_set_traits!(@operator $set, BitOr, bitor, union);
        impl_ordered_set_traits!(@operator $set, Sub, sub, difference);
        impl_ordered_set_traits!(@operator $set, BitXor, bitxor, symmetric_difference);
    };

    (@ordering $set:ident, $rhs:ident) => {
        /// `<=` and `<` are subset tests, `>=` and `>` superset tests.
        ///
        /// These ignore order, so `le` or `ge` may hold for two sets whose
        /// `partial_cmp` is `None` (same elements, different order).
        impl<T: Clone + Eq + ::std::hash::Hash> PartialOrd<$rhs<T>> for $set<T> {
            fn partial_cmp(&self, other: &$rhs<T>) -> Option<::std::cmp::Ordering> {
                if $crate::ops::OrderedSetOps::equals(self, other) {
                    Some(::std::cmp::Ordering::Equal)
                } else if $crate::ops::OrderedSetOps::is_strict_subset(self, other) {
                    Some(::std::cmp::Ordering::Less)
                } else if $crate::ops::OrderedSetOps::is_strict_superset(self, other) {
                    Some(::std::cmp::Ordering::Greater)
                } else {
                    None
                }
            }

            fn lt(&self, other: &$rhs<T>) -> bool {
                $crate::ops::OrderedSetOps::is_strict_subset(self, other)
            }

            fn le(&self, other: &$rhs<T>) -> bool {
                $crate::ops::OrderedSetOps::is_subset(self, other)
            }

            fn gt(&self, other: &$rhs<T>) -> bool {
                $crate::ops::OrderedSetOps::is_strict_superset(self, other)
            }

            fn ge(&self, other: &$rhs<T>) -> bool {
                $crate::ops::OrderedSetOps::is_superset(self, other)
            }
        }
    };

    (@operator $set:ident, $trait:ident, $method:ident, $operation:ident) => {
        impl<T, O> ::std::ops::$trait<&O> for &$set<T>
        where
            T: Clone + Eq + ::std::hash::Hash,
            O: $crate::source::ElementSource<T> + ?Sized,
        {
            type Output = $set<T>;

            fn $method(self, other: &O) -> $set<T> {
                $crate::ops::OrderedSetOps::$operation(self, other)
            }
        }
    };
}
