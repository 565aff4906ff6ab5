//! The read-only ordered collection contract.
//!
//! [`OrderedCollection`] has two required methods, [`count`] and
//! [`element_at`]. Every other operation (search, enumeration, sorting,
//! extraction, description, typed bridging) is a provided method built on
//! those two primitives, so a custom storage type only has to supply them.
//! [`ObjectArray`](crate::ObjectArray) overrides the provided methods with
//! direct slice operations.
//!
//! # Stop signals
//!
//! Visitors return [`ControlFlow`]: `Continue(())` keeps going and
//! `Break(())` halts the enumeration after the current element. Predicates
//! return `ControlFlow<bool, bool>` where the payload reports whether the
//! element passed and the variant reports whether to keep scanning.
//!
//! # Examples
//!
//! ```rust
//! use object_array::prelude::*;
//! use std::ops::ControlFlow;
//!
//! let array = ObjectArray::from_values([3, 1, 2]);
//! assert_eq!(array.count(), 3);
//! assert_eq!(array.index_of(&object(2)), Some(2));
//!
//! let sorted = array.sorted_copy(|left, right| {
//!     left.describe().cmp(&right.describe())
//! });
//! assert_eq!(ObjectArray::from_objects(sorted).joined_description(","), "1,2,3");
//!
//! let mut visited = 0;
//! array.enumerate(|_, index| {
//!     visited += 1;
//!     if index == 1 { ControlFlow::Break(()) } else { ControlFlow::Continue(()) }
//! });
//! assert_eq!(visited, 2);
//! ```
//!
//! [`count`]: OrderedCollection::count
//! [`element_at`]: OrderedCollection::element_at

use std::any::Any;
use std::cmp::Ordering;
use std::iter::FusedIterator;
use std::ops::ControlFlow;

use crate::error::BridgeError;
use crate::index_set::IndexSet;
use crate::membership::ObjectSet;
use crate::object::{ObjectRef, is_equal, is_identical};
use crate::options::{BinarySearchingOptions, EnumerationOptions, SortOptions};
use crate::range::IndexRange;

/// An ordered, indexable collection of [`ObjectRef`] handles.
pub trait OrderedCollection {
    /// Current number of elements.
    fn count(&self) -> usize;

    /// Returns the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.count()`.
    fn element_at(&self, index: usize) -> ObjectRef;

    /// Returns `true` if the collection has no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Returns the element at `index`, or `None` when out of range.
    fn get(&self, index: usize) -> Option<ObjectRef> {
        (index < self.count()).then(|| self.element_at(index))
    }

    /// The first element, if any.
    fn first(&self) -> Option<ObjectRef> {
        self.get(0)
    }

    /// The last element, if any.
    fn last(&self) -> Option<ObjectRef> {
        self.count()
            .checked_sub(1)
            .map(|index| self.element_at(index))
    }

    /// Snapshot of the current contents, in order.
    fn to_vec(&self) -> Vec<ObjectRef> {
        let mut elements = Vec::with_capacity(self.count());
        self.copy_into(IndexRange::full(self.count()), &mut elements);
        elements
    }

    /// Appends the elements of `range` to `target`.
    ///
    /// # Panics
    ///
    /// Panics if `range` does not fit the collection.
    #[track_caller]
    fn copy_into(&self, range: IndexRange, target: &mut Vec<ObjectRef>) {
        range.check("copy_into", self.count());
        target.reserve(range.length);
        target.extend(range.to_range().map(|index| self.element_at(index)));
    }

    /// Iterates over the elements front to back. Call `.rev()` for the
    /// reverse order.
    fn objects(&self) -> Objects<'_, Self> {
        Objects::new(self)
    }

    /// Returns `true` if any element is identical or equal to `element`.
    fn contains(&self, element: &ObjectRef) -> bool {
        self.index_of(element).is_some()
    }

    /// Position of the first element identical or equal to `element`.
    fn index_of(&self, element: &ObjectRef) -> Option<usize> {
        self.index_of_in_range(element, IndexRange::full(self.count()))
    }

    /// Like [`index_of`](Self::index_of), scanning only `range`.
    ///
    /// The returned position is relative to the whole collection.
    ///
    /// # Panics
    ///
    /// Panics if `range` does not fit the collection.
    #[track_caller]
    fn index_of_in_range(&self, element: &ObjectRef, range: IndexRange) -> Option<usize> {
        range.check("index_of_in_range", self.count());
        range
            .to_range()
            .find(|&index| is_equal(&self.element_at(index), element))
    }

    /// Position of the first element that is the same allocation as `element`.
    fn index_of_identical(&self, element: &ObjectRef) -> Option<usize> {
        self.index_of_identical_in_range(element, IndexRange::full(self.count()))
    }

    /// Like [`index_of_identical`](Self::index_of_identical), scanning only
    /// `range`.
    ///
    /// # Panics
    ///
    /// Panics if `range` does not fit the collection.
    #[track_caller]
    fn index_of_identical_in_range(&self, element: &ObjectRef, range: IndexRange) -> Option<usize> {
        range.check("index_of_identical_in_range", self.count());
        range
            .to_range()
            .find(|&index| is_identical(&self.element_at(index), element))
    }

    /// The first element, in this collection's order, that also occurs in
    /// `others`.
    fn first_common_element(&self, others: &[ObjectRef]) -> Option<ObjectRef> {
        let members = ObjectSet::from_objects(others);
        self.objects().find(|element| members.contains(element))
    }

    /// Element-wise identity-or-equality against `others`.
    fn is_equal_to(&self, others: &[ObjectRef]) -> bool {
        self.count() == others.len()
            && self
                .objects()
                .zip(others)
                .all(|(element, other)| is_equal(&element, other))
    }

    /// Copies the elements of `range`.
    ///
    /// # Panics
    ///
    /// Panics if `range` does not fit the collection.
    #[track_caller]
    fn subrange(&self, range: IndexRange) -> Vec<ObjectRef> {
        range.check("subrange", self.count());
        if range.is_empty() {
            return Vec::new();
        }
        let mut elements = Vec::with_capacity(range.length);
        self.copy_into(range, &mut elements);
        elements
    }

    /// Copies the elements at `indexes`, one run at a time in ascending order.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of range.
    #[track_caller]
    fn elements_at(&self, indexes: &IndexSet) -> Vec<ObjectRef> {
        let mut elements = Vec::with_capacity(indexes.count());
        for range in indexes.ranges() {
            self.copy_into(range, &mut elements);
        }
        elements
    }

    /// A copy with `element` appended.
    fn adding(&self, element: ObjectRef) -> Vec<ObjectRef> {
        let mut elements = self.to_vec();
        elements.push(element);
        elements
    }

    /// A copy with `others` appended.
    fn adding_all(&self, others: &[ObjectRef]) -> Vec<ObjectRef> {
        let mut elements = self.to_vec();
        elements.extend_from_slice(others);
        elements
    }

    /// Visits every element in order until the visitor breaks.
    fn enumerate<F>(&self, visitor: F)
    where
        F: FnMut(&ObjectRef, usize) -> ControlFlow<()>,
    {
        self.enumerate_with_options(EnumerationOptions::empty(), visitor);
    }

    /// Visits every element, honoring `options`.
    ///
    /// # Panics
    ///
    /// Panics if `options` contains [`EnumerationOptions::CONCURRENT`].
    #[track_caller]
    fn enumerate_with_options<F>(&self, options: EnumerationOptions, visitor: F)
    where
        F: FnMut(&ObjectRef, usize) -> ControlFlow<()>,
    {
        let indexes = IndexSet::from_range(IndexRange::full(self.count()));
        self.enumerate_at(&indexes, options, visitor);
    }

    /// Visits the elements at `indexes`, honoring `options`.
    ///
    /// # Panics
    ///
    /// Panics if `options` contains [`EnumerationOptions::CONCURRENT`] or an
    /// index is out of range.
    #[track_caller]
    fn enumerate_at<F>(&self, indexes: &IndexSet, options: EnumerationOptions, mut visitor: F)
    where
        F: FnMut(&ObjectRef, usize) -> ControlFlow<()>,
    {
        options.check_supported("enumerate_at");
        let _ = indexes.enumerate_indexes(options, |index| visitor(&self.element_at(index), index));
    }

    /// Position of the first element passing `predicate`.
    fn first_index_passing<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&ObjectRef, usize) -> ControlFlow<bool, bool>,
    {
        self.first_index_passing_with_options(EnumerationOptions::empty(), predicate)
    }

    /// Position of the first element passing `predicate`, honoring `options`.
    ///
    /// With [`EnumerationOptions::REVERSE`] this is the last passing element.
    #[track_caller]
    fn first_index_passing_with_options<P>(&self, options: EnumerationOptions, predicate: P) -> Option<usize>
    where
        P: FnMut(&ObjectRef, usize) -> ControlFlow<bool, bool>,
    {
        let indexes = IndexSet::from_range(IndexRange::full(self.count()));
        self.first_index_passing_at(&indexes, options, predicate)
    }

    /// Position of the first element at `indexes` passing `predicate`.
    #[track_caller]
    fn first_index_passing_at<P>(
        &self,
        indexes: &IndexSet,
        options: EnumerationOptions,
        mut predicate: P,
    ) -> Option<usize>
    where
        P: FnMut(&ObjectRef, usize) -> ControlFlow<bool, bool>,
    {
        let mut found = None;
        self.enumerate_at(indexes, options, |element, index| {
            let (passed, flow) = split_verdict(predicate(element, index));
            if passed {
                found = Some(index);
                return ControlFlow::Break(());
            }
            flow
        });
        found
    }

    /// Positions of every element passing `predicate`.
    fn all_indexes_passing<P>(&self, predicate: P) -> IndexSet
    where
        P: FnMut(&ObjectRef, usize) -> ControlFlow<bool, bool>,
    {
        self.all_indexes_passing_with_options(EnumerationOptions::empty(), predicate)
    }

    /// Positions of every element passing `predicate`, honoring `options`.
    #[track_caller]
    fn all_indexes_passing_with_options<P>(&self, options: EnumerationOptions, predicate: P) -> IndexSet
    where
        P: FnMut(&ObjectRef, usize) -> ControlFlow<bool, bool>,
    {
        let indexes = IndexSet::from_range(IndexRange::full(self.count()));
        self.all_indexes_passing_at(&indexes, options, predicate)
    }

    /// Positions of every element at `indexes` passing `predicate`.
    #[track_caller]
    fn all_indexes_passing_at<P>(
        &self,
        indexes: &IndexSet,
        options: EnumerationOptions,
        mut predicate: P,
    ) -> IndexSet
    where
        P: FnMut(&ObjectRef, usize) -> ControlFlow<bool, bool>,
    {
        let mut passing = IndexSet::new();
        self.enumerate_at(indexes, options, |element, index| {
            let (passed, flow) = split_verdict(predicate(element, index));
            if passed {
                passing.insert(index);
            }
            flow
        });
        passing
    }

    /// A stably sorted copy. The receiver is not modified.
    fn sorted_copy<C>(&self, comparator: C) -> Vec<ObjectRef>
    where
        C: FnMut(&ObjectRef, &ObjectRef) -> Ordering,
    {
        self.sorted_copy_with_options(SortOptions::empty(), comparator)
    }

    /// A stably sorted copy, honoring `options`.
    fn sorted_copy_with_options<C>(&self, options: SortOptions, comparator: C) -> Vec<ObjectRef>
    where
        C: FnMut(&ObjectRef, &ObjectRef) -> Ordering,
    {
        self.sorted_copy_in_range(IndexRange::full(self.count()), options, comparator)
    }

    /// A stably sorted copy of the elements in `range`.
    ///
    /// # Panics
    ///
    /// Panics if `range` does not fit the collection.
    #[track_caller]
    fn sorted_copy_in_range<C>(&self, range: IndexRange, options: SortOptions, comparator: C) -> Vec<ObjectRef>
    where
        C: FnMut(&ObjectRef, &ObjectRef) -> Ordering,
    {
        if options.contains(SortOptions::CONCURRENT) {
            tracing::trace!("concurrent sort requested, sorting sequentially");
        }
        let mut elements = self.subrange(range);
        elements.sort_by(comparator);
        elements
    }

    /// Binary search for `element` in a `range` already sorted by
    /// `comparator`.
    ///
    /// Without [`BinarySearchingOptions::INSERTION_INDEX`] the result is the
    /// position of a match (the first or last one when requested) or `None`.
    /// With it the result is always the position where `element` would be
    /// inserted to keep the range sorted: before the equal elements, or after
    /// them with [`BinarySearchingOptions::LAST_EQUAL`].
    ///
    /// # Panics
    ///
    /// Panics if `range` does not fit the collection or if both
    /// `FIRST_EQUAL` and `LAST_EQUAL` are requested.
    #[track_caller]
    fn binary_search<C>(
        &self,
        element: &ObjectRef,
        range: IndexRange,
        options: BinarySearchingOptions,
        mut comparator: C,
    ) -> Option<usize>
    where
        C: FnMut(&ObjectRef, &ObjectRef) -> Ordering,
    {
        range.check("binary_search", self.count());
        let last_equal = options.contains(BinarySearchingOptions::LAST_EQUAL);
        assert!(
            !(last_equal && options.contains(BinarySearchingOptions::FIRST_EQUAL)),
            "binary_search: FIRST_EQUAL and LAST_EQUAL are mutually exclusive"
        );

        let lower = partition_point(range.location, range.end(), |index| {
            comparator(&self.element_at(index), element) == Ordering::Less
        });
        let upper = partition_point(lower, range.end(), |index| {
            comparator(&self.element_at(index), element) != Ordering::Greater
        });

        if options.contains(BinarySearchingOptions::INSERTION_INDEX) {
            return Some(if last_equal { upper } else { lower });
        }
        if lower == upper {
            None
        } else if last_equal {
            Some(upper - 1)
        } else {
            Some(lower)
        }
    }

    /// Joins each element's description with `separator`.
    fn joined_description(&self, separator: &str) -> String {
        self.objects()
            .map(|element| element.describe())
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Per-element hash values, in order.
    fn sorted_hint(&self) -> Vec<u64> {
        self.objects().map(|element| element.hash_value()).collect()
    }

    /// Converts to a typed `Vec`, or `None` if any element is not a `T`.
    ///
    /// Never returns a partially converted vector.
    fn force_bridge<T: Any + Clone>(&self) -> Option<Vec<T>> {
        self.try_bridge().ok()
    }

    /// Converts to a typed `Vec`, reporting the first element that is not a
    /// `T`.
    fn try_bridge<T: Any + Clone>(&self) -> Result<Vec<T>, BridgeError> {
        let mut values = Vec::with_capacity(self.count());
        for (index, element) in self.objects().enumerate() {
            match element.as_any().downcast_ref::<T>() {
                Some(value) => values.push(value.clone()),
                None => {
                    let error = BridgeError {
                        index,
                        expected: std::any::type_name::<T>(),
                        found: element.type_name(),
                    };
                    tracing::debug!(%error, "typed bridge failed");
                    return Err(error);
                }
            }
        }
        Ok(values)
    }
}

/// Splits a predicate result into `(passed, flow)`.
const fn split_verdict(verdict: ControlFlow<bool, bool>) -> (bool, ControlFlow<()>) {
    match verdict {
        ControlFlow::Continue(passed) => (passed, ControlFlow::Continue(())),
        ControlFlow::Break(passed) => (passed, ControlFlow::Break(())),
    }
}

/// First position in `low..high` for which `predicate` is false, assuming
/// the predicate is true for a prefix of the range.
fn partition_point<P>(mut low: usize, mut high: usize, mut predicate: P) -> usize
where
    P: FnMut(usize) -> bool,
{
    while low < high {
        let middle = low + (high - low) / 2;
        if predicate(middle) {
            low = middle + 1;
        } else {
            high = middle;
        }
    }
    low
}

// =============================================================================
// Iterator
// =============================================================================

/// Iterator over the elements of an [`OrderedCollection`].
///
/// Created by [`OrderedCollection::objects`]. Supports iteration from both
/// ends.
pub struct Objects<'a, C: ?Sized> {
    collection: &'a C,
    front: usize,
    back: usize,
}

impl<'a, C: OrderedCollection + ?Sized> Objects<'a, C> {
    fn new(collection: &'a C) -> Self {
        Self {
            collection,
            front: 0,
            back: collection.count(),
        }
    }
}

impl<C: OrderedCollection + ?Sized> Iterator for Objects<'_, C> {
    type Item = ObjectRef;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let element = self.collection.element_at(self.front);
        self.front += 1;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<C: OrderedCollection + ?Sized> DoubleEndedIterator for Objects<'_, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.collection.element_at(self.back))
    }
}

impl<C: OrderedCollection + ?Sized> ExactSizeIterator for Objects<'_, C> {}

impl<C: OrderedCollection + ?Sized> FusedIterator for Objects<'_, C> {}
