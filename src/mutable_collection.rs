//! The in-place mutation contract.
//!
//! [`MutableOrderedCollection`] extends [`OrderedCollection`] with three
//! required primitives: [`insert`], [`remove_at`] and [`replace_at`]. Bulk
//! operations are provided on top of them and process positions from the end
//! toward the start wherever removals would otherwise shift pending indexes.
//!
//! [`insert`]: MutableOrderedCollection::insert
//! [`remove_at`]: MutableOrderedCollection::remove_at
//! [`replace_at`]: MutableOrderedCollection::replace_at

use std::cmp::Ordering;
use std::ops::ControlFlow;

use crate::collection::OrderedCollection;
use crate::index_set::IndexSet;
use crate::membership::ObjectSet;
use crate::object::ObjectRef;
use crate::options::{EnumerationOptions, SortOptions};
use crate::range::{IndexRange, check_index};

/// An [`OrderedCollection`] that can be modified in place.
pub trait MutableOrderedCollection: OrderedCollection {
    /// Inserts `element` so that it ends up at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > self.count()`.
    fn insert(&mut self, element: ObjectRef, index: usize);

    /// Removes and returns the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.count()`.
    fn remove_at(&mut self, index: usize) -> ObjectRef;

    /// Replaces the element at `index`, returning the previous one.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.count()`.
    fn replace_at(&mut self, index: usize, element: ObjectRef) -> ObjectRef;

    /// Appends `element` at the end.
    fn append(&mut self, element: ObjectRef) {
        let count = self.count();
        self.insert(element, count);
    }

    /// Removes the last element. Does nothing on an empty collection.
    fn remove_last(&mut self) -> Option<ObjectRef> {
        let last = self.count().checked_sub(1)?;
        Some(self.remove_at(last))
    }

    /// Appends every element of `others`.
    fn append_all(&mut self, others: &[ObjectRef]) {
        for element in others {
            self.append(element.clone());
        }
    }

    /// Exchanges the elements at `first` and `second`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[track_caller]
    fn swap(&mut self, first: usize, second: usize) {
        let count = self.count();
        check_index("swap", first, count);
        check_index("swap", second, count);
        if first == second {
            return;
        }
        let element = self.element_at(first);
        let displaced = self.replace_at(second, element);
        self.replace_at(first, displaced);
    }

    /// Removes every element.
    fn remove_all(&mut self) {
        while self.remove_last().is_some() {}
    }

    /// Removes the first element identical or equal to `element`.
    fn remove_first_matching(&mut self, element: &ObjectRef) -> Option<ObjectRef> {
        let index = self.index_of(element)?;
        Some(self.remove_at(index))
    }

    /// Removes the first element in `range` identical or equal to `element`.
    #[track_caller]
    fn remove_first_matching_in_range(&mut self, element: &ObjectRef, range: IndexRange) -> Option<ObjectRef> {
        let index = self.index_of_in_range(element, range)?;
        Some(self.remove_at(index))
    }

    /// Removes the first element that is the same allocation as `element`.
    fn remove_first_identical(&mut self, element: &ObjectRef) -> Option<ObjectRef> {
        let index = self.index_of_identical(element)?;
        Some(self.remove_at(index))
    }

    /// Removes the first element in `range` that is the same allocation as
    /// `element`.
    #[track_caller]
    fn remove_first_identical_in_range(&mut self, element: &ObjectRef, range: IndexRange) -> Option<ObjectRef> {
        let index = self.index_of_identical_in_range(element, range)?;
        Some(self.remove_at(index))
    }

    /// Removes every element that occurs in `others`, returning how many were
    /// removed.
    fn remove_all_in(&mut self, others: &[ObjectRef]) -> usize {
        let members = ObjectSet::from_objects(others);
        let mut removed = 0;
        for index in (0..self.count()).rev() {
            if members.contains(&self.element_at(index)) {
                self.remove_at(index);
                removed += 1;
            }
        }
        tracing::trace!(removed, "removed elements found in other sequence");
        removed
    }

    /// Removes the elements of `range`.
    ///
    /// # Panics
    ///
    /// Panics if `range` does not fit the collection.
    #[track_caller]
    fn remove_range(&mut self, range: IndexRange) {
        range.check("remove_range", self.count());
        for index in range.to_range().rev() {
            self.remove_at(index);
        }
    }

    /// Removes the elements at `indexes`, highest run first.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of range. Nothing is removed in that case.
    #[track_caller]
    fn remove_all_at(&mut self, indexes: &IndexSet) {
        if let Some(last) = indexes.last() {
            check_index("remove_all_at", last, self.count());
        }
        let _ = indexes.enumerate_ranges(EnumerationOptions::REVERSE, |range| {
            self.remove_range(range);
            ControlFlow::Continue(())
        });
    }

    /// Replaces the elements of `range` with `replacement`.
    ///
    /// The range is spliced: positions covered by `replacement` are
    /// overwritten, extra replacement elements are inserted after them and
    /// leftover range positions are removed.
    ///
    /// # Panics
    ///
    /// Panics if `range` does not fit the collection.
    #[track_caller]
    fn replace_range(&mut self, range: IndexRange, replacement: &[ObjectRef]) {
        range.check("replace_range", self.count());
        let overwritten = range.length.min(replacement.len());
        for (offset, element) in replacement[..overwritten].iter().enumerate() {
            self.replace_at(range.location + offset, element.clone());
        }
        for (offset, element) in replacement.iter().enumerate().skip(overwritten) {
            self.insert(element.clone(), range.location + offset);
        }
        if overwritten < range.length {
            self.remove_range(IndexRange::new(
                range.location + overwritten,
                range.length - overwritten,
            ));
        }
    }

    /// Replaces the elements of `range` with the elements of `others` inside
    /// `others_range`.
    ///
    /// # Panics
    ///
    /// Panics if either range is out of bounds.
    #[track_caller]
    fn replace_range_from(&mut self, range: IndexRange, others: &[ObjectRef], others_range: IndexRange) {
        others_range.check("replace_range_from", others.len());
        self.replace_range(range, &others[others_range.to_range()]);
    }

    /// Replaces the entire contents with `replacement`.
    fn replace_all(&mut self, replacement: &[ObjectRef]) {
        let count = self.count();
        self.replace_range(IndexRange::full(count), replacement);
    }

    /// Inserts `elements[n]` at the `n`-th position of `indexes`, walking the
    /// positions in ascending order.
    ///
    /// # Panics
    ///
    /// Panics if the counts differ or a position is beyond the end at the
    /// time of its insertion.
    #[track_caller]
    fn insert_all(&mut self, elements: &[ObjectRef], indexes: &IndexSet) {
        let expected = indexes.count();
        assert!(
            elements.len() == expected,
            "insert_all: {} elements for {expected} indexes",
            elements.len()
        );
        for (element, index) in elements.iter().zip(indexes.iter()) {
            self.insert(element.clone(), index);
        }
        tracing::trace!(inserted = expected, "inserted elements at index set");
    }

    /// Replaces each run of `indexes` with the matching slice of
    /// `replacement`.
    ///
    /// # Panics
    ///
    /// Panics if the counts differ or any index is out of range.
    #[track_caller]
    fn replace_all_at(&mut self, indexes: &IndexSet, replacement: &[ObjectRef]) {
        let expected = indexes.count();
        assert!(
            replacement.len() == expected,
            "replace_all_at: {} elements for {expected} indexes",
            replacement.len()
        );
        if let Some(last) = indexes.last() {
            check_index("replace_all_at", last, self.count());
        }
        let mut consumed = 0;
        for range in indexes.ranges() {
            self.replace_range(range, &replacement[consumed..consumed + range.length]);
            consumed += range.length;
        }
    }

    /// Stably sorts the collection in place.
    fn sort_in_place<C>(&mut self, comparator: C)
    where
        C: FnMut(&ObjectRef, &ObjectRef) -> Ordering,
    {
        self.sort_in_place_with_options(SortOptions::empty(), comparator);
    }

    /// Stably sorts the collection in place, honoring `options`.
    fn sort_in_place_with_options<C>(&mut self, options: SortOptions, comparator: C)
    where
        C: FnMut(&ObjectRef, &ObjectRef) -> Ordering,
    {
        let sorted = self.sorted_copy_with_options(options, comparator);
        for (index, element) in sorted.into_iter().enumerate() {
            self.replace_at(index, element);
        }
    }
}
