//! Property-based tests for the ordered collection laws.
//!
//! Each law is checked against a plain `Vec<i32>` model.

use object_array::prelude::*;
use proptest::prelude::*;
use std::ops::ControlFlow;

fn numbers(values: &[i32]) -> MutableObjectArray {
    MutableObjectArray::from_values(values.iter().copied())
}

fn model(array: &impl OrderedCollection) -> Vec<i32> {
    array.force_bridge::<i32>().unwrap_or_default()
}

// =============================================================================
// Mutation Laws
// =============================================================================

proptest! {
    /// Insert-Get Law: an inserted element is found at its index and the
    /// count grows by one.
    #[test]
    fn prop_insert_get_law(
        values in prop::collection::vec(any::<i32>(), 0..40),
        element: i32,
        seed: usize
    ) {
        let mut array = numbers(&values);
        let index = seed % (values.len() + 1);
        array.insert(object(element), index);

        let mut expected = values.clone();
        expected.insert(index, element);
        prop_assert_eq!(array.count(), values.len() + 1);
        prop_assert_eq!(model(&array), expected);
    }

    /// Remove-Shift Law: removing an element shifts the tail down by one.
    #[test]
    fn prop_remove_at_shift_law(
        values in prop::collection::vec(any::<i32>(), 1..40),
        seed: usize
    ) {
        let mut array = numbers(&values);
        let index = seed % values.len();
        array.remove_at(index);

        let remaining = model(&array);
        prop_assert_eq!(remaining.len(), values.len() - 1);
        prop_assert_eq!(&remaining[..index], &values[..index]);
        prop_assert_eq!(&remaining[index..], &values[index + 1..]);
    }

    /// Replace-Range Law: splicing matches `Vec::splice`.
    #[test]
    fn prop_replace_range_matches_splice(
        values in prop::collection::vec(any::<i32>(), 0..30),
        replacement in prop::collection::vec(any::<i32>(), 0..10),
        start_seed: usize,
        length_seed: usize
    ) {
        let location = start_seed % (values.len() + 1);
        let length = length_seed % (values.len() - location + 1);
        let mut array = numbers(&values);
        array.replace_range(IndexRange::new(location, length), numbers(&replacement).as_slice());

        let mut expected = values.clone();
        expected.splice(location..location + length, replacement.iter().copied());
        prop_assert_eq!(model(&array), expected);
    }

    /// Remove-All-In Law: the result keeps exactly the elements absent from
    /// the other sequence, in order.
    #[test]
    fn prop_remove_all_in_law(
        values in prop::collection::vec(0..10_i32, 0..40),
        removed in prop::collection::vec(0..10_i32, 0..5)
    ) {
        let mut array = numbers(&values);
        let count = array.remove_all_in(numbers(&removed).as_slice());

        let expected: Vec<i32> = values.iter().copied().filter(|value| !removed.contains(value)).collect();
        prop_assert_eq!(count, values.len() - expected.len());
        prop_assert_eq!(model(&array), expected);
    }

    /// Remove-All-At Law: removing an index set keeps the other positions.
    #[test]
    fn prop_remove_all_at_law(
        values in prop::collection::vec(any::<i32>(), 1..40),
        picks in prop::collection::vec(any::<usize>(), 0..10)
    ) {
        let indexes: IndexSet = picks.iter().map(|pick| pick % values.len()).collect();
        let mut array = numbers(&values);
        array.remove_all_at(&indexes);

        let expected: Vec<i32> = values
            .iter()
            .enumerate()
            .filter(|(index, _)| !indexes.contains(*index))
            .map(|(_, value)| *value)
            .collect();
        prop_assert_eq!(model(&array), expected);
    }
}

// =============================================================================
// Query Laws
// =============================================================================

proptest! {
    /// Equality Law: reflexive, symmetric and length sensitive.
    #[test]
    fn prop_equality_law(values in prop::collection::vec(any::<i32>(), 0..30)) {
        let left = ObjectArray::from_values(values.iter().copied());
        let right = ObjectArray::from_values(values.iter().copied());

        prop_assert!(left.is_equal_to(left.as_slice()));
        prop_assert!(left.is_equal_to(right.as_slice()));
        prop_assert!(right.is_equal_to(left.as_slice()));
        let longer = left.adding(object(0));
        prop_assert!(!left.is_equal_to(&longer));
    }

    /// Sort Law: `sorted_copy` matches a stable sort and leaves the receiver
    /// untouched.
    #[test]
    fn prop_sorted_copy_law(values in prop::collection::vec(any::<i32>(), 0..40)) {
        let array = ObjectArray::from_values(values.iter().copied());
        let sorted = array.sorted_copy(|left, right| {
            left.as_any().downcast_ref::<i32>().cmp(&right.as_any().downcast_ref::<i32>())
        });

        let mut expected = values.clone();
        expected.sort_unstable();
        prop_assert_eq!(model(&ObjectArray::from_objects(sorted)), expected);
        prop_assert_eq!(model(&array), values);
    }

    /// Binary Search Law: the insertion index agrees with
    /// `slice::partition_point`.
    #[test]
    fn prop_binary_search_insertion_law(
        unsorted in prop::collection::vec(-50..50_i32, 0..40),
        target in -60..60_i32
    ) {
        let mut values = unsorted;
        values.sort_unstable();
        let array = ObjectArray::from_values(values.iter().copied());
        let compare = |left: &ObjectRef, right: &ObjectRef| {
            left.as_any().downcast_ref::<i32>().cmp(&right.as_any().downcast_ref::<i32>())
        };
        let range = IndexRange::full(values.len());

        let lower = array.binary_search(&object(target), range, BinarySearchingOptions::INSERTION_INDEX, compare);
        let upper = array.binary_search(
            &object(target),
            range,
            BinarySearchingOptions::INSERTION_INDEX | BinarySearchingOptions::LAST_EQUAL,
            compare,
        );
        prop_assert_eq!(lower, Some(values.partition_point(|value| *value < target)));
        prop_assert_eq!(upper, Some(values.partition_point(|value| *value <= target)));

        let found = array.binary_search(&object(target), range, BinarySearchingOptions::empty(), compare);
        prop_assert_eq!(found.is_some(), values.contains(&target));
    }

    /// Subrange Law: a subrange is the matching slice of the model.
    #[test]
    fn prop_subrange_law(
        values in prop::collection::vec(any::<i32>(), 0..40),
        start_seed: usize,
        length_seed: usize
    ) {
        let location = start_seed % (values.len() + 1);
        let length = length_seed % (values.len() - location + 1);
        let array = ObjectArray::from_values(values.iter().copied());
        let window = ObjectArray::from_objects(array.subrange(IndexRange::new(location, length)));
        prop_assert_eq!(model(&window), values[location..location + length].to_vec());
    }

    /// Enumeration Law: breaking at the n-th visit visits exactly n elements.
    #[test]
    fn prop_enumerate_stop_law(size in 1..200_usize, stop_seed: usize) {
        let stop = stop_seed % size + 1;
        let array = ObjectArray::from_values(0..size);
        let mut visited = 0;
        array.enumerate(|_, _| {
            visited += 1;
            if visited == stop { ControlFlow::Break(()) } else { ControlFlow::Continue(()) }
        });
        prop_assert_eq!(visited, stop);
    }

    /// Bridge Law: a single foreign element makes the whole bridge fail.
    #[test]
    fn prop_force_bridge_all_or_nothing(
        values in prop::collection::vec(any::<i32>(), 1..30),
        seed: usize
    ) {
        let mut elements: Vec<ObjectRef> = values.iter().copied().map(object).collect();
        prop_assert_eq!(ObjectArray::from_objects(elements.clone()).force_bridge::<i32>(), Some(values.clone()));

        let position = seed % values.len();
        elements[position] = object(i64::from(values[position]));
        prop_assert_eq!(ObjectArray::from_objects(elements).force_bridge::<i32>(), None);
    }
}
