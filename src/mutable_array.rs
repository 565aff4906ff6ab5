//! The concrete mutable collection.
//!
//! [`MutableObjectArray`] wraps an [`ObjectArray`] and mutates its backing
//! vector in place. Bulk operations map onto `Vec` primitives (`splice`,
//! `drain`, `sort_by`) instead of the element-at-a-time defaults.
//!
//! # Examples
//!
//! ```rust
//! use object_array::prelude::*;
//!
//! let mut array = MutableObjectArray::new();
//! array.append(object(1));
//! array.append(object(3));
//! array.insert(object(2), 1);
//! assert_eq!(array.force_bridge::<i32>(), Some(vec![1, 2, 3]));
//!
//! array.remove_range(IndexRange::new(0, 2));
//! assert_eq!(array.force_bridge::<i32>(), Some(vec![3]));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::ops::{Index, IndexMut};

use crate::array::ObjectArray;
use crate::collection::OrderedCollection;
use crate::mutable_collection::MutableOrderedCollection;
use crate::object::{Object, ObjectRef};
use crate::options::SortOptions;
use crate::range::{IndexRange, check_index};

/// A growable, ordered collection of heterogeneous objects.
#[derive(Clone, Default)]
pub struct MutableObjectArray {
    storage: Vec<ObjectRef>,
}

impl MutableObjectArray {
    /// Creates an empty collection.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            storage: Vec::new(),
        }
    }

    /// Creates an empty collection with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: Vec::with_capacity(capacity),
        }
    }

    /// Creates a collection from a native slice, copying each element
    /// when `copy_elements` is set.
    #[must_use]
    pub fn from_native(elements: &[ObjectRef], copy_elements: bool) -> Self {
        Self::from(ObjectArray::from_native(elements, copy_elements).into_vec())
    }

    /// Wraps every typed value in a handle.
    pub fn from_values<T, I>(values: I) -> Self
    where
        T: Object,
        I: IntoIterator<Item = T>,
    {
        Self::from(ObjectArray::from_values(values).into_vec())
    }

    /// The elements as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[ObjectRef] {
        &self.storage
    }

    /// Iterates over borrowed handles.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, ObjectRef> {
        self.storage.iter()
    }

    /// An immutable snapshot of the current contents.
    #[must_use]
    pub fn copy(&self) -> ObjectArray {
        ObjectArray::from(self.storage.clone())
    }

    /// Converts into an immutable collection without copying.
    #[must_use]
    pub fn into_immutable(self) -> ObjectArray {
        ObjectArray::from(self.storage)
    }

    /// Number of elements the collection can hold without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }
}

impl OrderedCollection for MutableObjectArray {
    #[inline]
    fn count(&self) -> usize {
        self.storage.len()
    }

    #[track_caller]
    fn element_at(&self, index: usize) -> ObjectRef {
        check_index("element_at", index, self.storage.len());
        self.storage[index].clone()
    }

    fn get(&self, index: usize) -> Option<ObjectRef> {
        self.storage.get(index).cloned()
    }

    fn to_vec(&self) -> Vec<ObjectRef> {
        self.storage.clone()
    }

    #[track_caller]
    fn copy_into(&self, range: IndexRange, target: &mut Vec<ObjectRef>) {
        range.check("copy_into", self.storage.len());
        target.extend_from_slice(&self.storage[range.to_range()]);
    }
}

impl MutableOrderedCollection for MutableObjectArray {
    #[track_caller]
    fn insert(&mut self, element: ObjectRef, index: usize) {
        let count = self.storage.len();
        assert!(
            index <= count,
            "insert: index {index} out of bounds for count {count}"
        );
        self.storage.insert(index, element);
    }

    #[track_caller]
    fn remove_at(&mut self, index: usize) -> ObjectRef {
        check_index("remove_at", index, self.storage.len());
        self.storage.remove(index)
    }

    #[track_caller]
    fn replace_at(&mut self, index: usize, element: ObjectRef) -> ObjectRef {
        check_index("replace_at", index, self.storage.len());
        std::mem::replace(&mut self.storage[index], element)
    }

    #[inline]
    fn append(&mut self, element: ObjectRef) {
        self.storage.push(element);
    }

    fn remove_last(&mut self) -> Option<ObjectRef> {
        self.storage.pop()
    }

    fn append_all(&mut self, others: &[ObjectRef]) {
        self.storage.extend_from_slice(others);
    }

    #[track_caller]
    fn swap(&mut self, first: usize, second: usize) {
        let count = self.storage.len();
        check_index("swap", first, count);
        check_index("swap", second, count);
        self.storage.swap(first, second);
    }

    fn remove_all(&mut self) {
        self.storage.clear();
    }

    #[track_caller]
    fn remove_range(&mut self, range: IndexRange) {
        range.check("remove_range", self.storage.len());
        self.storage.drain(range.to_range());
    }

    #[track_caller]
    fn replace_range(&mut self, range: IndexRange, replacement: &[ObjectRef]) {
        range.check("replace_range", self.storage.len());
        self.storage
            .splice(range.to_range(), replacement.iter().cloned());
    }

    fn replace_all(&mut self, replacement: &[ObjectRef]) {
        self.storage = replacement.to_vec();
    }

    fn sort_in_place_with_options<C>(&mut self, options: SortOptions, comparator: C)
    where
        C: FnMut(&ObjectRef, &ObjectRef) -> Ordering,
    {
        if options.contains(SortOptions::CONCURRENT) {
            tracing::trace!("concurrent sort requested, sorting sequentially");
        }
        self.storage.sort_by(comparator);
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl Index<usize> for MutableObjectArray {
    type Output = ObjectRef;

    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        check_index("index", index, self.storage.len());
        &self.storage[index]
    }
}

impl IndexMut<usize> for MutableObjectArray {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        check_index("index_mut", index, self.storage.len());
        &mut self.storage[index]
    }
}

impl From<Vec<ObjectRef>> for MutableObjectArray {
    fn from(storage: Vec<ObjectRef>) -> Self {
        Self { storage }
    }
}

impl From<ObjectArray> for MutableObjectArray {
    fn from(array: ObjectArray) -> Self {
        Self::from(array.into_vec())
    }
}

impl From<MutableObjectArray> for Vec<ObjectRef> {
    fn from(array: MutableObjectArray) -> Self {
        array.storage
    }
}

impl FromIterator<ObjectRef> for MutableObjectArray {
    fn from_iter<I: IntoIterator<Item = ObjectRef>>(iter: I) -> Self {
        Self {
            storage: iter.into_iter().collect(),
        }
    }
}

impl Extend<ObjectRef> for MutableObjectArray {
    fn extend<I: IntoIterator<Item = ObjectRef>>(&mut self, iter: I) {
        self.storage.extend(iter);
    }
}

impl IntoIterator for MutableObjectArray {
    type Item = ObjectRef;
    type IntoIter = std::vec::IntoIter<ObjectRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.storage.into_iter()
    }
}

impl<'a> IntoIterator for &'a MutableObjectArray {
    type Item = &'a ObjectRef;
    type IntoIter = std::slice::Iter<'a, ObjectRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.storage.iter()
    }
}

impl PartialEq for MutableObjectArray {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || self.is_equal_to(&other.storage)
    }
}

impl Eq for MutableObjectArray {}

impl PartialEq<ObjectArray> for MutableObjectArray {
    fn eq(&self, other: &ObjectArray) -> bool {
        self.is_equal_to(other.as_slice())
    }
}

impl Hash for MutableObjectArray {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.storage.len().hash(state);
        for element in &self.storage {
            element.hash_value().hash(state);
        }
    }
}

impl fmt::Debug for MutableObjectArray {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.storage.iter()).finish()
    }
}

impl fmt::Display for MutableObjectArray {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[{}]", self.joined_description(", "))
    }
}

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(MutableObjectArray: Send, Sync);

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(MutableObjectArray: Send, Sync);
