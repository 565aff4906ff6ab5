//! The concrete read-only collection.
//!
//! [`ObjectArray`] owns a `Vec<ObjectRef>` and implements
//! [`OrderedCollection`] directly on the slice instead of going through
//! `element_at` for every position.
//!
//! # Examples
//!
//! ```rust
//! use object_array::prelude::*;
//!
//! let array = ObjectArray::from_objects([object(1), object("two".to_string()), object('c')]);
//! assert_eq!(array.count(), 3);
//! assert_eq!(array.joined_description(" | "), "1 | two | c");
//!
//! // Conversion back to a native vector is a snapshot
//! let snapshot = array.to_vec();
//! assert_eq!(snapshot.len(), 3);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::ops::Index;

use crate::collection::OrderedCollection;
use crate::mutable_array::MutableObjectArray;
use crate::membership::ObjectSet;
use crate::object::{Object, ObjectRef, is_equal, is_identical, object};
use crate::range::{IndexRange, check_index};

/// An immutable, ordered collection of heterogeneous objects.
///
/// # Time Complexity
///
/// | Operation              | Complexity |
/// |------------------------|------------|
/// | `count`                | O(1)       |
/// | `element_at`           | O(1)       |
/// | `contains` / `index_of`| O(N)       |
/// | `first_common_element` | O(N + M)   |
/// | `subrange`             | O(K)       |
/// | `sorted_copy`          | O(N log N) |
/// | `binary_search`        | O(log N)   |
#[derive(Clone, Default)]
pub struct ObjectArray {
    storage: Vec<ObjectRef>,
}

impl ObjectArray {
    /// Creates an empty collection.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            storage: Vec::new(),
        }
    }

    /// Creates a collection holding a single element.
    #[must_use]
    pub fn single(element: ObjectRef) -> Self {
        Self {
            storage: vec![element],
        }
    }

    /// Creates a collection from object handles, keeping their order.
    pub fn from_objects<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = ObjectRef>,
    {
        Self {
            storage: elements.into_iter().collect(),
        }
    }

    /// Creates a collection from a native slice.
    ///
    /// With `copy_elements` every element is duplicated through
    /// [`Object::copy_object`]; otherwise the handles are shared with the
    /// source. Either way the collection keeps its own order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use object_array::prelude::*;
    /// use object_array::object::is_identical;
    ///
    /// let source = vec![object(1), object(2)];
    /// let shared = ObjectArray::from_native(&source, false);
    /// let copied = ObjectArray::from_native(&source, true);
    ///
    /// assert!(is_identical(&shared.element_at(0), &source[0]));
    /// assert!(!is_identical(&copied.element_at(0), &source[0]));
    /// assert_eq!(copied, shared);
    /// ```
    #[must_use]
    pub fn from_native(elements: &[ObjectRef], copy_elements: bool) -> Self {
        let storage = if copy_elements {
            elements.iter().map(|element| element.copy_object()).collect()
        } else {
            elements.to_vec()
        };
        Self { storage }
    }

    /// Wraps every typed value in a handle.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use object_array::prelude::*;
    ///
    /// let array = ObjectArray::from_values(vec!["a".to_string(), "b".to_string()]);
    /// assert_eq!(array.force_bridge::<String>(), Some(vec!["a".to_string(), "b".to_string()]));
    /// ```
    pub fn from_values<T, I>(values: I) -> Self
    where
        T: Object,
        I: IntoIterator<Item = T>,
    {
        Self::from_objects(values.into_iter().map(object))
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

    /// A mutable collection starting with the same elements.
    #[must_use]
    pub fn mutable_copy(&self) -> MutableObjectArray {
        MutableObjectArray::from(self.storage.clone())
    }

    /// Consumes the collection and returns its backing vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<ObjectRef> {
        self.storage
    }
}

impl OrderedCollection for ObjectArray {
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

    #[track_caller]
    fn index_of_in_range(&self, element: &ObjectRef, range: IndexRange) -> Option<usize> {
        range.check("index_of_in_range", self.storage.len());
        self.storage[range.to_range()]
            .iter()
            .position(|stored| is_equal(stored, element))
            .map(|offset| range.location + offset)
    }

    #[track_caller]
    fn index_of_identical_in_range(&self, element: &ObjectRef, range: IndexRange) -> Option<usize> {
        range.check("index_of_identical_in_range", self.storage.len());
        self.storage[range.to_range()]
            .iter()
            .position(|stored| is_identical(stored, element))
            .map(|offset| range.location + offset)
    }

    fn first_common_element(&self, others: &[ObjectRef]) -> Option<ObjectRef> {
        let members = ObjectSet::from_objects(others);
        self.storage
            .iter()
            .find(|element| members.contains(element))
            .cloned()
    }

    fn is_equal_to(&self, others: &[ObjectRef]) -> bool {
        self.storage.len() == others.len()
            && self
                .storage
                .iter()
                .zip(others)
                .all(|(element, other)| is_equal(element, other))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl Index<usize> for ObjectArray {
    type Output = ObjectRef;

    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        check_index("index", index, self.storage.len());
        &self.storage[index]
    }
}

impl From<Vec<ObjectRef>> for ObjectArray {
    fn from(storage: Vec<ObjectRef>) -> Self {
        Self { storage }
    }
}

impl From<ObjectArray> for Vec<ObjectRef> {
    fn from(array: ObjectArray) -> Self {
        array.storage
    }
}

impl From<MutableObjectArray> for ObjectArray {
    fn from(array: MutableObjectArray) -> Self {
        array.into_immutable()
    }
}

impl FromIterator<ObjectRef> for ObjectArray {
    fn from_iter<I: IntoIterator<Item = ObjectRef>>(iter: I) -> Self {
        Self::from_objects(iter)
    }
}

impl IntoIterator for ObjectArray {
    type Item = ObjectRef;
    type IntoIter = std::vec::IntoIter<ObjectRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.storage.into_iter()
    }
}

impl<'a> IntoIterator for &'a ObjectArray {
    type Item = &'a ObjectRef;
    type IntoIter = std::slice::Iter<'a, ObjectRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.storage.iter()
    }
}

impl PartialEq for ObjectArray {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || self.is_equal_to(&other.storage)
    }
}

impl Eq for ObjectArray {}

impl PartialEq<MutableObjectArray> for ObjectArray {
    fn eq(&self, other: &MutableObjectArray) -> bool {
        self.is_equal_to(other.as_slice())
    }
}

impl PartialEq<[ObjectRef]> for ObjectArray {
    fn eq(&self, other: &[ObjectRef]) -> bool {
        self.is_equal_to(other)
    }
}

impl Hash for ObjectArray {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.storage.len().hash(state);
        for element in &self.storage {
            element.hash_value().hash(state);
        }
    }
}

impl fmt::Debug for ObjectArray {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.storage.iter()).finish()
    }
}

impl fmt::Display for ObjectArray {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[{}]", self.joined_description(", "))
    }
}

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(ObjectArray: Send, Sync);

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(ObjectArray: Send, Sync);
