//! Hash-bucketed membership tests over objects.
//!
//! Buckets are keyed by [`Object::hash_value`](crate::object::Object::hash_value)
//! and confirmed with identity-or-equality, so objects of different dynamic
//! types may share a bucket without being confused. The bucket map uses the
//! same feature-selected hasher as [`compute_hash`](crate::object::compute_hash).

use std::collections::HashMap;
use std::hash::BuildHasherDefault;

use smallvec::SmallVec;

use crate::object::{ObjectHasher, ObjectRef, is_equal};

/// A set of objects supporting membership queries.
pub(crate) struct ObjectSet {
    buckets: HashMap<u64, SmallVec<[ObjectRef; 1]>, BuildHasherDefault<ObjectHasher>>,
}

impl ObjectSet {
    /// Builds a set from a slice of objects.
    pub(crate) fn from_objects(objects: &[ObjectRef]) -> Self {
        let mut buckets: HashMap<u64, SmallVec<[ObjectRef; 1]>, _> =
            HashMap::with_capacity_and_hasher(objects.len(), BuildHasherDefault::default());
        for element in objects {
            let bucket = buckets.entry(element.hash_value()).or_default();
            if !bucket.iter().any(|existing| is_equal(existing, element)) {
                bucket.push(element.clone());
            }
        }
        Self { buckets }
    }

    /// Returns `true` if an equal object is in the set.
    pub(crate) fn contains(&self, element: &ObjectRef) -> bool {
        self.buckets
            .get(&element.hash_value())
            .is_some_and(|bucket| bucket.iter().any(|existing| is_equal(element, existing)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::object;
    use rstest::rstest;

    #[rstest]
    fn test_contains_equal_object() {
        let set = ObjectSet::from_objects(&[object(1_i32), object("a".to_string())]);
        assert!(set.contains(&object(1_i32)));
        assert!(set.contains(&object("a".to_string())));
    }

    #[rstest]
    fn test_does_not_confuse_types() {
        let set = ObjectSet::from_objects(&[object(1_i32)]);
        assert!(!set.contains(&object(1_i64)));
        assert!(!set.contains(&object(2_i32)));
    }

    #[rstest]
    fn test_empty_set() {
        let set = ObjectSet::from_objects(&[]);
        assert!(!set.contains(&object(0_u8)));
    }

    #[rstest]
    fn test_many_distinct_and_repeated_objects() {
        let objects: Vec<_> = (0..200_i32).chain(0..200).map(object).collect();
        let set = ObjectSet::from_objects(&objects);
        assert!((0..200_i32).all(|value| set.contains(&object(value))));
        assert!(!set.contains(&object(200_i32)));
        assert!(!set.contains(&object(-1_i32)));
    }
}
