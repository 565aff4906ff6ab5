//! The element contract shared by every collection in this crate.
//!
//! Collections store [`ObjectRef`] handles: reference-counted pointers to
//! values implementing [`Object`]. The trait captures exactly what a
//! collection needs from its elements:
//!
//! - value equality across dynamic types ([`Object::equals`])
//! - a hash consistent with that equality ([`Object::hash_value`])
//! - a human readable description ([`Object::describe`])
//! - an independent copy ([`Object::copy_object`])
//! - dynamic type access for bridging ([`Object::as_any`])
//!
//! Any `Clone + PartialEq + Hash + Display + Debug + 'static` type implements
//! [`Object`] through a blanket implementation, so most callers never
//! implement it by hand.
//!
//! # Examples
//!
//! ```rust
//! use object_array::object::{object, Object};
//!
//! let first = object(42);
//! let second = object(42);
//! let text = object("42".to_string());
//!
//! assert!(first.equals(&*second));
//! assert!(!first.equals(&*text));
//! assert_eq!(first.describe(), "42");
//! ```

use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub type ReferenceCounter<T> = std::sync::Arc<T>;

/// Reference-counted smart pointer type.
#[cfg(not(feature = "arc"))]
pub type ReferenceCounter<T> = std::rc::Rc<T>;

/// A shared handle to a heterogeneous element.
pub type ObjectRef = ReferenceCounter<dyn Object>;

/// Thread-safety bound applied to every [`Object`].
///
/// Empty unless the `arc` feature is enabled, in which case elements must be
/// `Send + Sync` so that `Arc<dyn Object>` can cross threads.
#[cfg(feature = "arc")]
pub trait MaybeSendSync: Send + Sync {}

#[cfg(feature = "arc")]
impl<T: Send + Sync + ?Sized> MaybeSendSync for T {}

/// Thread-safety bound applied to every [`Object`].
#[cfg(not(feature = "arc"))]
pub trait MaybeSendSync {}

#[cfg(not(feature = "arc"))]
impl<T: ?Sized> MaybeSendSync for T {}

// =============================================================================
// Hash computation
// =============================================================================

#[cfg(feature = "fxhash")]
pub(crate) type ObjectHasher = rustc_hash::FxHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub(crate) type ObjectHasher = ahash::AHasher;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub(crate) type ObjectHasher = std::collections::hash_map::DefaultHasher;

/// Computes the hash of a value with the hasher selected by feature flags.
///
/// `fxhash` selects `rustc_hash::FxHasher`, `ahash` selects
/// `ahash::AHasher`, otherwise `DefaultHasher` is used. The result is
/// deterministic within a process.
pub fn compute_hash<K: Hash + ?Sized>(key: &K) -> u64 {
    let mut hasher = ObjectHasher::default();
    key.hash(&mut hasher);
    hasher.finish()
}

// =============================================================================
// Object Definition
// =============================================================================

/// Capabilities a value needs to live inside an ordered collection.
///
/// Implementations must keep `equals` and `hash_value` consistent: two
/// objects that are equal must report the same hash.
pub trait Object: Any + fmt::Debug + MaybeSendSync {
    /// Value equality against an object of any dynamic type.
    fn equals(&self, other: &dyn Object) -> bool;

    /// Hash consistent with [`Object::equals`].
    fn hash_value(&self) -> u64;

    /// External string representation, used by `joined_description`.
    fn describe(&self) -> String;

    /// Returns an independent copy wrapped in a new handle.
    fn copy_object(&self) -> ObjectRef;

    /// Upcast used for downcasting during bridging.
    fn as_any(&self) -> &dyn Any;

    /// Name of the concrete type, for diagnostics.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl<T> Object for T
where
    T: Any + Clone + PartialEq + Hash + fmt::Display + fmt::Debug + MaybeSendSync,
{
    fn equals(&self, other: &dyn Object) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }

    fn hash_value(&self) -> u64 {
        compute_hash(self)
    }

    fn describe(&self) -> String {
        self.to_string()
    }

    fn copy_object(&self) -> ObjectRef {
        ReferenceCounter::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Wraps a value in a fresh [`ObjectRef`].
///
/// # Examples
///
/// ```rust
/// use object_array::object::object;
///
/// let element = object("hello".to_string());
/// assert_eq!(element.describe(), "hello");
/// ```
#[inline]
pub fn object<T: Object>(value: T) -> ObjectRef {
    ReferenceCounter::new(value)
}

/// Returns `true` when both handles point at the same allocation.
#[inline]
pub fn is_identical(left: &ObjectRef, right: &ObjectRef) -> bool {
    std::ptr::addr_eq(ReferenceCounter::as_ptr(left), ReferenceCounter::as_ptr(right))
}

/// Identity or value equality, the comparison used by searches.
#[inline]
pub fn is_equal(left: &ObjectRef, right: &ObjectRef) -> bool {
    is_identical(left, right) || left.equals(&**right)
}

/// Borrows the element as `T` when its dynamic type matches.
#[inline]
pub fn downcast_ref<T: Any>(element: &ObjectRef) -> Option<&T> {
    element.as_any().downcast_ref::<T>()
}
