//! Conversions between object collections and native Rust vectors.
//!
//! [`Bridgeable`] names the native counterpart of a type. Typed vectors
//! bridge into an [`ObjectArray`], and object collections bridge back out
//! to a snapshot `Vec<ObjectRef>`. Typed extraction in the other direction
//! goes through [`OrderedCollection::force_bridge`] and
//! [`OrderedCollection::try_bridge`], which never yield a partial vector.
//!
//! # Examples
//!
//! ```rust
//! use object_array::prelude::*;
//!
//! let native = vec![1, 2, 3];
//! let array = native.bridge();
//! assert_eq!(array.count(), 3);
//!
//! let handles = array.bridge();
//! assert_eq!(handles.len(), 3);
//! assert_eq!(array.force_bridge::<i32>(), Some(native));
//! ```

use crate::array::ObjectArray;
use crate::collection::OrderedCollection;
use crate::mutable_array::MutableObjectArray;
use crate::object::{Object, ObjectRef};

/// A type with a native counterpart on the other side of the bridge.
pub trait Bridgeable {
    /// The type produced by [`bridge`](Self::bridge).
    type Bridged;

    /// Converts to the counterpart type. The receiver is left untouched.
    fn bridge(&self) -> Self::Bridged;
}

impl<T: Object + Clone> Bridgeable for [T] {
    type Bridged = ObjectArray;

    fn bridge(&self) -> Self::Bridged {
        ObjectArray::from_values(self.iter().cloned())
    }
}

impl<T: Object + Clone> Bridgeable for Vec<T> {
    type Bridged = ObjectArray;

    fn bridge(&self) -> Self::Bridged {
        self.as_slice().bridge()
    }
}

impl Bridgeable for ObjectArray {
    type Bridged = Vec<ObjectRef>;

    fn bridge(&self) -> Self::Bridged {
        self.to_vec()
    }
}

impl Bridgeable for MutableObjectArray {
    type Bridged = Vec<ObjectRef>;

    fn bridge(&self) -> Self::Bridged {
        self.to_vec()
    }
}
