//! # object-array
//!
//! Ordered, indexable collections of heterogeneous objects, with a bridge to
//! native Rust vectors.
//!
//! ## Overview
//!
//! - **Elements**: any `Clone + PartialEq + Hash + Display + Debug` value
//!   becomes an [`Object`](object::Object) behind a shared [`ObjectRef`]
//!   handle.
//! - **Read-only contract**: [`OrderedCollection`] needs only `count` and
//!   `element_at`; search, enumeration, sorting, binary search and
//!   extraction are provided on top.
//! - **Mutation contract**: [`MutableOrderedCollection`] adds `insert`,
//!   `remove_at` and `replace_at`, plus bulk operations over ranges and
//!   [`IndexSet`]s.
//! - **Concrete collections**: [`ObjectArray`] and [`MutableObjectArray`].
//! - **Bridging**: typed vectors convert in and out through [`Bridgeable`],
//!   `force_bridge` and `try_bridge`.
//!
//! ## Feature Flags
//!
//! - `arc`: use `Arc` handles and require `Send + Sync` elements
//! - `fxhash`: hash elements with `rustc-hash`
//! - `ahash`: hash elements with `ahash`
//! - `serde`: archive collections as typed sequences and read or write JSON files
//! - `full`: Enable all optional functionality
//!
//! ## Example
//!
//! ```rust
//! use object_array::prelude::*;
//!
//! let mut array = MutableObjectArray::new();
//! array.append(object(3));
//! array.append(object(1));
//! array.append(object(2));
//!
//! array.sort_in_place(|left, right| left.describe().cmp(&right.describe()));
//! assert_eq!(array.force_bridge::<i32>(), Some(vec![1, 2, 3]));
//!
//! let frozen = array.into_immutable();
//! assert!(frozen.contains(&object(2)));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the collection traits, the concrete collections, option sets
/// and the [`object`](crate::object::object) constructor.
///
/// # Usage
///
/// ```rust
/// use object_array::prelude::*;
/// ```
pub mod prelude {
    pub use crate::array::ObjectArray;
    pub use crate::bridge::Bridgeable;
    pub use crate::collection::{Objects, OrderedCollection};
    pub use crate::error::BridgeError;
    pub use crate::index_set::IndexSet;
    pub use crate::mutable_array::MutableObjectArray;
    pub use crate::mutable_collection::MutableOrderedCollection;
    pub use crate::object::{Object, ObjectRef, object};
    pub use crate::options::{BinarySearchingOptions, EnumerationOptions, SortOptions};
    pub use crate::range::IndexRange;

    #[cfg(feature = "serde")]
    pub use crate::archive::Archive;
    #[cfg(feature = "serde")]
    pub use crate::error::ArchiveError;
}

pub mod object;

pub mod range;

pub mod options;

pub mod index_set;

pub mod error;

mod membership;

pub mod collection;

pub mod mutable_collection;

pub mod array;

pub mod mutable_array;

pub mod bridge;

#[cfg(feature = "serde")]
pub mod archive;

pub use array::ObjectArray;
pub use bridge::Bridgeable;
pub use collection::OrderedCollection;
pub use error::BridgeError;
#[cfg(feature = "serde")]
pub use error::ArchiveError;
pub use index_set::IndexSet;
pub use mutable_array::MutableObjectArray;
pub use mutable_collection::MutableOrderedCollection;
pub use object::ObjectRef;
pub use options::{BinarySearchingOptions, EnumerationOptions, SortOptions};
pub use range::IndexRange;
