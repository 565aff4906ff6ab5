//! Recoverable errors.
//!
//! Precondition violations (out-of-range indexes, mismatched counts,
//! unsupported options) panic. The types here cover the failures a caller is
//! expected to handle: bridging an object collection into a typed `Vec`, and
//! reading or writing archives.

use thiserror::Error;

/// An element did not have the type requested by a typed bridge.
///
/// # Examples
///
/// ```rust
/// use object_array::{BridgeError, ObjectArray, OrderedCollection};
/// use object_array::object::object;
///
/// let array = ObjectArray::from_objects([object(1_i32), object("two".to_string())]);
/// let error = array.try_bridge::<i32>().unwrap_err();
/// assert_eq!(error.index, 1);
/// assert_eq!(error.expected, "i32");
/// assert!(error.to_string().starts_with("element 1 has type"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("element {index} has type {found}, expected {expected}")]
pub struct BridgeError {
    /// Position of the first element that failed to convert.
    pub index: usize,
    /// The requested element type.
    pub expected: &'static str,
    /// The dynamic type of the offending element.
    pub found: &'static str,
}

/// Failure while reading or writing an archived collection.
#[cfg(feature = "serde")]
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// The archive file could not be read or written.
    #[error("archive I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// The archive contents were not a valid sequence of the requested type.
    #[error("archive format error: {0}")]
    Format(#[from] serde_json::Error),
    /// An element could not be encoded as the requested type.
    #[error("archive encoding failed: {0}")]
    Bridge(#[from] BridgeError),
}
