//! Archiving object collections through serde.
//!
//! An object collection has no serializable form on its own: its elements
//! are only known as [`Object`]s. Archiving therefore works on a *typed
//! view*: the caller names the element type `T`, every element is
//! downcast to `T` on the way out, and decoded values are wrapped back into
//! handles on the way in.
//!
//! File-backed construction stores the typed view as a JSON array.
//!
//! # Examples
//!
//! ```rust
//! use object_array::prelude::*;
//!
//! let array = ObjectArray::from_values([1, 2, 3]);
//! let json = serde_json::to_string(&array.archive_of::<i32>()).unwrap();
//! assert_eq!(json, "[1,2,3]");
//!
//! let mut deserializer = serde_json::Deserializer::from_str(&json);
//! let decoded = ObjectArray::from_archive::<i32, _>(&mut deserializer).unwrap();
//! assert_eq!(decoded, array);
//! ```

use std::any::Any;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::de::{DeserializeOwned, SeqAccess, Visitor};
use serde::ser::{Error as _, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::array::ObjectArray;
use crate::error::{ArchiveError, BridgeError};
use crate::mutable_array::MutableObjectArray;
use crate::object::{Object, ObjectRef, object};

// =============================================================================
// Encoding
// =============================================================================

/// A typed, serializable view over a slice of objects.
///
/// Created by [`ObjectArray::archive_of`] and
/// [`MutableObjectArray::archive_of`]. Serializes as a sequence of `T`;
/// serialization fails with a custom error naming the first element that
/// is not a `T`.
pub struct Archive<'a, T> {
    elements: &'a [ObjectRef],
    marker: PhantomData<fn() -> T>,
}

impl<'a, T: Any> Archive<'a, T> {
    const fn new(elements: &'a [ObjectRef]) -> Self {
        Self {
            elements,
            marker: PhantomData,
        }
    }

    /// Returns the first element that is not a `T`, if any.
    pub fn check(&self) -> Result<(), BridgeError> {
        match self
            .elements
            .iter()
            .position(|element| !element.as_any().is::<T>())
        {
            Some(index) => Err(BridgeError {
                index,
                expected: std::any::type_name::<T>(),
                found: self.elements[index].type_name(),
            }),
            None => Ok(()),
        }
    }
}

impl<T: Serialize + Any> Serialize for Archive<'_, T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.check().map_err(S::Error::custom)?;
        let mut seq = serializer.serialize_seq(Some(self.elements.len()))?;
        for element in self.elements {
            if let Some(value) = element.as_any().downcast_ref::<T>() {
                seq.serialize_element(value)?;
            }
        }
        seq.end()
    }
}

// =============================================================================
// Decoding
// =============================================================================

struct ArchiveVisitor<T> {
    marker: PhantomData<T>,
}

impl<T> ArchiveVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<'de, T> Visitor<'de> for ArchiveVisitor<T>
where
    T: Deserialize<'de> + Object,
{
    type Value = Vec<ObjectRef>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a sequence of archived elements")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(value) = seq.next_element::<T>()? {
            elements.push(object(value));
        }
        Ok(elements)
    }
}

fn decode<'de, T, D>(deserializer: D) -> Result<Vec<ObjectRef>, D::Error>
where
    T: Deserialize<'de> + Object,
    D: Deserializer<'de>,
{
    deserializer.deserialize_seq(ArchiveVisitor::<T>::new())
}

// =============================================================================
// Files
// =============================================================================

fn read_elements<T>(path: &Path) -> Result<Vec<ObjectRef>, ArchiveError>
where
    T: DeserializeOwned + Object,
{
    let file = File::open(path).inspect_err(|error| {
        tracing::debug!(path = %path.display(), %error, "failed to open archive");
    })?;
    let mut deserializer = serde_json::Deserializer::from_reader(BufReader::new(file));
    let elements = decode::<T, _>(&mut deserializer)?;
    deserializer.end()?;
    tracing::trace!(path = %path.display(), count = elements.len(), "read archive");
    Ok(elements)
}

fn write_elements<T>(elements: &[ObjectRef], path: &Path, atomically: bool) -> Result<(), ArchiveError>
where
    T: Serialize + Any,
{
    let archive = Archive::<T>::new(elements);
    archive.check().inspect_err(|error| {
        tracing::debug!(path = %path.display(), %error, "refusing to archive mismatched element");
    })?;

    let target = if atomically { staging_path(path) } else { path.to_path_buf() };
    let file = File::create(&target)?;
    let written = (|| -> Result<(), ArchiveError> {
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, &archive)?;
        writer.flush()?;
        drop(writer);
        if atomically {
            fs::rename(&target, path)?;
        }
        Ok(())
    })();
    written.inspect_err(|error| {
        tracing::debug!(path = %path.display(), %error, "failed to write archive");
        if atomically {
            let _ = fs::remove_file(&target);
        }
    })?;
    tracing::trace!(path = %path.display(), count = elements.len(), "wrote archive");
    Ok(())
}

/// Sibling path used while writing atomically.
fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|name| name.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

// =============================================================================
// Collection entry points
// =============================================================================

impl ObjectArray {
    /// A serializable view of the elements as `T`.
    #[must_use]
    pub fn archive_of<T: Any>(&self) -> Archive<'_, T> {
        Archive::new(self.as_slice())
    }

    /// Decodes a sequence of `T` into a new collection.
    ///
    /// # Errors
    ///
    /// Returns the deserializer's error if the input is not a sequence of `T`.
    pub fn from_archive<'de, T, D>(deserializer: D) -> Result<Self, D::Error>
    where
        T: Deserialize<'de> + Object,
        D: Deserializer<'de>,
    {
        decode::<T, D>(deserializer).map(Self::from)
    }

    /// Reads a collection from a JSON archive of `T` values.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::Io`] if the file cannot be read and
    /// [`ArchiveError::Format`] if it is not a JSON array of `T`.
    pub fn read_from_path<T>(path: impl AsRef<Path>) -> Result<Self, ArchiveError>
    where
        T: DeserializeOwned + Object,
    {
        read_elements::<T>(path.as_ref()).map(Self::from)
    }

    /// Writes the elements as a JSON array of `T` values.
    ///
    /// With `atomically` the archive is written to a sibling file first and
    /// then renamed over `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::Bridge`] without touching the file system if
    /// an element is not a `T`, and [`ArchiveError::Io`] on write failures.
    pub fn write_to_path<T>(&self, path: impl AsRef<Path>, atomically: bool) -> Result<(), ArchiveError>
    where
        T: Serialize + Any,
    {
        write_elements::<T>(self.as_slice(), path.as_ref(), atomically)
    }
}

impl MutableObjectArray {
    /// A serializable view of the elements as `T`.
    #[must_use]
    pub fn archive_of<T: Any>(&self) -> Archive<'_, T> {
        Archive::new(self.as_slice())
    }

    /// Decodes a sequence of `T` into a new collection.
    ///
    /// # Errors
    ///
    /// Returns the deserializer's error if the input is not a sequence of `T`.
    pub fn from_archive<'de, T, D>(deserializer: D) -> Result<Self, D::Error>
    where
        T: Deserialize<'de> + Object,
        D: Deserializer<'de>,
    {
        decode::<T, D>(deserializer).map(Self::from)
    }

    /// Reads a collection from a JSON archive of `T` values.
    ///
    /// # Errors
    ///
    /// See [`ObjectArray::read_from_path`].
    pub fn read_from_path<T>(path: impl AsRef<Path>) -> Result<Self, ArchiveError>
    where
        T: DeserializeOwned + Object,
    {
        read_elements::<T>(path.as_ref()).map(Self::from)
    }

    /// Writes the elements as a JSON array of `T` values.
    ///
    /// # Errors
    ///
    /// See [`ObjectArray::write_to_path`].
    pub fn write_to_path<T>(&self, path: impl AsRef<Path>, atomically: bool) -> Result<(), ArchiveError>
    where
        T: Serialize + Any,
    {
        write_elements::<T>(self.as_slice(), path.as_ref(), atomically)
    }
}
