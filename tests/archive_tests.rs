#![cfg(feature = "serde")]

//! Integration tests for archiving collections as typed sequences.

use object_array::prelude::*;
use rstest::rstest;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
struct Point {
    x: i32,
    y: i32,
}

impl fmt::Display for Point {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({}, {})", self.x, self.y)
    }
}

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("object-array-{}-{name}.json", std::process::id()))
}

// =============================================================================
// In-memory round trips
// =============================================================================

#[rstest]
fn test_struct_round_trip() {
    let array = ObjectArray::from_values([Point { x: 1, y: 2 }, Point { x: -3, y: 4 }]);
    let json = serde_json::to_string(&array.archive_of::<Point>()).unwrap();
    assert_eq!(json, r#"[{"x":1,"y":2},{"x":-3,"y":4}]"#);

    let decoded = ObjectArray::from_archive::<Point, _>(&mut serde_json::Deserializer::from_str(&json)).unwrap();
    assert_eq!(decoded, array);
    assert_eq!(decoded.joined_description(" "), "(1, 2) (-3, 4)");
}

#[rstest]
fn test_empty_round_trip() {
    let json = serde_json::to_string(&MutableObjectArray::new().archive_of::<String>()).unwrap();
    assert_eq!(json, "[]");
}

#[rstest]
fn test_mixed_collection_fails_to_encode() {
    let array = ObjectArray::from_objects([object(Point { x: 0, y: 0 }), object(7)]);
    let result = serde_json::to_string(&array.archive_of::<Point>());
    assert!(result.is_err());
}

#[rstest]
fn test_decode_rejects_wrong_element_type() {
    let result = ObjectArray::from_archive::<Point, _>(&mut serde_json::Deserializer::from_str("[1, 2]"));
    assert!(result.is_err());
}

// =============================================================================
// Files
// =============================================================================

#[rstest]
#[case(true)]
#[case(false)]
fn test_file_round_trip(#[case] atomically: bool) {
    let path = scratch_path(&format!("round-trip-{atomically}"));
    let array = ObjectArray::from_values(["alpha".to_string(), "beta".to_string()]);

    array.write_to_path::<String>(&path, atomically).unwrap();
    let restored = ObjectArray::read_from_path::<String>(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(restored, array);
}

#[rstest]
fn test_mutable_file_round_trip() {
    let path = scratch_path("mutable");
    let array = MutableObjectArray::from_values([1.25_f64.to_bits(), 2.5_f64.to_bits()]);

    array.write_to_path::<u64>(&path, true).unwrap();
    let restored = MutableObjectArray::read_from_path::<u64>(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(restored, array);
}

#[rstest]
fn test_write_mismatch_reports_bridge_error_and_writes_nothing() {
    let path = scratch_path("mismatch");
    let array = ObjectArray::from_objects([object(1), object("two".to_string())]);

    let error = array.write_to_path::<i32>(&path, false).unwrap_err();
    assert!(matches!(error, ArchiveError::Bridge(BridgeError { index: 1, .. })));
    assert!(!path.exists());
}

#[rstest]
fn test_read_missing_file_is_io_error() {
    let error = ObjectArray::read_from_path::<i32>(scratch_path("missing")).unwrap_err();
    assert!(matches!(error, ArchiveError::Io(_)));
}

#[rstest]
fn test_read_malformed_file_is_format_error() {
    let path = scratch_path("malformed");
    std::fs::write(&path, "[1, 2").unwrap();
    let error = ObjectArray::read_from_path::<i32>(&path).unwrap_err();
    std::fs::remove_file(&path).unwrap();
    assert!(matches!(error, ArchiveError::Format(_)));
}

#[rstest]
fn test_read_rejects_trailing_content() {
    let path = scratch_path("trailing");
    std::fs::write(&path, "[1] [2]").unwrap();
    let error = ObjectArray::read_from_path::<i32>(&path).unwrap_err();
    std::fs::remove_file(&path).unwrap();
    assert!(matches!(error, ArchiveError::Format(_)));
}

#[rstest]
fn test_failed_atomic_write_removes_staging_file() {
    let path = scratch_path("occupied-by-directory");
    std::fs::create_dir_all(&path).unwrap();
    let mut staging = path.clone().into_os_string();
    staging.push(".tmp");
    let staging = PathBuf::from(staging);

    let array = ObjectArray::from_values([1, 2, 3]);
    let result = array.write_to_path::<i32>(&path, true);
    let staging_left = staging.exists();
    std::fs::remove_dir(&path).unwrap();

    assert!(matches!(result, Err(ArchiveError::Io(_))));
    assert!(!staging_left);
}
