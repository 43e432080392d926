#![cfg(all(feature = "serde", feature = "set"))]

//! Integration tests for serde support.
//!
//! These tests verify that Set serializes as a plain sequence and
//! deserializes back from one.

use rstest::rstest;
use setwise::set::Set;

#[rstest]
fn test_set_json_roundtrip() {
    let set: Set<i32> = (1..=10).collect();
    let json = serde_json::to_string(&set).unwrap();
    let restored: Set<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(set, restored);
}

#[rstest]
fn test_set_serializes_as_sequence() {
    let set = Set::from_slice(&["only"]);
    assert_eq!(serde_json::to_string(&set).unwrap(), r#"["only"]"#);
}

#[rstest]
fn test_empty_set_json() {
    let set: Set<String> = Set::new();
    assert_eq!(serde_json::to_string(&set).unwrap(), "[]");

    let restored: Set<String> = serde_json::from_str("[]").unwrap();
    assert!(restored.is_empty());
}

#[rstest]
fn test_deserialize_collapses_duplicates() {
    let restored: Set<String> = serde_json::from_str(r#"["a", "b", "a"]"#).unwrap();
    assert_eq!(restored.len(), 2);
    assert!(restored.contains("a"));
    assert!(restored.contains("b"));
}

#[rstest]
fn test_deserialize_rejects_non_sequence() {
    let result: Result<Set<i32>, _> = serde_json::from_str(r#"{"a": 1}"#);
    assert!(result.is_err());
}

#[rstest]
fn test_nested_in_struct() {
    #[derive(serde::Serialize, serde::Deserialize, PartialEq, Debug)]
    struct Tagged {
        tags: Set<String>,
    }

    let value = Tagged {
        tags: Set::from_slice(&["x".to_string(), "y".to_string()]),
    };
    let json = serde_json::to_string(&value).unwrap();
    let restored: Tagged = serde_json::from_str(&json).unwrap();
    assert_eq!(value, restored);
}
