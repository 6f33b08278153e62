//! Tests for the core error type.

use crate::error::Error;

#[test]
fn test_not_found_display() {
    let err = Error::NodeNotFound(999);
    assert_eq!(err.to_string(), "Node 999 not found");
}

#[test]
fn test_parse_error_from_serde() {
    let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: Error = serde_err.into();
    assert!(matches!(err, Error::Parse(_)));
    assert!(err.to_string().starts_with("Failed to parse graph document"));
}
