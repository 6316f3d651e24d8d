//! Tests for values error types.

use super::*;

/// Verify the merge depth error names the offending depth.
#[test]
fn test_structure_too_deep_display() {
    let error = MergeError::StructureTooDeep { depth: 129 };

    assert_eq!(
        error.to_string(),
        "values nested deeper than the merge limit (129 levels)"
    );
}

/// Verify file errors carry the path in their message.
#[test]
fn test_file_not_found_display() {
    let error = ValuesError::FileNotFound {
        path: "/tmp/values.yaml".to_string(),
    };

    assert!(error.to_string().contains("/tmp/values.yaml"));
}

/// Verify access errors carry path and reason.
#[test]
fn test_file_access_error_display() {
    let error = ValuesError::FileAccessError {
        path: "values.yaml".to_string(),
        reason: "permission denied".to_string(),
    };

    let message = error.to_string();
    assert!(message.contains("values.yaml"));
    assert!(message.contains("permission denied"));
}

/// Verify parse errors surface the underlying reason.
#[test]
fn test_parse_error_display() {
    let error = ValuesError::ParseError {
        reason: "mapping values are not allowed".to_string(),
    };

    assert!(error.to_string().contains("mapping values are not allowed"));
}

/// Verify errors support equality comparison for test assertions.
#[test]
fn test_errors_are_comparable() {
    let a = MergeError::StructureTooDeep { depth: 5 };
    let b = MergeError::StructureTooDeep { depth: 5 };

    assert_eq!(a, b);
    assert_eq!(a.clone(), b);
}
