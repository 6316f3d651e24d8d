//! Tests for CLI error types.

use chart_values::{MergeError, ValuesError};

use super::*;

/// Verify values errors convert and keep their message.
#[test]
fn test_values_error_conversion() {
    let error: Error = ValuesError::FileNotFound {
        path: "values.yaml".to_string(),
    }
    .into();

    assert!(matches!(error, Error::Values(_)));
    assert!(error.to_string().contains("values.yaml"));
}

/// Verify merge errors convert.
#[test]
fn test_merge_error_conversion() {
    let error: Error = MergeError::StructureTooDeep { depth: 140 }.into();

    assert!(matches!(error, Error::Merge(_)));
}

/// Verify serialize errors carry their reason.
#[test]
fn test_serialize_error_display() {
    let error = Error::Serialize {
        reason: "unrepresentable value".to_string(),
    };

    assert!(error.to_string().contains("unrepresentable value"));
}
