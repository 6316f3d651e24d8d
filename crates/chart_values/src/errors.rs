//! Values system error types.
//!
//! Domain-specific errors for loading values files and deep-merging
//! value trees.

use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Deep-merge errors.
///
/// Type conflicts between the two trees are not errors: when the base and
/// overlay disagree on the shape of a value, the overlay replaces the base
/// value entirely. The only failure mode is structural: input trees nested
/// beyond the recursion limit, which aborts the merge with no partial
/// result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MergeError {
    #[error("values nested deeper than the merge limit ({depth} levels)")]
    StructureTooDeep { depth: usize },
}

/// Errors that occur while loading values from disk or parsing YAML.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValuesError {
    #[error("Values file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to access values file: {path} - {reason}")]
    FileAccessError { path: String, reason: String },

    #[error("Failed to parse values: {reason}")]
    ParseError { reason: String },
}

/// Result type alias for merge operations.
pub type MergeResult<T> = Result<T, MergeError>;

/// Result type alias for values loading operations.
pub type ValuesResult<T> = Result<T, ValuesError>;
