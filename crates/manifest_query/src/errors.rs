//! Manifest query error types.

use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors raised while parsing query paths.
///
/// Traversal itself never fails; a path that does not resolve is reported
/// as `None` by the lookup, not as an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Invalid query path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },
}

/// Result type alias for query operations.
pub type QueryResult<T> = Result<T, QueryError>;
