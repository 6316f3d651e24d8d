//! CLI error types.

use chart_check_core::CheckError;
use chart_values::{MergeError, ValuesError};
use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur in the chart-check CLI.
#[derive(Error, Debug)]
pub enum Error {
    /// A values file could not be loaded or parsed.
    #[error("Failed to load values: {0}")]
    Values(#[from] ValuesError),

    /// Deep-merging the values layers failed.
    #[error("Failed to merge values: {0}")]
    Merge(#[from] MergeError),

    /// The check scenario could not be run.
    #[error("Check failed to run: {0}")]
    Check(#[from] CheckError),

    /// The merged tree could not be serialized for output.
    #[error("Failed to serialize merged values: {reason}")]
    Serialize { reason: String },
}
