//! Scenario checking error types.

use chart_values::MergeError;
use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that make a renderer unusable.
///
/// A chart that fails to render is NOT a `RenderError`: the renderer still
/// produced an outcome (a non-zero exit code and diagnostics), which
/// expectations assert on. These variants cover the renderer itself
/// breaking down.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The merged values tree could not be encoded for the renderer.
    #[error("Failed to encode values for rendering: {reason}")]
    ValuesEncoding { reason: String },

    /// The renderer process could not be started at all.
    #[error("Failed to launch renderer '{binary}': {reason}")]
    Spawn { binary: String, reason: String },

    /// The renderer exited successfully but its output was not a valid
    /// manifest stream.
    #[error("Failed to parse rendered manifests: {reason}")]
    OutputParse { reason: String },

    /// I/O failed while staging values for the renderer.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while running a check scenario.
#[derive(Error, Debug)]
pub enum CheckError {
    #[error("Values merge failed: {0}")]
    Merge(#[from] MergeError),

    #[error("Manifest rendering failed: {0}")]
    Render(#[from] RenderError),
}

/// Result type alias for scenario checking operations.
pub type CheckResult<T> = Result<T, CheckError>;
