//! The manifest renderer contract.
//!
//! Rendering a values tree into Kubernetes manifests is an external
//! concern: ChartCheck only requires that some collaborator accepts a
//! merged values tree and returns an exit code plus a navigable set of
//! documents.

use chart_values::ChartValue;
use manifest_query::ManifestSet;

use crate::errors::RenderError;

#[cfg(test)]
#[path = "renderer_tests.rs"]
mod tests;

/// Turns a values tree into rendered manifests plus a status code.
///
/// Implementations must be usable from multiple threads; rendering is
/// synchronous and holds no shared mutable state.
pub trait ManifestRenderer: Send + Sync {
    /// Renders the chart with the given (already merged) values.
    ///
    /// A chart that fails to render is a successful call returning a
    /// non-zero [`RenderOutcome::exit_code`]; `Err` means the renderer
    /// itself was unusable.
    fn render(&self, values: &ChartValue) -> Result<RenderOutcome, RenderError>;
}

/// The result of one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOutcome {
    /// Renderer exit status; zero means the chart rendered.
    pub exit_code: i32,
    /// Rendered documents, indexed by `Kind/name`. Empty when rendering
    /// failed.
    pub manifests: ManifestSet,
    /// Renderer diagnostics; empty when rendering was clean.
    pub stderr: String,
}

impl RenderOutcome {
    /// A clean outcome carrying rendered manifests.
    pub fn success(manifests: ManifestSet) -> Self {
        Self {
            exit_code: 0,
            manifests,
            stderr: String::new(),
        }
    }

    /// A failed render with the renderer's exit code and diagnostics.
    pub fn failure(exit_code: i32, stderr: impl Into<String>) -> Self {
        Self {
            exit_code,
            manifests: ManifestSet::new(),
            stderr: stderr.into(),
        }
    }

    /// Whether the renderer reported success.
    pub fn succeeded(&self) -> bool {
        self.exit_code == 0
    }
}
