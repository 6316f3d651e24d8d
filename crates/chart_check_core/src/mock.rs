//! Canned renderer for tests.

use std::sync::Mutex;

use chart_values::ChartValue;
use manifest_query::ManifestSet;

use crate::errors::RenderError;
use crate::renderer::{ManifestRenderer, RenderOutcome};

#[cfg(test)]
#[path = "mock_tests.rs"]
mod tests;

/// A [`ManifestRenderer`] that returns a fixed outcome and records every
/// values tree it was handed.
///
/// The recording makes it possible to assert that a scenario's merged
/// values reached the collaborator intact.
///
/// # Examples
///
/// ```rust
/// use chart_check_core::{ManifestRenderer, MockRenderer, RenderOutcome};
/// use chart_values::parse_values;
/// use manifest_query::ManifestSet;
///
/// let renderer = MockRenderer::new(RenderOutcome::success(ManifestSet::new()));
/// let values = parse_values("a: 1").unwrap();
///
/// let outcome = renderer.render(&values).unwrap();
/// assert!(outcome.succeeded());
/// assert_eq!(renderer.received_values(), vec![values]);
/// ```
#[derive(Debug)]
pub struct MockRenderer {
    outcome: RenderOutcome,
    received: Mutex<Vec<ChartValue>>,
}

impl MockRenderer {
    /// Creates a renderer that always returns `outcome`.
    pub fn new(outcome: RenderOutcome) -> Self {
        Self {
            outcome,
            received: Mutex::new(Vec::new()),
        }
    }

    /// A renderer that succeeds with the given manifests.
    pub fn succeeding(manifests: ManifestSet) -> Self {
        Self::new(RenderOutcome::success(manifests))
    }

    /// A renderer that fails with the given exit code and diagnostics.
    pub fn failing(exit_code: i32, stderr: &str) -> Self {
        Self::new(RenderOutcome::failure(exit_code, stderr))
    }

    /// The values trees received so far, in call order.
    pub fn received_values(&self) -> Vec<ChartValue> {
        self.received
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl ManifestRenderer for MockRenderer {
    fn render(&self, values: &ChartValue) -> Result<RenderOutcome, RenderError> {
        self.received
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(values.clone());
        Ok(self.outcome.clone())
    }
}
