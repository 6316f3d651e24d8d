//! Check scenarios.
//!
//! A scenario bundles an immutable defaults tree, zero or more override
//! layers, and the expectations to evaluate against the rendered output.
//! Defaults are plain values passed into each scenario; there is no shared
//! fixture state, so one defaults tree can back many scenarios.

use chart_values::{ChartValue, MergeResult, ValuesMerger};
use tracing::info;

use crate::errors::CheckResult;
use crate::expectations::{Expectation, ExpectationResult};
use crate::renderer::ManifestRenderer;

#[cfg(test)]
#[path = "scenario_tests.rs"]
mod tests;

/// One behavioral check of a rendered chart.
///
/// # Examples
///
/// ```rust
/// use chart_check_core::{CheckScenario, Expectation, MockRenderer};
/// use chart_values::parse_values;
/// use manifest_query::ManifestSet;
///
/// let defaults = parse_values("certmanager-issuer:\n  email: test@example.com").unwrap();
///
/// let scenario = CheckScenario::new("renders cleanly", defaults)
///     .with_expectation(Expectation::ExitCode(0));
///
/// let renderer = MockRenderer::succeeding(ManifestSet::new());
/// let report = scenario.run(&renderer).unwrap();
/// assert!(report.passed());
/// ```
#[derive(Debug, Clone)]
pub struct CheckScenario {
    name: String,
    defaults: ChartValue,
    overrides: Vec<ChartValue>,
    expectations: Vec<Expectation>,
}

impl CheckScenario {
    /// Creates a scenario over the given defaults tree.
    pub fn new(name: impl Into<String>, defaults: ChartValue) -> Self {
        Self {
            name: name.into(),
            defaults,
            overrides: Vec::new(),
            expectations: Vec::new(),
        }
    }

    /// Adds an override layer. Layers apply left to right, after the
    /// defaults.
    pub fn with_override(mut self, overlay: ChartValue) -> Self {
        self.overrides.push(overlay);
        self
    }

    /// Adds an expectation to evaluate against the render outcome.
    pub fn with_expectation(mut self, expectation: Expectation) -> Self {
        self.expectations.push(expectation);
        self
    }

    /// The scenario name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Deep-merges the defaults with every override layer, left to right.
    pub fn resolved_values(&self) -> MergeResult<ChartValue> {
        ValuesMerger::new().merge_layers(&self.defaults, &self.overrides)
    }

    /// Merges the values, renders, and evaluates every expectation.
    ///
    /// Evaluation does not short-circuit: a failing expectation never hides
    /// the results of the ones after it.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::Merge`](crate::CheckError::Merge) when the
    /// values cannot be merged and
    /// [`CheckError::Render`](crate::CheckError::Render) when the renderer
    /// is unusable. A chart that renders with a non-zero exit code is a
    /// report, not an error.
    pub fn run(&self, renderer: &dyn ManifestRenderer) -> CheckResult<ScenarioReport> {
        let values = self.resolved_values()?;
        let outcome = renderer.render(&values)?;

        let results: Vec<ExpectationResult> = self
            .expectations
            .iter()
            .map(|expectation| expectation.evaluate(&outcome))
            .collect();

        let failed = results.iter().filter(|result| !result.passed).count();
        info!(
            scenario = %self.name,
            expectations = results.len(),
            failed,
            exit_code = outcome.exit_code,
            "evaluated check scenario"
        );

        Ok(ScenarioReport {
            scenario: self.name.clone(),
            exit_code: outcome.exit_code,
            results,
        })
    }
}

/// The evaluated results of one scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioReport {
    /// Name of the scenario that produced this report.
    pub scenario: String,
    /// Exit code the renderer reported.
    pub exit_code: i32,
    /// Per-expectation outcomes, in scenario order.
    pub results: Vec<ExpectationResult>,
}

impl ScenarioReport {
    /// Whether every expectation held.
    pub fn passed(&self) -> bool {
        self.results.iter().all(|result| result.passed)
    }

    /// The expectations that did not hold.
    pub fn failures(&self) -> impl Iterator<Item = &ExpectationResult> {
        self.results.iter().filter(|result| !result.passed)
    }
}
