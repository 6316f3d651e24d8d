//! Scenario checking for rendered Helm charts.
//!
//! This crate ties the ChartCheck pieces together: a scenario's layered
//! values are deep-merged, handed to a manifest renderer behind the
//! [`ManifestRenderer`] trait, and the rendered output is evaluated against
//! declarative [`Expectation`]s (exit code, path queries, container
//! environment variables).
//!
//! Rendering is an external collaborator. The default implementation,
//! [`HelmCliRenderer`], shells out to the `helm` binary; tests and
//! downstream consumers can substitute [`MockRenderer`] or their own
//! implementation of the trait.

// Renderer contract
pub mod renderer;

// Helm CLI renderer
pub mod helm_cli;

// Canned renderer for tests
pub mod mock;

// Declarative expectations over render output
pub mod expectations;

// Scenario orchestration
pub mod scenario;

// Error types
pub mod errors;

// Re-export for convenient access
pub use errors::{CheckError, CheckResult, RenderError};
pub use expectations::{container_env_names, Expectation, ExpectationResult};
pub use helm_cli::{parse_manifest_stream, HelmCliRenderer};
pub use mock::MockRenderer;
pub use renderer::{ManifestRenderer, RenderOutcome};
pub use scenario::{CheckScenario, ScenarioReport};
