//! Declarative expectations over a render outcome.
//!
//! Expectations are the assertion vocabulary of a check scenario: the
//! renderer's exit code, the presence or value of a path inside a rendered
//! resource, and the presence of a named environment variable on a
//! workload's containers. Evaluation never fails; each expectation yields a
//! pass/fail result with a human-readable detail.

use std::fmt;

use chart_values::ChartValue;
use manifest_query::{ManifestSet, PathSegment, QueryPath};

use crate::renderer::RenderOutcome;

#[cfg(test)]
#[path = "expectations_tests.rs"]
mod tests;

/// A single assertion over a render outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum Expectation {
    /// The renderer must exit with this code.
    ExitCode(i32),

    /// The path must resolve to some value on the resource.
    PathExists { resource: String, path: QueryPath },

    /// The path must resolve to exactly this value.
    PathEquals {
        resource: String,
        path: QueryPath,
        value: ChartValue,
    },

    /// Some container of the workload must carry an `env` entry with this
    /// name. The entry's value is deliberately ignored; consumers that read
    /// such variables via an internal API only check for existence.
    ContainerEnvPresent { resource: String, name: String },
}

/// The outcome of evaluating one expectation.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpectationResult {
    pub expectation: Expectation,
    pub passed: bool,
    pub detail: String,
}

impl Expectation {
    /// Evaluates this expectation against a render outcome.
    pub fn evaluate(&self, outcome: &RenderOutcome) -> ExpectationResult {
        match self {
            Expectation::ExitCode(expected) => {
                let passed = outcome.exit_code == *expected;
                self.result(
                    passed,
                    format!(
                        "expected exit code {}, renderer exited with {}",
                        expected, outcome.exit_code
                    ),
                )
            }
            Expectation::PathExists { resource, path } => {
                let passed = outcome.manifests.dig(resource, path).is_some();
                self.result(
                    passed,
                    format!("{}: path '{}' resolved: {}", resource, path, passed),
                )
            }
            Expectation::PathEquals {
                resource,
                path,
                value,
            } => {
                let found = outcome.manifests.dig(resource, path);
                let passed = found == Some(value);
                self.result(
                    passed,
                    format!(
                        "{}: path '{}' yielded {:?}, expected {:?}",
                        resource, path, found, value
                    ),
                )
            }
            Expectation::ContainerEnvPresent { resource, name } => {
                let names = container_env_names(&outcome.manifests, resource);
                let passed = names.iter().any(|candidate| candidate == name);
                self.result(
                    passed,
                    format!(
                        "{}: container env names {:?}, looked for '{}'",
                        resource, names, name
                    ),
                )
            }
        }
    }

    fn result(&self, passed: bool, detail: String) -> ExpectationResult {
        ExpectationResult {
            expectation: self.clone(),
            passed,
            detail,
        }
    }
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expectation::ExitCode(code) => write!(f, "exit code equals {}", code),
            Expectation::PathExists { resource, path } => {
                write!(f, "{}: '{}' exists", resource, path)
            }
            Expectation::PathEquals { resource, path, .. } => {
                write!(f, "{}: '{}' equals expected value", resource, path)
            }
            Expectation::ContainerEnvPresent { resource, name } => {
                write!(f, "{}: container env contains '{}'", resource, name)
            }
        }
    }
}

/// Collects the `name` of every `env` entry across all containers of a
/// workload resource.
///
/// The containers are read from `spec.template.spec.containers`, the pod
/// template location shared by Deployments, StatefulSets, and Jobs-like
/// workloads. A missing resource or an unexpected shape yields an empty
/// list.
pub fn container_env_names(manifests: &ManifestSet, resource: &str) -> Vec<String> {
    let path = QueryPath::from_segments(vec![
        PathSegment::Key("spec".to_string()),
        PathSegment::Key("template".to_string()),
        PathSegment::Key("spec".to_string()),
        PathSegment::Key("containers".to_string()),
    ]);

    let containers = match manifests.dig(resource, &path).and_then(|v| v.as_sequence()) {
        Some(containers) => containers,
        None => return Vec::new(),
    };

    let mut names = Vec::new();
    for container in containers {
        if let Some(env) = container.get("env").and_then(|v| v.as_sequence()) {
            for entry in env {
                if let Some(name) = entry.get("name").and_then(|v| v.as_str()) {
                    names.push(name.to_string());
                }
            }
        }
    }
    names
}
