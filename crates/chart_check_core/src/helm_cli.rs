//! Rendering through the `helm` command line.
//!
//! [`HelmCliRenderer`] stages the merged values in a temporary file, runs
//! `helm template <release> <chart> --values <file>`, and parses the
//! resulting multi-document YAML stream into a [`ManifestSet`]. Helm itself
//! stays a black box; only its exit code and output are interpreted.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

use chart_values::ChartValue;
use manifest_query::ManifestSet;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::errors::RenderError;
use crate::renderer::{ManifestRenderer, RenderOutcome};

#[cfg(test)]
#[path = "helm_cli_tests.rs"]
mod tests;

/// Renders a chart by invoking the `helm` binary.
///
/// # Examples
///
/// ```rust,no_run
/// use chart_check_core::{HelmCliRenderer, ManifestRenderer};
/// use chart_values::parse_values;
///
/// let renderer = HelmCliRenderer::new("charts/gitlab", "test");
/// let values = parse_values("certmanager-issuer:\n  email: test@example.com").unwrap();
///
/// let outcome = renderer.render(&values)?;
/// assert_eq!(outcome.exit_code, 0);
/// # Ok::<(), chart_check_core::RenderError>(())
/// ```
#[derive(Debug, Clone)]
pub struct HelmCliRenderer {
    chart_path: PathBuf,
    release_name: String,
    helm_binary: PathBuf,
}

impl HelmCliRenderer {
    /// Creates a renderer for the chart at `chart_path`, templated under
    /// `release_name`. The `helm` binary is resolved from `PATH`.
    pub fn new(chart_path: impl Into<PathBuf>, release_name: impl Into<String>) -> Self {
        Self {
            chart_path: chart_path.into(),
            release_name: release_name.into(),
            helm_binary: PathBuf::from("helm"),
        }
    }

    /// Overrides the helm binary location.
    pub fn with_helm_binary(mut self, binary: impl Into<PathBuf>) -> Self {
        self.helm_binary = binary.into();
        self
    }

    /// The chart directory this renderer templates.
    pub fn chart_path(&self) -> &Path {
        &self.chart_path
    }

    /// The release name passed to helm.
    pub fn release_name(&self) -> &str {
        &self.release_name
    }
}

impl ManifestRenderer for HelmCliRenderer {
    fn render(&self, values: &ChartValue) -> Result<RenderOutcome, RenderError> {
        let encoded =
            serde_yaml::to_string(values).map_err(|error| RenderError::ValuesEncoding {
                reason: error.to_string(),
            })?;

        // The values file must outlive the helm invocation.
        let mut values_file = tempfile::NamedTempFile::new()?;
        values_file.write_all(encoded.as_bytes())?;
        values_file.flush()?;

        debug!(
            chart = %self.chart_path.display(),
            release = %self.release_name,
            "invoking helm template"
        );

        let output = Command::new(&self.helm_binary)
            .arg("template")
            .arg(&self.release_name)
            .arg(&self.chart_path)
            .arg("--values")
            .arg(values_file.path())
            .output()
            .map_err(|error| RenderError::Spawn {
                binary: self.helm_binary.display().to_string(),
                reason: error.to_string(),
            })?;

        let exit_code = output.status.code().unwrap_or(-1);
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if exit_code != 0 {
            warn!(exit_code, "helm template exited non-zero");
            return Ok(RenderOutcome {
                exit_code,
                manifests: ManifestSet::new(),
                stderr,
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let manifests = parse_manifest_stream(&stdout)?;

        Ok(RenderOutcome {
            exit_code,
            manifests,
            stderr,
        })
    }
}

/// Parses a multi-document YAML stream into a manifest set.
///
/// Empty documents (helm emits them between `---` separators for disabled
/// resources) are skipped.
///
/// # Errors
///
/// Returns [`RenderError::OutputParse`] when any document is not valid
/// YAML.
pub fn parse_manifest_stream(stream: &str) -> Result<ManifestSet, RenderError> {
    let mut documents = Vec::new();
    for document in serde_yaml::Deserializer::from_str(stream) {
        let value =
            ChartValue::deserialize(document).map_err(|error| RenderError::OutputParse {
                reason: error.to_string(),
            })?;
        if value.is_null() {
            continue;
        }
        documents.push(value);
    }
    Ok(ManifestSet::from_documents(documents))
}
