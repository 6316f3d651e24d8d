//! Tests for check scenarios, including the end-to-end workhorse case.

use chart_values::{parse_values, ChartValue};
use manifest_query::ManifestSet;

use crate::expectations::Expectation;
use crate::mock::MockRenderer;

use super::*;

// ============================================================================
// Test Helpers
// ============================================================================

/// The required chart settings every scenario starts from.
fn default_values() -> ChartValue {
    parse_values("certmanager-issuer:\n  email: test@example.com")
        .expect("default values fixture should parse")
}

/// A rendered webservice Deployment whose container env carries the
/// workhorse archive-cache toggle, as the chart emits it when the
/// archive-cache feature flag is absent from the values.
fn webservice_manifests() -> ManifestSet {
    let deployment = parse_values(
        r#"
kind: Deployment
metadata:
  name: test-webservice
spec:
  template:
    spec:
      containers:
      - name: webservice
        env:
        - name: WORKHORSE_ARCHIVE_CACHE_DISABLED
          value: "1"
"#,
    )
    .expect("deployment fixture should parse");

    ManifestSet::from_documents(vec![deployment])
}

// ============================================================================
// Scenario Construction
// ============================================================================

/// Verify resolved values with no overrides reproduce the defaults.
#[test]
fn test_resolved_values_without_overrides() {
    let scenario = CheckScenario::new("plain", default_values());

    let resolved = scenario.resolved_values().unwrap();

    assert_eq!(resolved, default_values());
}

/// Verify overrides layer onto the defaults left to right.
#[test]
fn test_resolved_values_layers_overrides() {
    let scenario = CheckScenario::new("layered", default_values())
        .with_override(parse_values("registry:\n  enabled: false").unwrap())
        .with_override(parse_values("registry:\n  enabled: true").unwrap());

    let resolved = scenario.resolved_values().unwrap();

    assert_eq!(
        resolved
            .get("registry")
            .and_then(|v| v.get("enabled"))
            .and_then(|v| v.as_bool()),
        Some(true),
        "the later override should win"
    );
    assert!(
        resolved.get("certmanager-issuer").is_some(),
        "defaults must survive layering"
    );
}

// ============================================================================
// End-to-End: Workhorse Archive Cache
// ============================================================================

/// Verify the webservice deployment advertises the archive cache toggle to
/// workhorse when the feature flag is absent from the values.
///
/// The variable's value is irrelevant; the consumer only checks that the
/// variable exists.
#[test]
fn test_workhorse_archive_cache_disabled() {
    let renderer = MockRenderer::succeeding(webservice_manifests());

    let scenario = CheckScenario::new("disabled archive cache", default_values())
        .with_expectation(Expectation::ExitCode(0))
        .with_expectation(Expectation::ContainerEnvPresent {
            resource: "Deployment/test-webservice".to_string(),
            name: "WORKHORSE_ARCHIVE_CACHE_DISABLED".to_string(),
        });

    let report = scenario.run(&renderer).unwrap();

    assert_eq!(report.exit_code, 0);
    assert!(report.passed(), "failures: {:?}", report.failures().collect::<Vec<_>>());

    // The merged values that reached the renderer are exactly the defaults:
    // no overrides were layered on.
    assert_eq!(renderer.received_values(), vec![default_values()]);
}

// ============================================================================
// Reporting
// ============================================================================

/// Verify a failing expectation is reported without hiding later ones.
#[test]
fn test_report_keeps_all_expectation_results() {
    let renderer = MockRenderer::succeeding(webservice_manifests());

    let scenario = CheckScenario::new("mixed", default_values())
        .with_expectation(Expectation::ExitCode(1)) // wrong on purpose
        .with_expectation(Expectation::ContainerEnvPresent {
            resource: "Deployment/test-webservice".to_string(),
            name: "WORKHORSE_ARCHIVE_CACHE_DISABLED".to_string(),
        });

    let report = scenario.run(&renderer).unwrap();

    assert!(!report.passed());
    assert_eq!(report.results.len(), 2, "evaluation must not short-circuit");
    assert_eq!(report.failures().count(), 1);
    assert!(report.results[1].passed);
}

/// Verify a renderer failure surfaces as a reportable exit code.
#[test]
fn test_render_failure_is_reported_not_raised() {
    let renderer = MockRenderer::failing(1, "Error: 'certmanager-issuer.email' is required");

    let scenario = CheckScenario::new("missing required value", ChartValue::empty_table())
        .with_expectation(Expectation::ExitCode(0));

    let report = scenario.run(&renderer).unwrap();

    assert_eq!(report.exit_code, 1);
    assert!(!report.passed());
}

/// Verify a scenario with no expectations passes trivially.
#[test]
fn test_empty_expectations_pass() {
    let renderer = MockRenderer::succeeding(ManifestSet::new());

    let report = CheckScenario::new("empty", default_values())
        .run(&renderer)
        .unwrap();

    assert!(report.passed());
    assert!(report.results.is_empty());
}

/// Verify scenario names flow into the report.
#[test]
fn test_report_carries_scenario_name() {
    let renderer = MockRenderer::succeeding(ManifestSet::new());
    let scenario = CheckScenario::new("named scenario", default_values());

    assert_eq!(scenario.name(), "named scenario");

    let report = scenario.run(&renderer).unwrap();
    assert_eq!(report.scenario, "named scenario");
}

/// Verify one defaults tree can back many scenarios unchanged.
#[test]
fn test_defaults_shared_across_scenarios() {
    let defaults = default_values();
    let renderer = MockRenderer::succeeding(ManifestSet::new());

    let first = CheckScenario::new("first", defaults.clone())
        .with_override(parse_values("a: 1").unwrap());
    let second = CheckScenario::new("second", defaults.clone());

    first.run(&renderer).unwrap();
    second.run(&renderer).unwrap();

    let received = renderer.received_values();
    assert_eq!(received.len(), 2);
    assert!(
        received[1].get("a").is_none(),
        "overrides from one scenario must not leak into another"
    );
    assert_eq!(defaults, default_values(), "defaults stay untouched");
}
