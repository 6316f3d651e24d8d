//! Tests for render-outcome expectations.

use chart_values::{parse_values, ChartValue};
use manifest_query::{ManifestSet, QueryPath};

use super::*;

// ============================================================================
// Test Helpers
// ============================================================================

/// A webservice Deployment with two containers, one carrying env entries.
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
        - name: GITLAB_PORT
          value: "8080"
      - name: sidecar
"#,
    )
    .expect("deployment fixture should parse");

    ManifestSet::from_documents(vec![deployment])
}

fn success_outcome() -> RenderOutcome {
    RenderOutcome::success(webservice_manifests())
}

// ============================================================================
// Exit Code
// ============================================================================

/// Verify the exit code expectation matches the outcome's code.
#[test]
fn test_exit_code_expectation() {
    let outcome = success_outcome();

    assert!(Expectation::ExitCode(0).evaluate(&outcome).passed);
    assert!(!Expectation::ExitCode(1).evaluate(&outcome).passed);
}

/// Verify a failed render matches its non-zero code.
#[test]
fn test_exit_code_on_failed_render() {
    let outcome = RenderOutcome::failure(1, "Error: required value");

    let result = Expectation::ExitCode(1).evaluate(&outcome);

    assert!(result.passed);
}

// ============================================================================
// Path Queries
// ============================================================================

/// Verify path existence passes for rendered structure.
#[test]
fn test_path_exists() {
    let expectation = Expectation::PathExists {
        resource: "Deployment/test-webservice".to_string(),
        path: QueryPath::parse("spec.template.spec.containers[0].env").unwrap(),
    };

    assert!(expectation.evaluate(&success_outcome()).passed);
}

/// Verify path existence fails for absent structure.
#[test]
fn test_path_exists_misses() {
    let expectation = Expectation::PathExists {
        resource: "Deployment/test-webservice".to_string(),
        path: QueryPath::parse("spec.template.spec.volumes").unwrap(),
    };

    assert!(!expectation.evaluate(&success_outcome()).passed);
}

/// Verify path equality compares the resolved value.
#[test]
fn test_path_equals() {
    let expectation = Expectation::PathEquals {
        resource: "Deployment/test-webservice".to_string(),
        path: QueryPath::parse("spec.template.spec.containers[0].name").unwrap(),
        value: ChartValue::from("webservice"),
    };

    assert!(expectation.evaluate(&success_outcome()).passed);
}

/// Verify path equality fails on a differing value.
#[test]
fn test_path_equals_mismatch() {
    let expectation = Expectation::PathEquals {
        resource: "Deployment/test-webservice".to_string(),
        path: QueryPath::parse("spec.template.spec.containers[0].name").unwrap(),
        value: ChartValue::from("registry"),
    };

    let result = expectation.evaluate(&success_outcome());

    assert!(!result.passed);
    assert!(
        result.detail.contains("registry"),
        "detail should name the expected value: {}",
        result.detail
    );
}

// ============================================================================
// Container Environment
// ============================================================================

/// Verify env names are collected across all containers.
#[test]
fn test_container_env_names_collects_all_containers() {
    let names = container_env_names(&webservice_manifests(), "Deployment/test-webservice");

    assert_eq!(
        names,
        vec!["WORKHORSE_ARCHIVE_CACHE_DISABLED", "GITLAB_PORT"],
        "both env entries should be collected; the env-less sidecar adds none"
    );
}

/// Verify a missing resource yields no env names.
#[test]
fn test_container_env_names_for_missing_resource() {
    let names = container_env_names(&webservice_manifests(), "Deployment/other");

    assert!(names.is_empty());
}

/// Verify env presence is asserted on the name only, never the value.
#[test]
fn test_container_env_present() {
    let expectation = Expectation::ContainerEnvPresent {
        resource: "Deployment/test-webservice".to_string(),
        name: "WORKHORSE_ARCHIVE_CACHE_DISABLED".to_string(),
    };

    assert!(expectation.evaluate(&success_outcome()).passed);
}

/// Verify env presence fails for an absent variable.
#[test]
fn test_container_env_present_misses() {
    let expectation = Expectation::ContainerEnvPresent {
        resource: "Deployment/test-webservice".to_string(),
        name: "WORKHORSE_ARCHIVE_CACHE".to_string(),
    };

    let result = expectation.evaluate(&success_outcome());

    assert!(!result.passed, "a name prefix must not count as present");
}

// ============================================================================
// Display
// ============================================================================

/// Verify expectations describe themselves readably.
#[test]
fn test_expectation_display() {
    assert_eq!(Expectation::ExitCode(0).to_string(), "exit code equals 0");

    let env = Expectation::ContainerEnvPresent {
        resource: "Deployment/web".to_string(),
        name: "PORT".to_string(),
    };
    assert_eq!(
        env.to_string(),
        "Deployment/web: container env contains 'PORT'"
    );

    let exists = Expectation::PathExists {
        resource: "Service/web".to_string(),
        path: QueryPath::parse("spec.ports[0]").unwrap(),
    };
    assert_eq!(exists.to_string(), "Service/web: 'spec.ports[0]' exists");
}
