//! The `check` subcommand: render a chart and evaluate expectations.

use std::path::PathBuf;

use chart_check_core::{CheckScenario, Expectation, HelmCliRenderer, ScenarioReport};
use chart_values::{load_values_file, ChartValue};
use clap::Args;
use manifest_query::QueryPath;

use crate::errors::Error;

#[cfg(test)]
#[path = "check_cmd_tests.rs"]
mod tests;

/// Arguments for the check command.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to the chart directory
    #[arg(long)]
    pub chart: PathBuf,

    /// Release name passed to the renderer
    #[arg(long, default_value = "test")]
    pub release: String,

    /// Values files layered left to right onto an empty base
    #[arg(long = "values")]
    pub values: Vec<PathBuf>,

    /// Expected renderer exit code
    #[arg(long = "expect-exit", default_value_t = 0)]
    pub expect_exit: i32,

    /// Require an env var on a workload's containers, as RESOURCE=NAME
    /// (e.g. Deployment/test-webservice=WORKHORSE_ARCHIVE_CACHE_DISABLED)
    #[arg(long = "expect-env", value_parser = parse_env_expectation)]
    pub expect_env: Vec<(String, String)>,

    /// Require a path to resolve on a resource, as RESOURCE=PATH
    /// (e.g. Deployment/test-webservice=spec.template.spec.containers[0])
    #[arg(long = "expect-path", value_parser = parse_path_expectation)]
    pub expect_path: Vec<(String, QueryPath)>,

    /// Helm binary to invoke (defaults to `helm` on PATH)
    #[arg(long = "helm-binary")]
    pub helm_binary: Option<PathBuf>,
}

/// Parses a RESOURCE=NAME env expectation.
pub fn parse_env_expectation(s: &str) -> Result<(String, String), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid RESOURCE=NAME: no `=` found in `{}`", s))?;
    Ok((s[..pos].to_string(), s[pos + 1..].to_string()))
}

/// Parses a RESOURCE=PATH query expectation.
pub fn parse_path_expectation(s: &str) -> Result<(String, QueryPath), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid RESOURCE=PATH: no `=` found in `{}`", s))?;
    let path = QueryPath::parse(&s[pos + 1..]).map_err(|error| error.to_string())?;
    Ok((s[..pos].to_string(), path))
}

/// Runs the check and prints a report.
///
/// Returns `Ok(true)` when every expectation held, `Ok(false)` when any
/// failed, and `Err` when the check could not be run at all.
pub fn execute(args: &CheckArgs) -> Result<bool, Error> {
    let scenario = build_scenario(args)?;

    let mut renderer = HelmCliRenderer::new(&args.chart, &args.release);
    if let Some(binary) = &args.helm_binary {
        renderer = renderer.with_helm_binary(binary);
    }

    let report = scenario.run(&renderer)?;
    print_report(&report);
    Ok(report.passed())
}

/// Assembles the scenario from loaded values layers and expectations.
pub(crate) fn build_scenario(args: &CheckArgs) -> Result<CheckScenario, Error> {
    let mut scenario = CheckScenario::new(args.release.clone(), ChartValue::empty_table());

    for path in &args.values {
        scenario = scenario.with_override(load_values_file(path)?);
    }

    scenario = scenario.with_expectation(Expectation::ExitCode(args.expect_exit));
    for (resource, name) in &args.expect_env {
        scenario = scenario.with_expectation(Expectation::ContainerEnvPresent {
            resource: resource.clone(),
            name: name.clone(),
        });
    }
    for (resource, path) in &args.expect_path {
        scenario = scenario.with_expectation(Expectation::PathExists {
            resource: resource.clone(),
            path: path.clone(),
        });
    }

    Ok(scenario)
}

fn print_report(report: &ScenarioReport) {
    for result in &report.results {
        let status = if result.passed { "PASS" } else { "FAIL" };
        println!("{} {}", status, result.expectation);
        if !result.passed {
            println!("     {}", result.detail);
        }
    }

    let failed = report.failures().count();
    if failed == 0 {
        println!(
            "{}: {} expectation(s) passed",
            report.scenario,
            report.results.len()
        );
    } else {
        println!(
            "{}: {} of {} expectation(s) failed",
            report.scenario,
            failed,
            report.results.len()
        );
    }
}
