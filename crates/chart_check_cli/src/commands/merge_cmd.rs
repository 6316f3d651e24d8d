//! The `merge` subcommand: deep-merge values files and print the result.

use std::path::PathBuf;

use chart_values::{load_values_file, ChartValue, ValuesMerger};
use clap::{Args, ValueEnum};

use crate::errors::Error;

#[cfg(test)]
#[path = "merge_cmd_tests.rs"]
mod tests;

/// Arguments for the merge command.
#[derive(Args, Debug)]
pub struct MergeArgs {
    /// Values files, merged left to right (later files win on conflicts)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output format for the merged tree
    #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
    pub format: OutputFormat,
}

/// Serialization formats for the merged tree.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Yaml,
    Json,
}

/// Loads, merges, and prints the requested values files.
pub fn execute(args: &MergeArgs) -> Result<(), Error> {
    let merged = merge_files(&args.files)?;
    print!("{}", render_merged(&merged, args.format)?);
    Ok(())
}

/// Deep-merges the given files onto an empty base, left to right.
pub(crate) fn merge_files(paths: &[PathBuf]) -> Result<ChartValue, Error> {
    let merger = ValuesMerger::new();
    let mut merged = ChartValue::empty_table();
    for path in paths {
        let layer = load_values_file(path)?;
        merged = merger.merge(&merged, &layer)?;
    }
    Ok(merged)
}

/// Serializes a merged tree in the requested format.
pub(crate) fn render_merged(values: &ChartValue, format: OutputFormat) -> Result<String, Error> {
    match format {
        OutputFormat::Yaml => serde_yaml::to_string(values).map_err(|error| Error::Serialize {
            reason: error.to_string(),
        }),
        OutputFormat::Json => serde_json::to_string_pretty(values)
            .map(|rendered| rendered + "\n")
            .map_err(|error| Error::Serialize {
                reason: error.to_string(),
            }),
    }
}
