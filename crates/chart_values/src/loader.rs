//! Loading chart values from YAML.
//!
//! Values files are YAML documents. Empty or null documents parse to an
//! empty table, matching how Helm treats an empty values file, so merging
//! a freshly loaded empty layer is an identity operation.

use std::path::Path;

use tracing::debug;

use crate::errors::{ValuesError, ValuesResult};
use crate::value::{ChartValue, ValuesTable};

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;

/// Parses a YAML document into a values tree.
///
/// Document order is preserved in the resulting tables. Mapping keys must
/// be strings; anything else is a parse error.
///
/// # Examples
///
/// ```rust
/// use chart_values::parse_values;
///
/// let values = parse_values("gitlab:\n  webservice:\n    enabled: true").unwrap();
/// let webservice = values.get("gitlab").and_then(|v| v.get("webservice")).unwrap();
/// assert_eq!(webservice.get("enabled").and_then(|v| v.as_bool()), Some(true));
/// ```
pub fn parse_values(input: &str) -> ValuesResult<ChartValue> {
    if input.trim().is_empty() {
        return Ok(ChartValue::Table(ValuesTable::new()));
    }

    let parsed: ChartValue =
        serde_yaml::from_str(input).map_err(|error| ValuesError::ParseError {
            reason: error.to_string(),
        })?;

    // A document containing only `null` behaves like an empty values file.
    if parsed.is_null() {
        return Ok(ChartValue::Table(ValuesTable::new()));
    }

    Ok(parsed)
}

/// Loads a values tree from a YAML file on disk.
///
/// # Errors
///
/// Returns [`ValuesError::FileNotFound`] when the path does not exist,
/// [`ValuesError::FileAccessError`] when it cannot be read, and
/// [`ValuesError::ParseError`] when the contents are not valid YAML.
pub fn load_values_file(path: impl AsRef<Path>) -> ValuesResult<ChartValue> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ValuesError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let contents = std::fs::read_to_string(path).map_err(|error| ValuesError::FileAccessError {
        path: path.display().to_string(),
        reason: error.to_string(),
    })?;

    debug!(path = %path.display(), bytes = contents.len(), "loaded values file");

    parse_values(&contents)
}
