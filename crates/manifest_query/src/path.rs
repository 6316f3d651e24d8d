//! Query paths into rendered manifest documents.
//!
//! A query path is an ordered list of segments, each either a table key or
//! a sequence index. The textual form uses dots between keys and bracketed
//! indices, mirroring how chart tests spell out locations inside a rendered
//! document: `spec.template.spec.containers[0].env`.

use std::fmt;
use std::str::FromStr;

use crate::errors::{QueryError, QueryResult};

#[cfg(test)]
#[path = "path_tests.rs"]
mod tests;

/// One step of a query path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// A string key resolved against a table.
    Key(String),
    /// A numeric index resolved against a sequence.
    Index(usize),
}

/// An ordered path of keys and indices into a document tree.
///
/// # Examples
///
/// ```rust
/// use manifest_query::{PathSegment, QueryPath};
///
/// let path = QueryPath::parse("spec.containers[0].name").unwrap();
/// assert_eq!(
///     path.segments(),
///     &[
///         PathSegment::Key("spec".to_string()),
///         PathSegment::Key("containers".to_string()),
///         PathSegment::Index(0),
///         PathSegment::Key("name".to_string()),
///     ],
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPath {
    segments: Vec<PathSegment>,
}

impl QueryPath {
    /// Builds a path directly from segments, without parsing.
    pub fn from_segments(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }

    /// Parses the dotted textual form.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidPath`] for empty paths, empty keys,
    /// non-numeric or unterminated index brackets, and trailing characters
    /// after an index.
    pub fn parse(input: &str) -> QueryResult<Self> {
        if input.is_empty() {
            return Err(QueryError::InvalidPath {
                path: input.to_string(),
                reason: "path is empty".to_string(),
            });
        }

        let mut segments = Vec::new();
        for part in input.split('.') {
            parse_part(input, part, &mut segments)?;
        }

        Ok(Self { segments })
    }

    /// The segments of this path, in order.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Iterates over the segments in order.
    pub fn iter(&self) -> std::slice::Iter<'_, PathSegment> {
        self.segments.iter()
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl FromStr for QueryPath {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for QueryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Key(key) => {
                    if position > 0 {
                        f.write_str(".")?;
                    }
                    f.write_str(key)?;
                }
                PathSegment::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}

/// Parses one dot-separated part: a key with zero or more `[index]`
/// suffixes, or bare `[index]` suffixes continuing the previous part.
fn parse_part(path: &str, part: &str, segments: &mut Vec<PathSegment>) -> QueryResult<()> {
    if part.is_empty() {
        return Err(QueryError::InvalidPath {
            path: path.to_string(),
            reason: "empty key segment".to_string(),
        });
    }

    let (key, mut rest) = match part.find('[') {
        Some(0) => (None, part),
        Some(bracket) => (Some(&part[..bracket]), &part[bracket..]),
        None => (Some(part), ""),
    };

    if let Some(key) = key {
        segments.push(PathSegment::Key(key.to_string()));
    }

    while !rest.is_empty() {
        if !rest.starts_with('[') {
            return Err(QueryError::InvalidPath {
                path: path.to_string(),
                reason: format!("unexpected characters after index: {}", rest),
            });
        }
        let close = rest.find(']').ok_or_else(|| QueryError::InvalidPath {
            path: path.to_string(),
            reason: "unterminated index bracket".to_string(),
        })?;
        let index: usize = rest[1..close]
            .parse()
            .map_err(|_| QueryError::InvalidPath {
                path: path.to_string(),
                reason: format!("invalid sequence index: {}", &rest[1..close]),
            })?;
        segments.push(PathSegment::Index(index));
        rest = &rest[close + 1..];
    }

    Ok(())
}
