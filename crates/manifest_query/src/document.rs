//! Rendered manifest sets.
//!
//! A render pass yields a stream of Kubernetes documents. [`ManifestSet`]
//! indexes them by resource id (`Kind/name`, e.g.
//! `Deployment/test-webservice`) in render order and supports deep queries
//! with a [`QueryPath`]. Lookups that miss return `None`; a missing
//! resource, key, or index is an answer, not a failure.

use chart_values::ChartValue;
use indexmap::IndexMap;
use tracing::warn;

use crate::path::{PathSegment, QueryPath};

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;

/// An ordered collection of rendered manifest documents keyed by
/// `Kind/name`.
///
/// # Examples
///
/// ```rust
/// use chart_values::parse_values;
/// use manifest_query::{ManifestSet, QueryPath};
///
/// let deployment = parse_values(
///     "kind: Deployment\nmetadata:\n  name: web\nspec:\n  replicas: 2",
/// )
/// .unwrap();
///
/// let manifests = ManifestSet::from_documents(vec![deployment]);
/// let path = QueryPath::parse("spec.replicas").unwrap();
///
/// assert_eq!(
///     manifests.dig("Deployment/web", &path).and_then(|v| v.as_i64()),
///     Some(2),
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ManifestSet {
    resources: IndexMap<String, ChartValue>,
}

impl ManifestSet {
    /// Creates an empty manifest set.
    pub fn new() -> Self {
        Self {
            resources: IndexMap::new(),
        }
    }

    /// Indexes a list of parsed documents by `kind` and `metadata.name`.
    ///
    /// Documents missing either field are skipped with a warning; a render
    /// stream can legitimately contain separators or non-object documents.
    pub fn from_documents(documents: Vec<ChartValue>) -> Self {
        let mut set = Self::new();
        for document in documents {
            let kind = document.get("kind").and_then(|v| v.as_str());
            let name = document
                .get("metadata")
                .and_then(|v| v.get("name"))
                .and_then(|v| v.as_str());

            match (kind, name) {
                (Some(kind), Some(name)) => {
                    let kind = kind.to_string();
                    let name = name.to_string();
                    set.insert(&kind, &name, document);
                }
                _ => {
                    warn!("skipping manifest document without kind and metadata.name");
                }
            }
        }
        set
    }

    /// Inserts a document under `Kind/name`.
    ///
    /// A later document with the same id replaces the earlier one.
    pub fn insert(&mut self, kind: &str, name: &str, document: ChartValue) {
        self.resources
            .insert(format!("{}/{}", kind, name), document);
    }

    /// Returns the document for a resource id, if rendered.
    pub fn get(&self, resource_id: &str) -> Option<&ChartValue> {
        self.resources.get(resource_id)
    }

    /// Walks a query path through a resource's document.
    ///
    /// Keys resolve against tables and indices against sequences; any
    /// missing resource, absent key, out-of-range index, or shape mismatch
    /// yields `None`.
    pub fn dig(&self, resource_id: &str, path: &QueryPath) -> Option<&ChartValue> {
        let mut current = self.get(resource_id)?;
        for segment in path.iter() {
            current = match segment {
                PathSegment::Key(key) => current.as_table()?.get(key)?,
                PathSegment::Index(index) => current.as_sequence()?.get(*index)?,
            };
        }
        Some(current)
    }

    /// The resource ids in render order.
    pub fn resource_ids(&self) -> impl Iterator<Item = &str> {
        self.resources.keys().map(String::as_str)
    }

    /// Number of rendered resources.
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Whether the set holds no resources.
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}
