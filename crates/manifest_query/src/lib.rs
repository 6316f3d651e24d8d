//! Navigable rendered-manifest structures for ChartCheck.
//!
//! A manifest renderer produces a set of Kubernetes documents. This crate
//! indexes those documents by resource id (`Kind/name`) and supports deep
//! queries into them by a path of keys and sequence indices, e.g.
//! `spec.template.spec.containers[0].env`. Misses are data ("not found"),
//! never errors.

// Query path parsing
pub mod path;

// Document set and traversal
pub mod document;

// Error types
pub mod errors;

// Re-export for convenient access
pub use document::ManifestSet;
pub use errors::{QueryError, QueryResult};
pub use path::{PathSegment, QueryPath};
