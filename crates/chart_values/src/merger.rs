//! Values merging engine.
//!
//! This module implements the deep merge that combines a base values tree
//! with one or more override trees before the result is handed to a
//! manifest renderer.
//!
//! # Merge Policy
//!
//! For each key present in the overlay:
//! - absent from the base: the overlay value is copied into the result;
//! - present in both and both values are tables: the tables merge
//!   recursively, key by key;
//! - present in both and either value is not a table: the overlay value
//!   replaces the base value entirely. Sequences are replaced wholesale,
//!   never concatenated or element-merged.
//!
//! Keys present only in the base are carried into the result unchanged.
//! The result preserves key insertion order: base keys keep their original
//! positions (including keys merged recursively), and overlay-only keys
//! append in overlay order.
//!
//! Neither input is ever mutated, so a shared defaults tree can safely feed
//! many merges.

use crate::errors::{MergeError, MergeResult};
use crate::value::{ChartValue, ValuesTable};

#[cfg(test)]
#[path = "merger_tests.rs"]
mod tests;

/// Maximum nesting depth accepted by the merge engine.
///
/// Owned value trees cannot be cyclic, but adversarially deep input would
/// otherwise exhaust the stack. Exceeding the limit aborts the merge with
/// [`MergeError::StructureTooDeep`] and no partial result.
pub const MAX_MERGE_DEPTH: usize = 128;

/// Values merging engine.
///
/// This is a stateless component - it takes a base tree and an overlay tree
/// and produces a fresh merged tree without maintaining internal state, so
/// concurrent merges need no coordination.
///
/// # Examples
///
/// ```rust
/// use chart_values::{parse_values, ValuesMerger};
///
/// let base = parse_values("registry:\n  enabled: true\n  port: 5000").unwrap();
/// let overlay = parse_values("registry:\n  port: 5001").unwrap();
///
/// let merger = ValuesMerger::new();
/// let merged = merger.merge(&base, &overlay).unwrap();
///
/// let registry = merged.get("registry").unwrap();
/// assert_eq!(registry.get("enabled").and_then(|v| v.as_bool()), Some(true));
/// assert_eq!(registry.get("port").and_then(|v| v.as_i64()), Some(5001));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ValuesMerger {
    // Stateless - no fields needed for now
}

impl ValuesMerger {
    /// Creates a new values merger.
    pub fn new() -> Self {
        Self {}
    }

    /// Merges an overlay tree onto a base tree.
    ///
    /// Both inputs are borrowed and never mutated; the result is a fresh
    /// tree. When the two roots are not both tables, the overlay wins
    /// outright, consistent with the scalar-replacement policy.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::StructureTooDeep`] when the inputs nest deeper
    /// than [`MAX_MERGE_DEPTH`].
    pub fn merge(&self, base: &ChartValue, overlay: &ChartValue) -> MergeResult<ChartValue> {
        self.merge_value(base, overlay, 0)
    }

    /// Merges two tables key by key.
    ///
    /// Equivalent to [`merge`](Self::merge) on two table values, without
    /// wrapping the inputs.
    pub fn merge_tables(
        &self,
        base: &ValuesTable,
        overlay: &ValuesTable,
    ) -> MergeResult<ValuesTable> {
        self.merge_table(base, overlay, 0)
    }

    /// Folds a sequence of overlay trees onto a base tree, left to right.
    ///
    /// Layering is pairwise: `merge(merge(base, overlays[0]), overlays[1])`
    /// and so on. Merging is not commutative when keys conflict, so the
    /// overlay order is significant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chart_values::{parse_values, ValuesMerger};
    ///
    /// let base = parse_values("replicas: 1").unwrap();
    /// let layers = vec![
    ///     parse_values("replicas: 2").unwrap(),
    ///     parse_values("replicas: 3").unwrap(),
    /// ];
    ///
    /// let merged = ValuesMerger::new().merge_layers(&base, &layers).unwrap();
    /// assert_eq!(merged.get("replicas").and_then(|v| v.as_i64()), Some(3));
    /// ```
    pub fn merge_layers(
        &self,
        base: &ChartValue,
        overlays: &[ChartValue],
    ) -> MergeResult<ChartValue> {
        let mut merged = base.clone();
        for overlay in overlays {
            merged = self.merge(&merged, overlay)?;
        }
        Ok(merged)
    }

    fn merge_value(
        &self,
        base: &ChartValue,
        overlay: &ChartValue,
        depth: usize,
    ) -> MergeResult<ChartValue> {
        if depth > MAX_MERGE_DEPTH {
            return Err(MergeError::StructureTooDeep { depth });
        }

        match (base, overlay) {
            (ChartValue::Table(base_table), ChartValue::Table(overlay_table)) => Ok(
                ChartValue::Table(self.merge_table(base_table, overlay_table, depth)?),
            ),
            // Scalar or sequence on either side: the overlay replaces the
            // base value entirely.
            (_, overlay) => Ok(overlay.clone()),
        }
    }

    fn merge_table(
        &self,
        base: &ValuesTable,
        overlay: &ValuesTable,
        depth: usize,
    ) -> MergeResult<ValuesTable> {
        let mut merged = base.clone();
        for (key, overlay_value) in overlay {
            match merged.get_mut(key) {
                // Updating in place keeps the key at its base position.
                Some(slot) => {
                    let combined = self.merge_value(&*slot, overlay_value, depth + 1)?;
                    *slot = combined;
                }
                // Overlay-only keys append in overlay order.
                None => {
                    merged.insert(key.clone(), overlay_value.clone());
                }
            }
        }
        Ok(merged)
    }
}
