//! Configuration tree value model.
//!
//! Chart values form a recursively nested mapping from string keys to
//! scalars, sequences, or nested mappings. The model is a tagged variant
//! ([`ChartValue`]) over an insertion-order-preserving table type
//! ([`ValuesTable`]), so that merged output serializes with base keys first
//! and overlay-only keys appended, matching the order a chart author wrote.

use std::fmt;

use indexmap::IndexMap;
use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[cfg(test)]
#[path = "value_tests.rs"]
mod tests;

/// Insertion-order-preserving table of chart values.
pub type ValuesTable = IndexMap<String, ChartValue>;

/// A node in a chart values tree.
///
/// A value is one of: a scalar (null, boolean, integer, float, or string),
/// an ordered sequence of values, or a nested table of string keys to
/// values. This is the shape of a parsed Helm values file or a rendered
/// Kubernetes manifest document.
///
/// # Examples
///
/// ```rust
/// use chart_values::{ChartValue, ValuesTable};
///
/// let mut issuer = ValuesTable::new();
/// issuer.insert("email".to_string(), ChartValue::from("test@example.com"));
///
/// let mut root = ValuesTable::new();
/// root.insert("certmanager-issuer".to_string(), ChartValue::Table(issuer));
///
/// let values = ChartValue::Table(root);
/// assert_eq!(
///     values.get("certmanager-issuer").and_then(|v| v.get("email")).and_then(|v| v.as_str()),
///     Some("test@example.com"),
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ChartValue {
    /// YAML/JSON null.
    Null,
    /// Boolean scalar.
    Bool(bool),
    /// Integer scalar.
    Integer(i64),
    /// Floating-point scalar.
    Float(f64),
    /// String scalar.
    String(String),
    /// Ordered sequence of values.
    Sequence(Vec<ChartValue>),
    /// Nested table, preserving key insertion order.
    Table(ValuesTable),
}

impl ChartValue {
    /// Creates an empty table value.
    pub fn empty_table() -> Self {
        ChartValue::Table(ValuesTable::new())
    }

    /// Returns `true` if this value is a table.
    pub fn is_table(&self) -> bool {
        matches!(self, ChartValue::Table(_))
    }

    /// Returns `true` if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, ChartValue::Null)
    }

    /// Returns the table behind this value, if it is one.
    pub fn as_table(&self) -> Option<&ValuesTable> {
        match self {
            ChartValue::Table(table) => Some(table),
            _ => None,
        }
    }

    /// Returns the sequence behind this value, if it is one.
    pub fn as_sequence(&self) -> Option<&[ChartValue]> {
        match self {
            ChartValue::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the string behind this value, if it is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ChartValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the boolean behind this value, if it is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ChartValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer behind this value, if it is one.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ChartValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Looks up a key on a table value.
    ///
    /// Returns `None` when this value is not a table or the key is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chart_values::parse_values;
    ///
    /// let values = parse_values("replicas: 3").unwrap();
    /// assert_eq!(values.get("replicas").and_then(|v| v.as_i64()), Some(3));
    /// assert!(values.get("missing").is_none());
    /// ```
    pub fn get(&self, key: &str) -> Option<&ChartValue> {
        self.as_table().and_then(|table| table.get(key))
    }
}

impl Default for ChartValue {
    fn default() -> Self {
        ChartValue::Null
    }
}

impl From<bool> for ChartValue {
    fn from(value: bool) -> Self {
        ChartValue::Bool(value)
    }
}

impl From<i64> for ChartValue {
    fn from(value: i64) -> Self {
        ChartValue::Integer(value)
    }
}

impl From<f64> for ChartValue {
    fn from(value: f64) -> Self {
        ChartValue::Float(value)
    }
}

impl From<&str> for ChartValue {
    fn from(value: &str) -> Self {
        ChartValue::String(value.to_string())
    }
}

impl From<String> for ChartValue {
    fn from(value: String) -> Self {
        ChartValue::String(value)
    }
}

impl From<Vec<ChartValue>> for ChartValue {
    fn from(items: Vec<ChartValue>) -> Self {
        ChartValue::Sequence(items)
    }
}

impl From<ValuesTable> for ChartValue {
    fn from(table: ValuesTable) -> Self {
        ChartValue::Table(table)
    }
}

impl Serialize for ChartValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ChartValue::Null => serializer.serialize_unit(),
            ChartValue::Bool(b) => serializer.serialize_bool(*b),
            ChartValue::Integer(i) => serializer.serialize_i64(*i),
            ChartValue::Float(f) => serializer.serialize_f64(*f),
            ChartValue::String(s) => serializer.serialize_str(s),
            ChartValue::Sequence(items) => items.serialize(serializer),
            ChartValue::Table(table) => {
                let mut map = serializer.serialize_map(Some(table.len()))?;
                for (key, value) in table {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

struct ChartValueVisitor;

impl<'de> Visitor<'de> for ChartValueVisitor {
    type Value = ChartValue;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a chart values tree")
    }

    fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
        Ok(ChartValue::Bool(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
        Ok(ChartValue::Integer(value))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
        // Values past i64::MAX degrade to floats, as YAML integers do.
        match i64::try_from(value) {
            Ok(value) => Ok(ChartValue::Integer(value)),
            Err(_) => Ok(ChartValue::Float(value as f64)),
        }
    }

    fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
        Ok(ChartValue::Float(value))
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
        Ok(ChartValue::String(value.to_string()))
    }

    fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
        Ok(ChartValue::String(value))
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E> {
        Ok(ChartValue::Null)
    }

    fn visit_none<E>(self) -> Result<Self::Value, E> {
        Ok(ChartValue::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        ChartValue::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::new();
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(ChartValue::Sequence(items))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut table = ValuesTable::new();
        while let Some((key, value)) = map.next_entry::<String, ChartValue>()? {
            table.insert(key, value);
        }
        Ok(ChartValue::Table(table))
    }
}

impl<'de> Deserialize<'de> for ChartValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ChartValueVisitor)
    }
}
