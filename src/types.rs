//! Type definitions for CSV rows and field values

use chrono::NaiveDateTime;
use indexmap::IndexMap;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::BuildHasher;

/// Format used for the canonical text of [`CellValue::DateTime`]
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One parsed record: column name to field text, in header order
pub type Row = IndexMap<String, String>;

/// Ordered sequence of rows, in input order
pub type Table = Vec<Row>;

/// A single field value handed to the serializer
///
/// Every variant has a canonical string form (see [`CellValue::as_string`]).
/// `Empty` stands for a null or absent field: it serializes to an empty
/// string and is never quoted.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellValue {
    /// Null / missing field
    #[default]
    Empty,
    /// Text value
    String(String),
    /// Integer value
    Int(i64),
    /// Float value
    Float(f64),
    /// Boolean value
    Bool(bool),
    /// Timestamp, rendered as `YYYY-MM-DD HH:MM:SS`
    DateTime(NaiveDateTime),
}

impl CellValue {
    /// Convert cell value to its canonical string form
    pub fn as_string(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::String(s) => s.clone(),
            CellValue::Int(i) => itoa::Buffer::new().format(*i).to_string(),
            CellValue::Float(f) => f.to_string(),
            CellValue::Bool(b) => b.to_string(),
            CellValue::DateTime(d) => d.format(DATETIME_FORMAT).to_string(),
        }
    }

    /// Check if cell is the null value
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(s)
    }
}

impl From<&String> for CellValue {
    fn from(s: &String) -> Self {
        CellValue::String(s.clone())
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Int(i)
    }
}

impl From<i32> for CellValue {
    fn from(i: i32) -> Self {
        CellValue::Int(i64::from(i))
    }
}

impl From<u32> for CellValue {
    fn from(i: u32) -> Self {
        CellValue::Int(i64::from(i))
    }
}

impl From<f64> for CellValue {
    fn from(f: f64) -> Self {
        CellValue::Float(f)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(d: NaiveDateTime) -> Self {
        CellValue::DateTime(d)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(CellValue::Empty, Into::into)
    }
}

/// A row-like mapping the serializer can project onto a column list
///
/// A column the record does not carry yields [`CellValue::Empty`].
pub trait Record {
    /// Look up the value stored under `column`
    fn field(&self, column: &str) -> CellValue;
}

impl<V, S> Record for IndexMap<String, V, S>
where
    V: Clone + Into<CellValue>,
    S: BuildHasher,
{
    fn field(&self, column: &str) -> CellValue {
        self.get(column).cloned().map_or(CellValue::Empty, Into::into)
    }
}

impl<V, S> Record for HashMap<String, V, S>
where
    V: Clone + Into<CellValue>,
    S: BuildHasher,
{
    fn field(&self, column: &str) -> CellValue {
        self.get(column).cloned().map_or(CellValue::Empty, Into::into)
    }
}

impl<V> Record for BTreeMap<String, V>
where
    V: Clone + Into<CellValue>,
{
    fn field(&self, column: &str) -> CellValue {
        self.get(column).cloned().map_or(CellValue::Empty, Into::into)
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn field(&self, column: &str) -> CellValue {
        (**self).field(column)
    }
}
