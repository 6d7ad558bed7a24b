//! Tabular data model: scalar values, keyed records, and whole tables.
//!
//! Everything here is transient and caller-owned. A [`Table`] is built
//! fresh on every parse and consumed on every serialize; no state is
//! shared or cached between calls.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A scalar cell value: a string or null.
///
/// The third scalar state, *absence*, is a missing key in the
/// [`Record`] map rather than a `Value` variant. `Null` and
/// absence both serialize to an unquoted empty field; only `Str("")`
/// produces the quoted-empty sentinel. Decoding cannot reverse that
/// distinction, so parsed tables only ever contain `Str` values.
///
/// Serialized through serde as an untagged value: `Null` maps to JSON
/// null and `Str` to a plain string.
///
/// # Example
///
/// ```
/// use csv_table::Value;
///
/// assert_eq!(Value::from("x").as_str(), Some("x"));
/// assert_eq!(Value::Null.as_str(), None);
/// assert!(Value::from(None).is_null());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// An intentionally empty cell; encodes to an unquoted empty field.
    Null,
    /// A present string value, possibly empty.
    Str(String),
}

impl Value {
    /// Returns the contained string, or `None` for [`Value::Null`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            Value::Null => None,
        }
    }

    /// Returns `true` for [`Value::Null`].
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<Option<String>> for Value {
    fn from(s: Option<String>) -> Self {
        match s {
            Some(s) => Value::Str(s),
            None => Value::Null,
        }
    }
}

/// One row of a table: a mapping from column name to cell value.
///
/// Backed by [`IndexMap`] so that key order is insertion order. The
/// serializer relies on this to read the column order off the first
/// record, and the parser relies on insert-overwrite semantics when a
/// header contains duplicate column names (the later position wins while
/// the key keeps its first slot).
pub type Record = IndexMap<String, Value>;

/// An in-memory table: the ordered column list plus its records.
///
/// When well formed, every record's key set is a subset of `columns`.
/// That invariant is documented, not enforced: rows with too few fields
/// parse into records that are missing trailing columns, and rows with
/// too many fields park the extras under
/// [`crate::parser::OVERFLOW_KEY`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Column names in document order. Duplicates are legal.
    pub columns: Vec<String>,
    /// Parsed rows, in document order.
    pub records: Vec<Record>,
}
