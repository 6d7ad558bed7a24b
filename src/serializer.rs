//! Document serialization: records in, delimited text out.
//!
//! The column order of the output is the key order of the first record,
//! so callers control it through insertion order. Every record is
//! assumed to share the first record's key set; that assumption is not
//! verified, and divergent records silently produce misaligned columns.

use crate::codec::FieldCodec;
use crate::dialect::Dialect;
use crate::error::CsvTableError;
use crate::record::{Record, Value};

/// Serializes keyed records (or a bare column list) into document text.
///
/// An optional reserved key can be configured as a one-entry denylist:
/// frameworks that tag records with a synthetic identity key (the
/// original consumer's `$$hashKey`) can have that key dropped from the
/// output without the caller rewriting its records.
///
/// # Example
///
/// ```
/// use csv_table::{Dialect, Record, TableSerializer, Value};
///
/// let serializer = TableSerializer::new(Dialect::default());
/// let records = vec![Record::from([
///     ("one".to_string(), Value::from("1")),
///     ("two".to_string(), Value::from("2")),
/// ])];
/// assert_eq!(serializer.serialize(&records).unwrap(), "one,two\n1,2");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TableSerializer {
    dialect: Dialect,
    reserved_key: Option<String>,
}

impl TableSerializer {
    /// Creates a serializer for the given dialect, with no reserved key.
    #[must_use]
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            reserved_key: None,
        }
    }

    /// Configures the reserved key to drop from the output.
    #[must_use]
    pub fn with_reserved_key(mut self, key: impl Into<String>) -> Self {
        self.reserved_key = Some(key.into());
        self
    }

    /// Serializes records into a document: header line plus one line per
    /// record, joined with `\n` and no trailing newline.
    ///
    /// Column order comes from the first record's keys, minus the
    /// reserved key if configured. For every column, a record's value is
    /// looked up by key; an absent key and a [`Value::Null`] both encode
    /// to the empty field, while an empty string encodes to the
    /// quoted-empty sentinel.
    ///
    /// # Errors
    ///
    /// Returns [`CsvTableError::EmptyTable`] when `records` is empty;
    /// there is no first record to take the header from. Use
    /// [`serialize_empty`](Self::serialize_empty) for header-only
    /// output.
    pub fn serialize(&self, records: &[Record]) -> Result<String, CsvTableError> {
        let first = records.first().ok_or(CsvTableError::EmptyTable)?;
        let codec = FieldCodec::new(self.dialect);
        let delimiter = self.dialect.delimiter_char().to_string();

        let columns: Vec<&str> = first
            .keys()
            .map(String::as_str)
            .filter(|key| self.reserved_key.as_deref() != Some(*key))
            .collect();

        let mut document = columns
            .iter()
            .map(|column| codec.encode(Some(*column)))
            .collect::<Vec<_>>()
            .join(&delimiter);

        for record in records {
            let row = columns
                .iter()
                .map(|column| codec.encode(record.get(*column).and_then(Value::as_str)))
                .collect::<Vec<_>>()
                .join(&delimiter);
            document.push('\n');
            document.push_str(&row);
        }

        Ok(document)
    }

    /// Serializes a bare column list into a header-only document, with
    /// no trailing newline.
    #[must_use]
    pub fn serialize_empty<S: AsRef<str>>(&self, columns: &[S]) -> String {
        let codec = FieldCodec::new(self.dialect);
        let delimiter = self.dialect.delimiter_char().to_string();
        columns
            .iter()
            .map(|column| codec.encode(Some(column.as_ref())))
            .collect::<Vec<_>>()
            .join(&delimiter)
    }
}
