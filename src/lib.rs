//! csv-table
//!
//! Conversion between a delimited-text tabular format (CSV) and an
//! in-memory table of ordered column names plus keyed records, and back.
//! Fields may contain the delimiter or quote characters themselves; the
//! escaping scheme is quote doubling with conditional wrapping.
//!
//! The crate is a pure library with no I/O: it receives raw text or an
//! in-memory [`Table`] and returns the other. Malformed input never
//! fails a parse; recovery is best-effort and observable only through
//! the diagnostic channel in [`diag`]. Quoted fields containing literal
//! line breaks are not supported, since documents are split into lines
//! before field tokenization begins.
//!
//! # Example
//!
//! ```
//! use csv_table::{Record, Value};
//!
//! let table = csv_table::parse("name,comment\nada,\"math, mostly\"");
//! assert_eq!(table.columns, ["name", "comment"]);
//! assert_eq!(table.records[0]["comment"], Value::from("math, mostly"));
//!
//! let records = vec![Record::from([
//!     ("name".to_string(), Value::from("ada")),
//!     ("age".to_string(), Value::Null),
//! ])];
//! assert_eq!(csv_table::serialize(&records).unwrap(), "name,age\nada,");
//! ```

pub mod codec;
pub mod diag;
pub mod dialect;
pub mod error;
pub mod parser;
pub mod record;
pub mod serializer;
pub mod tokenizer;

pub use codec::FieldCodec;
pub use diag::{Diagnostic, DiagnosticSink, LogSink};
pub use dialect::Dialect;
pub use error::CsvTableError;
pub use parser::{TableParser, OVERFLOW_KEY};
pub use record::{Record, Table, Value};
pub use serializer::TableSerializer;
pub use tokenizer::{RawFields, RowTokenizer};

/// Parses document text with the default dialect, logging diagnostics
/// through `tracing`.
///
/// See [`TableParser::parse`].
#[must_use]
pub fn parse(text: &str) -> Table {
    TableParser::new(Dialect::default()).parse(text)
}

/// Serializes records into document text with the default dialect.
///
/// See [`TableSerializer::serialize`].
///
/// # Errors
///
/// Returns [`CsvTableError::EmptyTable`] when `records` is empty.
pub fn serialize(records: &[Record]) -> Result<String, CsvTableError> {
    TableSerializer::new(Dialect::default()).serialize(records)
}

/// Serializes a bare column list into a header-only document with the
/// default dialect.
///
/// See [`TableSerializer::serialize_empty`].
#[must_use]
pub fn serialize_empty<S: AsRef<str>>(columns: &[S]) -> String {
    TableSerializer::new(Dialect::default()).serialize_empty(columns)
}
