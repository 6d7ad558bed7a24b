//! Document parsing: whole text in, [`Table`] out.
//!
//! The parser is thin orchestration over [`RowTokenizer`] and
//! [`FieldCodec`]: split the text into lines, trim each, read the header
//! into the column list, then zip every remaining line's decoded fields
//! against the columns by position. Parsing is total; malformed input
//! degrades per line and surfaces only through the diagnostic sink.

use crate::codec::FieldCodec;
use crate::diag::{DiagnosticSink, LogSink};
use crate::dialect::Dialect;
use crate::record::{Record, Table, Value};
use crate::tokenizer::RowTokenizer;

/// Record key for fields beyond the end of the column list.
///
/// A row with more fields than the header has columns parks the extras
/// under this key, conceptually "no column name". All overflow fields of
/// one row collide here, so the last one wins.
pub const OVERFLOW_KEY: &str = "";

/// Parses whole document text into an in-memory [`Table`].
///
/// # Example
///
/// ```
/// use csv_table::{Dialect, TableParser, Value};
///
/// let parser = TableParser::new(Dialect::default());
/// let table = parser.parse("one,two\na,\"b,b.5\"");
/// assert_eq!(table.columns, ["one", "two"]);
/// assert_eq!(table.records[0]["two"], Value::from("b,b.5"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TableParser {
    dialect: Dialect,
}

impl TableParser {
    /// Creates a parser for the given dialect.
    #[must_use]
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }

    /// Parses `text`, sending diagnostics to the `tracing` log.
    ///
    /// Equivalent to [`parse_with_sink`](Self::parse_with_sink) with a
    /// [`LogSink`].
    #[must_use]
    pub fn parse(&self, text: &str) -> Table {
        self.parse_with_sink(text, &mut LogSink)
    }

    /// Parses `text`, sending diagnostics to `sink`.
    ///
    /// The document is split on `\n` and every line is trimmed of
    /// leading and trailing whitespace, which also absorbs the `\r` of
    /// Windows line endings. The first line is the header; its decoded
    /// fields become the column list in order, duplicates allowed. Body
    /// lines that are empty after trimming are discarded entirely.
    ///
    /// Each remaining body line is tokenized and decoded, and the i-th
    /// field is stored under the i-th column name. A row with fewer
    /// fields than columns leaves the trailing columns absent from its
    /// record; a row with more fields collapses the extras onto
    /// [`OVERFLOW_KEY`], last one winning.
    ///
    /// Empty input yields an empty table: no columns, no records.
    pub fn parse_with_sink(&self, text: &str, sink: &mut dyn DiagnosticSink) -> Table {
        let codec = FieldCodec::new(self.dialect);
        let tokenizer = RowTokenizer::new(self.dialect);

        let mut lines = text.split('\n').map(str::trim);
        // split() yields at least one element, even for "".
        let header = lines.next().unwrap_or_default();
        let columns: Vec<String> = if header.is_empty() {
            // An empty header line tokenizes to one empty field, but an
            // empty document has no columns at all.
            Vec::new()
        } else {
            tokenizer
                .split(header, sink)
                .map(|raw| codec.decode(raw))
                .collect()
        };

        let mut records = Vec::new();
        for line in lines {
            if line.is_empty() {
                continue;
            }
            let mut record = Record::new();
            for (index, raw) in tokenizer.split(line, sink).enumerate() {
                let column = columns.get(index).map_or(OVERFLOW_KEY, String::as_str);
                record.insert(column.to_string(), Value::Str(codec.decode(raw)));
            }
            records.push(record);
        }

        Table { columns, records }
    }
}
