//! Single-field encoding and decoding.
//!
//! The escaping scheme is escape-by-doubling: a quote character inside a
//! value is written twice, and a value containing the delimiter or a
//! quote is wrapped in one pair of quotes. Two empty-looking wire forms
//! carry different meanings on the way out: an absent/null value encodes
//! to nothing, while a present-but-empty string encodes to the
//! quoted-empty sentinel (two quote characters). Decoding maps both back
//! to the empty string; the asymmetry is intentional and kept as is so
//! existing documents keep their meaning.

use crate::dialect::Dialect;

/// Encodes scalar values into escaped fields and decodes them back.
///
/// Pure and stateless; both operations are total, so no input produces
/// an error.
///
/// # Example
///
/// ```
/// use csv_table::{Dialect, FieldCodec};
///
/// let codec = FieldCodec::new(Dialect::default());
/// assert_eq!(codec.encode(None), "");
/// assert_eq!(codec.encode(Some("")), "\"\"");
/// assert_eq!(codec.encode(Some("a,b")), "\"a,b\"");
/// assert_eq!(codec.decode("\"a,b\""), "a,b");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldCodec {
    dialect: Dialect,
}

impl FieldCodec {
    /// Creates a codec for the given dialect.
    #[must_use]
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }

    /// Encodes one scalar value into an escaped field.
    ///
    /// `None` covers both null and absent values and becomes the
    /// unquoted empty field. `Some("")` becomes the quoted-empty
    /// sentinel. Any other value has its quote characters doubled and is
    /// wrapped in quotes only when it contains the delimiter or a quote.
    #[must_use]
    pub fn encode(&self, value: Option<&str>) -> String {
        let quote = self.dialect.quote_char();
        let Some(value) = value else {
            return String::new();
        };
        if value.is_empty() {
            return format!("{quote}{quote}");
        }

        let escaped = value.replace(quote, &format!("{quote}{quote}"));
        if !escaped.contains(self.dialect.delimiter_char()) && !escaped.contains(quote) {
            escaped
        } else {
            format!("{quote}{escaped}{quote}")
        }
    }

    /// Decodes one escaped field back into a plain string.
    ///
    /// Strips at most one layer of wrapping quotes (only when the field
    /// starts and ends with the quote character and is at least two
    /// bytes long), then undoubles every doubled quote. Null and empty
    /// string both come back as `""`; the wire distinction is not
    /// recoverable.
    #[must_use]
    pub fn decode(&self, field: &str) -> String {
        let quote = self.dialect.quote_char();
        let wrapped = field.len() >= 2 && field.starts_with(quote) && field.ends_with(quote);
        let inner = if wrapped {
            &field[1..field.len() - 1]
        } else {
            field
        };
        inner.replace(&format!("{quote}{quote}"), &quote.to_string())
    }
}
