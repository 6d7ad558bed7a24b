//! Format dialect configuration.
//!
//! The delimiter and quote characters are process-wide read-only
//! configuration. They are injected into every component at construction
//! instead of being hardcoded in the scanning logic, so a future variant
//! (for example semicolon-delimited output) only needs a different
//! [`Dialect`] value.

use crate::error::CsvTableError;

/// The field delimiter and quote character of a delimited-text format.
///
/// Both characters must be ASCII and must differ from each other. The
/// ASCII restriction keeps the tokenizer's byte-level scan safe: field
/// slices are only ever cut at delimiter positions, and an ASCII byte is
/// always a UTF-8 character boundary.
///
/// # Example
///
/// ```
/// use csv_table::Dialect;
///
/// let csv = Dialect::default();
/// assert_eq!(csv.delimiter(), b',');
/// assert_eq!(csv.quote(), b'"');
///
/// let semicolons = Dialect::new(';', '"').unwrap();
/// assert_eq!(semicolons.delimiter(), b';');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dialect {
    delimiter: u8,
    quote: u8,
}

impl Default for Dialect {
    /// The standard dialect: `,` delimiter, `"` quote.
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
        }
    }
}

impl Dialect {
    /// Creates a dialect from a delimiter and a quote character.
    ///
    /// # Errors
    ///
    /// Returns [`CsvTableError::InvalidDialect`] if either character is
    /// not ASCII, if the two characters are equal, or if either is a line
    /// break (documents are split into lines before tokenization, so a
    /// line-break delimiter could never match).
    pub fn new(delimiter: char, quote: char) -> Result<Self, CsvTableError> {
        if !delimiter.is_ascii() || !quote.is_ascii() {
            return Err(CsvTableError::InvalidDialect(format!(
                "delimiter {delimiter:?} and quote {quote:?} must both be ASCII"
            )));
        }
        if delimiter == quote {
            return Err(CsvTableError::InvalidDialect(format!(
                "delimiter and quote must differ, got {delimiter:?} for both"
            )));
        }
        if delimiter == '\n' || delimiter == '\r' || quote == '\n' || quote == '\r' {
            return Err(CsvTableError::InvalidDialect(
                "delimiter and quote must not be line breaks".to_string(),
            ));
        }
        Ok(Self {
            delimiter: delimiter as u8,
            quote: quote as u8,
        })
    }

    /// The delimiter as a raw byte.
    #[must_use]
    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// The quote character as a raw byte.
    #[must_use]
    pub fn quote(&self) -> u8 {
        self.quote
    }

    /// The delimiter as a `char`.
    #[must_use]
    pub fn delimiter_char(&self) -> char {
        self.delimiter as char
    }

    /// The quote character as a `char`.
    #[must_use]
    pub fn quote_char(&self) -> char {
        self.quote as char
    }
}
