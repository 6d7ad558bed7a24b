//! Error module
//!
//! Defines the crate error type using `thiserror`. Errors here cover API
//! misuse only; malformed document input never fails. Parsing recovers
//! with a best-effort result and signals problems through the diagnostic
//! channel in [`crate::diag`] instead.

use thiserror::Error;

/// The error type for table/text conversion.
///
/// Parsing untrusted text is total and never returns this type. The two
/// cases below are programming errors on the calling side: building a
/// dialect the scanner cannot support, or asking for a document from
/// nothing.
#[derive(Error, Debug)]
pub enum CsvTableError {
    /// The requested delimiter/quote pair cannot drive the tokenizer.
    ///
    /// Produced by [`crate::Dialect::new`] for non-ASCII characters,
    /// equal characters, or line-break characters.
    #[error("invalid dialect: {0}")]
    InvalidDialect(String),

    /// `serialize` was called with zero records.
    ///
    /// The column list is derived from the first record, so an empty
    /// record set has no well-defined header. Use
    /// [`crate::TableSerializer::serialize_empty`] to produce a
    /// header-only document.
    #[error("cannot serialize zero records; use serialize_empty for a header-only document")]
    EmptyTable,
}
