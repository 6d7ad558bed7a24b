//! Non-fatal diagnostics for malformed input.
//!
//! Imported documents are typically user-supplied, so a single bad line
//! must not abort the whole parse. Recovery is silent in the returned
//! data; the only observable side effect is a [`Diagnostic`] delivered to
//! a [`DiagnosticSink`]. The sink is a capability passed into the parse
//! call rather than a global logger, which keeps the core testable:
//! tests collect into a `Vec<Diagnostic>`, production callers usually let
//! [`LogSink`] forward to `tracing`.

use thiserror::Error;

/// A non-fatal problem observed while tokenizing a line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A line ended while still inside a quoted region.
    ///
    /// The tokenizer closes the field at end of line and carries on; the
    /// affected field keeps the remainder of the line verbatim, embedded
    /// delimiters and partial quoting included.
    #[error("invalid CSV line: {line}")]
    UnterminatedQuote {
        /// The offending raw line, as seen by the tokenizer.
        line: String,
    },
}

/// Receiver for [`Diagnostic`]s raised during tokenization.
pub trait DiagnosticSink {
    /// Accepts one diagnostic.
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Collects diagnostics for later inspection. The sink of choice in tests.
impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Forwards diagnostics to `tracing::warn!`.
///
/// This is the default sink used by [`crate::TableParser::parse`].
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        tracing::warn!("{diagnostic}");
    }
}
