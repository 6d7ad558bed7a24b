//! Line tokenization: splitting one row into raw fields.
//!
//! A small two-state automaton walks the line once, byte by byte. In
//! `Normal` state a delimiter ends the current field; a quote switches to
//! `Escape` state, where every byte (delimiters included) belongs to the
//! field until the matching quote switches back. Both quote characters
//! stay in the emitted slice: unescaping is [`crate::FieldCodec`]'s job,
//! not the tokenizer's.
//!
//! Fields are yielded as slices borrowed from the input line. Slices are
//! only ever cut at delimiter positions or line ends, and the dialect
//! guarantees ASCII delimiters, so every cut lands on a UTF-8 boundary.

use crate::diag::{Diagnostic, DiagnosticSink};
use crate::dialect::Dialect;

/// Scanner state while walking a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Outside quotes; delimiters separate fields.
    Normal,
    /// Inside quotes; delimiters are ordinary bytes.
    Escape,
}

/// Splits one line of raw text into an ordered sequence of raw
/// (still-escaped) field substrings.
///
/// # Example
///
/// ```
/// use csv_table::{Diagnostic, Dialect, RowTokenizer};
///
/// let tokenizer = RowTokenizer::new(Dialect::default());
/// let mut diagnostics: Vec<Diagnostic> = Vec::new();
/// let fields: Vec<&str> = tokenizer
///     .split("a,\"b,c\",d", &mut diagnostics)
///     .collect();
/// assert_eq!(fields, ["a", "\"b,c\"", "d"]);
/// assert!(diagnostics.is_empty());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RowTokenizer {
    dialect: Dialect,
}

impl RowTokenizer {
    /// Creates a tokenizer for the given dialect.
    #[must_use]
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }

    /// Returns an iterator over the raw fields of `line`.
    ///
    /// `line` must be a single line: line splitting happens before
    /// tokenization, so a line break in the input is treated as an
    /// ordinary character.
    ///
    /// An unterminated quote does not fail. The field is closed at end
    /// of line, keeping the remainder of the line verbatim, and one
    /// [`Diagnostic::UnterminatedQuote`] is reported to `sink` at the
    /// moment that field is yielded.
    ///
    /// An empty line yields exactly one empty field. A trailing
    /// delimiter does not produce a trailing empty field: `"a,"` splits
    /// into `["a"]` while `"a,,"` splits into `["a", ""]`.
    pub fn split<'l, 's>(
        &self,
        line: &'l str,
        sink: &'s mut dyn DiagnosticSink,
    ) -> RawFields<'l, 's> {
        RawFields {
            line,
            dialect: self.dialect,
            pos: 0,
            done: false,
            sink,
        }
    }
}

/// Iterator over the raw field slices of a single line.
///
/// Created by [`RowTokenizer::split`]. Diagnostics are reported lazily,
/// as the malformed field is reached.
pub struct RawFields<'l, 's> {
    line: &'l str,
    dialect: Dialect,
    pos: usize,
    done: bool,
    sink: &'s mut dyn DiagnosticSink,
}

impl<'l> Iterator for RawFields<'l, '_> {
    type Item = &'l str;

    fn next(&mut self) -> Option<&'l str> {
        if self.done {
            return None;
        }
        let bytes = self.line.as_bytes();
        if self.pos >= bytes.len() {
            self.done = true;
            // Only an entirely empty line produces a field here; a line
            // consumed up to its end has already emitted its last field.
            return (self.pos == 0).then_some("");
        }

        let start = self.pos;
        let mut state = State::Normal;
        while let Some(&byte) = bytes.get(self.pos) {
            match state {
                State::Normal if byte == self.dialect.delimiter() => break,
                State::Normal if byte == self.dialect.quote() => {
                    state = State::Escape;
                    self.pos += 1;
                }
                State::Escape if byte == self.dialect.quote() => {
                    state = State::Normal;
                    self.pos += 1;
                }
                State::Normal | State::Escape => self.pos += 1,
            }
        }

        let field = &self.line[start..self.pos];
        if state == State::Escape {
            self.sink.report(Diagnostic::UnterminatedQuote {
                line: self.line.to_string(),
            });
        }

        if self.pos < bytes.len() {
            self.pos += 1; // step over the delimiter
        } else {
            self.done = true;
        }
        Some(field)
    }
}
