use crate::error::{Result, TreescopeError};
use serde::Serialize;
use std::fmt;

/// Zero-based region of the source. Columns are byte offsets into their line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    pub start_row: usize,
    pub start_column: usize,
    pub end_row: usize,
    pub end_column: usize,
}

impl Span {
    pub fn new(start_row: usize, start_column: usize, end_row: usize, end_column: usize) -> Self {
        Self {
            start_row,
            start_column,
            end_row,
            end_column,
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}] - [{}, {}]",
            self.start_row, self.start_column, self.end_row, self.end_column
        )
    }
}

/// The analyzed source split into lines. Immutable once constructed.
///
/// Lines end at `\n` or `\r\n` and are stored without their terminator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SourceLines {
    lines: Vec<String>,
}

impl SourceLines {
    pub fn new(source: &str) -> Self {
        Self {
            lines: source.lines().map(str::to_string).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(String::as_str)
    }

    /// Returns the exact text covered by `span`.
    ///
    /// A span on a single line yields the column slice of that line. A span
    /// crossing lines yields the tail of the first line, every line in between
    /// and the head of the last line, joined by `\n`.
    ///
    /// Terminators are not kept, so text extracted from a CRLF source across
    /// lines comes back with plain `\n` separators.
    pub fn extract(&self, span: Span) -> Result<String> {
        let malformed = || TreescopeError::MalformedSpan {
            span,
            line_count: self.lines.len(),
        };

        if span.end_row < span.start_row {
            return Err(malformed());
        }

        if span.start_row == span.end_row {
            let line = self.line(span.start_row).ok_or_else(malformed)?;
            return line
                .get(span.start_column..span.end_column)
                .map(str::to_string)
                .ok_or_else(malformed);
        }

        let first = self
            .line(span.start_row)
            .and_then(|l| l.get(span.start_column..))
            .ok_or_else(malformed)?;
        let last = self
            .line(span.end_row)
            .and_then(|l| l.get(..span.end_column))
            .ok_or_else(malformed)?;

        let mut text = String::from(first);
        for row in span.start_row + 1..span.end_row {
            text.push('\n');
            text.push_str(&self.lines[row]);
        }
        text.push('\n');
        text.push_str(last);
        Ok(text)
    }
}
