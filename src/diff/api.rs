//! Public API for diff parsing.

use serde::Serialize;
use std::io::{BufReader, Read};

use super::error::{ParseError, ParseErrorKind};
use super::parser::Parser;
use crate::scanner::LineSource;

/// A half-open range `[start, stop)` of 1-based line numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Interval {
    pub start: u64,
    pub stop: u64,
}

impl Interval {
    pub fn new(start: u64, stop: u64) -> Self {
        Self { start, stop }
    }

    /// An interval with `start >= stop` holds no lines.
    pub fn is_empty(&self) -> bool {
        self.start >= self.stop
    }
}

/// The changed regions of one destination file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Diff {
    /// Path from the `+++` header.
    pub dst_path: String,
    /// Sorted, non-overlapping, non-adjacent destination-line intervals.
    pub dst_changes: Vec<Interval>,
}

/// Parse a unified diff into per-file changed destination intervals.
///
/// The whole stream is consumed. Any malformed or truncated input rejects
/// the entire diff; the error carries the line it was detected on.
///
/// # Example
///
/// ```
/// use linescope::diff::{parse, Interval};
///
/// let input = "--- a/f\n+++ b/f\n@@ -0,0 +1,2 @@\n+a\n+b\n";
/// let diffs = parse(input.as_bytes()).unwrap();
/// assert_eq!(diffs[0].dst_path, "b/f");
/// assert_eq!(diffs[0].dst_changes, vec![Interval::new(1, 3)]);
/// ```
pub fn parse<R: Read>(reader: R) -> Result<Vec<Diff>, ParseError> {
    let mut lines = LineSource::new(BufReader::new(reader));
    let mut parser = Parser::default();

    while lines.advance() {
        parser
            .feed_line(lines.current())
            .map_err(|kind| ParseError::new(lines.current_line(), kind))?;
    }
    if let Some(err) = lines.take_error() {
        return Err(ParseError::new(err.line, ParseErrorKind::Io(err.source)));
    }

    let line = lines.current_line();
    parser.finish().map_err(|kind| ParseError::new(line, kind))
}
