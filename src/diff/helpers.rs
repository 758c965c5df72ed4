//! Header-line parsing for unified diffs.

use regex::bytes::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

use super::api::Interval;
use super::error::{ParseErrorKind, RangeError, Side};

static PATH_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?-u)^(?:---|\+\+\+) ([^\t\n"\\]+)[\t\n]"#).expect("Invalid path header regex")
});

static HUNK_HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u)^@@ -(\d+)(?:,(\d+))? \+(\d+)(?:,(\d+))? @@").expect("Invalid hunk header regex")
});

/// Source and destination ranges announced by a `@@` line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(super) struct HunkHeader {
    pub src: Interval,
    pub dst: Interval,
}

/// Extract the path from a `--- path` or `+++ path` line.
///
/// The path runs up to the first tab or newline and may not contain a
/// double quote or backslash (quoted git paths are rejected). Bytes that are
/// not UTF-8 are replaced with U+FFFD.
pub(super) fn parse_path(line: &[u8]) -> Result<Cow<'_, str>, ParseErrorKind> {
    PATH_REGEX
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| String::from_utf8_lossy(m.as_bytes()))
        .ok_or(ParseErrorKind::InvalidPathHeader)
}

/// Parse `@@ -s[,c] +s[,c] @@...` into a pair of intervals.
pub(super) fn parse_hunk_header(line: &[u8]) -> Result<HunkHeader, ParseErrorKind> {
    let caps = HUNK_HEADER_REGEX
        .captures(line)
        .ok_or(ParseErrorKind::InvalidHunkHeader)?;

    // Captures are ASCII digits.
    let field = |i: usize| caps.get(i).and_then(|m| std::str::from_utf8(m.as_bytes()).ok());

    let src = parse_range(field(1).unwrap_or_default(), field(2))
        .map_err(|error| ParseErrorKind::InvalidRange { side: Side::Src, error })?;
    let dst = parse_range(field(3).unwrap_or_default(), field(4))
        .map_err(|error| ParseErrorKind::InvalidRange { side: Side::Dst, error })?;

    if src.is_empty() && dst.is_empty() {
        return Err(ParseErrorKind::EmptyHunk);
    }

    Ok(HunkHeader { src, dst })
}

/// Turn a `start[,count]` pair into a half-open interval.
///
/// A zero count names the gap after line `start`, so the interval is
/// anchored at `start + 1`. Line 0 does not exist.
pub(super) fn parse_range(start: &str, count: Option<&str>) -> Result<Interval, RangeError> {
    let mut start: u64 = start.parse().map_err(RangeError::InvalidStart)?;
    let count: u64 = match count {
        Some(c) => c.parse().map_err(RangeError::InvalidCount)?,
        None => 1,
    };

    if count == 0 {
        start = start.checked_add(1).ok_or(RangeError::StartOutOfRange)?;
    }
    if start == 0 {
        return Err(RangeError::StartOutOfRange);
    }
    let stop = start
        .checked_add(count)
        .ok_or(RangeError::StopOutOfRange)?;

    Ok(Interval::new(start, stop))
}
