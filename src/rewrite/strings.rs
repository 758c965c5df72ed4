//! Merge runs of adjacent string literals on changed lines.
//!
//! `"foo" "bar"` (or the same split across lines) becomes `"foobar"` when
//! the run touches a changed interval. Works on raw bytes, so files that are
//! not valid UTF-8 pass through unchanged outside the rewritten runs.

use regex::bytes::{Match, Regex};
use std::sync::LazyLock;

use super::ChangedLines;
use crate::diff::Interval;

const STRING_PATTERN: &str = r#""(?:[^\n"\\]|\\[^\n])*""#;

static STRING_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("(?-u){STRING_PATTERN}")).expect("Invalid string literal regex")
});

static STRINGS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?-u){STRING_PATTERN}(?:\s*{STRING_PATTERN})*"
    ))
    .expect("Invalid string run regex")
});

/// Return `content` with every changed run of adjacent literals squashed.
pub fn squash_changed_strings(changes: &[Interval], content: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(content.len());
    let mut changed = ChangedLines::new(changes);
    let mut line: u64 = 1;
    let mut copied = 0;

    for run in STRINGS_REGEX.find_iter(content) {
        let prefix = &content[copied..run.start()];
        line += count_newlines(prefix);
        let first = line;
        line += count_newlines(run.as_bytes());

        out.extend_from_slice(prefix);
        if changed.overlaps(first, line) {
            out.extend_from_slice(&squash(run));
        } else {
            out.extend_from_slice(run.as_bytes());
        }
        copied = run.end();
    }

    out.extend_from_slice(&content[copied..]);
    out
}

fn count_newlines(bytes: &[u8]) -> u64 {
    bytes.iter().filter(|&&b| b == b'\n').count() as u64
}

/// Concatenate the bodies of every literal in the run into one literal.
fn squash(run: Match<'_>) -> Vec<u8> {
    let mut result = Vec::with_capacity(run.len());
    result.push(b'"');
    for literal in STRING_REGEX.find_iter(run.as_bytes()) {
        let bytes = literal.as_bytes();
        result.extend_from_slice(&bytes[1..bytes.len() - 1]);
    }
    result.push(b'"');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn squash_str(changes: &[Interval], content: &str) -> String {
        String::from_utf8(squash_changed_strings(changes, content.as_bytes())).unwrap()
    }

    #[test]
    fn test_adjacent_literals_merge() {
        let out = squash_str(&[Interval::new(1, 2)], "x = \"foo\" \"bar\";\n");
        assert_eq!(out, "x = \"foobar\";\n");
    }

    #[test]
    fn test_run_across_lines_merges_when_any_line_changed() {
        let input = "x = \"foo\"\n    \"bar\";\ny = \"a\" \"b\";\n";

        let out = squash_str(&[Interval::new(2, 3)], input);

        assert_eq!(out, "x = \"foobar\";\ny = \"a\" \"b\";\n");
    }

    #[test]
    fn test_unchanged_runs_are_untouched() {
        let input = "a = \"x\" \"y\"\nb = \"p\" \"q\"\n";

        let out = squash_str(&[Interval::new(2, 3)], input);

        assert_eq!(out, "a = \"x\" \"y\"\nb = \"pq\"\n");
    }

    #[test]
    fn test_escaped_quotes_survive() {
        let out = squash_str(&[Interval::new(1, 2)], "s := \"a\\\"b\" \"c\"\n");
        assert_eq!(out, "s := \"a\\\"bc\"\n");
    }

    #[test]
    fn test_no_literals() {
        let input = "fn main() {}\n";
        assert_eq!(squash_str(&[Interval::new(1, 2)], input), input);
    }

    #[test]
    fn test_invalid_utf8_passes_through() {
        let input = b"\xff\xfe \"a\" \"b\"\n\xc3(\n".to_vec();

        let out = squash_changed_strings(&[Interval::new(1, 2)], &input);

        assert_eq!(out, b"\xff\xfe \"ab\"\n\xc3(\n".to_vec());
    }
}
