//! Refill changed line comments and tidy changed code lines.
//!
//! Runs of `//` or `#` line comments are treated as one paragraph. When a
//! paragraph overlaps a changed interval its words are re-flowed to fit the
//! column limit. Changed code lines get trailing whitespace stripped and the
//! whitespace inside their comments and literals collapsed.
//!
//! Lines are handled as bytes, so files in any ASCII-compatible encoding
//! are rewritten without being decoded.

use regex::bytes::{Captures, Regex};
use std::io::{BufRead, Write};
use std::sync::LazyLock;

use super::ChangedLines;
use crate::config::Config;
use crate::diff::Interval;
use crate::error::Result;
use crate::numbers;
use crate::scanner::LineSource;

static LINE_COMMENT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u)^([\t ]*(?:#|//))([\t ][^\n]*)").expect("Invalid line comment regex")
});

/// `// Next id: 7` style bookkeeping comments (protobuf field counters).
static NEXT_COMMENT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?-u)^[\t ]*//[\t ]*[Nn]ext(?:(?:[\t ]+available)?(?:[\t ]+)(?:id|tag))?:[\t ]+\d+[\t ]*\n$",
    )
    .expect("Invalid next-id comment regex")
});

static LIST_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u)^[\t ]*// (?:[-*]|[0-9]\.) ").expect("Invalid list regex"));

static TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        "(?-u){}",
        [
            r"(?:#|//)[^\n]*",                         // line comment
            r"/\*(?:[^*]|\*+[^*/])*(?:$|\*+(?:$|/))", // general comment
            r"'(?:[^\n'\\]|\\[^\n])*(?:$|\\$|')",      // rune literal
            r"`[^`]*(?:$|`)",                          // raw string literal
            r#""(?:[^\n"\\]|\\[^\n])*(?:$|\\$|")"#,    // interpreted string literal
        ]
        .join("|")
    ))
    .expect("Invalid token regex")
});

/// Settings for [`rewrite_changed_lines`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillOptions {
    /// Widest column a refilled comment line may reach.
    pub max_column: u64,
    /// Normalize numeric literals on changed lines first.
    pub normalize_numbers: bool,
}

impl Default for FillOptions {
    fn default() -> Self {
        Self {
            max_column: 80,
            normalize_numbers: true,
        }
    }
}

impl From<&Config> for FillOptions {
    fn from(config: &Config) -> Self {
        Self {
            max_column: config.max_column,
            normalize_numbers: config.normalize_numbers,
        }
    }
}

fn is_fillable_line_comment(line: &[u8]) -> bool {
    LINE_COMMENT_REGEX.is_match(line)
        && !NEXT_COMMENT_REGEX.is_match(line)
        && !LIST_REGEX.is_match(line)
}

/// Copy `reader` to `writer`, rewriting the records that overlap `changes`.
pub fn rewrite_changed_lines(
    changes: &[Interval],
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    options: &FillOptions,
) -> Result<()> {
    let mut lines = LineSource::new(reader);
    let mut changed = ChangedLines::new(changes);

    while lines.advance() {
        let first = lines.current_line();
        let mut block = vec![lines.current().to_vec()];
        let is_comment = is_fillable_line_comment(&block[0]);
        if is_comment {
            while lines.advance() {
                if !is_fillable_line_comment(lines.current()) {
                    lines.push_back();
                    break;
                }
                block.push(lines.current().to_vec());
            }
        }
        let last = first + block.len() as u64 - 1;

        if changed.overlaps(first, last) {
            if options.normalize_numbers {
                for line in &mut block {
                    *line = numbers::normalize(line);
                }
            }
            block = if is_comment {
                fill_comment(&block, options.max_column)
            } else {
                squeeze_code(&block)
            };
        }

        for line in &block {
            writer.write_all(line)?;
        }
    }

    if let Some(err) = lines.take_error() {
        return Err(err.into());
    }
    writer.flush()?;
    Ok(())
}

/// Trim trailing whitespace and collapse whitespace inside comments and literals.
fn squeeze_code(lines: &[Vec<u8>]) -> Vec<Vec<u8>> {
    lines
        .iter()
        .map(|line| {
            let mut squeezed = TOKEN_REGEX
                .replace_all(line.trim_ascii_end(), |caps: &Captures| {
                    split_words(&caps[0]).collect::<Vec<_>>().join(&b' ')
                })
                .into_owned();
            squeezed.push(b'\n');
            squeezed
        })
        .collect()
}

fn split_words(text: &[u8]) -> impl Iterator<Item = &[u8]> {
    text.split(u8::is_ascii_whitespace).filter(|w| !w.is_empty())
}

/// Re-flow a comment paragraph behind the first line's prefix.
fn fill_comment(lines: &[Vec<u8>], max_column: u64) -> Vec<Vec<u8>> {
    let mut prefix: &[u8] = b"";
    let mut words = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        let Some(caps) = LINE_COMMENT_REGEX.captures(line) else {
            continue;
        };
        if i == 0 {
            prefix = caps.get(1).map_or(prefix, |m| m.as_bytes());
        }
        if let Some(text) = caps.get(2) {
            words.extend(split_words(text.as_bytes()));
        }
    }

    let mut filled = Vec::new();
    let mut i = 0;
    while i < words.len() {
        let mut j = i;
        let mut col = advance_bytes(0, prefix);
        while j < words.len() {
            col = advance_byte(col, b' ');
            col = advance_bytes(col, words[j]);
            if col > max_column {
                break;
            }
            j += 1;
        }
        // A word wider than the limit still gets a line of its own.
        if j == i {
            j += 1;
        }

        let mut line = prefix.to_vec();
        for word in &words[i..j] {
            line.push(b' ');
            line.extend_from_slice(word);
        }
        line.push(b'\n');
        filled.push(line);
        i = j;
    }
    filled
}

fn advance_bytes(col: u64, s: &[u8]) -> u64 {
    s.iter().copied().fold(col, advance_byte)
}

/// Tabs advance to the next even column. UTF-8 continuation bytes take no
/// column of their own, so a multi-byte character counts once.
fn advance_byte(col: u64, b: u8) -> u64 {
    match b {
        b'\t' => (col | 1) + 1,
        0x80..=0xbf => col,
        _ => col + 1,
    }
}
