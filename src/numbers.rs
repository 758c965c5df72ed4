//! Numeric literal normalization.
//!
//! Rewrites every number in a piece of text to a canonical spelling:
//! integers lose leading zeros, decimals are printed in their shortest
//! exact form with at least one fractional digit, and exponents are
//! written as `e` followed by a plain signed integer.
//!
//! Works on bytes: only ASCII digits are recognized, and everything around
//! them is copied verbatim whatever its encoding.

use regex::Regex;
use regex::bytes::{Captures, Regex as BytesRegex};
use std::sync::LazyLock;

const E_PATTERN: &str = r"(?-u)(\d+(?:\.\d+)?)[Ee]([+-]?\d+)";
const F_PATTERN: &str = r"(?-u)\d+\.\d+";
const U_PATTERN: &str = r"(?-u)\d+";

static E_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^{E_PATTERN}$")).expect("Invalid exponent regex"));
static F_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^{F_PATTERN}$")).expect("Invalid decimal regex"));
static U_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^{U_PATTERN}$")).expect("Invalid integer regex"));
static NUMBER_REGEX: LazyLock<BytesRegex> = LazyLock::new(|| {
    BytesRegex::new(&[E_PATTERN, F_PATTERN, U_PATTERN].join("|")).expect("Invalid number regex")
});

/// Normalize every numeric literal in `text`.
pub fn normalize(text: &[u8]) -> Vec<u8> {
    NUMBER_REGEX
        .replace_all(text, |caps: &Captures| {
            let literal = &caps[0];
            std::str::from_utf8(literal)
                .ok()
                .and_then(normalize_literal)
                .map_or_else(|| literal.to_vec(), String::into_bytes)
        })
        .into_owned()
}

/// Returns `None` when the literal cannot be represented, leaving it as is.
fn normalize_literal(s: &str) -> Option<String> {
    if U_REGEX.is_match(s) {
        return s.parse::<u64>().ok().map(|u| u.to_string());
    }
    if F_REGEX.is_match(s) {
        return parse_finite(s).map(format_fixed);
    }
    let caps = E_REGEX.captures(s)?;
    let significand = parse_finite(&caps[1])?;
    let exponent: i64 = caps[2].parse().ok()?;
    Some(format!("{}e{}", format_fixed(significand), exponent))
}

fn parse_finite(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|f| f.is_finite())
}

/// Shortest exact decimal, always with a fractional part.
fn format_fixed(f: f64) -> String {
    let s = f.to_string();
    if s.contains('.') {
        s
    } else {
        format!("{f:.1}")
    }
}
