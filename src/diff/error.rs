//! Parse failure types.

use std::fmt;
use std::io;
use thiserror::Error;

/// Which side of a hunk header a range belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Src,
    Dst,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Src => f.write_str("src"),
            Side::Dst => f.write_str("dst"),
        }
    }
}

/// Why a `start[,count]` pair in a hunk header was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("start: {0}")]
    InvalidStart(std::num::ParseIntError),

    #[error("count: {0}")]
    InvalidCount(std::num::ParseIntError),

    #[error("start out of range")]
    StartOutOfRange,

    #[error("start + count out of range")]
    StopOutOfRange,
}

/// The reason a diff was rejected.
#[derive(Error, Debug)]
pub enum ParseErrorKind {
    #[error("invalid diff header")]
    InvalidPathHeader,

    #[error("invalid hunk header")]
    InvalidHunkHeader,

    #[error("{side} interval: {error}")]
    InvalidRange { side: Side, error: RangeError },

    #[error("empty hunk")]
    EmptyHunk,

    #[error("{0} interval not strictly after previous interval")]
    NotAfterPrevious(Side),

    #[error("unequal skip lengths")]
    UnequalSkip,

    #[error("unexpected src path")]
    UnexpectedSrcPath,

    #[error("unexpected dst path")]
    UnexpectedDstPath,

    #[error("unexpected hunk header")]
    UnexpectedHunkHeader,

    #[error("unexpected context")]
    UnexpectedContext,

    #[error("unexpected comment")]
    UnexpectedComment,

    /// A hunk body line the header did not leave room for.
    #[error("in hunk: {0}")]
    InHunk(HunkBodyError),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error(transparent)]
    Io(io::Error),
}

/// Hunk body lines that contradict the hunk header's counts.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HunkBodyError {
    #[error("unexpected src text")]
    SrcText,

    #[error("unexpected dst text")]
    DstText,

    #[error("unexpected context")]
    Context,

    #[error("unexpected comment")]
    Comment,
}

impl From<HunkBodyError> for ParseErrorKind {
    fn from(e: HunkBodyError) -> Self {
        ParseErrorKind::InHunk(e)
    }
}

/// A rejected diff: the reason plus the 1-based input line it was detected on.
#[derive(Error, Debug)]
#[error("line {line}: {kind}")]
pub struct ParseError {
    pub line: u64,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub fn new(line: u64, kind: ParseErrorKind) -> Self {
        Self { line, kind }
    }
}
