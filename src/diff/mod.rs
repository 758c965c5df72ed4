//! Unified diff parsing.
//!
//! Turns a unified diff into, for each destination file, the ordered list
//! of destination line intervals that were added or sit right next to a
//! deletion. The parse is strict: header ordering, hunk counts, hunk
//! monotonicity and equal skip lengths between hunks are all checked, and
//! any violation rejects the whole diff.
//!
//! Only the unified format is understood. Git extended headers (`diff --git`,
//! `index`, mode lines) are tolerated as free-form text between files.

mod api;
mod error;
mod helpers;
mod parser;


// Re-export public API
pub use api::{Diff, Interval, parse};
pub use error::{HunkBodyError, ParseError, ParseErrorKind, RangeError, Side};
