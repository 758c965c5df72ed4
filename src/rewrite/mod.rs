//! Text transforms restricted to the lines a diff touched.
//!
//! Each transform takes the destination intervals produced by
//! [`crate::diff::parse`] and leaves every line outside them byte-identical.

pub mod comments;
pub mod strings;

use crate::diff::Interval;

pub use comments::{FillOptions, rewrite_changed_lines};
pub use strings::squash_changed_strings;

/// Walks a sorted interval list alongside a forward-moving line position.
#[derive(Debug)]
pub struct ChangedLines<'a> {
    changes: &'a [Interval],
    next: usize,
}

impl<'a> ChangedLines<'a> {
    pub fn new(changes: &'a [Interval]) -> Self {
        Self { changes, next: 0 }
    }

    /// Whether any interval intersects the inclusive line range `first..=last`.
    ///
    /// `first` must not decrease between calls.
    pub fn overlaps(&mut self, first: u64, last: u64) -> bool {
        while let Some(interval) = self.changes.get(self.next)
            && interval.stop <= first
        {
            self.next += 1;
        }
        self.changes
            .get(self.next)
            .is_some_and(|interval| interval.start <= last)
    }
}
