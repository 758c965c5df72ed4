//! Core diff parsing state machine.

use super::api::{Diff, Interval};
use super::error::{HunkBodyError, ParseErrorKind, Side};
use super::helpers::{HunkHeader, parse_hunk_header, parse_path};

/// Classification of a diff line by its first byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Minus,
    Plus,
    Context,
    NoNewline,
    HunkHeader,
    Comment,
}

impl LineKind {
    fn of(line: &[u8]) -> Self {
        match line.first() {
            Some(b'-') => LineKind::Minus,
            Some(b'+') => LineKind::Plus,
            Some(b' ') => LineKind::Context,
            Some(b'\\') => LineKind::NoNewline,
            Some(b'@') => LineKind::HunkHeader,
            _ => LineKind::Comment,
        }
    }
}

/// Parser state for a single diff document.
///
/// `cursor.src`/`cursor.dst` start at the next line to consume and stop one
/// past the active hunk. The parser is inside a hunk while either is
/// non-empty; between hunks they keep the previous hunk's stops so the next
/// header can be checked against them.
#[derive(Debug, Default)]
pub(super) struct Parser {
    diffs: Vec<Diff>,
    ready_for_dst_path: bool,
    ready_for_hunk_header: bool,
    cursor: HunkHeader,
}

impl Parser {
    pub(super) fn feed_line(&mut self, line: &[u8]) -> Result<(), ParseErrorKind> {
        if self.in_hunk() {
            self.feed_in_hunk(line).map_err(ParseErrorKind::from)
        } else {
            self.feed_not_in_hunk(line)
        }
    }

    pub(super) fn finish(self) -> Result<Vec<Diff>, ParseErrorKind> {
        if self.in_hunk() || self.ready_for_dst_path {
            return Err(ParseErrorKind::UnexpectedEof);
        }
        Ok(self.diffs)
    }

    fn in_hunk(&self) -> bool {
        !self.cursor.src.is_empty() || !self.cursor.dst.is_empty()
    }

    fn feed_in_hunk(&mut self, line: &[u8]) -> Result<(), HunkBodyError> {
        match LineKind::of(line) {
            LineKind::Minus => {
                if self.cursor.src.is_empty() {
                    return Err(HunkBodyError::SrcText);
                }
                // The deleted line has no destination counterpart; the
                // destination line now sitting at the cursor is marked instead.
                self.change_dst();
                self.cursor.src.start += 1;
            }
            LineKind::Plus => {
                if self.cursor.dst.is_empty() {
                    return Err(HunkBodyError::DstText);
                }
                self.change_dst();
                self.cursor.dst.start += 1;
            }
            LineKind::Context => {
                if self.cursor.src.is_empty() || self.cursor.dst.is_empty() {
                    return Err(HunkBodyError::Context);
                }
                self.cursor.src.start += 1;
                self.cursor.dst.start += 1;
            }
            LineKind::NoNewline => {}
            LineKind::HunkHeader | LineKind::Comment => return Err(HunkBodyError::Comment),
        }
        Ok(())
    }

    fn feed_not_in_hunk(&mut self, line: &[u8]) -> Result<(), ParseErrorKind> {
        match LineKind::of(line) {
            LineKind::Minus => {
                parse_path(line)?;
                if self.ready_for_dst_path {
                    return Err(ParseErrorKind::UnexpectedSrcPath);
                }
                self.ready_for_hunk_header = false;
                self.diffs.push(Diff::default());
                self.ready_for_dst_path = true;
            }
            LineKind::Plus => {
                let path = parse_path(line)?;
                if !self.ready_for_dst_path {
                    return Err(ParseErrorKind::UnexpectedDstPath);
                }
                self.ready_for_dst_path = false;
                if let Some(diff) = self.diffs.last_mut() {
                    diff.dst_path = path.into_owned();
                }
                self.cursor = HunkHeader::default();
                self.ready_for_hunk_header = true;
            }
            LineKind::HunkHeader => {
                let header = parse_hunk_header(line)?;
                if !self.ready_for_hunk_header {
                    return Err(ParseErrorKind::UnexpectedHunkHeader);
                }
                self.check_follows_previous(&header)?;
                self.cursor = header;
            }
            LineKind::Context => return Err(ParseErrorKind::UnexpectedContext),
            LineKind::NoNewline => {}
            LineKind::Comment => {
                if self.ready_for_dst_path {
                    return Err(ParseErrorKind::UnexpectedComment);
                }
                self.ready_for_hunk_header = false;
            }
        }
        Ok(())
    }

    /// Hunks must move strictly forward and may only skip runs of equal length.
    fn check_follows_previous(&self, header: &HunkHeader) -> Result<(), ParseErrorKind> {
        let prev = &self.cursor;
        if header.src.start <= prev.src.stop {
            return Err(ParseErrorKind::NotAfterPrevious(Side::Src));
        }
        if header.dst.start <= prev.dst.stop {
            return Err(ParseErrorKind::NotAfterPrevious(Side::Dst));
        }
        if header.src.start - prev.src.stop != header.dst.start - prev.dst.stop {
            return Err(ParseErrorKind::UnequalSkip);
        }
        Ok(())
    }

    fn change_dst(&mut self) {
        let start = self.cursor.dst.start;
        if let Some(diff) = self.diffs.last_mut() {
            append_interval(&mut diff.dst_changes, Interval::new(start, start.saturating_add(1)));
        }
    }
}

/// Append `next`, folding it into the last interval when they touch or overlap.
///
/// Intervals arrive with non-decreasing starts, so checking the last entry
/// is enough to keep the list free of overlapping or adjacent entries.
pub(super) fn append_interval(intervals: &mut Vec<Interval>, next: Interval) {
    if let Some(last) = intervals.last_mut()
        && next.start <= last.stop
    {
        last.stop = last.stop.max(next.stop);
        return;
    }
    intervals.push(next);
}
