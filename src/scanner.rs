//! Line-oriented reader with one line of pushback.
//!
//! [`LineSource`] hands out the records of a buffered stream one at a time,
//! each including its trailing `\n` (the last record of a stream that does
//! not end in a newline is returned without one). Every record carries a
//! 1-based line number so callers can tag errors with a position.
//!
//! Records are raw bytes. No encoding is assumed, so Latin-1 or otherwise
//! non-UTF-8 text flows through untouched.

use std::io::{self, BufRead};
use thiserror::Error;

/// An I/O failure tagged with the line at which it happened.
#[derive(Error, Debug)]
#[error("line {line}: {source}")]
pub struct ScanError {
    pub line: u64,
    #[source]
    pub source: io::Error,
}

/// Sequential, non-restartable reader of byte records.
#[derive(Debug)]
pub struct LineSource<R> {
    reader: R,
    text: Vec<u8>,
    line: u64,
    pushed_back: bool,
    done: bool,
    error: Option<ScanError>,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            text: Vec::new(),
            line: 0,
            pushed_back: false,
            done: false,
            error: None,
        }
    }

    /// Move to the next record.
    ///
    /// Returns `false` at end of input or after an I/O error; once it has
    /// returned `false` it keeps doing so.
    pub fn advance(&mut self) -> bool {
        if self.pushed_back {
            self.pushed_back = false;
            self.line += 1;
            return true;
        }
        if self.done {
            return false;
        }

        self.line += 1;
        self.text.clear();
        match self.reader.read_until(b'\n', &mut self.text) {
            Ok(0) => {
                self.done = true;
                false
            }
            Ok(_) => true,
            Err(e) => {
                self.set_error(e);
                false
            }
        }
    }

    /// The current record, terminator included.
    pub fn current(&self) -> &[u8] {
        &self.text
    }

    /// The 1-based line number of the current record.
    pub fn current_line(&self) -> u64 {
        self.line
    }

    /// Make the next [`advance`](Self::advance) deliver the current record again.
    ///
    /// Only one record can be pushed back at a time.
    pub fn push_back(&mut self) {
        debug_assert!(!self.pushed_back, "push_back called twice");
        self.pushed_back = true;
        self.line -= 1;
    }

    /// The first I/O error encountered, if any.
    pub fn error(&self) -> Option<&ScanError> {
        self.error.as_ref()
    }

    /// Take ownership of the recorded error, leaving `None` behind.
    pub fn take_error(&mut self) -> Option<ScanError> {
        self.error.take()
    }

    fn set_error(&mut self, source: io::Error) {
        self.done = true;
        if self.error.is_none() {
            self.error = Some(ScanError {
                line: self.line,
                source,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufReader, Cursor, Read};

    fn collect<R: BufRead>(source: &mut LineSource<R>) -> Vec<(u64, Vec<u8>)> {
        let mut out = Vec::new();
        while source.advance() {
            out.push((source.current_line(), source.current().to_vec()));
        }
        out
    }

    #[test]
    fn test_records_keep_terminators() {
        let mut source = LineSource::new(Cursor::new("a\nb\n"));
        assert_eq!(
            collect(&mut source),
            vec![(1, b"a\n".to_vec()), (2, b"b\n".to_vec())]
        );
        assert!(source.error().is_none());
    }

    #[test]
    fn test_final_record_without_newline() {
        let mut source = LineSource::new(Cursor::new("a\nlast"));
        assert_eq!(
            collect(&mut source),
            vec![(1, b"a\n".to_vec()), (2, b"last".to_vec())]
        );
    }

    #[test]
    fn test_empty_input() {
        let mut source = LineSource::new(Cursor::new(""));
        assert!(!source.advance());
        assert!(source.error().is_none());
    }

    #[test]
    fn test_advance_is_idempotent_after_end() {
        let mut source = LineSource::new(Cursor::new("x\n"));
        assert!(source.advance());
        assert!(!source.advance());
        let line = source.current_line();
        assert!(!source.advance());
        assert!(!source.advance());
        assert_eq!(source.current_line(), line);
    }

    #[test]
    fn test_push_back_redelivers_same_line() {
        let mut source = LineSource::new(Cursor::new("one\ntwo\nthree\n"));
        assert!(source.advance());
        assert!(source.advance());
        assert_eq!(source.current(), b"two\n");
        assert_eq!(source.current_line(), 2);

        source.push_back();
        assert!(source.advance());
        assert_eq!(source.current(), b"two\n");
        assert_eq!(source.current_line(), 2);

        assert!(source.advance());
        assert_eq!(source.current(), b"three\n");
        assert_eq!(source.current_line(), 3);
    }

    #[test]
    fn test_push_back_of_last_record() {
        let mut source = LineSource::new(Cursor::new("only"));
        assert!(source.advance());
        source.push_back();
        assert!(source.advance());
        assert_eq!(source.current(), b"only");
        assert_eq!(source.current_line(), 1);
        assert!(!source.advance());
    }

    struct FailingReader {
        served: bool,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.served {
                return Err(io::Error::other("disk on fire"));
            }
            self.served = true;
            let data = b"fine\n";
            buf[..data.len()].copy_from_slice(data);
            Ok(data.len())
        }
    }

    #[test]
    fn test_error_is_tagged_with_line() {
        let mut source = LineSource::new(BufReader::new(FailingReader { served: false }));
        assert!(source.advance());
        assert_eq!(source.current(), b"fine\n");
        assert!(!source.advance());
        assert!(!source.advance());

        let err = source.error().unwrap();
        assert_eq!(err.line, 2);
        assert_eq!(err.to_string(), "line 2: disk on fire");
    }

    #[test]
    fn test_non_utf8_bytes_pass_through() {
        let mut source = LineSource::new(Cursor::new(b"ok\ncaf\xe9\n\xff".to_vec()));
        assert_eq!(
            collect(&mut source),
            vec![
                (1, b"ok\n".to_vec()),
                (2, b"caf\xe9\n".to_vec()),
                (3, b"\xff".to_vec()),
            ]
        );
        assert!(source.error().is_none());
    }
}
