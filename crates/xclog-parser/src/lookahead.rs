// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Line sources and continuation pulls
//!
//! The classifier owns the [`LineSource`] for the duration of a lookahead
//! pull, so continuation lines are read exactly once and in order.

use std::io::BufRead;

use crate::error::ParserError;

/// A forward-only cursor over input lines
pub trait LineSource {
    /// Pull the next line, without its line terminator
    ///
    /// Returns `None` at end of stream.
    fn next_line(&mut self) -> Option<String>;
}

impl<S: LineSource + ?Sized> LineSource for &mut S {
    fn next_line(&mut self) -> Option<String> {
        (**self).next_line()
    }
}

/// Pull exactly `count` lines from `source`
///
/// Lines missing because the stream ended are returned as empty strings.
pub fn pull<S: LineSource + ?Sized>(source: &mut S, count: usize) -> Vec<String> {
    let mut lines = Vec::with_capacity(count);
    for _ in 0..count {
        lines.push(source.next_line().unwrap_or_default());
    }
    lines
}

// ============================================================================
// Sources
// ============================================================================

/// A source over any iterator of lines
#[derive(Debug)]
pub struct IterSource<I> {
    lines: I,
}

impl<I> IterSource<I> {
    /// Wrap an iterator of lines
    pub fn new(lines: I) -> Self {
        Self { lines }
    }
}

impl<I, T> LineSource for IterSource<I>
where
    I: Iterator<Item = T>,
    T: Into<String>,
{
    fn next_line(&mut self) -> Option<String> {
        self.lines.next().map(Into::into)
    }
}

/// Adapter turning any line iterator into a [`LineSource`]
pub trait IntoLineSource: Sized {
    /// Wrap `self` as a line source
    fn into_source(self) -> IterSource<Self>;
}

impl<I: Iterator> IntoLineSource for I {
    fn into_source(self) -> IterSource<Self> {
        IterSource::new(self)
    }
}

/// A source over a buffered reader
///
/// A read error ends the stream; it is kept so the caller can report it once
/// the run finishes. Invalid UTF-8 is replaced rather than treated as an error.
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
    buf: Vec<u8>,
    error: Option<std::io::Error>,
    lines_read: u64,
}

impl<R: BufRead> ReaderSource<R> {
    /// Wrap a buffered reader
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::with_capacity(256),
            error: None,
            lines_read: 0,
        }
    }

    /// Number of lines read so far
    #[must_use]
    pub fn lines_read(&self) -> u64 {
        self.lines_read
    }

    /// Consume the source, returning the read error that ended it, if any
    ///
    /// # Errors
    ///
    /// Returns [`ParserError::Io`] if reading stopped because of an I/O error.
    pub fn finish(self) -> Result<u64, ParserError> {
        match self.error {
            Some(err) => Err(ParserError::Io(err)),
            None => Ok(self.lines_read),
        }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn next_line(&mut self) -> Option<String> {
        if self.error.is_some() {
            return None;
        }
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                    if self.buf.last() == Some(&b'\r') {
                        self.buf.pop();
                    }
                }
                self.lines_read += 1;
                Some(String::from_utf8_lossy(&self.buf).into_owned())
            }
            Err(err) => {
                tracing::warn!(error = %err, "input read failed, ending stream");
                self.error = Some(err);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_pull_pads_with_empty_lines() {
        let mut source = IterSource::new(["int x"].into_iter());
        assert_eq!(pull(&mut source, 2), vec!["int x".to_string(), String::new()]);
        assert_eq!(pull(&mut source, 2), vec![String::new(), String::new()]);
    }

    #[test]
    fn test_pull_zero_consumes_nothing() {
        let mut source = IterSource::new(["a", "b"].into_iter());
        assert!(pull(&mut source, 0).is_empty());
        assert_eq!(source.next_line().as_deref(), Some("a"));
    }

    #[test]
    fn test_reader_source_strips_terminators() {
        let input = "first\r\nsecond\nthird";
        let mut source = ReaderSource::new(Cursor::new(input));
        assert_eq!(source.next_line().as_deref(), Some("first"));
        assert_eq!(source.next_line().as_deref(), Some("second"));
        assert_eq!(source.next_line().as_deref(), Some("third"));
        assert_eq!(source.next_line(), None);
        assert_eq!(source.finish().expect("no error"), 3);
    }

    #[test]
    fn test_reader_source_replaces_invalid_utf8() {
        let input: &[u8] = b"caf\xff\n";
        let mut source = ReaderSource::new(input);
        assert_eq!(source.next_line().as_deref(), Some("caf\u{FFFD}"));
    }

    struct FailingReader;

    impl std::io::Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("pipe closed"))
        }
    }

    #[test]
    fn test_reader_source_keeps_read_error() {
        let mut source = ReaderSource::new(std::io::BufReader::new(FailingReader));
        assert_eq!(source.next_line(), None);
        assert_eq!(source.next_line(), None);
        assert!(matches!(source.finish(), Err(ParserError::Io(_))));
    }
}
