//! Line sources.
//!
//! A [`LineSource`] is the only collaborator the reader needs: something that
//! hands out one line of text at a time and says when it has run out.
//! Every [`BufRead`] is a source, so files, byte slices, cursors and
//! [`std::io::StdinLock`] all work out of the box.

use crate::Result;
use std::io::{self, BufRead};

/// Something that can produce one line of text at a time.
///
/// Returns `Ok(None)` at end of stream. Returned lines may still carry their
/// line terminator; the reader strips surrounding whitespace itself.
pub trait LineSource {
    fn read_line(&mut self) -> Result<Option<String>>;
}

impl<B: BufRead> LineSource for B {
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = BufRead::read_line(self, &mut line)?;
        if read == 0 {
            Ok(None)
        } else {
            Ok(Some(line))
        }
    }
}

/// Process standard input as a line source.
///
/// Locks stdin only for the duration of each line, so other code in the
/// process can keep using [`io::stdin`] between reads.
#[derive(Debug)]
pub struct StdinSource(io::Stdin);

impl StdinSource {
    #[must_use]
    pub fn new() -> Self {
        StdinSource(io::stdin())
    }
}

impl Default for StdinSource {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSource for StdinSource {
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self.0.read_line(&mut line)?;
        if read == 0 {
            Ok(None)
        } else {
            Ok(Some(line))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::io::Cursor;

    #[test]
    fn test_bufread_lines_then_eof() {
        let mut source = Cursor::new("first\nsecond");
        assert_eq!(
            LineSource::read_line(&mut source).unwrap(),
            Some("first\n".to_string())
        );
        assert_eq!(
            LineSource::read_line(&mut source).unwrap(),
            Some("second".to_string())
        );
        assert_eq!(LineSource::read_line(&mut source).unwrap(), None);
    }

    #[test]
    fn test_invalid_utf8_is_io_error() {
        let mut source: &[u8] = &[0xff, 0xfe, b'\n'];
        let err = LineSource::read_line(&mut source).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
