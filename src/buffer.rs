//! The line buffer.
//!
//! Holds at most one partially consumed line. The line is stored once and a
//! byte cursor marks where the unconsumed remainder starts, so splitting
//! tokens off a long line never copies the tail.

use crate::options::Separator;
use crate::source::LineSource;
use crate::Result;
use tracing::{debug, trace};

#[derive(Debug, Default, Clone)]
pub(crate) struct LineBuffer {
    line: String,
    pos: usize,
}

impl LineBuffer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// The unconsumed remainder. Always trimmed on both ends.
    pub(crate) fn remaining(&self) -> &str {
        &self.line[self.pos..]
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.remaining().is_empty()
    }

    /// Discards whatever is held.
    pub(crate) fn clear(&mut self) {
        self.line.clear();
        self.pos = 0;
    }

    fn store(&mut self, line: &str) {
        self.line.clear();
        self.line.push_str(line.trim());
        self.pos = 0;
    }

    /// Pulls a fresh line if nothing is held.
    ///
    /// End of source leaves the buffer empty. With `skip_blank_lines`, blank
    /// lines are passed over until real content or end of source.
    pub(crate) fn ensure_filled<S: LineSource>(
        &mut self,
        source: &mut S,
        skip_blank_lines: bool,
    ) -> Result<()> {
        if !self.is_empty() {
            return Ok(());
        }
        loop {
            match source.read_line()? {
                None => {
                    debug!("source exhausted");
                    self.clear();
                    return Ok(());
                }
                Some(line) => {
                    self.store(&line);
                    if self.is_empty() && skip_blank_lines {
                        trace!("skipping blank line");
                        continue;
                    }
                    debug!(len = self.line.len(), "pulled line");
                    return Ok(());
                }
            }
        }
    }

    /// Splits the next token off the held content.
    ///
    /// The returned token may be empty; deciding whether that is an error is
    /// left to the caller.
    pub(crate) fn split_token(&mut self, separator: &Separator) -> String {
        let (token, rest) = separator.split_once(self.remaining());
        let token = token.to_string();
        // `rest` is a suffix of the stored line; skip its leading whitespace
        let rest = rest.trim_start();
        let rest_start = self.line.len() - rest.len();
        if rest.is_empty() {
            self.clear();
        } else {
            self.pos = rest_start;
        }
        trace!(token = %token, remaining = self.remaining().len(), "split token");
        token
    }

    /// Returns everything held and clears it, or a fresh stripped line when
    /// nothing is held. End of source yields an empty string.
    pub(crate) fn take_rest<S: LineSource>(&mut self, source: &mut S) -> Result<String> {
        if !self.is_empty() {
            let rest = self.remaining().to_string();
            self.clear();
            return Ok(rest);
        }
        self.clear();
        match source.read_line()? {
            Some(line) => Ok(line.trim().to_string()),
            None => {
                debug!("source exhausted");
                Ok(String::new())
            }
        }
    }
}
