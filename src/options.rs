//! Configuration options for a [`Reader`](crate::Reader).
//!
//! This module provides:
//!
//! - [`Separator`]: the rule used to split a line into tokens
//! - [`ReaderOptions`]: per-reader defaults (separator, blank line handling)
//!
//! ## Examples
//!
//! ```rust
//! use linescan::{Reader, ReaderOptions, Separator};
//!
//! let options = ReaderOptions::new().with_separator(Separator::comma());
//! let mut reader = Reader::with_options("7,8,9\n".as_bytes(), options);
//!
//! let row: [u32; 3] = reader.scan().unwrap();
//! assert_eq!(row, [7, 8, 9]);
//! ```

use crate::{Error, Result};

/// Rule used to split the buffered line into a token and its remainder.
///
/// - **Whitespace**: default, splits on the first run of whitespace and
///   ignores leading and trailing whitespace
/// - **Literal**: splits on the first occurrence of an exact string
///
/// # Examples
///
/// ```rust
/// use linescan::Separator;
///
/// assert_eq!(Separator::Whitespace.split_once("  a  b c"), ("a", "b c"));
/// assert_eq!(Separator::pipe().split_once("a|b|c"), ("a", "b|c"));
/// assert_eq!(Separator::comma().split_once("a"), ("a", ""));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Separator {
    #[default]
    Whitespace,
    Literal(String),
}

impl Separator {
    /// Splits on an exact string.
    #[must_use]
    pub fn literal(sep: impl Into<String>) -> Self {
        Separator::Literal(sep.into())
    }

    #[must_use]
    pub fn comma() -> Self {
        Separator::literal(",")
    }

    #[must_use]
    pub fn tab() -> Self {
        Separator::literal("\t")
    }

    #[must_use]
    pub fn pipe() -> Self {
        Separator::literal("|")
    }

    /// Rejects separators that can never split anything.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] for an empty literal separator.
    pub fn validate(&self) -> Result<()> {
        match self {
            Separator::Literal(sep) if sep.is_empty() => {
                Err(Error::invalid_request("separator must not be empty"))
            }
            _ => Ok(()),
        }
    }

    /// Splits `text` at the first separator into `(token, rest)`.
    ///
    /// Both halves borrow from `text` and `rest` is always a suffix of it,
    /// which the line buffer relies on to advance its cursor. `rest` is empty
    /// when there was nothing after the token.
    #[must_use]
    pub fn split_once<'a>(&self, text: &'a str) -> (&'a str, &'a str) {
        match self {
            Separator::Whitespace => {
                let text = text.trim_start();
                match text.find(char::is_whitespace) {
                    Some(at) => {
                        let rest = text[at..].trim_start();
                        (&text[..at], rest)
                    }
                    None => (text, &text[text.len()..]),
                }
            }
            Separator::Literal(sep) => {
                let text = text.trim_start();
                match text.find(sep.as_str()) {
                    Some(at) => (&text[..at], &text[at + sep.len()..]),
                    None => (text.trim_end(), &text[text.len()..]),
                }
            }
        }
    }
}

impl From<&str> for Separator {
    fn from(sep: &str) -> Self {
        Separator::literal(sep)
    }
}

impl From<char> for Separator {
    fn from(sep: char) -> Self {
        Separator::Literal(sep.to_string())
    }
}

/// Per-reader configuration.
///
/// # Examples
///
/// ```rust
/// use linescan::{ReaderOptions, Separator};
///
/// let options = ReaderOptions::new();
/// assert_eq!(options.separator, Separator::Whitespace);
/// assert!(!options.skip_blank_lines);
///
/// let options = ReaderOptions::new()
///     .with_separator(Separator::tab())
///     .with_skip_blank_lines(true);
/// assert!(options.skip_blank_lines);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReaderOptions {
    /// Separator used by calls that do not pass one explicitly.
    pub separator: Separator,
    /// When set, token reads skip over blank lines instead of treating them
    /// as "no data". `readline` still returns blank lines verbatim.
    pub skip_blank_lines: bool,
}

impl ReaderOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<Separator>) -> Self {
        self.separator = separator.into();
        self
    }

    #[must_use]
    pub fn with_skip_blank_lines(mut self, skip: bool) -> Self {
        self.skip_blank_lines = skip;
        self
    }
}
