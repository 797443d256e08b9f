//! The stateful reader.
//!
//! [`Reader`] owns one [`LineSource`] and the line buffer that sits in front
//! of it. Token reads pull from the buffered line and refill it one line at a
//! time; [`Reader::readline`] hands back whatever is left of the current line.
//! The two can be freely interleaved.
//!
//! ## Failure Policy
//!
//! The first failing token aborts the whole call. Tokens already pulled by that
//! call stay consumed:
//!
//! ```rust
//! use linescan::{Reader, TypeRequest};
//!
//! let mut reader = Reader::new("1 x 3\n".as_bytes());
//! assert!(reader.read(&[TypeRequest::Integer, TypeRequest::Integer]).is_err());
//!
//! // "1" and "x" are gone
//! assert_eq!(reader.readline().unwrap(), "3");
//! ```

use crate::buffer::LineBuffer;
use crate::coerce::coerce;
use crate::options::{ReaderOptions, Separator};
use crate::request::TypeRequest;
use crate::scan::{FromToken, Scan};
use crate::source::LineSource;
use crate::{Error, Result, Value};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Typed, line-buffered token reader over a [`LineSource`].
///
/// # Examples
///
/// ```rust
/// use linescan::{Reader, TypeRequest, Value};
///
/// let mut reader = Reader::new("42 3.5 hello\nthe rest of it\n".as_bytes());
///
/// let n: i64 = reader.scan().unwrap();
/// let (x, word): (f64, String) = reader.scan().unwrap();
/// assert_eq!((n, x, word.as_str()), (42, 3.5, "hello"));
///
/// assert_eq!(reader.readline().unwrap(), "the rest of it");
/// ```
#[derive(Debug)]
pub struct Reader<S> {
    source: S,
    buffer: LineBuffer,
    options: ReaderOptions,
}

impl<S: LineSource> Reader<S> {
    /// Creates a reader with default options: whitespace separator, blank
    /// lines count as "no data".
    pub fn new(source: S) -> Self {
        Self::with_options(source, ReaderOptions::default())
    }

    pub fn with_options(source: S, options: ReaderOptions) -> Self {
        Reader {
            source,
            buffer: LineBuffer::new(),
            options,
        }
    }

    #[must_use]
    pub fn options(&self) -> &ReaderOptions {
        &self.options
    }

    /// The unconsumed remainder of the current line, if any.
    #[must_use]
    pub fn pending(&self) -> Option<&str> {
        if self.buffer.is_empty() {
            None
        } else {
            Some(self.buffer.remaining())
        }
    }

    /// Discards the unconsumed remainder of the current line.
    ///
    /// The next token read starts from a fresh line.
    pub fn clear_buffer(&mut self) {
        self.buffer.clear();
    }

    /// Returns the source, dropping anything still buffered.
    pub fn into_inner(self) -> S {
        self.source
    }

    /// Pulls the next raw token using `separator`.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyInput`] when the token is empty, which covers an
    ///   exhausted source, a blank line and an empty field between two
    ///   literal separators
    /// - [`Error::InvalidRequest`] for an empty literal separator
    /// - [`Error::Io`] when the source fails
    pub fn next_token(&mut self, separator: &Separator) -> Result<String> {
        separator.validate()?;
        self.buffer
            .ensure_filled(&mut self.source, self.options.skip_blank_lines)?;
        let token = self.buffer.split_token(separator);
        if token.is_empty() {
            debug!("empty token");
            return Err(Error::EmptyInput);
        }
        Ok(token)
    }

    /// Reads one value per request using the default separator.
    ///
    /// A single request yields its value directly; any other number of
    /// requests yields a [`Value::Tuple`] in request order, so no requests
    /// yield an empty tuple without touching the source.
    ///
    /// # Errors
    ///
    /// See [`Reader::read_with`].
    pub fn read(&mut self, requests: &[TypeRequest]) -> Result<Value> {
        let separator = self.options.separator.clone();
        self.read_with(requests, &separator)
    }

    /// Reads one value per request, splitting tokens on `separator`.
    ///
    /// Every request is validated before any input is consumed.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidRequest`] for a zero-length list shape or an empty
    ///   separator
    /// - [`Error::EmptyInput`] when the source runs dry mid-read
    /// - [`Error::Conversion`] when a token does not fit its request
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linescan::{Reader, Separator, TypeRequest, Value};
    ///
    /// let mut reader = Reader::new("42|3.5|hello\n".as_bytes());
    /// let value = reader
    ///     .read_with(
    ///         &[TypeRequest::Integer, TypeRequest::Float, TypeRequest::String],
    ///         &Separator::pipe(),
    ///     )
    ///     .unwrap();
    /// assert_eq!(
    ///     value,
    ///     Value::Tuple(vec![Value::from(42i64), Value::from(3.5), Value::from("hello")])
    /// );
    /// ```
    pub fn read_with(&mut self, requests: &[TypeRequest], separator: &Separator) -> Result<Value> {
        separator.validate()?;
        requests.iter().try_for_each(TypeRequest::validate)?;

        let mut values = requests
            .iter()
            .map(|request| self.read_one(request, separator))
            .collect::<Result<Vec<_>>>()?;

        if values.len() == 1 {
            Ok(values.remove(0))
        } else {
            Ok(Value::Tuple(values))
        }
    }

    /// Reads `count` values of one type using the default separator.
    ///
    /// # Errors
    ///
    /// See [`Reader::read_list_with`].
    pub fn read_list(&mut self, request: &TypeRequest, count: usize) -> Result<Vec<Value>> {
        let separator = self.options.separator.clone();
        self.read_list_with(request, count, &separator)
    }

    /// Reads `count` values of one type, splitting tokens on `separator`.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidRequest`] when `count` is zero, the request contains a
    ///   zero-length list shape, or the separator is empty
    /// - [`Error::EmptyInput`] / [`Error::Conversion`] as for [`Reader::read_with`]
    pub fn read_list_with(
        &mut self,
        request: &TypeRequest,
        count: usize,
        separator: &Separator,
    ) -> Result<Vec<Value>> {
        if count == 0 {
            return Err(Error::invalid_request("cannot read an empty list"));
        }
        separator.validate()?;
        request.validate()?;
        (0..count)
            .map(|_| self.read_one(request, separator))
            .collect()
    }

    /// Reads the requests and deserializes the result into `T`.
    ///
    /// # Errors
    ///
    /// Any error of [`Reader::read`], or [`Error::Custom`] when the value tree
    /// does not fit `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linescan::{Reader, TypeRequest};
    ///
    /// let mut reader = Reader::new("3 1 2 3\n".as_bytes());
    /// let (n, rest): (usize, Vec<u8>) = reader
    ///     .read_as(&[TypeRequest::Integer, TypeRequest::repeat(TypeRequest::Integer, 3)])
    ///     .unwrap();
    /// assert_eq!(n, 3);
    /// assert_eq!(rest, vec![1, 2, 3]);
    /// ```
    pub fn read_as<T: DeserializeOwned>(&mut self, requests: &[TypeRequest]) -> Result<T> {
        let value = self.read(requests)?;
        crate::de::from_value(value)
    }

    /// Returns the rest of the current line, or the next whole line when
    /// nothing is buffered. Nothing is tokenized or coerced.
    ///
    /// End of source yields an empty string rather than an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the source fails.
    pub fn readline(&mut self) -> Result<String> {
        self.buffer.take_rest(&mut self.source)
    }

    /// Reads a statically typed value using the default separator.
    ///
    /// # Errors
    ///
    /// See [`Reader::scan_with`].
    pub fn scan<T: Scan>(&mut self) -> Result<T> {
        let separator = self.options.separator.clone();
        self.scan_with(&separator)
    }

    /// Reads a statically typed value, splitting tokens on `separator`.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyInput`], [`Error::Conversion`] or [`Error::InvalidRequest`]
    /// (zero-length arrays, empty separator).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linescan::{Reader, Separator};
    ///
    /// let mut reader = Reader::new("1,2\n3,4\n".as_bytes());
    /// let grid: [[i32; 2]; 2] = reader.scan_with(&Separator::comma()).unwrap();
    /// assert_eq!(grid, [[1, 2], [3, 4]]);
    /// ```
    pub fn scan_with<T: Scan>(&mut self, separator: &Separator) -> Result<T> {
        separator.validate()?;
        T::scan(self, separator)
    }

    /// Reads `count` scalars of one type using the default separator.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidRequest`] when `count` is zero, otherwise as for
    /// [`Reader::scan_with`].
    pub fn scan_list<T: FromToken>(&mut self, count: usize) -> Result<Vec<T>> {
        if count == 0 {
            return Err(Error::invalid_request("cannot read an empty list"));
        }
        let separator = self.options.separator.clone();
        separator.validate()?;
        (0..count)
            .map(|_| {
                let token = self.next_token(&separator)?;
                T::from_token(&token)
            })
            .collect()
    }

    fn read_one(&mut self, request: &TypeRequest, separator: &Separator) -> Result<Value> {
        match request {
            TypeRequest::List(shape) => shape
                .iter()
                .map(|element| self.read_one(element, separator))
                .collect::<Result<Vec<_>>>()
                .map(Value::List),
            scalar => {
                let token = self.next_token(separator)?;
                coerce(&token, scalar).map_err(|e| {
                    debug!(token = %token, expected = scalar.type_name(), "conversion failed");
                    e
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Number;

    fn reader(input: &str) -> Reader<&[u8]> {
        Reader::new(input.as_bytes())
    }

    #[test]
    fn test_read_single_value() {
        let mut reader = reader("42\n");
        assert_eq!(
            reader.read(&[TypeRequest::Integer]).unwrap(),
            Value::Number(Number::Integer(42))
        );
    }

    #[test]
    fn test_tokens_span_lines() {
        let mut reader = reader("   42   \n   2.5   \n   hello   \n");
        let value = reader
            .read(&[TypeRequest::Integer, TypeRequest::Float, TypeRequest::String])
            .unwrap();
        assert_eq!(
            value,
            Value::Tuple(vec![Value::from(42i64), Value::from(2.5), Value::from("hello")])
        );
    }

    #[test]
    fn test_empty_source() {
        let mut reader = reader("");
        assert_eq!(reader.read(&[TypeRequest::Integer]), Err(Error::EmptyInput));
        assert_eq!(reader.readline().unwrap(), "");
    }

    #[test]
    fn test_no_requests_yield_empty_tuple() {
        let mut reader = reader("1\n");
        assert_eq!(reader.read(&[]).unwrap(), Value::Tuple(vec![]));
        assert_eq!(reader.pending(), None);
        assert_eq!(reader.read(&[TypeRequest::Integer]).unwrap(), Value::from(1i64));
    }

    #[test]
    fn test_invalid_shape_consumes_nothing() {
        let mut reader = reader("1 2 3\n");
        let requests = [TypeRequest::Integer, TypeRequest::List(vec![])];
        assert!(matches!(reader.read(&requests), Err(Error::InvalidRequest(_))));
        assert_eq!(reader.readline().unwrap(), "1 2 3");
    }

    #[test]
    fn test_empty_separator_is_invalid() {
        let mut reader = reader("1 2\n");
        let err = reader
            .read_with(&[TypeRequest::Integer], &Separator::literal(""))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidRequest(_)));
    }

    #[test]
    fn test_empty_field_between_separators() {
        let mut reader = reader("1,,3\n");
        let sep = Separator::comma();
        assert_eq!(
            reader.read_with(&[TypeRequest::Integer], &sep).unwrap(),
            Value::from(1i64)
        );
        assert_eq!(
            reader.read_with(&[TypeRequest::Integer], &sep),
            Err(Error::EmptyInput)
        );
        assert_eq!(reader.readline().unwrap(), "3");
    }

    #[test]
    fn test_separator_change_applies_to_remainder() {
        let mut reader = reader("a,b c,d\n");
        assert_eq!(reader.next_token(&Separator::comma()).unwrap(), "a");
        assert_eq!(reader.next_token(&Separator::Whitespace).unwrap(), "b");
        assert_eq!(reader.next_token(&Separator::comma()).unwrap(), "c");
        assert_eq!(reader.next_token(&Separator::comma()).unwrap(), "d");
        assert_eq!(reader.pending(), None);
    }

    #[test]
    fn test_blank_line_is_no_data_by_default() {
        let mut reader = reader("\n5\n");
        assert_eq!(reader.read(&[TypeRequest::Integer]), Err(Error::EmptyInput));
        assert_eq!(reader.read(&[TypeRequest::Integer]).unwrap(), Value::from(5i64));
    }

    #[test]
    fn test_skip_blank_lines_option() {
        let options = ReaderOptions::new().with_skip_blank_lines(true);
        let mut reader = Reader::with_options("\n\n  \n5\n".as_bytes(), options);
        assert_eq!(reader.read(&[TypeRequest::Integer]).unwrap(), Value::from(5i64));
    }

    #[test]
    fn test_default_separator_option() {
        let options = ReaderOptions::new().with_separator(';');
        let mut reader = Reader::with_options("1;2;x y\n".as_bytes(), options);
        let values = reader.read_list(&TypeRequest::String, 3).unwrap();
        assert_eq!(
            values,
            vec![Value::from("1"), Value::from("2"), Value::from("x y")]
        );
    }

    #[test]
    fn test_read_list_zero_count() {
        let mut reader = reader("1\n");
        assert!(matches!(
            reader.read_list(&TypeRequest::Integer, 0),
            Err(Error::InvalidRequest(_))
        ));
        assert!(matches!(
            reader.scan_list::<i32>(0),
            Err(Error::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_pending_and_clear() {
        let mut reader = reader("1 2 3\n4 5 6\n");
        assert_eq!(reader.read(&[TypeRequest::Integer]).unwrap(), Value::from(1i64));
        assert_eq!(reader.pending(), Some("2 3"));
        reader.clear_buffer();
        assert_eq!(reader.pending(), None);
        assert_eq!(reader.read(&[TypeRequest::Integer]).unwrap(), Value::from(4i64));
    }

    #[test]
    fn test_into_inner_returns_unread_source() {
        let mut reader = reader("1 2\n3 4\n");
        reader.read(&[TypeRequest::Integer]).unwrap();
        let rest = reader.into_inner();
        assert_eq!(rest, b"3 4\n");
    }
}
