//! Error types for token reading and coercion.
//!
//! Every failing operation reports exactly one [`Error`]. Nothing is retried
//! and nothing is rolled back: tokens pulled from the source before a failure
//! stay consumed.
//!
//! ## Error Categories
//!
//! - **Empty input**: a token was needed but the buffer and the source were both exhausted
//! - **Conversion**: a token could not be coerced to the requested type
//! - **Invalid request**: a zero-length list shape, a zero count, or an empty separator
//! - **I/O**: the underlying source failed
//!
//! ## Examples
//!
//! ```rust
//! use linescan::{Error, Reader, TypeRequest};
//!
//! let mut reader = Reader::new("forty-two\n".as_bytes());
//! let err = reader.read(&[TypeRequest::Integer]).unwrap_err();
//!
//! assert!(matches!(err, Error::Conversion { .. }));
//! assert!(err.to_string().contains("forty-two"));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised while reading typed tokens.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A token was required but the source had nothing left to give
    #[error("no input available: the line buffer is empty and the source yielded nothing")]
    EmptyInput,

    /// A token could not be converted to the requested type
    #[error("could not convert {token:?} to {target}: {reason}")]
    Conversion {
        token: String,
        target: String,
        reason: String,
    },

    /// The request itself is malformed
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// IO error while pulling a line from the source
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error, raised while deserializing a read result
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a conversion error for `token` and the named target type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linescan::Error;
    ///
    /// let err = Error::conversion("abc", "integer", "invalid digit found in string");
    /// assert!(err.to_string().contains("\"abc\""));
    /// assert!(err.to_string().contains("integer"));
    /// ```
    pub fn conversion(token: &str, target: &str, reason: impl fmt::Display) -> Self {
        Error::Conversion {
            token: token.to_string(),
            target: target.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Creates an invalid request error.
    pub fn invalid_request(msg: &str) -> Self {
        Error::InvalidRequest(msg.to_string())
    }

    /// Creates an I/O error for a failing source.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Returns `true` if this error means the source ran dry.
    #[inline]
    #[must_use]
    pub const fn is_empty_input(&self) -> bool {
        matches!(self, Error::EmptyInput)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::io(&err.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
