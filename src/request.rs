//! Type requests: what to read next and how to coerce it.
//!
//! A [`TypeRequest`] is either a scalar tag, consuming exactly one token, or a
//! fixed-length list shape whose entries are themselves requests. Shapes nest
//! to any depth; a `[[int; 2]; 3]` shape reads six tokens, row by row.
//!
//! ## Examples
//!
//! ```rust
//! use linescan::{Reader, TypeRequest, Value};
//!
//! let matrix = TypeRequest::repeat(TypeRequest::repeat(TypeRequest::Integer, 2), 2);
//! assert_eq!(matrix.token_count(), 4);
//!
//! let mut reader = Reader::new("1 2\n3 4\n".as_bytes());
//! let value = reader.read(&[matrix]).unwrap();
//! assert_eq!(value.to_string(), "[[1, 2], [3, 4]]");
//! ```

use crate::{Error, Result, Value};
use std::fmt;
use std::sync::Arc;

type ConvertFn = dyn Fn(&str) -> std::result::Result<Value, String> + Send + Sync;

/// A named, caller-supplied conversion from a token to a [`Value`].
///
/// The name shows up as the target type in [`Error::Conversion`].
///
/// # Examples
///
/// ```rust
/// use linescan::{Converter, Value};
///
/// let binary = Converter::new("binary", |token| i64::from_str_radix(token, 2));
/// assert_eq!(binary.name(), "binary");
/// assert_eq!(binary.convert("1010").unwrap(), Value::from(10i64));
/// assert!(binary.convert("102").is_err());
/// ```
#[derive(Clone)]
pub struct Converter {
    name: String,
    func: Arc<ConvertFn>,
}

impl Converter {
    pub fn new<F, T, E>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&str) -> std::result::Result<T, E> + Send + Sync + 'static,
        T: Into<Value>,
        E: fmt::Display,
    {
        Converter {
            name: name.into(),
            func: Arc::new(move |token: &str| {
                func(token).map(Into::into).map_err(|e| e.to_string())
            }),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Applies the conversion, wrapping any failure as [`Error::Conversion`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Conversion`] when the wrapped function fails.
    pub fn convert(&self, token: &str) -> Result<Value> {
        (self.func)(token).map_err(|reason| Error::conversion(token, &self.name, reason))
    }
}

impl fmt::Debug for Converter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Converter").field(&self.name).finish()
    }
}

/// What a read should produce.
#[derive(Clone, Debug)]
pub enum TypeRequest {
    Integer,
    Float,
    Boolean,
    String,
    Custom(Converter),
    /// Fixed-length shape, read element by element
    List(Vec<TypeRequest>),
}

impl TypeRequest {
    /// Shorthand for `TypeRequest::Custom(Converter::new(name, func))`.
    pub fn custom<F, T, E>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&str) -> std::result::Result<T, E> + Send + Sync + 'static,
        T: Into<Value>,
        E: fmt::Display,
    {
        TypeRequest::Custom(Converter::new(name, func))
    }

    /// A list shape of `count` copies of `element`.
    #[must_use]
    pub fn repeat(element: TypeRequest, count: usize) -> Self {
        TypeRequest::List(vec![element; count])
    }

    #[inline]
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        !matches!(self, TypeRequest::List(_))
    }

    /// Name used for this request in diagnostics.
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            TypeRequest::Integer => "integer",
            TypeRequest::Float => "float",
            TypeRequest::Boolean => "boolean",
            TypeRequest::String => "string",
            TypeRequest::Custom(converter) => converter.name(),
            TypeRequest::List(_) => "list",
        }
    }

    /// Number of tokens a successful read of this request consumes.
    #[must_use]
    pub fn token_count(&self) -> usize {
        match self {
            TypeRequest::List(shape) => shape.iter().map(TypeRequest::token_count).sum(),
            _ => 1,
        }
    }

    /// Checks the whole shape before any token is consumed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] if this request or any nested shape
    /// is a zero-length list.
    pub fn validate(&self) -> Result<()> {
        match self {
            TypeRequest::List(shape) if shape.is_empty() => {
                Err(Error::invalid_request("list shape must not be empty"))
            }
            TypeRequest::List(shape) => shape.iter().try_for_each(TypeRequest::validate),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for TypeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRequest::List(shape) => {
                write!(f, "[")?;
                for (i, element) in shape.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", element)?;
                }
                write!(f, "]")
            }
            scalar => f.write_str(scalar.type_name()),
        }
    }
}

impl From<Converter> for TypeRequest {
    fn from(converter: Converter) -> Self {
        TypeRequest::Custom(converter)
    }
}

impl From<Vec<TypeRequest>> for TypeRequest {
    fn from(shape: Vec<TypeRequest>) -> Self {
        TypeRequest::List(shape)
    }
}
