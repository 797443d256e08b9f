//! # linescan
//!
//! Typed, line-buffered token reading for text streams.
//!
//! A [`Reader`] pulls lines from a source on demand, splits them into tokens
//! and coerces each token to the type you ask for. Whatever is left of a line
//! stays buffered for the next call, so programs can read values without
//! knowing how many of them share a physical line.
//!
//! ## Key Features
//!
//! - **Two ways to ask**: dynamic [`TypeRequest`]s returning a [`Value`] tree,
//!   or statically typed [`Scan`] reads of scalars, tuples and arrays
//! - **Nested shapes**: fixed-length list shapes of any depth, read depth-first
//! - **Mixed line access**: [`Reader::readline`] returns the rest of the
//!   current line verbatim between token reads
//! - **Separators**: whitespace runs by default, or any literal string
//! - **Serde Compatible**: results serialize, and deserialize into your types
//!   via [`Reader::read_as`] / [`from_value`]
//!
//! ## Quick Start
//!
//! ```rust
//! use linescan::{Reader, TypeRequest, Value};
//!
//! let input = "42 3.5 hello\n1 2\n3 4\nsome words here\n";
//! let mut reader = Reader::new(input.as_bytes());
//!
//! // Dynamic requests
//! let value = reader
//!     .read(&[TypeRequest::Integer, TypeRequest::Float, TypeRequest::String])
//!     .unwrap();
//! assert_eq!(value.to_string(), "(42, 3.5, \"hello\")");
//!
//! // Statically typed shapes
//! let grid: [[i32; 2]; 2] = reader.scan().unwrap();
//! assert_eq!(grid, [[1, 2], [3, 4]]);
//!
//! // The raw rest of a line
//! let word: String = reader.scan().unwrap();
//! assert_eq!(word, "some");
//! assert_eq!(reader.readline().unwrap(), "words here");
//! ```
//!
//! ## Reading Standard Input
//!
//! The crate-level [`read`], [`read_list`], [`scan()`], [`readline`] and
//! [`clear_buffer`] functions share one mutex-guarded reader over stdin.
//!
//! ## Errors
//!
//! Each call fails with at most one [`Error`]. Tokens consumed before a
//! failure are not put back.

pub mod coerce;
pub mod de;
pub mod error;
pub mod macros;
pub mod options;
pub mod reader;
pub mod request;
pub mod scan;
pub mod source;
pub mod stdin;
pub mod value;

mod buffer;

pub use de::from_value;
pub use error::{Error, Result};
pub use options::{ReaderOptions, Separator};
pub use reader::Reader;
pub use request::{Converter, TypeRequest};
pub use scan::{FromToken, Scan};
pub use source::{LineSource, StdinSource};
pub use stdin::{clear_buffer, read, read_list, read_list_with, read_with, readline, scan};
pub use value::{Number, Value};
