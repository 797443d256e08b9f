//! Process-wide reader over standard input.
//!
//! Small programs usually want one shared reader on stdin rather than a
//! [`Reader`] threaded through every function. The free functions here all
//! share a single lazily created reader. Its mutex is held for the whole of
//! each call, so a multi-token read is never interleaved with another
//! thread's read.
//!
//! ```no_run
//! use linescan::TypeRequest;
//!
//! let n: usize = linescan::scan().unwrap();
//! let values = linescan::read_list(&TypeRequest::Integer, n).unwrap();
//! let title = linescan::readline().unwrap();
//! println!("{title}: {values:?}");
//! ```

use crate::options::Separator;
use crate::request::TypeRequest;
use crate::scan::Scan;
use crate::source::StdinSource;
use crate::{Reader, Result, Value};
use once_cell::sync::Lazy;
use parking_lot::Mutex;

static STDIN: Lazy<Mutex<Reader<StdinSource>>> =
    Lazy::new(|| Mutex::new(Reader::new(StdinSource::new())));

/// Reads one value per request from stdin. See [`Reader::read`].
///
/// # Errors
///
/// See [`Reader::read_with`].
pub fn read(requests: &[TypeRequest]) -> Result<Value> {
    STDIN.lock().read(requests)
}

/// Reads one value per request from stdin using `separator`.
///
/// # Errors
///
/// See [`Reader::read_with`].
pub fn read_with(requests: &[TypeRequest], separator: &Separator) -> Result<Value> {
    STDIN.lock().read_with(requests, separator)
}

/// Reads `count` values of one type from stdin.
///
/// # Errors
///
/// See [`Reader::read_list_with`].
pub fn read_list(request: &TypeRequest, count: usize) -> Result<Vec<Value>> {
    STDIN.lock().read_list(request, count)
}

/// Reads `count` values of one type from stdin using `separator`.
///
/// # Errors
///
/// See [`Reader::read_list_with`].
pub fn read_list_with(
    request: &TypeRequest,
    count: usize,
    separator: &Separator,
) -> Result<Vec<Value>> {
    STDIN.lock().read_list_with(request, count, separator)
}

/// Reads a statically typed value from stdin.
///
/// # Errors
///
/// See [`Reader::scan_with`].
pub fn scan<T: Scan>() -> Result<T> {
    STDIN.lock().scan()
}

/// Returns the rest of the current stdin line, or the next line.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) when stdin fails.
pub fn readline() -> Result<String> {
    STDIN.lock().readline()
}

/// Discards the unconsumed remainder of the current stdin line.
pub fn clear_buffer() {
    STDIN.lock().clear_buffer();
}
