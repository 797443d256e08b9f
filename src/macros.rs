/// Builds a [`TypeRequest`](crate::TypeRequest) from a compact shape syntax.
///
/// Scalars are `int`, `float`, `bool` and `str`. `[shape; n]` repeats a shape
/// `n` times and `[a, b, ...]` lists shapes explicitly; both nest. Any other
/// expression is taken as a `TypeRequest` as-is.
///
/// # Examples
///
/// ```rust
/// use linescan::{request, Reader};
///
/// let mut reader = Reader::new("1 2 3\n4 5 6\n".as_bytes());
/// let value = reader.read(&[request!([[int; 3]; 2])]).unwrap();
/// assert_eq!(value.to_string(), "[[1, 2, 3], [4, 5, 6]]");
///
/// let mixed = request!([int, float, [bool; 2]]);
/// assert_eq!(mixed.to_string(), "[integer, float, [boolean, boolean]]");
/// ```
#[macro_export]
macro_rules! request {
    (int) => {
        $crate::TypeRequest::Integer
    };

    (float) => {
        $crate::TypeRequest::Float
    };

    (bool) => {
        $crate::TypeRequest::Boolean
    };

    (str) => {
        $crate::TypeRequest::String
    };

    // Repeated shape
    ([ $elem:tt ; $count:expr ]) => {
        $crate::TypeRequest::repeat($crate::request!($elem), $count)
    };

    // Explicit shape
    ([ $($elem:tt),+ $(,)? ]) => {
        $crate::TypeRequest::List(vec![$($crate::request!($elem)),+])
    };

    ($request:expr) => {
        $request
    };
}
