//! Statically typed reads.
//!
//! [`FromToken`] turns one token into a scalar; [`Scan`] consumes as many
//! tokens as a type needs. Tuples read their fields in order and fixed-size
//! arrays read `N` elements, so `[[i64; 4]; 3]` is a 3x4 matrix read row by
//! row.
//!
//! ## Implementing for your own types
//!
//! ```rust
//! use linescan::{FromToken, LineSource, Reader, Result, Scan, Separator};
//!
//! #[derive(Debug, PartialEq)]
//! struct Hex(u32);
//!
//! impl FromToken for Hex {
//!     const TYPE_NAME: &'static str = "hex";
//!
//!     fn from_token(token: &str) -> Result<Self> {
//!         u32::from_str_radix(token, 16)
//!             .map(Hex)
//!             .map_err(|e| linescan::Error::conversion(token, Self::TYPE_NAME, e))
//!     }
//! }
//!
//! impl Scan for Hex {
//!     fn scan<S: LineSource>(reader: &mut Reader<S>, separator: &Separator) -> Result<Self> {
//!         let token = reader.next_token(separator)?;
//!         Self::from_token(&token)
//!     }
//! }
//!
//! let mut reader = Reader::new("ff 10\n".as_bytes());
//! let pair: (Hex, Hex) = reader.scan().unwrap();
//! assert_eq!(pair, (Hex(255), Hex(16)));
//! ```

use crate::coerce::{parse_bigint, parse_bool};
use crate::options::Separator;
use crate::source::LineSource;
use crate::{Error, Reader, Result};
use num_bigint::BigInt;

/// Conversion of a single token into `Self`.
pub trait FromToken: Sized {
    /// Target name reported in [`Error::Conversion`].
    const TYPE_NAME: &'static str;

    /// # Errors
    ///
    /// Returns [`Error::Conversion`] when `token` does not represent a `Self`.
    fn from_token(token: &str) -> Result<Self>;
}

/// Types that can be read from a [`Reader`], consuming one or more tokens.
pub trait Scan: Sized {
    /// # Errors
    ///
    /// Propagates the first read or conversion failure. Tokens consumed
    /// before the failure are not restored.
    fn scan<S: LineSource>(reader: &mut Reader<S>, separator: &Separator) -> Result<Self>;
}

macro_rules! impl_integer {
    ($($t:ty),*) => {
        $(
            impl FromToken for $t {
                const TYPE_NAME: &'static str = stringify!($t);

                fn from_token(token: &str) -> Result<Self> {
                    token
                        .trim()
                        .parse::<$t>()
                        .map_err(|e| Error::conversion(token, Self::TYPE_NAME, e))
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_float {
    ($($t:ty),*) => {
        $(
            impl FromToken for $t {
                const TYPE_NAME: &'static str = stringify!($t);

                fn from_token(token: &str) -> Result<Self> {
                    token
                        .trim()
                        .parse::<$t>()
                        .map_err(|e| Error::conversion(token, Self::TYPE_NAME, e))
                }
            }
        )*
    };
}

impl_float!(f32, f64);

impl FromToken for bool {
    const TYPE_NAME: &'static str = "bool";

    fn from_token(token: &str) -> Result<Self> {
        parse_bool(token)
    }
}

impl FromToken for String {
    const TYPE_NAME: &'static str = "String";

    fn from_token(token: &str) -> Result<Self> {
        Ok(token.to_string())
    }
}

impl FromToken for BigInt {
    const TYPE_NAME: &'static str = "BigInt";

    fn from_token(token: &str) -> Result<Self> {
        parse_bigint(token, Self::TYPE_NAME)
    }
}

macro_rules! impl_scan_scalar {
    ($($t:ty),*) => {
        $(
            impl Scan for $t {
                fn scan<S: LineSource>(reader: &mut Reader<S>, separator: &Separator) -> Result<Self> {
                    let token = reader.next_token(separator)?;
                    <$t as FromToken>::from_token(&token)
                }
            }
        )*
    };
}

impl_scan_scalar!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, String, BigInt
);

macro_rules! impl_scan_tuple {
    ($($name:ident),+) => {
        impl<$($name: Scan),+> Scan for ($($name,)+) {
            fn scan<S: LineSource>(reader: &mut Reader<S>, separator: &Separator) -> Result<Self> {
                Ok(($($name::scan(reader, separator)?,)+))
            }
        }
    };
}

impl_scan_tuple!(A);
impl_scan_tuple!(A, B);
impl_scan_tuple!(A, B, C);
impl_scan_tuple!(A, B, C, D);
impl_scan_tuple!(A, B, C, D, E);
impl_scan_tuple!(A, B, C, D, E, F);
impl_scan_tuple!(A, B, C, D, E, F, G);
impl_scan_tuple!(A, B, C, D, E, F, G, H);

impl<T: Scan, const N: usize> Scan for [T; N] {
    fn scan<S: LineSource>(reader: &mut Reader<S>, separator: &Separator) -> Result<Self> {
        if N == 0 {
            return Err(Error::invalid_request("list shape must not be empty"));
        }
        let items = (0..N)
            .map(|_| T::scan(reader, separator))
            .collect::<Result<Vec<T>>>()?;
        <[T; N]>::try_from(items)
            .map_err(|_| Error::invalid_request("list shape length mismatch"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader(input: &str) -> Reader<&[u8]> {
        Reader::new(input.as_bytes())
    }

    #[test]
    fn test_scan_mixed_tuple() {
        let mut reader = reader("42 2.5 true hello\n");
        let (a, b, c, d): (i32, f64, bool, String) = reader.scan().unwrap();
        assert_eq!(a, 42);
        assert_eq!(b, 2.5);
        assert!(c);
        assert_eq!(d, "hello");
    }

    #[test]
    fn test_scan_nested_arrays() {
        let mut reader = reader("1 2\n3 4\n5 6\n7 8\n9 10\n11 12\n");
        let cube: [[[u8; 2]; 2]; 3] = reader.scan().unwrap();
        assert_eq!(
            cube,
            [[[1, 2], [3, 4]], [[5, 6], [7, 8]], [[9, 10], [11, 12]]]
        );
    }

    #[test]
    fn test_scan_zero_length_array() {
        let mut reader = reader("1\n");
        let result: Result<[i32; 0]> = reader.scan();
        assert!(matches!(result, Err(Error::InvalidRequest(_))));
        assert_eq!(reader.readline().unwrap(), "1");
    }

    #[test]
    fn test_scan_integer_overflow_per_type() {
        let mut reader = reader("300 300\n");
        let err = reader.scan::<u8>().unwrap_err();
        assert!(matches!(err, Error::Conversion { ref target, .. } if target == "u8"));
        assert_eq!(reader.scan::<u16>().unwrap(), 300);
    }

    #[test]
    fn test_scan_bigint() {
        let mut reader = reader("340282366920938463463374607431768211456\n");
        let big: BigInt = reader.scan().unwrap();
        assert_eq!(big, BigInt::from(u128::MAX) + 1);
    }

    #[test]
    fn test_scan_bigint_rejects_digit_separators() {
        let mut reader = reader("1_000 99999999999999999999_0 -12\n");
        for expected in ["1_000", "99999999999999999999_0"] {
            match reader.scan::<BigInt>() {
                Err(Error::Conversion { token, target, .. }) => {
                    assert_eq!(token, expected);
                    assert_eq!(target, "BigInt");
                }
                other => panic!("expected conversion error, got {:?}", other),
            }
        }
        assert_eq!(reader.scan::<BigInt>().unwrap(), BigInt::from(-12));
    }

    #[test]
    fn test_scan_list() {
        let mut reader = reader("1 2 3\n4 5\n");
        assert_eq!(reader.scan_list::<i64>(5).unwrap(), vec![1, 2, 3, 4, 5]);
    }
}
