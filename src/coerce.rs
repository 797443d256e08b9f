//! Scalar coercion rules.
//!
//! | Request | Rule |
//! |---------|------|
//! | Integer | optional sign and decimal digits; surrounding whitespace ignored; beyond `i64` becomes a big integer |
//! | Float | standard `f64` syntax, including `inf` and `NaN`; surrounding whitespace ignored |
//! | Boolean | exactly `true` or `false`, compared case-insensitively |
//! | String | the token as-is |
//! | Custom | the caller's function; its failure is reported as a conversion error |

use crate::request::TypeRequest;
use crate::value::Number;
use crate::{Error, Result, Value};
use num_bigint::BigInt;
use std::num::IntErrorKind;

/// Coerces one token according to a scalar request.
///
/// List shapes never reach this point; they are expanded by the reader.
pub(crate) fn coerce(token: &str, request: &TypeRequest) -> Result<Value> {
    match request {
        TypeRequest::Integer => parse_integer(token),
        TypeRequest::Float => parse_float(token).map(|f| Value::Number(Number::Float(f))),
        TypeRequest::Boolean => parse_bool(token).map(Value::Bool),
        TypeRequest::String => Ok(Value::String(token.to_string())),
        TypeRequest::Custom(converter) => converter.convert(token),
        TypeRequest::List(_) => Err(Error::invalid_request(
            "list shapes must be expanded before coercion",
        )),
    }
}

/// Parses a decimal integer, falling back to a big integer past `i64`.
pub fn parse_integer(token: &str) -> Result<Value> {
    let trimmed = token.trim();
    match trimmed.parse::<i64>() {
        Ok(i) => Ok(Value::Number(Number::Integer(i))),
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            parse_bigint(token, "integer").map(Value::BigInt)
        }
        Err(e) => Err(Error::conversion(token, "integer", e)),
    }
}

/// Parses an arbitrarily large decimal integer.
///
/// Only an optional sign followed by ASCII digits is accepted; digit
/// separators such as `_` are rejected just as they are for `i64`.
pub(crate) fn parse_bigint(token: &str, target: &str) -> Result<BigInt> {
    let trimmed = token.trim();
    let digits = trimmed.strip_prefix(&['+', '-'][..]).unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::conversion(token, target, "invalid digit found in string"));
    }
    trimmed
        .parse::<BigInt>()
        .map_err(|e| Error::conversion(token, target, e))
}

pub fn parse_float(token: &str) -> Result<f64> {
    token
        .trim()
        .parse::<f64>()
        .map_err(|e| Error::conversion(token, "float", e))
}

/// Accepts `true`/`false` in any letter case and nothing else.
///
/// # Examples
///
/// ```rust
/// use linescan::coerce::parse_bool;
///
/// assert_eq!(parse_bool("TRUE").unwrap(), true);
/// assert_eq!(parse_bool("False").unwrap(), false);
/// assert!(parse_bool("yes").is_err());
/// assert!(parse_bool("1").is_err());
/// ```
pub fn parse_bool(token: &str) -> Result<bool> {
    if token.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if token.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(Error::conversion(
            token,
            "boolean",
            "expected `true` or `false`",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer() {
        assert_eq!(parse_integer("42").unwrap(), Value::from(42i64));
        assert_eq!(parse_integer("-7").unwrap(), Value::from(-7i64));
        assert_eq!(parse_integer("+7").unwrap(), Value::from(7i64));
        assert_eq!(parse_integer(" 42 ").unwrap(), Value::from(42i64));
        assert!(parse_integer("4.2").is_err());
        assert!(parse_integer("not_a_number").is_err());
        assert!(parse_integer("").is_err());
    }

    #[test]
    fn test_integer_overflow_becomes_bigint() {
        let value = parse_integer("123456789012345678901234567890").unwrap();
        let expected: BigInt = "123456789012345678901234567890".parse().unwrap();
        assert_eq!(value, Value::BigInt(expected));

        let value = parse_integer("-99999999999999999999").unwrap();
        assert!(value.is_bigint());
    }

    #[test]
    fn test_digit_separators_rejected_at_any_size() {
        for token in ["1_000", "99999999999999999999_0", "_99999999999999999999"] {
            match parse_integer(token) {
                Err(Error::Conversion { token: t, target, .. }) => {
                    assert_eq!(t, token);
                    assert_eq!(target, "integer");
                }
                other => panic!("expected conversion error for {}, got {:?}", token, other),
            }
        }
        assert!(parse_bigint("+", "integer").is_err());
        assert_eq!(
            parse_bigint(" +123 ", "integer").unwrap(),
            BigInt::from(123)
        );
    }

    #[test]
    fn test_float() {
        assert_eq!(parse_float("2.75").unwrap(), 2.75);
        assert_eq!(parse_float("1e3").unwrap(), 1000.0);
        assert_eq!(parse_float("42").unwrap(), 42.0);
        assert!(parse_float("inf").unwrap().is_infinite());
        assert!(parse_float("3,14").is_err());
    }

    #[test]
    fn test_bool_exact_spellings_only() {
        for token in ["true", "True", "TRUE", "tRuE"] {
            assert!(parse_bool(token).unwrap());
        }
        for token in ["false", "False", "FALSE"] {
            assert!(!parse_bool(token).unwrap());
        }
        for token in ["1", "0", "yes", "no", "t", "f", " true"] {
            assert!(matches!(parse_bool(token), Err(Error::Conversion { .. })));
        }
    }

    #[test]
    fn test_string_is_identity() {
        let token = "hello!@#$%^&*()world";
        assert_eq!(
            coerce(token, &TypeRequest::String).unwrap(),
            Value::from(token)
        );
    }

    #[test]
    fn test_conversion_error_carries_target() {
        match coerce("abc", &TypeRequest::Float) {
            Err(Error::Conversion { token, target, .. }) => {
                assert_eq!(token, "abc");
                assert_eq!(target, "float");
            }
            other => panic!("expected conversion error, got {:?}", other),
        }
    }
}
