//! Deserialization of read results into Rust types.
//!
//! A [`Value`] tree is self-describing, so it drives any `Deserialize` type
//! through `deserialize_any`: lists and tuples become sequences, which serde
//! maps onto tuples, arrays, `Vec`s and tuple structs alike.
//!
//! ## Usage
//!
//! ```rust
//! use linescan::{from_value, Value};
//!
//! let value = Value::Tuple(vec![Value::from(7i64), Value::from("seven")]);
//! let (n, word): (u8, String) = from_value(value).unwrap();
//! assert_eq!((n, word.as_str()), (7, "seven"));
//! ```

use crate::value::Number;
use crate::{Error, Result, Value};
use num_bigint::BigInt;
use serde::de::value::SeqDeserializer;
use serde::de::{self, DeserializeOwned, IntoDeserializer, Visitor};
use serde::forward_to_deserialize_any;

/// Deserializes an instance of `T` from a [`Value`].
///
/// # Errors
///
/// Returns [`Error::Custom`] if the shape or scalar types of `value` do not
/// fit `T`.
pub fn from_value<T: DeserializeOwned>(value: Value) -> Result<T> {
    T::deserialize(value)
}

fn visit_bigint<'de, V: Visitor<'de>>(bi: BigInt, visitor: V) -> Result<V::Value> {
    if let Ok(u) = u64::try_from(&bi) {
        visitor.visit_u64(u)
    } else if let Ok(i) = i128::try_from(&bi) {
        visitor.visit_i128(i)
    } else if let Ok(u) = u128::try_from(&bi) {
        visitor.visit_u128(u)
    } else {
        visitor.visit_string(bi.to_string())
    }
}

impl<'de> de::Deserializer<'de> for Value {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self {
            Value::Bool(b) => visitor.visit_bool(b),
            Value::Number(Number::Integer(i)) => visitor.visit_i64(i),
            Value::Number(Number::Float(f)) => visitor.visit_f64(f),
            Value::BigInt(bi) => visit_bigint(bi, visitor),
            Value::String(s) => visitor.visit_string(s),
            Value::List(items) | Value::Tuple(items) => {
                let mut seq = SeqDeserializer::<_, Error>::new(items.into_iter());
                let value = visitor.visit_seq(&mut seq)?;
                seq.end()?;
                Ok(value)
            }
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_some(self)
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple
        tuple_struct map struct enum identifier ignored_any
    }
}

impl<'de> IntoDeserializer<'de, Error> for Value {
    type Deserializer = Self;

    fn into_deserializer(self) -> Self::Deserializer {
        self
    }
}
