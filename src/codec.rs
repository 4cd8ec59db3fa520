//! Per-category conversion between typed values and stored primitives.
//!
//! One encode/decode pair per value category. Decoding is total: a stored
//! primitive of the wrong shape, an unknown enum raw value, or undecodable
//! structured bytes all come back as `None`, and the store layer turns that
//! into the caller's default. The only fallible encode is the structured
//! one, whose error the store layer degrades to a no-op save.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::value::{IntEnum, Number, Numeric, Primitive, StrEnum};

pub(crate) fn encode_number<N: Numeric>(value: N) -> Primitive {
    Primitive::Number(value.into_number())
}

pub(crate) fn decode_number<N: Numeric>(stored: Primitive) -> Option<N> {
    match stored {
        Primitive::Number(number) => N::from_number(number),
        Primitive::Text(_) | Primitive::Blob(_) => None,
    }
}

pub(crate) fn encode_text(value: String) -> Primitive {
    Primitive::Text(value)
}

pub(crate) fn decode_text(stored: Primitive) -> Option<String> {
    match stored {
        Primitive::Text(text) => Some(text),
        Primitive::Number(_) | Primitive::Blob(_) => None,
    }
}

pub(crate) fn encode_int_enum<E: IntEnum>(value: &E) -> Primitive {
    Primitive::Number(Number::Int(value.raw()))
}

pub(crate) fn decode_int_enum<E: IntEnum>(stored: Primitive) -> Option<E> {
    match stored {
        Primitive::Number(number) => E::from_raw(number.as_i64()?),
        Primitive::Text(_) | Primitive::Blob(_) => None,
    }
}

pub(crate) fn encode_str_enum<E: StrEnum>(value: &E) -> Primitive {
    Primitive::Text(value.raw().to_owned())
}

pub(crate) fn decode_str_enum<E: StrEnum>(stored: Primitive) -> Option<E> {
    match stored {
        Primitive::Text(text) => E::from_raw(&text),
        Primitive::Number(_) | Primitive::Blob(_) => None,
    }
}

pub(crate) fn encode_object<T: Serialize>(value: &T) -> Result<Primitive, serde_json::Error> {
    serde_json::to_vec(value).map(Primitive::Blob)
}

pub(crate) fn decode_object<T: DeserializeOwned>(stored: Primitive) -> Option<T> {
    match stored {
        Primitive::Blob(bytes) => serde_json::from_slice(&bytes).ok(),
        Primitive::Number(_) | Primitive::Text(_) => None,
    }
}
