//! Primitive value model shared by every backend.
//!
//! A backing medium natively understands three shapes: numbers, text and
//! byte blobs. [`Primitive`] is the closed set of those shapes; [`Number`]
//! is the native numeric representation with its permitted conversions.
//! The category traits ([`Numeric`], [`IntEnum`], [`StrEnum`]) describe how
//! typed values reduce to a primitive shape.

use serde::{Deserialize, Serialize};

/// Native numeric representation of the storage layer.
///
/// Conversion between `Number` and a concrete numeric type is the only
/// widening/narrowing the library performs. Signed and unsigned integers
/// interconvert when the value is in range of the requested type; floats
/// convert only to float types and bools only to bool. Integers never
/// silently become floats or vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Number {
    /// A signed integer.
    Int(i64),
    /// An unsigned integer outside (or regardless of) `i64` range.
    UInt(u64),
    /// A floating-point number.
    Float(f64),
    /// A boolean, stored in the numeric slot like the platform stores do.
    Bool(bool),
}

impl Number {
    /// The value as a signed integer, when representable.
    pub fn as_i64(self) -> Option<i64> {
        match self {
            Number::Int(value) => Some(value),
            Number::UInt(value) => i64::try_from(value).ok(),
            Number::Float(_) | Number::Bool(_) => None,
        }
    }

    /// The value as an unsigned integer, when representable.
    pub fn as_u64(self) -> Option<u64> {
        match self {
            Number::Int(value) => u64::try_from(value).ok(),
            Number::UInt(value) => Some(value),
            Number::Float(_) | Number::Bool(_) => None,
        }
    }

    /// The value as a float. Integers do not coerce.
    pub fn as_f64(self) -> Option<f64> {
        match self {
            Number::Float(value) => Some(value),
            Number::Int(_) | Number::UInt(_) | Number::Bool(_) => None,
        }
    }

    /// The value as a bool. Numbers do not coerce.
    pub fn as_bool(self) -> Option<bool> {
        match self {
            Number::Bool(value) => Some(value),
            Number::Int(_) | Number::UInt(_) | Number::Float(_) => None,
        }
    }
}

/// A value in one of the shapes a backing medium natively understands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    /// A number (including bools).
    Number(Number),
    /// A UTF-8 string.
    Text(String),
    /// An opaque byte sequence, e.g. a serialized structured value.
    Blob(Vec<u8>),
}

/// A type stored in the numeric slot.
pub trait Numeric: Copy {
    /// Reduce to the native numeric representation.
    fn into_number(self) -> Number;

    /// Reconstruct from the native numeric representation, when the stored
    /// number is representable as `Self`.
    fn from_number(number: Number) -> Option<Self>;
}

macro_rules! numeric_signed {
    ($($ty:ty),+) => {$(
        impl Numeric for $ty {
            fn into_number(self) -> Number {
                Number::Int(i64::from(self))
            }

            fn from_number(number: Number) -> Option<Self> {
                number.as_i64().and_then(|value| Self::try_from(value).ok())
            }
        }
    )+};
}

macro_rules! numeric_unsigned {
    ($($ty:ty),+) => {$(
        impl Numeric for $ty {
            fn into_number(self) -> Number {
                Number::UInt(u64::from(self))
            }

            fn from_number(number: Number) -> Option<Self> {
                number.as_u64().and_then(|value| Self::try_from(value).ok())
            }
        }
    )+};
}

numeric_signed!(i8, i16, i32, i64);
numeric_unsigned!(u8, u16, u32, u64);

impl Numeric for f64 {
    fn into_number(self) -> Number {
        Number::Float(self)
    }

    fn from_number(number: Number) -> Option<Self> {
        number.as_f64()
    }
}

impl Numeric for f32 {
    fn into_number(self) -> Number {
        Number::Float(f64::from(self))
    }

    fn from_number(number: Number) -> Option<Self> {
        let wide = number.as_f64()?;
        let narrow = wide as f32;
        // Only values that survive the round-trip narrow to f32.
        (f64::from(narrow) == wide || wide.is_nan()).then_some(narrow)
    }
}

impl Numeric for bool {
    fn into_number(self) -> Number {
        Number::Bool(self)
    }

    fn from_number(number: Number) -> Option<Self> {
        number.as_bool()
    }
}

/// An enumeration stored by its integer raw value.
///
/// Saving stores `raw()`; loading maps the stored integer back through
/// `from_raw`, and an unknown raw value degrades to the caller's default.
pub trait IntEnum: Sized {
    /// The case for `raw`, if any.
    fn from_raw(raw: i64) -> Option<Self>;

    /// The underlying integer of this case.
    fn raw(&self) -> i64;
}

/// An enumeration stored by its string raw value.
pub trait StrEnum: Sized {
    /// The case for `raw`, if any.
    fn from_raw(raw: &str) -> Option<Self>;

    /// The underlying string of this case.
    fn raw(&self) -> &'static str;
}
