//! Strictly typed constant values.
//!
//! Equality never coerces across kinds: the string `"100"` is not the
//! integer `100`, and the integer `1` is neither `1.0` nor `true`.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A value bound to a named constant, or a value being looked up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConstValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<ConstValue>),
}

impl ConstValue {
    /// Returns a short name for the kind of value, used in diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
            Self::List(_) => "list",
        }
    }

    /// Returns the string contents if this is a string value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer if this is an integer value.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for ConstValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x:?}"),
            Self::Str(s) => write!(f, "{s:?}"),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

macro_rules! impl_from_int {
    ($($int:ty),*) => {
        $(
            impl From<$int> for ConstValue {
                fn from(n: $int) -> Self {
                    Self::Int(i64::from(n))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

// Wider integers only convert when the value fits in an `i64`.
macro_rules! impl_try_from_int {
    ($($int:ty),*) => {
        $(
            impl TryFrom<$int> for ConstValue {
                type Error = Error;

                fn try_from(n: $int) -> Result<Self, Self::Error> {
                    i64::try_from(n)
                        .map(Self::Int)
                        .map_err(|_| Error::IntegerOutOfRange(n.to_string()))
                }
            }
        )*
    };
}

impl_try_from_int!(u64, usize, isize, i128, u128);

impl From<bool> for ConstValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f32> for ConstValue {
    fn from(x: f32) -> Self {
        Self::Float(f64::from(x))
    }
}

impl From<f64> for ConstValue {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<char> for ConstValue {
    fn from(c: char) -> Self {
        Self::Str(c.to_string())
    }
}

impl From<&str> for ConstValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_owned())
    }
}

impl From<String> for ConstValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl<T: Into<ConstValue>> From<Option<T>> for ConstValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<ConstValue>> From<Vec<T>> for ConstValue {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ConstValue> + Clone> From<&[T]> for ConstValue {
    fn from(items: &[T]) -> Self {
        Self::List(items.iter().cloned().map(Into::into).collect())
    }
}
