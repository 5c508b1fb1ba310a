//! Input values accepted by the conversion functions.

use std::borrow::Cow;
use std::fmt;

use crate::model::{DateTime, Decimal};

/// Kinds of [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Text,
    Int,
    Float,
    Decimal,
    Bool,
    Date,
}

/// An untyped input value.
///
/// Every conversion takes `impl Into<Value>`, so plain Rust values, text and
/// `Option`s can be passed directly. `None` converts to [`Value::Null`].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value<'a> {
    /// Absent input.
    #[default]
    Null,

    /// Text, not yet trimmed.
    Text(Cow<'a, str>),

    /// Integral number.
    Int(i64),

    /// Floating point number.
    Float(f64),

    /// Fixed-point number.
    Decimal(Decimal),

    /// Boolean.
    Bool(bool),

    /// Date and time.
    Date(DateTime),
}

impl Value<'_> {
    /// Returns the kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Text(_) => ValueKind::Text,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Decimal(_) => ValueKind::Decimal,
            Value::Bool(_) => ValueKind::Bool,
            Value::Date(_) => ValueKind::Date,
        }
    }

    /// Returns true for absent input.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Converts into a value that owns its text.
    pub fn into_owned(self) -> Value<'static> {
        match self {
            Value::Null => Value::Null,
            Value::Text(s) => Value::Text(Cow::Owned(s.into_owned())),
            Value::Int(v) => Value::Int(v),
            Value::Float(v) => Value::Float(v),
            Value::Decimal(v) => Value::Decimal(v),
            Value::Bool(v) => Value::Bool(v),
            Value::Date(v) => Value::Date(v),
        }
    }
}

/// The default textual representation, before trimming.
impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Text(s) => f.write_str(s),
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) if v.is_infinite() => {
                f.write_str(if v.is_sign_negative() { "-Infinity" } else { "Infinity" })
            }
            Value::Float(v) => write!(f, "{}", v),
            Value::Decimal(v) => write!(f, "{}", v),
            Value::Bool(v) => write!(f, "{}", v),
            Value::Date(v) => write!(f, "{}", v),
        }
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::Text(Cow::Borrowed(s))
    }
}

impl<'a> From<&'a String> for Value<'a> {
    fn from(s: &'a String) -> Self {
        Value::Text(Cow::Borrowed(s.as_str()))
    }
}

impl From<String> for Value<'_> {
    fn from(s: String) -> Self {
        Value::Text(Cow::Owned(s))
    }
}

impl<'a> From<Cow<'a, str>> for Value<'a> {
    fn from(s: Cow<'a, str>) -> Self {
        Value::Text(s)
    }
}

macro_rules! impl_value_from {
    ($variant:ident: $($t:ty),*) => {
        $(
            impl From<$t> for Value<'_> {
                fn from(v: $t) -> Self {
                    Value::$variant(v.into())
                }
            }
        )*
    };
}

impl_value_from!(Int: i8, i16, i32, i64, u8, u16, u32);
impl_value_from!(Float: f64);
impl_value_from!(Bool: bool);
impl_value_from!(Decimal: Decimal);
impl_value_from!(Date: DateTime);

/// Borrows the text of another value.
impl<'a> From<&'a Value<'_>> for Value<'a> {
    fn from(v: &'a Value<'_>) -> Self {
        match v {
            Value::Text(s) => Value::Text(Cow::Borrowed(s.as_ref())),
            Value::Null => Value::Null,
            Value::Int(v) => Value::Int(*v),
            Value::Float(v) => Value::Float(*v),
            Value::Decimal(v) => Value::Decimal(*v),
            Value::Bool(v) => Value::Bool(*v),
            Value::Date(v) => Value::Date(*v),
        }
    }
}

impl<'a, T: Into<Value<'a>>> From<Option<T>> for Value<'a> {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}
