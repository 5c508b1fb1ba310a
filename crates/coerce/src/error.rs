//! Error types for strict conversions.
//!
//! Only the `try_*` family surfaces these. The plain functions substitute a
//! default and the `*_or_null` functions discard the error.

use thiserror::Error;

/// Error from the lenient date/time parser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct DateTimeParseError {
    pub message: String,
}

impl DateTimeParseError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Error during a strict conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("input is absent")]
    Absent,

    #[error("invalid integer: {text:?}")]
    InvalidInt { text: String },

    #[error("invalid floating point number: {text:?}")]
    InvalidFloat { text: String },

    #[error("invalid decimal: {text:?}")]
    InvalidDecimal { text: String },

    #[error("invalid boolean: {text:?}")]
    InvalidBool { text: String },

    #[error("invalid date: {0}")]
    InvalidDate(#[from] DateTimeParseError),
}

impl ConvertError {
    /// Returns true if the input was absent rather than unparseable.
    pub fn is_absent(&self) -> bool {
        matches!(self, ConvertError::Absent)
    }
}
