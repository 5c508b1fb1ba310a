//! Data model types.
//!
//! - Values (the untyped conversion input)
//! - Decimals (fixed-point numbers with a 96-bit mantissa)
//! - Date/times (wall clock plus optional offset)

pub mod datetime;
pub mod decimal;
pub mod value;

pub use datetime::DateTime;
pub use decimal::{Decimal, Rounding};
pub use value::{Value, ValueKind};
