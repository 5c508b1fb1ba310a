//! Conversion functions, grouped by target type.
//!
//! Each target has up to three forms:
//! - `to_x`: never fails, substitutes a default (0, `false`, [`DateTime::MIN`](crate::DateTime::MIN))
//! - `to_x_or_null`: `None` for absent or unparseable input
//! - `try_to_x`: a [`ConvertError`] saying which of the two it was

pub mod boolean;
pub mod date;
pub mod numeric;
pub mod text;

use tracing::trace;

use crate::error::ConvertError;

pub use boolean::{to_bool, to_bool_or_null, try_to_bool};
pub use date::{to_date, to_date_or_null, try_to_date};
pub use numeric::{
    to_decimal, to_decimal_or_null, to_decimal_or_null_rounded, to_decimal_rounded, to_double,
    to_double_or_null, to_double_rounded, to_int, to_int_or_null, try_to_decimal, try_to_double,
    try_to_int,
};
pub use text::{safe_string, stringify};

/// Unwraps a strict result, substituting `default` on any error.
fn or_default<T>(result: Result<T, ConvertError>, default: T, target: &'static str) -> T {
    result.unwrap_or_else(|err| {
        if !err.is_absent() {
            trace!(target_type = target, %err, "conversion failed, using default");
        }
        default
    })
}
