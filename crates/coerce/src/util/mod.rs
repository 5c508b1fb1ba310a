//! Text parsing utilities.

pub mod datetime;
pub mod number;

pub use datetime::{format_datetime, parse_datetime};
pub use number::{parse_decimal, parse_double, parse_int, round_f64};
