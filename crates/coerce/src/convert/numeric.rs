//! Numeric conversions: `i32`, `f64` and [`Decimal`].

use tracing::trace;

use crate::convert::{or_default, stringify};
use crate::error::ConvertError;
use crate::model::{Decimal, Rounding, Value};
use crate::util::number::{parse_decimal, parse_double, parse_int, round_f64};

/// Strictly converts to `i32`.
pub fn try_to_int<'a>(data: impl Into<Value<'a>>) -> Result<i32, ConvertError> {
    match data.into() {
        Value::Null => Err(ConvertError::Absent),
        Value::Int(v) => i32::try_from(v).map_err(|_| ConvertError::InvalidInt { text: v.to_string() }),
        other => parse_int(&stringify(&other)),
    }
}

/// Converts to `i32`, or `None` if absent or not a strict integer.
///
/// Unlike [`to_int`], `"3.7"` is `None` here.
pub fn to_int_or_null<'a>(data: impl Into<Value<'a>>) -> Option<i32> {
    try_to_int(data).ok()
}

/// Converts to `i32`, or `0` if absent or unparseable.
///
/// Text that is not a strict integer is parsed as a double and truncated
/// toward zero, so `"3.7"` becomes `3`. A double outside the `i32` range
/// gives `0`.
pub fn to_int<'a>(data: impl Into<Value<'a>>) -> i32 {
    let value = data.into();
    if value.is_null() {
        return 0;
    }
    match try_to_int(&value) {
        Ok(v) => v,
        Err(err) => {
            trace!(%err, kind = ?value.kind(), "strict integer parse failed, trying double");
            truncate_to_int(to_double(&value))
        }
    }
}

fn truncate_to_int(value: f64) -> i32 {
    let truncated = value.trunc();
    if truncated.is_nan() || truncated < f64::from(i32::MIN) || truncated > f64::from(i32::MAX) {
        trace!(value, "double out of integer range");
        return 0;
    }
    truncated as i32
}

/// Strictly converts to `f64`.
pub fn try_to_double<'a>(data: impl Into<Value<'a>>) -> Result<f64, ConvertError> {
    match data.into() {
        Value::Null => Err(ConvertError::Absent),
        Value::Float(v) => Ok(v),
        Value::Int(v) => Ok(v as f64),
        other => parse_double(&stringify(&other)),
    }
}

/// Converts to `f64`, or `None` if absent or unparseable.
pub fn to_double_or_null<'a>(data: impl Into<Value<'a>>) -> Option<f64> {
    try_to_double(data).ok()
}

/// Converts to `f64`, or `0.0` if absent or unparseable.
pub fn to_double<'a>(data: impl Into<Value<'a>>) -> f64 {
    or_default(try_to_double(data), 0.0, "double")
}

/// Converts to `f64` rounded to `digits` fractional digits, ties to even.
///
/// `digits` above 15 is treated as 15.
pub fn to_double_rounded<'a>(data: impl Into<Value<'a>>, digits: u32) -> f64 {
    round_f64(to_double(data), digits, Rounding::HalfEven)
}

/// Strictly converts to [`Decimal`].
pub fn try_to_decimal<'a>(data: impl Into<Value<'a>>) -> Result<Decimal, ConvertError> {
    match data.into() {
        Value::Null => Err(ConvertError::Absent),
        Value::Decimal(v) => Ok(v),
        Value::Int(v) => Ok(Decimal::from(v)),
        other => parse_decimal(&stringify(&other)),
    }
}

/// Converts to [`Decimal`], or `None` if absent or unparseable.
pub fn to_decimal_or_null<'a>(data: impl Into<Value<'a>>) -> Option<Decimal> {
    try_to_decimal(data).ok()
}

/// Converts to [`Decimal`] and rounds a present result to `digits`, ties to even.
pub fn to_decimal_or_null_rounded<'a>(data: impl Into<Value<'a>>, digits: u32) -> Option<Decimal> {
    to_decimal_or_null(data).map(|d| d.round_dp(digits))
}

/// Converts to [`Decimal`], or zero if absent or unparseable.
pub fn to_decimal<'a>(data: impl Into<Value<'a>>) -> Decimal {
    or_default(try_to_decimal(data), Decimal::ZERO, "decimal")
}

/// Converts to [`Decimal`] rounded to `digits` fractional digits, ties to even.
///
/// `to_decimal_rounded("2.005", 2)` is `2.00`.
pub fn to_decimal_rounded<'a>(data: impl Into<Value<'a>>, digits: u32) -> Decimal {
    to_decimal(data).round_dp(digits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_absent_defaults() {
        assert_eq!(to_int(None::<&str>), 0);
        assert_eq!(to_double(Value::Null), 0.0);
        assert_eq!(to_decimal(Value::Null), Decimal::ZERO);
        assert_eq!(to_int_or_null(Value::Null), None);
        assert_eq!(to_double_or_null(Value::Null), None);
        assert_eq!(to_decimal_or_null(Value::Null), None);
        assert_eq!(to_decimal_or_null_rounded(Value::Null, 2), None);
        assert_eq!(try_to_int(Value::Null), Err(ConvertError::Absent));
    }

    #[test]
    fn test_int_strict() {
        assert_eq!(to_int("42"), 42);
        assert_eq!(to_int(" 42 "), 42);
        assert_eq!(to_int_or_null("42"), Some(42));
        assert_eq!(to_int_or_null(" -42 "), Some(-42));
        assert_eq!(to_int(7i64), 7);
        assert_eq!(to_int_or_null(true), None);
    }

    #[test]
    fn test_int_double_fallback() {
        assert_eq!(to_int("3.7"), 3);
        assert_eq!(to_int("3.0"), 3);
        assert_eq!(to_int("-3.7"), -3);
        assert_eq!(to_int("1,234"), 1234);
        assert_eq!(to_int("1e3"), 1000);
        assert_eq!(to_int(2.9), 2);
        assert_eq!(to_int_or_null("3.7"), None);
        assert_eq!(to_int_or_null("3.0"), None);
    }

    #[test]
    fn test_int_failures_are_zero() {
        assert_eq!(to_int("abc"), 0);
        assert_eq!(to_int(""), 0);
        assert_eq!(to_int("NaN"), 0);
        assert_eq!(to_int("Infinity"), 0);
        assert_eq!(to_int("3000000000"), 0);
        assert_eq!(to_int(5_000_000_000i64), 0);
        assert_eq!(to_int_or_null("abc"), None);
        assert!(matches!(try_to_int("abc"), Err(ConvertError::InvalidInt { .. })));
    }

    #[test]
    fn test_double() {
        assert_eq!(to_double("3.14159"), 3.14159);
        assert_eq!(to_double(" 2.5 "), 2.5);
        assert_eq!(to_double(10), 10.0);
        assert_eq!(to_double(dec("2.50")), 2.5);
        assert_eq!(to_double("abc"), 0.0);
        assert_eq!(to_double_or_null("abc"), None);
        assert_eq!(to_double_or_null("1e3"), Some(1000.0));
    }

    #[test]
    fn test_non_finite_double_survives_text() {
        for x in [f64::INFINITY, f64::NEG_INFINITY] {
            let text = stringify(x);
            assert_eq!(to_double(&*text), x);
            assert_eq!(to_double(x), to_double(&*text));
            assert_eq!(to_double_or_null(&*text), Some(x));
        }

        let text = stringify(f64::NAN);
        assert!(to_double(&*text).is_nan());
        assert!(to_double_or_null(&*text).is_some_and(f64::is_nan));
        assert_eq!(to_int(f64::INFINITY), to_int(stringify(f64::INFINITY)));
    }

    #[test]
    fn test_double_rounded() {
        assert_eq!(to_double_rounded("3.14159", 2), 3.14);
        assert_eq!(to_double_rounded("2.5", 0), 2.0);
        assert_eq!(to_double_rounded("3.5", 0), 4.0);
        assert_eq!(to_double_rounded("abc", 2), 0.0);
        assert_eq!(to_double_rounded("1.25", 99), 1.25);
    }

    #[test]
    fn test_decimal() {
        assert_eq!(to_decimal("2.50"), dec("2.5"));
        assert_eq!(to_decimal("2.50").to_string(), "2.50");
        assert_eq!(to_decimal(42i64), dec("42"));
        assert_eq!(to_decimal(0.1), dec("0.1"));
        assert_eq!(to_decimal("1e3"), Decimal::ZERO);
        assert_eq!(to_decimal("abc"), Decimal::ZERO);
        assert_eq!(to_decimal_or_null("1e3"), None);
        assert_eq!(to_decimal_or_null(" -7.25 "), Some(dec("-7.25")));
    }

    #[test]
    fn test_decimal_rounded_half_even() {
        assert_eq!(to_decimal_rounded("2.005", 2), dec("2.00"));
        assert_eq!(to_decimal_rounded("2.015", 2), dec("2.02"));
        assert_eq!(to_decimal_rounded("2.005", 2).to_string(), "2.00");
        assert_eq!(to_decimal_or_null_rounded("2.345", 2), Some(dec("2.34")));
        assert_eq!(to_decimal_or_null_rounded("abc", 2), None);
    }

    proptest! {
        #[test]
        fn prop_int_roundtrip(n in any::<i32>()) {
            prop_assert_eq!(to_int(stringify(n)), n);
            prop_assert_eq!(to_int_or_null(n.to_string()), Some(n));
        }

        #[test]
        fn prop_padded_int(n in any::<i32>(), left in " {0,3}", right in " {0,3}") {
            let padded = format!("{}{}{}", left, n, right);
            prop_assert_eq!(to_int(padded.as_str()), n);
        }

        #[test]
        fn prop_double_roundtrip(x in proptest::num::f64::NORMAL) {
            prop_assert_eq!(to_double(stringify(x)), x);
        }
    }
}
