//! Strict, locale-independent number parsers and rounding helpers.
//!
//! The grammars are fixed: `.` is the decimal separator and `,` the group
//! separator. Surrounding whitespace is ignored everywhere.

use crate::error::ConvertError;
use crate::limits::{MAX_DECIMAL_MANTISSA, MAX_DECIMAL_SCALE, MAX_DOUBLE_DIGITS};
use crate::model::{Decimal, Rounding};

/// Magnitude above which an `f64` has no fractional digits left to round.
const ROUNDING_MAGNITUDE_LIMIT: f64 = 1e16;

/// Parses a strict 32-bit integer: optional sign followed by ASCII digits.
///
/// Group separators, decimal points and exponents are rejected.
pub fn parse_int(text: &str) -> Result<i32, ConvertError> {
    let trimmed = text.trim();
    let digits = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ConvertError::InvalidInt { text: trimmed.to_string() });
    }
    trimmed
        .parse::<i32>()
        .map_err(|_| ConvertError::InvalidInt { text: trimmed.to_string() })
}

/// Parses a strict floating point number.
///
/// Accepts an optional sign, digits with `,` group separators in the integer
/// part, an optional `.` fraction and an optional exponent, as well as the
/// words `Infinity` and `NaN` (case-insensitive). Values too large for `f64`
/// become infinite.
pub fn parse_double(text: &str) -> Result<f64, ConvertError> {
    let trimmed = text.trim();
    let invalid = || ConvertError::InvalidFloat { text: trimmed.to_string() };

    let (negative, unsigned) = split_sign(trimmed);
    if unsigned.eq_ignore_ascii_case("infinity") {
        return Ok(if negative { f64::NEG_INFINITY } else { f64::INFINITY });
    }
    if unsigned.eq_ignore_ascii_case("nan") {
        return Ok(f64::NAN);
    }

    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(pos) => (&unsigned[..pos], Some(&unsigned[pos + 1..])),
        None => (unsigned, None),
    };
    let parts = split_mantissa(mantissa).ok_or_else(invalid)?;

    let mut normalized = String::with_capacity(trimmed.len());
    if negative {
        normalized.push('-');
    }
    normalized.push_str(if parts.integer.is_empty() { "0" } else { &parts.integer });
    if !parts.fraction.is_empty() {
        normalized.push('.');
        normalized.push_str(parts.fraction);
    }
    if let Some(exp) = exponent {
        let exp_digits = exp.strip_prefix(['+', '-']).unwrap_or(exp);
        if exp_digits.is_empty() || !exp_digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        normalized.push('e');
        normalized.push_str(exp);
    }

    normalized.parse::<f64>().map_err(|_| invalid())
}

/// Parses a strict decimal: like [`parse_double`] without exponent or
/// special values.
///
/// Fractional digits beyond [`MAX_DECIMAL_SCALE`], or beyond what the 96-bit
/// mantissa can hold, are rounded half-to-even. An integer part that does
/// not fit the mantissa is an error.
pub fn parse_decimal(text: &str) -> Result<Decimal, ConvertError> {
    let trimmed = text.trim();
    let invalid = || ConvertError::InvalidDecimal { text: trimmed.to_string() };

    let (negative, unsigned) = split_sign(trimmed);
    let parts = split_mantissa(unsigned).ok_or_else(invalid)?;

    let mut mantissa: i128 = 0;
    for b in parts.integer.bytes() {
        mantissa = mantissa * 10 + i128::from(b - b'0');
        if mantissa > MAX_DECIMAL_MANTISSA {
            return Err(invalid());
        }
    }

    let mut scale = 0u32;
    let fraction = parts.fraction.as_bytes();
    for (i, b) in fraction.iter().enumerate() {
        let digit = i128::from(b - b'0');
        let next = mantissa * 10 + digit;
        if scale == MAX_DECIMAL_SCALE || next > MAX_DECIMAL_MANTISSA {
            let sticky = fraction[i + 1..].iter().any(|d| *d != b'0');
            if digit > 5 || (digit == 5 && (sticky || mantissa % 2 == 1)) {
                mantissa += 1;
            }
            break;
        }
        mantissa = next;
        scale += 1;
    }

    // Rounding up a run of nines can carry one past the mantissa limit.
    if mantissa > MAX_DECIMAL_MANTISSA {
        if scale == 0 {
            return Err(invalid());
        }
        mantissa = (mantissa + 5) / 10;
        scale -= 1;
    }

    let signed = if negative { -mantissa } else { mantissa };
    Decimal::new(signed, scale).ok_or_else(invalid)
}

/// Rounds `value` to `digits` fractional digits.
///
/// `digits` is clamped to [`MAX_DOUBLE_DIGITS`]. Non-finite values and
/// values too large to carry a fraction are returned unchanged.
pub fn round_f64(value: f64, digits: u32, rounding: Rounding) -> f64 {
    if !value.is_finite() || value.abs() >= ROUNDING_MAGNITUDE_LIMIT {
        return value;
    }
    let power = 10f64.powi(digits.min(MAX_DOUBLE_DIGITS) as i32);
    let scaled = value * power;
    let rounded = match rounding {
        Rounding::HalfEven => scaled.round_ties_even(),
        Rounding::HalfAwayFromZero => scaled.round(),
    };
    rounded / power
}

/// Integer and fraction digits of a number, with group separators removed.
struct MantissaParts<'a> {
    integer: String,
    fraction: &'a str,
}

fn split_sign(text: &str) -> (bool, &str) {
    match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    }
}

/// Splits `digits[.digits]`, allowing `,` between integer digits.
///
/// Returns `None` unless at least one digit is present.
fn split_mantissa(text: &str) -> Option<MantissaParts<'_>> {
    let (integer_part, fraction) = match text.split_once('.') {
        Some((int, frac)) => (int, frac),
        None => (text, ""),
    };

    if integer_part.starts_with(',') {
        return None;
    }
    let mut integer = String::with_capacity(integer_part.len());
    for c in integer_part.chars() {
        match c {
            '0'..='9' => integer.push(c),
            ',' => {}
            _ => return None,
        }
    }
    if !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if integer.is_empty() && fraction.is_empty() {
        return None;
    }

    Some(MantissaParts { integer, fraction })
}
