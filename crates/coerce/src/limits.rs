//! Numeric bounds shared by the parsers and rounding helpers.

/// Maximum fractional digits honored when rounding an `f64`.
///
/// Larger requests are clamped; an `f64` carries at most ~15-17 significant
/// decimal digits, so rounding further is a no-op.
pub const MAX_DOUBLE_DIGITS: u32 = 15;

/// Maximum scale (fractional digits) of a [`Decimal`](crate::Decimal).
pub const MAX_DECIMAL_SCALE: u32 = 28;

/// Number of mantissa bits in a [`Decimal`](crate::Decimal).
pub const DECIMAL_MANTISSA_BITS: u32 = 96;

/// Largest absolute mantissa of a [`Decimal`](crate::Decimal): `2^96 - 1`.
pub const MAX_DECIMAL_MANTISSA: i128 = (1i128 << DECIMAL_MANTISSA_BITS) - 1;

/// Maximum fractional-second digits accepted by the date parser.
pub const MAX_FRACTION_DIGITS: usize = 7;
