//! Fixed-point decimal numbers.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::ConvertError;
use crate::limits::{MAX_DECIMAL_MANTISSA, MAX_DECIMAL_SCALE};
use crate::util::number::parse_decimal;

/// Midpoint rounding convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rounding {
    /// Ties go to the even neighbour (`2.5 -> 2`, `3.5 -> 4`).
    #[default]
    HalfEven,
    /// Ties go away from zero (`2.5 -> 3`, `-2.5 -> -3`).
    HalfAwayFromZero,
}

/// A decimal number: `mantissa * 10^-scale`.
///
/// The mantissa is limited to 96 bits of magnitude and the scale to
/// [`MAX_DECIMAL_SCALE`]. The scale is kept as written, so `2.50` displays
/// with two fractional digits, but equality compares numeric value.
#[derive(Debug, Clone, Copy)]
pub struct Decimal {
    mantissa: i128,
    scale: u32,
}

impl Decimal {
    /// The zero value.
    pub const ZERO: Decimal = Decimal { mantissa: 0, scale: 0 };

    /// Creates a decimal, or `None` if the mantissa or scale is out of range.
    pub fn new(mantissa: i128, scale: u32) -> Option<Decimal> {
        if mantissa.unsigned_abs() > MAX_DECIMAL_MANTISSA as u128 || scale > MAX_DECIMAL_SCALE {
            return None;
        }
        Some(Decimal { mantissa, scale })
    }

    /// Returns the signed mantissa.
    pub fn mantissa(&self) -> i128 {
        self.mantissa
    }

    /// Returns the number of fractional digits.
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Returns true if this is zero at any scale.
    pub fn is_zero(&self) -> bool {
        self.mantissa == 0
    }

    /// Returns true if the value is below zero.
    pub fn is_negative(&self) -> bool {
        self.mantissa < 0
    }

    /// Rounds to `digits` fractional digits, ties to even.
    pub fn round_dp(&self, digits: u32) -> Decimal {
        self.round_dp_with(digits, Rounding::HalfEven)
    }

    /// Rounds to `digits` fractional digits with the given tie rule.
    ///
    /// A value that already has `digits` or fewer fractional digits is
    /// returned unchanged, keeping its scale.
    pub fn round_dp_with(&self, digits: u32, rounding: Rounding) -> Decimal {
        let digits = digits.min(MAX_DECIMAL_SCALE);
        if digits >= self.scale {
            return *self;
        }

        let divisor = 10i128.pow(self.scale - digits);
        let mut quotient = self.mantissa / divisor;
        let remainder = (self.mantissa % divisor).abs();
        let step = if self.mantissa < 0 { -1 } else { 1 };

        let twice = remainder * 2;
        let round_up = match twice.cmp(&divisor) {
            std::cmp::Ordering::Greater => true,
            std::cmp::Ordering::Less => false,
            std::cmp::Ordering::Equal => match rounding {
                Rounding::HalfEven => quotient % 2 != 0,
                Rounding::HalfAwayFromZero => true,
            },
        };
        if round_up {
            quotient += step;
        }

        Decimal { mantissa: quotient, scale: digits }
    }

    /// Removes trailing fractional zeros (`2.500 -> 2.5`).
    pub fn normalize(&self) -> Decimal {
        let mut mantissa = self.mantissa;
        let mut scale = self.scale;
        if mantissa == 0 {
            return Decimal::ZERO;
        }
        while scale > 0 && mantissa % 10 == 0 {
            mantissa /= 10;
            scale -= 1;
        }
        Decimal { mantissa, scale }
    }
}

impl Default for Decimal {
    fn default() -> Self {
        Decimal::ZERO
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        let a = self.normalize();
        let b = other.normalize();
        a.mantissa == b.mantissa && a.scale == b.scale
    }
}

impl Eq for Decimal {}

impl Hash for Decimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let n = self.normalize();
        n.mantissa.hash(state);
        n.scale.hash(state);
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.mantissa.unsigned_abs().to_string();
        let sign = if self.mantissa < 0 { "-" } else { "" };
        let scale = self.scale as usize;
        let text = if scale == 0 {
            format!("{}{}", sign, digits)
        } else if digits.len() > scale {
            let (int, frac) = digits.split_at(digits.len() - scale);
            format!("{}{}.{}", sign, int, frac)
        } else {
            format!("{}0.{}{}", sign, "0".repeat(scale - digits.len()), digits)
        };
        f.pad(&text)
    }
}

impl FromStr for Decimal {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_decimal(s)
    }
}

macro_rules! impl_decimal_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Decimal {
                fn from(v: $t) -> Self {
                    Decimal { mantissa: i128::from(v), scale: 0 }
                }
            }
        )*
    };
}

impl_decimal_from_int!(i8, i16, i32, i64, u8, u16, u32, u64);

#[cfg(feature = "serde")]
impl serde::Serialize for Decimal {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Decimal {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
