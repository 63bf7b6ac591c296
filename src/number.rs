//! Exact decimal numbers.
//!
//! RJSON never stores numbers as binary floating point. A [`Decimal`] is an
//! arbitrary-precision coefficient scaled by a power of ten, so a literal such as
//! `3.0200` keeps both its value and its scale through a serialize cycle.
//!
//! ## Canonical text
//!
//! - no scientific notation: `1.5e3` prints as `1500`
//! - the scale of the literal is kept: `3.0200` prints as `3.0200`
//! - leading integer zeros and a leading `+` are dropped: `+007.5` prints as `7.5`
//! - zero never carries a sign: `-0.00` prints as `0.00`
//!
//! Literal exponents are limited to [`MAX_LITERAL_EXPONENT`] in magnitude.
//!
//! ## Examples
//!
//! ```rust
//! use serde_rjson::Decimal;
//!
//! let rate: Decimal = "3.0200".parse().unwrap();
//! assert_eq!(rate.to_string(), "3.0200");
//! assert_eq!(rate.scale(), 4);
//!
//! let big: Decimal = "1.5e3".parse().unwrap();
//! assert_eq!(big.to_string(), "1500");
//! ```

use crate::{Error, Result};
use num_bigint::{BigInt, Sign};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Newtype name the value adapter recognizes to keep decimals exact.
pub(crate) const DECIMAL_TOKEN: &str = "$serde_rjson::private::Decimal";

/// Largest exponent magnitude accepted in a literal such as `1e1024`.
///
/// Canonical text never uses exponent notation, so the exponent bounds how far
/// a literal can grow when written out.
pub const MAX_LITERAL_EXPONENT: u32 = 1024;

/// Integer digits beyond which a value cannot fit in `i64` or `u64`.
const MAX_WORD_DIGITS: i64 = 20;

/// An exact decimal: `coefficient * 10^exponent`.
///
/// Equality is representational, so `1.5` and `1.50` compare unequal because
/// they serialize differently.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Decimal {
    coefficient: BigInt,
    exponent: i32,
}

impl Decimal {
    /// The decimal zero, `0`.
    #[must_use]
    pub fn zero() -> Self {
        Decimal {
            coefficient: BigInt::from(0u8),
            exponent: 0,
        }
    }

    /// Builds `coefficient * 10^exponent`.
    ///
    /// Unlike parsed literals the exponent is not bounded here, and canonical
    /// text writes it out in full.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_rjson::Decimal;
    ///
    /// assert_eq!(Decimal::new(1234, -2).to_string(), "12.34");
    /// assert_eq!(Decimal::new(-5, 2).to_string(), "-500");
    /// ```
    #[must_use]
    pub fn new(coefficient: impl Into<BigInt>, exponent: i32) -> Self {
        Decimal {
            coefficient: coefficient.into(),
            exponent,
        }
    }

    /// Converts a finite float through its shortest round-trip decimal text.
    ///
    /// Returns `None` for infinities and NaN.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_rjson::Decimal;
    ///
    /// assert_eq!(Decimal::from_f64(0.1).unwrap().to_string(), "0.1");
    /// assert!(Decimal::from_f64(f64::NAN).is_none());
    /// ```
    #[must_use]
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        value.to_string().parse().ok()
    }

    #[inline]
    #[must_use]
    pub fn coefficient(&self) -> &BigInt {
        &self.coefficient
    }

    #[inline]
    #[must_use]
    pub fn exponent(&self) -> i32 {
        self.exponent
    }

    /// Number of fractional digits carried by this decimal.
    #[inline]
    #[must_use]
    pub fn scale(&self) -> u32 {
        if self.exponent < 0 {
            self.exponent.unsigned_abs()
        } else {
            0
        }
    }

    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coefficient.sign() == Sign::NoSign
    }

    #[inline]
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.coefficient.sign() == Sign::Minus
    }

    /// Nearest `f64`. Precision beyond what a double holds is lost.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.scientific().parse().unwrap_or(f64::NAN)
    }

    /// Rounds to the nearest integer, ties away from zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_rjson::Decimal;
    /// use num_bigint::BigInt;
    ///
    /// let half: Decimal = "2.5".parse().unwrap();
    /// assert_eq!(half.round(), BigInt::from(3));
    /// let neg_half: Decimal = "-2.5".parse().unwrap();
    /// assert_eq!(neg_half.round(), BigInt::from(-3));
    /// ```
    #[must_use]
    pub fn round(&self) -> BigInt {
        if self.is_zero() || self.integer_digits() < 0 {
            // |value| < 0.1
            return BigInt::from(0u8);
        }
        if self.exponent >= 0 {
            return &self.coefficient * pow10(self.exponent.unsigned_abs());
        }

        let divisor = pow10(self.exponent.unsigned_abs());
        let quotient = &self.coefficient / &divisor;
        let remainder = &self.coefficient % &divisor;
        let twice = remainder.magnitude() + remainder.magnitude();

        if twice < *divisor.magnitude() {
            quotient
        } else if self.is_negative() {
            quotient - BigInt::from(1u8)
        } else {
            quotient + BigInt::from(1u8)
        }
    }

    /// Rounds (ties away from zero) and narrows to `i64`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] when the rounded value does not fit.
    pub fn to_i64(&self) -> Result<i64> {
        if !self.fits_word() {
            return Err(Error::OutOfRange(self.scientific()));
        }
        let rounded = self.round();
        i64::try_from(&rounded).map_err(|_| Error::OutOfRange(self.scientific()))
    }

    /// Digits left of the decimal point, `coefficient digits + exponent`.
    /// Negative when the value is below `0.1` in magnitude.
    fn integer_digits(&self) -> i64 {
        if self.is_zero() {
            return 0;
        }
        let digits = self.coefficient.magnitude().to_str_radix(10).len() as i64;
        digits + i64::from(self.exponent)
    }

    /// Whether the rounded value could fit in a 64-bit integer at all.
    pub(crate) fn fits_word(&self) -> bool {
        self.integer_digits() <= MAX_WORD_DIGITS
    }

    /// Compact `<coefficient>e<exponent>` form, bounded by the coefficient's size.
    fn scientific(&self) -> String {
        if self.exponent == 0 {
            self.coefficient.to_string()
        } else {
            format!("{}e{}", self.coefficient, self.exponent)
        }
    }
}

fn pow10(exponent: u32) -> BigInt {
    BigInt::from(10u8).pow(exponent)
}

impl Default for Decimal {
    fn default() -> Self {
        Self::zero()
    }
}

impl FromStr for Decimal {
    type Err = Error;

    fn from_str(literal: &str) -> Result<Self> {
        let invalid = || Error::InvalidDecimal(literal.to_string());

        let (mantissa, exponent_part) = match literal.find(|c: char| c == 'e' || c == 'E') {
            Some(pos) => (&literal[..pos], Some(&literal[pos + 1..])),
            None => (literal, None),
        };

        let (negative, unsigned) = match mantissa.as_bytes().first() {
            Some(b'-') => (true, &mantissa[1..]),
            Some(b'+') => (false, &mantissa[1..]),
            _ => (false, mantissa),
        };

        let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(invalid());
        }
        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(int_part) || !all_digits(frac_part) {
            return Err(invalid());
        }

        let written_exponent = match exponent_part {
            Some(text) => text.parse::<i32>().map_err(|_| invalid())?,
            None => 0,
        };
        if written_exponent.unsigned_abs() > MAX_LITERAL_EXPONENT {
            return Err(invalid());
        }
        let exponent = i64::from(written_exponent) - frac_part.len() as i64;
        let exponent = i32::try_from(exponent).map_err(|_| invalid())?;

        let mut digits = String::with_capacity(int_part.len() + frac_part.len());
        digits.push_str(int_part);
        digits.push_str(frac_part);
        let magnitude = BigInt::parse_bytes(digits.as_bytes(), 10).ok_or_else(invalid)?;

        Ok(Decimal {
            coefficient: if negative { -magnitude } else { magnitude },
            exponent,
        })
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.coefficient.magnitude().to_string();
        let mut out = String::with_capacity(digits.len() + 3);

        if self.is_negative() {
            out.push('-');
        }

        if self.exponent >= 0 {
            out.push_str(&digits);
            if !self.is_zero() {
                out.extend(std::iter::repeat('0').take(self.exponent.unsigned_abs() as usize));
            }
        } else {
            let scale = self.exponent.unsigned_abs() as usize;
            if digits.len() > scale {
                let (int_part, frac_part) = digits.split_at(digits.len() - scale);
                out.push_str(int_part);
                out.push('.');
                out.push_str(frac_part);
            } else {
                out.push_str("0.");
                out.extend(std::iter::repeat('0').take(scale - digits.len()));
                out.push_str(&digits);
            }
        }

        f.write_str(&out)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Decimal {
                fn from(value: $ty) -> Self {
                    Decimal::new(BigInt::from(value), 0)
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<BigInt> for Decimal {
    fn from(value: BigInt) -> Self {
        Decimal::new(value, 0)
    }
}

impl Serialize for Decimal {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_newtype_struct(DECIMAL_TOKEN, &self.to_string())
    }
}

impl<'de> Deserialize<'de> for Decimal {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DecimalVisitor;

        impl<'de> Visitor<'de> for DecimalVisitor {
            type Value = Decimal;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a decimal number or decimal string")
            }

            fn visit_i64<E>(self, value: i64) -> std::result::Result<Decimal, E> {
                Ok(Decimal::from(value))
            }

            fn visit_u64<E>(self, value: u64) -> std::result::Result<Decimal, E> {
                Ok(Decimal::from(value))
            }

            fn visit_f64<E: de::Error>(self, value: f64) -> std::result::Result<Decimal, E> {
                Decimal::from_f64(value)
                    .ok_or_else(|| E::custom(format!("{} has no exact decimal form", value)))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<Decimal, E> {
                value.parse().map_err(E::custom)
            }

            fn visit_newtype_struct<D>(self, deserializer: D) -> std::result::Result<Decimal, D::Error>
            where
                D: Deserializer<'de>,
            {
                deserializer.deserialize_any(self)
            }
        }

        deserializer.deserialize_any(DecimalVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_scale_is_retained() {
        assert_eq!(dec("3.0200").to_string(), "3.0200");
        assert_eq!(dec("1.50").to_string(), "1.50");
        assert_eq!(dec("0.000").to_string(), "0.000");
    }

    #[test]
    fn test_canonical_normalization() {
        assert_eq!(dec("+007.5").to_string(), "7.5");
        assert_eq!(dec(".5").to_string(), "0.5");
        assert_eq!(dec("5.").to_string(), "5");
        assert_eq!(dec("-0.00").to_string(), "0.00");
        assert_eq!(dec("-0").to_string(), "0");
        assert_eq!(dec("-12.345").to_string(), "-12.345");
        assert_eq!(dec("0.0012").to_string(), "0.0012");
    }

    #[test]
    fn test_exponent_forms() {
        assert_eq!(dec("1.5e3").to_string(), "1500");
        assert_eq!(dec("1E+2").to_string(), "100");
        assert_eq!(dec("25e-3").to_string(), "0.025");
        assert_eq!(dec("0e5").to_string(), "0");
    }

    #[test]
    fn test_invalid_literals() {
        for literal in ["", ".", "-", "+.", "abc", "1.2.3", "1e", "1e+", "--1", " 1", "1 ", "0x10"] {
            assert!(
                literal.parse::<Decimal>().is_err(),
                "{:?} should be rejected",
                literal
            );
        }
        assert!("1e99999999999".parse::<Decimal>().is_err());
    }

    #[test]
    fn test_literal_exponent_is_bounded() {
        assert_eq!(dec("1e1024").to_string().len(), 1025);
        assert_eq!(dec("1e-1024").scale(), 1024);
        for literal in ["1e1025", "1e-1025", "1e200000000", "5E+300000"] {
            assert!(matches!(
                literal.parse::<Decimal>(),
                Err(Error::InvalidDecimal(_))
            ));
        }
    }

    #[test]
    fn test_out_of_range_is_cheap() {
        let huge = Decimal::new(1, 300_000);
        assert_eq!(huge.to_i64(), Err(Error::OutOfRange("1e300000".to_string())));
        assert_eq!(Decimal::new(-7, i32::MAX).to_i64(), Err(Error::OutOfRange(format!("-7e{}", i32::MAX))));
        assert_eq!(Decimal::new(5, i32::MIN).to_i64(), Ok(0));
        assert_eq!(Decimal::new(5, i32::MIN).round(), BigInt::from(0));
        assert_eq!(huge.to_f64(), f64::INFINITY);
        assert_eq!(Decimal::new(0, 300_000).to_i64(), Ok(0));
    }

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(dec("2.5").round(), BigInt::from(3));
        assert_eq!(dec("2.4999").round(), BigInt::from(2));
        assert_eq!(dec("-2.5").round(), BigInt::from(-3));
        assert_eq!(dec("-2.49").round(), BigInt::from(-2));
        assert_eq!(dec("0.5").round(), BigInt::from(1));
        assert_eq!(dec("12e2").round(), BigInt::from(1200));
    }

    #[test]
    fn test_to_i64_range() {
        assert_eq!(dec("9223372036854775807").to_i64(), Ok(i64::MAX));
        assert!(matches!(
            dec("9223372036854775808").to_i64(),
            Err(Error::OutOfRange(_))
        ));
    }

    #[test]
    fn test_from_f64() {
        assert_eq!(Decimal::from_f64(2.5).unwrap().to_string(), "2.5");
        assert_eq!(Decimal::from_f64(1e21).unwrap().to_string(), "1000000000000000000000");
        assert_eq!(Decimal::from_f64(-0.0).unwrap().to_string(), "0");
        assert!(Decimal::from_f64(f64::INFINITY).is_none());
    }

    #[test]
    fn test_to_f64() {
        assert_eq!(dec("3.0200").to_f64(), 3.02);
        assert_eq!(dec("-1e2").to_f64(), -100.0);
    }

    #[test]
    fn test_representational_equality() {
        assert_ne!(dec("1.5"), dec("1.50"));
        assert_eq!(dec("1.5"), Decimal::new(15, -1));
        assert_eq!(Decimal::default(), Decimal::zero());
    }
}
