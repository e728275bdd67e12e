// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::Error;
use num::{BigInt, ToPrimitive};
use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde_derive::Serialize;
use std::cmp::Ordering;
use std::convert::TryFrom;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};
use std::str::FromStr;

/// Numeric payload of a term.
#[derive(Clone, Copy, PartialEq, Debug, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Exact machine-width integer.
    Int(i64),
    /// Machine floats.
    Float(f64),
}

/// Parity represents the result of coercing a pair of `Scalar`s into
/// having the same underlying representation. If either side is a
/// float, both become floats.
enum Parity {
    Int(i64, i64),
    Float(f64, f64),
}

/// Identity checks that work the same on a raw scalar and on a whole
/// term. A term only counts as zero or one when it is a literal holding
/// that value.
pub trait Identity {
    fn is_zero(&self) -> bool;
    fn is_one(&self) -> bool;
}

impl Scalar {
    pub fn zero() -> Scalar {
        Scalar::Int(0)
    }

    pub fn one() -> Scalar {
        Scalar::Int(1)
    }

    fn parity(&self, other: &Scalar) -> Parity {
        match (*self, *other) {
            (Scalar::Int(left), Scalar::Int(right)) => Parity::Int(left, right),
            (left, right) => Parity::Float(left.to_f64(), right.to_f64()),
        }
    }

    fn finite(value: f64) -> Option<Scalar> {
        if value.is_finite() {
            Some(Scalar::Float(value))
        } else {
            None
        }
    }

    /// Like `From<f64>`, but rejects NaN and the infinities, which no
    /// literal can spell and which are not equal to themselves.
    pub fn checked_float(value: f64) -> Result<Scalar, Error> {
        if value.is_finite() {
            Ok(Scalar::Float(value))
        } else {
            Err(Error::InvalidArgument(format!(
                "{} is not a finite floating-point number",
                value
            )))
        }
    }

    pub fn to_f64(&self) -> f64 {
        match *self {
            Scalar::Int(i) => i as f64,
            Scalar::Float(f) => f,
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Scalar::Int(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Scalar::Float(_))
    }

    pub fn is_zero(&self) -> bool {
        self.equals_int(0)
    }

    pub fn is_one(&self) -> bool {
        self.equals_int(1)
    }

    pub fn is_negative(&self) -> bool {
        match *self {
            Scalar::Int(i) => i < 0,
            Scalar::Float(f) => f < 0.0,
        }
    }

    /// Whether the value is exactly `value`, in either representation.
    pub fn equals_int(&self, value: i64) -> bool {
        match *self {
            Scalar::Int(i) => i == value,
            Scalar::Float(f) => f == value as f64,
        }
    }

    /// `i64::MIN` has no positive counterpart in machine width, so its
    /// magnitude comes back as the float `2^63`, which is exact.
    pub fn abs(&self) -> Scalar {
        match *self {
            Scalar::Int(i) => i
                .checked_abs()
                .map(Scalar::Int)
                .unwrap_or_else(|| Scalar::Float(-(i as f64))),
            Scalar::Float(f) => Scalar::Float(f.abs()),
        }
    }

    /// Divides only when the quotient is exact: two integers must divide
    /// evenly, while a float on either side always divides. A zero
    /// divisor never divides.
    pub fn exact_div(&self, other: &Scalar) -> Option<Scalar> {
        if other.is_zero() {
            return None;
        }
        match self.parity(other) {
            Parity::Int(left, right) => {
                if left.checked_rem(right)? != 0 {
                    return None;
                }
                left.checked_div(right).map(Scalar::Int)
            }
            Parity::Float(_, _) => self / other,
        }
    }
}

impl Identity for Scalar {
    fn is_zero(&self) -> bool {
        Scalar::is_zero(self)
    }

    fn is_one(&self) -> bool {
        Scalar::is_one(self)
    }
}

impl Hash for Scalar {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match *self {
            Scalar::Int(i) => {
                0u8.hash(state);
                i.hash(state);
            }
            Scalar::Float(f) => {
                1u8.hash(state);
                // 0.0 == -0.0, so they have to hash alike.
                let f = if f == 0.0 { 0.0 } else { f };
                f.to_bits().hash(state);
            }
        }
    }
}

impl PartialOrd for Scalar {
    fn partial_cmp(&self, other: &Scalar) -> Option<Ordering> {
        match self.parity(other) {
            Parity::Int(left, right) => left.partial_cmp(&right),
            Parity::Float(left, right) => left.partial_cmp(&right),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Scalar::Int(i) => write!(fmt, "{}", i),
            // Debug keeps the trailing `.0` so 2.0 never reads as 2.
            Scalar::Float(f) => write!(fmt, "{:?}", f),
        }
    }
}

impl From<i64> for Scalar {
    fn from(i: i64) -> Scalar {
        Scalar::Int(i)
    }
}

impl From<i32> for Scalar {
    fn from(i: i32) -> Scalar {
        Scalar::Int(i64::from(i))
    }
}

/// Unchecked: NaN and the infinities pass through. Use
/// [`Scalar::checked_float`] for values coming from outside.
impl From<f64> for Scalar {
    fn from(f: f64) -> Scalar {
        Scalar::Float(f)
    }
}

fn too_wide(value: impl fmt::Display) -> Error {
    Error::InvalidArgument(format!(
        "{} does not fit in a 64-bit exact integer",
        value
    ))
}

impl TryFrom<u64> for Scalar {
    type Error = Error;

    fn try_from(value: u64) -> Result<Scalar, Error> {
        i64::try_from(value)
            .map(Scalar::Int)
            .map_err(|_| too_wide(value))
    }
}

impl TryFrom<i128> for Scalar {
    type Error = Error;

    fn try_from(value: i128) -> Result<Scalar, Error> {
        i64::try_from(value)
            .map(Scalar::Int)
            .map_err(|_| too_wide(value))
    }
}

impl<'a> TryFrom<&'a BigInt> for Scalar {
    type Error = Error;

    fn try_from(value: &'a BigInt) -> Result<Scalar, Error> {
        value.to_i64().map(Scalar::Int).ok_or_else(|| too_wide(value))
    }
}

impl FromStr for Scalar {
    type Err = Error;

    /// Integer text becomes `Int`, float text becomes `Float`. Integer
    /// text too wide for 64 bits is rejected rather than silently turned
    /// into a float.
    fn from_str(text: &str) -> Result<Scalar, Error> {
        let text = text.trim();
        if let Ok(int) = text.parse::<i64>() {
            return Ok(Scalar::Int(int));
        }
        let integral = text
            .trim_start_matches(|c: char| c == '-' || c == '+')
            .chars()
            .all(|c| c.is_ascii_digit());
        if integral && !text.is_empty() {
            return Err(too_wide(text));
        }
        match text.parse::<f64>() {
            Ok(f) if !integral && f.is_finite() => Ok(Scalar::Float(f)),
            _ => Err(Error::InvalidArgument(format!(
                "`{}` is neither an exact integer nor a floating-point number",
                text
            ))),
        }
    }
}

struct ScalarVisitor;

impl<'de> Visitor<'de> for ScalarVisitor {
    type Value = Scalar;

    fn expecting(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str("a 64-bit integer or a finite floating-point number")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Scalar, E> {
        Ok(Scalar::Int(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Scalar, E> {
        Scalar::try_from(value).map_err(E::custom)
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Scalar, E> {
        Scalar::checked_float(value).map_err(E::custom)
    }
}

/// Only numbers deserialize. Integers too wide for 64 bits are an error,
/// not a float.
impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Scalar, D::Error> {
        deserializer.deserialize_any(ScalarVisitor)
    }
}

macro_rules! scalar_binop {
    ($what:ident, $func:ident, $checked:ident) => {
        impl<'a, 'b> $what<&'b Scalar> for &'a Scalar {
            type Output = Option<Scalar>;

            fn $func(self, other: &'b Scalar) -> Option<Scalar> {
                match self.parity(other) {
                    Parity::Int(left, right) => left.$checked(right).map(Scalar::Int),
                    Parity::Float(left, right) => Scalar::finite(left.$func(right)),
                }
            }
        }
    };
}

scalar_binop!(Add, add, checked_add);
scalar_binop!(Sub, sub, checked_sub);
scalar_binop!(Mul, mul, checked_mul);
scalar_binop!(Div, div, checked_div);
scalar_binop!(Rem, rem, checked_rem);

impl<'a> Neg for &'a Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        match *self {
            Scalar::Int(i) => i
                .checked_neg()
                .map(Scalar::Int)
                .unwrap_or_else(|| Scalar::Float(-(i as f64))),
            Scalar::Float(f) => Scalar::Float(-f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Scalar;
    use crate::error::Error;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash(value: &Scalar) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_promotion() {
        assert_eq!(&Scalar::Int(2) + &Scalar::Int(3), Some(Scalar::Int(5)));
        assert_eq!(&Scalar::Int(2) + &Scalar::Float(0.5), Some(Scalar::Float(2.5)));
        assert_eq!(&Scalar::Float(1.5) * &Scalar::Int(2), Some(Scalar::Float(3.0)));
        assert_eq!(&Scalar::Int(7) / &Scalar::Int(2), Some(Scalar::Int(3)));
        assert_eq!(&Scalar::Int(7) % &Scalar::Int(2), Some(Scalar::Int(1)));
        assert_eq!(&Scalar::Float(7.0) / &Scalar::Int(2), Some(Scalar::Float(3.5)));
    }

    #[test]
    fn test_overflow_declines() {
        assert_eq!(&Scalar::Int(i64::MAX) + &Scalar::Int(1), None);
        assert_eq!(&Scalar::Int(i64::MIN) - &Scalar::Int(1), None);
        assert_eq!(&Scalar::Int(i64::MAX) * &Scalar::Int(2), None);
        assert_eq!(&Scalar::Int(i64::MIN) / &Scalar::Int(-1), None);
        assert_eq!(&Scalar::Float(f64::MAX) * &Scalar::Int(2), None);
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(&Scalar::Int(1) / &Scalar::Int(0), None);
        assert_eq!(&Scalar::Int(1) % &Scalar::Int(0), None);
        assert_eq!(&Scalar::Float(1.0) / &Scalar::Int(0), None);
        assert_eq!(&Scalar::Float(1.0) / &Scalar::Float(-0.0), None);
        assert_eq!(Scalar::Int(4).exact_div(&Scalar::Float(0.0)), None);
    }

    #[test]
    fn test_exact_div() {
        assert_eq!(Scalar::Int(10).exact_div(&Scalar::Int(4)), None);
        assert_eq!(Scalar::Int(12).exact_div(&Scalar::Int(4)), Some(Scalar::Int(3)));
        assert_eq!(Scalar::Int(-12).exact_div(&Scalar::Int(4)), Some(Scalar::Int(-3)));
        assert_eq!(
            Scalar::Float(10.0).exact_div(&Scalar::Int(4)),
            Some(Scalar::Float(2.5))
        );
        assert_eq!(
            Scalar::Int(10).exact_div(&Scalar::Float(4.0)),
            Some(Scalar::Float(2.5))
        );
    }

    #[test]
    fn test_negate_and_abs() {
        assert_eq!(-&Scalar::Int(5), Scalar::Int(-5));
        assert_eq!(-&Scalar::Float(0.5), Scalar::Float(-0.5));
        assert_eq!(-&Scalar::Int(i64::MIN), Scalar::Float(9_223_372_036_854_775_808.0));
        assert_eq!(Scalar::Int(-3).abs(), Scalar::Int(3));
        assert_eq!(Scalar::Int(i64::MIN).abs(), Scalar::Float(9_223_372_036_854_775_808.0));
        assert_eq!(Scalar::Float(-2.5).abs(), Scalar::Float(2.5));
    }

    #[test]
    fn test_predicates() {
        assert!(Scalar::Int(0).is_zero());
        assert!(Scalar::Float(0.0).is_zero());
        assert!(Scalar::Float(1.0).is_one());
        assert!(!Scalar::Float(1.5).is_one());
        assert!(Scalar::Int(-1).is_negative());
        assert!(!Scalar::Float(0.0).is_negative());
        assert!(Scalar::Float(4.0).equals_int(4));
        assert!(!Scalar::Int(4).equals_int(5));
    }

    #[test]
    fn test_structural_equality() {
        assert_ne!(Scalar::Int(2), Scalar::Float(2.0));
        assert_eq!(Scalar::Float(0.0), Scalar::Float(-0.0));
        assert_eq!(hash(&Scalar::Float(0.0)), hash(&Scalar::Float(-0.0)));
        assert_ne!(hash(&Scalar::Int(1)), hash(&Scalar::Float(1.0)));
        assert!(Scalar::Int(2) < Scalar::Float(2.5));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("42".parse::<Scalar>(), Ok(Scalar::Int(42)));
        assert_eq!(" -7 ".parse::<Scalar>(), Ok(Scalar::Int(-7)));
        assert_eq!("2.5".parse::<Scalar>(), Ok(Scalar::Float(2.5)));
        assert_eq!("1e3".parse::<Scalar>(), Ok(Scalar::Float(1000.0)));
        for bad in &["", "abc", "NaN", "inf", "99999999999999999999"] {
            match bad.parse::<Scalar>() {
                Err(Error::InvalidArgument(_)) => (),
                other => panic!("{:?} parsed as {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_checked_float() {
        assert_eq!(Scalar::checked_float(2.5), Ok(Scalar::Float(2.5)));
        for bad in &[f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            match Scalar::checked_float(*bad) {
                Err(Error::InvalidArgument(_)) => (),
                other => panic!("{} accepted as {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_wide_integers() {
        use std::convert::TryFrom;

        assert_eq!(Scalar::try_from(5u64), Ok(Scalar::Int(5)));
        assert!(Scalar::try_from(u64::MAX).is_err());
        assert!(Scalar::try_from(i128::from(i64::MAX) + 1).is_err());
        let big = num::BigInt::from(i64::MIN);
        assert_eq!(Scalar::try_from(&big), Ok(Scalar::Int(i64::MIN)));
        let bigger = &big - num::BigInt::from(1);
        assert!(Scalar::try_from(&bigger).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Scalar::Int(3).to_string(), "3");
        assert_eq!(Scalar::Float(2.0).to_string(), "2.0");
        assert_eq!(Scalar::Float(-0.25).to_string(), "-0.25");
    }
}
