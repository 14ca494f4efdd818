//! A numeric value that is either an integer or a float.

use std::fmt;
use std::num::IntErrorKind;
use std::ops::Add;
use std::str::FromStr;

use crate::error::Error;

/// An integer or floating-point value.
/// Adding two integers stays integral; any float operand promotes the sum to a float.
#[derive(Copy, Clone, Debug)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// The value as a float, regardless of variant.
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    pub fn is_float(self) -> bool {
        matches!(self, Number::Float(_))
    }
}

impl Add for Number {
    type Output = Number;

    fn add(self, rhs: Number) -> Number {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => Number::Int(a + b),
            (a, b) => Number::Float(a.as_f64() + b.as_f64()),
        }
    }
}

// Compared by exact value, so `Int(3) == Float(3.0)` but `Int(2^53 + 1) != Float(2^53)`.
impl PartialEq for Number {
    fn eq(&self, other: &Number) -> bool {
        match (*self, *other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            (Number::Float(a), Number::Float(b)) => a == b,
            (Number::Int(i), Number::Float(f)) | (Number::Float(f), Number::Int(i)) => {
                float_to_exact_int(f) == Some(i)
            }
        }
    }
}

/// The float as an `i64`, only when it is integral and in range.
fn float_to_exact_int(f: f64) -> Option<i64> {
    // 2^63 is exact in f64; i64::MAX is not.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    if f.is_finite() && f.fract() == 0.0 && (-LIMIT..LIMIT).contains(&f) {
        Some(f as i64)
    } else {
        None
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{i}"),
            Number::Float(x) => write!(f, "{x:?}"),
        }
    }
}

impl FromStr for Number {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidOperand {
            operand: s.to_string(),
        };
        let trimmed = s.trim();
        match trimmed.parse::<i64>() {
            Ok(i) => return Ok(Number::Int(i)),
            // Integer text out of range is rejected rather than rounded to a float.
            Err(err)
                if matches!(
                    err.kind(),
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow
                ) =>
            {
                return Err(invalid());
            }
            Err(_) => {}
        }
        trimmed
            .parse::<f64>()
            .map(Number::Float)
            .map_err(|_| invalid())
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Number {
                fn from(value: $t) -> Self {
                    Number::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(f64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_plus_int_stays_int() {
        let sum = Number::from(2) + Number::from(3);
        assert!(matches!(sum, Number::Int(5)));
    }

    #[test]
    fn test_float_operand_promotes() {
        let sum = Number::from(2) + Number::from(1.5);
        assert!(sum.is_float());
        assert_eq!(sum, Number::Float(3.5));

        let sum = Number::from(0.5) + Number::from(1);
        assert!(sum.is_float());
        assert_eq!(sum, Number::Float(1.5));
    }

    #[test]
    fn test_equality_across_variants() {
        assert_eq!(Number::Int(3), Number::Float(3.0));
        assert_ne!(Number::Int(3), Number::Float(3.5));
    }

    #[test]
    fn test_equality_is_exact_for_large_values() {
        let a = Number::Int(1 << 53);
        let b = Number::Float(9_007_199_254_740_992.0);
        let c = Number::Int((1 << 53) + 1);
        assert_eq!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
        assert_ne!(Number::Int(i64::MAX), Number::Float(9_223_372_036_854_775_808.0));
        assert_eq!(Number::Int(i64::MIN), Number::Float(-9_223_372_036_854_775_808.0));
        assert_ne!(Number::Int(0), Number::Float(f64::NAN));
    }

    #[test]
    fn test_parse_rejects_out_of_range_integers() {
        assert_eq!(
            "99999999999999999999".parse::<Number>(),
            Err(Error::InvalidOperand {
                operand: "99999999999999999999".to_string()
            })
        );
        assert!("-99999999999999999999".parse::<Number>().is_err());
        assert_eq!("1e20".parse::<Number>().unwrap(), Number::Float(1e20));
    }

    #[test]
    fn test_parse() {
        assert!(matches!("42".parse::<Number>(), Ok(Number::Int(42))));
        assert!(matches!(" -7 ".parse::<Number>(), Ok(Number::Int(-7))));
        assert_eq!("2.5".parse::<Number>().unwrap(), Number::Float(2.5));
        assert!("2.0".parse::<Number>().unwrap().is_float());
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        let err = "two".parse::<Number>().unwrap_err();
        assert_eq!(
            err,
            Error::InvalidOperand {
                operand: "two".to_string()
            }
        );
        assert!("".parse::<Number>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Number::Int(-18).to_string(), "-18");
        assert_eq!(Number::Float(3.5).to_string(), "3.5");
        assert_eq!(Number::Float(4.0).to_string(), "4.0");
    }
}
