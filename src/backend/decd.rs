//! The arbitrary-precision decimal backend.
//!
//! Required to implement the exact same kernel algorithms as [`D64`](super::d64::D64)
//! with no algorithmic deviation, at a configurable number of significant
//! decimal digits `D ∈ [4, 50]` (§4.12, §7 `PrecisionConfigError`).

use std::ops::{Add, Mul, Neg, Sub};

use bigdecimal::BigDecimal;
use num_bigint::{BigInt, Sign};
use num_traits::{FromPrimitive, ToPrimitive};

use super::Backend;
use crate::error::Error;
use crate::scalar::ScalarOps;

/// A decimal scalar carrying its own significant-digit precision.
///
/// Every arithmetic operation re-rounds its result to `digits` significant
/// figures via [`BigDecimal::with_prec`], so precision never silently grows
/// across a chain of operations the way raw `BigDecimal` arithmetic would.
#[derive(Clone, Debug)]
pub struct Dec {
    value: BigDecimal,
    digits: u32,
}

impl Dec {
    fn rounded(&self, value: BigDecimal) -> Self {
        Self {
            value: value.with_prec(self.digits as u64),
            digits: self.digits,
        }
    }

    pub fn digits(&self) -> u32 {
        self.digits
    }
}

impl PartialEq for Dec {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl PartialOrd for Dec {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl Add for Dec {
    type Output = Dec;
    fn add(self, rhs: Dec) -> Dec {
        let sum = self.value.clone() + rhs.value;
        self.rounded(sum)
    }
}

impl Sub for Dec {
    type Output = Dec;
    fn sub(self, rhs: Dec) -> Dec {
        let diff = self.value.clone() - rhs.value;
        self.rounded(diff)
    }
}

impl Mul for Dec {
    type Output = Dec;
    fn mul(self, rhs: Dec) -> Dec {
        let prod = self.value.clone() * rhs.value;
        self.rounded(prod)
    }
}

impl ScalarOps for Dec {
    fn floor(&self) -> Self {
        let (digits, scale) = self.value.as_bigint_and_exponent();
        let floored = if scale <= 0 {
            digits * BigInt::from(10).pow((-scale) as u32)
        } else {
            let factor = BigInt::from(10).pow(scale as u32);
            let mut q = &digits / &factor;
            let r = &digits % &factor;
            if r != BigInt::from(0) && digits.sign() == Sign::Minus {
                q -= 1;
            }
            q
        };
        self.rounded(BigDecimal::from(floored))
    }

    fn to_i64(&self) -> i64 {
        self.value.to_i64().unwrap_or_else(|| {
            if self.value < BigDecimal::from(0) {
                i64::MIN
            } else {
                i64::MAX
            }
        })
    }

    fn to_f64(&self) -> f64 {
        self.value.to_f64().unwrap_or(0.0)
    }

    fn abs(&self) -> Self {
        let value = if self.value < BigDecimal::from(0) {
            self.value.clone().neg()
        } else {
            self.value.clone()
        };
        self.rounded(value)
    }

    fn format(&self, precision: usize) -> String {
        self.value.with_scale(precision as i64).to_string()
    }
}

/// Arbitrary-precision decimal precision backend, `D` significant decimal
/// digits, `D ∈ [4, 50]`.
#[derive(Clone, Copy, Debug)]
pub struct DecD {
    digits: u32,
}

impl DecD {
    pub fn new(digits: u32) -> Result<Self, Error> {
        if !(4..=50).contains(&digits) {
            return Err(Error::PrecisionConfigError(format!(
                "decimal digits must be within [4, 50], got {digits}"
            )));
        }
        Ok(Self { digits })
    }
}

impl Backend for DecD {
    type Scalar = Dec;

    fn name(&self) -> String {
        format!("DecD({})", self.digits)
    }

    fn literal(&self, v: f64) -> Dec {
        let value = BigDecimal::from_f64(v)
            .expect("finite f64 literal always converts to BigDecimal")
            .with_prec(self.digits as u64);
        Dec {
            value,
            digits: self.digits,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_digits_out_of_range() {
        assert!(DecD::new(3).is_err());
        assert!(DecD::new(51).is_err());
        assert!(DecD::new(4).is_ok());
        assert!(DecD::new(50).is_ok());
    }

    #[test]
    fn arithmetic_agrees_with_f64() {
        let backend = DecD::new(30).unwrap();
        let a = backend.literal(0.25);
        let b = backend.literal(0.5);
        let sum = a.clone() + b.clone();
        assert!((sum.to_f64() - 0.75).abs() < 1e-12);
        let prod = a * b;
        assert!((prod.to_f64() - 0.125).abs() < 1e-12);
    }

    #[test]
    fn floor_matches_f64_floor() {
        let backend = DecD::new(20).unwrap();
        for v in [0.0, 0.999, 1.0, 1.5, 3.999, -0.5] {
            let floored = backend.literal(v).floor();
            assert_eq!(floored.to_f64(), v.floor());
        }
    }

    #[test]
    fn abs_matches_f64_abs() {
        let backend = DecD::new(20).unwrap();
        let v = backend.literal(-3.5).abs();
        assert!((v.to_f64() - 3.5).abs() < 1e-12);
    }

    #[test]
    fn format_rounds_to_precision() {
        let backend = DecD::new(20).unwrap();
        let v = backend.literal(1.0 / 3.0);
        assert_eq!(v.format(4), "0.3333");
    }
}
