use super::*;

use malachite::{Integer, Natural, rational::Rational};
use malachite::base::num::arithmetic::traits::{Abs, Floor, FloorSqrt, PowerOf2};

/// The error type returned when a [Fix16] cannot be converted to a [Rational] because it is the
/// [overflow sentinel](Fix16::OVERFLOW).
#[derive(Debug)]
#[derive(PartialEq, Eq)]
pub struct IsOverflow;

impl TryFrom<Fix16> for Rational {
  type Error = IsOverflow;

  fn try_from(value: Fix16) -> Result<Self, Self::Error> {
    if value.is_overflow() {
      Err(IsOverflow)
    } else {
      Ok(Rational::from_signeds(value.to_bits(), Fix16::SCALE))
    }
  }
}

/// Multiply by 2^16, i.e. turn a real value into a (possibly non-integer) raw value.
fn scaled(exact: Rational) -> Rational {
  exact * Rational::power_of_2(Fix16::FRAC_BITS as i64)
}

/// Whether `x` is zero.
pub fn is_zero(x: &Rational) -> bool {
  *x == Rational::from(0)
}

/// Round towards zero.
pub fn trunc(exact: &Rational) -> Integer {
  let magnitude = exact.clone().abs().floor();
  if *exact < Rational::from(0) { -magnitude } else { magnitude }
}

/// Round to nearest, ties away from zero.
pub fn nearest(exact: &Rational) -> Integer {
  let magnitude = (exact.clone().abs() + Rational::from_signeds(1, 2)).floor();
  if *exact < Rational::from(0) { -magnitude } else { magnitude }
}

/// If `raw` is in the representable range `[MIN, MAX]`, the corresponding `Fix16`.
fn fit(raw: &Integer) -> Option<Fix16> {
  if *raw > Integer::from(i32::MAX) || *raw < Integer::from(-i32::MAX) {
    None
  } else {
    Some(Fix16::from_bits(i32::try_from(raw).unwrap()))
  }
}

fn saturate(raw: &Integer) -> Fix16 {
  fit(raw).unwrap_or(if *raw > Integer::from(0) { Fix16::MAX } else { Fix16::MIN })
}

/// The expected result of a trapping operation that rounds to nearest, ties away from zero.
pub fn trapping_nearest(exact: Rational) -> Fix16 {
  fit(&nearest(&scaled(exact))).unwrap_or(Fix16::OVERFLOW)
}

/// The expected result of a trapping operation that rounds towards zero.
pub fn trapping_trunc(exact: Rational) -> Fix16 {
  fit(&trunc(&scaled(exact))).unwrap_or(Fix16::OVERFLOW)
}

/// The expected result of a saturating operation that rounds to nearest, ties away from zero.
pub fn saturating_nearest(exact: Rational) -> Fix16 {
  saturate(&nearest(&scaled(exact)))
}

/// The expected result of a saturating operation that rounds towards zero.
pub fn saturating_trunc(exact: Rational) -> Fix16 {
  saturate(&trunc(&scaled(exact)))
}

/// The correctly rounded square root of a non-negative `x`.
///
/// If `s` is the raw value of `x`, the raw value of `√x` is `√(s · 2^16)`. Rounding that to
/// nearest is `⌊√(s · 2^16) + ½⌋ = ⌊(⌊√(4 · s · 2^16)⌋ + 1) / 2⌋`, which only needs integer square
/// roots.
pub fn sqrt_nearest(x: Fix16) -> Fix16 {
  let s = Natural::from(u64::try_from(x.to_bits()).unwrap() << Fix16::FRAC_BITS);
  let root_2x = (Natural::from(4u32) * s).floor_sqrt();
  let root = (root_2x + Natural::from(1u32)) / Natural::from(2u32);
  Fix16::from_bits(i32::try_from(&root).unwrap())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn rational_of_fix16() {
    assert_eq!(Rational::try_from(Fix16::HALF), Ok(Rational::from_signeds(1, 2)));
    assert_eq!(Rational::try_from(Fix16::MINUS_ONE), Ok(Rational::from(-1)));
    assert_eq!(Rational::try_from(Fix16::OVERFLOW), Err(IsOverflow));
  }

  #[test]
  fn rounding() {
    let q = |n, d| Rational::from_signeds(n, d);
    assert_eq!(nearest(&q(5, 2)), Integer::from(3));
    assert_eq!(nearest(&q(-5, 2)), Integer::from(-3));
    assert_eq!(nearest(&q(-7, 3)), Integer::from(-2));
    assert_eq!(trunc(&q(-7, 3)), Integer::from(-2));
    assert_eq!(trunc(&q(7, 3)), Integer::from(2));
    assert_eq!(trunc(&q(-1, 3)), Integer::from(0));
  }

  #[test]
  fn sqrt() {
    assert_eq!(sqrt_nearest(Fix16::from_int(4)), Fix16::from_int(2));
    assert_eq!(sqrt_nearest(Fix16::ZERO), Fix16::ZERO);
    // √2 = 1.41421356… = 92681.9 ulp
    assert_eq!(sqrt_nearest(Fix16::TWO), Fix16::from_bits(92682));
  }
}
