use super::*;
use crate::underlying::Word;

impl Fix16 {
  /// The quotient of `x` by `y`, truncated towards zero, as a raw value in a wide type.
  ///
  /// `y` must not be zero.
  #[inline]
  pub(crate) fn div_kernel(x: Self, y: Self) -> i64 {
    // With raw values `a = x * 2^16` and `b = y * 2^16`, we want the raw value of `x ÷ y`, which
    // is
    //
    //   (x ÷ y) * 2^16 = (a * 2^16) ÷ b
    //
    // Shifting `a` left by 16 places needs up to 47 bits, so it is done in the wide type, as is
    // the division. The quotient can be as large as 2^47 (e.g. `MAX ÷ MIN_POSITIVE`); whether it
    // fits in 32 bits is for the caller to decide.
    let (quotient, _) = x.0.shift_div_rem(y.0, Self::FRAC_BITS);
    quotient
  }

  /// Returns `self ÷ other`, truncated towards zero, or [`Fix16::OVERFLOW`] if `other` is zero or
  /// the result does not fit.
  ///
  /// # Example
  ///
  /// ```
  /// # use soft_fix16::Fix16;
  /// assert_eq!(Fix16::ONE.div(Fix16::TWO), Fix16::HALF);
  /// assert_eq!(Fix16::ONE.div(Fix16::from_int(3)), Fix16::from_bits(0x5555));
  /// assert_eq!(Fix16::ONE.div(Fix16::ZERO), Fix16::OVERFLOW);
  /// assert_eq!(Fix16::MAX.div(Fix16::HALF), Fix16::OVERFLOW);
  /// ```
  #[inline]
  pub fn div(self, other: Self) -> Self {
    if self.either_overflow(other) || other == Self::ZERO {
      Self::OVERFLOW
    } else {
      Self::from_wide(Self::div_kernel(self, other))
    }
  }
}

use core::ops::{Div, DivAssign};
super::mk_ops!{Div, DivAssign, div, div_assign}
