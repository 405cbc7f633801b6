use super::*;
use crate::underlying::{Word, Double};

impl Fix16 {
  /// The product of `x` and `y`, rounded to nearest (ties away from zero), as a raw value in a
  /// wide type.
  #[inline]
  pub(crate) fn mul_kernel(x: Self, y: Self) -> i64 {
    // With raw values `a = x * 2^16` and `b = y * 2^16`, we want the raw value of `x * y`, which
    // is
    //
    //   (x * y) * 2^16 = (a * b) / 2^16
    //
    // The product `a * b` of two 32-bit numbers is exact in 64 bits (it's at most 2^62 in
    // absolute value), so the only source of error is the final division by 2^16, which we
    // carry out as a rounding shift. The result has up to 47 significant bits; whether it fits in
    // 32 is for the caller to decide.
    x.0.doubling_mul(y.0).round_shr(Self::FRAC_BITS)
  }

  /// Returns `self × other`, rounded to nearest with ties rounded away from zero, or
  /// [`Fix16::OVERFLOW`] if the result does not fit.
  ///
  /// # Example
  ///
  /// ```
  /// # use soft_fix16::Fix16;
  /// assert_eq!(Fix16::from_int(3).mul(Fix16::HALF), Fix16::from_bits(0x0001_8000));
  /// assert_eq!(Fix16::from_int(200).mul(Fix16::from_int(200)), Fix16::OVERFLOW);
  /// // 0.5 ulp × 1 = 0.5 ulp, which rounds away from zero
  /// assert_eq!(Fix16::HALF.mul(Fix16::MIN_POSITIVE), Fix16::MIN_POSITIVE);
  /// ```
  #[inline]
  pub fn mul(self, other: Self) -> Self {
    if self.either_overflow(other) {
      Self::OVERFLOW
    } else {
      Self::from_wide(Self::mul_kernel(self, other))
    }
  }

  /// Returns `self × self`; shorthand for `self.mul(self)`.
  #[inline]
  pub fn sq(self) -> Self {
    self.mul(self)
  }
}

use core::ops::{Mul, MulAssign};
super::mk_ops!{Mul, MulAssign, mul, mul_assign}
