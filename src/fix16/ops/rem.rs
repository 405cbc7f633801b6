use super::*;

impl Fix16 {
  /// Returns the remainder of `self ÷ other`, consistent with division truncated towards zero:
  /// the result has the sign of `self` and is smaller than `other` in absolute value. Returns
  /// [`Fix16::OVERFLOW`] if `other` is zero.
  ///
  /// The result is always exact.
  ///
  /// # Example
  ///
  /// ```
  /// # use soft_fix16::Fix16;
  /// assert_eq!(Fix16::from_int(7).rem(Fix16::from_int(3)), Fix16::ONE);
  /// assert_eq!(Fix16::from_int(-7).rem(Fix16::from_int(3)), Fix16::MINUS_ONE);
  /// assert_eq!(Fix16::PI.rem(Fix16::ONE), Fix16::from_bits(0x243f));
  /// ```
  #[inline]
  pub fn rem(self, other: Self) -> Self {
    // Both operands have the same scale, so the remainder of the raw values is the raw value of
    // the remainder. `i32::MIN % -1`, the only case where `%` overflows, is excluded since
    // `i32::MIN` is the sentinel.
    if self.either_overflow(other) || other == Self::ZERO {
      Self::OVERFLOW
    } else {
      Self(self.0 % other.0)
    }
  }
}

use core::ops::{Rem, RemAssign};
super::mk_ops!{Rem, RemAssign, rem, rem_assign}
