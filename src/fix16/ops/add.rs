use super::*;
use crate::underlying::Word;

impl Fix16 {
  /// The exact sum of `x` and `y`, as a raw value in a wide type.
  #[inline]
  pub(crate) fn add_kernel(x: Self, y: Self) -> i64 {
    // A sum of two 32-bit numbers needs at most 33 bits. Carrying it out in an i64 means we never
    // have to look at carries or sign bits to detect overflow; we just check the result fits.
    x.0.widen() + y.0.widen()
  }

  /// The exact difference of `x` and `y`, as a raw value in a wide type.
  #[inline]
  pub(crate) fn sub_kernel(x: Self, y: Self) -> i64 {
    x.0.widen() - y.0.widen()
  }

  /// Returns `self + other`, or [`Fix16::OVERFLOW`] if the result does not fit.
  ///
  /// The sum is always exact when it fits, so no rounding takes place.
  ///
  /// # Example
  ///
  /// ```
  /// # use soft_fix16::Fix16;
  /// assert_eq!(Fix16::from_int(5).add(Fix16::from_int(3)), Fix16::from_int(8));
  /// assert_eq!(Fix16::MAX.add(Fix16::MIN_POSITIVE), Fix16::OVERFLOW);
  /// ```
  #[inline]
  pub fn add(self, other: Self) -> Self {
    if self.either_overflow(other) {
      Self::OVERFLOW
    } else {
      Self::from_wide(Self::add_kernel(self, other))
    }
  }

  /// Returns `self - other`, or [`Fix16::OVERFLOW`] if the result does not fit.
  ///
  /// # Example
  ///
  /// ```
  /// # use soft_fix16::Fix16;
  /// assert_eq!(Fix16::from_int(5).sub(Fix16::from_int(3)), Fix16::TWO);
  /// assert_eq!(Fix16::MIN.sub(Fix16::MIN_POSITIVE), Fix16::OVERFLOW);
  /// ```
  #[inline]
  pub fn sub(self, other: Self) -> Self {
    if self.either_overflow(other) {
      Self::OVERFLOW
    } else {
      Self::from_wide(Self::sub_kernel(self, other))
    }
  }
}

use core::ops::{Add, AddAssign, Sub, SubAssign};
super::mk_ops!{Add, AddAssign, add, add_assign}
super::mk_ops!{Sub, SubAssign, sub, sub_assign}
