use super::*;

impl core::ops::Neg for Fix16 {
  type Output = Fix16;

  /// Since the range is symmetric, negation never overflows; the sentinel negates to itself.
  #[inline]
  fn neg(self) -> Self::Output {
    Fix16(self.0.wrapping_neg())
  }
}

impl core::ops::Neg for &Fix16 {
  type Output = Fix16;

  #[inline]
  fn neg(self) -> Self::Output {
    Fix16(self.0.wrapping_neg())
  }
}

impl Fix16 {
  /// Return the absolute value of `self`. Never overflows; [`Fix16::OVERFLOW`] is returned
  /// unchanged.
  ///
  /// # Example
  ///
  /// ```
  /// # use soft_fix16::Fix16;
  /// assert_eq!(Fix16::MINUS_ONE.abs(), Fix16::ONE);
  /// assert_eq!(Fix16::MIN.abs(), Fix16::MAX);
  /// assert_eq!(Fix16::OVERFLOW.abs(), Fix16::OVERFLOW);
  /// ```
  #[inline]
  pub fn abs(self) -> Self {
    Fix16(self.0.wrapping_abs())
  }

  /// Returns `true` if `self` is negative. The sentinel is not a number, so it is neither
  /// negative nor positive.
  #[inline]
  pub const fn is_negative(self) -> bool {
    self.0 < 0 && !self.is_overflow()
  }

  /// Returns `true` if `self` is positive (and not zero).
  #[inline]
  pub const fn is_positive(self) -> bool {
    self.0 > 0
  }
}
