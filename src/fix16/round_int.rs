use super::*;

impl Fix16 {
  /// Mask of the integer bits of a raw value.
  const INT_MASK: i64 = !((1 << Self::FRAC_BITS) - 1);

  /// Returns the largest integer less than or equal to `self`.
  ///
  /// Returns [`Fix16::OVERFLOW`] if `self` is the sentinel, or if the result is not
  /// representable (which only happens for numbers below -32767).
  ///
  /// # Example
  ///
  /// ```
  /// # use soft_fix16::{Fix16, fix16};
  /// assert_eq!(fix16!(2.5).floor(), fix16!(2));
  /// assert_eq!(fix16!(-2.5).floor(), fix16!(-3));
  /// assert_eq!(Fix16::MIN.floor(), Fix16::OVERFLOW);
  /// ```
  pub fn floor(self) -> Self {
    if self.is_overflow() { return Self::OVERFLOW }
    Self::from_wide(self.0 as i64 & Self::INT_MASK)
  }

  /// Returns the smallest integer greater than or equal to `self`.
  ///
  /// Returns [`Fix16::OVERFLOW`] if `self` is the sentinel, or if the result is not
  /// representable (which only happens for numbers above 32767).
  ///
  /// # Example
  ///
  /// ```
  /// # use soft_fix16::{Fix16, fix16};
  /// assert_eq!(fix16!(2.5).ceil(), fix16!(3));
  /// assert_eq!(fix16!(-2.5).ceil(), fix16!(-2));
  /// assert_eq!(Fix16::MAX.ceil(), Fix16::OVERFLOW);
  /// ```
  pub fn ceil(self) -> Self {
    if self.is_overflow() { return Self::OVERFLOW }
    let up = self.0 as i64 + (Self::SCALE as i64 - 1);
    Self::from_wide(up & Self::INT_MASK)
  }

  /// Returns the integer nearest to `self`, or the one further from zero if two are equally
  /// near.
  ///
  /// Returns [`Fix16::OVERFLOW`] if `self` is the sentinel, or if the result is not
  /// representable.
  ///
  /// # Example
  ///
  /// ```
  /// # use soft_fix16::{Fix16, fix16};
  /// assert_eq!(fix16!(2.4).round(), fix16!(2));
  /// assert_eq!(fix16!(2.5).round(), fix16!(3));
  /// assert_eq!(fix16!(-2.5).round(), fix16!(-3));
  /// assert_eq!(Fix16::MAX.round(), Fix16::OVERFLOW);
  /// ```
  pub fn round(self) -> Self {
    if self.is_overflow() { return Self::OVERFLOW }
    // Round the magnitude half up, then restore the sign.
    let magnitude = (self.0 as i64).abs() + (Self::HALF.0 as i64);
    let magnitude = magnitude & Self::INT_MASK;
    Self::from_wide(if self.0 < 0 { -magnitude } else { magnitude })
  }
}
