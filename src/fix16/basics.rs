use super::*;
use crate::underlying::{Word, Double};

impl Fix16 {
  /// The number of fractional bits.
  pub const FRAC_BITS: u32 = 16;

  /// The number of integer bits, including the sign.
  pub const INT_BITS: u32 = i32::BITS - Self::FRAC_BITS;

  /// The raw value of 1.
  pub(crate) const SCALE: i32 = 1 << Self::FRAC_BITS;

  /// Construct a number from its raw representation (the real value times 2^16).
  ///
  /// ```
  /// # use soft_fix16::Fix16;
  /// assert_eq!(Fix16::from_bits(0x0001_8000), Fix16::ONE + Fix16::HALF);
  /// assert_eq!(Fix16::from_bits(i32::MIN), Fix16::OVERFLOW);
  /// ```
  #[inline]
  pub const fn from_bits(bits: i32) -> Self {
    Self(bits)
  }

  /// Return the raw representation of `self` (the real value times 2^16).
  #[inline]
  pub const fn to_bits(self) -> i32 {
    self.0
  }

  /// Whether `self` is the [`Fix16::OVERFLOW`] sentinel.
  #[inline]
  pub const fn is_overflow(self) -> bool {
    self.0 == i32::MIN
  }

  /// Whether either operand is the [`Fix16::OVERFLOW`] sentinel.
  #[inline]
  pub(crate) const fn either_overflow(self, other: Self) -> bool {
    self.is_overflow() | other.is_overflow()
  }

  /// Narrow an exact wide result back to a `Fix16`, or [`Fix16::OVERFLOW`] if it doesn't fit.
  #[inline]
  pub(crate) fn from_wide(x: i64) -> Self {
    match x.narrow() {
      Some(bits) => Self(bits),
      None => Self::OVERFLOW,
    }
  }

  /// Narrow an exact wide result back to a `Fix16`, clamping to `[MIN, MAX]`.
  #[inline]
  pub(crate) fn from_wide_saturating(x: i64) -> Self {
    Self(x.narrow_saturating())
  }

  /// The integer part of `self`, rounded towards -∞, and the fractional part as a raw value in
  /// `0 .. SCALE`.
  #[inline]
  pub(crate) fn split(self) -> (i32, i32) {
    (self.0 >> Self::FRAC_BITS, self.0.mask_lsb(Self::FRAC_BITS))
  }
}
