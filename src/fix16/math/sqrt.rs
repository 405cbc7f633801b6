use super::*;
use crate::underlying::Unsigned;

impl Fix16 {
  /// The width in bits of the operand of the integer square root in [`Self::sqrt_kernel`].
  const SQRT_WIDTH: u32 = 48;

  /// Return the raw value of √x, rounded to nearest.
  ///
  /// `x` must be non-negative.
  #[inline]
  pub(crate) fn sqrt_kernel(x: Self) -> i32 {
    // If `s` is the raw value of `x`, we want the raw value of √x, which is
    //
    //   √x * 2^16 = √(s / 2^16) * 2^16 = √(s * 2^16)
    //
    // So we just need the integer square root of `s << 16`. Since `s` is non-negative, it has at
    // most 31 significant bits, so `s << 16` fits comfortably in 48 bits. Its root has at most 24
    // significant bits and is always in range (√32768 ≈ 181).
    //
    // The digit-by-digit algorithm takes exactly 24 iterations regardless of `x`, and needs only
    // shifts, additions, and comparisons.
    debug_assert!(x.0 >= 0);
    let s = (x.0 as u64) << Self::FRAC_BITS;
    let (root, round_up) = s.digit_sqrt(Self::SQRT_WIDTH);
    root as i32 + i32::from(round_up)
  }

  /// Returns the square root of `self`, rounded to nearest. If `self` is negative, returns
  /// [`Fix16::OVERFLOW`].
  ///
  /// # Example
  ///
  /// ```
  /// # use soft_fix16::Fix16;
  /// assert_eq!(Fix16::from_int(4).sqrt(), Fix16::TWO);
  /// assert_eq!(Fix16::from_bits(0x4000).sqrt(), Fix16::HALF);
  /// assert_eq!(Fix16::ZERO.sqrt(), Fix16::ZERO);
  /// assert_eq!(Fix16::MINUS_ONE.sqrt(), Fix16::OVERFLOW);
  /// ```
  pub fn sqrt(self) -> Self {
    if self.0 < 0 {
      Self::OVERFLOW
    } else {
      Self(Self::sqrt_kernel(self))
    }
  }
}
