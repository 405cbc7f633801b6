use super::*;
use crate::underlying::Unsigned;

impl Fix16 {
  /// Return the raw value of log₂ x, rounded.
  ///
  /// `x` must be positive.
  #[inline]
  pub(crate) fn log2_kernel(x: Self) -> i32 {
    debug_assert!(x.0 > 0);
    // Write x = m · 2^e, with `m` in [1, 2). Then log₂ x = e + log₂ m, where `e` is the integer
    // part and log₂ m in [0, 1) is the fractional part.
    //
    // `e` is just the position of the highest set bit, relative to the binary point (which sits
    // 16 places from the right). Shifting that bit to position 31 gives `m` in Q1.31.
    let x = x.0 as u32;
    let leading_zeros = x.leading_zeros();
    let int = 15 - leading_zeros as i32;
    let mut m = (x as u64) << leading_zeros;

    // For the fractional bits we use that log₂(m²) = 2 log₂ m. Squaring `m` gives a number in
    // [1, 4). If it's in [2, 4), the next bit of log₂ m is 1, and we halve it to bring it back to
    // [1, 2); otherwise the next bit is 0. Each iteration yields one bit, so we need 16 of them,
    // plus one more to round.
    const POINT: u32 = 31;
    const TWO: u64 = 2 << POINT;
    let mut frac: i32 = 0;
    for _ in 0 .. Self::FRAC_BITS {
      m = m.square_fixed(POINT);
      frac <<= 1;
      if m >= TWO {
        frac |= 1;
        m >>= 1;
      }
    }
    let round_up = m.square_fixed(POINT) >= TWO;

    (int << Self::FRAC_BITS) + frac + i32::from(round_up)
  }

  /// Returns the base-2 logarithm of `self`. If `self` is zero or negative, returns
  /// [`Fix16::OVERFLOW`].
  ///
  /// The result is within 1 ulp of the exact value, and it is exact for powers of two. It cannot
  /// overflow: the result is always in `[-16, 15]`.
  ///
  /// # Example
  ///
  /// ```
  /// # use soft_fix16::Fix16;
  /// assert_eq!(Fix16::from_int(8).log2(), Fix16::from_int(3));
  /// assert_eq!(Fix16::HALF.log2(), Fix16::MINUS_ONE);
  /// assert_eq!(Fix16::MIN_POSITIVE.log2(), Fix16::from_int(-16));
  /// assert_eq!(Fix16::ZERO.log2(), Fix16::OVERFLOW);
  /// ```
  pub fn log2(self) -> Self {
    if self.0 <= 0 {
      Self::OVERFLOW
    } else {
      Self(Self::log2_kernel(self))
    }
  }

  /// Returns the base-2 logarithm of `self`, or [`Fix16::MIN`] if `self` is zero or negative (in
  /// place of -∞).
  ///
  /// Never returns [`Fix16::OVERFLOW`]; like the other saturating operations, it treats that bit
  /// pattern as the negative number it would otherwise be. For positive inputs it is the same as
  /// [`Fix16::log2`]; at the top of the range, log₂ [`Fix16::MAX`] rounds to exactly 15, so
  /// there is nothing to clamp.
  ///
  /// # Example
  ///
  /// ```
  /// # use soft_fix16::Fix16;
  /// assert_eq!(Fix16::from_int(8).saturating_log2(), Fix16::from_int(3));
  /// assert_eq!(Fix16::ZERO.saturating_log2(), Fix16::MIN);
  /// assert_eq!(Fix16::MINUS_ONE.saturating_log2(), Fix16::MIN);
  /// ```
  pub fn saturating_log2(self) -> Self {
    if self.0 <= 0 {
      Self::MIN
    } else {
      Self(Self::log2_kernel(self))
    }
  }

  /// Returns the natural logarithm of `self`. If `self` is zero or negative, returns
  /// [`Fix16::OVERFLOW`].
  ///
  /// Computed as log₂ x · [`Fix16::LN_2`], so the result is within 3 ulps of the exact value.
  ///
  /// # Example
  ///
  /// ```
  /// # use soft_fix16::Fix16;
  /// assert_eq!(Fix16::ONE.ln(), Fix16::ZERO);
  /// assert_eq!(Fix16::E.ln(), Fix16::ONE);
  /// assert_eq!(Fix16::MINUS_ONE.ln(), Fix16::OVERFLOW);
  /// ```
  pub fn ln(self) -> Self {
    if self.0 <= 0 {
      Self::OVERFLOW
    } else {
      // |log₂ x| ≤ 16, so this can't actually saturate.
      Self(Self::log2_kernel(self)).saturating_mul(Self::LN_2)
    }
  }
}
