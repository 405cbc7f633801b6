use super::*;

/// Fraction bits of the internal precision used to evaluate `exp`.
const POINT: u32 = 32;

/// e in Q32.32, rounded to nearest.
const E_Q32: u128 = 0x2_b7e1_5163;

/// 1/e in Q32.32, rounded to nearest.
const E_RECIP_Q32: u128 = 0x5e2d_58d9;

/// Number of terms of the Taylor series of e^f, for `f` in `[0, 1)`. The first omitted term is
/// below 1/14! < 2^-36, well below the internal precision.
const TAYLOR_TERMS: u64 = 14;

impl Fix16 {
  /// Above this raw value, e^x rounds to something greater than [`Fix16::MAX`] (ln 32768 =
  /// 10.3972…).
  const EXP_SATURATE: i32 = 681391;

  /// Below this raw value, e^x rounds to zero (ln 2^-17 = -11.7835…).
  const EXP_UNDERFLOW: i32 = -772243;

  /// e^f in Q32.32, for `f` a raw value in `0 .. SCALE`.
  fn exp_frac_kernel(f: i32) -> u128 {
    debug_assert!(0 <= f && f < Self::SCALE);
    // Taylor series: term_n = term_{n-1} · f / n, accumulated in Q32.32. `f < 1`, so the terms
    // only shrink and the sum stays below e.
    let f = (f as u128) << (POINT - Self::FRAC_BITS);
    let mut sum: u128 = 1 << POINT;
    let mut term: u128 = 1 << POINT;
    for n in 1 ..= TAYLOR_TERMS {
      term = ((term * f) >> POINT) / n as u128;
      sum += term;
    }
    sum
  }

  /// Return the raw value of e^x, rounded, for `x` in `EXP_UNDERFLOW ..= EXP_SATURATE`. The
  /// result may exceed `MAX` by a fraction of an ulp before clamping, so it's returned wide.
  #[inline]
  pub(crate) fn exp_kernel(x: Self) -> i64 {
    // Split x = n + f, with `n` an integer (rounded towards -∞, so it's in -12 ..= 10) and `f` in
    // [0, 1). Then
    //
    //   e^x = e^f · e^n
    //
    // The first factor is a quickly converging series. The second is `n` multiplications by e,
    // or `-n` multiplications by 1/e. Everything is carried out with 32 fractional bits, so the
    // rounding errors of those ≤ 12 steps stay well below the final precision of 16 bits.
    let (n, f) = x.split();
    let mut acc = Self::exp_frac_kernel(f);
    let (factor, count) = if n >= 0 { (E_Q32, n) } else { (E_RECIP_Q32, -n) };
    for _ in 0 .. count {
      // acc < 2^48, factor < 2^34, so the product is well within 128 bits
      acc = (acc * factor + (1 << (POINT - 1))) >> POINT;
    }
    let half = 1 << (POINT - Self::FRAC_BITS - 1);
    ((acc + half) >> (POINT - Self::FRAC_BITS)) as i64
  }

  /// Returns e<sup>`self`</sup>, the exponential function.
  ///
  /// This function never overflows: if the result is too big, it saturates to [`Fix16::MAX`],
  /// and if it is too small, it underflows to [`Fix16::ZERO`]. The result is within a couple of
  /// ulps of the exact value (relative error below 2^-30, plus the final rounding). The
  /// sentinel, as always, propagates.
  ///
  /// # Example
  ///
  /// ```
  /// # use soft_fix16::Fix16;
  /// assert_eq!(Fix16::ZERO.exp(), Fix16::ONE);
  /// assert_eq!(Fix16::ONE.exp(), Fix16::E);
  /// assert_eq!(Fix16::from_int(11).exp(), Fix16::MAX);
  /// assert_eq!(Fix16::from_int(-12).exp(), Fix16::ZERO);
  /// ```
  pub fn exp(self) -> Self {
    if self.is_overflow() {
      Self::OVERFLOW
    } else if self.0 > Self::EXP_SATURATE {
      Self::MAX
    } else if self.0 < Self::EXP_UNDERFLOW {
      Self::ZERO
    } else {
      Self::from_wide_saturating(Self::exp_kernel(self))
    }
  }
}
