use super::*;

// The saturating operations share their kernels with the trapping ones in `ops`; they only differ
// in what they do with a result that doesn't fit. Note they do not special-case the sentinel: an
// `OVERFLOW` operand is just the number -32768.

impl Fix16 {
  /// Returns `self + other`, clamped to [`Fix16::MIN`]`..=`[`Fix16::MAX`].
  ///
  /// Never returns [`Fix16::OVERFLOW`].
  ///
  /// # Example
  ///
  /// ```
  /// # use soft_fix16::Fix16;
  /// assert_eq!(Fix16::MAX.saturating_add(Fix16::ONE), Fix16::MAX);
  /// assert_eq!(Fix16::MIN.saturating_add(Fix16::MINUS_ONE), Fix16::MIN);
  /// ```
  #[inline]
  pub fn saturating_add(self, other: Self) -> Self {
    Self::from_wide_saturating(Self::add_kernel(self, other))
  }

  /// Returns `self - other`, clamped to [`Fix16::MIN`]`..=`[`Fix16::MAX`].
  ///
  /// Never returns [`Fix16::OVERFLOW`].
  #[inline]
  pub fn saturating_sub(self, other: Self) -> Self {
    Self::from_wide_saturating(Self::sub_kernel(self, other))
  }

  /// Returns `self × other`, rounded as [`Fix16::mul`], then clamped to
  /// [`Fix16::MIN`]`..=`[`Fix16::MAX`].
  ///
  /// Never returns [`Fix16::OVERFLOW`].
  ///
  /// # Example
  ///
  /// ```
  /// # use soft_fix16::Fix16;
  /// assert_eq!(Fix16::MAX.saturating_mul(Fix16::TWO), Fix16::MAX);
  /// assert_eq!(Fix16::MAX.saturating_mul(-Fix16::TWO), Fix16::MIN);
  /// ```
  #[inline]
  pub fn saturating_mul(self, other: Self) -> Self {
    Self::from_wide_saturating(Self::mul_kernel(self, other))
  }

  /// Returns `self ÷ other`, truncated as [`Fix16::div`], then clamped to
  /// [`Fix16::MIN`]`..=`[`Fix16::MAX`].
  ///
  /// Division by zero is a programming error rather than an overflow, and is the only case in
  /// which this function returns [`Fix16::OVERFLOW`].
  ///
  /// # Example
  ///
  /// ```
  /// # use soft_fix16::Fix16;
  /// assert_eq!(Fix16::MAX.saturating_div(Fix16::HALF), Fix16::MAX);
  /// assert_eq!(Fix16::ONE.saturating_div(Fix16::ZERO), Fix16::OVERFLOW);
  /// ```
  #[inline]
  pub fn saturating_div(self, other: Self) -> Self {
    if other == Self::ZERO {
      Self::OVERFLOW
    } else {
      Self::from_wide_saturating(Self::div_kernel(self, other))
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::fix16::rational::{saturating_nearest, saturating_trunc, is_zero};
  use malachite::rational::Rational;
  use proptest::prelude::*;

  /// The numeric value of any raw bit pattern, *including* the sentinel as -32768.
  fn value(x: Fix16) -> Rational {
    Rational::from_signeds(x.to_bits(), Fix16::SCALE)
  }

  /// Aux function: check all four saturating operations on `a` and `b` against the oracle.
  fn is_correct(a: Fix16, b: Fix16) -> bool {
    let (x, y) = (value(a), value(b));
    let div = if is_zero(&y) { Fix16::OVERFLOW } else { saturating_trunc(&x / &y) };
    a.saturating_add(b) == saturating_nearest(&x + &y)
    && a.saturating_sub(b) == saturating_nearest(&x - &y)
    && a.saturating_mul(b) == saturating_nearest(&x * &y)
    && a.saturating_div(b) == div
  }

  #[test]
  fn special_exhaustive() {
    for a in Fix16::cases_special() {
      for b in Fix16::cases_special() {
        assert!(is_correct(a, b), "{a:?} ⋅ {b:?}")
      }
    }
  }

  #[test]
  fn never_sentinel() {
    for a in Fix16::cases_special() {
      for b in Fix16::cases_special() {
        assert!(!a.saturating_add(b).is_overflow());
        assert!(!a.saturating_sub(b).is_overflow());
        assert!(!a.saturating_mul(b).is_overflow());
        if b != Fix16::ZERO {
          assert!(!a.saturating_div(b).is_overflow());
        }
      }
    }
  }

  #[test]
  fn smul_max_two() {
    assert_eq!(Fix16::MAX.saturating_mul(Fix16::TWO), Fix16::MAX);
  }

  #[test]
  fn sdiv_by_zero() {
    assert_eq!(Fix16::ONE.saturating_div(Fix16::ZERO), Fix16::OVERFLOW);
    assert_eq!(Fix16::ZERO.saturating_div(Fix16::ZERO), Fix16::OVERFLOW);
  }

  #[test]
  fn clamp_direction() {
    let big = Fix16::from_int(30000);
    assert_eq!(big.saturating_add(big), Fix16::MAX);
    assert_eq!((-big).saturating_add(-big), Fix16::MIN);
    assert_eq!(big.saturating_sub(-big), Fix16::MAX);
    assert_eq!((-big).saturating_sub(big), Fix16::MIN);
    assert_eq!(big.saturating_mul(-big), Fix16::MIN);
    assert_eq!((-big).saturating_mul(-big), Fix16::MAX);
    assert_eq!(big.saturating_div(-Fix16::MIN_POSITIVE), Fix16::MIN);
    assert_eq!((-big).saturating_div(-Fix16::MIN_POSITIVE), Fix16::MAX);
  }

  /// The sum -16384 + -16384 is exactly the sentinel's bit pattern, which is out of range.
  #[test]
  fn clamps_to_min_not_sentinel() {
    let a = Fix16::from_int(-16384);
    assert_eq!(a.saturating_add(a), Fix16::MIN);
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

    #[test]
    fn random_pairs(a in Fix16::cases_proptest(), b in Fix16::cases_proptest()) {
      assert!(is_correct(a, b), "{a:?} ⋅ {b:?}")
    }

    #[test]
    fn mul_bounds(a in Fix16::cases_proptest(), b in Fix16::cases_proptest()) {
      let product = a.saturating_mul(b);
      assert!(Fix16::MIN <= product && product <= Fix16::MAX);
      let exact = value(a) * value(b);
      if exact > value(Fix16::MAX) { assert_eq!(product, Fix16::MAX) }
      if exact < value(Fix16::MIN) { assert_eq!(product, Fix16::MIN) }
    }

    /// Dividing a product by one of its factors gives back the other within 1 ulp, as long as
    /// the divisor is at least 1 in magnitude, so the rounding error of the product isn't
    /// magnified by the division.
    #[test]
    fn div_undoes_mul((a, b) in unsaturated_factors()) {
      let product = a.saturating_mul(b);
      let back = product.saturating_div(b);
      assert!((back.to_bits() as i64 - a.to_bits() as i64).abs() <= 1, "{a:?} {b:?} {back:?}");
    }
  }

  /// Pairs `(a, b)` with `|b| ≥ 1` and `a` small enough that `a ⋅ b` stays in range.
  fn unsaturated_factors() -> impl Strategy<Value = (Fix16, Fix16)> {
    let b = prop_oneof![
      0x1_0000 ..= i32::MAX,
      0x1_0000 ..= 1 << 20,
    ];
    (b, any::<bool>()).prop_flat_map(|(b, negative)| {
      let limit = (i32::MAX as i64 * 0x1_0000 / b as i64 - 1).min(i32::MAX as i64) as i32;
      let b = if negative { -b } else { b };
      (-limit ..= limit, Just(b))
    }).prop_map(|(a, b)| (Fix16::from_bits(a), Fix16::from_bits(b)))
  }
}
