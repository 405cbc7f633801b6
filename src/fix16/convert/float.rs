use super::*;

impl Fix16 {
  /// Create a `Fix16` from an [`f64`], rounding to nearest (ties away from zero).
  ///
  /// Values beyond the representable range, including infinities, saturate to [`Fix16::MAX`] or
  /// [`Fix16::MIN`]. NaN becomes [`Fix16::OVERFLOW`].
  ///
  /// # Example
  ///
  /// ```
  /// # use soft_fix16::Fix16;
  /// assert_eq!(Fix16::from_f64(1.5), Fix16::from_bits(0x0001_8000));
  /// assert_eq!(Fix16::from_f64(-0.5), -Fix16::HALF);
  /// assert_eq!(Fix16::from_f64(1e9), Fix16::MAX);
  /// assert_eq!(Fix16::from_f64(f64::NEG_INFINITY), Fix16::MIN);
  /// assert_eq!(Fix16::from_f64(f64::NAN), Fix16::OVERFLOW);
  /// ```
  pub fn from_f64(value: f64) -> Self {
    const MAX: f64 = i32::MAX as f64;
    if value.is_nan() { return Self::OVERFLOW }
    // Multiplying by a power of two is exact (barring overflow to ∞, which is clamped anyway).
    let scaled = value * Self::SCALE as f64;
    let scaled = if scaled >= 0. { scaled + 0.5 } else { scaled - 0.5 };
    if scaled >= MAX {
      Self::MAX
    } else if scaled <= -MAX {
      Self::MIN
    } else {
      // `as` truncates towards zero, which after the offset of ±½ rounds ties away from zero.
      Self(scaled as i32)
    }
  }

  /// Create a `Fix16` from an [`f32`]; see [`Fix16::from_f64`].
  ///
  /// # Example
  ///
  /// ```
  /// # use soft_fix16::Fix16;
  /// assert_eq!(Fix16::from_f32(3.25), Fix16::from_bits(0x0003_4000));
  /// assert_eq!(Fix16::from_f32(f32::INFINITY), Fix16::MAX);
  /// ```
  pub fn from_f32(value: f32) -> Self {
    // Exact
    Self::from_f64(value as f64)
  }

  /// Convert `self` to an [`f64`]. The conversion is exact; [`Fix16::OVERFLOW`] becomes NaN.
  ///
  /// # Example
  ///
  /// ```
  /// # use soft_fix16::Fix16;
  /// assert_eq!(Fix16::HALF.to_f64(), 0.5);
  /// assert_eq!(Fix16::MIN_POSITIVE.to_f64(), 1. / 65536.);
  /// assert!(Fix16::OVERFLOW.to_f64().is_nan());
  /// ```
  pub fn to_f64(self) -> f64 {
    if self.is_overflow() {
      f64::NAN
    } else {
      self.0 as f64 / Self::SCALE as f64
    }
  }

  /// Convert `self` to an [`f32`], rounding to nearest if it has more than 24 significant bits.
  /// [`Fix16::OVERFLOW`] becomes NaN.
  ///
  /// # Example
  ///
  /// ```
  /// # use soft_fix16::Fix16;
  /// assert_eq!(Fix16::from_int(-3).to_f32(), -3.);
  /// assert!(Fix16::OVERFLOW.to_f32().is_nan());
  /// ```
  pub fn to_f32(self) -> f32 {
    if self.is_overflow() {
      f32::NAN
    } else {
      // The i32 → f32 cast rounds (to nearest even), and the division by a power of two is exact.
      self.0 as f32 / Self::SCALE as f32
    }
  }
}

impl From<Fix16> for f64 {
  #[inline]
  fn from(value: Fix16) -> Self {
    value.to_f64()
  }
}

impl From<Fix16> for f32 {
  #[inline]
  fn from(value: Fix16) -> Self {
    value.to_f32()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use malachite::rational::Rational;
  use crate::fix16::rational::saturating_nearest;
  use proptest::prelude::*;

  #[test]
  fn from_f64_ties() {
    let ulp = 1. / 65536.;
    assert_eq!(Fix16::from_f64(0.5 * ulp), Fix16::MIN_POSITIVE);
    assert_eq!(Fix16::from_f64(-0.5 * ulp), -Fix16::MIN_POSITIVE);
    assert_eq!(Fix16::from_f64(0.49 * ulp), Fix16::ZERO);
    assert_eq!(Fix16::from_f64(2.5 * ulp), Fix16::from_bits(3));
    assert_eq!(Fix16::from_f64(-0.), Fix16::ZERO);
  }

  #[test]
  fn from_f64_limits() {
    assert_eq!(Fix16::from_f64(i32::MAX as f64 / 65536.), Fix16::MAX);
    assert_eq!(Fix16::from_f64(32767.99998), Fix16::MAX);
    assert_eq!(Fix16::from_f64(32767.9999), Fix16::from_bits(0x7fff_fff9));
    assert_eq!(Fix16::from_f64(32768.), Fix16::MAX);
    assert_eq!(Fix16::from_f64(-32768.), Fix16::MIN);
    assert_eq!(Fix16::from_f64(f64::INFINITY), Fix16::MAX);
    assert_eq!(Fix16::from_f64(f64::MIN), Fix16::MIN);
    assert_eq!(Fix16::from_f64(f64::NAN), Fix16::OVERFLOW);
    assert_eq!(Fix16::from_f32(f32::NAN), Fix16::OVERFLOW);
  }

  #[test]
  fn to_float() {
    assert_eq!(f64::from(Fix16::MAX), i32::MAX as f64 / 65536.);
    assert_eq!(f64::from(Fix16::MIN), -(i32::MAX as f64) / 65536.);
    assert_eq!(f32::from(Fix16::PI), 3.1415863);
    assert!(f64::from(Fix16::OVERFLOW).is_nan());
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

    #[test]
    fn f64_round_trip(x in Fix16::cases_proptest()) {
      assert_eq!(Fix16::from_f64(x.to_f64()), x)
    }

    #[test]
    fn f32_round_trip(x in -0x00ff_ffff ..= 0x00ff_ffff) {
      let x = Fix16::from_bits(x);
      assert_eq!(Fix16::from_f32(x.to_f32()), x)
    }

    #[test]
    fn from_f64(value in -40000_f64 .. 40000_f64) {
      let exact = Rational::try_from(value).unwrap();
      assert_eq!(Fix16::from_f64(value), saturating_nearest(exact))
    }
  }
}
