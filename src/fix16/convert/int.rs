use super::*;

impl Fix16 {
  /// The largest integer that fits in the integer part.
  const MAX_INT: i32 = i32::MAX >> Fix16::FRAC_BITS;

  /// Create a `Fix16` from an integer. If `n` is out of range (that is, if `|n| > 32767`), returns
  /// [`Fix16::OVERFLOW`].
  ///
  /// # Example
  ///
  /// ```
  /// # use soft_fix16::Fix16;
  /// assert_eq!(Fix16::from_int(1), Fix16::ONE);
  /// assert_eq!(Fix16::from_int(-32767).to_int(), -32767);
  /// assert_eq!(Fix16::from_int(40000), Fix16::OVERFLOW);
  /// assert_eq!(Fix16::from_int(-32768), Fix16::OVERFLOW);
  /// ```
  pub const fn from_int(n: i32) -> Self {
    if n > Self::MAX_INT || n < -Self::MAX_INT {
      Self::OVERFLOW
    } else {
      Self(n << Self::FRAC_BITS)
    }
  }

  /// Create a `Fix16` from an integer, clamping to `[MIN, MAX]` if it's out of range.
  ///
  /// # Example
  ///
  /// ```
  /// # use soft_fix16::Fix16;
  /// assert_eq!(Fix16::saturating_from_int(7), Fix16::from_int(7));
  /// assert_eq!(Fix16::saturating_from_int(40000), Fix16::MAX);
  /// assert_eq!(Fix16::saturating_from_int(i32::MIN), Fix16::MIN);
  /// ```
  pub const fn saturating_from_int(n: i32) -> Self {
    if n > Self::MAX_INT {
      Self::MAX
    } else if n < -Self::MAX_INT {
      Self::MIN
    } else {
      Self(n << Self::FRAC_BITS)
    }
  }

  /// Returns the integer nearest to `self`, or the one further from zero if two are equally
  /// near. This never overflows, since the result is in `-32768 ..= 32768`.
  ///
  /// [`Fix16::OVERFLOW`] is converted to [`i32::MIN`].
  ///
  /// # Example
  ///
  /// ```
  /// # use soft_fix16::{Fix16, fix16};
  /// assert_eq!(fix16!(2.5).to_int(), 3);
  /// assert_eq!(fix16!(-2.5).to_int(), -3);
  /// assert_eq!(fix16!(-2.25).to_int(), -2);
  /// assert_eq!(Fix16::MAX.to_int(), 32768);
  /// assert_eq!(Fix16::OVERFLOW.to_int(), i32::MIN);
  /// ```
  pub const fn to_int(self) -> i32 {
    if self.is_overflow() { return i32::MIN }
    let half = (Self::SCALE >> 1) as i64;
    let x = self.0 as i64;
    // Division truncates towards zero, so offsetting by ½ away from zero first rounds ties away.
    let int = if x >= 0 { (x + half) / Self::SCALE as i64 } else { (x - half) / Self::SCALE as i64 };
    int as i32
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use malachite::rational::Rational;
  use crate::fix16::rational::nearest;
  use proptest::prelude::*;

  #[test]
  fn from_int() {
    assert_eq!(Fix16::from_int(0), Fix16::ZERO);
    assert_eq!(Fix16::from_int(2), Fix16::TWO);
    assert_eq!(Fix16::from_int(-1), Fix16::MINUS_ONE);
    assert_eq!(Fix16::from_int(32767), Fix16::from_bits(0x7fff_0000));
    assert_eq!(Fix16::from_int(-32767), Fix16::from_bits(-0x7fff_0000));
    assert_eq!(Fix16::from_int(32768), Fix16::OVERFLOW);
    assert_eq!(Fix16::from_int(-32768), Fix16::OVERFLOW);
    assert_eq!(Fix16::from_int(i32::MAX), Fix16::OVERFLOW);
    assert_eq!(Fix16::from_int(i32::MIN), Fix16::OVERFLOW);
  }

  #[test]
  fn saturating_from_int() {
    assert_eq!(Fix16::saturating_from_int(32767), Fix16::from_int(32767));
    assert_eq!(Fix16::saturating_from_int(-32767), Fix16::from_int(-32767));
    assert_eq!(Fix16::saturating_from_int(32768), Fix16::MAX);
    assert_eq!(Fix16::saturating_from_int(-32768), Fix16::MIN);
  }

  #[test]
  fn to_int_ties() {
    assert_eq!(Fix16::HALF.to_int(), 1);
    assert_eq!((-Fix16::HALF).to_int(), -1);
    assert_eq!(Fix16::from_bits(0x7fff).to_int(), 0);
    assert_eq!(Fix16::from_bits(-0x7fff).to_int(), 0);
    assert_eq!(Fix16::MIN.to_int(), -32768);
  }

  #[test]
  fn int_round_trip() {
    for n in -32767 ..= 32767 {
      assert_eq!(Fix16::from_int(n).to_int(), n)
    }
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

    #[test]
    fn to_int(x in Fix16::cases_proptest()) {
      let exact = Rational::try_from(x).unwrap();
      let expected = i32::try_from(&nearest(&exact)).unwrap();
      assert_eq!(x.to_int(), expected)
    }

    #[test]
    fn saturating_matches_trapping(n in any::<i32>()) {
      let trapping = Fix16::from_int(n);
      let saturating = Fix16::saturating_from_int(n);
      if trapping.is_overflow() {
        assert!(saturating == Fix16::MAX || saturating == Fix16::MIN)
      } else {
        assert_eq!(saturating, trapping)
      }
    }
  }
}
