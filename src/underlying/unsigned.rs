use super::*;

impl Unsigned for u64 {
  fn digit_sqrt(self, width: u32) -> (Self, bool) {
    debug_assert!(width % 2 == 0 && width <= Self::BITS);
    debug_assert!(width == Self::BITS || self >> width == 0);
    // Classic shift-and-subtract square root, in base 4: each iteration consumes two bits of
    // `self` (from the left) and produces one bit of the root. At the start of each iteration
    //
    //   rem = self - (root_so_far)²
    //
    // where `root` holds the partial root already shifted into place relative to `bit`.
    let mut rem = self;
    let mut root: u64 = 0;
    let mut bit: u64 = 1 << (width - 2);
    for _ in 0 .. width / 2 {
      let trial = root + bit;
      if rem >= trial {
        rem -= trial;
        root = (root >> 1) + bit;
      } else {
        root >>= 1;
      }
      bit >>= 2;
    }
    // Now `rem = self - root²`. The exact root is nearer to `root + 1` iff
    // `self > (root + ½)² = root² + root + ¼`, i.e. (since everything is an integer) iff
    // `rem > root`. A tie is impossible.
    (root, rem > root)
  }

  #[inline]
  fn square_fixed(self, point: u32) -> Self {
    debug_assert!(self >> point == 1, "operand not in [1, 2)");
    debug_assert!(point <= 31);
    (self * self) >> point
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use proptest::prelude::*;

  #[test]
  fn digit_sqrt_exact() {
    assert_eq!(0_u64.digit_sqrt(48), (0, false));
    assert_eq!(1_u64.digit_sqrt(48), (1, false));
    assert_eq!(4_u64.digit_sqrt(48), (2, false));
    assert_eq!((1_u64 << 34).digit_sqrt(48), (1 << 17, false));
    assert_eq!(u64::MAX.digit_sqrt(64), (u32::MAX as u64, true));
  }

  #[test]
  fn digit_sqrt_round() {
    assert_eq!(2_u64.digit_sqrt(48), (1, false));  // 1.414
    assert_eq!(3_u64.digit_sqrt(48), (1, true));   // 1.732
    assert_eq!(6_u64.digit_sqrt(48), (2, false));  // 2.449
    assert_eq!(7_u64.digit_sqrt(48), (2, true));   // 2.646
    assert_eq!(8_u64.digit_sqrt(48), (2, true));   // 2.828
  }

  #[test]
  fn square_fixed() {
    assert_eq!((1_u64 << 31).square_fixed(31), 1 << 31);
    assert_eq!((3_u64 << 30).square_fixed(31), 9 << 29);
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]
    #[test]
    fn digit_sqrt_floor(x in 0_u64 .. 1 << 48) {
      let (root, round_up) = x.digit_sqrt(48);
      assert!(root * root <= x);
      assert!((root + 1) * (root + 1) > x);
      // 4x vs (2r + 1)², both exact in u128
      let x4 = 4 * x as u128;
      let mid = (2 * root as u128 + 1).pow(2);
      assert_eq!(round_up, x4 > mid);
    }
  }
}
