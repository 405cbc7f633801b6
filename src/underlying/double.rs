use super::*;

impl Double for i64 {
  type Single = i32;

  #[inline]
  fn round_shr(self, n: u32) -> Self {
    debug_assert!(0 < n && n < 63);
    // Adding half an lsb and flooring rounds ties towards +∞. For negative numbers we want ties
    // towards -∞ instead, which is the same as adding *just under* half an lsb.
    let half = 1_i64 << (n - 1);
    let bias = half - (self < 0) as i64;
    (self + bias) >> n
  }

  #[inline]
  fn narrow(self) -> Option<i32> {
    let max = i32::MAX_MAGNITUDE as i64;
    if -max <= self && self <= max {
      Some(self as i32)
    } else {
      None
    }
  }

  #[inline]
  fn narrow_saturating(self) -> i32 {
    let max = i32::MAX_MAGNITUDE as i64;
    self.clamp(-max, max) as i32
  }
}
