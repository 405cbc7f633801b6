use super::*;

impl Word for i32 {
  type Double = i64;

  const MAX_MAGNITUDE: Self = i32::MAX;

  #[inline]
  fn widen(self) -> i64 { self as i64 }

  #[inline]
  fn lshr(self, n: u32) -> Self { ((self as u32) >> n) as i32 }

  #[inline]
  fn mask_lsb(self, n: u32) -> Self {
    let mask = (1_i32 << n).wrapping_sub(1);
    self & mask
  }

  #[inline]
  fn doubling_mul(self, other: Self) -> i64 {
    self as i64 * other as i64
  }

  #[inline]
  fn shift_div_rem(self, other: Self, precision: u32) -> (i64, i64) {
    debug_assert!(other != 0, "shift_div_rem by zero");
    debug_assert!(precision < 32);
    let a = (self as i64) << precision;
    let b = other as i64;
    // Rust's division rounds towards 0, which is what we want. Note `a / b` cannot overflow an
    // `i64`, because `|a| ≤ 2^62`.
    (a / b, a % b)
  }
}
