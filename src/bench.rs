//! Re-export some internals for benchmarking purposes; available with feature = "bench".

use crate::Fix16;

impl Fix16 {
  pub fn bench_add_kernel(x: Fix16, y: Fix16) -> i64 {
    Self::add_kernel(x, y)
  }

  pub fn bench_mul_kernel(x: Fix16, y: Fix16) -> i64 {
    Self::mul_kernel(x, y)
  }

  /// `y` must not be zero.
  pub fn bench_div_kernel(x: Fix16, y: Fix16) -> i64 {
    Self::div_kernel(x, y)
  }

  /// `x` must be non-negative.
  pub fn bench_sqrt_kernel(x: Fix16) -> i32 {
    Self::sqrt_kernel(x)
  }

  /// `x` must be in the range where e^x neither saturates nor underflows.
  pub fn bench_exp_kernel(x: Fix16) -> i64 {
    Self::exp_kernel(x)
  }

  /// `x` must be positive.
  pub fn bench_log2_kernel(x: Fix16) -> i32 {
    Self::log2_kernel(x)
  }
}

// Export these for inspection with `cargo asm`.

#[unsafe(no_mangle)]
pub fn fix16_add(x: Fix16, y: Fix16) -> Fix16 {
  x.add(y)
}

#[unsafe(no_mangle)]
pub fn fix16_sub(x: Fix16, y: Fix16) -> Fix16 {
  x.sub(y)
}

#[unsafe(no_mangle)]
pub fn fix16_mul(x: Fix16, y: Fix16) -> Fix16 {
  x.mul(y)
}

#[unsafe(no_mangle)]
pub fn fix16_div(x: Fix16, y: Fix16) -> Fix16 {
  x.div(y)
}

#[unsafe(no_mangle)]
pub fn fix16_rem(x: Fix16, y: Fix16) -> Fix16 {
  x.rem(y)
}

//

#[unsafe(no_mangle)]
pub fn fix16_sadd(x: Fix16, y: Fix16) -> Fix16 {
  x.saturating_add(y)
}

#[unsafe(no_mangle)]
pub fn fix16_ssub(x: Fix16, y: Fix16) -> Fix16 {
  x.saturating_sub(y)
}

#[unsafe(no_mangle)]
pub fn fix16_smul(x: Fix16, y: Fix16) -> Fix16 {
  x.saturating_mul(y)
}

#[unsafe(no_mangle)]
pub fn fix16_sdiv(x: Fix16, y: Fix16) -> Fix16 {
  x.saturating_div(y)
}

//

#[unsafe(no_mangle)]
pub fn fix16_sqrt(x: Fix16) -> Fix16 {
  x.sqrt()
}

#[unsafe(no_mangle)]
pub fn fix16_exp(x: Fix16) -> Fix16 {
  x.exp()
}

#[unsafe(no_mangle)]
pub fn fix16_log2(x: Fix16) -> Fix16 {
  x.log2()
}

#[unsafe(no_mangle)]
pub fn fix16_slog2(x: Fix16) -> Fix16 {
  x.saturating_log2()
}

#[unsafe(no_mangle)]
pub fn fix16_ln(x: Fix16) -> Fix16 {
  x.ln()
}

//

#[unsafe(no_mangle)]
pub fn fix16_from_str(s: &str) -> Fix16 {
  Fix16::from_str_or_overflow(s)
}

#[unsafe(no_mangle)]
pub fn fix16_to_str(x: Fix16, buf: &mut [u8; Fix16::STR_LEN], decimals: usize) -> usize {
  x.to_str(buf, decimals).len()
}

#[unsafe(no_mangle)]
pub fn fix16_from_f64(x: f64) -> Fix16 {
  Fix16::from_f64(x)
}
