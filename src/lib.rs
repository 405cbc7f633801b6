#![cfg_attr(not(test), no_std)]
//! This crate provides a small, exact, and portable software implementation of
//! [Q16.16 fixed point](https://en.wikipedia.org/wiki/Q_(number_format)) arithmetic.
//!
//! # Introduction
//!
//! A Q16.16 number is a 32-bit signed integer that stands for that integer divided by 65536: 16
//! bits for the integer part (sign included) and 16 for the fraction. That gives a range of about
//! ±32768 with a constant resolution of 2^-16 ≈ 0.0000153.
//!
//! Fixed point is the natural choice on targets without an FPU, and wherever results must be
//! identical bit-for-bit across platforms: every operation in this crate, including `sqrt`,
//! `exp`, and the logarithms, uses only integer arithmetic and no floating point whatsoever.
//!
//! Operations come in two flavours:
//!
//!   - **Trapping** ([`Fix16::add`], [`Fix16::mul`], [`Fix16::div`], …, and the usual operators
//!     `+ - * / %`): if the result is out of range or undefined, they return the sentinel
//!     [`Fix16::OVERFLOW`], which then propagates through further trapping operations.
//!   - **Saturating** ([`Fix16::saturating_add`], [`Fix16::saturating_mul`], …): if the result is
//!     out of range, they clamp to [`Fix16::MAX`] or [`Fix16::MIN`].
//!
//! # Usage
//!
//! ```
//! use soft_fix16::{Fix16, fix16};
//!
//! // Create numbers from ints, floats, strings, literals, or a raw bit representation.
//! let a = Fix16::from_int(3);
//! let b = Fix16::from_f64(0.125);
//! let c: Fix16 = "2.5".parse().unwrap();
//! let d = fix16!(-1.75);
//! let e = Fix16::from_bits(0x0001_8000);
//!
//! // Perform arithmetic and comparisons with the usual operators.
//! assert_eq!(a * c + d, fix16!(5.75));
//! assert!(b < e);
//! assert_eq!(fix16!(16).sqrt(), fix16!(4));
//!
//! // Detect overflow once at the end of a computation...
//! assert!((a / Fix16::ZERO + b).is_overflow());
//! // ...or saturate instead.
//! assert_eq!(Fix16::MAX.saturating_add(a), Fix16::MAX);
//!
//! // Convert back to ints, floats, strings, or a raw bit representation.
//! assert_eq!(c.to_int(), 3);
//! assert_eq!(b.to_f64(), 0.125);
//! assert_eq!(format!("{d:.3}"), "-1.750");
//! assert_eq!(e.to_bits(), 0x18000);
//! ```
//!
//! This crate includes benchmarks; run them with `cargo bench -F bench`.

mod fix16;
mod underlying;

pub use fix16::Fix16;
pub use fix16::convert::text::ParseFix16Error;

/// Create a [`Fix16`] constant from a decimal literal, at compile time.
///
/// The literal is rounded to the nearest representable value. A literal that is out of range, or
/// not a plain decimal number, is a compile error.
///
/// # Example
///
/// ```
/// # use soft_fix16::{Fix16, fix16};
/// assert_eq!(fix16!(1), Fix16::ONE);
/// assert_eq!(fix16!(-0.5), -Fix16::HALF);
/// assert_eq!(fix16!(3.14159), Fix16::PI);
///
/// const LIMIT: Fix16 = fix16!(100.25);
/// assert_eq!(LIMIT.to_bits(), 100 << 16 | 0x4000);
/// ```
///
/// ```compile_fail
/// # use soft_fix16::fix16;
/// let too_big = fix16!(32768);
/// ```
#[macro_export]
macro_rules! fix16 {
  (- $lit:literal) => {
    {
      const VALUE: $crate::Fix16 = $crate::Fix16::const_parse(concat!("-", stringify!($lit)));
      VALUE
    }
  };
  ($lit:literal) => {
    {
      const VALUE: $crate::Fix16 = $crate::Fix16::const_parse(stringify!($lit));
      VALUE
    }
  };
}

/// Number of cases for the randomised tests.
#[cfg(test)]
const PROPTEST_CASES: u32 = if cfg!(debug_assertions) {0x1000} else {0x10_0000};

/// Re-export some internals for benchmarking purposes, only on `feature = "bench"`.
#[cfg(feature = "bench")]
mod bench;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn literals() {
    assert_eq!(fix16!(0), Fix16::ZERO);
    assert_eq!(fix16!(0.5), Fix16::HALF);
    assert_eq!(fix16!(-1), Fix16::MINUS_ONE);
    assert_eq!(fix16!(2.71828), Fix16::E);
    assert_eq!(fix16!(32767.99999), Fix16::MAX);
    assert_eq!(fix16!(-32767.99999), Fix16::MIN);
    assert_eq!(fix16!(0.00001), Fix16::MIN_POSITIVE);
  }

  #[test]
  fn literal_is_const() {
    const HALF_PI: Fix16 = fix16!(1.5708);
    assert_eq!(HALF_PI, Fix16::from_bits(102944));
  }

  #[test]
  fn scenarios() {
    assert_eq!(Fix16::from_int(5) + Fix16::from_int(3), Fix16::from_int(8));
    assert_eq!(Fix16::MAX.saturating_mul(Fix16::TWO), Fix16::MAX);
    assert_eq!(Fix16::ONE.saturating_div(Fix16::ZERO), Fix16::OVERFLOW);
    assert_eq!(Fix16::from_int(4).sqrt(), Fix16::from_int(2));
    assert_eq!(Fix16::from_str_or_overflow("  123.5xyz"), Fix16::OVERFLOW);
    let mut buf = [0; Fix16::STR_LEN];
    assert_eq!(Fix16::from_int(-2).to_str(&mut buf, 2), "-2.00");
  }
}
