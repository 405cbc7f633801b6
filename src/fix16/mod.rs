//! This module and its submodules contain a software implementation of Q16.16 fixed point
//! arithmetic: a real number is stored as a 32-bit two's complement integer scaled by 2^16, so
//! the low 16 bits are the fraction and the high 16 bits (sign included) are the integer part.
//!
//! Compared with a floating point type, this is much simpler to implement in software; the
//! interesting parts are elsewhere:
//!
//!   - Detecting overflow in every operation, which we do by carrying out the operation exactly
//!     in a type twice as wide as the storage, and checking whether it fits.
//!   - Rounding products correctly.
//!   - The transcendental functions (`sqrt`, `exp`, `log2`, `ln`), which must be computed with
//!     integer operations only, in a bounded number of steps, and bit-for-bit identically on
//!     every platform.
//!
//! Some notation used in the comments:
//!
//!   - **ulp**: unit in the last place, i.e. 2^-16, the smallest positive value.
//!   - **Raw value**: the underlying `i32`; the real value is `raw / 65536`.
//!   - **Qm.n**: a fixed point number with `m` integer bits and `n` fraction bits. Internally
//!     some kernels use more precise formats than Q16.16, like Q32.32.

/// A Q16.16 fixed point number.
///
/// # The overflow sentinel
///
/// Every bit pattern is a valid number except one: the raw value `i32::MIN` is reserved as the
/// [`Fix16::OVERFLOW`] sentinel, which is returned by the *trapping* operations ([`add`],
/// [`mul`], [`div`], [`sqrt`], [`log2`], …) when the result does not fit or the operand is
/// outside the domain. It is sticky: a trapping operation on an `OVERFLOW` operand returns
/// `OVERFLOW`, so a long computation can be checked just once at the end.
///
/// Consequently, the representable range is symmetric: `[MIN, MAX]`, with
/// [`Fix16::MIN`] `= -`[`Fix16::MAX`]. The *saturating* operations ([`saturating_add`],
/// [`saturating_mul`], …) clamp to that range and never return the sentinel (except for a
/// division by zero).
///
/// [`add`]: Fix16::add
/// [`mul`]: Fix16::mul
/// [`div`]: Fix16::div
/// [`sqrt`]: Fix16::sqrt
/// [`log2`]: Fix16::log2
/// [`saturating_add`]: Fix16::saturating_add
/// [`saturating_mul`]: Fix16::saturating_mul
///
/// # Example
///
/// ```
/// # use soft_fix16::{Fix16, fix16};
/// let a = Fix16::from_int(5);
/// let b = fix16!(0.25);
/// assert_eq!(a * b, fix16!(1.25));
/// assert_eq!((a / Fix16::ZERO).is_overflow(), true);
/// assert_eq!(Fix16::MAX.saturating_mul(Fix16::TWO), Fix16::MAX);
/// ```
#[derive(Clone, Copy)]
#[derive(Eq, PartialEq, Ord, PartialOrd, Hash)]  // Same as for the raw i32
#[derive(Default)]
pub struct Fix16(i32);

/// Basics
mod basics;

/// Constants (zero, one, pi, max, overflow, etc)
mod consts;

/// Arithmetic operators: addition, subtraction, multiplication, division, and remainder.
mod ops;

/// Saturating versions of the arithmetic operations.
mod saturating;

/// Square root, exponential, and logarithms.
mod math;

/// Negation, absolute value.
mod unary;

/// Rounding to integer values (floor, ceil, round).
mod round_int;

/// Conversions to and from ints, floats, and strings.
pub(crate) mod convert;

/// Debug and Display.
mod fmt;

/// Rational numbers, used as the oracle in tests.
#[cfg(test)]
mod rational;
