//! This module contains the underlying integer operations needed for the software implementation
//! of fixed point arithmetic. They are hidden from the end-user, who only ever sees [`Fix16`]
//! values.
//!
//! Every operation on a Q16.16 number boils down to a handful of primitive operations on its
//! 32-bit storage word, most of which have to be carried out in a type that is *twice as wide*
//! in order not to lose bits. These are modelled by three traits:
//!
//!   - [`Word`]: the 32-bit signed storage word (`i32`).
//!   - [`Double`]: the type with twice the precision of a [`Word`] (`i64`).
//!   - [`Unsigned`]: the unsigned counterpart of a [`Double`] (`u64`), used where the sign is
//!     known in advance (square roots, logarithms).
//!
//! [`Fix16`]: crate::Fix16

/// The storage word of a fixed point number.
pub trait Word:
  Copy + Clone +
  Eq + Ord +
  core::fmt::Debug
{
  type Double: Double<Single = Self>;

  /// The maximum magnitude of a *valid* value, i.e. `Self::MAX`. Note that `Self::MIN` is not
  /// the negation of this; it is reserved.
  const MAX_MAGNITUDE: Self;

  /// Widen to a [`Double`] without loss.
  fn widen(self) -> Self::Double;

  /// Logical shift right (rather than arithmetic shift). Short for `(self as uX >> n) as iX`.
  fn lshr(self, n: u32) -> Self;

  /// Set all bits more significant than `n` to 0.
  ///
  /// ```ignore
  /// assert_eq!(0x1234_abcd_i32.mask_lsb(16), 0x0000_abcd_i32)
  /// ```
  fn mask_lsb(self, n: u32) -> Self;

  /// Multiply without overflow or loss of precision, by returning a type that's twice as wide as
  /// `Self`.
  fn doubling_mul(self, other: Self) -> Self::Double;

  /// Compute the result of `(self << precision) / other` and `(self << precision) % other`
  /// *without* overflow or loss of precision, by using a type that's twice as wide as `Self` for
  /// the intermediate computation. Division rounds towards zero, so the remainder has the sign of
  /// `self`.
  ///
  /// Returns a tuple (`quotient`, `remainder`), both still in the wide type, since the quotient
  /// may not fit a `Self`.
  ///
  /// `other` must not be zero; this is only checked in debug builds.
  fn shift_div_rem(self, other: Self, precision: u32) -> (Self::Double, Self::Double);
}

/// This trait models the type that is a [`Word`] with twice the precision (i.e. `i32::Double` =
/// `i64`).
pub trait Double:
  Copy + Clone +
  Eq + Ord +
  core::fmt::Debug +
  core::ops::Shl<u32, Output=Self> +
  core::ops::Shr<u32, Output=Self>
{
  type Single: Word<Double = Self>;

  /// Shift right by `n` places, rounding to nearest, with ties rounded *away from zero*.
  ///
  /// ```ignore
  /// assert_eq!(( 3_i64).round_shr(1),  2);  //  1.5 →  2
  /// assert_eq!((-3_i64).round_shr(1), -2);  // -1.5 → -2
  /// assert_eq!((-5_i64).round_shr(2), -1);  // -1.25 → -1
  /// ```
  fn round_shr(self, n: u32) -> Self;

  /// Narrow back to a [`Word`], if `self` lies within `-MAX_MAGNITUDE ..= MAX_MAGNITUDE`.
  fn narrow(self) -> Option<Self::Single>;

  /// Narrow back to a [`Word`], clamping to `-MAX_MAGNITUDE ..= MAX_MAGNITUDE`.
  fn narrow_saturating(self) -> Self::Single;
}

/// The unsigned wide type used by the square root and logarithm kernels.
pub trait Unsigned:
  Copy + Clone +
  Eq + Ord +
  core::fmt::Debug
{
  /// Digit-by-digit square root of `self`, which must occupy at most `width` bits (`width` must
  /// be even). Returns `(root, round_up)`, where `root` is `⌊√self⌋` and `round_up` is whether
  /// the exact root is closer to `root + 1` than to `root`.
  ///
  /// Takes exactly `width / 2` iterations regardless of the value of `self`.
  fn digit_sqrt(self, width: u32) -> (Self, bool);

  /// Square a number with `point` fractional bits, whose value lies in `[1, 2)`, and truncate the
  /// result back to `point` fractional bits. The result lies in `[1, 4)`.
  fn square_fixed(self, point: u32) -> Self;
}

mod int;
mod double;
mod unsigned;
