use super::*;

impl Fix16 {
  /// Zero (`0`), the additive identity element.
  pub const ZERO: Self = Self(0);

  /// One half (`0.5`).
  pub const HALF: Self = Self(Self::SCALE >> 1);

  /// One (`1`), the multiplicative identity element.
  pub const ONE: Self = Self(Self::SCALE);

  /// Two (`2`).
  pub const TWO: Self = Self(Self::SCALE << 1);

  /// Negative one (`-1`).
  pub const MINUS_ONE: Self = Self(-Self::SCALE);

  /// π, rounded to nearest (`3.14159`).
  pub const PI: Self = Self(0x0003_243f);

  /// Euler's number e, rounded to nearest (`2.71828`).
  pub const E: Self = Self(0x0002_b7e1);

  /// ln 2, rounded to nearest (`0.69315`).
  pub const LN_2: Self = Self(0x0000_b172);

  /// Largest representable value, `32767.99998`.
  //
  // Represented by the bit pattern `0x7fff_ffff`.
  pub const MAX: Self = Self(i32::MAX);

  /// Smallest representable value, `-32767.99998`, equal to `-MAX`.
  ///
  /// Note that this is *not* the smallest raw value: that one is reserved for [`Self::OVERFLOW`].
  //
  // Represented by the bit pattern `0x8000_0001`.
  pub const MIN: Self = Self(-i32::MAX);

  /// Smallest *positive* value, 2^-16 (`0.0000153`).
  //
  // Represented by the bit pattern `0x0000_0001`.
  pub const MIN_POSITIVE: Self = Self(1);

  /// The sentinel signalling that a trapping operation overflowed, or was called outside its
  /// domain.
  //
  // Represented by the bit pattern `0x8000_0000`.
  pub const OVERFLOW: Self = Self(i32::MIN);
}
