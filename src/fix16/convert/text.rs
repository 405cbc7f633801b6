use super::*;

/// The error type returned when parsing a [`Fix16`] from a string fails.
///
/// ```
/// # use soft_fix16::{Fix16, ParseFix16Error};
/// assert_eq!("".parse::<Fix16>(), Err(ParseFix16Error::Empty));
/// assert_eq!("1.5x".parse::<Fix16>(), Err(ParseFix16Error::InvalidDigit));
/// assert_eq!("40000".parse::<Fix16>(), Err(ParseFix16Error::OutOfRange));
/// ```
#[derive(Debug, Clone, Copy)]
#[derive(PartialEq, Eq)]
pub enum ParseFix16Error {
  /// The string is empty, or contains only whitespace.
  Empty,
  /// The string contains something other than a decimal number (surrounded by whitespace).
  InvalidDigit,
  /// The number is outside of the representable range (its integer part is more than 32767 in
  /// absolute value).
  OutOfRange,
}

impl core::fmt::Display for ParseFix16Error {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_str(match self {
      Self::Empty => "cannot parse Fix16 from empty string",
      Self::InvalidDigit => "invalid digit found in string",
      Self::OutOfRange => "number out of range for Fix16",
    })
  }
}

impl core::error::Error for ParseFix16Error {}

/// Same set as C's `isspace`.
const fn is_space(byte: u8) -> bool {
  matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

const fn skip_space(bytes: &[u8], mut i: usize) -> usize {
  while i < bytes.len() && is_space(bytes[i]) {
    i += 1
  }
  i
}

/// Fraction digits past this many are ignored: they're below the precision of the format.
const MAX_FRAC_DIGITS: u32 = 5;

/// Parse a decimal number: optional whitespace, optional sign, integer digits, optionally a `.`
/// or `,` followed by fraction digits, optional whitespace. At least one digit must be present.
///
/// The fraction is rounded to nearest (ties away from zero).
///
/// This is a `const fn`, so that it can back [`Fix16::const_parse`] as well as [`FromStr`].
///
/// [`FromStr`]: core::str::FromStr
pub(crate) const fn parse(bytes: &[u8]) -> Result<Fix16, ParseFix16Error> {
  const MAX_INT: i64 = (i32::MAX >> Fix16::FRAC_BITS) as i64;
  let mut i = skip_space(bytes, 0);
  if i == bytes.len() {
    return Err(ParseFix16Error::Empty)
  }

  // Sign
  let negative = bytes[i] == b'-';
  if negative || bytes[i] == b'+' {
    i += 1;
  }

  // Integer part
  let mut digits = 0;
  let mut int: i64 = 0;
  while i < bytes.len() && bytes[i].is_ascii_digit() {
    int = int * 10 + (bytes[i] - b'0') as i64;
    if int > MAX_INT {
      return Err(ParseFix16Error::OutOfRange)
    }
    digits += 1;
    i += 1;
  }

  // Fractional part, as `frac / scale`
  let mut frac: i64 = 0;
  let mut scale: i64 = 1;
  if i < bytes.len() && (bytes[i] == b'.' || bytes[i] == b',') {
    i += 1;
    let mut frac_digits = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
      if frac_digits < MAX_FRAC_DIGITS {
        frac = frac * 10 + (bytes[i] - b'0') as i64;
        scale *= 10;
        frac_digits += 1;
      }
      digits += 1;
      i += 1;
    }
  }

  if digits == 0 || skip_space(bytes, i) != bytes.len() {
    return Err(ParseFix16Error::InvalidDigit)
  }

  // With at most 5 digits, the fraction rounds to at most 65535, so this can't overflow.
  let frac = (frac * Fix16::SCALE as i64 + scale / 2) / scale;
  let magnitude = (int << Fix16::FRAC_BITS) + frac;
  let raw = if negative { -magnitude } else { magnitude };
  Ok(Fix16::from_bits(raw as i32))
}

impl core::str::FromStr for Fix16 {
  type Err = ParseFix16Error;

  /// Parse a decimal number, like `"3.14159"`, `"-2"`, or `" 0,5 "`.
  ///
  /// Leading and trailing whitespace is ignored; anything else around the number is an error.
  /// Either `.` or `,` is accepted as the decimal separator. Fraction digits past the fifth are
  /// ignored. The number must be in the range `(-32768, 32768)`.
  ///
  /// # Example
  ///
  /// ```
  /// # use soft_fix16::Fix16;
  /// assert_eq!("  1.5 ".parse(), Ok(Fix16::ONE + Fix16::HALF));
  /// assert_eq!("-0,25".parse(), Ok(-Fix16::HALF / Fix16::TWO));
  /// assert!("123.5xyz".parse::<Fix16>().is_err());
  /// ```
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    parse(s.as_bytes())
  }
}

impl Fix16 {
  /// The length of the longest string produced by [`Fix16::to_str`]: a sign, 5 integer digits, a
  /// `.`, and 5 fraction digits.
  pub const STR_LEN: usize = 12;

  /// Maximum number of decimals printed by [`Fix16::to_str`].
  pub const MAX_DECIMALS: usize = MAX_FRAC_DIGITS as usize;

  /// Parse a decimal number like [`str::parse`] (see [`FromStr`]), but return
  /// [`Fix16::OVERFLOW`] on failure instead of an error.
  ///
  /// # Example
  ///
  /// ```
  /// # use soft_fix16::Fix16;
  /// assert_eq!(Fix16::from_str_or_overflow("2.5"), Fix16::from_bits(0x0002_8000));
  /// assert_eq!(Fix16::from_str_or_overflow("  123.5xyz"), Fix16::OVERFLOW);
  /// assert_eq!(Fix16::from_str_or_overflow("99999"), Fix16::OVERFLOW);
  /// ```
  ///
  /// [`FromStr`]: core::str::FromStr
  pub fn from_str_or_overflow(s: &str) -> Self {
    parse(s.as_bytes()).unwrap_or(Self::OVERFLOW)
  }

  /// Parse a decimal number at compile time; the [`fix16!`](crate::fix16) macro is a shorthand
  /// for this. Accepts the same syntax as [`FromStr`].
  ///
  /// # Panics
  ///
  /// If `s` is not a valid number. In a `const` context, this is a compile error.
  ///
  /// # Example
  ///
  /// ```
  /// # use soft_fix16::Fix16;
  /// const TAU: Fix16 = Fix16::const_parse("6.28319");
  /// assert_eq!(TAU, Fix16::from_bits(0x0006_487f));
  /// ```
  ///
  /// ```compile_fail
  /// # use soft_fix16::Fix16;
  /// const BIG: Fix16 = Fix16::const_parse("40000");
  /// assert!(BIG > Fix16::ZERO);
  /// ```
  ///
  /// [`FromStr`]: core::str::FromStr
  pub const fn const_parse(s: &str) -> Self {
    match parse(s.as_bytes()) {
      Ok(x) => x,
      Err(ParseFix16Error::Empty) => panic!("empty Fix16 literal"),
      Err(ParseFix16Error::InvalidDigit) => panic!("invalid digit in Fix16 literal"),
      Err(ParseFix16Error::OutOfRange) => panic!("Fix16 literal out of range"),
    }
  }

  /// Write `self` in decimal to `buf`, with `decimals` digits after the point (at most
  /// [`Fix16::MAX_DECIMALS`]; more are clamped), and return the written part as a `&str`.
  ///
  /// The value is rounded to the requested number of decimals (ties away from zero). Negative
  /// numbers get a `-` even if they round to zero. The sentinel is printed as the number its bit
  /// pattern would be, -32768.
  ///
  /// # Example
  ///
  /// ```
  /// # use soft_fix16::Fix16;
  /// let mut buf = [0; Fix16::STR_LEN];
  /// assert_eq!(Fix16::from_int(-2).to_str(&mut buf, 2), "-2.00");
  /// assert_eq!(Fix16::PI.to_str(&mut buf, 3), "3.142");
  /// assert_eq!(Fix16::MAX.to_str(&mut buf, 0), "32768");
  /// assert_eq!(Fix16::MIN.to_str(&mut buf, 9), "-32767.99998");
  /// ```
  pub fn to_str(self, buf: &mut [u8; Fix16::STR_LEN], decimals: usize) -> &str {
    const SCALES: [u32; Fix16::MAX_DECIMALS + 1] = [1, 10, 100, 1_000, 10_000, 100_000];
    let scale = SCALES[decimals.min(Self::MAX_DECIMALS)];

    let mut writer = Writer { buf, len: 0 };
    if self.0 < 0 {
      writer.push(b'-');
    }
    let magnitude = self.0.unsigned_abs();
    let mut int = magnitude >> Self::FRAC_BITS;
    let frac = (magnitude & (Self::SCALE as u32 - 1)) as u64;
    let mut frac = ((frac * scale as u64 + (1 << (Self::FRAC_BITS - 1))) >> Self::FRAC_BITS) as u32;
    if frac >= scale {
      int += 1;
      frac -= scale;
    }
    writer.push_digits(int, 10_000, true);
    if scale != 1 {
      writer.push(b'.');
      writer.push_digits(frac, scale / 10, false);
    }

    let len = writer.len;
    // SAFETY: only ASCII bytes were written
    unsafe { core::str::from_utf8_unchecked(&buf[.. len]) }
  }
}

/// Appends bytes to a fixed buffer.
struct Writer<'a> {
  buf: &'a mut [u8],
  len: usize,
}

impl Writer<'_> {
  fn push(&mut self, byte: u8) {
    self.buf[self.len] = byte;
    self.len += 1;
  }

  /// Push the decimal digits of `value`, from the one at `scale` down to the units. If `skip`,
  /// leading zeros are not printed (but a lone zero is).
  fn push_digits(&mut self, mut value: u32, mut scale: u32, mut skip: bool) {
    while scale != 0 {
      let digit = value / scale;
      if !skip || digit != 0 || scale == 1 {
        skip = false;
        self.push(b'0' + digit as u8);
        value %= scale;
      }
      scale /= 10;
    }
  }
}
