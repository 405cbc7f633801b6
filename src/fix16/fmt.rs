use super::*;
use crate::underlying::Word;

use core::fmt::{self, Binary, Debug, Display, LowerHex, UpperHex, Write};

impl Debug for Fix16 {
  /// Prints the raw bits, with the integer and fraction halves separated by `_`.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let int = self.0.lshr(Self::FRAC_BITS);
    let frac = self.0.mask_lsb(Self::FRAC_BITS);
    f.debug_tuple("Fix16")
      .field(&format_args!("0x{int:04x}_{frac:04x}"))
      .finish()
  }
}

impl Display for Fix16 {
  /// Prints the value in decimal. With a precision (as in `{:.2}`), prints exactly that many
  /// decimals (up to [`Fix16::MAX_DECIMALS`]); otherwise prints up to 5 decimals, without
  /// trailing zeros. The sentinel prints as `overflow`.
  ///
  /// ```
  /// # use soft_fix16::Fix16;
  /// assert_eq!(format!("{}", Fix16::ONE + Fix16::HALF), "1.5");
  /// assert_eq!(format!("{:.3}", Fix16::PI), "3.142");
  /// assert_eq!(format!("{:>6}", Fix16::TWO), "     2");
  /// assert_eq!(format!("{}", Fix16::OVERFLOW), "overflow");
  /// ```
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.is_overflow() {
      return pad(f, "overflow", false)
    }
    let mut buf = [0; Fix16::STR_LEN];
    let text = match f.precision() {
      Some(decimals) => self.to_str(&mut buf, decimals),
      None => {
        let text = self.to_str(&mut buf, Self::MAX_DECIMALS);
        text.trim_end_matches('0').trim_end_matches('.')
      },
    };
    pad(f, text, true)
  }
}

/// Like [`fmt::Formatter::pad_integral`], but for text that is already formatted, and without
/// truncating to the precision (which for us is the number of decimals, not a maximum width).
/// Numbers align right by default. The `+` and `0` flags only apply to numbers, not to
/// `overflow`.
fn pad(f: &mut fmt::Formatter<'_>, text: &str, numeric: bool) -> fmt::Result {
  let (sign, digits) = match text.strip_prefix('-') {
    Some(digits) => ("-", digits),
    None if numeric && f.sign_plus() => ("+", text),
    None => ("", text),
  };
  let len = sign.len() + digits.chars().count();
  let padding = f.width().map_or(0, |width| width.saturating_sub(len));

  // Zeros go between the sign and the digits, regardless of alignment
  if numeric && f.sign_aware_zero_pad() {
    f.write_str(sign)?;
    for _ in 0 .. padding { f.write_char('0')? }
    return f.write_str(digits)
  }

  let (before, after) = match f.align() {
    Some(fmt::Alignment::Left) => (0, padding),
    Some(fmt::Alignment::Center) => (padding / 2, padding - padding / 2),
    Some(fmt::Alignment::Right) | None => (padding, 0),
  };
  let fill = f.fill();
  for _ in 0 .. before { f.write_char(fill)? }
  f.write_str(sign)?;
  f.write_str(digits)?;
  for _ in 0 .. after { f.write_char(fill)? }
  Ok(())
}

impl Binary for Fix16 {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    Binary::fmt(&self.0, f)
  }
}

impl LowerHex for Fix16 {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    LowerHex::fmt(&self.0, f)
  }
}

impl UpperHex for Fix16 {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    UpperHex::fmt(&self.0, f)
  }
}
