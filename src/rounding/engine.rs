use super::*;
use crate::{Fixed, Result};

impl RoundingMode {
  /// Round `x`, whose lowest `frac_width` bits are fractional, to an integer in this mode.
  ///
  /// This is the arithmetic model: split `x` into an integral part `int = floor(x / 2^f)` and a
  /// fractional remainder, then decide from the remainder (and, on a tie, from the sign or the
  /// parity of `int`) whether to round up to `int + 1`.
  ///
  /// The result has [`Self::result_width`] bits. Rounding by `frac_width == 0` returns `x`
  /// unchanged. Fails with [`Error::IllFormedRounding`](crate::Error::IllFormedRounding) if
  /// `frac_width >= x.width()`.
  ///
  /// ```
  /// # use hw_fixed::{Fixed, RoundingMode};
  /// let x = Fixed::new(-9, 5)?;  // -4.5, with 1 fractional bit
  /// assert_eq!(RoundingMode::HalfUpSym.round(x, 1)?.value(), -5);
  /// assert_eq!(RoundingMode::HalfDownSym.round(x, 1)?.value(), -4);
  /// assert_eq!(RoundingMode::HalfEven.round(x, 1)?.value(), -4);
  /// assert_eq!(RoundingMode::HalfOdd.round(x, 1)?.value(), -5);
  /// # Ok::<(), hw_fixed::Error>(())
  /// ```
  pub fn round(self, x: Fixed, frac_width: u32) -> Result<Fixed> {
    let width = self.result_width(x.width(), frac_width)?;
    if frac_width == 0 { return Ok(x) }

    // `frac` is the fractional part scaled up by 2^frac_width, so a tie is `frac == half`. An
    // arithmetic shift is a floor division, so `frac` is never negative.
    let int = x.value() >> frac_width;
    let frac = x.value() & ((1 << frac_width) - 1);
    let half = 1 << (frac_width - 1);
    let odd = int & 1 == 1;

    let tie = frac == half;
    let round_up = match self {
      Self::Floor => false,
      Self::Ceil => frac != 0,
      Self::HalfUpNonSym => frac >= half,
      Self::HalfDownNonSym => frac > half,
      // On a tie, `int` is the lower neighbour: away from zero is up only for positive values.
      Self::HalfUpSym => frac > half || (tie && !x.is_negative()),
      Self::HalfDownSym => frac > half || (tie && x.is_negative()),
      Self::HalfEven => frac > half || (tie && odd),
      Self::HalfOdd => frac > half || (tie && !odd),
    };

    Ok(Fixed::from_parts(int + i128::from(round_up), width))
  }

  /// The correction vector the hardware adds to `x` before dropping its lowest `frac_width`
  /// bits, so that plain truncation of the sum gives the rounded result.
  ///
  /// It only depends on the mode, the sign bit of `x`, and `x`'s least significant integer bit
  /// (bit `frac_width`). With `half = 2^(frac_width-1)`:
  ///
  /// | Mode             | Correction                                 |
  /// |------------------|--------------------------------------------|
  /// | `Floor`          | `0`                                        |
  /// | `Ceil`           | `2^frac_width - 1`                         |
  /// | `HalfUpNonSym`   | `half`                                     |
  /// | `HalfDownNonSym` | `half - 1`                                 |
  /// | `HalfUpSym`      | `half - sign`                              |
  /// | `HalfDownSym`    | `half - 1 + sign`                          |
  /// | `HalfEven`       | `half - 1 + int_lsb`                       |
  /// | `HalfOdd`        | `half - int_lsb`                           |
  ///
  /// Adding `half` sends a tie up, adding `half - 1` leaves it down, and no other remainder is
  /// affected by the difference.
  pub fn correction(self, x: Fixed, frac_width: u32) -> Result<i128> {
    Self::check(x.width(), frac_width)?;
    if frac_width == 0 { return Ok(0) }
    Ok(self.correction_of(x.is_negative(), x.bit(frac_width), frac_width))
  }

  /// The correction for a value with the given sign bit and lowest integer bit. `frac_width`
  /// must be at least 1.
  pub(crate) fn correction_of(self, sign: bool, int_lsb: bool, frac_width: u32) -> i128 {
    debug_assert!(frac_width >= 1);
    let half: i128 = 1 << (frac_width - 1);
    let sign = i128::from(sign);
    let int_lsb = i128::from(int_lsb);
    match self {
      Self::Floor => 0,
      Self::Ceil => (1 << frac_width) - 1,
      Self::HalfUpNonSym => half,
      Self::HalfDownNonSym => half - 1,
      Self::HalfUpSym => half - sign,
      Self::HalfDownSym => half - 1 + sign,
      Self::HalfEven => half - 1 + int_lsb,
      Self::HalfOdd => half - int_lsb,
    }
  }

  /// Round `x` as the hardware does: add the [correction](Self::correction) and drop the lowest
  /// `frac_width` bits of the sum. Always agrees with [`Self::round`].
  pub fn round_hw(self, x: Fixed, frac_width: u32) -> Result<Fixed> {
    let width = self.result_width(x.width(), frac_width)?;
    if frac_width == 0 { return Ok(x) }
    let sum = x.value() + self.correction_of(x.is_negative(), x.bit(frac_width), frac_width);
    Ok(Fixed::from_parts(sum >> frac_width, width))
  }
}

/// The reference model query: round `value`, whose lowest `frac_width` bits are fractional, in
/// `mode`, and report the latency after which a rounder in that configuration produces it.
///
/// Rounding by 0 bits is a no-op, returning `value` with latency 0 for any mode.
///
/// ```
/// # use hw_fixed::{round, Fixed, RoundingMode};
/// let x = Fixed::new(3, 4)?;  // 1.5, with 1 fractional bit
/// assert_eq!(round(x, 1, RoundingMode::HalfEven)?, (Fixed::new(2, 4)?, 2));
/// assert_eq!(round(x, 1, RoundingMode::Floor)?, (Fixed::new(1, 3)?, 0));
/// assert_eq!(round(x, 0, RoundingMode::HalfOdd)?, (x, 0));
/// # Ok::<(), hw_fixed::Error>(())
/// ```
pub fn round(value: Fixed, frac_width: u32, mode: RoundingMode) -> Result<(Fixed, u32)> {
  let rounded = mode.round(value, frac_width)?;
  let latency = if frac_width == 0 { 0 } else { mode.latency() };
  Ok((rounded, latency))
}
