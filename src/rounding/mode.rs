use super::*;
use crate::{Error, Fixed, Result};

use core::fmt::Display;
use core::str::FromStr;

impl RoundingMode {
  /// All eight modes.
  pub const ALL: [Self; 8] = [
    Self::Floor,
    Self::Ceil,
    Self::HalfUpNonSym,
    Self::HalfDownNonSym,
    Self::HalfUpSym,
    Self::HalfDownSym,
    Self::HalfEven,
    Self::HalfOdd,
  ];

  /// The number of clock ticks between presenting a value to a rounder in this mode and the
  /// rounded value becoming valid: 0 for [`Floor`](Self::Floor), 2 for all others.
  ///
  /// Note that rounding by 0 fractional bits is a no-op of latency 0 regardless of the mode; see
  /// [`RounderConfig::latency`](crate::RounderConfig::latency).
  #[inline]
  pub const fn latency(self) -> u32 {
    match self {
      Self::Floor => 0,
      _ => 2,
    }
  }

  /// Whether this mode treats positive and negative values symmetrically, i.e. whether
  /// rounding `-x` gives minus the rounding of `x`.
  #[inline]
  pub const fn is_symmetric(self) -> bool {
    matches!(self, Self::HalfUpSym | Self::HalfDownSym | Self::HalfEven | Self::HalfOdd)
  }

  /// The width of the result of rounding a `width`-bit value by `frac_width` bits in this mode.
  ///
  ///   - `frac_width == 0`: `width` (rounding is a no-op).
  ///   - [`Floor`](Self::Floor): `width - frac_width`.
  ///   - Otherwise: `width - frac_width + 1`, the extra bit being the carry of the correction.
  ///
  /// Fails with [`Error::IllFormedRounding`] if `frac_width >= width`, and
  /// [`Error::InvalidWidth`] if `width` is not a valid width.
  pub fn result_width(self, width: u32, frac_width: u32) -> Result<u32> {
    Self::check(width, frac_width)?;
    Ok(match (frac_width, self) {
      (0, _) => width,
      (_, Self::Floor) => width - frac_width,
      _ => width - frac_width + 1,
    })
  }

  /// Check that a `width`-bit value can be rounded by `frac_width` bits.
  pub(crate) fn check(width: u32, frac_width: u32) -> Result<()> {
    Fixed::check_width(width)?;
    if frac_width >= width {
      return Err(Error::IllFormedRounding { width, frac_width })
    }
    Ok(())
  }

  /// The name of the mode, as used when (de)serialising.
  pub const fn name(self) -> &'static str {
    match self {
      Self::Floor => "floor",
      Self::Ceil => "ceil",
      Self::HalfUpNonSym => "half_up_non_sym",
      Self::HalfDownNonSym => "half_down_non_sym",
      Self::HalfUpSym => "half_up_sym",
      Self::HalfDownSym => "half_down_sym",
      Self::HalfEven => "half_even",
      Self::HalfOdd => "half_odd",
    }
  }
}

impl Display for RoundingMode {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for RoundingMode {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    Self::ALL.into_iter()
      .find(|mode| mode.name() == s)
      .ok_or_else(|| Error::UnknownRoundingMode(s.to_owned()))
  }
}
