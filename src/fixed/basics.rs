use super::*;
use crate::{Error, Result};

impl Fixed {
  /// The widest value this crate models.
  ///
  /// Values are stored in an `i128`; capping the width one bit short of that leaves room for the
  /// carry of the rounder's correction sum.
  pub const MAX_WIDTH: u32 = 127;

  /// Check that `width` is in `1 ..= MAX_WIDTH`.
  pub(crate) fn check_width(width: u32) -> Result<()> {
    if width == 0 || width > Self::MAX_WIDTH {
      Err(Error::InvalidWidth { width })
    } else {
      Ok(())
    }
  }

  /// The most negative value representable in `width` signed bits, `-2^(width-1)`.
  ///
  /// `width` must be in `1 ..= MAX_WIDTH`.
  #[inline]
  pub const fn min_value(width: u32) -> i128 {
    -(1 << (width - 1))
  }

  /// The most positive value representable in `width` signed bits, `2^(width-1) - 1`.
  ///
  /// `width` must be in `1 ..= MAX_WIDTH`.
  #[inline]
  pub const fn max_value(width: u32) -> i128 {
    (1 << (width - 1)) - 1
  }

  /// Construct a `width`-bit fixed-point value. Fails if `width` is not in `1 ..= MAX_WIDTH`,
  /// or if `value` does not fit in `width` signed bits.
  pub fn new(value: i128, width: u32) -> Result<Self> {
    Self::check_width(width)?;
    if value < Self::min_value(width) || value > Self::max_value(width) {
      return Err(Error::OutOfRange { value, width })
    }
    Ok(Self { value, width })
  }

  /// Construct a `width`-bit fixed-point value from its raw two's complement bits. Bits higher
  /// (more significant) than the lowest `width` bits, if any, are ignored, and bit `width-1` is
  /// taken as the sign.
  ///
  /// ```
  /// # use hw_fixed::Fixed;
  /// assert_eq!(Fixed::from_bits(0b1011, 4)?.value(), -5);
  /// assert_eq!(Fixed::from_bits(0b1_0011, 4)?.value(), 3);
  /// # Ok::<(), hw_fixed::Error>(())
  /// ```
  pub fn from_bits(bits: i128, width: u32) -> Result<Self> {
    Self::check_width(width)?;
    let junk = i128::BITS - width;
    Ok(Self { value: (bits << junk) >> junk, width })
  }

  /// Construct a value whose range has already been established by the caller (e.g. because it
  /// is the result of an operation whose width was computed to fit it).
  ///
  /// # Panics
  ///
  /// If `width` is larger than [`Self::MAX_WIDTH`]; this only happens if an operation is asked
  /// to grow a value past the widest representable one.
  #[inline]
  pub(crate) fn from_parts(value: i128, width: u32) -> Self {
    assert!(
      width <= Self::MAX_WIDTH,
      "Result width {width} exceeds the maximum of {} bits",
      Self::MAX_WIDTH,
    );
    debug_assert!(width >= 1);
    debug_assert!(Self::min_value(width) <= value && value <= Self::max_value(width));
    Self { value, width }
  }

  /// The integer value.
  #[inline]
  pub const fn value(self) -> i128 {
    self.value
  }

  /// The width in bits.
  #[inline]
  pub const fn width(self) -> u32 {
    self.width
  }

  /// The raw bit representation: the lowest `width` bits of the two's complement value, all
  /// higher bits 0.
  #[inline]
  pub const fn to_bits(self) -> u128 {
    let mask = (1u128 << self.width) - 1;
    self.value as u128 & mask
  }

  /// Bit `n` of the two's complement representation. For `n >= width` this is the sign bit, as
  /// if the value were sign-extended.
  #[inline]
  pub const fn bit(self, n: u32) -> bool {
    let n = if n < i128::BITS { n } else { i128::BITS - 1 };
    (self.value >> n) & 1 == 1
  }

  /// Whether the sign bit is set.
  #[inline]
  pub const fn is_negative(self) -> bool {
    self.value < 0
  }

  /// Whether this is the most negative value of its width, the one value whose negation does
  /// not fit.
  #[inline]
  pub const fn is_min(self) -> bool {
    self.value == Self::min_value(self.width)
  }

  /// Negate, keeping the width. The most negative value has no positive counterpart in the same
  /// width, so it saturates to the most positive value instead of wrapping around to itself.
  ///
  /// ```
  /// # use hw_fixed::Fixed;
  /// assert_eq!(Fixed::new(-8, 4)?.saturating_neg(), Fixed::new(7, 4)?);
  /// assert_eq!(Fixed::new(-7, 4)?.saturating_neg(), Fixed::new(7, 4)?);
  /// # Ok::<(), hw_fixed::Error>(())
  /// ```
  #[inline]
  pub const fn saturating_neg(self) -> Self {
    let value = if self.is_min() { Self::max_value(self.width) } else { -self.value };
    Self { value, width: self.width }
  }

  /// Re-interpret as `width` bits wide, sign-extending. Fails if `width` is too narrow to hold
  /// the value.
  pub fn resize(self, width: u32) -> Result<Self> {
    Self::new(self.value, width)
  }

  /// The integer value as an `f64` (may be inexact above 2^53).
  #[inline]
  pub fn to_f64(self) -> f64 {
    self.value as f64
  }

  /// The real number this value stands for if its lowest `frac_width` bits are fractional, i.e.
  /// `value / 2^frac_width`.
  #[inline]
  pub fn scaled(self, frac_width: u32) -> f64 {
    self.value as f64 / 2f64.powi(frac_width as i32)
  }
}
