//! Serialisation of complex fixed-point values into flat bit vectors, as they cross a wire.
//!
//! A [`ComplexFixed`] with component widths `(R, I)` is packed into `R + I` bits: the two's
//! complement bits of each component, concatenated in the order given by the [`PackingMethod`].
//!
//! ```text
//!   ReToHigh:  [ re(R-1) .. re(0) | im(I-1) .. im(0) ]
//!   ReToLow:   [ im(I-1) .. im(0) | re(R-1) .. re(0) ]
//!                ^ most significant                ^ least significant
//! ```

use crate::{ComplexFixed, Error, Fixed, Result};

use core::fmt::{Debug, Display};
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// Which component occupies the most significant bits of a packed [`ComplexFixed`].
#[derive(Debug, Clone, Copy)]
#[derive(PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackingMethod {
  /// The real component in the high bits, the imaginary component in the low bits.
  ReToHigh,
  /// The real component in the low bits, the imaginary component in the high bits.
  ReToLow,
}

/// A flat vector of bits, most significant first.
///
/// Parses from, and prints as, a string of `0`s and `1`s.
///
/// ```
/// # use hw_fixed::BitVector;
/// let bits: BitVector = "10110".parse()?;
/// assert_eq!(bits.len(), 5);
/// assert_eq!(bits.get(0), Some(true));
/// assert_eq!(bits.to_string(), "10110");
/// # Ok::<(), hw_fixed::Error>(())
/// ```
#[derive(Clone, Default)]
#[derive(PartialEq, Eq, Hash)]
pub struct BitVector {
  bits: Vec<bool>,
}

impl BitVector {
  /// An empty vector.
  pub const fn new() -> Self {
    Self { bits: Vec::new() }
  }

  /// The number of bits.
  #[inline]
  pub fn len(&self) -> usize {
    self.bits.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.bits.is_empty()
  }

  /// The `i`th bit, counting from the most significant one, or `None` if out of bounds.
  #[inline]
  pub fn get(&self, i: usize) -> Option<bool> {
    self.bits.get(i).copied()
  }

  /// Iterate through the bits, most significant first.
  pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
    self.bits.iter().copied()
  }

  /// Append the `width` bits of `x`, most significant first.
  fn push_field(&mut self, x: Fixed) {
    self.bits.extend((0 .. x.width()).rev().map(|n| x.bit(n)));
  }
}

/// Read `bits` (most significant first) as a `bits.len()`-bit two's complement value.
fn read_field(bits: &[bool]) -> Result<Fixed> {
  let width = u32::try_from(bits.len()).unwrap_or(u32::MAX);
  let raw = bits.iter().fold(0i128, |acc, &bit| acc << 1 | i128::from(bit));
  Fixed::from_bits(raw, width)
}

impl From<Vec<bool>> for BitVector {
  fn from(bits: Vec<bool>) -> Self {
    Self { bits }
  }
}

impl From<BitVector> for Vec<bool> {
  fn from(bits: BitVector) -> Self {
    bits.bits
  }
}

impl FromIterator<bool> for BitVector {
  fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
    Self { bits: iter.into_iter().collect() }
  }
}

impl Display for BitVector {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let s: String = self.iter().map(|bit| if bit {'1'} else {'0'}).collect();
    f.pad(&s)
  }
}

impl Debug for BitVector {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_tuple("BitVector")
      .field(&format_args!("0b{self}"))
      .finish()
  }
}

impl FromStr for BitVector {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    s.chars()
      .map(|c| match c {
        '0' => Ok(false),
        '1' => Ok(true),
        c => Err(Error::InvalidBit(c)),
      })
      .collect()
  }
}

/// Pack `c` into `re_width + im_width` bits, ordered according to `method`.
///
/// ```
/// # use hw_fixed::{pack, ComplexFixed, PackingMethod};
/// let c = ComplexFixed::from_ints(-2, 5, 3, 4)?;
/// assert_eq!(pack(c, PackingMethod::ReToHigh).to_string(), "1100101");
/// assert_eq!(pack(c, PackingMethod::ReToLow).to_string(), "0101110");
/// # Ok::<(), hw_fixed::Error>(())
/// ```
pub fn pack(c: ComplexFixed, method: PackingMethod) -> BitVector {
  let (high, low) = match method {
    PackingMethod::ReToHigh => (c.re(), c.im()),
    PackingMethod::ReToLow => (c.im(), c.re()),
  };
  let mut bits = BitVector { bits: Vec::with_capacity((high.width() + low.width()) as usize) };
  bits.push_field(high);
  bits.push_field(low);
  bits
}

/// Unpack `bits` into a [`ComplexFixed`] with the given component widths; the inverse of
/// [`pack`].
///
/// Fails with [`Error::LengthMismatch`] if `bits` is not exactly `re_width + im_width` long, and
/// with [`Error::InvalidWidth`] if either width is invalid.
pub fn unpack(bits: &BitVector, re_width: u32, im_width: u32, method: PackingMethod) -> Result<ComplexFixed> {
  Fixed::check_width(re_width)?;
  Fixed::check_width(im_width)?;
  if bits.len() != (re_width + im_width) as usize {
    return Err(Error::LengthMismatch { actual: bits.len(), re_width, im_width })
  }

  let high_width = match method {
    PackingMethod::ReToHigh => re_width,
    PackingMethod::ReToLow => im_width,
  };
  let (high, low) = bits.bits.split_at(high_width as usize);
  let (high, low) = (read_field(high)?, read_field(low)?);
  Ok(match method {
    PackingMethod::ReToHigh => ComplexFixed::new(high, low),
    PackingMethod::ReToLow => ComplexFixed::new(low, high),
  })
}

impl ComplexFixed {
  /// See [`pack`].
  #[inline]
  pub fn pack(self, method: PackingMethod) -> BitVector {
    pack(self, method)
  }
}
