//! This module contains the signed fixed-point scalar, [`Fixed`], the leaf type of the whole
//! crate.
//!
//! A `Fixed` is nothing more than a two's complement integer together with the number of bits
//! it occupies on a wire. The position of the binary point is *not* part of the type: as in the
//! hardware it models, the binary point is a convention between producer and consumer, and only
//! becomes relevant when [rounding](crate::RoundingMode) drops some fractional bits.
//!
//! The important property is that arithmetic never loses information. Every operation computes
//! its result width from its operand widths, such that no representable operands can produce a
//! result that doesn't fit:
//!
//!   - `a + b`, `a - b`: `max(A, B) + 1` bits.
//!   - `a * b`: `A + B` bits. The one combination that needs all of them is `MIN × MIN`, e.g.
//!     for 4 bits `-8 × -8 = +64`, which needs 8 bits.
//!   - `-a`: `A` bits. Negation cannot grow the width, so `-MIN` saturates to `MAX`.
//!
//! Some notation used in the comments:
//!
//!   - **Bit 0, bit 1, .. bit W-1**: numbered least significant to most significant.
//!   - **Sign bit**: bit W-1.

/// A signed fixed-point value: a two's complement integer `value` that is `width` bits wide.
///
/// Invariant: `-2^(width-1) <= value <= 2^(width-1) - 1`, and `1 <= width <= MAX_WIDTH`.
///
/// Equality is exact and includes the width: `Fixed(3, 4 bits) != Fixed(3, 5 bits)`.
///
/// ```
/// # use hw_fixed::Fixed;
/// let a = Fixed::new(-8, 4)?;
/// let b = Fixed::new(7, 4)?;
/// assert_eq!(a * a, Fixed::new(64, 8)?);
/// assert_eq!(a + b, Fixed::new(-1, 5)?);
/// # Ok::<(), hw_fixed::Error>(())
/// ```
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq, Hash)]
pub struct Fixed {
  value: i128,
  width: u32,
}

/// Constructors, accessors, bit-level queries
mod basics;

/// Width-growing arithmetic operators
mod ops;

/// Debug and Display
mod fmt;


/// Conversion into an exact rational, for use as a test oracle
#[cfg(test)]
pub(crate) mod rational;
