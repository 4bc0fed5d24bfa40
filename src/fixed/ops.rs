use super::*;

use core::ops::{Add, Sub, Mul, Neg};

impl Fixed {
  /// `self + other`, in `max(A, B) + 1` bits.
  ///
  /// # Panics
  ///
  /// If the result width would exceed [`Fixed::MAX_WIDTH`].
  pub(crate) fn add(self, other: Self) -> Self {
    // Both operands sign-extend to the wider width; the sum of two W-bit numbers lies in
    // [-2^W, 2^W - 2], which fits in W+1 bits.
    let width = self.width.max(other.width) + 1;
    Self::from_parts(self.value + other.value, width)
  }

  /// `self - other`, in `max(A, B) + 1` bits.
  ///
  /// # Panics
  ///
  /// If the result width would exceed [`Fixed::MAX_WIDTH`].
  pub(crate) fn sub(self, other: Self) -> Self {
    // The extremes are MIN - MAX = -2^W + 1 and MAX - MIN = 2^W - 1, which fit in W+1 bits.
    let width = self.width.max(other.width) + 1;
    Self::from_parts(self.value - other.value, width)
  }

  /// `self * other`, in `A + B` bits.
  ///
  /// # Panics
  ///
  /// If the result width would exceed [`Fixed::MAX_WIDTH`].
  pub(crate) fn mul(self, other: Self) -> Self {
    // The largest magnitude is MIN × MIN = 2^(A-1) × 2^(B-1) = 2^(A+B-2), which is positive and
    // fits in A+B bits (but not in A+B-1). Every other product is smaller in magnitude.
    let width = self.width + other.width;
    assert!(
      width <= Self::MAX_WIDTH,
      "Product width {width} exceeds the maximum of {} bits",
      Self::MAX_WIDTH,
    );
    Self::from_parts(self.value * other.value, width)
  }

  /// `-self`, in `A` bits (saturating, see [`Fixed::saturating_neg`]).
  pub(crate) fn neg(self) -> Self {
    self.saturating_neg()
  }
}

/// Helper macro for implementing operators for all combinations of value and reference
macro_rules! mk_ops {
  ($trait:ident, $name:ident) => {
    impl $trait<Fixed> for Fixed {
      type Output = Fixed;

      #[inline]
      fn $name(self, rhs: Fixed) -> Self::Output { Fixed::$name(self, rhs) }
    }

    impl $trait<&Fixed> for Fixed {
      type Output = Fixed;

      #[inline]
      fn $name(self, rhs: &Fixed) -> Self::Output { Fixed::$name(self, *rhs) }
    }

    impl $trait<Fixed> for &Fixed {
      type Output = Fixed;

      #[inline]
      fn $name(self, rhs: Fixed) -> Self::Output { Fixed::$name(*self, rhs) }
    }

    impl $trait<&Fixed> for &Fixed {
      type Output = Fixed;

      #[inline]
      fn $name(self, rhs: &Fixed) -> Self::Output { Fixed::$name(*self, *rhs) }
    }
  }
}

mk_ops!{Add, add}
mk_ops!{Sub, sub}
mk_ops!{Mul, mul}

impl Neg for Fixed {
  type Output = Fixed;

  #[inline]
  fn neg(self) -> Self::Output { Fixed::neg(self) }
}

impl Neg for &Fixed {
  type Output = Fixed;

  #[inline]
  fn neg(self) -> Self::Output { Fixed::neg(*self) }
}
