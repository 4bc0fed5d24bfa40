use super::*;

use core::ops::{Add, Sub, Mul, Neg};

impl<T: Scalar> Complex<T> {
  pub(crate) fn add(self, other: Self) -> Self {
    Self::new(self.re + other.re, self.im + other.im)
  }

  pub(crate) fn sub(self, other: Self) -> Self {
    Self::new(self.re - other.re, self.im - other.im)
  }

  pub(crate) fn mul(self, other: Self) -> Self {
    // The textbook identity (a + bi)(c + di) = (ac - bd) + (ad + bc)i. With `Fixed` components,
    // each product is exact in Ar+Br bits, and the final addition/subtraction adds the guard bit.
    let re = self.re * other.re - self.im * other.im;
    let im = self.re * other.im + self.im * other.re;
    Self::new(re, im)
  }

  /// Negate both components, saturating like [`Complex::conj`]: a component holding the most
  /// negative value of a bounded type becomes the most positive one.
  pub(crate) fn neg(self) -> Self {
    Self::new(self.re.saturating_neg(), self.im.saturating_neg())
  }
}

/// Helper macro for implementing operators for all combinations of value and reference
macro_rules! mk_ops {
  ($trait:ident, $name:ident) => {
    impl<T: Scalar> $trait<Complex<T>> for Complex<T> {
      type Output = Complex<T>;

      #[inline]
      fn $name(self, rhs: Self) -> Self::Output { Complex::$name(self, rhs) }
    }

    impl<T: Scalar> $trait<&Complex<T>> for Complex<T> {
      type Output = Complex<T>;

      #[inline]
      fn $name(self, rhs: &Self) -> Self::Output { Complex::$name(self, *rhs) }
    }

    impl<T: Scalar> $trait<Complex<T>> for &Complex<T> {
      type Output = Complex<T>;

      #[inline]
      fn $name(self, rhs: Complex<T>) -> Self::Output { Complex::$name(*self, rhs) }
    }

    impl<T: Scalar> $trait<&Complex<T>> for &Complex<T> {
      type Output = Complex<T>;

      #[inline]
      fn $name(self, rhs: &Complex<T>) -> Self::Output { Complex::$name(*self, *rhs) }
    }
  }
}

mk_ops!{Add, add}
mk_ops!{Sub, sub}
mk_ops!{Mul, mul}

impl<T: Scalar> Neg for Complex<T> {
  type Output = Complex<T>;

  #[inline]
  fn neg(self) -> Self::Output { Complex::neg(self) }
}

impl<T: Scalar> Neg for &Complex<T> {
  type Output = Complex<T>;

  #[inline]
  fn neg(self) -> Self::Output { Complex::neg(*self) }
}
