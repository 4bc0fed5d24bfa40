use super::*;
use crate::{Error, Result};

impl<T: Scalar> Complex<T> {
  /// Divide `self` by `other`, as reals.
  ///
  /// The quotient of two fixed-point or integer numbers isn't in general representable in their
  /// domain, so the result is always a [`ComplexReal`]. It is computed with the conjugate
  /// identity `a / b = a·conj(b) / (b.re² + b.im²)`.
  ///
  /// Fails with [`Error::DivisionByZero`] if the denominator `b.re² + b.im²` is zero.
  ///
  /// ```
  /// # use hw_fixed::{ComplexInt, ComplexReal, Error};
  /// let q = ComplexInt::new(11, -2).try_div(ComplexInt::new(1, -2))?;
  /// assert!(q.approx_eq(&ComplexReal::new(3.0, 4.0), 1e-12));
  /// assert_eq!(ComplexInt::new(1, 1).try_div(ComplexInt::new(0, 0)), Err(Error::DivisionByZero));
  /// # Ok::<(), hw_fixed::Error>(())
  /// ```
  pub fn try_div(self, other: Self) -> Result<Complex<f64>> {
    let a = self.to_real();
    let b = other.to_real();
    let denominator = b.re * b.re + b.im * b.im;
    if denominator == 0. {
      return Err(Error::DivisionByZero)
    }
    let numerator = a * b.conj();
    Ok(Complex::new(numerator.re / denominator, numerator.im / denominator))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use proptest::prelude::*;

  #[test]
  fn by_zero() {
    let zero = ComplexFixed::from_ints(0, 0, 4, 4).unwrap();
    let one = ComplexFixed::from_ints(1, 0, 4, 4).unwrap();
    assert_eq!(one.try_div(zero), Err(Error::DivisionByZero));
    assert_eq!(zero.try_div(zero), Err(Error::DivisionByZero));
    assert_eq!(ComplexReal::new(1., 2.).try_div(ComplexReal::new(0., -0.)), Err(Error::DivisionByZero));
    assert_eq!(zero.try_div(one), Ok(ComplexReal::new(0., 0.)));
  }

  #[test]
  fn examples() {
    let a = ComplexFixed::from_ints(11, -2, 9, 9).unwrap();
    let b = ComplexFixed::from_ints(1, -2, 4, 4).unwrap();
    assert!(a.try_div(b).unwrap().approx_eq(&ComplexReal::new(3., 4.), 1e-12));

    // i / i = 1, 1 / i = -i
    let i = ComplexInt::new(0, 1);
    let one = ComplexInt::new(1, 0);
    assert!(i.try_div(i).unwrap().approx_eq(&ComplexReal::new(1., 0.), 1e-12));
    assert!(one.try_div(i).unwrap().approx_eq(&ComplexReal::new(0., -1.), 1e-12));
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]
    /// Dividing a product by one of its factors gives back the other factor.
    #[test]
    fn inverts_multiply(
      ar in -1000_i64 ..= 1000, ai in -1000_i64 ..= 1000,
      br in -1000_i64 ..= 1000, bi in -1000_i64 ..= 1000,
    ) {
      prop_assume!(br != 0 || bi != 0);
      let a = ComplexInt::new(ar, ai);
      let b = ComplexInt::new(br, bi);
      let q = (a * b).try_div(b).unwrap();
      prop_assert!(q.approx_eq(&a.to_real(), 1e-9), "{:?} {:?} {:?}", a, b, q);
    }
  }
}
