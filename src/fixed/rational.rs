use super::*;

use malachite::rational::Rational;
use malachite::base::num::arithmetic::traits::PowerOf2;

impl Fixed {
  /// The exact real number this value stands for if its lowest `frac_width` bits are
  /// fractional, i.e. `value / 2^frac_width`.
  ///
  /// This is the **super-explicit** rendition of the fixed-point convention that the rounding
  /// engine is checked against.
  pub(crate) fn to_rational(self, frac_width: u32) -> Rational {
    Rational::from(self.value) / Rational::power_of_2(frac_width as i64)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn to_rational() {
    assert_eq!(Fixed::new(3, 4).unwrap().to_rational(1), Rational::from_signeds(3, 2));
    assert_eq!(Fixed::new(-9, 5).unwrap().to_rational(1), Rational::from_signeds(-9, 2));
    assert_eq!(Fixed::new(-9, 5).unwrap().to_rational(0), Rational::from(-9));
    assert_eq!(Fixed::new(100, 8).unwrap().to_rational(4), Rational::from_signeds(25, 4));
  }
}
