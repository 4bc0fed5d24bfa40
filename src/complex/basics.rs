use super::*;
use crate::Result;

impl<T: Scalar> Complex<T> {
  /// Construct from the real and imaginary components.
  #[inline]
  pub const fn new(re: T, im: T) -> Self {
    Self { re, im }
  }

  /// The real component.
  #[inline]
  pub fn re(&self) -> T {
    self.re
  }

  /// The imaginary component.
  #[inline]
  pub fn im(&self) -> T {
    self.im
  }

  /// The numeric domain of the components.
  #[inline]
  pub fn domain(&self) -> Domain {
    T::DOMAIN
  }

  /// The complex conjugate, `re - im·i`.
  ///
  /// For bounded component types the negation cannot grow the representation, so an imaginary
  /// component holding the most negative value saturates to the most positive one. This is the
  /// only place where complex arithmetic does not round-trip: `x.conj().conj() != x` exactly
  /// when `x.im()` is the most negative value.
  ///
  /// ```
  /// # use hw_fixed::ComplexFixed;
  /// let x = ComplexFixed::from_ints(1, -8, 4, 4)?;
  /// assert_eq!(x.conj(), ComplexFixed::from_ints(1, 7, 4, 4)?);
  /// # Ok::<(), hw_fixed::Error>(())
  /// ```
  #[inline]
  pub fn conj(self) -> Self {
    Self::new(self.re, self.im.saturating_neg())
  }

  /// Convert both components into reals.
  #[inline]
  pub fn to_real(self) -> Complex<f64> {
    Complex::new(self.re.to_f64(), self.im.to_f64())
  }
}

impl Complex<Fixed> {
  /// Construct from raw integer components and their widths. Fails if a width is invalid or a
  /// value does not fit its width.
  pub fn from_ints(re: i128, im: i128, re_width: u32, im_width: u32) -> Result<Self> {
    Ok(Self::new(Fixed::new(re, re_width)?, Fixed::new(im, im_width)?))
  }

  /// The widths of the real and imaginary components, respectively.
  #[inline]
  pub fn widths(&self) -> (u32, u32) {
    (self.re.width(), self.im.width())
  }
}

impl Complex<f64> {
  /// Whether both components are within `tolerance` of `other`'s.
  ///
  /// Exact comparison is `==`; this is the explicit alternative for reals only.
  pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
    (self.re - other.re).abs() <= tolerance && (self.im - other.im).abs() <= tolerance
  }
}
