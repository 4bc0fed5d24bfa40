//! The scalar types that can be the components of a [`Complex`](super::Complex): only
//! [`Fixed`], `i64` and `f64`. The user only sees the sealed [`Scalar`] trait.

use super::Domain;
use crate::Fixed;

/// The trait for component types of a [`Complex`](super::Complex) (only satisfied by
/// [`Fixed`], `i64`, and `f64`).
///
/// This is a *sealed* type.
pub trait Scalar: Sealed {}

/// Actual operations implemented here.
pub trait Sealed:
  core::fmt::Debug +
  Copy + Clone +
  PartialEq +
  core::ops::Add<Self, Output=Self> +
  core::ops::Sub<Self, Output=Self> +
  core::ops::Mul<Self, Output=Self> +
  core::ops::Neg<Output=Self>
{
  /// Which numeric domain this type stands for.
  const DOMAIN: Domain;

  /// Negate without changing the representation's range; the most negative value of a
  /// bounded type saturates to the most positive one.
  fn saturating_neg(self) -> Self;

  /// Convert to a real, for operations that leave the domain (such as division).
  fn to_f64(self) -> f64;
}

impl Scalar for Fixed {}
impl Sealed for Fixed {
  const DOMAIN: Domain = Domain::Fixed;

  #[inline]
  fn saturating_neg(self) -> Self { Fixed::saturating_neg(self) }

  #[inline]
  fn to_f64(self) -> f64 { Fixed::to_f64(self) }
}

impl Scalar for i64 {}
impl Sealed for i64 {
  const DOMAIN: Domain = Domain::Integer;

  #[inline]
  fn saturating_neg(self) -> Self { i64::saturating_neg(self) }

  #[inline]
  fn to_f64(self) -> f64 { self as f64 }
}

impl Scalar for f64 {}
impl Sealed for f64 {
  const DOMAIN: Domain = Domain::Real;

  #[inline]
  fn saturating_neg(self) -> Self { -self }

  #[inline]
  fn to_f64(self) -> f64 { self }
}
