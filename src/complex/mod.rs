//! Complex numbers over the crate's scalar domains.
//!
//! There is a single [`Complex`] type, parametrised over its component type. The component type
//! is one of a small, closed set of [scalars](Scalar), each standing for one numeric domain:
//!
//!   - [`Fixed`]: signed fixed-point, with computed widths. This is the domain of the hardware
//!     models, see [`ComplexFixed`].
//!   - `i64`: plain integers, see [`ComplexInt`].
//!   - `f64`: reals, see [`ComplexReal`]. Only this domain has a tolerance-based comparison.
//!
//! All of them share the same arithmetic, written once in terms of the scalar operations. For
//! [`Fixed`] components the scalar operations grow the width as needed, so the complex
//! operations inherit the overflow-free result widths:
//!
//!   - `a + b`, `a - b`: `(max(Ar, Br) + 1, max(Ai, Bi) + 1)`.
//!   - `a * b`: `(max(Ar + Br, Ai + Bi) + 1, max(Ar + Bi, Ai + Br) + 1)`.
//!   - `-a`, `a.conj()`: unchanged, saturating on the most negative value.
//!
//! The `i64` and `f64` domains have no width to grow, so their `+ - *` are the native operators:
//! [`ComplexInt`] arithmetic panics on overflow exactly where `i64` arithmetic does (in debug
//! builds). Negation and conjugation saturate in every domain.

use crate::Fixed;

/// A complex number with components of type `T`, which is one of the [`Scalar`] types.
///
/// Complex numbers are immutable values; all operations return a new one. The two components
/// may differ in width when `T` is [`Fixed`].
///
/// ```
/// # use hw_fixed::{ComplexFixed, multiply};
/// let a = ComplexFixed::from_ints(3, 4, 4, 4)?;
/// let b = ComplexFixed::from_ints(1, -2, 4, 4)?;
/// let c = multiply(a, b);
/// assert_eq!((c.re().value(), c.im().value()), (11, -2));
/// assert_eq!(c.widths(), (9, 9));
/// # Ok::<(), hw_fixed::Error>(())
/// ```
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq, Hash)]
pub struct Complex<T> {
  re: T,
  im: T,
}

/// Signed fixed-point complex numbers, as handled by the hardware models.
pub type ComplexFixed = Complex<Fixed>;

/// Integer complex numbers.
///
/// # Panics
///
/// `+`, `-` and `*` overflow like the `i64` operators they are made of. Negation and
/// [`conj`](Complex::conj) saturate instead.
pub type ComplexInt = Complex<i64>;

/// Real (floating point) complex numbers.
pub type ComplexReal = Complex<f64>;

/// The numeric domain of a [`Scalar`] type.
#[derive(Debug, Clone, Copy)]
#[derive(PartialEq, Eq, Hash)]
pub enum Domain {
  /// Signed fixed-point, [`Fixed`].
  Fixed,
  /// Integers, `i64`.
  Integer,
  /// Reals, `f64`.
  Real,
}

/// The component types a [`Complex`] can be built from.
mod scalar;
pub use scalar::Scalar;

/// Construction and accessors
mod basics;

/// Arithmetic operators
mod ops;

/// Division
mod div;

/// Debug and Display
mod fmt;

/// Multiply two fixed-point complex numbers, in the overflow-free result widths
/// `(max(Ar + Br, Ai + Bi) + 1, max(Ar + Bi, Ai + Br) + 1)`.
///
/// This is the reference model that the [pipelined multiplier](crate::ComplexMultiplier) is
/// checked against.
///
/// # Panics
///
/// If a result width would exceed [`Fixed::MAX_WIDTH`].
pub fn multiply(a: ComplexFixed, b: ComplexFixed) -> ComplexFixed {
  a * b
}
