//! The crate-wide error type.

/// Everything that can go wrong when building or driving the models in this crate.
///
/// Arithmetic on [`Fixed`](crate::Fixed) and [`Complex`](crate::Complex) values never returns
/// an error: result widths are computed so that no representable inputs can overflow them.
#[derive(Debug, Clone)]
#[derive(PartialEq, Eq)]
#[derive(thiserror::Error)]
pub enum Error {
  /// Removing `frac_width` bits from a `width`-bit value would leave no integer bits.
  #[error("ill-formed rounding: cannot drop {frac_width} fractional bits from a {width}-bit value")]
  IllFormedRounding { width: u32, frac_width: u32 },

  /// Complex division where the denominator `re² + im²` is zero.
  #[error("complex division by zero")]
  DivisionByZero,

  /// A bit-vector is not exactly as long as the two component widths it should hold.
  #[error("bit-vector has {actual} bits, expected {re_width} + {im_width}")]
  LengthMismatch { actual: usize, re_width: u32, im_width: u32 },

  /// A width of 0 or above [`Fixed::MAX_WIDTH`](crate::Fixed::MAX_WIDTH).
  #[error("width {width} is not in 1..={max}", max = crate::Fixed::MAX_WIDTH)]
  InvalidWidth { width: u32 },

  /// A raw integer does not fit in `width` signed bits.
  #[error("value {value} does not fit in {width} signed bits")]
  OutOfRange { value: i128, width: u32 },

  /// An operand presented to a configured pipeline has the wrong width.
  #[error("operand is {actual} bits wide, but the component is configured for {expected}")]
  WidthMismatch { expected: u32, actual: u32 },

  /// A bit-vector string contains something other than `0` and `1`.
  #[error("invalid bit {0:?}, expected '0' or '1'")]
  InvalidBit(char),

  /// A rounding mode name that isn't one of the eight known ones.
  #[error("unknown rounding mode {0:?}")]
  UnknownRoundingMode(String),
}

/// Shorthand for results carrying an [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
