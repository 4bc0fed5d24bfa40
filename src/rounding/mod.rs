//! Explicit rounding of fixed-point values: dropping the lowest `frac_width` bits of a value and
//! correcting the truncated result according to one of eight [rounding modes](RoundingMode).
//!
//! Consider a value `x` whose lowest `frac_width` bits are fractional, i.e. standing for the real
//! number `s = x / 2^frac_width`. Let `int = floor(s)` and `frac = s - int`, so that
//! `0 <= frac < 1`. A *tie* is the case `frac = 1/2`, where `s` lies exactly halfway between two
//! integers. The modes are:
//!
//! | Mode             | Result                                               | Ties go to    |
//! |------------------|------------------------------------------------------|---------------|
//! | `Floor`          | `floor(s)`                                           | n/a           |
//! | `Ceil`           | `ceil(s)`                                            | n/a           |
//! | `HalfUpNonSym`   | `floor(s + 1/2)`                                     | +∞            |
//! | `HalfDownNonSym` | `ceil(s - 1/2)`                                      | -∞            |
//! | `HalfUpSym`      | nearest                                              | away from 0   |
//! | `HalfDownSym`    | nearest                                              | towards 0     |
//! | `HalfEven`       | nearest                                              | even integer  |
//! | `HalfOdd`        | nearest                                              | odd integer   |
//!
//! There are two ways to compute each of these, and this module provides both:
//!
//!   - [`RoundingMode::round`]: the arithmetic model, working from `int` and `frac` as above.
//!   - [`RoundingMode::round_hw`]: the way the hardware does it. A *correction* (see
//!     [`RoundingMode::correction`]), which depends only on the mode, the sign bit, and the
//!     lowest integer bit, is added to `x`, and then the fractional bits are simply dropped
//!     (i.e. `floor`).
//!
//! The two must agree bit for bit on every input, and the tests check exactly that, as well as
//! checking both against an exact rational oracle.
//!
//! # Widths
//!
//! Rounding a `W`-bit value leaves `W - frac_width` integer bits, but rounding up the largest
//! values needs one more: e.g. for 4 bits and 1 fractional bit, `0b0111` = 3.5 rounds up to 4,
//! which doesn't fit in 3 bits. The hardware keeps the carry out of the correction sum, so the
//! result has `W - frac_width + 1` bits, except for `Floor`, which never rounds up and has no
//! correction sum. See [`RoundingMode::result_width`].
//!
//! # Latency
//!
//! `Floor` is a pure bit-slice, with no registers: latency 0. Every other mode registers the
//! input and the correction, then registers the sum: latency 2. Callers building delayed
//! comparisons must query [`RoundingMode::latency`] rather than assume a constant depth.

use serde::{Deserialize, Serialize};

/// One of the eight explicit rounding modes. See the [module documentation](self) for the
/// definition of each.
#[derive(Debug, Clone, Copy)]
#[derive(PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
  /// Towards -∞ (plain truncation of the fractional bits).
  Floor,
  /// Towards +∞.
  Ceil,
  /// To nearest, ties towards +∞.
  HalfUpNonSym,
  /// To nearest, ties towards -∞.
  HalfDownNonSym,
  /// To nearest, ties away from zero.
  HalfUpSym,
  /// To nearest, ties towards zero.
  HalfDownSym,
  /// To nearest, ties to the even integer (convergent rounding).
  HalfEven,
  /// To nearest, ties to the odd integer.
  HalfOdd,
}

/// Mode metadata: names, latency, widths
mod mode;

/// The rounding algorithms
mod engine;
pub use engine::round;
