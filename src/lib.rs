//! This crate provides bit-exact, cycle-accurate software models of two fixed-point hardware
//! blocks: a pipelined complex multiplier and a signed rounder supporting eight rounding modes.
//!
//! # Introduction
//!
//! When a block of digital logic is verified in simulation, its outputs are compared against a
//! *golden reference*: a model that computes exactly the same bits, and knows exactly when they
//! become valid. This crate is such a reference, for:
//!
//!   - Signed [fixed-point](Fixed) scalars and [complex numbers](Complex) over them, whose
//!     arithmetic derives result widths that can never overflow, rather than truncating.
//!   - Explicit [rounding](RoundingMode) of fixed-point values in eight modes (floor, ceiling, and
//!     six flavours of round-to-nearest differing in how they break ties), both as an arithmetic
//!     model and as the correction-and-truncate scheme the hardware uses.
//!   - The [pipelines](Pipeline) that implement them: a [complex multiplier](ComplexMultiplier) of
//!     latency 3, and a [rounder](SignedRounder) of latency 0 or 2 depending on the mode.
//!   - [Packing](pack) complex values into flat bit vectors, and a [`Checker`] for comparing a
//!     device's delayed outputs against the model.
//!
//! # Usage
//!
//! ```
//! use hw_fixed::{round, ComplexFixed, Fixed, RoundingMode};
//!
//! // Arithmetic grows the width as needed.
//! let a = ComplexFixed::from_ints(3, 4, 4, 4)?;
//! let b = ComplexFixed::from_ints(1, -2, 4, 4)?;
//! let c = a * b;
//! assert_eq!((c.re().value(), c.im().value()), (11, -2));
//! assert_eq!(c.widths(), (9, 9));
//!
//! // Round 0b1_0111 = -4.5 (1 fractional bit), ties to even.
//! let x = Fixed::new(-9, 5)?;
//! let (y, latency) = round(x, 1, RoundingMode::HalfEven)?;
//! assert_eq!(y.value(), -4);
//! assert_eq!(latency, 2);
//! # Ok::<(), hw_fixed::Error>(())
//! ```
//!
//! Cycle-accurate models of the pipelines are clocked explicitly, one tick at a time:
//!
//! ```
//! # use hw_fixed::{multiply, ComplexFixed, ComplexMultiplier, MultiplierConfig};
//! let mut mul = ComplexMultiplier::new(MultiplierConfig::new(4, 4))?;
//! let a = ComplexFixed::from_ints(-8, 7, 4, 4)?;
//! let b = ComplexFixed::from_ints(-8, -8, 4, 4)?;
//! let outputs: Vec<_> = [Some((a, b)), None, None, None]
//!   .into_iter()
//!   .map(|x| mul.tick(x))
//!   .collect::<Result<_, _>>()?;
//! assert_eq!(outputs, [None, None, None, Some(multiply(a, b))]);
//! # Ok::<(), hw_fixed::Error>(())
//! ```
//!
//! # Logging
//!
//! Pipeline components log through [`tracing`](https://docs.rs/tracing): elaboration at `DEBUG`,
//! every tick at `TRACE`, and [`Checker`] mismatches at `WARN`. No subscriber is installed by
//! this crate.

mod error;
mod fixed;
mod complex;
mod rounding;
mod pipeline;
mod multiplier;
mod rounder;
mod packing;
mod checker;

pub use error::{Error, Result};
pub use fixed::Fixed;
pub use complex::{Complex, ComplexFixed, ComplexInt, ComplexReal, Domain, Scalar, multiply};
pub use rounding::{RoundingMode, round};
pub use pipeline::Pipeline;
pub use multiplier::{ComplexMultiplier, MultiplierConfig};
pub use rounder::{RounderConfig, SignedRounder};
pub use packing::{BitVector, PackingMethod, pack, unpack};
pub use checker::{Checker, Mismatch};

#[cfg(test)]
const PROPTEST_CASES: u32 = if cfg!(debug_assertions) {0x400} else {0x1_0000};
