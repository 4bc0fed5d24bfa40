//! Delayed comparison of a pipelined device against its reference model.
//!
//! A self-checking testbench presents the same stimulus to a device and to the device's
//! reference model on every tick. The model answers immediately, but the device only retires the
//! corresponding output `latency` ticks later. A [`Checker`] holds the model's expected values in
//! a [`Pipeline`] of the same depth, so that on every tick the value leaving it lines up with the
//! value leaving the device.
//!
//! ```
//! # use hw_fixed::{round, Checker, Fixed, RounderConfig, RoundingMode, SignedRounder};
//! let config = RounderConfig::new(4, 3, RoundingMode::HalfOdd);
//! let mut rounder = SignedRounder::new(config)?;
//! let mut checker = Checker::new(rounder.latency());
//!
//! for x in [-64, -13, 0, 12, 63] {
//!   let x = Fixed::new(x, config.width())?;
//!   let expected = round(x, config.frac_width, config.mode)?.0;
//!   checker.tick(Some(expected), rounder.tick(Some(x))?);
//! }
//! for _ in 0 .. rounder.latency() {
//!   checker.tick(None, rounder.tick(None)?);
//! }
//! assert!(checker.is_clean());
//! assert_eq!(checker.matches(), 5);
//! # Ok::<(), hw_fixed::Error>(())
//! ```

use crate::Pipeline;

use core::fmt::Debug;
use tracing::warn;

/// A disagreement between the device and the model on some tick. `None` stands for "no output".
#[derive(Debug, Clone)]
#[derive(PartialEq, Eq)]
pub struct Mismatch<T> {
  pub tick: u64,
  pub expected: Option<T>,
  pub actual: Option<T>,
}

/// Compares a device's outputs against expected values issued `latency` ticks earlier. See the
/// [module documentation](self).
#[derive(Debug, Clone)]
pub struct Checker<T> {
  expected: Pipeline<T>,
  tick: u64,
  matches: u64,
  mismatches: Vec<Mismatch<T>>,
}

impl<T: Debug + Clone + PartialEq> Checker<T> {
  /// A checker for a device of the given latency, with nothing expected yet.
  pub fn new(latency: u32) -> Self {
    Self {
      expected: Pipeline::new(latency as usize),
      tick: 0,
      matches: 0,
      mismatches: Vec::new(),
    }
  }

  /// Advance one tick: issue `expected`, the model's answer for this tick's stimulus, and compare
  /// `actual`, the device's output on this tick, against the answer issued `latency` ticks ago.
  ///
  /// Returns whether they agree. An output where none was expected (e.g. before the device has
  /// filled) is a mismatch, as is a missing output.
  pub fn tick(&mut self, expected: Option<T>, actual: Option<T>) -> bool {
    let due = self.expected.advance(expected);
    let ok = due == actual;
    if ok {
      if due.is_some() { self.matches += 1 }
    } else {
      warn!(tick = self.tick, ?due, ?actual, "output mismatch");
      self.mismatches.push(Mismatch { tick: self.tick, expected: due, actual });
    }
    self.tick += 1;
    ok
  }

  /// The number of ticks so far.
  #[inline]
  pub fn ticks(&self) -> u64 {
    self.tick
  }

  /// The number of outputs that matched their expected value.
  #[inline]
  pub fn matches(&self) -> u64 {
    self.matches
  }

  /// All mismatches so far, oldest first.
  #[inline]
  pub fn mismatches(&self) -> &[Mismatch<T>] {
    &self.mismatches
  }

  /// Whether there have been no mismatches.
  #[inline]
  pub fn is_clean(&self) -> bool {
    self.mismatches.is_empty()
  }

  /// Whether every expected value issued so far has been compared.
  pub fn is_drained(&self) -> bool {
    self.expected.is_idle()
  }
}
