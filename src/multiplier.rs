//! A cycle-accurate model of the pipelined fixed-point complex multiplier.
//!
//! The hardware never multiplies and then adds or subtracts within one clock cycle. Instead the
//! product is spread over three register stages:
//!
//! ```text
//!          ┌─────────┐      ┌──────────────────┐      ┌──────────────────────────────┐
//!  a, b ──>│ A: a, b │ ───> │ B: a.re × b.re   │ ───> │ C: re = B.0 - a.im × b.im    │ ──> c
//!          │         │      │    a.re × b.im   │      │    im = B.1 + a.im × b.re    │
//!          └─────────┘      └──────────────────┘      └──────────────────────────────┘
//! ```
//!
//! Stage B forwards `a.im` and `b` alongside its two products, so that stage C can form the other
//! two and combine them. An operand pair presented at tick `t` is therefore retired at tick
//! `t + 3`, as exactly the value [`multiply`](crate::multiply) computes, in the same widths.

use crate::{ComplexFixed, Error, Fixed, Pipeline, Result};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// The elaboration-time parameters of a [`ComplexMultiplier`]: the width of both components of
/// the `a` operand, and of both components of the `b` operand.
///
/// ```
/// # use hw_fixed::MultiplierConfig;
/// let config: MultiplierConfig = serde_json::from_str(r#"{"a_width": 16, "b_width": 18}"#).unwrap();
/// assert_eq!(config.output_width(), 35);
/// ```
#[derive(Debug, Clone, Copy)]
#[derive(PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize)]
pub struct MultiplierConfig {
  pub a_width: u32,
  pub b_width: u32,
}

impl MultiplierConfig {
  pub const fn new(a_width: u32, b_width: u32) -> Self {
    Self { a_width, b_width }
  }

  /// The width of both components of the product, `a_width + b_width + 1`. Saturates at
  /// `u32::MAX`, which is never a valid width.
  #[inline]
  pub const fn output_width(&self) -> u32 {
    self.a_width.saturating_add(self.b_width).saturating_add(1)
  }

  /// Check that both operand widths, and the resulting output width, are valid widths.
  pub fn validate(&self) -> Result<()> {
    Fixed::check_width(self.a_width)?;
    Fixed::check_width(self.b_width)?;
    Fixed::check_width(self.output_width())
  }
}

/// Contents of the stage A registers.
#[derive(Debug, Clone, Copy)]
struct Operands {
  a: ComplexFixed,
  b: ComplexFixed,
}

/// Contents of the stage B registers.
#[derive(Debug, Clone, Copy)]
struct PartialProducts {
  are_bre: Fixed,
  are_bim: Fixed,
  a_im: Fixed,
  b_re: Fixed,
  b_im: Fixed,
}

/// The pipelined complex multiplier. See the [module documentation](self).
///
/// ```
/// # use hw_fixed::{ComplexFixed, ComplexMultiplier, MultiplierConfig};
/// let mut mul = ComplexMultiplier::new(MultiplierConfig::new(4, 4))?;
/// let a = ComplexFixed::from_ints(3, 4, 4, 4)?;
/// let b = ComplexFixed::from_ints(1, -2, 4, 4)?;
/// assert_eq!(mul.tick(Some((a, b)))?, None);
/// assert_eq!(mul.tick(None)?, None);
/// assert_eq!(mul.tick(None)?, None);
/// assert_eq!(mul.tick(None)?, Some(ComplexFixed::from_ints(11, -2, 9, 9)?));
/// # Ok::<(), hw_fixed::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ComplexMultiplier {
  config: MultiplierConfig,
  cycle: u64,
  stage_a: Pipeline<Operands>,
  stage_b: Pipeline<PartialProducts>,
  stage_c: Pipeline<ComplexFixed>,
}

impl ComplexMultiplier {
  /// The number of ticks from presenting an operand pair to its product being retired.
  pub const LATENCY: u32 = 3;

  /// Elaborate a multiplier, with all registers empty. Fails if the configuration is invalid.
  pub fn new(config: MultiplierConfig) -> Result<Self> {
    config.validate()?;
    debug!(
      a_width = config.a_width,
      b_width = config.b_width,
      output_width = config.output_width(),
      latency = Self::LATENCY,
      "elaborated complex multiplier",
    );
    Ok(Self {
      config,
      cycle: 0,
      stage_a: Pipeline::new(1),
      stage_b: Pipeline::new(1),
      stage_c: Pipeline::new(1),
    })
  }

  #[inline]
  pub fn config(&self) -> MultiplierConfig {
    self.config
  }

  /// See [`Self::LATENCY`].
  #[inline]
  pub fn latency(&self) -> u32 {
    Self::LATENCY
  }

  /// The number of ticks so far.
  #[inline]
  pub fn cycle(&self) -> u64 {
    self.cycle
  }

  /// Whether no product is in flight.
  pub fn is_idle(&self) -> bool {
    self.stage_a.is_idle() && self.stage_b.is_idle() && self.stage_c.is_idle()
  }

  /// Empty every register, discarding whatever is in flight. The cycle count is kept.
  pub fn reset(&mut self) {
    self.stage_a.reset();
    self.stage_b.reset();
    self.stage_c.reset();
  }

  /// Clock the multiplier once, presenting the operand pair `input` (or a bubble, if `None`),
  /// and return the product retiring on this tick, if any.
  ///
  /// Fails with [`Error::WidthMismatch`] if a component of `input` is not of the configured
  /// width; in that case the multiplier is not clocked.
  pub fn tick(&mut self, input: Option<(ComplexFixed, ComplexFixed)>) -> Result<Option<ComplexFixed>> {
    if let Some((a, b)) = input {
      check_operand(a, self.config.a_width)?;
      check_operand(b, self.config.b_width)?;
    }

    // Every register samples on the same edge, so each stage computes its next contents from the
    // contents the previous stage holds *before* this tick, which is what `advance` returns.
    let operands = self.stage_a.advance(input.map(|(a, b)| Operands { a, b }));
    let partial = self.stage_b.advance(operands.map(|Operands { a, b }| PartialProducts {
      are_bre: a.re() * b.re(),
      are_bim: a.re() * b.im(),
      a_im: a.im(),
      b_re: b.re(),
      b_im: b.im(),
    }));
    let product = self.stage_c.advance(partial.map(|p| ComplexFixed::new(
      p.are_bre - p.a_im * p.b_im,
      p.are_bim + p.a_im * p.b_re,
    )));

    trace!(cycle = self.cycle, issued = input.is_some(), retired = product.is_some(), "complex multiplier tick");
    self.cycle += 1;
    Ok(product)
  }
}

fn check_operand(x: ComplexFixed, width: u32) -> Result<()> {
  for actual in [x.re().width(), x.im().width()] {
    if actual != width {
      return Err(Error::WidthMismatch { expected: width, actual })
    }
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::multiply;
  use proptest::prelude::*;

  #[test]
  fn retires_after_three_ticks() {
    let mut mul = ComplexMultiplier::new(MultiplierConfig::new(4, 4)).unwrap();
    let a = ComplexFixed::from_ints(3, 4, 4, 4).unwrap();
    let b = ComplexFixed::from_ints(1, -2, 4, 4).unwrap();

    // Inputs held for every tick.
    let outputs: Vec<_> = (0 .. 5).map(|_| mul.tick(Some((a, b))).unwrap()).collect();
    let expected = ComplexFixed::from_ints(11, -2, 9, 9).unwrap();
    assert_eq!(outputs, [None, None, None, Some(expected), Some(expected)]);
    assert_eq!(mul.cycle(), 5);
    assert_eq!(mul.latency(), 3);
  }

  #[test]
  fn bubbles() {
    let mut mul = ComplexMultiplier::new(MultiplierConfig::new(3, 5)).unwrap();
    let a = ComplexFixed::from_ints(-4, 3, 3, 3).unwrap();
    let b = ComplexFixed::from_ints(-16, 15, 5, 5).unwrap();
    let inputs = [Some((a, b)), None, None, Some((a.conj(), b)), None, None, None];
    let outputs: Vec<_> = inputs.iter().map(|&x| mul.tick(x).unwrap()).collect();
    assert_eq!(outputs[3], Some(multiply(a, b)));
    assert_eq!(outputs[6], Some(multiply(a.conj(), b)));
    assert_eq!(outputs.iter().filter(|x| x.is_some()).count(), 2);
    assert!(mul.is_idle());
  }

  #[test]
  fn reset() {
    let mut mul = ComplexMultiplier::new(MultiplierConfig::new(2, 2)).unwrap();
    let a = ComplexFixed::from_ints(1, -1, 2, 2).unwrap();
    mul.tick(Some((a, a))).unwrap();
    mul.tick(Some((a, a))).unwrap();
    assert!(!mul.is_idle());
    mul.reset();
    assert!(mul.is_idle());
    for _ in 0 .. 4 {
      assert_eq!(mul.tick(None), Ok(None));
    }
  }

  #[test]
  fn width_mismatch() {
    let mut mul = ComplexMultiplier::new(MultiplierConfig::new(4, 6)).unwrap();
    let a = ComplexFixed::from_ints(1, 1, 4, 4).unwrap();
    let b = ComplexFixed::from_ints(1, 1, 6, 5).unwrap();
    assert_eq!(mul.tick(Some((a, b))), Err(Error::WidthMismatch { expected: 6, actual: 5 }));
    assert_eq!(mul.tick(Some((b, a))), Err(Error::WidthMismatch { expected: 4, actual: 6 }));
    // Rejected inputs don't clock the pipeline.
    assert_eq!(mul.cycle(), 0);
  }

  #[test]
  fn config() {
    assert_eq!(MultiplierConfig::new(16, 16).output_width(), 33);
    assert_eq!(MultiplierConfig::new(16, 16).validate(), Ok(()));
    assert_eq!(MultiplierConfig::new(0, 16).validate(), Err(Error::InvalidWidth { width: 0 }));
    assert_eq!(MultiplierConfig::new(64, 64).validate(), Err(Error::InvalidWidth { width: 129 }));
    assert!(ComplexMultiplier::new(MultiplierConfig::new(64, 64)).is_err());
    assert_eq!(MultiplierConfig::new(u32::MAX, u32::MAX).output_width(), u32::MAX);
    assert_eq!(MultiplierConfig::new(u32::MAX, 1).validate(), Err(Error::InvalidWidth { width: u32::MAX }));

    let config = MultiplierConfig::new(12, 7);
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(json, r#"{"a_width":12,"b_width":7}"#);
    assert_eq!(serde_json::from_str::<MultiplierConfig>(&json).unwrap(), config);
  }

  /// Aux function: a random stream of operand pairs (with bubbles) for a given configuration.
  fn stream(a_width: u32, b_width: u32) -> impl Strategy<Value = Vec<Option<(ComplexFixed, ComplexFixed)>>> {
    let complex = |w| (Fixed::cases_proptest(w), Fixed::cases_proptest(w))
      .prop_map(|(re, im)| ComplexFixed::new(re, im));
    prop::collection::vec(prop::option::of((complex(a_width), complex(b_width))), 0 .. 32)
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES / 4))]
    /// The product of every pair presented at tick `t` retires at tick `t + 3`, bit for bit.
    #[test]
    fn matches_model(
      (a_width, b_width, inputs) in (1u32 ..= 40, 1u32 ..= 40)
        .prop_flat_map(|(a, b)| (Just(a), Just(b), stream(a, b))),
    ) {
      let mut mul = ComplexMultiplier::new(MultiplierConfig::new(a_width, b_width)).unwrap();
      let latency = ComplexMultiplier::LATENCY as usize;
      let outputs: Vec<_> = inputs.iter().copied()
        .chain(core::iter::repeat(None).take(latency))
        .map(|x| mul.tick(x).unwrap())
        .collect();
      for t in 0 .. latency.min(outputs.len()) {
        prop_assert_eq!(outputs[t], None);
      }
      for (t, x) in inputs.iter().enumerate() {
        let expected = x.map(|(a, b)| multiply(a, b));
        prop_assert_eq!(outputs[t + latency], expected);
        if let Some(c) = outputs[t + latency] {
          let w = MultiplierConfig::new(a_width, b_width).output_width();
          prop_assert_eq!(c.widths(), (w, w));
        }
      }
    }
  }
}
