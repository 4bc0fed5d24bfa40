//! A cycle-accurate model of the signed fixed-point rounder.
//!
//! The rounder takes a `int_width + frac_width`-bit value, whose lowest `frac_width` bits are
//! fractional, and drops the fractional bits according to a [`RoundingMode`]. It does so the way
//! [`RoundingMode::round_hw`] describes:
//!
//!   - Stage 1: register the input together with its correction vector. The correction is
//!     computed combinationally from the *unregistered* input (its sign bit and lowest integer
//!     bit), so that the value and its correction always travel together.
//!   - Stage 2: register the sum of the two, dropping the `frac_width` low bits.
//!
//! [`RoundingMode::Floor`] needs no correction, so it is a plain bit-slice with no registers at
//! all. Hence the latency depends on the mode: 0 for `Floor`, 2 for everything else. Rounding by
//! 0 bits is also a plain wire, of latency 0.

use crate::{Error, Fixed, Pipeline, Result, RoundingMode};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// The elaboration-time parameters of a [`SignedRounder`].
///
/// ```
/// # use hw_fixed::{RounderConfig, RoundingMode};
/// let config: RounderConfig = serde_json::from_str(r#"
///   {"int_width": 6, "frac_width": 10, "mode": "half_even"}
/// "#).unwrap();
/// assert_eq!(config.mode, RoundingMode::HalfEven);
/// assert_eq!(config.width(), 16);
/// assert_eq!(config.output_width(), Ok(7));
/// assert_eq!(config.latency(), 2);
/// ```
#[derive(Debug, Clone, Copy)]
#[derive(PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize)]
pub struct RounderConfig {
  /// Number of integer bits of the input, including the sign bit.
  pub int_width: u32,
  /// Number of fractional bits of the input, which are dropped.
  pub frac_width: u32,
  pub mode: RoundingMode,
}

impl RounderConfig {
  pub const fn new(int_width: u32, frac_width: u32, mode: RoundingMode) -> Self {
    Self { int_width, frac_width, mode }
  }

  /// The width of the input, `int_width + frac_width`. Saturates at `u32::MAX`, which is never
  /// a valid width.
  #[inline]
  pub const fn width(&self) -> u32 {
    self.int_width.saturating_add(self.frac_width)
  }

  /// The width of the output. See [`RoundingMode::result_width`].
  pub fn output_width(&self) -> Result<u32> {
    self.mode.result_width(self.width(), self.frac_width)
  }

  /// The number of ticks from presenting a value to its rounding being retired.
  #[inline]
  pub const fn latency(&self) -> u32 {
    if self.frac_width == 0 { 0 } else { self.mode.latency() }
  }

  /// Check that the configuration describes a rounder that can be built: there must be at least
  /// one integer bit left after dropping the fractional ones (otherwise
  /// [`Error::IllFormedRounding`]), and the widths must be valid.
  pub fn validate(&self) -> Result<()> {
    if self.int_width == 0 {
      return Err(Error::IllFormedRounding { width: self.frac_width, frac_width: self.frac_width })
    }
    self.output_width().map(|_| ())
  }
}

/// The pipelined rounder. See the [module documentation](self).
///
/// ```
/// # use hw_fixed::{Fixed, RounderConfig, RoundingMode, SignedRounder};
/// let x = Fixed::new(-9, 5)?;  // -4.5
///
/// let mut floor = SignedRounder::new(RounderConfig::new(4, 1, RoundingMode::Floor))?;
/// assert_eq!(floor.tick(Some(x))?, Some(Fixed::new(-5, 4)?));
///
/// let mut even = SignedRounder::new(RounderConfig::new(4, 1, RoundingMode::HalfEven))?;
/// assert_eq!(even.tick(Some(x))?, None);
/// assert_eq!(even.tick(None)?, None);
/// assert_eq!(even.tick(None)?, Some(Fixed::new(-4, 5)?));
/// # Ok::<(), hw_fixed::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct SignedRounder {
  config: RounderConfig,
  output_width: u32,
  cycle: u64,
  /// The input value, and its correction.
  stage_1: Pipeline<(Fixed, i128)>,
  stage_2: Pipeline<Fixed>,
}

impl SignedRounder {
  /// Elaborate a rounder, with all registers empty.
  ///
  /// Fails with [`Error::IllFormedRounding`] if the configuration leaves no integer bits, in which
  /// case there is no rounder to produce any output.
  pub fn new(config: RounderConfig) -> Result<Self> {
    config.validate()?;
    let output_width = config.output_width()?;
    let latency = config.latency();
    debug!(
      int_width = config.int_width,
      frac_width = config.frac_width,
      mode = %config.mode,
      output_width,
      latency,
      "elaborated signed rounder",
    );
    // Each of the two stages is one register deep, or a plain wire if there are no registers.
    let depth = if latency == 0 { 0 } else { 1 };
    Ok(Self {
      config,
      output_width,
      cycle: 0,
      stage_1: Pipeline::new(depth),
      stage_2: Pipeline::new(depth),
    })
  }

  #[inline]
  pub fn config(&self) -> RounderConfig {
    self.config
  }

  /// See [`RounderConfig::latency`].
  #[inline]
  pub fn latency(&self) -> u32 {
    self.config.latency()
  }

  #[inline]
  pub fn output_width(&self) -> u32 {
    self.output_width
  }

  /// The number of ticks so far.
  #[inline]
  pub fn cycle(&self) -> u64 {
    self.cycle
  }

  /// Whether no value is in flight.
  pub fn is_idle(&self) -> bool {
    self.stage_1.is_idle() && self.stage_2.is_idle()
  }

  /// Empty every register, discarding whatever is in flight. The cycle count is kept.
  pub fn reset(&mut self) {
    self.stage_1.reset();
    self.stage_2.reset();
  }

  /// Clock the rounder once, presenting `input` (or a bubble, if `None`), and return the rounded
  /// value retiring on this tick, if any.
  ///
  /// Fails with [`Error::WidthMismatch`] if `input` is not of the configured width; in that case
  /// the rounder is not clocked.
  pub fn tick(&mut self, input: Option<Fixed>) -> Result<Option<Fixed>> {
    let width = self.config.width();
    if let Some(x) = input && x.width() != width {
      return Err(Error::WidthMismatch { expected: width, actual: x.width() })
    }

    let frac_width = self.config.frac_width;
    let captured = input.map(|x| (x, self.correction(x)));
    let registered = self.stage_1.advance(captured);
    let sum = registered.map(|(x, correction)| {
      Fixed::from_parts((x.value() + correction) >> frac_width, self.output_width)
    });
    let output = self.stage_2.advance(sum);

    trace!(cycle = self.cycle, issued = input.is_some(), retired = output.is_some(), "signed rounder tick");
    self.cycle += 1;
    Ok(output)
  }

  fn correction(&self, x: Fixed) -> i128 {
    let RounderConfig { frac_width, mode, .. } = self.config;
    if frac_width == 0 { return 0 }
    mode.correction_of(x.is_negative(), x.bit(frac_width), frac_width)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::round;
  use proptest::prelude::*;

  #[test]
  fn latency_by_mode() {
    for mode in RoundingMode::ALL {
      let rounder = SignedRounder::new(RounderConfig::new(8, 4, mode)).unwrap();
      assert_eq!(rounder.latency(), if mode == RoundingMode::Floor { 0 } else { 2 }, "{mode}");
      let wire = SignedRounder::new(RounderConfig::new(8, 0, mode)).unwrap();
      assert_eq!(wire.latency(), 0, "{mode}");
    }
  }

  #[test]
  fn floor_is_combinational() {
    let mut rounder = SignedRounder::new(RounderConfig::new(4, 2, RoundingMode::Floor)).unwrap();
    for x in Fixed::cases_exhaustive(6) {
      assert_eq!(rounder.tick(Some(x)), Ok(Some(Fixed::new(x.value() >> 2, 4).unwrap())));
    }
    assert_eq!(rounder.tick(None), Ok(None));
    assert!(rounder.is_idle());
  }

  #[test]
  fn ties() {
    use RoundingMode::*;
    let x = Fixed::new(3, 4).unwrap();  // 1.5
    for (mode, expected) in [(HalfUpNonSym, 2), (HalfDownNonSym, 1), (HalfUpSym, 2), (HalfDownSym, 1), (HalfEven, 2), (HalfOdd, 1)] {
      let mut rounder = SignedRounder::new(RounderConfig::new(3, 1, mode)).unwrap();
      assert_eq!(rounder.tick(Some(x)), Ok(None));
      assert_eq!(rounder.tick(None), Ok(None));
      assert_eq!(rounder.tick(None), Ok(Some(Fixed::new(expected, 4).unwrap())), "{mode}");
      assert!(rounder.is_idle());
    }
  }

  #[test]
  fn ill_formed() {
    for mode in RoundingMode::ALL {
      let config = RounderConfig::new(0, 4, mode);
      assert_eq!(config.validate(), Err(Error::IllFormedRounding { width: 4, frac_width: 4 }));
      assert!(SignedRounder::new(config).is_err());
    }
    assert_eq!(
      RounderConfig::new(100, 100, RoundingMode::Ceil).validate(),
      Err(Error::InvalidWidth { width: 200 }),
    );
  }

  #[test]
  fn huge_widths() {
    let config: RounderConfig = serde_json::from_str(
      r#"{"int_width":4294967295,"frac_width":1,"mode":"floor"}"#,
    ).unwrap();
    assert_eq!(config.width(), u32::MAX);
    assert_eq!(config.validate(), Err(Error::InvalidWidth { width: u32::MAX }));
    assert!(SignedRounder::new(config).is_err());

    for mode in RoundingMode::ALL {
      let config = RounderConfig::new(4, u32::MAX, mode);
      assert_eq!(config.validate(), Err(Error::InvalidWidth { width: u32::MAX }));
      assert_eq!(config.output_width(), Err(Error::InvalidWidth { width: u32::MAX }));
    }
  }

  #[test]
  fn width_mismatch() {
    let mut rounder = SignedRounder::new(RounderConfig::new(4, 4, RoundingMode::HalfOdd)).unwrap();
    let x = Fixed::new(1, 7).unwrap();
    assert_eq!(rounder.tick(Some(x)), Err(Error::WidthMismatch { expected: 8, actual: 7 }));
    assert_eq!(rounder.cycle(), 0);
  }

  #[test]
  fn reset() {
    let mut rounder = SignedRounder::new(RounderConfig::new(4, 4, RoundingMode::Ceil)).unwrap();
    rounder.tick(Some(Fixed::new(17, 8).unwrap())).unwrap();
    assert!(!rounder.is_idle());
    rounder.reset();
    assert!(rounder.is_idle());
    assert_eq!(rounder.tick(None), Ok(None));
    assert_eq!(rounder.tick(None), Ok(None));
  }

  #[test]
  fn config_serde() {
    let config = RounderConfig::new(3, 5, RoundingMode::HalfDownSym);
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(json, r#"{"int_width":3,"frac_width":5,"mode":"half_down_sym"}"#);
    assert_eq!(serde_json::from_str::<RounderConfig>(&json).unwrap(), config);
    assert!(serde_json::from_str::<RounderConfig>(r#"{"int_width":3,"frac_width":5,"mode":"half"}"#).is_err());
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES / 4))]
    /// Every value presented at tick `t` retires at tick `t + latency`, rounded exactly as the
    /// reference model rounds it.
    #[test]
    fn matches_model(
      (config, inputs) in (1u32 ..= 48, 0u32 ..= 48, prop::sample::select(RoundingMode::ALL.to_vec()))
        .prop_flat_map(|(int_width, frac_width, mode)| {
          let config = RounderConfig::new(int_width, frac_width, mode);
          let values = prop::option::of(Fixed::cases_proptest(config.width()));
          (Just(config), prop::collection::vec(values, 0 .. 32))
        }),
    ) {
      let mut rounder = SignedRounder::new(config).unwrap();
      let latency = config.latency() as usize;
      let outputs: Vec<_> = inputs.iter().copied()
        .chain(core::iter::repeat(None).take(latency))
        .map(|x| rounder.tick(x).unwrap())
        .collect();
      for t in 0 .. latency.min(outputs.len()) {
        prop_assert_eq!(outputs[t], None);
      }
      for (t, x) in inputs.iter().enumerate() {
        let expected = x.map(|x| round(x, config.frac_width, config.mode).unwrap());
        prop_assert_eq!(outputs[t + latency], expected.map(|(y, _)| y));
        if let Some((_, model_latency)) = expected {
          prop_assert_eq!(model_latency as usize, latency);
        }
      }
      prop_assert!(rounder.is_idle());
    }
  }
}
