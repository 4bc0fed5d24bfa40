//! A cycle-accurate model of a chain of clocked registers.
//!
//! A [`Pipeline`] of depth `d` is a shift register of `d` slots. Each call to
//! [`advance`](Pipeline::advance) is one rising clock edge: every slot moves one place towards
//! the output, the new value enters at the input end, and the value leaving the output end is
//! returned. A value presented at tick `t` is therefore returned at tick `t + d`.
//!
//! ```text
//!            slot 0    slot 1         slot d-1
//!   out <-- [oldest] <- [    ] <- .. <- [newest] <-- in
//! ```
//!
//! Depth 0 is the degenerate case of a purely combinational path: the value presented is
//! returned in the same tick.
//!
//! Slots start out empty, which is how a freshly reset pipeline reports "no output yet".

use std::collections::VecDeque;

/// A fixed-depth shift register of optional values. See the [module documentation](self).
#[derive(Debug, Clone)]
#[derive(PartialEq, Eq)]
pub struct Pipeline<T> {
  /// Index 0 is the oldest value (about to retire), index `depth-1` the newest.
  slots: VecDeque<Option<T>>,
}

impl<T> Pipeline<T> {
  /// A pipeline with `depth` register stages, all empty.
  pub fn new(depth: usize) -> Self {
    let slots = core::iter::repeat_with(|| None).take(depth).collect();
    Self { slots }
  }

  /// The number of register stages, which is also the latency in ticks.
  #[inline]
  pub fn depth(&self) -> usize {
    self.slots.len()
  }

  /// Clock the pipeline once: shift `input` in, and return whatever retires from the oldest
  /// slot (`None` if that slot was empty).
  ///
  /// ```
  /// # use hw_fixed::Pipeline;
  /// let mut p = Pipeline::new(2);
  /// assert_eq!(p.advance(Some('a')), None);
  /// assert_eq!(p.advance(Some('b')), None);
  /// assert_eq!(p.advance(None), Some('a'));
  /// assert_eq!(p.advance(None), Some('b'));
  /// assert_eq!(p.advance(None), None);
  /// ```
  pub fn advance(&mut self, input: Option<T>) -> Option<T> {
    match self.slots.pop_front() {
      // Depth 0: the input goes straight through.
      None => input,
      Some(retired) => {
        self.slots.push_back(input);
        retired
      }
    }
  }

  /// How many slots currently hold a value.
  pub fn occupancy(&self) -> usize {
    self.slots.iter().filter(|slot| slot.is_some()).count()
  }

  /// Whether no slot holds a value, i.e. nothing is in flight.
  pub fn is_idle(&self) -> bool {
    self.slots.iter().all(Option::is_none)
  }

  /// Empty every slot, as a synchronous reset would.
  pub fn reset(&mut self) {
    self.slots.iter_mut().for_each(|slot| *slot = None);
  }
}
