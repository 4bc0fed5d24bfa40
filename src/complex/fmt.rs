use super::*;

use core::fmt::{Debug, Display};

impl<T: Debug> Debug for Complex<T> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("Complex")
      .field("re", &self.re)
      .field("im", &self.im)
      .finish()
  }
}

impl<T: Display> Display for Complex<T> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "({}, {})", self.re, self.im)
  }
}
