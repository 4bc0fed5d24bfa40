use super::*;

use core::fmt::{Debug, Display};

impl Debug for Fixed {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let bits = self.to_bits();
    f.debug_tuple("Fixed")
      .field(&format_args!("0b{bits:0w$b}", w=self.width as usize))
      .field(&self.value)
      .finish()
  }
}

impl Display for Fixed {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    Display::fmt(&self.value, f)
  }
}
