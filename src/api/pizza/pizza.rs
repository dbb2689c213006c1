use std::fmt::{Display, Formatter};

use crate::abstractions::{join_string, IString};

/// A composite record assembled by a builder. Every `Pizza` owns its own cheese and topping lists.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Pizza {
  pub(super) dough   : Option<IString>,
  pub(super) sauce   : Option<IString>,
  pub(super) cheese  : Vec<IString>,
  pub(super) toppings: Vec<IString>,
}

impl Pizza {
  pub fn dough(&self) -> Option<&str> {
    self.dough.as_deref()
  }

  pub fn sauce(&self) -> Option<&str> {
    self.sauce.as_deref()
  }

  pub fn cheese(&self) -> &[IString] {
    &self.cheese
  }

  pub fn toppings(&self) -> &[IString] {
    &self.toppings
  }

  /// A pizza needs at least a dough and a sauce. Cheese and toppings are optional.
  pub fn is_complete(&self) -> bool {
    self.dough.is_some() && self.sauce.is_some()
  }
}

impl Display for Pizza {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    writeln!(f, "Dough: {}", self.dough().unwrap_or("None"))?;
    writeln!(f, "Sauce: {}", self.sauce().unwrap_or("None"))?;
    writeln!(f, "Cheese: {}", join_string(self.cheese.iter(), ", "))?;
    write!(f, "Toppings: {}", join_string(self.toppings.iter(), ", "))
  }
}
