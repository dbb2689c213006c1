/*!

The builder steps. Every builder, the plain `PizzaBuilder` and the presets alike, owns a `Pizza` in progress and gets
the steps from the `PizzaSteps` trait by exposing that pizza. Steps return `&mut Self`, so chaining keeps the concrete
builder type and a preset's bulk step is still reachable mid-chain.

*/

use crate::{
  abstractions::IString,
  api::pizza::Pizza,
  log::trace
};

pub trait PizzaSteps {
  /// The pizza in progress.
  fn pizza(&self) -> &Pizza;

  fn pizza_mut(&mut self) -> &mut Pizza;

  /// Sets the dough, replacing any previous choice.
  fn add_dough(&mut self, dough: impl Into<IString>) -> &mut Self {
    let dough = dough.into();
    trace!(4, "add_dough({})", dough);
    self.pizza_mut().dough = Some(dough);
    self
  }

  /// Sets the sauce, replacing any previous choice.
  fn add_sauce(&mut self, sauce: impl Into<IString>) -> &mut Self {
    let sauce = sauce.into();
    trace!(4, "add_sauce({})", sauce);
    self.pizza_mut().sauce = Some(sauce);
    self
  }

  /// Appends one cheese.
  fn add_cheese(&mut self, cheese: impl Into<IString>) -> &mut Self {
    let cheese = cheese.into();
    trace!(4, "add_cheese({})", cheese);
    self.pizza_mut().cheese.push(cheese);
    self
  }

  /// Appends one topping.
  fn add_topping(&mut self, topping: impl Into<IString>) -> &mut Self {
    let topping = topping.into();
    trace!(4, "add_topping({})", topping);
    self.pizza_mut().toppings.push(topping);
    self
  }

  /// Appends every topping in `toppings`, in order.
  fn add_toppings<I>(&mut self, toppings: I) -> &mut Self
    where I      : IntoIterator,
          I::Item: Into<IString>
  {
    for topping in toppings {
      self.add_topping(topping);
    }
    self
  }

  /// A snapshot of everything applied so far. The builder keeps its state, so further steps and another `build()`
  /// continue from here; pizzas already built are unaffected.
  fn build(&self) -> Pizza {
    self.pizza().clone()
  }
}

/// Starts from an empty pizza.
#[derive(Clone, Debug, Default)]
pub struct PizzaBuilder {
  pizza: Pizza
}

impl PizzaBuilder {
  pub fn new() -> Self {
    Self::default()
  }
}

impl PizzaSteps for PizzaBuilder {
  fn pizza(&self) -> &Pizza {
    &self.pizza
  }

  fn pizza_mut(&mut self) -> &mut Pizza {
    &mut self.pizza
  }
}
