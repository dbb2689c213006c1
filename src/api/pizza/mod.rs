/*!

The builder: a [`Pizza`] is assembled step by step through a builder, and `build()` hands out the result.

```
use creational::api::pizza::{PizzaBuilder, PizzaSteps, VeggiePizzaBuilder};

let pizza = PizzaBuilder::new()
    .add_dough("Thin")
    .add_sauce("Marinara")
    .add_cheese("Mozzarella")
    .add_topping("Olives")
    .build();
assert_eq!(pizza.dough(), Some("Thin"));
assert_eq!(pizza.to_string(), "Dough: Thin\nSauce: Marinara\nCheese: Mozzarella\nToppings: Olives");

let veggie = VeggiePizzaBuilder::new().add_veggies(["Pepper", "Onion"]).build();
assert_eq!(veggie.dough(), Some("Thin crust"));
assert_eq!(veggie.toppings().len(), 2);
```

## Builder State

A builder's state is cumulative. `build()` does not reset it; it returns a snapshot. Building twice without steps
in between gives equal pizzas, and steps taken after a `build()` never reach the pizza that was already built.

*/

mod pizza;
mod builder;
mod presets;

pub use pizza::Pizza;
pub use builder::{PizzaBuilder, PizzaSteps};
pub use presets::{MeatLoversPizzaBuilder, VeggiePizzaBuilder};

#[cfg(test)]
mod tests;
