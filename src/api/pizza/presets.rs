/*!

Preset builders start with dough, sauce, and cheese already applied and add one domain-specific bulk step that
extends the toppings. They are ordinary builders otherwise: every `PizzaSteps` step still works on them.

# `pizza_preset!` Macro

Generates the preset builder named `$name` suffixed with `PizzaBuilder`. For example, `Veggie` becomes
`VeggiePizzaBuilder`.

 - `dough`, `sauce`: applied with `add_dough` and `add_sauce` in `new()`.
 - `cheese`: each cheese applied with its own `add_cheese` call, in order.
 - `bulk_step`: the name of the generated method that appends a list of toppings.

*/

use paste::paste;

use crate::{
  abstractions::IString,
  api::pizza::{Pizza, PizzaSteps}
};

macro_rules! pizza_preset {
  (
    $(#[$meta:meta])*
    $name:ident {
      dough    : $dough:literal,
      sauce    : $sauce:literal,
      cheese   : [$($cheese:literal),+ $(,)?],
      bulk_step: $bulk_step:ident $(,)?
    }
  ) => {
    paste!{

    $(#[$meta])*
    #[derive(Clone, Debug)]
    pub struct [<$name PizzaBuilder>] {
      pizza: Pizza
    }

    impl [<$name PizzaBuilder>] {
      pub fn new() -> Self {
        let mut builder = [<$name PizzaBuilder>] { pizza: Pizza::default() };
        builder.add_dough($dough).add_sauce($sauce);
        $( builder.add_cheese($cheese); )+
        builder
      }

      #[doc = "Appends every item in `toppings` to the toppings, in order."]
      pub fn $bulk_step<I>(&mut self, toppings: I) -> &mut Self
        where I      : IntoIterator,
              I::Item: Into<IString>
      {
        self.add_toppings(toppings)
      }
    }

    impl Default for [<$name PizzaBuilder>] {
      fn default() -> Self {
        Self::new()
      }
    }

    impl PizzaSteps for [<$name PizzaBuilder>] {
      fn pizza(&self) -> &Pizza {
        &self.pizza
      }

      fn pizza_mut(&mut self) -> &mut Pizza {
        &mut self.pizza
      }
    }

    } // end paste!
  }; // end macro pattern
}

pizza_preset!(
  /// Thin crust, marinara, mozzarella, and whatever vegetables you add.
  Veggie {
    dough    : "Thin crust",
    sauce    : "Marinara",
    cheese   : ["Mozzarella"],
    bulk_step: add_veggies,
  }
);

pizza_preset!(
  /// Thick crust, tomato sauce, two cheeses, and whatever meats you add.
  MeatLovers {
    dough    : "Thick crust",
    sauce    : "Tomato",
    cheese   : ["Mozzarella", "Cheddar"],
    bulk_step: add_meats,
  }
);
