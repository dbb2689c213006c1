use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
  abstractions::IString,
  api::pizza::{
    MeatLoversPizzaBuilder,
    Pizza,
    PizzaBuilder,
    PizzaSteps,
    VeggiePizzaBuilder
  }
};

fn names(items: &[IString]) -> Vec<&str> {
  items.iter().map(|item| &**item).collect()
}

#[test]
fn chained_steps_build_the_record() {
  let pizza = PizzaBuilder::new()
      .add_dough("Thin")
      .add_sauce("Marinara")
      .add_cheese("Mozzarella")
      .add_topping("Olives")
      .build();

  assert_eq!(pizza.dough(), Some("Thin"));
  assert_eq!(pizza.sauce(), Some("Marinara"));
  assert_eq!(names(pizza.cheese()), vec!["Mozzarella"]);
  assert_eq!(names(pizza.toppings()), vec!["Olives"]);
  assert!(pizza.is_complete());
}

#[test]
fn fresh_builder_is_empty() {
  let pizza = PizzaBuilder::new().build();
  assert_eq!(pizza, Pizza::default());
  assert!(!pizza.is_complete());
  assert_eq!(pizza.to_string(), "Dough: None\nSauce: None\nCheese: \nToppings: ");
}

#[test]
fn veggie_preset() {
  let pizza = VeggiePizzaBuilder::new().add_veggies(["Pepper", "Onion"]).build();

  assert_eq!(pizza.dough(), Some("Thin crust"));
  assert_eq!(pizza.sauce(), Some("Marinara"));
  assert_eq!(names(pizza.cheese()), vec!["Mozzarella"]);
  assert_eq!(names(pizza.toppings()), vec!["Pepper", "Onion"]);
}

#[test]
fn meat_lovers_preset() {
  let pizza = MeatLoversPizzaBuilder::new()
      .add_meats(vec!["Pepperoni".to_string(), "Sausage".to_string()])
      .add_topping("Bacon")
      .build();

  assert_eq!(pizza.dough(), Some("Thick crust"));
  assert_eq!(pizza.sauce(), Some("Tomato"));
  assert_eq!(names(pizza.cheese()), vec!["Mozzarella", "Cheddar"]);
  assert_eq!(names(pizza.toppings()), vec!["Pepperoni", "Sausage", "Bacon"]);
  assert_eq!(
    pizza.to_string(),
    "Dough: Thick crust\nSauce: Tomato\nCheese: Mozzarella, Cheddar\nToppings: Pepperoni, Sausage, Bacon"
  );
}

#[test]
fn presets_accept_general_steps_mid_chain() {
  let pizza = VeggiePizzaBuilder::new()
      .add_dough("Gluten free")
      .add_veggies(["Spinach"])
      .add_cheese("Feta")
      .build();

  assert_eq!(pizza.dough(), Some("Gluten free"));
  assert_eq!(names(pizza.cheese()), vec!["Mozzarella", "Feta"]);
  assert_eq!(names(pizza.toppings()), vec!["Spinach"]);
}

#[test]
fn build_is_cumulative() {
  let mut builder = PizzaBuilder::new();
  builder.add_dough("Thin").add_topping("Olives");

  let first  = builder.build();
  let second = builder.build();
  assert_eq!(first, second);

  builder.add_topping("Basil");
  let third = builder.build();
  assert_eq!(names(third.toppings()), vec!["Olives", "Basil"]);
}

#[test]
fn built_pizzas_do_not_alias_the_builder() {
  let mut builder = MeatLoversPizzaBuilder::new();
  let before = builder.build();

  builder.add_meats(["Ham"]).add_cheese("Provolone");

  assert!(before.toppings().is_empty());
  assert_eq!(names(before.cheese()), vec!["Mozzarella", "Cheddar"]);
  assert_eq!(builder.build().toppings().len(), 1);
}

#[test]
fn preset_instances_do_not_share_lists() {
  let mut first  = VeggiePizzaBuilder::new();
  let second     = VeggiePizzaBuilder::default();
  first.add_veggies(["Mushroom"]).add_cheese("Parmesan");

  assert!(second.build().toppings().is_empty());
  assert_eq!(names(second.build().cheese()), vec!["Mozzarella"]);
}

/// Applies random step sequences and compares the result with a plain model of what the pizza should hold.
#[test]
fn random_steps_match_model() {
  const INGREDIENTS: [&str; 6] = ["Thin", "Pesto", "Gouda", "Olives", "Basil", "Tomato"];

  let mut rng = StdRng::seed_from_u64(0x5eed);

  for _ in 0..200 {
    let mut builder = PizzaBuilder::new();
    let mut dough:    Option<&str> = None;
    let mut sauce:    Option<&str> = None;
    let mut cheese:   Vec<&str>    = Vec::new();
    let mut toppings: Vec<&str>    = Vec::new();

    let steps = rng.random_range(0..12);
    for _ in 0..steps {
      let ingredient = INGREDIENTS[rng.random_range(0..INGREDIENTS.len())];
      match rng.random_range(0..5) {
        0 => { builder.add_dough(ingredient);   dough = Some(ingredient); }
        1 => { builder.add_sauce(ingredient);   sauce = Some(ingredient); }
        2 => { builder.add_cheese(ingredient);  cheese.push(ingredient); }
        3 => { builder.add_topping(ingredient); toppings.push(ingredient); }
        _ => {
          builder.add_toppings([ingredient, ingredient]);
          toppings.extend([ingredient, ingredient]);
        }
      }
    }

    let pizza = builder.build();
    assert_eq!(pizza.dough(), dough);
    assert_eq!(pizza.sauce(), sauce);
    assert_eq!(names(pizza.cheese()), cheese);
    assert_eq!(names(pizza.toppings()), toppings);
    assert_eq!(pizza, builder.build());
  }
}
