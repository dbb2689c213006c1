use creational::{
  api::{
    gui::{create_ui, select_factory, Platform},
    pizza::{MeatLoversPizzaBuilder, PizzaBuilder, PizzaSteps, VeggiePizzaBuilder},
    prototype::{DataPrototype, Prototype, ValuePrototype},
    shape::ShapeFactory,
    singleton::Singleton
  },
  log::{info, set_global_logging_threshold, warning}
};

struct Greeting(String);

fn main() {
  // Show rendered widgets, hide builder and clone chatter.
  set_global_logging_threshold(2);

  // Singleton
  let first  = Singleton::<Greeting>::instance();
  let second = Singleton::<Greeting>::instance();
  if let Err(error) = first.get_data() {
    warning!("{}", error);
  }
  first.initialize(Greeting("Hello from the singleton".to_string()));
  second.initialize(Greeting("This is ignored".to_string()));
  if let Ok(greeting) = second.get_data() {
    info!("{}", greeting.0);
  }

  // Factory method
  for kind in ["Circle", "square", "triangle"] {
    if let Some(shape) = ShapeFactory::create_shape(kind) {
      info!("{}", shape.draw());
    }
  }

  // Abstract factory
  for platform in Platform::ALL {
    create_ui(select_factory(platform));
  }

  // Builder
  let custom = PizzaBuilder::new()
      .add_dough("Thin")
      .add_sauce("Marinara")
      .add_cheese("Mozzarella")
      .add_topping("Olives")
      .build();
  let veggie = VeggiePizzaBuilder::new().add_veggies(["Pepper", "Onion"]).build();
  let meaty  = MeatLoversPizzaBuilder::new().add_meats(["Pepperoni", "Sausage"]).build();
  for pizza in [custom, veggie, meaty] {
    info!("\n{}", pizza);
  }

  // Prototype
  let original = DataPrototype::new(5);
  let mut clone = original.shallow_clone();
  clone.data = 10;
  info!("{}", original.operation());
  info!("{}", clone.operation());

  let value = ValuePrototype::new(7.0);
  let copy  = value.deep_clone();
  info!("{}", copy.process());
  info!("original history: {:?}, copy history: {:?}", value.history(), copy.history());
}
