/*!

An object construction toolkit. Each module under [`api`] is a self-contained illustration of one classic
creational pattern:

| pattern          | entry point                                          |
|:-----------------|:-----------------------------------------------------|
| Singleton        | [`Singleton::instance`](api::singleton::Singleton)   |
| Factory Method   | [`ShapeFactory::create_shape`](api::shape::ShapeFactory) |
| Abstract Factory | [`select_factory`](api::gui::select_factory)         |
| Builder          | [`PizzaBuilder`](api::pizza::PizzaBuilder)           |
| Prototype        | [`Prototype`](api::prototype::Prototype)             |

Notices (an unknown shape tag, a repeated singleton initialization) go through the [`log`] module.

*/

pub mod api;
pub mod abstractions;
pub mod core;

// We re-export abstractions that are meant to be used publicly.
pub use abstractions::{
  log,
  IString
};
pub use crate::core::{
  ConstructionError,
  SingletonRegistry
};

// The logging macros expand to `tracing` calls; dependents should not need their own `tracing` dependency.
#[doc(hidden)]
pub use tracing;
