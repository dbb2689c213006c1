/*!

The factory method: `ShapeFactory::create_shape` turns a discriminator string into one of a fixed set of shapes.
Matching ignores case. An unknown discriminator is not an error for the factory; it yields `None` and logs a
warning. Callers who want the failure as a value can parse a `Shape` directly.

```
use creational::api::shape::{Shape, ShapeFactory};

assert_eq!(ShapeFactory::create_shape("Circle"), Some(Shape::Circle));
assert_eq!(ShapeFactory::create_shape("triangle"), None);
assert!("triangle".parse::<Shape>().is_err());
```

*/

use std::{
  fmt::{Display, Formatter},
  str::FromStr
};

use crate::{
  core::ConstructionError,
  log::warning
};

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Shape {
  Circle,
  Square,
}

impl Shape {
  /// Every shape the factory knows how to make.
  pub const ALL: [Shape; 2] = [Shape::Circle, Shape::Square];

  /// The registered (lowercase) variant tag.
  pub fn tag(&self) -> &'static str {
    match self {
      Shape::Circle => "circle",
      Shape::Square => "square",
    }
  }

  pub fn draw(&self) -> &'static str {
    match self {
      Shape::Circle => "Drawing a circle",
      Shape::Square => "Drawing a square",
    }
  }
}

impl Display for Shape {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.tag())
  }
}

impl FromStr for Shape {
  type Err = ConstructionError;

  fn from_str(kind: &str) -> Result<Self, Self::Err> {
    Shape::ALL
        .into_iter()
        .find(|shape| shape.tag().eq_ignore_ascii_case(kind))
        .ok_or_else(|| ConstructionError::UnrecognizedVariant { family: "Shape", tag: kind.to_string() })
  }
}

pub struct ShapeFactory;

impl ShapeFactory {
  pub fn create_shape(kind: &str) -> Option<Shape> {
    match kind.parse::<Shape>() {
      Ok(shape) => Some(shape),
      Err(error) => {
        warning!("{}.", error);
        None
      }
    }
  }
}
