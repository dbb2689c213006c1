/*!

Widgets and the platform tag they carry. Widget fields are private to the `gui` module, so the only way to get a
widget is from a [`UIFactory`](super::UIFactory), and its platform is always the factory's platform.

*/

use std::{
  fmt::{Display, Formatter},
  str::FromStr
};

use crate::core::ConstructionError;

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Platform {
  Windows,
  Mac,
}

impl Platform {
  pub const ALL: [Platform; 2] = [Platform::Windows, Platform::Mac];

  pub fn name(&self) -> &'static str {
    match self {
      Platform::Windows => "Windows",
      Platform::Mac     => "Mac",
    }
  }
}

impl Display for Platform {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.name())
  }
}

impl FromStr for Platform {
  type Err = ConstructionError;

  fn from_str(name: &str) -> Result<Self, Self::Err> {
    Platform::ALL
        .into_iter()
        .find(|platform| platform.name().eq_ignore_ascii_case(name))
        .ok_or_else(|| ConstructionError::UnrecognizedVariant { family: "Platform", tag: name.to_string() })
  }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Button {
  pub(super) platform: Platform
}

impl Button {
  pub fn platform(&self) -> Platform {
    self.platform
  }

  pub fn render(&self) -> String {
    format!("Rendering a {} button", self.platform)
  }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct TextBox {
  pub(super) platform: Platform
}

impl TextBox {
  pub fn platform(&self) -> Platform {
    self.platform
  }

  pub fn display(&self) -> String {
    format!("Displaying a {} text box", self.platform)
  }
}

/// A button and a text box from the same factory, and therefore from the same platform.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct WidgetFamily {
  pub(super) button : Button,
  pub(super) textbox: TextBox,
}

impl WidgetFamily {
  pub fn button(&self) -> &Button {
    &self.button
  }

  pub fn textbox(&self) -> &TextBox {
    &self.textbox
  }

  pub fn platform(&self) -> Platform {
    self.button.platform
  }
}
