/*!

The abstract factory: a [`UIFactory`] produces a matched family of widgets for one platform. There are exactly two
factories, one per [`Platform`], and [`select_factory`] picks between them.

```
use creational::api::gui::{create_ui, select_factory, Platform};

let factory = select_factory(Platform::Mac);
let button  = factory.create_button();
let textbox = factory.create_textbox();

assert_eq!(button.render(), "Rendering a Mac button");
assert_eq!(textbox.display(), "Displaying a Mac text box");
assert_eq!(create_ui(factory).len(), 2);
```

The set of factories is closed. A factory defined elsewhere could hand out widgets of two platforms, so
`UIFactory` cannot be implemented outside this module:

```compile_fail
use creational::api::gui::{select_factory, Button, Platform, TextBox, UIFactory};

struct MixedFactory;

impl UIFactory for MixedFactory {
  fn platform(&self) -> Platform { Platform::Mac }
  fn create_button(&self) -> Button { select_factory(Platform::Windows).create_button() }
  fn create_textbox(&self) -> TextBox { select_factory(Platform::Mac).create_textbox() }
}
```

*/

mod widgets;

pub use widgets::{Button, Platform, TextBox, WidgetFamily};

use crate::log::{info, warning};

mod sealed {
  pub trait Sealed {}

  impl Sealed for super::WindowsUIFactory {}
  impl Sealed for super::MacUIFactory {}
}

/// Produces widgets that all belong to `self.platform()`. Implemented only by [`WindowsUIFactory`] and
/// [`MacUIFactory`].
pub trait UIFactory: sealed::Sealed {
  fn platform(&self) -> Platform;

  fn create_button(&self) -> Button;

  fn create_textbox(&self) -> TextBox;

  /// Both widgets at once.
  fn create_family(&self) -> WidgetFamily {
    WidgetFamily {
      button : self.create_button(),
      textbox: self.create_textbox(),
    }
  }
}

pub struct WindowsUIFactory;

impl UIFactory for WindowsUIFactory {
  fn platform(&self) -> Platform {
    Platform::Windows
  }

  fn create_button(&self) -> Button {
    Button { platform: Platform::Windows }
  }

  fn create_textbox(&self) -> TextBox {
    TextBox { platform: Platform::Windows }
  }
}

pub struct MacUIFactory;

impl UIFactory for MacUIFactory {
  fn platform(&self) -> Platform {
    Platform::Mac
  }

  fn create_button(&self) -> Button {
    Button { platform: Platform::Mac }
  }

  fn create_textbox(&self) -> TextBox {
    TextBox { platform: Platform::Mac }
  }
}

static WINDOWS_FACTORY: WindowsUIFactory = WindowsUIFactory;
static MAC_FACTORY    : MacUIFactory     = MacUIFactory;

pub fn select_factory(platform: Platform) -> &'static dyn UIFactory {
  match platform {
    Platform::Windows => &WINDOWS_FACTORY,
    Platform::Mac     => &MAC_FACTORY,
  }
}

/// Looks a factory up by platform name, ignoring case. An unknown name yields `None` and a warning.
pub fn select_factory_by_name(name: &str) -> Option<&'static dyn UIFactory> {
  match name.parse::<Platform>() {
    Ok(platform) => Some(select_factory(platform)),
    Err(error) => {
      warning!("{}.", error);
      None
    }
  }
}

/// Creates a button and a text box with `factory`, logs their descriptions, and returns them in that order.
pub fn create_ui(factory: &dyn UIFactory) -> Vec<String> {
  let family = factory.create_family();
  let lines  = vec![family.button().render(), family.textbox().display()];
  for line in &lines {
    info!(2, "{}", line);
  }
  lines
}
