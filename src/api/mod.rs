/*!

The public API of the library: one module per construction strategy. The modules are independent of one another.

 - [`singleton`]: one shared instance per type, with a payload that can be set once.
 - [`shape`]: a factory method from a discriminator string to a shape.
 - [`gui`]: an abstract factory producing matched widget families per platform.
 - [`pizza`]: a step-by-step builder with preset variants.
 - [`prototype`]: shallow and deep duplication of existing instances.

*/

pub mod singleton;
pub mod shape;
pub mod gui;
pub mod pizza;
pub mod prototype;
