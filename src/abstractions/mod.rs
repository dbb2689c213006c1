/*!

Types/type aliases that abstract over the implementing backing type.

A motivating example is the `RcCell` type, a reference-counting smart pointer that provides run-time checked mutable
access to its contents. Prototypes keep their nested, shareable state in `RcCell`s, so whether two instances share
that state is visible in the types. A number of external crates could provide this functionality. This module
redirects to whatever chosen implementation we want.

*/

mod rccell;
mod string_join;

// Logging
pub mod log;

// Reference counted pointers with run-time checked mutable access.
pub use rccell::{rc_cell, RcCell};

// Interned string. Ingredient names repeat constantly across pizzas.
pub use string_cache::DefaultAtom as IString;

// Join sequences with a separator
pub use string_join::join_string;
