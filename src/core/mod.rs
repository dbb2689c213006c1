/*!

Machinery shared by the construction strategies in [`api`](crate::api): the process-wide singleton registry and the
crate's error type.

*/

pub mod registry;
pub mod construction_error;

// Reexports to flatten the smaller modules
pub use construction_error::ConstructionError;
pub use registry::SingletonRegistry;
