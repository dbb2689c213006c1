/*!

The two ways a construction request can go wrong: reading a singleton's payload before anything was stored in it,
and asking a factory for a variant tag it does not know. Neither is fatal. Factories that promise a best-effort
result turn `UnrecognizedVariant` into an absent value plus a warning.

*/

use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

#[derive(Clone, PartialEq, Eq)]
pub enum ConstructionError {
  UninitializedAccess {
    type_name: &'static str
  },
  UnrecognizedVariant {
    family: &'static str,
    tag   : String
  }
}

impl Display for ConstructionError {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {

      ConstructionError::UninitializedAccess { type_name } => {
        write!(f, "the singleton payload of type {} was read before it was initialized", type_name)
      }

      ConstructionError::UnrecognizedVariant { family, tag } => {
        write!(f, "{} type '{}' not recognized", family, tag)
      }

    } // end match on `ConstructionError`
  }
}

impl Debug for ConstructionError {
  fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
    Display::fmt(self, f)
  }
}

impl Error for ConstructionError {}
