/*!

The prototype: new instances are made by duplicating an existing one. There are two duplication operations and the
caller picks one by name:

 - `shallow_clone` copies each field one level deep. Scalar fields are independent afterwards, but nested state held
   in an [`RcCell`] is shared between the original and the clone.
 - `deep_clone` also duplicates the nested state, so nothing is shared.

```
use creational::api::prototype::{DataPrototype, Prototype};

let original = DataPrototype::new(5);
let mut clone = original.shallow_clone();
clone.data = 10;
assert_eq!(original.data, 5);

clone.add_note("seen by both");
assert_eq!(&*original.notes()[0], "seen by both");

let independent = original.deep_clone();
independent.add_note("seen by one");
assert_eq!(original.notes().len(), 1);
```

*/

use std::any::type_name;

use crate::{
  abstractions::{rc_cell, IString, RcCell},
  log::debug
};

/// Derived `Clone` on a record is already a field-wise shallow copy, so only `deep_clone` needs spelling out.
pub trait Prototype: Clone {
  /// Field-wise copy. Nested `RcCell` state is shared with `self`.
  fn shallow_clone(&self) -> Self {
    debug!(4, "shallow clone of {}", type_name::<Self>());
    self.clone()
  }

  /// Field-wise copy that also duplicates nested state.
  fn deep_clone(&self) -> Self;
}

/// A fresh cell holding a copy of `cell`'s contents.
fn duplicate<T: Clone>(cell: &RcCell<T>) -> RcCell<T> {
  debug!(4, "deep copy of nested {}", type_name::<T>());
  rc_cell(cell.borrow().clone())
}


/// A prototype carrying a number and a list of notes.
#[derive(Clone, Debug)]
pub struct DataPrototype {
  pub data: i64,
  notes   : RcCell<Vec<IString>>,
}

impl DataPrototype {
  pub fn new(data: i64) -> Self {
    DataPrototype { data, notes: rc_cell(Vec::new()) }
  }

  pub fn add_note(&self, note: impl Into<IString>) {
    self.notes.borrow_mut().push(note.into());
  }

  pub fn notes(&self) -> Vec<IString> {
    self.notes.borrow().clone()
  }

  pub fn operation(&self) -> String {
    format!("DataPrototype with data: {}", self.data)
  }
}

impl Prototype for DataPrototype {
  fn deep_clone(&self) -> Self {
    DataPrototype {
      data : self.data,
      notes: duplicate(&self.notes),
    }
  }
}


/// A prototype carrying a value and the history of values it has processed.
#[derive(Clone, Debug)]
pub struct ValuePrototype {
  pub value: f64,
  history  : RcCell<Vec<f64>>,
}

impl ValuePrototype {
  pub fn new(value: f64) -> Self {
    ValuePrototype { value, history: rc_cell(Vec::new()) }
  }

  /// Records the current value in the history and describes it.
  pub fn process(&self) -> String {
    self.history.borrow_mut().push(self.value);
    format!("ValuePrototype processing value: {}", self.value)
  }

  pub fn history(&self) -> Vec<f64> {
    self.history.borrow().clone()
  }
}

impl Prototype for ValuePrototype {
  fn deep_clone(&self) -> Self {
    ValuePrototype {
      value  : self.value,
      history: duplicate(&self.history),
    }
  }
}
