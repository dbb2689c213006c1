/*!

A reference-counted cell: shared ownership plus run-time checked mutable access. Cloning an `RcCell` clones the
pointer, never the contents, which is exactly the "nested state stays shared" half of a shallow copy.

*/

use std::{
  cell::RefCell,
  rc::Rc
};

pub type RcCell<T> = Rc<RefCell<T>>;

/// Wraps `value` in a fresh `RcCell`.
pub fn rc_cell<T>(value: T) -> RcCell<T> {
  Rc::new(RefCell::new(value))
}
