/*!

A `SingletonRegistry` is a slot map from a type to the one shared instance of that type. It replaces a class-level
"instance" slot with something explicit: a value you can create, share, and tear down.

## Lifecycle

 - `SingletonRegistry::global()` is the process-wide registry. It is created on first use and lives until the
   process exits.
 - `SingletonRegistry::new()` makes an independent registry. Instances in one registry are unrelated to instances in
   another, which is mostly useful for tests.
 - `SingletonRegistry::clear()` is the teardown. The registry forgets every instance it holds. Callers that still own
   an `Arc` keep a perfectly valid instance; the next `get_instance` for that type constructs a new one.

## Locking

The check-and-construct step runs with the registry's lock held, so concurrent first accesses for the same type
construct exactly one instance. A constructor (`T::default()` or the crate-internal constructor passed to
`get_or_construct`) that itself calls back into the same registry would deadlock, so it
must not do that.

*/

use std::{
  any::{type_name, Any, TypeId},
  collections::HashMap,
  sync::{Arc, Mutex, MutexGuard, PoisonError}
};

use once_cell::sync::Lazy;

use crate::log::{info, trace};

type Slot = Arc<dyn Any + Send + Sync>;

static GLOBAL_REGISTRY: Lazy<SingletonRegistry> = Lazy::new(SingletonRegistry::new);

#[derive(Default)]
pub struct SingletonRegistry {
  slots: Mutex<HashMap<TypeId, Slot>>
}

impl SingletonRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  /// The process-wide registry.
  pub fn global() -> &'static SingletonRegistry {
    &GLOBAL_REGISTRY
  }

  /// Returns the instance of `T` held by this registry, constructing it with `T::default()` on first access.
  pub fn get_instance<T>(&self) -> Arc<T>
    where T: Default + Send + Sync + 'static
  {
    self.get_or_construct(T::default)
  }

  /// Like `get_instance`, for types whose constructor is private to the crate.
  pub(crate) fn get_or_construct<T>(&self, construct: fn() -> T) -> Arc<T>
    where T: Send + Sync + 'static
  {
    let mut slots = self.lock();
    let slot = slots
        .entry(TypeId::of::<T>())
        .or_insert_with(|| {
          info!(2, "Constructing the {} singleton.", type_name::<T>());
          Arc::new(construct())
        })
        .clone();

    trace!(4, "Handing out the {} singleton.", type_name::<T>());
    match slot.downcast::<T>() {
      Ok(instance) => instance,
      // Slots are keyed by `TypeId::of::<T>()`, so the slot always holds a `T`.
      Err(_) => unreachable!("singleton slot for {} holds a value of another type", type_name::<T>())
    }
  }

  /// Whether an instance of `T` currently lives in this registry.
  pub fn contains<T: 'static>(&self) -> bool {
    self.lock().contains_key(&TypeId::of::<T>())
  }

  pub fn len(&self) -> usize {
    self.lock().len()
  }

  pub fn is_empty(&self) -> bool {
    self.lock().is_empty()
  }

  /// Forgets every instance. Outstanding `Arc`s stay valid.
  pub fn clear(&self) {
    let mut slots = self.lock();
    info!(2, "Tearing down a singleton registry holding {} instance(s).", slots.len());
    slots.clear();
  }

  /// No operation leaves the map half-updated, so a poisoned lock is still safe to use.
  fn lock(&self) -> MutexGuard<'_, HashMap<TypeId, Slot>> {
    self.slots.lock().unwrap_or_else(PoisonError::into_inner)
  }
}

#[cfg(test)]
mod tests;
