/*!

A `Singleton<P>` is a lazily created, process-wide holder for a payload of type `P` that can be set exactly once.

```
use creational::api::singleton::{InitOutcome, Singleton};

struct AppName(&'static str);

let first  = Singleton::<AppName>::instance();
let second = Singleton::<AppName>::instance();

assert!(first.get_data().is_err());
assert_eq!(first.initialize(AppName("pizzeria")), InitOutcome::Initialized);
assert_eq!(second.initialize(AppName("bakery")), InitOutcome::AlreadyInitialized);
assert_eq!(second.get_data().unwrap().0, "pizzeria");
```

Every `Singleton<P>` with the same `P` is the same instance, because the instances live in the global
[`SingletonRegistry`]. Use [`Singleton::instance_in`] to get an instance from a registry you own. There is no
other way to construct one:

```compile_fail
use creational::api::singleton::Singleton;

let stray = Singleton::<u32>::default();
```

*/

use std::{
  any::type_name,
  fmt::{Debug, Formatter},
  sync::Arc
};

use once_cell::sync::OnceCell;

use crate::{
  core::{ConstructionError, SingletonRegistry},
  log::warning
};

/// What `Singleton::initialize` did.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum InitOutcome {
  /// The payload was stored.
  Initialized,
  /// A payload was already present. It was left unchanged and the new data was dropped.
  AlreadyInitialized,
}

pub struct Singleton<P> {
  payload: OnceCell<P>
}

impl<P: Send + Sync + 'static> Singleton<P> {
  /// The one instance for payload type `P`, constructed on first call.
  ///
  /// The payload is set at most once for the lifetime of this instance. [`SingletonRegistry::clear`] ends that
  /// lifetime: handles obtained before the teardown keep the old instance and its payload, and the next call
  /// constructs a fresh, uninitialized instance.
  pub fn instance() -> Arc<Singleton<P>> {
    Self::instance_in(SingletonRegistry::global())
  }

  /// The one instance for payload type `P` within `registry`. Teardown of `registry` behaves as described on
  /// [`Singleton::instance`].
  pub fn instance_in(registry: &SingletonRegistry) -> Arc<Singleton<P>> {
    registry.get_or_construct(Singleton::new)
  }

  fn new() -> Self {
    Singleton { payload: OnceCell::new() }
  }
}

impl<P> Singleton<P> {
  /// Stores `data` unless a payload is already present. Never overwrites.
  pub fn initialize(&self, data: P) -> InitOutcome {
    match self.payload.set(data) {
      Ok(()) => InitOutcome::Initialized,
      Err(_rejected) => {
        warning!(1, "Singleton<{}> already initialized.", type_name::<P>());
        InitOutcome::AlreadyInitialized
      }
    }
  }

  pub fn get_data(&self) -> Result<&P, ConstructionError> {
    self.payload
        .get()
        .ok_or(ConstructionError::UninitializedAccess { type_name: type_name::<P>() })
  }

  pub fn is_initialized(&self) -> bool {
    self.payload.get().is_some()
  }
}

impl<P: Debug> Debug for Singleton<P> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self.payload.get() {
      Some(payload) => write!(f, "Singleton({:?})", payload),
      None          => write!(f, "Singleton(<uninitialized>)"),
    }
  }
}
