use std::{
  sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
    Barrier
  },
  thread
};

use tracing::Level;

use super::SingletonRegistry;
use crate::abstractions::log::capture::{at_level, capture_notices};

/// Counts how many times it has been constructed, across the whole test binary.
static CONSTRUCTED: AtomicUsize = AtomicUsize::new(0);

struct Counted;

impl Default for Counted {
  fn default() -> Self {
    CONSTRUCTED.fetch_add(1, Ordering::SeqCst);
    Counted
  }
}

#[derive(Default)]
struct Settings {
  name: String
}

#[test]
fn same_instance_per_type() {
  let registry = SingletonRegistry::new();
  let first  = registry.get_instance::<Settings>();
  let second = registry.get_instance::<Settings>();

  assert!(Arc::ptr_eq(&first, &second));
  assert!(first.name.is_empty());
  assert_eq!(registry.len(), 1);
}

#[test]
fn distinct_types_get_distinct_slots() {
  let registry = SingletonRegistry::new();
  let _settings = registry.get_instance::<Settings>();
  let _counter  = registry.get_instance::<Vec<u32>>();

  assert!(registry.contains::<Settings>());
  assert!(registry.contains::<Vec<u32>>());
  assert!(!registry.contains::<String>());
  assert_eq!(registry.len(), 2);
}

#[test]
fn registries_are_independent() {
  let left  = SingletonRegistry::new();
  let right = SingletonRegistry::new();

  assert!(!Arc::ptr_eq(&left.get_instance::<Settings>(), &right.get_instance::<Settings>()));
}

#[test]
fn clear_tears_down_but_keeps_outstanding_handles() {
  let registry = SingletonRegistry::new();
  let before = registry.get_instance::<Settings>();
  assert!(!registry.is_empty());

  registry.clear();
  assert!(registry.is_empty());
  assert!(!registry.contains::<Settings>());
  assert!(before.name.is_empty());

  let after = registry.get_instance::<Settings>();
  assert!(!Arc::ptr_eq(&before, &after));
}

#[test]
fn global_registry_is_shared() {
  let a = SingletonRegistry::global();
  let b = SingletonRegistry::global();
  assert!(std::ptr::eq(a, b));

  #[derive(Default)]
  struct OnlyInGlobal;
  assert!(Arc::ptr_eq(&a.get_instance::<OnlyInGlobal>(), &b.get_instance::<OnlyInGlobal>()));
}

#[test]
fn concurrent_first_access_constructs_once() {
  const THREADS: usize = 8;

  let registry = Arc::new(SingletonRegistry::new());
  let barrier  = Arc::new(Barrier::new(THREADS));

  let handles: Vec<_> = (0..THREADS)
      .map(|_| {
        let registry = Arc::clone(&registry);
        let barrier  = Arc::clone(&barrier);
        thread::spawn(move || {
          barrier.wait();
          registry.get_instance::<Counted>()
        })
      })
      .collect();

  let instances: Vec<Arc<Counted>> = handles.into_iter().map(|h| h.join().unwrap()).collect();

  // `Counted` lives only in this test's registry, so exactly one construction happened.
  assert_eq!(CONSTRUCTED.load(Ordering::SeqCst), 1);
  assert!(instances.windows(2).all(|pair| Arc::ptr_eq(&pair[0], &pair[1])));
}

#[test]
fn construction_and_hand_out_are_logged() {
  let registry = SingletonRegistry::new();

  let (_, first) = capture_notices(|| registry.get_instance::<Settings>());
  let constructed = at_level(&first, Level::INFO);
  assert_eq!(constructed.len(), 1);
  assert_eq!(constructed[0].threshold, Some(2));
  let handed_out = at_level(&first, Level::TRACE);
  assert_eq!(handed_out.len(), 1);
  assert_eq!(handed_out[0].threshold, Some(4));

  // Later calls only hand out.
  let (_, second) = capture_notices(|| registry.get_instance::<Settings>());
  assert!(at_level(&second, Level::INFO).is_empty());
  assert_eq!(at_level(&second, Level::TRACE).len(), 1);
}
