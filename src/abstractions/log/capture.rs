/*!

Test support: records every notice emitted on the current thread while a closure runs. The capturing subscriber is
installed with `tracing::subscriber::with_default`, so it shadows the global logger for the duration of the closure
only and sees events regardless of the global threshold.

*/

use std::{
  fmt::Debug,
  sync::{Arc, Mutex}
};

use tracing::{
  field::{Field, Visit},
  Event,
  Level,
  Subscriber
};
use tracing_subscriber::{
  layer::{Context, SubscriberExt},
  Layer,
  Registry
};

#[derive(Clone, Eq, PartialEq, Debug)]
pub(crate) struct Notice {
  pub level    : Level,
  pub threshold: Option<u64>,
  pub message  : String,
}

#[derive(Clone, Default)]
struct CaptureLayer {
  notices: Arc<Mutex<Vec<Notice>>>
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
  fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
    let mut visitor = NoticeVisitor::default();
    event.record(&mut visitor);
    self.notices.lock().unwrap().push(Notice {
      level    : *event.metadata().level(),
      threshold: visitor.threshold,
      message  : visitor.message,
    });
  }
}

#[derive(Default)]
struct NoticeVisitor {
  threshold: Option<u64>,
  message  : String,
}

impl Visit for NoticeVisitor {
  fn record_u64(&mut self, field: &Field, value: u64) {
    if field.name() == "threshold" {
      self.threshold = Some(value);
    }
  }

  fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
    if field.name() == "message" {
      self.message = format!("{:?}", value);
    }
  }
}

/// Runs `f` and returns its result together with the notices it emitted.
pub(crate) fn capture_notices<R>(f: impl FnOnce() -> R) -> (R, Vec<Notice>) {
  let layer      = CaptureLayer::default();
  let notices    = Arc::clone(&layer.notices);
  let subscriber = Registry::default().with(layer);

  let result = tracing::subscriber::with_default(subscriber, f);
  let notices = notices.lock().unwrap().clone();
  (result, notices)
}

/// The notices at `level`.
pub(crate) fn at_level(notices: &[Notice], level: Level) -> Vec<&Notice> {
  notices.iter().filter(|notice| notice.level == level).collect()
}
