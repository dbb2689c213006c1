/*!

# Overview

The `log` module is how the toolkit reports what it is doing. Every construction strategy emits notices through
it: an unrecognized shape tag, a second attempt to initialize a singleton, a builder step, a prototype clone. Each
notice has a _level_ (what kind of message it is) and a numeric _threshold_ (how chatty it is). A notice is emitted
only if its threshold is at most the global logging threshold.

```
use creational::log::*;

// Only notices logged at threshold 1 or lower will be emitted.
set_global_logging_threshold(1);

warning!("Shape type 'triangle' not recognized.");       // Emitted
warning!(1, "Singleton<String> already initialized.");    // Emitted
info!(2, "Singleton registry torn down.");               // Not emitted
trace!(4, "add_topping(Olives)");                        // Not emitted
```

## Threshold

Higher threshold values mean more verbose logging. The global threshold is shared by all levels. A notice logged
without an explicit threshold is logged at threshold 0 and is always emitted.

The toolkit uses these thresholds:

| threshold | notices                                                     |
|:----------|:------------------------------------------------------------|
| 0         | unrecognized variant tags                                   |
| 1         | repeated singleton initialization                           |
| 2         | singleton construction, registry teardown, rendered widgets |
| 4         | builder steps, prototype clones, singleton hand-outs        |

```
use creational::log::{set_global_logging_threshold, get_global_logging_threshold};

set_global_logging_threshold(4);
assert_eq!(get_global_logging_threshold(), 4);
```

## Configuration

The threshold defaults to 3. The environment variable `CREATIONAL_LOG_THRESHOLD` overrides the default; it is read
once, when the first notice is logged. Values that do not parse as a `u8` are ignored. Calling
`set_global_logging_threshold` always wins over the environment.

## Subscriber

The logging macros install a `tracing` subscriber on first use. If the host program has already installed a global
subscriber, the toolkit's notices go to that subscriber instead and no error is raised.

# Macros

 - `warning!`
 - `info!`
 - `debug!`
 - `trace!`

```ignore
// With threshold
level!(threshold, "format string", args...);

// Without threshold (threshold 0, always emitted)
level!("format string", args...);
```

A threshold, when given, must be an integer literal. Because both a threshold and a format string are literals,
a call whose first argument after the format string is itself a literal is read as `level!(threshold, format, ...)`
and fails to compile:

```compile_fail
use creational::log::info;

info!("{} says hello", "the toolkit");
```

Give such a call an explicit threshold:

```
use creational::log::info;

info!(0, "{} says hello", "the toolkit");
```

*/
mod formatter;
mod threshold_filter;
mod macros;
#[cfg(test)]
pub(crate) mod capture;

use std::sync::{
  atomic::{AtomicBool, AtomicU8, Ordering},
  LazyLock
};

use tracing_subscriber::{
  fmt,
  layer::SubscriberExt,
  Registry
};

use threshold_filter::ThresholdFilterLayer;
use formatter::NoticeFieldFormatter;
pub use macros::*;

/// Name of the environment variable that overrides the default threshold.
pub const THRESHOLD_ENV_VAR: &str = "CREATIONAL_LOG_THRESHOLD";

const DEFAULT_THRESHOLD: u8 = 3;

static GLOBAL_LOGGING_THRESHOLD: AtomicU8 = AtomicU8::new(DEFAULT_THRESHOLD);
/// Set once the threshold has been chosen explicitly, so the environment does not clobber it.
static THRESHOLD_EXPLICIT: AtomicBool = AtomicBool::new(false);

/// Used for implicit initialization.
static INIT_LOGGER: LazyLock<()> = LazyLock::new(|| {
  let env = std::env::var(THRESHOLD_ENV_VAR).ok();
  if let Some(threshold) = threshold_at_init(env.as_deref(), THRESHOLD_EXPLICIT.load(Ordering::SeqCst)) {
    GLOBAL_LOGGING_THRESHOLD.store(threshold, Ordering::SeqCst);
  }

  let subscriber = Registry::default()
      .with(ThresholdFilterLayer)
      .with(
        fmt::layer()
            .fmt_fields(NoticeFieldFormatter)
            .with_target(false)
            .without_time()
            .with_writer(std::io::stdout),
      );

  // A host that installed its own subscriber keeps it.
  let _ = tracing::subscriber::set_global_default(subscriber);
});

/// Initializes the logging system. The macros call this for you.
pub fn init_logger() {
  LazyLock::force(&INIT_LOGGER);
}

/// The threshold the environment imposes when the logger starts, if any. An explicitly set threshold always wins.
fn threshold_at_init(env: Option<&str>, explicit: bool) -> Option<u8> {
  if explicit {
    return None;
  }
  parse_threshold(env?)
}

fn parse_threshold(raw: &str) -> Option<u8> {
  raw.trim().parse::<u8>().ok()
}

/// Sets the global threshold. Notices logged at a greater threshold are dropped.
pub fn set_global_logging_threshold(new_threshold: u8) {
  THRESHOLD_EXPLICIT.store(true, Ordering::SeqCst);
  GLOBAL_LOGGING_THRESHOLD.store(new_threshold, Ordering::SeqCst);
}

/// Retrieves the global threshold.
pub fn get_global_logging_threshold() -> u8 {
  GLOBAL_LOGGING_THRESHOLD.load(Ordering::SeqCst)
}
