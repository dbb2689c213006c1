//! Macros for emitting toolkit notices.
//!
//! Each level macro forwards to `__notice!`, which makes sure the logger is initialized and then emits a `tracing`
//! event carrying the threshold as a field. The threshold field is consumed by `ThresholdFilterLayer` and hidden by
//! the formatter. A threshold, when given, must be an integer literal.
//!
//! `macro_rules!` cannot tell an integer literal from a string literal, so `info!("{}", "x")` matches the threshold
//! arm with `"{}"` as the threshold. Write `info!(0, "{}", "x")` instead.

#[doc(hidden)]
#[macro_export]
macro_rules! __notice {
    ($level:ident, $threshold:expr, $($arg:tt)+) => {
        {
            $crate::log::init_logger();
            $crate::tracing::event!(
                $crate::tracing::Level::$level,
                threshold = $threshold as u64,
                message = format_args!($($arg)+)
            );
        }
    };
}

#[macro_export]
macro_rules! warning {
    ($threshold:literal, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::__notice!(WARN, $threshold, $fmt $(, $arg)*)
    };
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::__notice!(WARN, 0, $fmt $(, $arg)*)
    };
}

#[macro_export]
macro_rules! info {
    ($threshold:literal, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::__notice!(INFO, $threshold, $fmt $(, $arg)*)
    };
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::__notice!(INFO, 0, $fmt $(, $arg)*)
    };
}

#[macro_export]
macro_rules! debug {
    ($threshold:literal, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::__notice!(DEBUG, $threshold, $fmt $(, $arg)*)
    };
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::__notice!(DEBUG, 0, $fmt $(, $arg)*)
    };
}

#[macro_export]
macro_rules! trace {
    ($threshold:literal, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::__notice!(TRACE, $threshold, $fmt $(, $arg)*)
    };
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::__notice!(TRACE, 0, $fmt $(, $arg)*)
    };
}


// The following makes the macros importable directly from the `log` module.
pub use {warning, info, debug, trace};
