//! Logging macros that compile to nothing when tracing is disabled.
//!
//! Events are forwarded to `tracing` when either:
//! - the `tracing` feature is enabled (it is on by default)
//! - running this crate's unit tests (`cfg(test)`)
//!
//! Warnings are also recorded as [`Diagnostic`](crate::Diagnostic) values by
//! their callers, so nothing is lost when the feature is off.

#[cfg(any(test, feature = "tracing"))]
macro_rules! trace {
    ($($arg:tt)*) => { ::tracing::trace!($($arg)*) };
}

#[cfg(not(any(test, feature = "tracing")))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

#[cfg(any(test, feature = "tracing"))]
macro_rules! debug {
    ($($arg:tt)*) => { ::tracing::debug!($($arg)*) };
}

#[cfg(not(any(test, feature = "tracing")))]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(any(test, feature = "tracing"))]
macro_rules! warn {
    ($($arg:tt)*) => { ::tracing::warn!($($arg)*) };
}

#[cfg(not(any(test, feature = "tracing")))]
macro_rules! warn {
    ($($arg:tt)*) => {};
}
