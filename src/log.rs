//! Warning-log capability handed to the adder.
//!
//! The library never looks a logger up by name; callers pass one in. The
//! binary wires [`TracingLog`] to a `tracing-subscriber` installed in `main`.

use std::sync::Arc;

/// Minimal "log a warning" capability.
pub trait WarnLog: Send + Sync {
    fn warn(&self, message: &str);
}

/// Routes warnings to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl WarnLog for TracingLog {
    fn warn(&self, message: &str) {
        tracing::warn!(target: "add_numbers", "{message}");
    }
}

impl<L: WarnLog + ?Sized> WarnLog for &L {
    fn warn(&self, message: &str) {
        (**self).warn(message);
    }
}

impl<L: WarnLog + ?Sized> WarnLog for Arc<L> {
    fn warn(&self, message: &str) {
        (**self).warn(message);
    }
}
