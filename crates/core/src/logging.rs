//! Logging facade.
//!
//! With the `tracing` feature enabled this re-exports the `tracing` macros.
//! Without it the same names expand to nothing, so call sites never need
//! their own `cfg` guards.

#[cfg(feature = "tracing")]
pub(crate) use tracing::{debug, trace};

#[cfg(not(feature = "tracing"))]
mod noop_macros {
    /// No-op debug macro when tracing is disabled.
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    /// No-op trace macro when tracing is disabled.
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }

    pub(crate) use debug;
    pub(crate) use trace;
}

#[cfg(not(feature = "tracing"))]
pub(crate) use noop_macros::{debug, trace};
