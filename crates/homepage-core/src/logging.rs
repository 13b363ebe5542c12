#![forbid(unsafe_code)]

//! Logging and tracing support.
//!
//! Re-exports the tracing macros when the `tracing` feature is enabled.
//! When the feature is disabled, no-op macros with the same names are
//! provided so call sites never need their own `cfg` gates.

#[cfg(feature = "tracing")]
pub use tracing::{debug, info, trace, warn};

// When tracing is not enabled, provide no-op macros
#[cfg(not(feature = "tracing"))]
mod noop_macros {
    /// No-op debug macro when tracing is disabled.
    #[doc(hidden)]
    #[macro_export]
    macro_rules! __homepage_noop_debug {
        ($($arg:tt)*) => {};
    }

    /// No-op info macro when tracing is disabled.
    #[doc(hidden)]
    #[macro_export]
    macro_rules! __homepage_noop_info {
        ($($arg:tt)*) => {};
    }

    /// No-op trace macro when tracing is disabled.
    #[doc(hidden)]
    #[macro_export]
    macro_rules! __homepage_noop_trace {
        ($($arg:tt)*) => {};
    }

    /// No-op warn macro when tracing is disabled.
    #[doc(hidden)]
    #[macro_export]
    macro_rules! __homepage_noop_warn {
        ($($arg:tt)*) => {};
    }
}

#[cfg(not(feature = "tracing"))]
pub use crate::{
    __homepage_noop_debug as debug, __homepage_noop_info as info,
    __homepage_noop_trace as trace, __homepage_noop_warn as warn,
};
