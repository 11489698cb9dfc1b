//! Conditional logging macros.
//!
//! With the `tracing` cargo feature this re-exports the `tracing` macro;
//! without it it expands to nothing, so layout code can log freely at no
//! runtime cost to default builds.

#[cfg(feature = "tracing")]
pub use tracing::debug;

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::debug;
