//! Error surface for keyflux-core.
//!
//! Three fatal cases; color parse failure is deliberately not an error
//! (callers substitute a fail-soft default, see `delta`).

use thiserror::Error;

use crate::property;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnimError {
    /// Animation configuration is unusable (no target, empty keyframe list).
    /// Raised synchronously, before any frame is scheduled.
    #[error("animation config error: {0}")]
    Config(String),

    /// A keyframe names a property outside the animatable whitelist.
    /// Raised when the offending frame is compiled, not earlier.
    #[error(
        "property '{property}' is not animatable (animatable properties: {})",
        property::WHITELIST.join(", ")
    )]
    PropertyNotAnimatable { property: String },

    /// A resolved timing curve name is not one of the registered curves.
    #[error("unknown timing curve '{0}' (known: linear, ease-in, ease-out)")]
    UnknownTiming(String),
}
