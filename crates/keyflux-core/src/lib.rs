//! keyflux core (host-agnostic)
//!
//! Keyframe style-animation engine: an ordered keyframe list is played back
//! against one target entity, producing interpolated property values over
//! wall-clock time, with optional looping and lifecycle hooks. Hosts supply
//! the two collaborator traits ([`StyleAccessor`], [`FrameScheduler`]); the
//! engine owns sequencing, delta compilation, easing, and the playback state
//! machine.

pub mod color;
pub mod controller;
pub mod data;
pub mod delta;
pub mod error;
pub mod events;
pub mod interp;
pub mod property;
pub mod scheduler;
pub mod sequence;
pub mod style;

// Re-exports for consumers (adapters)
pub use color::Rgba;
pub use controller::{PlaybackController, State};
pub use data::{
    Animation, AnimationBuilder, ColorDeltaRecord, DeltaRecord, EntityHandle, Keyframe,
    PropertyTarget,
};
pub use delta::{coerce_px, compile_frame, ChannelDelta, CompiledFrame};
pub use error::AnimError;
pub use events::{AnimEvent, EventKind, Hooks, ListenerId, Outcome};
pub use interp::{interpolate, Easing};
pub use scheduler::{CancelToken, FrameScheduler};
pub use sequence::sequence_frames;
pub use style::{StyleAccessor, StyleMap};
