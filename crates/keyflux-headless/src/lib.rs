//! Host-neutral keyflux adapter.
//!
//! Supplies the two collaborators the core engine leaves abstract: frame
//! scheduling ([`TimerScheduler`] for wall-clock playback, [`ManualScheduler`]
//! for deterministic scripts) and a style store ([`MemoryStyleAccessor`]) that
//! behaves like a box-model host: shorthand expansion on reads and content-box
//! measurement for dimensions.

pub mod scheduler;
pub mod store;

pub use scheduler::{ManualScheduler, TimerScheduler};
pub use store::MemoryStyleAccessor;
