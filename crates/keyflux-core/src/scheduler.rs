//! FrameScheduler: the "run this on the next paintable tick" primitive, plus
//! the cancellation token checked between frames.
//!
//! The engine never trusts scheduler cadence; callbacks receive a wall-clock
//! timestamp (milliseconds) and all progress math derives from it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub trait FrameScheduler {
    /// Invoke `callback` once on the next paintable tick, passing the current
    /// wall-clock time in milliseconds. Exactly one request is outstanding
    /// per playback at any moment.
    fn request_frame(&mut self, callback: &mut dyn FnMut(f64));
}

/// Shared flag that stops a driver loop between frames. Cancelling is
/// cooperative: the current tick finishes, no further frames are requested,
/// and `AnimationEnd` does not fire.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}
