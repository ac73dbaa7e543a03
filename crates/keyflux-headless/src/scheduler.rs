//! Frame schedulers.
//!
//! `TimerScheduler` approximates a paint-aligned callback with a fixed
//! ~16.67 ms sleep; timestamps come from a process-epoch `Instant`, so the
//! engine's wall-clock progress math stays accurate even when sleeps drift.
//! `ManualScheduler` replays scripted timestamps for tests and demos.

use std::collections::VecDeque;
use std::thread;
use std::time::{Duration, Instant};

use keyflux_core::FrameScheduler;

/// Default frame interval, one frame at 60 fps.
pub const FRAME_INTERVAL: Duration = Duration::from_micros(16_667);

#[derive(Debug)]
pub struct TimerScheduler {
    interval: Duration,
    epoch: Instant,
}

impl TimerScheduler {
    pub fn new() -> Self {
        Self::with_interval(FRAME_INTERVAL)
    }

    pub fn with_interval(interval: Duration) -> Self {
        Self {
            interval,
            epoch: Instant::now(),
        }
    }

    /// Milliseconds since this scheduler was created.
    pub fn now_ms(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64() * 1000.0
    }
}

impl Default for TimerScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameScheduler for TimerScheduler {
    fn request_frame(&mut self, callback: &mut dyn FnMut(f64)) {
        thread::sleep(self.interval);
        callback(self.now_ms());
    }
}

/// Deterministic scheduler: hands out scripted timestamps, then keeps
/// advancing by a fixed step once the script runs dry (so playback can always
/// reach completion).
#[derive(Clone, Debug)]
pub struct ManualScheduler {
    script: VecDeque<f64>,
    now: f64,
    step: f64,
}

impl ManualScheduler {
    /// Fixed-step clock starting at 0.
    pub fn stepped(step: f64) -> Self {
        Self {
            script: VecDeque::new(),
            now: 0.0,
            step,
        }
    }

    /// Scripted timestamps first, then `step` past the last one.
    pub fn scripted(times: impl IntoIterator<Item = f64>, step: f64) -> Self {
        Self {
            script: times.into_iter().collect(),
            now: 0.0,
            step,
        }
    }

    pub fn now(&self) -> f64 {
        self.now
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self, callback: &mut dyn FnMut(f64)) {
        self.now = match self.script.pop_front() {
            Some(t) => t,
            None => self.now + self.step,
        };
        callback(self.now);
    }
}
