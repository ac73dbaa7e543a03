//! PlaybackController: the time-driven state machine.
//!
//! States run `Idle -> Running(frame_index) -> Completed`. Progress within a
//! frame derives from wall-clock timestamps supplied by the scheduler, never
//! from tick counts, so irregular cadence cannot distort timing. A frame is
//! compiled on its first tick (which is when `PropertyNotAnimatable` /
//! `UnknownTiming` for that frame surface); every tick interpolates all
//! channels and writes them through the StyleAccessor unless progress has not
//! moved since the last write.
//!
//! The controller owns the driver loop: `play` repeatedly requests single
//! frames from the scheduler until the state machine completes or the
//! cancellation token trips. Exactly one frame request is outstanding at any
//! moment.

use crate::color;
use crate::data::Animation;
use crate::delta::{compile_frame, ChannelDelta, CompiledFrame};
use crate::error::AnimError;
use crate::events::{AnimEvent, Hooks};
use crate::interp::{interpolate, Easing};
use crate::scheduler::{CancelToken, FrameScheduler};
use crate::sequence::sequence_frames;
use crate::style::StyleAccessor;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum State {
    Idle,
    Running(usize),
    Completed,
}

/// Per-playback bookkeeping, reset when the machine reaches `Completed`.
#[derive(Clone, Copy, Debug, Default)]
struct PlaybackState {
    remaining_loops: u32,
    start_time: f64,
    last_progress: Option<f32>,
}

#[derive(Debug)]
pub struct PlaybackController {
    anim: Animation,
    hooks: Hooks,
    cancel: CancelToken,
    state: State,
    frames: Vec<crate::data::Keyframe>,
    playback: PlaybackState,
    compiled: Option<CompiledFrame>,
}

impl PlaybackController {
    /// Take exclusive ownership of `anim`; the configuration is immutable
    /// from here on.
    pub fn new(anim: Animation) -> Self {
        Self {
            anim,
            hooks: Hooks::new(),
            cancel: CancelToken::new(),
            state: State::Idle,
            frames: Vec::new(),
            playback: PlaybackState::default(),
            compiled: None,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn animation(&self) -> &Animation {
        &self.anim
    }

    pub fn hooks_mut(&mut self) -> &mut Hooks {
        &mut self.hooks
    }

    /// Token that stops the driver loop between frames when cancelled.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// `Idle -> Running(0)`: validate and sequence the keyframes (config
    /// errors surface here, before any frame is scheduled) and fire
    /// `AnimationBegin`.
    pub fn start(&mut self, style: &dyn StyleAccessor) -> Result<(), AnimError> {
        if self.state != State::Idle {
            return Err(AnimError::Config("playback already started".into()));
        }
        self.frames = sequence_frames(&self.anim, style)?;
        self.playback = PlaybackState {
            remaining_loops: self.anim.loops,
            start_time: 0.0,
            last_progress: None,
        };
        self.compiled = None;
        self.hooks.fire(&AnimEvent::AnimationBegin);
        self.state = State::Running(0);
        Ok(())
    }

    /// Drive a full playback: start, then request one frame at a time from
    /// the scheduler until completed or cancelled.
    pub fn play(
        &mut self,
        style: &mut dyn StyleAccessor,
        scheduler: &mut dyn FrameScheduler,
    ) -> Result<(), AnimError> {
        self.start(style)?;
        while matches!(self.state, State::Running(_)) {
            if self.cancel.is_cancelled() {
                return Ok(());
            }
            let mut stamp = None;
            scheduler.request_frame(&mut |now| stamp = Some(now));
            if let Some(now) = stamp {
                self.tick(now, style)?;
            }
        }
        Ok(())
    }

    /// Advance the state machine to wall-clock time `now` (milliseconds).
    /// No-op outside `Running`.
    pub fn tick(&mut self, now: f64, style: &mut dyn StyleAccessor) -> Result<(), AnimError> {
        let State::Running(index) = self.state else {
            return Ok(());
        };

        // First tick of this frame: compile, notify, mark the frame epoch.
        if self.compiled.is_none() {
            let compiled = compile_frame(&self.frames[index], &self.anim, style)?;
            self.compiled = Some(compiled);
            self.playback.start_time = now;
            self.playback.last_progress = None;
            self.hooks.fire(&AnimEvent::KeyframeBegin {
                index,
                frame: &self.frames[index],
            });
        }

        let Some(compiled) = self.compiled.as_ref() else {
            return Ok(());
        };
        let duration = compiled.duration.max(1) as f64;
        let progress =
            (1.0 - ((self.playback.start_time + duration - now) / duration)).min(1.0) as f32;

        // Duplicate-progress skip: no redundant writes for a tick that lands
        // on the same timestamp.
        if self.playback.last_progress != Some(progress) {
            write_channels(compiled, progress, &self.anim, style);
            self.playback.last_progress = Some(progress);
        }

        if progress >= 1.0 {
            self.finish_frame(index);
        }
        Ok(())
    }

    fn finish_frame(&mut self, index: usize) {
        self.compiled = None;
        self.hooks.fire(&AnimEvent::KeyframeEnd {
            index,
            frame: &self.frames[index],
        });

        if index + 1 < self.frames.len() {
            self.state = State::Running(index + 1);
            return;
        }

        // Full pass done (synthetic closing frame included).
        if self.playback.remaining_loops > 0 {
            self.playback.remaining_loops -= 1;
        }
        if self.playback.remaining_loops > 0 {
            self.state = State::Running(0);
        } else {
            self.playback.remaining_loops = self.anim.loops;
            self.playback.last_progress = None;
            self.state = State::Completed;
            self.hooks.fire(&AnimEvent::AnimationEnd);
        }
    }
}

fn write_channels(
    compiled: &CompiledFrame,
    progress: f32,
    anim: &Animation,
    style: &mut dyn StyleAccessor,
) {
    for (channel, delta) in compiled.channels.iter() {
        match delta {
            ChannelDelta::Scalar(rec) => {
                let v = interpolate(compiled.easing, progress, rec.initial, rec.delta);
                style.set_style(&anim.target, channel, &format_px(v));
            }
            ChannelDelta::Color(rec) => {
                let r = interpolate(compiled.easing, progress, rec.r.initial, rec.r.delta);
                let g = interpolate(compiled.easing, progress, rec.g.initial, rec.g.delta);
                let b = interpolate(compiled.easing, progress, rec.b.initial, rec.b.delta);
                let value = match rec.a {
                    // Alpha always moves linearly, whatever the frame's curve.
                    Some(a) => {
                        let a = interpolate(Easing::Linear, progress, a.initial, a.delta);
                        color::format_rgba(r, g, b, a)
                    }
                    None => color::format_rgb(r, g, b),
                };
                style.set_style(&anim.target, channel, &value);
            }
        }
    }
}

fn format_px(v: f32) -> String {
    format!("{}px", v.round() as i64)
}
