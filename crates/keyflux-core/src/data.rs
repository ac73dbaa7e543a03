//! Animation data model.
//!
//! An `Animation` is an immutable description built once via
//! `AnimationBuilder` and moved into a `PlaybackController`; nothing mutates
//! it during playback. Keyframe property order is preserved because the
//! synthetic loop-closing frame honors first occurrence per name.

use serde::{Deserialize, Serialize};

/// Opaque handle naming the single target entity (small string key).
pub type EntityHandle = String;

/// Default frame duration in milliseconds when neither the animation nor the
/// keyframe specifies one.
pub const DEFAULT_DURATION_MS: u32 = 500;

/// Curve used when neither the animation nor the keyframe names one.
pub const DEFAULT_TIMING: &str = "linear";

/// Target value for one property: a number, or a color literal for color
/// properties.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyTarget {
    Scalar(f32),
    Color(String),
}

/// One stop in the animation: property targets plus optional per-frame
/// duration/timing overrides.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    /// (property name, target) pairs in declaration order.
    pub props: Vec<(String, PropertyTarget)>,
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub timing: Option<String>,
}

impl Keyframe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scalar(mut self, name: &str, value: f32) -> Self {
        self.props.push((name.to_string(), PropertyTarget::Scalar(value)));
        self
    }

    pub fn color(mut self, name: &str, value: &str) -> Self {
        self.props
            .push((name.to_string(), PropertyTarget::Color(value.to_string())));
        self
    }

    pub fn duration(mut self, ms: u32) -> Self {
        self.duration = Some(ms);
        self
    }

    pub fn timing(mut self, curve: &str) -> Self {
        self.timing = Some(curve.to_string());
        self
    }

    pub fn get(&self, name: &str) -> Option<&PropertyTarget> {
        self.props
            .iter()
            .find_map(|(n, v)| if n == name { Some(v) } else { None })
    }
}

/// A full animation description. `duration`/`timing` are animation-level
/// defaults; `None` falls back per frame (see `delta::compile_frame`) and,
/// for the synthetic closing frame, to the first keyframe's own overrides.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Animation {
    pub target: EntityHandle,
    /// 0 plays once; N > 0 runs N full passes, each closing back to the
    /// pre-animation state via the synthetic frame.
    #[serde(default)]
    pub loops: u32,
    #[serde(default)]
    pub timing: Option<String>,
    #[serde(default)]
    pub duration: Option<u32>,
    pub keyframes: Vec<Keyframe>,
}

/// Typed setters over the configuration surface; `build` applies nothing
/// magical, validation happens once in the sequencer before scheduling.
#[derive(Debug, Default)]
pub struct AnimationBuilder {
    target: EntityHandle,
    loops: u32,
    timing: Option<String>,
    duration: Option<u32>,
    keyframes: Vec<Keyframe>,
}

impl AnimationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn target(mut self, handle: impl Into<EntityHandle>) -> Self {
        self.target = handle.into();
        self
    }

    pub fn loops(mut self, loops: u32) -> Self {
        self.loops = loops;
        self
    }

    pub fn timing(mut self, curve: &str) -> Self {
        self.timing = Some(curve.to_string());
        self
    }

    pub fn duration(mut self, ms: u32) -> Self {
        self.duration = Some(ms);
        self
    }

    pub fn keyframe(mut self, frame: Keyframe) -> Self {
        self.keyframes.push(frame);
        self
    }

    pub fn build(self) -> Animation {
        Animation {
            target: self.target,
            loops: self.loops,
            timing: self.timing,
            duration: self.duration,
            keyframes: self.keyframes,
        }
    }
}

/// One scalar animatable channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DeltaRecord {
    pub initial: f32,
    pub delta: f32,
}

impl DeltaRecord {
    pub fn new(initial: f32, target: f32) -> Self {
        Self {
            initial,
            delta: target - initial,
        }
    }
}

/// Independent per-channel records for a color property. `a` is present when
/// either side of the transition carries alpha.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorDeltaRecord {
    pub r: DeltaRecord,
    pub g: DeltaRecord,
    pub b: DeltaRecord,
    #[serde(default)]
    pub a: Option<DeltaRecord>,
}
