//! DeltaCompiler: expand one keyframe into per-channel {initial, delta}
//! records against the target's current styling.
//!
//! Compilation happens when a frame is entered, so an invalid property in a
//! later frame does not abort playback earlier. Color parse failures never
//! abort at all: they substitute opaque white with a warning (the fail-soft
//! policy applied here, on behalf of the controller, rather than hidden
//! inside the parser).

use hashbrown::HashMap;

use crate::color::{self, Rgba};
use crate::data::{
    Animation, ColorDeltaRecord, DeltaRecord, Keyframe, PropertyTarget, DEFAULT_DURATION_MS,
    DEFAULT_TIMING,
};
use crate::error::AnimError;
use crate::interp::Easing;
use crate::property;
use crate::style::StyleAccessor;

/// One compiled channel: a scalar record or independent color-channel records.
#[derive(Clone, Debug, PartialEq)]
pub enum ChannelDelta {
    Scalar(DeltaRecord),
    Color(ColorDeltaRecord),
}

/// Everything one frame's playback needs: resolved duration/curve plus the
/// flat channel-name -> record map. Used by exactly one frame, rebuilt on
/// every (re-)entry.
#[derive(Clone, Debug, Default)]
pub struct CompiledFrame {
    pub duration: u32,
    pub easing: Easing,
    pub channels: HashMap<String, ChannelDelta>,
}

/// Integer coercion for style strings: optional sign plus a leading digit
/// run ("10px" -> 10), anything non-numeric coerces to 0.
pub fn coerce_px(s: &str) -> f32 {
    let t = s.trim();
    let (sign, rest) = match t.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, t),
    };
    let digits = &rest[..rest.chars().take_while(|c| c.is_ascii_digit()).count()];
    digits.parse::<i64>().map_or(0.0, |n| sign * n as f32)
}

fn parse_or_white(prop: &str, raw: &str) -> Rgba {
    match color::parse(raw) {
        Some(c) => c,
        None => {
            log::warn!("unparseable color {raw:?} for '{prop}', substituting opaque white");
            color::WHITE
        }
    }
}

fn color_record(prop: &str, current: &str, target: &str) -> ColorDeltaRecord {
    let from = parse_or_white(prop, current);
    let to = parse_or_white(prop, target);
    // Alpha participates only when present on either side; the missing side
    // defaults to fully opaque before differencing.
    let a = if from.a.is_some() || to.a.is_some() {
        Some(DeltaRecord::new(
            from.a.unwrap_or(1.0),
            to.a.unwrap_or(1.0),
        ))
    } else {
        None
    };
    ColorDeltaRecord {
        r: DeltaRecord::new(from.r, to.r),
        g: DeltaRecord::new(from.g, to.g),
        b: DeltaRecord::new(from.b, to.b),
        a,
    }
}

fn scalar_target(value: &PropertyTarget) -> f32 {
    match value {
        // Integer coercion applies to targets as well as current values.
        PropertyTarget::Scalar(n) => n.trunc(),
        PropertyTarget::Color(s) => coerce_px(s),
    }
}

fn color_target(value: &PropertyTarget) -> String {
    match value {
        PropertyTarget::Color(s) => s.clone(),
        // A numeric target for a color property falls through the parser and
        // lands on the white substitute.
        PropertyTarget::Scalar(n) => n.to_string(),
    }
}

/// Compile `frame` into per-channel records using the target's current styles.
pub fn compile_frame(
    frame: &Keyframe,
    anim: &Animation,
    style: &dyn StyleAccessor,
) -> Result<CompiledFrame, AnimError> {
    let duration = frame
        .duration
        .or(anim.duration)
        .unwrap_or(DEFAULT_DURATION_MS);
    let curve = frame
        .timing
        .as_deref()
        .or(anim.timing.as_deref())
        .unwrap_or(DEFAULT_TIMING);
    let easing = Easing::from_name(curve)?;

    let mut channels: HashMap<String, ChannelDelta> = HashMap::new();
    for (name, value) in &frame.props {
        if !property::is_animatable(name) {
            return Err(AnimError::PropertyNotAnimatable {
                property: name.clone(),
            });
        }
        let current = style.get_style(&anim.target, name);
        let empty = String::new();

        if let Some(edges) = property::expand(name) {
            // One aggregate target fans out to every edge channel.
            for edge in edges {
                let cur = current.get(*edge).unwrap_or(&empty);
                let record = if property::is_color(edge) {
                    ChannelDelta::Color(color_record(edge, cur, &color_target(value)))
                } else {
                    ChannelDelta::Scalar(DeltaRecord::new(coerce_px(cur), scalar_target(value)))
                };
                channels.insert((*edge).to_string(), record);
            }
        } else if property::is_color(name) {
            let cur = current.get(name.as_str()).unwrap_or(&empty);
            channels.insert(
                name.clone(),
                ChannelDelta::Color(color_record(name, cur, &color_target(value))),
            );
        } else {
            let initial = if property::is_dimension(name) {
                // Content-box measurement, not the raw style string.
                if name == "width" {
                    style.inner_width(&anim.target)
                } else {
                    style.inner_height(&anim.target)
                }
            } else {
                coerce_px(current.get(name.as_str()).unwrap_or(&empty))
            };
            channels.insert(
                name.clone(),
                ChannelDelta::Scalar(DeltaRecord::new(initial, scalar_target(value))),
            );
        }
    }

    Ok(CompiledFrame {
        duration,
        easing,
        channels,
    })
}
