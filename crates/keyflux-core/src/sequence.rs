//! KeyframeSequencer: validate the configured list and, for looping
//! animations, synthesize the single loop-closing keyframe.
//!
//! The closing frame returns every animated property to the value it holds
//! *before* playback starts (not keyframe 0's literal targets), so each loop
//! pass lands back on the pre-animation state. It is built exactly once and
//! reused unchanged across passes.

use crate::data::{Animation, Keyframe, PropertyTarget};
use crate::delta::coerce_px;
use crate::error::AnimError;
use crate::property;
use crate::style::StyleAccessor;

/// Validate `anim` and produce the frame list playback runs over. Fails
/// before any scheduling when the target is unset or no keyframes exist.
pub fn sequence_frames(
    anim: &Animation,
    style: &dyn StyleAccessor,
) -> Result<Vec<Keyframe>, AnimError> {
    if anim.target.is_empty() {
        return Err(AnimError::Config("animation has no target".into()));
    }
    if anim.keyframes.is_empty() {
        return Err(AnimError::Config("animation has no keyframes".into()));
    }
    if anim.duration == Some(0) || anim.keyframes.iter().any(|kf| kf.duration == Some(0)) {
        return Err(AnimError::Config("duration must be positive".into()));
    }

    let mut frames = anim.keyframes.clone();
    if anim.loops > 0 {
        frames.push(closing_frame(anim, style));
    }
    Ok(frames)
}

fn closing_frame(anim: &Animation, style: &dyn StyleAccessor) -> Keyframe {
    let first = &anim.keyframes[0];
    let mut frame = Keyframe {
        props: Vec::new(),
        duration: anim.duration.or(first.duration),
        timing: anim.timing.clone().or_else(|| first.timing.clone()),
    };

    // First occurrence per property name wins, across the original frames in
    // order.
    for kf in &anim.keyframes {
        for (name, _) in &kf.props {
            if frame.get(name).is_some() {
                continue;
            }
            frame.props.push((name.clone(), capture(anim, name, style)));
        }
    }
    frame
}

/// Capture the target's current value for `name`, in the shape DeltaCompiler
/// expects as a target. Shorthands report their first concrete edge (the
/// configuration surface only carries one aggregate value per shorthand).
fn capture(anim: &Animation, name: &str, style: &dyn StyleAccessor) -> PropertyTarget {
    if property::is_dimension(name) {
        let v = if name == "width" {
            style.inner_width(&anim.target)
        } else {
            style.inner_height(&anim.target)
        };
        return PropertyTarget::Scalar(v);
    }

    let current = style.get_style(&anim.target, name);
    let raw = match property::expand(name) {
        Some(edges) => edges.first().and_then(|e| current.get(*e)),
        None => current.get(name),
    }
    .cloned()
    .unwrap_or_default();

    if property::is_color(name) {
        PropertyTarget::Color(raw)
    } else {
        PropertyTarget::Scalar(coerce_px(&raw))
    }
}
