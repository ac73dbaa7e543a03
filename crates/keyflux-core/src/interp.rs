//! Easing curves: (curve, progress, initial, delta) -> value.
//!
//! Progress is clamped into [0,1] and the boundaries are closed exactly:
//! f(0) == initial and f(1) == initial + delta for every curve. In between,
//! the eased curves raise |delta| to a trigonometric exponent, with the sign
//! split so negative deltas mirror the positive shape.

use std::f32::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};

use crate::error::AnimError;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
}

impl Easing {
    pub fn from_name(name: &str) -> Result<Self, AnimError> {
        match name {
            "linear" => Ok(Easing::Linear),
            "ease-in" => Ok(Easing::EaseIn),
            "ease-out" => Ok(Easing::EaseOut),
            other => Err(AnimError::UnknownTiming(other.to_string())),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseIn => "ease-in",
            Easing::EaseOut => "ease-out",
        }
    }
}

pub fn interpolate(curve: Easing, progress: f32, initial: f32, delta: f32) -> f32 {
    let p = progress.clamp(0.0, 1.0);
    if p <= 0.0 {
        return initial;
    }
    if p >= 1.0 {
        return initial + delta;
    }
    match curve {
        Easing::Linear => initial + delta * p,
        Easing::EaseOut => {
            let e = (p * FRAC_PI_2).cos();
            if delta >= 0.0 {
                initial + delta - delta.powf(e)
            } else {
                initial + delta + (-delta).powf(e)
            }
        }
        Easing::EaseIn => {
            let e = (p * FRAC_PI_2).sin();
            if delta >= 0.0 {
                initial + delta.powf(e)
            } else {
                initial - (-delta).powf(e)
            }
        }
    }
}
