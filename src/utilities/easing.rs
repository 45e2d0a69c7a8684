// src/utilities/easing.rs

// easing curves for the phase interpolation
// every curve maps [0,1] onto [0,1], fixed at both ends, never decreasing

use serde::Deserialize;
use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EasingType {
    Linear,
    Sine,
    Quad,
    #[default]
    Cubic,
    Quint,
}

impl EasingType {
    pub const ALL: [EasingType; 5] = [
        EasingType::Linear,
        EasingType::Sine,
        EasingType::Quad,
        EasingType::Cubic,
        EasingType::Quint,
    ];

    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::Linear => t,
            EasingType::Sine => ease_in_out_sine(t),
            EasingType::Quad => ease_in_out_poly(t, 2),
            EasingType::Cubic => ease_in_out_poly(t, 3),
            EasingType::Quint => ease_in_out_poly(t, 5),
        }
    }
}

fn ease_in_out_sine(t: f64) -> f64 {
    -((PI * t).cos() - 1.0) / 2.0
}

// 2^(n-1) t^n on the first half, mirrored on the second
fn ease_in_out_poly(t: f64, power: i32) -> f64 {
    if t < 0.5 {
        2f64.powi(power - 1) * t.powi(power)
    } else {
        1.0 - (-2.0 * t + 2.0).powi(power) / 2.0
    }
}
