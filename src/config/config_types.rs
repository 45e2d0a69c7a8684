// src/config/config_types.rs
//
// Config types for the app

use crate::utilities::EasingType;
use serde::Deserialize;
use std::error::Error;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 300,
        }
    }
}

/************************* Animation Configs ********************/
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub phase_seconds: f64,       // duration of one grow/shrink phase
    pub max_share: f64,           // width fraction given to the active slot
    pub blue_appear_prob: f64,    // per-phase chance an absent blue slot appears
    pub blue_disappear_prob: f64, // per-phase chance a present blue slot vanishes
    pub easing: EasingType,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            phase_seconds: 2.0,
            max_share: 0.40,
            blue_appear_prob: 0.25,
            blue_disappear_prob: 0.18,
            easing: EasingType::Cubic,
        }
    }
}

impl AnimationConfig {
    pub fn validate(&self) -> Result<(), Box<dyn Error>> {
        if !self.phase_seconds.is_finite() || self.phase_seconds <= 0.0 {
            return Err(format!(
                "animation.phase_seconds must be positive, got {}",
                self.phase_seconds
            )
            .into());
        }
        if self.max_share.is_nan() || self.max_share <= 0.0 || self.max_share >= 1.0 {
            return Err(format!(
                "animation.max_share must lie in (0, 1), got {}",
                self.max_share
            )
            .into());
        }

        let probabilities = [
            ("blue_appear_prob", self.blue_appear_prob),
            ("blue_disappear_prob", self.blue_disappear_prob),
        ];
        for (name, value) in probabilities {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!("animation.{} must lie in [0, 1], got {}", name, value).into());
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub background: [f32; 3],
    pub primary: [f32; 3],
    pub secondary: [f32; 3],
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background: [0.04, 0.04, 0.06],
            primary: [0.93, 0.36, 0.18],
            secondary: [0.16, 0.42, 0.92],
        }
    }
}
