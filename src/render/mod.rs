// src/render/mod.rs
// Drawing the segment row with nannou

pub mod segment_renderer;

pub use segment_renderer::{segment_bounds, triangle_points, visible_segments, SegmentRenderer};

use crate::config::StyleConfig;
use nannou::prelude::*;

#[derive(Debug, Clone)]
pub struct Palette {
    pub background: Rgb<f32>,
    pub primary: Rgb<f32>,
    pub secondary: Rgb<f32>,
}

impl From<&StyleConfig> for Palette {
    fn from(style: &StyleConfig) -> Self {
        let to_rgb = |[r, g, b]: [f32; 3]| rgb(r, g, b);
        Self {
            background: to_rgb(style.background),
            primary: to_rgb(style.primary),
            secondary: to_rgb(style.secondary),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::from(&StyleConfig::default())
    }
}
