// src/render/segment_renderer.rs
//
// Turns a share vector into triangles across the window.
// The animation side only deals in fractions; absolute size comes from
// whatever rect we're handed each frame, so resizes need no bookkeeping.

use super::Palette;
use crate::models::{ColorClass, Direction, ShareVector, SlotTable, SLOT_COUNT};
use nannou::prelude::*;

// below this a slot counts as zero-width and isn't drawn
const MIN_DRAW_WIDTH: f32 = 1e-3;

// how close the share sum must be to 1 before the last edge is pinned
const FULL_ROW_TOLERANCE: f64 = 1e-6;

/// Cumulative (start, end) x positions for every slot.
/// A zero share always gets an empty span. While the row is still growing
/// in (shares summing below 1) the leftover width stays empty; once the row
/// is full the final edge is pinned to `left + width` to absorb rounding.
pub fn segment_bounds(shares: &ShareVector, left: f32, width: f32) -> [(f32, f32); SLOT_COUNT] {
    let mut bounds = [(left, left); SLOT_COUNT];
    let total: f64 = shares.iter().sum();
    let full_row = (total - 1.0).abs() < FULL_ROW_TOLERANCE;
    let mut cumulative = 0.0f64;

    for (index, share) in shares.iter().enumerate() {
        let start = left + (cumulative * width as f64) as f32;
        cumulative += share;
        let end = if *share <= 0.0 {
            start
        } else if index == SLOT_COUNT - 1 && full_row {
            left + width
        } else {
            left + (cumulative * width as f64) as f32
        };
        bounds[index] = (start, end.max(start));
    }

    bounds
}

/// Slots that actually get a triangle this frame, as (index, x0, x1).
/// Absent slots (share 0) are never included.
pub fn visible_segments(shares: &ShareVector, left: f32, width: f32) -> Vec<(usize, f32, f32)> {
    segment_bounds(shares, left, width)
        .iter()
        .enumerate()
        .filter(|(index, (x0, x1))| shares[*index] > 0.0 && x1 - x0 >= MIN_DRAW_WIDTH)
        .map(|(index, (x0, x1))| (index, *x0, *x1))
        .collect()
}

/// Left: base on the bottom edge, apex up. Right: base on top, apex down.
pub fn triangle_points(
    direction: Direction,
    x0: f32,
    x1: f32,
    bottom: f32,
    top: f32,
) -> [Point2; 3] {
    let mid = (x0 + x1) / 2.0;
    match direction {
        Direction::Left => [pt2(x0, bottom), pt2(x1, bottom), pt2(mid, top)],
        Direction::Right => [pt2(x0, top), pt2(x1, top), pt2(mid, bottom)],
    }
}

pub struct SegmentRenderer {
    palette: Palette,
}

impl SegmentRenderer {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    pub fn draw(&self, draw: &Draw, rect: Rect, shares: &ShareVector, slots: &SlotTable) {
        draw.background().color(self.palette.background);

        for (index, x0, x1) in visible_segments(shares, rect.left(), rect.w()) {
            let slot = slots.get(index);
            let color = match slot.color_class {
                ColorClass::Primary => self.palette.primary,
                ColorClass::Secondary => self.palette.secondary,
            };
            let [a, b, c] = triangle_points(slot.direction, x0, x1, rect.bottom(), rect.top());
            draw.tri().points(a, b, c).color(color);
        }
    }
}
