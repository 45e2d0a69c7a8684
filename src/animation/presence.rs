// src/animation/presence.rs
//
// Phase-boundary presence changes and active slot selection.
// Only secondary ("blue") slots ever toggle.

use crate::models::{PresenceVector, SlotTable, SLOT_COUNT};
use log::trace;
use rand::Rng;

/// Flips each secondary slot independently: absent slots appear with
/// `appear_prob`, present slots vanish with `disappear_prob`.
/// Returns the indices that changed.
pub fn toggle_presence<R: Rng + ?Sized>(
    presence: &mut PresenceVector,
    slots: &SlotTable,
    appear_prob: f64,
    disappear_prob: f64,
    rng: &mut R,
) -> Vec<usize> {
    let mut toggled = Vec::new();

    for &index in slots.secondary_indices() {
        let was_present = presence[index];
        let flip = if was_present {
            rng.gen_bool(disappear_prob)
        } else {
            rng.gen_bool(appear_prob)
        };
        trace!("slot {} present={} flip={}", index, was_present, flip);

        if flip {
            presence[index] = !was_present;
            toggled.push(index);
        }
    }

    toggled
}

/// Next present slot after `current`, wrapping around.
/// Falls back to `current` when no other slot is present.
pub fn next_active(current: usize, presence: &PresenceVector) -> usize {
    (1..SLOT_COUNT)
        .map(|offset| (current + offset) % SLOT_COUNT)
        .find(|index| presence[*index])
        .unwrap_or(current)
}

/// Invariant repair after presence changed under the active slot:
/// keeps `current` if still present, otherwise moves on to the next present one.
pub fn resolve_active(current: usize, presence: &PresenceVector) -> usize {
    if presence[current] {
        current
    } else {
        next_active(current, presence)
    }
}
