// src/animation/targets.rs
//
// Target width distributions for a phase.
// The active slot takes max_share, every other present slot splits the rest.

use crate::models::{present_count, PresenceVector, ShareVector, SLOT_COUNT};

pub fn target_distribution(
    active: usize,
    presence: &PresenceVector,
    max_share: f64,
) -> ShareVector {
    let mut shares = [0.0; SLOT_COUNT];

    // floored at 1 so a lone active slot doesn't divide by zero
    let others = present_count(presence).saturating_sub(1).max(1);
    let other_share = (1.0 - max_share) / others as f64;

    for (index, share) in shares.iter_mut().enumerate() {
        if !presence[index] {
            continue;
        }
        *share = if index == active { max_share } else { other_share };
    }

    normalize(&mut shares);
    shares
}

// Rescale to sum to exactly 1; an all-zero vector is left alone
pub fn normalize(shares: &mut ShareVector) {
    let sum: f64 = shares.iter().sum();
    if sum > 0.0 {
        for share in shares.iter_mut() {
            *share /= sum;
        }
    }
}
