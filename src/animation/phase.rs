// src/animation/phase.rs
//
// The Phase Animator
//
// Each phase eases the row from `previous` shares to `target` shares.
// When a phase runs out, the boundary step commits the target, lets the
// blue slots appear/vanish, moves emphasis to the next present slot and
// picks a fresh target. That boundary is the only place state changes.

use super::{next_active, resolve_active, target_distribution, toggle_presence};
use crate::{
    config::AnimationConfig,
    models::{PresenceVector, ShareVector, SlotTable, SLOT_COUNT},
};
use log::debug;
use rand::Rng;
use std::error::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct PhaseState {
    pub previous: ShareVector,
    pub target: ShareVector,
    pub phase_start: f64,
    pub active: usize,
    pub presence: PresenceVector,
}

pub struct PhaseAnimator {
    slots: SlotTable,
    config: AnimationConfig,
    state: PhaseState,
}

impl PhaseAnimator {
    /// Starts the first phase at `now`, growing in from an empty row.
    /// Fails when `config` holds values `AnimationConfig::validate` rejects.
    pub fn new(
        slots: SlotTable,
        config: AnimationConfig,
        now: f64,
    ) -> Result<Self, Box<dyn Error>> {
        config.validate()?;

        let presence = slots.initial_presence();
        let active = slots.first_primary();
        let target = target_distribution(active, &presence, config.max_share);

        Ok(Self {
            slots,
            config,
            state: PhaseState {
                previous: [0.0; SLOT_COUNT],
                target,
                phase_start: now,
                active,
                presence,
            },
        })
    }

    /// Resumes from an existing state, e.g. one captured with `state()`.
    pub fn with_state(
        slots: SlotTable,
        config: AnimationConfig,
        state: PhaseState,
    ) -> Result<Self, Box<dyn Error>> {
        config.validate()?;
        if state.active >= SLOT_COUNT {
            return Err(format!("active slot {} out of range", state.active).into());
        }

        Ok(Self {
            slots,
            config,
            state,
        })
    }

    pub fn state(&self) -> &PhaseState {
        &self.state
    }

    pub fn slots(&self) -> &SlotTable {
        &self.slots
    }

    /// Elapsed fraction of the current phase, clamped to [0, 1].
    pub fn progress(&self, now: f64) -> f64 {
        ((now - self.state.phase_start) / self.config.phase_seconds).clamp(0.0, 1.0)
    }

    /// Eased interpolation between the previous and target shares.
    pub fn interpolate(&self, u: f64) -> ShareVector {
        let eased = self.config.easing.apply(u);
        let previous = &self.state.previous;
        let target = &self.state.target;

        // exact at both ends: u=0 is previous, u=1 is target
        std::array::from_fn(|i| previous[i] * (1.0 - eased) + target[i] * eased)
    }

    /// Per-frame evaluation. Returns the shares to draw this frame.
    pub fn update<R: Rng + ?Sized>(&mut self, now: f64, rng: &mut R) -> ShareVector {
        let u = self.progress(now);
        let shares = self.interpolate(u);

        if u >= 1.0 {
            self.advance_phase(now, rng);
        }

        shares
    }

    fn advance_phase<R: Rng + ?Sized>(&mut self, now: f64, rng: &mut R) {
        let state = &mut self.state;
        state.previous = state.target;

        let toggled = toggle_presence(
            &mut state.presence,
            &self.slots,
            self.config.blue_appear_prob,
            self.config.blue_disappear_prob,
            rng,
        );

        // presence first, then active: the advanced slot may have just vanished
        let advanced = next_active(state.active, &state.presence);
        state.active = resolve_active(advanced, &state.presence);

        state.target = target_distribution(state.active, &state.presence, self.config.max_share);
        state.phase_start = now;

        debug!(
            "phase boundary at {:.3}s: active={} toggled={:?} presence={:?}",
            now, state.active, toggled, state.presence
        );
    }
}
