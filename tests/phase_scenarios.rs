// End-to-end phase animator scenarios

use rand::{rngs::mock::StepRng, rngs::StdRng, RngCore, SeedableRng};
use trianglerow::{
    animation::{target_distribution, PhaseAnimator, PhaseState},
    config::AnimationConfig,
    models::{ColorClass, Direction, PresenceVector, Slot, SlotTable, SLOT_COUNT},
};

const EPSILON: f64 = 1e-9;
const HIT: u64 = 0;
const MISS: u64 = u64::MAX;

// Replays a fixed list of u64 draws, one per gen_bool call
struct ScriptedRng(std::vec::IntoIter<u64>);

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.0.next().expect("ran out of scripted draws")
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        dest.fill(0);
        Ok(())
    }
}

fn presence_of(indices: &[usize]) -> PresenceVector {
    let mut presence = [false; SLOT_COUNT];
    for index in indices {
        presence[*index] = true;
    }
    presence
}

fn state_with(presence: PresenceVector, active: usize) -> PhaseState {
    PhaseState {
        previous: [0.0; SLOT_COUNT],
        target: target_distribution(active, &presence, 0.4),
        phase_start: 0.0,
        active,
        presence,
    }
}

#[test]
fn active_slot_removed_at_boundary() {
    // blue slot 1 is active with 2 next in line; every toggle fires
    let state = state_with(presence_of(&[0, 1, 2, 4, 5, 7]), 1);
    let mut animator =
        PhaseAnimator::with_state(SlotTable::standard(), AnimationConfig::default(), state)
            .expect("valid state");

    animator.update(2.0, &mut StepRng::new(HIT, 0));

    let state = animator.state();
    assert_eq!(state.presence, presence_of(&[0, 3, 4, 5, 6, 7, 8]));
    assert_eq!(state.active, 3);
    assert!(state.presence[state.active]);
    assert!((state.target[3] - 0.4).abs() < EPSILON);
    assert_eq!(state.target[1], 0.0);
    assert_eq!(state.target[2], 0.0);
}

#[test]
fn lone_primary_takes_over() {
    // only slot 0 is primary; active blue slot 5 vanishes, nothing else appears
    let mut slots = [Slot {
        direction: Direction::Right,
        color_class: ColorClass::Secondary,
    }; SLOT_COUNT];
    slots[0].color_class = ColorClass::Primary;
    let table = SlotTable::new(slots).expect("one primary slot");

    let state = state_with(presence_of(&[0, 5]), 5);
    let mut animator = PhaseAnimator::with_state(table, AnimationConfig::default(), state)
        .expect("valid state");

    // draws for slots 1..=8 in order; only slot 5 flips
    let draws = vec![MISS, MISS, MISS, MISS, HIT, MISS, MISS, MISS];
    animator.update(2.0, &mut ScriptedRng(draws.into_iter()));

    let state = animator.state();
    assert_eq!(state.presence, presence_of(&[0]));
    assert_eq!(state.active, 0);

    let mut expected = [0.0; SLOT_COUNT];
    expected[0] = 1.0;
    assert_eq!(state.target, expected);
}

#[test]
fn primary_only_scenario_targets() {
    let animator = PhaseAnimator::new(SlotTable::standard(), AnimationConfig::default(), 0.0)
        .expect("default config is valid");
    let target = animator.state().target;

    let expected = [0.4, 0.0, 0.0, 0.0, 0.2, 0.2, 0.0, 0.2, 0.0];
    for index in 0..SLOT_COUNT {
        assert!(
            (target[index] - expected[index]).abs() < EPSILON,
            "slot {}: {} != {}",
            index,
            target[index],
            expected[index]
        );
    }
}

#[test]
fn frame_rate_independent() {
    // the same wall-clock instants give the same shares however many frames ran in between
    let config = AnimationConfig::default();
    let mut sparse =
        PhaseAnimator::new(SlotTable::standard(), config.clone(), 0.0).expect("valid config");
    let mut dense = PhaseAnimator::new(SlotTable::standard(), config, 0.0).expect("valid config");
    let mut rng = StepRng::new(MISS, 0);

    for frame in 0..=60 {
        dense.update(frame as f64 / 60.0, &mut rng);
    }
    let sparse_shares = sparse.update(1.0, &mut rng);
    let dense_shares = dense.update(1.0, &mut rng);

    assert_eq!(sparse_shares, dense_shares);
}

#[test]
fn long_random_run_keeps_invariants() {
    let table = SlotTable::standard();
    let mut animator = PhaseAnimator::new(table.clone(), AnimationConfig::default(), 0.0)
        .expect("default config is valid");
    let mut rng = StdRng::seed_from_u64(2024);

    let mut boundaries = 0;
    let mut now = 0.0;
    while boundaries < 2000 {
        // uneven frame spacing, occasionally skipping whole phases
        now += [0.016, 0.05, 0.3, 2.5][boundaries % 4];
        let start = animator.state().phase_start;
        let shares = animator.update(now, &mut rng);
        let state = animator.state();

        if state.phase_start != start {
            boundaries += 1;
            let sum: f64 = state.target.iter().sum();
            assert!((sum - 1.0).abs() < EPSILON);
            assert!((state.target[state.active] - 0.4).abs() < EPSILON);
        }

        assert!(state.presence[state.active], "active slot {} absent", state.active);
        for index in 0..SLOT_COUNT {
            if table.get(index).is_primary() {
                assert!(state.presence[index], "primary slot {} vanished", index);
            }
            if !state.presence[index] {
                assert_eq!(state.target[index], 0.0);
            }
            assert!((0.0..=1.0 + EPSILON).contains(&shares[index]));
        }
    }
}
