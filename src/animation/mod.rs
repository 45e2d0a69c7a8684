pub mod phase;
pub mod presence;
pub mod targets;

pub use phase::{PhaseAnimator, PhaseState};
pub use presence::{next_active, resolve_active, toggle_presence};
pub use targets::{normalize, target_distribution};
