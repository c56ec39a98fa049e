mod config;
mod engine;
mod phase;

pub use config::{WorkoutConfig, MAX_COUNT, MAX_PHASE_SECS, MIN_COUNT};
pub use engine::WorkoutEngine;
pub use phase::WorkoutPhase;
