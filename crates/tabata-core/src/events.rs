use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::workout::WorkoutPhase;

/// Every lifecycle change in the engine produces an Event.
/// A host UI polls the engine or consumes these as they are returned.
///
/// Timestamps are annotation for hosts and logs; they play no part in the
/// engine's timing, which is driven purely by tick deltas.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    WorkoutStarted {
        phase: WorkoutPhase,
        remaining_secs: f64,
        at: DateTime<Utc>,
    },
    WorkoutPaused {
        remaining_secs: f64,
        at: DateTime<Utc>,
    },
    WorkoutStopped {
        at: DateTime<Utc>,
    },
    /// A phase transition fired; one per transition, so a single large
    /// tick can yield several of these.
    PhaseStarted {
        phase: WorkoutPhase,
        set: u32,
        round: u32,
        duration_secs: f64,
        at: DateTime<Utc>,
    },
    /// The cool-down ended and the workout is complete.
    WorkoutFinished {
        at: DateTime<Utc>,
    },
    StateSnapshot {
        phase: WorkoutPhase,
        remaining_secs: f64,
        total_secs: f64,
        progress: f64,
        set: u32,
        round: u32,
        is_active: bool,
        is_finished: bool,
        at: DateTime<Utc>,
    },
}
