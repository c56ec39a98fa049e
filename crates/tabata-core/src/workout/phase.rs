use serde::{Deserialize, Serialize};
use std::fmt;

/// One named timed segment of a workout, ordered by progression.
///
/// `Idle` is the pre-start/terminal-reset state; it carries no duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutPhase {
    Idle,
    WarmUp,
    Work,
    Rest,
    RestBetweenRounds,
    CoolDown,
}

impl WorkoutPhase {
    /// Title shown to the user for this phase.
    pub fn label(&self) -> &'static str {
        match self {
            WorkoutPhase::Idle => "Idle",
            WorkoutPhase::WarmUp => "Warm Up",
            WorkoutPhase::Work => "Work",
            WorkoutPhase::Rest => "Rest",
            WorkoutPhase::RestBetweenRounds => "Rest Rounds",
            WorkoutPhase::CoolDown => "Cool Down",
        }
    }

    /// Spoken cue announced when the phase begins. `Idle` has none.
    pub fn announcement(&self) -> Option<&'static str> {
        match self {
            WorkoutPhase::Idle => None,
            other => Some(other.label()),
        }
    }
}

impl fmt::Display for WorkoutPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
