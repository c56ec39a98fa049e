use serde::{Deserialize, Serialize};

use super::phase::WorkoutPhase;
use crate::error::ValidationError;

/// Bounds enforced by the configuration editor operations.
/// The engine assumes configs respect them.
pub const MIN_COUNT: u32 = 1;
pub const MAX_COUNT: u32 = 10;
pub const MAX_PHASE_SECS: f64 = 600.0;

/// Workout layout: set/round counts and per-phase durations in seconds.
///
/// Immutable for the duration of a run; the editor operations below are
/// for the configuration screen, before `setup` hands the value to the
/// engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkoutConfig {
    /// Work/rest repetitions per round.
    #[serde(default = "default_sets")]
    pub sets: u32,
    /// Number of set-groups.
    #[serde(default = "default_rounds")]
    pub rounds: u32,
    #[serde(default = "default_warm_up_time")]
    pub warm_up_time: f64,
    #[serde(default = "default_work_time")]
    pub work_time: f64,
    #[serde(default = "default_rest_time")]
    pub rest_time: f64,
    /// Rest separating one round from the next. Defaults equal to
    /// `rest_time`, which reduces the schedule to a single rest kind.
    #[serde(default = "default_rest_time")]
    pub rest_between_rounds_time: f64,
    #[serde(default = "default_cool_down_time")]
    pub cool_down_time: f64,
}

fn default_sets() -> u32 {
    8
}
fn default_rounds() -> u32 {
    3
}
fn default_warm_up_time() -> f64 {
    60.0
}
fn default_work_time() -> f64 {
    20.0
}
fn default_rest_time() -> f64 {
    10.0
}
fn default_cool_down_time() -> f64 {
    60.0
}

impl Default for WorkoutConfig {
    fn default() -> Self {
        Self {
            sets: default_sets(),
            rounds: default_rounds(),
            warm_up_time: default_warm_up_time(),
            work_time: default_work_time(),
            rest_time: default_rest_time(),
            rest_between_rounds_time: default_rest_time(),
            cool_down_time: default_cool_down_time(),
        }
    }
}

impl WorkoutConfig {
    /// Duration of one occurrence of `phase`. `Idle` has no duration.
    pub fn phase_duration(&self, phase: WorkoutPhase) -> f64 {
        match phase {
            WorkoutPhase::Idle => 0.0,
            WorkoutPhase::WarmUp => self.warm_up_time,
            WorkoutPhase::Work => self.work_time,
            WorkoutPhase::Rest => self.rest_time,
            WorkoutPhase::RestBetweenRounds => self.rest_between_rounds_time,
            WorkoutPhase::CoolDown => self.cool_down_time,
        }
    }

    /// Total number of work segments in the workout.
    pub fn total_reps(&self) -> u32 {
        self.sets * self.rounds
    }

    /// Total wall-clock length of the workout in seconds.
    ///
    /// Round-ending rests (except after the final round) use the
    /// between-rounds duration, and the workout never ends mid-rest: the
    /// final work segment flows straight into cool-down, so one rest is
    /// dropped relative to a naive `sets * rounds * (work + rest)`.
    pub fn total_duration(&self) -> f64 {
        let sets = f64::from(self.sets);
        let rounds = f64::from(self.rounds);
        let work = sets * rounds * self.work_time;
        let rest = rounds * (sets - 1.0) * self.rest_time;
        let between = (rounds - 1.0) * self.rest_between_rounds_time;
        self.warm_up_time + work + rest + between + self.cool_down_time
    }

    /// Change the number of sets by `amount`, clamped to `1..=10`.
    pub fn adjust_sets(&mut self, amount: i32) {
        self.sets = clamp_count(i64::from(self.sets) + i64::from(amount));
    }

    /// Change the number of rounds by `amount`, clamped to `1..=10`.
    pub fn adjust_rounds(&mut self, amount: i32) {
        self.rounds = clamp_count(i64::from(self.rounds) + i64::from(amount));
    }

    /// Adjust a phase duration by `seconds` (may be negative), clamped to
    /// `0..=600`. `Idle` carries no duration and is ignored.
    pub fn adjust_phase_time(&mut self, phase: WorkoutPhase, seconds: f64) {
        let slot = match phase {
            WorkoutPhase::WarmUp => &mut self.warm_up_time,
            WorkoutPhase::Work => &mut self.work_time,
            WorkoutPhase::Rest => &mut self.rest_time,
            WorkoutPhase::RestBetweenRounds => &mut self.rest_between_rounds_time,
            WorkoutPhase::CoolDown => &mut self.cool_down_time,
            WorkoutPhase::Idle => return,
        };
        *slot = (*slot + seconds).clamp(0.0, MAX_PHASE_SECS);
    }

    /// Reject configs the engine cannot run: zero counts, or negative or
    /// non-finite durations.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.sets < MIN_COUNT {
            return Err(invalid("sets", "must be at least 1"));
        }
        if self.rounds < MIN_COUNT {
            return Err(invalid("rounds", "must be at least 1"));
        }
        for (field, value) in [
            ("warm_up_time", self.warm_up_time),
            ("work_time", self.work_time),
            ("rest_time", self.rest_time),
            ("rest_between_rounds_time", self.rest_between_rounds_time),
            ("cool_down_time", self.cool_down_time),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(field, "must be a non-negative number of seconds"));
            }
        }
        Ok(())
    }
}

fn clamp_count(value: i64) -> u32 {
    value.clamp(i64::from(MIN_COUNT), i64::from(MAX_COUNT)) as u32
}

fn invalid(field: &str, message: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(sets: u32, rounds: u32) -> WorkoutConfig {
        WorkoutConfig {
            sets,
            rounds,
            warm_up_time: 10.0,
            work_time: 20.0,
            rest_time: 10.0,
            rest_between_rounds_time: 10.0,
            cool_down_time: 10.0,
        }
    }

    #[test]
    fn total_duration_drops_the_final_rest() {
        // 2 sets x 3 rounds: 6 work segments of 20s, 5 rests of 10s
        // (3 ordinary + 2 between rounds), warm-up and cool-down of 10s.
        let cfg = config(2, 3);
        assert_eq!(cfg.total_duration(), 10.0 + 120.0 + 50.0 + 10.0);
    }

    #[test]
    fn total_duration_single_set_single_round_has_no_rest() {
        let cfg = config(1, 1);
        assert_eq!(cfg.total_duration(), 10.0 + 20.0 + 10.0);
        assert!(cfg.total_duration() >= cfg.warm_up_time + cfg.cool_down_time);
    }

    #[test]
    fn total_duration_uses_between_rounds_rest_at_round_boundaries() {
        let mut cfg = config(2, 2);
        cfg.rest_between_rounds_time = 30.0;
        // work 4x20, ordinary rests 2x10, between-rounds rest 1x30.
        assert_eq!(cfg.total_duration(), 10.0 + 80.0 + 20.0 + 30.0 + 10.0);
    }

    #[test]
    fn adjust_sets_clamps_to_bounds() {
        let mut cfg = config(2, 2);
        cfg.adjust_sets(1);
        assert_eq!(cfg.sets, 3);
        cfg.adjust_sets(-1);
        assert_eq!(cfg.sets, 2);
        cfg.adjust_sets(-5);
        assert_eq!(cfg.sets, 1);
        cfg.sets = 9;
        cfg.adjust_sets(2);
        assert_eq!(cfg.sets, 10);
    }

    #[test]
    fn adjust_rounds_clamps_to_bounds() {
        let mut cfg = config(2, 5);
        cfg.adjust_rounds(1);
        assert_eq!(cfg.rounds, 6);
        cfg.adjust_rounds(-10);
        assert_eq!(cfg.rounds, 1);
        cfg.rounds = 9;
        cfg.adjust_rounds(2);
        assert_eq!(cfg.rounds, 10);
    }

    #[test]
    fn adjust_phase_time_clamps_to_bounds() {
        let mut cfg = config(2, 2);
        cfg.adjust_phase_time(WorkoutPhase::Work, 10.0);
        assert_eq!(cfg.work_time, 30.0);
        cfg.adjust_phase_time(WorkoutPhase::Work, -40.0);
        assert_eq!(cfg.work_time, 0.0);
        cfg.work_time = 590.0;
        cfg.adjust_phase_time(WorkoutPhase::Work, 20.0);
        assert_eq!(cfg.work_time, 600.0);
        cfg.adjust_phase_time(WorkoutPhase::Work, 10.0);
        assert_eq!(cfg.work_time, 600.0);
    }

    #[test]
    fn adjust_phase_time_ignores_idle() {
        let mut cfg = config(2, 2);
        let before = cfg;
        cfg.adjust_phase_time(WorkoutPhase::Idle, 30.0);
        assert_eq!(cfg, before);
    }

    #[test]
    fn validate_rejects_zero_counts_and_bad_durations() {
        let mut cfg = config(2, 2);
        assert!(cfg.validate().is_ok());
        cfg.sets = 0;
        assert!(cfg.validate().is_err());
        cfg.sets = 2;
        cfg.rest_time = -1.0;
        assert!(cfg.validate().is_err());
        cfg.rest_time = f64::NAN;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn defaults_match_the_standard_tabata_layout() {
        let cfg = WorkoutConfig::default();
        assert_eq!(cfg.sets, 8);
        assert_eq!(cfg.rounds, 3);
        assert_eq!(cfg.work_time, 20.0);
        assert_eq!(cfg.rest_time, 10.0);
        assert_eq!(cfg.rest_between_rounds_time, cfg.rest_time);
    }
}
