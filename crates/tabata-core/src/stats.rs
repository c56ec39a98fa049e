//! Completed-workout statistics.
//!
//! A summary is derived once from the configuration that drove the run.
//! Storing it anywhere is the host's concern; the engine hands the value
//! over and keeps nothing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::workout::WorkoutConfig;

/// Estimated energy burn, roughly 9 kcal per workout minute.
const KCAL_PER_SECOND: f64 = 0.15;

/// Aggregated record of one finished workout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletedWorkout {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    /// Durations in seconds.
    pub duration: f64,
    pub total_warm_up: f64,
    pub total_work: f64,
    pub total_rest: f64,
    pub total_cool_down: f64,
    /// Work segments performed (`sets x rounds`).
    pub reps: u32,
    pub rounds: u32,
    /// Estimated energy burn in kilocalories.
    pub calories: u32,
}

impl CompletedWorkout {
    /// Derive the summary for a finished run of `config`.
    ///
    /// Ordinary and between-rounds rest both count toward `total_rest`:
    /// every work segment except the very last is followed by one of
    /// them, so the four phase totals sum exactly to `duration`.
    pub fn from_config(config: &WorkoutConfig) -> Self {
        let sets = f64::from(config.sets);
        let rounds = f64::from(config.rounds);
        let duration = config.total_duration();
        let total_work = config.work_time * sets * rounds;
        let total_rest = config.rest_time * rounds * (sets - 1.0)
            + config.rest_between_rounds_time * (rounds - 1.0);
        Self {
            id: Uuid::new_v4(),
            date: Utc::now(),
            duration,
            total_warm_up: config.warm_up_time,
            total_work,
            total_rest,
            total_cool_down: config.cool_down_time,
            reps: config.total_reps(),
            rounds: config.rounds,
            calories: (duration * KCAL_PER_SECOND) as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> WorkoutConfig {
        WorkoutConfig {
            sets: 2,
            rounds: 2,
            warm_up_time: 5.0,
            work_time: 10.0,
            rest_time: 5.0,
            rest_between_rounds_time: 5.0,
            cool_down_time: 5.0,
        }
    }

    #[test]
    fn aggregates_per_phase_seconds() {
        let summary = CompletedWorkout::from_config(&config());
        assert_eq!(summary.total_warm_up, 5.0);
        assert_eq!(summary.total_work, 40.0);
        // Three rests of 5s: after set 1 round 1, between rounds, after
        // set 1 round 2 (sets x rounds - 1 in total).
        assert_eq!(summary.total_rest, 15.0);
        assert_eq!(summary.total_cool_down, 5.0);
        assert_eq!(summary.reps, 4);
        assert_eq!(summary.rounds, 2);
    }

    #[test]
    fn phase_totals_sum_to_duration() {
        let summary = CompletedWorkout::from_config(&config());
        assert_eq!(summary.duration, config().total_duration());
        assert_eq!(
            summary.duration,
            summary.total_warm_up + summary.total_work + summary.total_rest
                + summary.total_cool_down
        );
    }

    #[test]
    fn distinct_between_rounds_rest_counts_as_rest() {
        let mut cfg = config();
        cfg.rest_between_rounds_time = 20.0;
        let summary = CompletedWorkout::from_config(&cfg);
        assert_eq!(summary.total_rest, 10.0 + 20.0);
        assert_eq!(
            summary.duration,
            summary.total_warm_up + summary.total_work + summary.total_rest
                + summary.total_cool_down
        );
    }

    #[test]
    fn single_rep_workout_has_no_rest() {
        let cfg = WorkoutConfig {
            sets: 1,
            rounds: 1,
            ..config()
        };
        let summary = CompletedWorkout::from_config(&cfg);
        assert_eq!(summary.total_rest, 0.0);
        assert_eq!(summary.duration, 5.0 + 10.0 + 5.0);
    }

    #[test]
    fn estimates_calories_from_duration() {
        let cfg = WorkoutConfig {
            sets: 1,
            rounds: 1,
            warm_up_time: 60.0,
            work_time: 480.0,
            rest_time: 0.0,
            rest_between_rounds_time: 0.0,
            cool_down_time: 60.0,
        };
        // 600s at ~9 kcal/min.
        assert_eq!(CompletedWorkout::from_config(&cfg).calories, 90);
    }
}
