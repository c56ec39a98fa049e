//! Workout engine implementation.
//!
//! The engine is a delta-driven state machine. It owns no clock and no
//! threads - the caller feeds elapsed wall-clock seconds into `tick()`
//! from whatever scheduler it runs on, and a single call may span several
//! phase transitions when the delta is large (e.g. after the host was
//! suspended).
//!
//! ## Phase sequence
//!
//! ```text
//! Idle -> WarmUp -> (Work -> Rest | RestBetweenRounds)* -> Work -> CoolDown -> finished
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = WorkoutEngine::new(Box::new(cues));
//! engine.setup(config, settings);
//! engine.play();
//! // In a loop:
//! engine.tick(clock.delta()); // Returns one Event per transition fired
//! ```

use chrono::Utc;

use super::config::WorkoutConfig;
use super::phase::WorkoutPhase;
use crate::audio::{AudioSettings, CuePlayer, NullCues};
use crate::events::Event;
use crate::stats::CompletedWorkout;

/// Slack applied to floating-point time comparisons inside the tick loop.
const TIME_EPSILON: f64 = 1e-4;

/// Core workout engine.
///
/// Owns all workout-progress state exclusively; reads the config and
/// audio settings handed to `setup` but never mutates them. Expected to
/// be driven from a single thread - commands and `tick` must not race,
/// so callers dispatching from multiple threads must serialize access.
pub struct WorkoutEngine {
    config: Option<WorkoutConfig>,
    settings: AudioSettings,
    cues: Box<dyn CuePlayer>,
    phase: WorkoutPhase,
    /// Seconds left in the current phase.
    time_remaining: f64,
    /// Duration of the current phase, for the progress ratio. A
    /// zero-length phase is recorded as 1 so the ratio stays defined.
    total_time: f64,
    is_active: bool,
    is_finished: bool,
    current_set: u32,
    current_round: u32,
    /// Seconds consumed across the whole run; reaches exactly
    /// `config.total_duration()` when the workout finishes.
    elapsed: f64,
    /// Integer ceiling of `time_remaining` after the previous
    /// consumption, so each countdown beep fires exactly once.
    last_integer_time: i64,
}

impl Default for WorkoutEngine {
    fn default() -> Self {
        Self::new(Box::new(NullCues))
    }
}

impl WorkoutEngine {
    /// Create an engine in the `Idle` state with the given cue sink.
    pub fn new(cues: Box<dyn CuePlayer>) -> Self {
        Self {
            config: None,
            settings: AudioSettings::default(),
            cues,
            phase: WorkoutPhase::Idle,
            time_remaining: 0.0,
            total_time: 1.0,
            is_active: false,
            is_finished: false,
            current_set: 1,
            current_round: 1,
            elapsed: 0.0,
            last_integer_time: 0,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn phase(&self) -> WorkoutPhase {
        self.phase
    }

    pub fn time_remaining(&self) -> f64 {
        self.time_remaining
    }

    pub fn total_time(&self) -> f64 {
        self.total_time
    }

    /// 0.0 .. 1.0 fraction of the current phase still remaining.
    pub fn progress(&self) -> f64 {
        (self.time_remaining / self.total_time).clamp(0.0, 1.0)
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn is_finished(&self) -> bool {
        self.is_finished
    }

    pub fn current_set(&self) -> u32 {
        self.current_set
    }

    pub fn current_round(&self) -> u32 {
        self.current_round
    }

    pub fn total_sets(&self) -> u32 {
        self.config.map_or(0, |c| c.sets)
    }

    pub fn total_rounds(&self) -> u32 {
        self.config.map_or(0, |c| c.rounds)
    }

    /// Seconds consumed by `tick` since `setup`.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            phase: self.phase,
            remaining_secs: self.time_remaining,
            total_secs: self.total_time,
            progress: self.progress(),
            set: self.current_set,
            round: self.current_round,
            is_active: self.is_active,
            is_finished: self.is_finished,
            at: Utc::now(),
        }
    }

    /// Summary of the finished run. `None` until the workout completes,
    /// and `None` again after `stop()`.
    pub fn completed_workout(&self) -> Option<CompletedWorkout> {
        if !self.is_finished {
            return None;
        }
        self.config.as_ref().map(CompletedWorkout::from_config)
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// (Re)initialize for a fresh run of `config`, entering the warm-up
    /// paused. No cues fire until `play()`; calling `setup` again simply
    /// restarts the configuration.
    pub fn setup(&mut self, config: WorkoutConfig, settings: AudioSettings) {
        let warm_up = config.phase_duration(WorkoutPhase::WarmUp);
        self.settings = settings;
        self.config = Some(config);
        self.phase = WorkoutPhase::WarmUp;
        self.time_remaining = warm_up;
        self.total_time = phase_total(warm_up);
        self.is_active = false;
        self.is_finished = false;
        self.current_set = 1;
        self.current_round = 1;
        self.elapsed = 0.0;
        self.last_integer_time = ceil_secs(warm_up);
    }

    /// Start or resume the workout. Announces the warm-up when starting
    /// from the very beginning of the phase; resuming mid-phase after
    /// `pause()` stays silent. No-op before `setup`.
    pub fn play(&mut self) -> Option<Event> {
        if self.config.is_none()
            || self.phase == WorkoutPhase::Idle
            || self.is_finished
            || self.is_active
        {
            return None;
        }
        let at_phase_start = (self.time_remaining - self.total_time).abs() < TIME_EPSILON;
        if at_phase_start && self.phase == WorkoutPhase::WarmUp {
            self.speak_phase();
        }
        self.is_active = true;
        Some(Event::WorkoutStarted {
            phase: self.phase,
            remaining_secs: self.time_remaining,
            at: Utc::now(),
        })
    }

    /// Pause, preserving phase, time and counters exactly for a later
    /// `play()`.
    pub fn pause(&mut self) -> Option<Event> {
        if !self.is_active {
            return None;
        }
        self.is_active = false;
        Some(Event::WorkoutPaused {
            remaining_secs: self.time_remaining,
            at: Utc::now(),
        })
    }

    /// Abandon the run and return to `Idle`. No summary is produced
    /// after a stop; a second `stop()` is a no-op.
    pub fn stop(&mut self) -> Option<Event> {
        if self.phase == WorkoutPhase::Idle {
            return None;
        }
        self.is_active = false;
        self.is_finished = false;
        self.phase = WorkoutPhase::Idle;
        self.time_remaining = 0.0;
        self.total_time = 1.0;
        Some(Event::WorkoutStopped { at: Utc::now() })
    }

    /// Force the current phase to its end, firing the same transition and
    /// announcement as if the remaining time had been ticked away.
    pub fn skip(&mut self) -> Option<Event> {
        if self.config.is_none() || self.phase == WorkoutPhase::Idle || self.is_finished {
            return None;
        }
        self.time_remaining = 0.0;
        self.advance()
    }

    /// Advance the engine by `delta` elapsed seconds.
    ///
    /// A delta larger than the current phase's remaining time spills into
    /// the following phases within this same call, so no wall-clock time
    /// is lost across long gaps between ticks; any delta left over once
    /// the workout finishes is discarded. Returns one event per phase
    /// transition that fired. Calls while inactive, and negative or
    /// non-finite deltas, are ignored.
    pub fn tick(&mut self, delta: f64) -> Vec<Event> {
        let mut events = Vec::new();
        if !self.is_active || !delta.is_finite() || delta <= 0.0 {
            return events;
        }
        let mut outstanding = delta;
        while outstanding > TIME_EPSILON && !self.is_finished {
            if self.time_remaining > outstanding + TIME_EPSILON {
                self.time_remaining -= outstanding;
                self.elapsed += outstanding;
                outstanding = 0.0;
                self.emit_countdown();
            } else {
                // Phase exhausted: consume what is left and roll over.
                outstanding -= self.time_remaining;
                self.elapsed += self.time_remaining;
                self.time_remaining = 0.0;
                self.emit_countdown();
                if let Some(event) = self.advance() {
                    events.push(event);
                }
            }
        }
        events
    }

    // ── Internal ─────────────────────────────────────────────────────

    /// Perform the transition that fires when the current phase's time
    /// reaches zero.
    fn advance(&mut self) -> Option<Event> {
        let config = self.config?;
        match self.phase {
            WorkoutPhase::Idle => None,

            WorkoutPhase::WarmUp => self.enter(WorkoutPhase::Work),

            WorkoutPhase::Work => {
                if self.current_set == config.sets && self.current_round == config.rounds {
                    self.enter(WorkoutPhase::CoolDown)
                } else if self.current_set == config.sets {
                    self.enter(WorkoutPhase::RestBetweenRounds)
                } else {
                    self.enter(WorkoutPhase::Rest)
                }
            }

            WorkoutPhase::Rest => {
                if self.current_set < config.sets {
                    self.current_set += 1;
                    self.enter(WorkoutPhase::Work)
                } else if self.current_round < config.rounds {
                    // Round boundaries normally go through
                    // RestBetweenRounds; recover the same way regardless.
                    self.current_round += 1;
                    self.current_set = 1;
                    self.enter(WorkoutPhase::Work)
                } else {
                    self.enter(WorkoutPhase::CoolDown)
                }
            }

            WorkoutPhase::RestBetweenRounds => {
                self.current_round += 1;
                self.current_set = 1;
                self.enter(WorkoutPhase::Work)
            }

            WorkoutPhase::CoolDown => self.finish(),
        }
    }

    fn enter(&mut self, phase: WorkoutPhase) -> Option<Event> {
        let duration = self.config.map_or(0.0, |c| c.phase_duration(phase));
        self.phase = phase;
        self.time_remaining = duration;
        self.total_time = phase_total(duration);
        self.last_integer_time = ceil_secs(duration);
        self.speak_phase();
        Some(Event::PhaseStarted {
            phase,
            set: self.current_set,
            round: self.current_round,
            duration_secs: duration,
            at: Utc::now(),
        })
    }

    fn finish(&mut self) -> Option<Event> {
        self.is_finished = true;
        self.is_active = false;
        self.time_remaining = 0.0;
        if self.settings.voice_cues_enabled() {
            self.cues.speak("Workout Completed");
        }
        Some(Event::WorkoutFinished { at: Utc::now() })
    }

    fn speak_phase(&self) {
        if !self.settings.voice_cues_enabled() {
            return;
        }
        if let Some(text) = self.phase.announcement() {
            self.cues.speak(text);
        }
    }

    /// Fire one beep per integer-second boundary crossed by the previous
    /// consumption, for boundaries inside the countdown window. Crossing
    /// several boundaries in one consumption fires one beep each; staying
    /// within the same second fires none.
    fn emit_countdown(&mut self) {
        let current = ceil_secs(self.time_remaining);
        if current == self.last_integer_time {
            return;
        }
        if self.settings.countdown_cues_enabled() {
            let threshold = i64::from(self.settings.countdown_duration);
            for n in (current..self.last_integer_time).rev() {
                if n > 0 && n <= threshold {
                    self.cues.play_beep();
                }
            }
        }
        self.last_integer_time = current;
    }
}

fn phase_total(duration: f64) -> f64 {
    if duration > 0.0 {
        duration
    } else {
        1.0
    }
}

fn ceil_secs(secs: f64) -> i64 {
    secs.ceil() as i64
}
