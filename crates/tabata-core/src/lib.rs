//! # Tabata Core Library
//!
//! This library provides the core business logic for the Tabata interval
//! training timer. All workout behavior lives here; frontends (the CLI
//! binary, or any GUI host) are thin layers over the same core library.
//!
//! ## Architecture
//!
//! - **Workout Engine**: A delta-driven state machine that requires the
//!   caller to feed elapsed wall-clock time into `tick()` -- no internal
//!   threads or timers
//! - **Configuration**: Set/round counts and phase durations, with
//!   TOML-based persistence of user defaults
//! - **Audio**: An injected cue capability for phase announcements and
//!   countdown beeps; the engine never touches audio hardware
//! - **Statistics**: Completed-workout summary derivation
//!
//! ## Key Components
//!
//! - [`WorkoutEngine`]: Core workout state machine
//! - [`WorkoutConfig`]: Immutable per-run workout layout
//! - [`CompletedWorkout`]: Summary derived once a run finishes
//! - [`Config`]: Application configuration management

pub mod audio;
pub mod clock;
pub mod error;
pub mod events;
pub mod format;
pub mod stats;
pub mod storage;
pub mod workout;

pub use audio::{AudioSettings, CuePlayer, NullCues};
pub use clock::MonotonicClock;
pub use error::{ConfigError, CoreError, Result, ValidationError};
pub use events::Event;
pub use stats::CompletedWorkout;
pub use storage::Config;
pub use workout::{WorkoutConfig, WorkoutEngine, WorkoutPhase};
