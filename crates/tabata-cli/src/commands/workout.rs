use std::io::Write;
use std::thread;
use std::time::Duration;

use clap::{Args, Subcommand};
use tabata_core::format::format_duration;
use tabata_core::{
    AudioSettings, CompletedWorkout, Config, CuePlayer, Event, MonotonicClock, NullCues,
    WorkoutConfig, WorkoutEngine, WorkoutPhase,
};

#[derive(Args)]
pub struct WorkoutOverrides {
    /// Work/rest repetitions per round
    #[arg(long)]
    sets: Option<u32>,
    /// Number of rounds
    #[arg(long)]
    rounds: Option<u32>,
    /// Warm-up seconds
    #[arg(long)]
    warm_up: Option<f64>,
    /// Work seconds per set
    #[arg(long)]
    work: Option<f64>,
    /// Rest seconds between sets
    #[arg(long)]
    rest: Option<f64>,
    /// Rest seconds between rounds
    #[arg(long)]
    rest_rounds: Option<f64>,
    /// Cool-down seconds
    #[arg(long)]
    cool_down: Option<f64>,
}

impl WorkoutOverrides {
    /// Apply flag overrides on top of the configured defaults.
    fn apply(&self, mut config: WorkoutConfig) -> WorkoutConfig {
        if let Some(sets) = self.sets {
            config.sets = sets;
        }
        if let Some(rounds) = self.rounds {
            config.rounds = rounds;
        }
        if let Some(warm_up) = self.warm_up {
            config.warm_up_time = warm_up;
        }
        if let Some(work) = self.work {
            config.work_time = work;
        }
        if let Some(rest) = self.rest {
            config.rest_time = rest;
            if self.rest_rounds.is_none() {
                config.rest_between_rounds_time = rest;
            }
        }
        if let Some(rest_rounds) = self.rest_rounds {
            config.rest_between_rounds_time = rest_rounds;
        }
        if let Some(cool_down) = self.cool_down {
            config.cool_down_time = cool_down;
        }
        config
    }
}

#[derive(Subcommand)]
pub enum WorkoutAction {
    /// Run a workout in the terminal
    Run {
        #[command(flatten)]
        overrides: WorkoutOverrides,
        /// Disable all audio cues
        #[arg(long)]
        mute: bool,
        /// Print state snapshots and events as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the phase plan and expected totals without running
    Plan {
        #[command(flatten)]
        overrides: WorkoutOverrides,
        /// Print the expected summary as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Cue sink for terminal runs: announcements go to stdout, countdown
/// beeps ring the terminal bell.
struct TerminalCues;

impl CuePlayer for TerminalCues {
    fn speak(&self, text: &str) {
        println!(">> {text}");
    }

    fn play_beep(&self) {
        print!("\x07");
        let _ = std::io::stdout().flush();
    }
}

pub fn run(action: WorkoutAction) -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load_or_default();
    match action {
        WorkoutAction::Run {
            overrides,
            mute,
            json,
        } => {
            let settings = if mute {
                AudioSettings::muted()
            } else {
                cfg.audio
            };
            run_workout(overrides.apply(cfg.workout), settings, json)
        }
        WorkoutAction::Plan { overrides, json } => print_plan(&overrides.apply(cfg.workout), json),
    }
}

fn run_workout(
    config: WorkoutConfig,
    settings: AudioSettings,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    config.validate()?;
    let cues: Box<dyn CuePlayer> = if json {
        Box::new(NullCues)
    } else {
        Box::new(TerminalCues)
    };
    let mut engine = WorkoutEngine::new(cues);
    engine.setup(config, settings);
    engine.play();
    if json {
        println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
    } else {
        println!(
            "{} - {}",
            engine.phase(),
            format_duration(engine.time_remaining())
        );
    }

    let mut clock = MonotonicClock::new();
    while !engine.is_finished() {
        thread::sleep(Duration::from_millis(100));
        for event in engine.tick(clock.delta()) {
            if json {
                println!("{}", serde_json::to_string_pretty(&event)?);
            } else {
                print_event(&engine, &event);
            }
        }
    }

    if let Some(summary) = engine.completed_workout() {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }
    Ok(())
}

fn print_event(engine: &WorkoutEngine, event: &Event) {
    match event {
        Event::PhaseStarted {
            phase,
            set,
            round,
            duration_secs,
            ..
        } => {
            let time = format_duration(*duration_secs);
            match phase {
                WorkoutPhase::Work => println!(
                    "{phase} (set {set}/{}, round {round}/{}) - {time}",
                    engine.total_sets(),
                    engine.total_rounds()
                ),
                _ => println!("{phase} - {time}"),
            }
        }
        Event::WorkoutFinished { .. } => println!("Workout complete."),
        _ => {}
    }
}

fn print_plan(config: &WorkoutConfig, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    config.validate()?;
    let summary = CompletedWorkout::from_config(config);
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }
    println!(
        "Warm Up                 {}",
        format_duration(config.warm_up_time)
    );
    println!(
        "Work      {:2} x {:2}       {} each",
        config.sets,
        config.rounds,
        format_duration(config.work_time)
    );
    println!(
        "Rest                    {} each",
        format_duration(config.rest_time)
    );
    if config.rounds > 1 {
        println!(
            "Rest Rounds             {} each",
            format_duration(config.rest_between_rounds_time)
        );
    }
    println!(
        "Cool Down               {}",
        format_duration(config.cool_down_time)
    );
    println!(
        "Total                   {}",
        format_duration(config.total_duration())
    );
    Ok(())
}
