//! Audio cue capability and user audio preferences.
//!
//! The engine announces phase transitions and counts down phase endings
//! through a [`CuePlayer`] injected at construction. Calls are
//! fire-and-forget notifications; implementations must not block, and the
//! engine never retries a failed cue.

use serde::{Deserialize, Serialize};

/// Sink for workout cues.
///
/// How cues are realized is the host's concern -- speech synthesis, a
/// recorded sample, a terminal bell, or nothing at all.
pub trait CuePlayer {
    /// Announce a phase transition (e.g. "Work", "Cool Down").
    fn speak(&self, text: &str);

    /// Play a single countdown beep.
    fn play_beep(&self);
}

/// Cue sink that discards everything. Used for muted runs and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCues;

impl CuePlayer for NullCues {
    fn speak(&self, _text: &str) {}
    fn play_beep(&self) {}
}

/// User audio preferences.
///
/// The engine reads the enablement flags and the countdown threshold;
/// `volume` and `haptics_enabled` are carried for the host audio layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AudioSettings {
    #[serde(default = "default_true")]
    pub sound_enabled: bool,
    #[serde(default = "default_true")]
    pub countdown_enabled: bool,
    #[serde(default = "default_true")]
    pub voice_guide_enabled: bool,
    #[serde(default = "default_true")]
    pub haptics_enabled: bool,
    /// Playback volume, `0.0..=1.0`.
    #[serde(default = "default_volume")]
    pub volume: f64,
    /// How many seconds before a phase ends the countdown beeps cover.
    #[serde(default = "default_countdown_duration")]
    pub countdown_duration: u32,
}

fn default_true() -> bool {
    true
}
fn default_volume() -> f64 {
    1.0
}
fn default_countdown_duration() -> u32 {
    3
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            countdown_enabled: true,
            voice_guide_enabled: true,
            haptics_enabled: true,
            volume: 1.0,
            countdown_duration: 3,
        }
    }
}

impl AudioSettings {
    /// Whether spoken phase announcements should fire.
    pub fn voice_cues_enabled(&self) -> bool {
        self.sound_enabled && self.voice_guide_enabled
    }

    /// Whether countdown beeps should fire.
    pub fn countdown_cues_enabled(&self) -> bool {
        self.sound_enabled && self.countdown_enabled
    }

    /// Settings with all audio off.
    pub fn muted() -> Self {
        Self {
            sound_enabled: false,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let settings = AudioSettings::default();
        assert!(settings.sound_enabled);
        assert!(settings.countdown_enabled);
        assert!(settings.voice_guide_enabled);
        assert!(settings.haptics_enabled);
        assert!((settings.volume - 1.0).abs() < 0.001);
        assert_eq!(settings.countdown_duration, 3);
    }

    #[test]
    fn muted_disables_all_cues() {
        let settings = AudioSettings::muted();
        assert!(!settings.voice_cues_enabled());
        assert!(!settings.countdown_cues_enabled());
    }

    #[test]
    fn sound_flag_gates_both_cue_kinds() {
        let settings = AudioSettings {
            sound_enabled: false,
            ..AudioSettings::default()
        };
        assert!(!settings.voice_cues_enabled());
        assert!(!settings.countdown_cues_enabled());

        let voice_off = AudioSettings {
            voice_guide_enabled: false,
            ..AudioSettings::default()
        };
        assert!(!voice_off.voice_cues_enabled());
        assert!(voice_off.countdown_cues_enabled());
    }

    #[test]
    fn deserializes_with_missing_fields() {
        let settings: AudioSettings = toml::from_str("sound_enabled = false").unwrap();
        assert!(!settings.sound_enabled);
        assert!(settings.countdown_enabled);
        assert_eq!(settings.countdown_duration, 3);
    }
}
