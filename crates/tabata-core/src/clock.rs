//! Monotonic delta-time source.
//!
//! The engine consumes plain elapsed-seconds deltas and never reads a
//! clock itself. Hosts that drive it in real time use [`MonotonicClock`];
//! tests feed fixed deltas directly.

use std::time::Instant;

/// Yields elapsed seconds between successive calls, measured on the
/// monotonic clock so suspension or scheduler jitter cannot make the
/// workout run long or short against wall-clock time.
#[derive(Debug)]
pub struct MonotonicClock {
    last: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Seconds since the previous call (or since construction).
    /// Never negative.
    pub fn delta(&mut self) -> f64 {
        let now = Instant::now();
        let delta = now.duration_since(self.last).as_secs_f64();
        self.last = now;
        delta
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_is_non_negative_and_advances() {
        let mut clock = MonotonicClock::new();
        let first = clock.delta();
        assert!(first >= 0.0);
        std::thread::sleep(std::time::Duration::from_millis(5));
        let second = clock.delta();
        assert!(second > 0.0);
    }
}
