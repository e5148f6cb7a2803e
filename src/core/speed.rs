//! Playback speed.
//!
//! Speed is the interval between two highlighted signals during playback.
//! It shrinks after every cleared round and never grows back within a game.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Interval between playback steps, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaybackSpeed(f64);

impl PlaybackSpeed {
    pub fn from_millis(millis: f64) -> Self {
        Self(millis)
    }

    pub fn as_millis(self) -> f64 {
        self.0
    }

    /// Time between two consecutive highlights.
    pub fn interval(self) -> Duration {
        Duration::from_secs_f64(self.0 / 1000.0)
    }

    /// How long a single highlight stays lit: half the interval.
    pub fn pulse(self) -> Duration {
        Duration::from_secs_f64(self.0 / 2000.0)
    }

    /// Next round's speed: divided by `factor`, never below `floor_millis`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use simon::core::PlaybackSpeed;
    ///
    /// let speed = PlaybackSpeed::from_millis(1000.0).accelerate(1.02, 250.0);
    /// assert!((speed.as_millis() - 1000.0 / 1.02).abs() < 1e-9);
    ///
    /// let floored = PlaybackSpeed::from_millis(251.0).accelerate(1.02, 250.0);
    /// assert_eq!(floored.as_millis(), 250.0);
    /// ```
    pub fn accelerate(self, factor: f64, floor_millis: f64) -> Self {
        let next = (self.0 / factor).max(floor_millis);
        // Never slow down, even if the floor sits above the current speed.
        Self(next.min(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_and_pulse_follow_millis() {
        let speed = PlaybackSpeed::from_millis(1000.0);
        assert_eq!(speed.interval(), Duration::from_secs(1));
        assert_eq!(speed.pulse(), Duration::from_millis(500));
    }

    #[test]
    fn accelerate_divides_by_factor() {
        let mut speed = PlaybackSpeed::from_millis(1000.0);
        for n in 1..=10 {
            speed = speed.accelerate(1.02, 250.0);
            let expected = 1000.0 / 1.02f64.powi(n);
            assert!((speed.as_millis() - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn accelerate_stops_at_floor() {
        let mut speed = PlaybackSpeed::from_millis(300.0);
        for _ in 0..100 {
            speed = speed.accelerate(1.02, 250.0);
        }
        assert_eq!(speed.as_millis(), 250.0);
    }

    #[test]
    fn accelerate_never_increases() {
        let speed = PlaybackSpeed::from_millis(100.0);
        let next = speed.accelerate(1.02, 250.0);
        assert_eq!(next.as_millis(), 100.0);
    }
}
