//! Game constants.
//!
//! The game runs on a fixed set of constants. `GameConfig` gathers them in one
//! value so the controller, the playback planner and the tests agree, and so a
//! host embedding the engine can check them with [`GameConfig::validate`].
//!
//! Validation uses Stillwater's `Validation` to report every violation at
//! once rather than stopping at the first.

use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Rounds in a full game.
pub const TOTAL_ROUNDS: usize = 10;
/// Playback interval for round 0, in milliseconds.
pub const INITIAL_SPEED_MS: f64 = 1000.0;
/// Divisor applied to the interval after each cleared round.
pub const SPEED_FACTOR: f64 = 1.02;
/// Fastest interval playback will ever reach, in milliseconds.
pub const MIN_SPEED_MS: f64 = 250.0;
/// Slowest accepted initial interval, in milliseconds.
pub const MAX_SPEED_MS: f64 = 60_000.0;
/// Longest accepted game, in rounds.
pub const MAX_TOTAL_ROUNDS: usize = 1_000;

/// A single broken constraint.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("total_rounds must be at least 1")]
    NoRounds,

    #[error("total_rounds must be at most {max} (got {got})")]
    TooManyRounds { got: usize, max: usize },

    #[error("initial_speed_ms must be positive (got {0})")]
    NonPositiveSpeed(f64),

    #[error("initial_speed_ms must be finite and at most {max} (got {got})")]
    SpeedTooSlow { got: f64, max: f64 },

    #[error("speed_factor must be greater than 1 (got {0})")]
    NonAcceleratingFactor(f64),

    #[error("min_speed_ms must be in (0, initial_speed_ms] (got {min} with initial {initial})")]
    FloorOutOfRange { min: f64, initial: f64 },
}

/// Errors returned by [`GameConfig::validate`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid game configuration: {}", format_violations(.0))]
    Invalid(Vec<ConfigViolation>),
}

fn format_violations(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Fixed game constants.
///
/// # Example
///
/// ```rust
/// use simon::config::GameConfig;
///
/// let config = GameConfig::default();
/// assert_eq!(config.total_rounds, 10);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub total_rounds: usize,
    pub initial_speed_ms: f64,
    pub speed_factor: f64,
    pub min_speed_ms: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            total_rounds: TOTAL_ROUNDS,
            initial_speed_ms: INITIAL_SPEED_MS,
            speed_factor: SPEED_FACTOR,
            min_speed_ms: MIN_SPEED_MS,
        }
    }
}

impl GameConfig {
    /// Check every constraint, accumulating ALL violations.
    ///
    /// The upper bounds keep every playback offset representable as a
    /// [`Duration`](std::time::Duration): the longest round plays for
    /// `MAX_SPEED_MS * (MAX_TOTAL_ROUNDS + 1)`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks = vec![
            check(self.total_rounds >= 1, ConfigViolation::NoRounds),
            check(
                self.total_rounds <= MAX_TOTAL_ROUNDS,
                ConfigViolation::TooManyRounds {
                    got: self.total_rounds,
                    max: MAX_TOTAL_ROUNDS,
                },
            ),
            check(
                self.initial_speed_ms > 0.0,
                ConfigViolation::NonPositiveSpeed(self.initial_speed_ms),
            ),
            // NaN is already reported as non-positive.
            check(
                self.initial_speed_ms.is_nan() || self.initial_speed_ms <= MAX_SPEED_MS,
                ConfigViolation::SpeedTooSlow {
                    got: self.initial_speed_ms,
                    max: MAX_SPEED_MS,
                },
            ),
            check(
                self.speed_factor > 1.0,
                ConfigViolation::NonAcceleratingFactor(self.speed_factor),
            ),
            check(
                self.min_speed_ms > 0.0 && self.min_speed_ms <= self.initial_speed_ms,
                ConfigViolation::FloorOutOfRange {
                    min: self.min_speed_ms,
                    initial: self.initial_speed_ms,
                },
            ),
        ];

        match Validation::all_vec(checks) {
            Validation::Success(_) => Ok(()),
            Validation::Failure(violations) => Err(ConfigError::Invalid(
                violations.iter().cloned().collect(),
            )),
        }
    }
}

fn check(
    holds: bool,
    violation: ConfigViolation,
) -> Validation<(), NonEmptyVec<ConfigViolation>> {
    if holds {
        Validation::success(())
    } else {
        Validation::fail(violation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_game_constants() {
        let config = GameConfig::default();
        assert_eq!(config.total_rounds, 10);
        assert_eq!(config.initial_speed_ms, 1000.0);
        assert_eq!(config.speed_factor, 1.02);
        assert_eq!(config.min_speed_ms, 250.0);
    }

    #[test]
    fn default_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn validation_accumulates_all_violations() {
        let config = GameConfig {
            total_rounds: 0,
            initial_speed_ms: -5.0,
            speed_factor: 0.9,
            min_speed_ms: 0.0,
        };

        let Err(ConfigError::Invalid(violations)) = config.validate() else {
            panic!("Expected invalid configuration");
        };

        assert_eq!(violations.len(), 4);
        assert!(violations.contains(&ConfigViolation::NoRounds));
        assert!(violations.contains(&ConfigViolation::NonPositiveSpeed(-5.0)));
        assert!(violations.contains(&ConfigViolation::NonAcceleratingFactor(0.9)));
        assert!(violations
            .iter()
            .any(|v| matches!(v, ConfigViolation::FloorOutOfRange { .. })));
    }

    #[test]
    fn floor_above_initial_speed_is_rejected() {
        let config = GameConfig {
            min_speed_ms: 2000.0,
            ..GameConfig::default()
        };

        let err = config.validate().unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid(vec![ConfigViolation::FloorOutOfRange {
                min: 2000.0,
                initial: 1000.0
            }])
        );
        assert!(err.to_string().contains("min_speed_ms"));
    }

    #[test]
    fn infinite_speed_is_rejected() {
        let config = GameConfig {
            initial_speed_ms: f64::INFINITY,
            ..GameConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigError::Invalid(vec![ConfigViolation::SpeedTooSlow {
                got: f64::INFINITY,
                max: MAX_SPEED_MS
            }]))
        );
    }

    #[test]
    fn huge_finite_speed_is_rejected() {
        let config = GameConfig {
            initial_speed_ms: 1e300,
            ..GameConfig::default()
        };

        let Err(ConfigError::Invalid(violations)) = config.validate() else {
            panic!("Expected invalid configuration");
        };
        assert_eq!(
            violations,
            vec![ConfigViolation::SpeedTooSlow {
                got: 1e300,
                max: MAX_SPEED_MS
            }]
        );
    }

    #[test]
    fn nan_speed_is_rejected() {
        let config = GameConfig {
            initial_speed_ms: f64::NAN,
            ..GameConfig::default()
        };

        let Err(ConfigError::Invalid(violations)) = config.validate() else {
            panic!("Expected invalid configuration");
        };
        assert!(violations
            .iter()
            .any(|v| matches!(v, ConfigViolation::NonPositiveSpeed(got) if got.is_nan())));
    }

    #[test]
    fn slowest_accepted_speed_is_valid() {
        let config = GameConfig {
            initial_speed_ms: MAX_SPEED_MS,
            total_rounds: MAX_TOTAL_ROUNDS,
            ..GameConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn too_many_rounds_is_rejected() {
        let config = GameConfig {
            total_rounds: MAX_TOTAL_ROUNDS + 1,
            ..GameConfig::default()
        };

        let err = config.validate().unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid(vec![ConfigViolation::TooManyRounds {
                got: MAX_TOTAL_ROUNDS + 1,
                max: MAX_TOTAL_ROUNDS
            }])
        );
        assert!(err.to_string().contains("total_rounds"));
    }

    #[test]
    fn config_serializes_correctly() {
        let config = GameConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
