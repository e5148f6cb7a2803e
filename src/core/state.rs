//! Game state and its pure transition logic.
//!
//! `GameState::evaluate` decides what a signal activation means without
//! touching anything; `GameState::apply` then performs the change. The
//! controller translates the resulting [`Outcome`] into surface calls and
//! playback scheduling.

use super::history::{PhaseHistory, PhaseTransition};
use super::phase::Phase;
use super::sequence::Sequence;
use super::signal::SignalId;
use super::speed::PlaybackSpeed;
use crate::config::GameConfig;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What a signal activation means for the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Not awaiting input; nothing changes.
    Ignored,
    /// Correct signal, more of the round to echo.
    Matched,
    /// Correct final signal of the round; the next round is played back.
    RoundCleared,
    /// Correct final signal of the last round.
    Won,
    /// Wrong signal.
    Lost,
}

/// State of a single game, created fresh on every start.
///
/// Invariants: `sequence.len() == total_rounds` and
/// `user_position <= current_round <= total_rounds`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub game_id: Uuid,
    pub current_round: usize,
    pub user_position: usize,
    pub total_rounds: usize,
    pub sequence: Sequence,
    pub speed: PlaybackSpeed,
    pub phase: Phase,
    pub history: PhaseHistory,
}

impl GameState {
    /// Start a game on `sequence`, showing round 0.
    ///
    /// # Example
    ///
    /// ```rust
    /// use simon::core::{GameState, Phase, PlaybackSpeed, SignalId};
    ///
    /// let sequence = [2, 0, 3, 1]
    ///     .into_iter()
    ///     .map(|i| SignalId::new(i).unwrap())
    ///     .collect();
    /// let game = GameState::new(sequence, PlaybackSpeed::from_millis(1000.0));
    ///
    /// assert_eq!(game.total_rounds, 4);
    /// assert_eq!(game.current_round, 0);
    /// assert_eq!(game.phase, Phase::ShowingSequence);
    /// ```
    pub fn new(sequence: Sequence, speed: PlaybackSpeed) -> Self {
        let history =
            PhaseHistory::new().record(PhaseTransition::now(Phase::Idle, Phase::ShowingSequence, 0));
        Self {
            game_id: Uuid::new_v4(),
            current_round: 0,
            user_position: 0,
            total_rounds: sequence.len(),
            sequence,
            speed,
            phase: Phase::ShowingSequence,
            history,
        }
    }

    /// Signal the player must activate next, if input is expected.
    pub fn expected_signal(&self) -> Option<SignalId> {
        if self.phase.accepts_input() {
            self.sequence.get(self.user_position)
        } else {
            None
        }
    }

    /// Judge an activation without changing anything.
    pub fn evaluate(&self, id: SignalId) -> Outcome {
        if !self.phase.accepts_input() {
            return Outcome::Ignored;
        }

        match self.sequence.get(self.user_position) {
            Some(expected) if expected == id => {
                if self.user_position < self.current_round {
                    Outcome::Matched
                } else if self.current_round + 1 >= self.total_rounds {
                    Outcome::Won
                } else {
                    Outcome::RoundCleared
                }
            }
            _ => Outcome::Lost,
        }
    }

    /// Apply an outcome produced by [`GameState::evaluate`].
    pub fn apply(&mut self, outcome: Outcome, config: &GameConfig) {
        match outcome {
            Outcome::Ignored => {}
            Outcome::Matched => self.user_position += 1,
            Outcome::RoundCleared => {
                self.finish_round(config);
                self.user_position = 0;
                self.transition_to(Phase::ShowingSequence);
            }
            Outcome::Won => {
                self.finish_round(config);
                self.transition_to(Phase::Won);
            }
            Outcome::Lost => self.transition_to(Phase::Lost),
        }
    }

    /// Move to `phase`, recording the change. Re-entering the current phase
    /// is not recorded.
    pub fn transition_to(&mut self, phase: Phase) {
        if self.phase == phase {
            return;
        }
        self.history = self
            .history
            .record(PhaseTransition::now(self.phase, phase, self.current_round));
        self.phase = phase;
    }

    fn finish_round(&mut self, config: &GameConfig) {
        self.current_round += 1;
        self.speed = self
            .speed
            .accelerate(config.speed_factor, config.min_speed_ms);
    }
}
