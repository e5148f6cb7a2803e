//! Game phases.
//!
//! All methods are pure. A phase describes where the game currently sits in
//! `Idle -> ShowingSequence <-> AwaitingInput -> {Won | Lost}`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a game in its lifecycle.
///
/// # Example
///
/// ```rust
/// use simon::core::Phase;
///
/// assert!(Phase::AwaitingInput.is_playing());
/// assert!(Phase::Won.is_final());
/// assert!(Phase::Lost.is_error());
/// assert!(!Phase::Won.is_error());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No game has been started yet.
    #[default]
    Idle,
    /// Playback of the sequence up to the current round is running.
    ShowingSequence,
    /// The player is echoing the sequence.
    AwaitingInput,
    /// Every round was cleared.
    Won,
    /// The player activated the wrong signal.
    Lost,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::ShowingSequence => "ShowingSequence",
            Self::AwaitingInput => "AwaitingInput",
            Self::Won => "Won",
            Self::Lost => "Lost",
        }
    }

    /// Showing the sequence or waiting for the player.
    pub fn is_playing(&self) -> bool {
        matches!(self, Self::ShowingSequence | Self::AwaitingInput)
    }

    /// Terminal phases; only a new start leaves them.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Lost)
    }

    /// Whether signal activations are judged in this phase.
    pub fn accepts_input(&self) -> bool {
        matches!(self, Self::AwaitingInput)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Phase; 5] = [
        Phase::Idle,
        Phase::ShowingSequence,
        Phase::AwaitingInput,
        Phase::Won,
        Phase::Lost,
    ];

    #[test]
    fn names_match_variants() {
        let names: Vec<&str> = ALL.iter().map(Phase::name).collect();
        assert_eq!(
            names,
            vec!["Idle", "ShowingSequence", "AwaitingInput", "Won", "Lost"]
        );
    }

    #[test]
    fn only_won_and_lost_are_final() {
        let finals: Vec<Phase> = ALL.into_iter().filter(Phase::is_final).collect();
        assert_eq!(finals, vec![Phase::Won, Phase::Lost]);
    }

    #[test]
    fn playing_excludes_idle_and_terminal() {
        assert!(!Phase::Idle.is_playing());
        assert!(Phase::ShowingSequence.is_playing());
        assert!(Phase::AwaitingInput.is_playing());
        assert!(!Phase::Won.is_playing());
        assert!(!Phase::Lost.is_playing());
    }

    #[test]
    fn only_awaiting_input_accepts_input() {
        for phase in ALL {
            assert_eq!(phase.accepts_input(), phase == Phase::AwaitingInput);
        }
    }

    #[test]
    fn default_is_idle() {
        assert_eq!(Phase::default(), Phase::Idle);
    }

    #[test]
    fn phase_serializes_by_name() {
        let json = serde_json::to_string(&Phase::AwaitingInput).unwrap();
        assert_eq!(json, "\"AwaitingInput\"");
        let back: Phase = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Phase::AwaitingInput);
    }
}
