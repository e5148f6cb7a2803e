//! Phase transition history.
//!
//! Every game keeps an immutable log of the phases it moved through, which
//! hosts use for diagnostics and tests use to check the lifecycle.

use super::phase::Phase;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single phase change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhaseTransition {
    /// Phase being left
    pub from: Phase,
    /// Phase being entered
    pub to: Phase,
    /// Current round at the moment of the change
    pub round: usize,
    /// When the change happened
    pub timestamp: DateTime<Utc>,
}

impl PhaseTransition {
    pub fn now(from: Phase, to: Phase, round: usize) -> Self {
        Self {
            from,
            to,
            round,
            timestamp: Utc::now(),
        }
    }
}

/// Ordered history of phase changes.
///
/// `record` returns a new history and leaves the receiver untouched.
///
/// # Example
///
/// ```rust
/// use simon::core::{Phase, PhaseHistory, PhaseTransition};
///
/// let history = PhaseHistory::new()
///     .record(PhaseTransition::now(Phase::Idle, Phase::ShowingSequence, 0))
///     .record(PhaseTransition::now(Phase::ShowingSequence, Phase::AwaitingInput, 0));
///
/// assert_eq!(
///     history.path(),
///     vec![Phase::Idle, Phase::ShowingSequence, Phase::AwaitingInput]
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PhaseHistory {
    transitions: Vec<PhaseTransition>,
}

impl PhaseHistory {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: PhaseTransition) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Phases traversed: the first `from`, then each `to`.
    pub fn path(&self) -> Vec<Phase> {
        self.transitions
            .first()
            .map(|first| first.from)
            .into_iter()
            .chain(self.transitions.iter().map(|t| t.to))
            .collect()
    }

    /// Elapsed time between the first and last recorded change.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Rounds the player echoed completely, the winning round included.
    pub fn rounds_cleared(&self) -> usize {
        self.transitions
            .iter()
            .filter(|t| {
                t.from == Phase::AwaitingInput
                    && matches!(t.to, Phase::ShowingSequence | Phase::Won)
            })
            .count()
    }

    pub fn last(&self) -> Option<&PhaseTransition> {
        self.transitions.last()
    }

    pub fn transitions(&self) -> &[PhaseTransition] {
        &self.transitions
    }
}
