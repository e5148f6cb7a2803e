//! Signal sequences and their generation.

use super::signal::SignalId;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Ordered list of signals generated at game start, fixed for the whole game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sequence(Vec<SignalId>);

impl Sequence {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Signal at `position`, if the sequence is that long.
    pub fn get(&self, position: usize) -> Option<SignalId> {
        self.0.get(position).copied()
    }

    pub fn as_slice(&self) -> &[SignalId] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = SignalId> + '_ {
        self.0.iter().copied()
    }
}

impl From<Vec<SignalId>> for Sequence {
    fn from(signals: Vec<SignalId>) -> Self {
        Self(signals)
    }
}

impl FromIterator<SignalId> for Sequence {
    fn from_iter<I: IntoIterator<Item = SignalId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Generate `length` independent, uniformly drawn signals.
///
/// The random source is supplied by the caller so tests can seed it.
///
/// # Example
///
/// ```rust
/// use simon::core::generate_sequence;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let first = generate_sequence(&mut rng, 10);
/// let again = generate_sequence(&mut StdRng::seed_from_u64(42), 10);
///
/// assert_eq!(first.len(), 10);
/// assert_eq!(first, again);
/// ```
pub fn generate_sequence<R: Rng>(rng: &mut R, length: usize) -> Sequence {
    (0..length).map(|_| rng.gen::<SignalId>()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SIGNAL_COUNT;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn generated_sequence_has_requested_length() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(generate_sequence(&mut rng, 10).len(), 10);
        assert!(generate_sequence(&mut rng, 0).is_empty());
    }

    #[test]
    fn same_seed_gives_same_sequence() {
        let a = generate_sequence(&mut StdRng::seed_from_u64(99), 32);
        let b = generate_sequence(&mut StdRng::seed_from_u64(99), 32);
        assert_eq!(a, b);
    }

    #[test]
    fn long_sequences_use_every_signal() {
        let sequence = generate_sequence(&mut StdRng::seed_from_u64(5), 400);
        for id in SignalId::all() {
            assert!(sequence.iter().any(|s| s == id), "{id} never drawn");
        }
        assert!(sequence
            .iter()
            .all(|s| s.index() < usize::from(SIGNAL_COUNT)));
    }

    #[test]
    fn get_past_end_is_none() {
        let sequence: Sequence = vec![SignalId::new(1).unwrap()].into();
        assert_eq!(sequence.get(0), SignalId::new(1).ok());
        assert_eq!(sequence.get(1), None);
    }

    #[test]
    fn sequence_serializes_as_plain_list() {
        let sequence: Sequence = [2, 0, 3]
            .into_iter()
            .map(|i| SignalId::new(i).unwrap())
            .collect();
        let json = serde_json::to_string(&sequence).unwrap();
        assert_eq!(json, "[2,0,3]");
        let back: Sequence = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sequence);
    }
}
