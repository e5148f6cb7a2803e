//! Signal identifiers.
//!
//! A signal is one of the fixed colored controls the player watches and
//! presses. Identifiers are always in range once constructed.

use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Number of controls on the board.
pub const SIGNAL_COUNT: u8 = 4;

/// Errors raised when converting raw indices into signals.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SignalError {
    #[error("Signal {index} is out of range (expected 0..{count})")]
    OutOfRange { index: u8, count: u8 },
}

/// Identifier of a single control, in `0..SIGNAL_COUNT`.
///
/// # Example
///
/// ```rust
/// use simon::core::{SignalId, SIGNAL_COUNT};
///
/// let green = SignalId::new(0).unwrap();
/// assert_eq!(green.index(), 0);
/// assert!(SignalId::new(SIGNAL_COUNT).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SignalId(u8);

impl SignalId {
    /// Create a signal from a raw control index.
    pub fn new(index: u8) -> Result<Self, SignalError> {
        if index < SIGNAL_COUNT {
            Ok(Self(index))
        } else {
            Err(SignalError::OutOfRange {
                index,
                count: SIGNAL_COUNT,
            })
        }
    }

    /// Position of the control on the board.
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    /// Every signal on the board, in board order.
    pub fn all() -> impl Iterator<Item = SignalId> {
        (0..SIGNAL_COUNT).map(SignalId)
    }
}

impl TryFrom<u8> for SignalId {
    type Error = SignalError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

impl From<SignalId> for u8 {
    fn from(id: SignalId) -> Self {
        id.0
    }
}

impl fmt::Display for SignalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "signal {}", self.0)
    }
}

/// Uniform draw over the board.
impl Distribution<SignalId> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> SignalId {
        SignalId(rng.gen_range(0..SIGNAL_COUNT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn new_accepts_board_indices() {
        for index in 0..SIGNAL_COUNT {
            assert_eq!(SignalId::new(index).unwrap().index(), usize::from(index));
        }
    }

    #[test]
    fn new_rejects_out_of_range() {
        let err = SignalId::new(SIGNAL_COUNT).unwrap_err();
        assert_eq!(
            err,
            SignalError::OutOfRange {
                index: SIGNAL_COUNT,
                count: SIGNAL_COUNT
            }
        );
        assert_eq!(err.to_string(), "Signal 4 is out of range (expected 0..4)");
    }

    #[test]
    fn all_lists_every_control_once() {
        let all: Vec<u8> = SignalId::all().map(u8::from).collect();
        assert_eq!(all, vec![0, 1, 2, 3]);
    }

    #[test]
    fn random_draws_stay_on_board() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            let id: SignalId = rng.gen();
            assert!(id.index() < usize::from(SIGNAL_COUNT));
        }
    }

    #[test]
    fn deserialization_rejects_out_of_range() {
        assert!(serde_json::from_str::<SignalId>("9").is_err());
        let id: SignalId = serde_json::from_str("3").unwrap();
        assert_eq!(u8::from(id), 3);
        assert_eq!(serde_json::to_string(&id).unwrap(), "3");
    }
}
