//! Core game types and logic.
//!
//! This module contains the pure core of the game:
//! - Signals and sequence generation
//! - Playback speed and its acceleration
//! - Phases, phase history and the per-game state
//!
//! Nothing in here touches a surface, a clock or a runtime. Randomness is
//! always supplied by the caller.

mod history;
mod phase;
mod sequence;
mod signal;
mod speed;
mod state;

pub use history::{PhaseHistory, PhaseTransition};
pub use phase::Phase;
pub use sequence::{generate_sequence, Sequence};
pub use signal::{SignalError, SignalId, SIGNAL_COUNT};
pub use speed::PlaybackSpeed;
pub use state::{GameState, Outcome};
