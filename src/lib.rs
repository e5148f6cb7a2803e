//! Simon: a memory game engine
//!
//! The game shows a growing sequence of colored signals; the player repeats it
//! by activating the matching controls. Ten correct rounds win, one wrong
//! signal loses, and playback speeds up after every cleared round.
//!
//! The crate follows a "pure core, imperative shell" layout:
//!
//! - [`core`]: signals, sequences, speed, phases and the per-game state,
//!   all pure
//! - [`controller`]: owns the game, drives a [`Surface`](surface::Surface) and
//!   keeps one playback cycle alive at a time
//! - [`schedule`]: cancellable playback cycles, on virtual time or tokio
//! - [`driver`]: async run loop feeding the controller from a channel
//!
//! # Example
//!
//! ```rust
//! use simon::builder::ControllerBuilder;
//! use simon::core::Phase;
//! use simon::schedule::ManualScheduler;
//! use simon::surface::{RecordingSurface, RoundLabel};
//! use std::time::Duration;
//!
//! let mut controller = ControllerBuilder::new()
//!     .surface(RecordingSurface::default())
//!     .scheduler(ManualScheduler::new())
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! controller.start();
//! controller.advance(Duration::from_millis(1500));
//! assert_eq!(controller.phase(), Phase::AwaitingInput);
//!
//! let first = controller.game().unwrap().sequence.get(0).unwrap();
//! controller.on_signal_activated(first);
//! assert_eq!(controller.surface().round_label(), Some(RoundLabel::Round(1)));
//! ```

pub mod builder;
pub mod config;
pub mod controller;
pub mod core;
pub mod driver;
pub mod schedule;
pub mod surface;

// Re-export commonly used types
pub use builder::{BuildError, ControllerBuilder};
pub use config::GameConfig;
pub use controller::GameController;
pub use core::{GameState, Phase, SignalId};
pub use surface::{RoundLabel, Surface};
