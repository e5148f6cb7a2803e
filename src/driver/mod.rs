//! Async run loop around the controller.
//!
//! The driver owns a [`GameController`] backed by a [`TokioScheduler`] and
//! serialises every input (player commands and playback ticks alike) through
//! one channel, so the controller only ever sees one call at a time.
//!
//! # Example
//!
//! ```rust,no_run
//! use simon::config::GameConfig;
//! use simon::driver::GameDriver;
//! use simon::surface::RecordingSurface;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let (driver, handle) = GameDriver::new(RecordingSurface::default(), GameConfig::default(), None)?;
//! let task = tokio::spawn(driver.run());
//!
//! handle.start()?;
//! // ... forward player activations with handle.activate(id)
//! handle.shutdown()?;
//! let controller = task.await?;
//! # let _ = controller;
//! # Ok(())
//! # }
//! ```

pub mod error;

pub use error::DriverError;

use crate::builder::{BuildError, ControllerBuilder};
use crate::config::GameConfig;
use crate::controller::GameController;
use crate::core::{GameState, SignalId};
use crate::schedule::{PlaybackTick, TokioScheduler};
use crate::surface::Surface;
use rand::rngs::StdRng;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

/// Inputs processed by the driver loop, in arrival order.
#[derive(Debug)]
pub enum Command {
    Start,
    Activate(SignalId),
    Tick(PlaybackTick),
    Snapshot(oneshot::Sender<Option<GameState>>),
    Shutdown,
}

/// Controller type run by the driver.
pub type DrivenController<Sf> = GameController<Sf, TokioScheduler, StdRng>;

/// Cloneable sending side of a running driver.
#[derive(Clone, Debug)]
pub struct GameHandle {
    commands: mpsc::UnboundedSender<Command>,
}

impl GameHandle {
    /// Request a new game.
    pub fn start(&self) -> Result<(), DriverError> {
        self.send(Command::Start)
    }

    /// Report that the player activated `id`.
    pub fn activate(&self, id: SignalId) -> Result<(), DriverError> {
        self.send(Command::Activate(id))
    }

    /// Copy of the current game state, `None` before the first start.
    pub async fn snapshot(&self) -> Result<Option<GameState>, DriverError> {
        let (reply, response) = oneshot::channel();
        self.send(Command::Snapshot(reply))?;
        response.await.map_err(|_| DriverError::Closed)
    }

    /// Stop the driver loop after the commands already queued.
    pub fn shutdown(&self) -> Result<(), DriverError> {
        self.send(Command::Shutdown)
    }

    fn send(&self, command: Command) -> Result<(), DriverError> {
        self.commands.send(command).map_err(|_| DriverError::Closed)
    }
}

/// Run loop owning the controller.
pub struct GameDriver<Sf> {
    controller: DrivenController<Sf>,
    commands: mpsc::UnboundedReceiver<Command>,
}

impl<Sf: Surface> GameDriver<Sf> {
    /// Build a driver and the handle that feeds it. Pass a seed for a
    /// reproducible sequence.
    pub fn new(
        surface: Sf,
        config: GameConfig,
        seed: Option<u64>,
    ) -> Result<(Self, GameHandle), BuildError> {
        let (tx, rx) = mpsc::unbounded_channel();

        let mut builder = ControllerBuilder::new()
            .surface(surface)
            .scheduler(TokioScheduler::new(&tx))
            .config(config);
        if let Some(seed) = seed {
            builder = builder.seed(seed);
        }
        let controller = builder.build()?;

        let driver = Self {
            controller,
            commands: rx,
        };
        Ok((driver, GameHandle { commands: tx }))
    }

    /// Process commands until [`GameHandle::shutdown`] or until every
    /// [`GameHandle`] is dropped, then hand the controller back with playback
    /// halted.
    pub async fn run(mut self) -> DrivenController<Sf> {
        info!("game driver running");

        while let Some(command) = self.commands.recv().await {
            match command {
                Command::Start => self.controller.start(),
                Command::Activate(id) => self.controller.on_signal_activated(id),
                Command::Tick(tick) => self.controller.on_tick(tick),
                Command::Snapshot(reply) => {
                    if reply.send(self.controller.game().cloned()).is_err() {
                        debug!("snapshot requester went away");
                    }
                }
                Command::Shutdown => break,
            }
        }

        self.controller.halt();
        info!(phase = %self.controller.phase(), "game driver stopped");
        self.controller
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Phase;
    use crate::surface::RecordingSurface;

    #[tokio::test]
    async fn snapshot_is_none_before_start() {
        let (driver, handle) =
            GameDriver::new(RecordingSurface::default(), GameConfig::default(), Some(1)).unwrap();
        let task = tokio::spawn(driver.run());

        assert_eq!(handle.snapshot().await.unwrap(), None);

        handle.shutdown().unwrap();
        let controller = task.await.unwrap();
        assert_eq!(controller.phase(), Phase::Idle);
    }

    #[tokio::test]
    async fn handle_reports_closed_driver() {
        let (driver, handle) =
            GameDriver::new(RecordingSurface::default(), GameConfig::default(), None).unwrap();
        drop(driver);

        assert_eq!(handle.start(), Err(DriverError::Closed));
        assert_eq!(handle.snapshot().await, Err(DriverError::Closed));
    }

    #[test]
    fn invalid_config_fails_to_build() {
        let config = GameConfig {
            speed_factor: 1.0,
            ..GameConfig::default()
        };
        let result = GameDriver::new(RecordingSurface::default(), config, None);
        assert!(matches!(result, Err(BuildError::InvalidConfig(_))));
    }
}
