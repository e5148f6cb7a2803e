//! Builder API for assembling a game controller.
//!
//! The builder collects the surface, the scheduler, the game constants and an
//! optional seed, validates the constants and produces a
//! [`GameController`] backed by a `StdRng`.

pub mod error;

pub use error::BuildError;

use crate::config::GameConfig;
use crate::controller::GameController;
use crate::schedule::Scheduler;
use crate::surface::Surface;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Fluent builder for [`GameController`].
///
/// # Example
///
/// ```rust
/// use simon::builder::ControllerBuilder;
/// use simon::schedule::ManualScheduler;
/// use simon::surface::RecordingSurface;
///
/// let controller = ControllerBuilder::new()
///     .surface(RecordingSurface::default())
///     .scheduler(ManualScheduler::new())
///     .seed(7)
///     .build()
///     .unwrap();
///
/// assert_eq!(controller.config().total_rounds, 10);
/// ```
pub struct ControllerBuilder<Sf, Sc> {
    surface: Option<Sf>,
    scheduler: Option<Sc>,
    config: GameConfig,
    seed: Option<u64>,
}

impl<Sf: Surface, Sc: Scheduler> ControllerBuilder<Sf, Sc> {
    pub fn new() -> Self {
        Self {
            surface: None,
            scheduler: None,
            config: GameConfig::default(),
            seed: None,
        }
    }

    /// Set the presentation surface (required).
    pub fn surface(mut self, surface: Sf) -> Self {
        self.surface = Some(surface);
        self
    }

    /// Set the playback scheduler (required).
    pub fn scheduler(mut self, scheduler: Sc) -> Self {
        self.scheduler = Some(scheduler);
        self
    }

    /// Replace the game constants. Defaults to [`GameConfig::default`].
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Seed the sequence generator for reproducible games. Without a seed
    /// the generator is seeded from system entropy.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the controller.
    /// Returns an error if a required part is missing or the constants are invalid.
    pub fn build(self) -> Result<GameController<Sf, Sc, StdRng>, BuildError> {
        let surface = self.surface.ok_or(BuildError::MissingSurface)?;
        let scheduler = self.scheduler.ok_or(BuildError::MissingScheduler)?;
        self.config.validate()?;

        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(GameController::from_parts(
            surface,
            scheduler,
            rng,
            self.config,
        ))
    }
}

impl<Sf: Surface, Sc: Scheduler> Default for ControllerBuilder<Sf, Sc> {
    fn default() -> Self {
        Self::new()
    }
}
