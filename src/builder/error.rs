//! Build errors for the controller builder.

use crate::config::ConfigError;
use thiserror::Error;

/// Errors that can occur when building a controller.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Surface not specified. Call .surface(surface) before .build()")]
    MissingSurface,

    #[error("Scheduler not specified. Call .scheduler(scheduler) before .build()")]
    MissingScheduler,

    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),
}
