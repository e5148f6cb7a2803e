//! Driver error types.

use thiserror::Error;

/// Errors returned by [`GameHandle`](super::GameHandle) operations.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum DriverError {
    /// The driver loop has stopped and no longer receives commands
    #[error("Game driver is not running")]
    Closed,
}
