//! Console errors.

#![allow(missing_docs)]

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Invalid broker or console configuration.
    #[error("invalid config '{0}'")]
    InvalidConfig(String),

    /// Transport client could not be started.
    #[error("transport error '{0}'")]
    Transport(String),

    /// Permissions blob could not be written.
    #[error("permissions store error '{0}'")]
    PermissionsStore(String),

    /// Terminal setup or drawing failure.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}
