//! Error types for the lazy logging layer
//!
//! The guarded logging calls themselves never fail. Only the one-time setup
//! operations (installing a logger factory, initialising a backend) report
//! errors, and they do so through [`LoggingError`].

use thiserror::Error;

/// Errors raised while configuring the logging layer
#[derive(Error, Debug)]
pub enum LoggingError {
    /// A process-wide logger factory has already been installed
    #[error("A logger factory has already been installed")]
    FactoryAlreadySet,

    /// The `log` backend could not be installed
    #[error("Failed to initialize log backend: {0}")]
    Init(#[from] log::SetLoggerError),
}

/// Result alias used by the setup operations of this crate
pub type Result<T> = std::result::Result<T, LoggingError>;
