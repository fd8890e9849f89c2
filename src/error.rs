//! Crate-wide error type.

use thiserror::Error;

/// Errors raised while configuring or running an evolution.
///
/// None of these are recoverable inside a run: the driver propagates them and the
/// application ends the run.
#[derive(Error, Debug)]
pub enum EvoError {
    /// Parameters failed validation or could not be interpreted.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The physics collaborator rejected the scene geometry.
    #[error("Geometry error: {0}")]
    Geometry(String),

    /// Reading or writing a parameter file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A parameter file was not valid JSON for [`crate::simulation::params::Params`].
    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EvoError>;
