//! Refresher error types

use thiserror::Error;

/// Errors raised while configuring a refresh control
///
/// Runtime operations never fail: unmet preconditions are silent no-ops.
#[derive(Error, Debug)]
pub enum RefresherError {
    /// Heights, distances or durations that cannot describe a footer
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Malformed configuration document
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for RefresherError {
    fn from(err: toml::de::Error) -> Self {
        RefresherError::Config(err.to_string())
    }
}

/// Result type for refresher operations
pub type Result<T> = std::result::Result<T, RefresherError>;
