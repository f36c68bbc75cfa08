use thiserror::Error;

use super::ConfigurationError;

/// Errors produced while saving or restoring sessions and settings
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SerialError {
    #[error("Could not parse RON: {0}")]
    RonSpannedError(#[from] ron::error::SpannedError),
    #[error("Could not write RON: {0}")]
    RonError(#[from] ron::Error),
    #[error("Stored configuration is invalid: {0}")]
    InvalidConfiguration(#[from] ConfigurationError),
}
