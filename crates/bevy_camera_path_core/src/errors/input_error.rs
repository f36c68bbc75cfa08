use thiserror::Error;

/// Malformed values handed to the engine
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InvalidInput {
    #[error("Interpolation needs at least two waypoints, got {0}")]
    NotEnoughWaypoints(usize),
    #[error("Unknown game mode: {0:?}")]
    UnknownGameMode(String),
    #[error("Expected a finite number, got {0}")]
    NonFinite(f64),
}
