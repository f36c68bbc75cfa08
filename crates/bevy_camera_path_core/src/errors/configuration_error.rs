use thiserror::Error;

/// Errors produced while configuring a session or starting playback from it
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("Duration must be a positive number of seconds, got {0}")]
    NonPositiveDuration(f64),
    #[error("Tick rate must be a positive number of ticks per second, got {0}")]
    NonPositiveTickRate(f64),
    #[error("Waypoint index {index} is past the last allowed index {max}")]
    WaypointIndexOutOfRange { index: usize, max: usize },
    #[error("Session {session:?} has no waypoint at index {index}")]
    WaypointHole { session: String, index: usize },
    #[error("Session {session:?} needs at least two waypoints, found {found}")]
    NotEnoughWaypoints { session: String, found: usize },
    #[error("No session named {0:?}")]
    UnknownSession(String),
    #[error("The subject could not be found by the host")]
    UnknownSubject,
}

pub type PlaybackResult<T> = Result<T, ConfigurationError>;
