//! # Bevy Camera Path Core
//!
//! Engine that plays back camera paths: ordered sequences of [`CameraPose`]s traversed over a
//! duration with an [`Easing`] curve, one pose per game tick.
//!
//! - Paths are configured as named sessions in a [`SessionStore`]. Every field of a session has
//!   a default, and sessions can be saved to and restored from RON.
//! - [`PlaybackController`] runs a session on a subject: it switches the subject to the session's
//!   target [`GameMode`], delivers an interpolated pose every tick, teleports the subject to the
//!   terminal pose and finally restores its original game mode.
//! - The game is reached through the [`SubjectHost`] trait and time advances through a
//!   [`Scheduler`]. [`CameraPathEngine`] wires all of the above to a [`TickScheduler`].
//!
//! [`CameraPose`]: pose::CameraPose
//! [`Easing`]: easing::Easing
//! [`SessionStore`]: session::SessionStore
//! [`PlaybackController`]: playback::PlaybackController
//! [`GameMode`]: subject::GameMode
//! [`SubjectHost`]: subject::SubjectHost
//! [`Scheduler`]: scheduler::Scheduler
//! [`TickScheduler`]: scheduler::TickScheduler
//! [`CameraPathEngine`]: engine::CameraPathEngine

pub mod easing;
pub mod engine;
pub mod errors;
pub mod interpolation;
pub mod playback;
pub mod pose;
pub mod scheduler;
pub mod session;
pub mod settings;
pub mod subject;

#[cfg(test)]
pub(crate) mod testing;

pub mod prelude {
    pub use super::easing::Easing;
    pub use super::engine::CameraPathEngine;
    pub use super::errors::*;
    pub use super::interpolation::{interpolate, linear::InterpolateLinear, sample_path};
    pub use super::playback::*;
    pub use super::pose::{CameraPose, WorldId};
    pub use super::scheduler::{Scheduler, TaskHandle, TickScheduler};
    pub use super::session::{
        MAX_WAYPOINT_INDEX, SessionConfig, SessionDefaults, SessionRecord, SessionSnapshot,
        SessionStore, serial::SessionStoreSerial,
    };
    pub use super::settings::CameraPathSettings;
    pub use super::subject::{GameMode, SubjectHost};
}
