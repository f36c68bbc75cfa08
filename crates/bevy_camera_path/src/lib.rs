//! # Bevy Camera Path
//!
//! Scripted camera paths for [Bevy](https://bevyengine.org/) game servers. A camera path is a
//! named session of waypoints that a subject is moved along over a duration, with an easing
//! curve, before being teleported to a terminal pose and handed back its original game mode.
//!
//! Add [`CameraPathPlugin`] to the app and a [`CameraSubject`] to every entity paths should be
//! played on. Sessions are configured and played through the [`CameraPaths`] resource:
//!
//! ```ignore
//! fn play_intro(
//!     mut paths: ResMut<CameraPaths>,
//!     mut subjects: Query<&'static mut CameraSubject>,
//!     player: Single<Entity, With<Player>>,
//! ) {
//!     if let Err(err) = paths.start("intro", *player, &mut SubjectQuery::new(&mut subjects)) {
//!         warn!("Could not play the intro: {err}");
//!     }
//! }
//! ```
//!
//! Paths advance once per run of the plugin's schedule, [`FixedUpdate`] by default, which the
//! plugin sets to run at the configured tick rate. Sessions can be described in RON:
//!
//! ```ron
//! (
//!     sessions: [
//!         (
//!             name: "intro",
//!             waypoints: [
//!                 Some((world: "overworld", position: (0.0, 64.0, 0.0), yaw: 0.0, pitch: 0.0)),
//!                 Some((world: "overworld", position: (32.0, 80.0, 0.0), yaw: 90.0, pitch: 10.0)),
//!             ],
//!             duration: Some(4.0),
//!             easing: Some(easeinout),
//!         ),
//!     ],
//! )
//! ```
//!
//! [`CameraPathPlugin`]: plugin::CameraPathPlugin
//! [`CameraSubject`]: subject::CameraSubject
//! [`CameraPaths`]: plugin::CameraPaths
//! [`FixedUpdate`]: bevy::app::FixedUpdate

pub mod plugin;
pub mod subject;
pub mod systems;

pub use bevy_camera_path_core as core;

pub mod prelude {
    pub use super::plugin::{CameraPathPlugin, CameraPathSet, CameraPaths};
    pub use super::subject::{CameraSubject, SubjectQuery};
    pub use bevy_camera_path_core::prelude::*;
}
