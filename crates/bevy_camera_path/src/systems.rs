use bevy::ecs::system::{Query, ResMut};

use crate::{
    plugin::CameraPaths,
    subject::{CameraSubject, SubjectQuery},
};

/// Moves every active camera path forward by one tick
pub fn advance_camera_paths(
    mut paths: ResMut<CameraPaths>,
    mut subjects: Query<&'static mut CameraSubject>,
) {
    paths.tick(&mut SubjectQuery::new(&mut subjects));
}
