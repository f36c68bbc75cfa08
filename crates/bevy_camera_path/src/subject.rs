use bevy::ecs::{component::Component, entity::Entity, system::Query};
use bevy_camera_path_core::{
    pose::CameraPose,
    subject::{GameMode, SubjectHost},
};

/// Marks an entity as something camera paths can be played on.
///
/// The engine writes the interpolated pose and the game mode here; it's up to the game to
/// mirror them onto its transforms, network layer or player state.
#[derive(Component, Clone, Debug, Default, PartialEq)]
pub struct CameraSubject {
    pub pose: CameraPose,
    pub mode: GameMode,
}

impl CameraSubject {
    pub fn new(pose: CameraPose, mode: GameMode) -> Self {
        Self { pose, mode }
    }
}

/// Exposes [`CameraSubject`] entities to the engine
pub struct SubjectQuery<'a, 'w, 's> {
    subjects: &'a mut Query<'w, 's, &'static mut CameraSubject>,
}

impl<'a, 'w, 's> SubjectQuery<'a, 'w, 's> {
    pub fn new(subjects: &'a mut Query<'w, 's, &'static mut CameraSubject>) -> Self {
        Self { subjects }
    }
}

impl SubjectHost<Entity> for SubjectQuery<'_, '_, '_> {
    fn current_pose(&self, subject: &Entity) -> Option<CameraPose> {
        self.subjects.get(*subject).ok().map(|s| s.pose.clone())
    }

    fn current_mode(&self, subject: &Entity) -> Option<GameMode> {
        self.subjects.get(*subject).ok().map(|s| s.mode)
    }

    fn set_mode(&mut self, subject: &Entity, mode: GameMode) -> bool {
        let Ok(mut s) = self.subjects.get_mut(*subject) else {
            return false;
        };
        s.mode = mode;
        true
    }

    fn deliver_pose(&mut self, subject: &Entity, pose: &CameraPose) -> bool {
        let Ok(mut s) = self.subjects.get_mut(*subject) else {
            return false;
        };
        s.pose = pose.clone();
        true
    }
}
