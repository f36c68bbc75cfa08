use bevy::{math::DVec3, platform::collections::HashMap};

use crate::{
    pose::CameraPose,
    subject::{GameMode, SubjectHost},
};

#[derive(Debug, Default)]
pub(crate) struct TestSubject {
    pub pose: CameraPose,
    pub mode: GameMode,
    pub delivered: Vec<CameraPose>,
    pub mode_changes: Vec<GameMode>,
}

/// In-memory host recording everything the engine does to its subjects
#[derive(Debug, Default)]
pub(crate) struct TestHost {
    pub subjects: HashMap<u32, TestSubject>,
}

impl TestHost {
    pub fn with_subject(id: u32, mode: GameMode) -> Self {
        let mut host = Self::default();
        host.add_subject(id, mode);
        host
    }

    pub fn add_subject(&mut self, id: u32, mode: GameMode) {
        self.subjects.insert(
            id,
            TestSubject {
                mode,
                ..Default::default()
            },
        );
    }

    pub fn subject(&self, id: u32) -> &TestSubject {
        self.subjects.get(&id).unwrap()
    }

    pub fn subject_mut(&mut self, id: u32) -> &mut TestSubject {
        self.subjects.get_mut(&id).unwrap()
    }
}

impl SubjectHost<u32> for TestHost {
    fn current_pose(&self, subject: &u32) -> Option<CameraPose> {
        self.subjects.get(subject).map(|s| s.pose.clone())
    }

    fn current_mode(&self, subject: &u32) -> Option<GameMode> {
        self.subjects.get(subject).map(|s| s.mode)
    }

    fn set_mode(&mut self, subject: &u32, mode: GameMode) -> bool {
        let Some(s) = self.subjects.get_mut(subject) else {
            return false;
        };
        s.mode = mode;
        s.mode_changes.push(mode);
        true
    }

    fn deliver_pose(&mut self, subject: &u32, pose: &CameraPose) -> bool {
        let Some(s) = self.subjects.get_mut(subject) else {
            return false;
        };
        s.pose = pose.clone();
        s.delivered.push(pose.clone());
        true
    }
}

pub(crate) fn pose_at(x: f64, yaw: f32) -> CameraPose {
    CameraPose::new("world", DVec3::new(x, 0., 0.), yaw, 0.)
}
