use std::sync::Arc;

use bevy::math::DVec3;
use serde::{Deserialize, Serialize};

/// Name of the world (dimension, level) a pose lives in
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorldId(Arc<str>);

impl WorldId {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for WorldId {
    fn default() -> Self {
        Self::new("world")
    }
}

impl From<&str> for WorldId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl std::fmt::Display for WorldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Position and look direction of a subject. Angles are in degrees.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CameraPose {
    pub world: WorldId,
    pub position: DVec3,
    pub yaw: f32,
    pub pitch: f32,
}

impl CameraPose {
    pub fn new(world: impl Into<WorldId>, position: DVec3, yaw: f32, pitch: f32) -> Self {
        Self {
            world: world.into(),
            position,
            yaw,
            pitch,
        }
    }

    pub fn with_position(mut self, position: DVec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_rotation(mut self, yaw: f32, pitch: f32) -> Self {
        self.yaw = yaw;
        self.pitch = pitch;
        self
    }
}
