use bevy::math::DVec3;
use serde::{Deserialize, Serialize};

use super::{SessionDefaults, SessionRecord, SessionStore};
use crate::{
    easing::Easing, errors::SerialError, pose::CameraPose, pose::WorldId, subject::GameMode,
};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CameraPoseSerial {
    pub world: WorldId,
    pub position: [f64; 3],
    #[serde(default)]
    pub yaw: f32,
    #[serde(default)]
    pub pitch: f32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SessionSerial {
    pub name: String,
    #[serde(default)]
    pub waypoints: Vec<Option<CameraPoseSerial>>,
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub easing: Option<Easing>,
    #[serde(default)]
    pub terminal_pose: Option<CameraPoseSerial>,
    #[serde(default)]
    pub target_mode: Option<GameMode>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct SessionStoreSerial {
    pub sessions: Vec<SessionSerial>,
}

impl From<&CameraPose> for CameraPoseSerial {
    fn from(value: &CameraPose) -> Self {
        Self {
            world: value.world.clone(),
            position: value.position.to_array(),
            yaw: value.yaw,
            pitch: value.pitch,
        }
    }
}

impl From<CameraPoseSerial> for CameraPose {
    fn from(value: CameraPoseSerial) -> Self {
        CameraPose {
            world: value.world,
            position: DVec3::from_array(value.position),
            yaw: value.yaw,
            pitch: value.pitch,
        }
    }
}

impl SessionSerial {
    pub fn from_record(name: &str, record: &SessionRecord) -> Self {
        Self {
            name: name.to_string(),
            waypoints: record
                .waypoints
                .iter()
                .map(|w| w.as_ref().map(CameraPoseSerial::from))
                .collect(),
            duration: record.duration,
            easing: record.easing,
            terminal_pose: record.terminal_pose.as_ref().map(CameraPoseSerial::from),
            target_mode: record.target_mode,
        }
    }
}

impl SessionStoreSerial {
    pub fn from_store(store: &SessionStore) -> Self {
        Self {
            sessions: store
                .sessions
                .iter()
                .map(|(name, record)| SessionSerial::from_record(name, record))
                .collect(),
        }
    }

    /// Rebuilds a store through its regular setters, so stored durations are validated again
    pub fn to_store(self, defaults: SessionDefaults) -> Result<SessionStore, SerialError> {
        let mut store = SessionStore::new(defaults);
        for session in self.sessions {
            let name = session.name.as_str();
            store.record_mut(name);
            for (index, waypoint) in session.waypoints.into_iter().enumerate() {
                if let Some(pose) = waypoint {
                    store.set_waypoint(name, index, pose.into())?;
                }
            }
            if let Some(duration) = session.duration {
                store.set_duration(name, duration)?;
            }
            if let Some(easing) = session.easing {
                store.set_easing(name, easing);
            }
            if let Some(pose) = session.terminal_pose {
                store.set_terminal_pose(name, pose.into());
            }
            if let Some(mode) = session.target_mode {
                store.set_target_mode(name, mode);
            }
        }
        Ok(store)
    }
}

impl SessionStore {
    pub fn to_ron(&self) -> Result<String, SerialError> {
        Ok(ron::ser::to_string_pretty(
            &SessionStoreSerial::from_store(self),
            ron::ser::PrettyConfig::default(),
        )?)
    }

    pub fn from_ron(source: &str, defaults: SessionDefaults) -> Result<Self, SerialError> {
        let serial: SessionStoreSerial = ron::from_str(source)?;
        serial.to_store(defaults)
    }
}
