pub mod serial;

use bevy::log::debug;
use indexmap::IndexMap;

use crate::{
    easing::Easing,
    errors::{ConfigurationError, PlaybackResult},
    pose::CameraPose,
    settings::CameraPathSettings,
    subject::GameMode,
};

/// Highest waypoint index a session accepts
pub const MAX_WAYPOINT_INDEX: usize = 1023;

/// Values used for fields a session never had set
#[derive(Clone, Debug, PartialEq)]
pub struct SessionDefaults {
    pub duration: f64,
    pub easing: Easing,
    pub target_mode: GameMode,
}

impl Default for SessionDefaults {
    fn default() -> Self {
        Self::from(&CameraPathSettings::default())
    }
}

impl From<&CameraPathSettings> for SessionDefaults {
    fn from(settings: &CameraPathSettings) -> Self {
        Self {
            duration: settings.default_duration,
            easing: settings.default_easing,
            target_mode: settings.default_target_mode,
        }
    }
}

/// Stored configuration of a single session. `None` fields were never set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionRecord {
    pub waypoints: Vec<Option<CameraPose>>,
    pub duration: Option<f64>,
    pub easing: Option<Easing>,
    pub terminal_pose: Option<CameraPose>,
    pub target_mode: Option<GameMode>,
}

/// Configuration of a session with defaults filled in
#[derive(Clone, Debug, PartialEq)]
pub struct SessionConfig {
    pub waypoints: Vec<Option<CameraPose>>,
    pub duration: f64,
    pub easing: Easing,
    /// Explicitly set terminal pose. Playback falls back to the last waypoint when unset.
    pub terminal_pose: Option<CameraPose>,
    pub target_mode: GameMode,
}

/// Validated, self-contained copy of a session, ready to be played back
#[derive(Clone, Debug, PartialEq)]
pub struct SessionSnapshot {
    pub session: String,
    pub waypoints: Vec<CameraPose>,
    pub duration: f64,
    pub easing: Easing,
    pub terminal_pose: CameraPose,
    pub target_mode: GameMode,
}

/// Named camera path sessions.
///
/// Sessions are created by the first write to any of their fields and live until
/// [`SessionStore::reset`]. Names are case-sensitive.
#[derive(Clone, Debug, Default)]
pub struct SessionStore {
    sessions: IndexMap<String, SessionRecord>,
    defaults: SessionDefaults,
}

impl SessionStore {
    pub fn new(defaults: SessionDefaults) -> Self {
        Self {
            sessions: IndexMap::new(),
            defaults,
        }
    }

    pub fn defaults(&self) -> &SessionDefaults {
        &self.defaults
    }

    fn record_mut(&mut self, session: &str) -> &mut SessionRecord {
        if !self.sessions.contains_key(session) {
            debug!("Creating camera session {session:?}");
        }
        self.sessions.entry(session.to_string()).or_default()
    }

    /// Sets waypoint `index`, leaving unset holes before it if the path was shorter. Indices
    /// above [`MAX_WAYPOINT_INDEX`] are rejected without touching the session.
    pub fn set_waypoint(
        &mut self,
        session: &str,
        index: usize,
        pose: CameraPose,
    ) -> PlaybackResult<()> {
        if index > MAX_WAYPOINT_INDEX {
            return Err(ConfigurationError::WaypointIndexOutOfRange {
                index,
                max: MAX_WAYPOINT_INDEX,
            });
        }

        let waypoints = &mut self.record_mut(session).waypoints;
        if waypoints.len() <= index {
            waypoints.resize(index + 1, None);
        }
        waypoints[index] = Some(pose);
        Ok(())
    }

    /// Rejects durations that aren't strictly positive without touching the session
    pub fn set_duration(&mut self, session: &str, duration: f64) -> PlaybackResult<()> {
        if !(duration.is_finite() && duration > 0.) {
            return Err(ConfigurationError::NonPositiveDuration(duration));
        }
        self.record_mut(session).duration = Some(duration);
        Ok(())
    }

    pub fn set_easing(&mut self, session: &str, easing: Easing) {
        self.record_mut(session).easing = Some(easing);
    }

    pub fn set_terminal_pose(&mut self, session: &str, pose: CameraPose) {
        self.record_mut(session).terminal_pose = Some(pose);
    }

    pub fn set_target_mode(&mut self, session: &str, mode: GameMode) {
        self.record_mut(session).target_mode = Some(mode);
    }

    /// Forgets everything about a session. Returns whether it existed.
    pub fn reset(&mut self, session: &str) -> bool {
        self.sessions.shift_remove(session).is_some()
    }

    pub fn contains(&self, session: &str) -> bool {
        self.sessions.contains_key(session)
    }

    pub fn record(&self, session: &str) -> Option<&SessionRecord> {
        self.sessions.get(session)
    }

    /// Current configuration of `session`. Unknown sessions report all defaults.
    pub fn get(&self, session: &str) -> SessionConfig {
        let record = self.sessions.get(session);
        SessionConfig {
            waypoints: record.map(|r| r.waypoints.clone()).unwrap_or_default(),
            duration: record
                .and_then(|r| r.duration)
                .unwrap_or(self.defaults.duration),
            easing: record
                .and_then(|r| r.easing)
                .unwrap_or(self.defaults.easing),
            terminal_pose: record.and_then(|r| r.terminal_pose.clone()),
            target_mode: record
                .and_then(|r| r.target_mode)
                .unwrap_or(self.defaults.target_mode),
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sessions.keys().map(String::as_str)
    }

    /// Session names with their waypoint paths, in creation order
    pub fn list(&self) -> impl Iterator<Item = (&str, &[Option<CameraPose>])> {
        self.sessions
            .iter()
            .map(|(name, record)| (name.as_str(), record.waypoints.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Resolves `session` into something playable, checking that its path is complete
    pub fn snapshot(&self, session: &str) -> PlaybackResult<SessionSnapshot> {
        if !self.contains(session) {
            return Err(ConfigurationError::UnknownSession(session.to_string()));
        }
        let config = self.get(session);

        let mut waypoints = Vec::with_capacity(config.waypoints.len());
        for (index, waypoint) in config.waypoints.into_iter().enumerate() {
            let Some(pose) = waypoint else {
                return Err(ConfigurationError::WaypointHole {
                    session: session.to_string(),
                    index,
                });
            };
            waypoints.push(pose);
        }

        if waypoints.len() < 2 {
            return Err(ConfigurationError::NotEnoughWaypoints {
                session: session.to_string(),
                found: waypoints.len(),
            });
        }
        let terminal_pose = config
            .terminal_pose
            .unwrap_or_else(|| waypoints[waypoints.len() - 1].clone());

        Ok(SessionSnapshot {
            session: session.to_string(),
            waypoints,
            duration: config.duration,
            easing: config.easing,
            terminal_pose,
            target_mode: config.target_mode,
        })
    }
}
