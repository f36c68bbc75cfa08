use std::{fmt::Debug, hash::Hash};

use bevy::log::warn;

use crate::{
    errors::{ConfigurationError, PlaybackResult},
    playback::{PlaybackController, PlaybackEvent, PlaybackTask, RunId, RunProgress},
    pose::CameraPose,
    scheduler::TickScheduler,
    session::{SessionDefaults, SessionStore},
    settings::CameraPathSettings,
    subject::SubjectHost,
};

/// Everything needed to configure and play camera paths for subjects keyed by `K`.
///
/// Owns the session store, the playback controller and the tick scheduler. The host is passed
/// in to every call that needs to read or write subjects, and must call
/// [`CameraPathEngine::tick`] once per game tick.
#[derive(Debug)]
pub struct CameraPathEngine<K> {
    settings: CameraPathSettings,
    sessions: SessionStore,
    controller: PlaybackController<K>,
    scheduler: TickScheduler<PlaybackTask<K>>,
}

impl<K> Default for CameraPathEngine<K>
where
    K: Clone + Eq + Hash + Debug,
{
    fn default() -> Self {
        Self::new(CameraPathSettings::default())
    }
}

impl<K> CameraPathEngine<K>
where
    K: Clone + Eq + Hash + Debug,
{
    /// Invalid settings are replaced by their defaults, see [`CameraPathSettings::sanitized`]
    pub fn new(settings: CameraPathSettings) -> Self {
        let settings = settings.sanitized();
        Self {
            sessions: SessionStore::new(SessionDefaults::from(&settings)),
            controller: PlaybackController::new(settings.tick_rate),
            scheduler: TickScheduler::new(),
            settings,
        }
    }

    pub fn settings(&self) -> &CameraPathSettings {
        &self.settings
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Session writes never affect runs that already started
    pub fn sessions_mut(&mut self) -> &mut SessionStore {
        &mut self.sessions
    }

    /// Replaces every stored session, e.g. with one restored through [`SessionStore::from_ron`]
    pub fn replace_sessions(&mut self, sessions: SessionStore) -> SessionStore {
        std::mem::replace(&mut self.sessions, sessions)
    }

    pub fn controller(&self) -> &PlaybackController<K> {
        &self.controller
    }

    pub fn scheduler(&self) -> &TickScheduler<PlaybackTask<K>> {
        &self.scheduler
    }

    /// Stores the subject's current pose as waypoint `index` of `session`
    pub fn capture_waypoint(
        &mut self,
        session: &str,
        index: usize,
        subject: &K,
        host: &impl SubjectHost<K>,
    ) -> PlaybackResult<CameraPose> {
        let pose = host
            .current_pose(subject)
            .ok_or(ConfigurationError::UnknownSubject)?;
        self.sessions.set_waypoint(session, index, pose.clone())?;
        Ok(pose)
    }

    /// Stores the subject's current pose as the place `session` ends at
    pub fn capture_terminal_pose(
        &mut self,
        session: &str,
        subject: &K,
        host: &impl SubjectHost<K>,
    ) -> PlaybackResult<CameraPose> {
        let pose = host
            .current_pose(subject)
            .ok_or(ConfigurationError::UnknownSubject)?;
        self.sessions.set_terminal_pose(session, pose.clone());
        Ok(pose)
    }

    /// Plays `session` on `subject`. The session is validated before anything about the
    /// subject changes.
    pub fn start(
        &mut self,
        session: &str,
        subject: K,
        host: &mut impl SubjectHost<K>,
    ) -> PlaybackResult<RunId> {
        let snapshot = self.sessions.snapshot(session)?;

        if snapshot
            .waypoints
            .iter()
            .chain(std::iter::once(&snapshot.terminal_pose))
            .any(|pose| pose.world != snapshot.waypoints[0].world)
        {
            warn!("Camera session {session:?} spans several worlds");
        }

        self.controller
            .start(snapshot, subject, host, &mut self.scheduler)
    }

    pub fn cancel(&mut self, subject: &K, host: &mut impl SubjectHost<K>) -> bool {
        self.controller.cancel(subject, host, &mut self.scheduler)
    }

    pub fn cancel_all(&mut self, host: &mut impl SubjectHost<K>) -> usize {
        self.controller.cancel_all(host, &mut self.scheduler)
    }

    pub fn is_active(&self, subject: &K) -> bool {
        self.controller.is_active(subject)
    }

    pub fn progress(&self, subject: &K) -> Option<RunProgress> {
        self.controller.progress(subject)
    }

    /// Advances the scheduler by one tick and runs whatever fired
    pub fn tick(&mut self, host: &mut impl SubjectHost<K>) {
        for (_, task) in self.scheduler.advance() {
            self.controller.handle(task, host, &mut self.scheduler);
        }
    }

    pub fn drain_events(&mut self) -> Vec<PlaybackEvent<K>> {
        self.controller.drain_events()
    }
}

#[cfg(test)]
mod tests {
    use bevy::math::DVec3;

    use super::*;
    use crate::{
        easing::Easing,
        playback::CancelReason,
        subject::GameMode,
        testing::{TestHost, pose_at},
    };

    fn engine_with_session(host: &mut TestHost) -> CameraPathEngine<u32> {
        let mut engine = CameraPathEngine::default();
        host.subject_mut(1).pose = pose_at(0., 0.);
        engine.capture_waypoint("intro", 0, &1, &*host).unwrap();
        host.subject_mut(1).pose = pose_at(10., 90.);
        engine.capture_waypoint("intro", 1, &1, &*host).unwrap();
        engine.sessions_mut().set_duration("intro", 1.).unwrap();
        engine
            .sessions_mut()
            .set_target_mode("intro", GameMode::Spectator);
        engine
    }

    #[test]
    fn captures_current_pose() {
        let mut host = TestHost::with_subject(1, GameMode::Creative);
        let engine = engine_with_session(&mut host);

        assert_eq!(
            engine.sessions().get("intro").waypoints,
            vec![Some(pose_at(0., 0.)), Some(pose_at(10., 90.))]
        );
        assert_eq!(
            CameraPathEngine::<u32>::default().capture_waypoint("intro", 0, &9, &host),
            Err(ConfigurationError::UnknownSubject)
        );
    }

    #[test]
    fn plays_a_session_to_the_end() {
        let mut host = TestHost::with_subject(1, GameMode::Creative);
        let mut engine = engine_with_session(&mut host);
        host.subject_mut(1).pose = pose_at(-3., 0.);
        engine.capture_terminal_pose("intro", &1, &host).unwrap();

        engine.start("intro", 1, &mut host).unwrap();
        assert_eq!(host.subject(1).mode, GameMode::Spectator);

        for _ in 0..20 {
            engine.tick(&mut host);
        }
        assert!(engine.is_active(&1));
        assert_eq!(host.subject(1).delivered[10].position, DVec3::new(5., 0., 0.));

        engine.tick(&mut host);
        assert!(!engine.is_active(&1));
        assert_eq!(host.subject(1).pose, pose_at(-3., 0.));
        assert_eq!(host.subject(1).mode, GameMode::Creative);
        assert_eq!(engine.scheduler().pending(), 0);
    }

    #[test]
    fn configuration_errors_leave_the_subject_alone() {
        let mut host = TestHost::with_subject(1, GameMode::Creative);
        let mut engine = CameraPathEngine::<u32>::default();
        engine
            .sessions_mut()
            .set_waypoint("broken", 1, pose_at(1., 0.))
            .unwrap();
        engine
            .sessions_mut()
            .set_target_mode("broken", GameMode::Spectator);

        assert_eq!(
            engine.start("broken", 1, &mut host),
            Err(ConfigurationError::WaypointHole {
                session: "broken".to_string(),
                index: 0,
            })
        );
        assert!(
            engine.start("missing", 1, &mut host).is_err(),
            "unknown sessions can't be played"
        );

        let sessions = engine.sessions_mut();
        sessions.set_waypoint("single", 0, pose_at(1., 0.)).unwrap();
        sessions.set_target_mode("single", GameMode::Spectator);
        assert_eq!(
            engine.start("single", 1, &mut host),
            Err(ConfigurationError::NotEnoughWaypoints {
                session: "single".to_string(),
                found: 1,
            })
        );

        assert!(host.subject(1).mode_changes.is_empty());
        assert!(host.subject(1).delivered.is_empty());
        assert!(!engine.is_active(&1));
        assert_eq!(engine.scheduler().pending(), 0);
        assert!(engine.drain_events().is_empty());

        engine.tick(&mut host);
        assert!(host.subject(1).delivered.is_empty());
    }

    #[test]
    fn invalid_settings_fall_back_to_defaults() {
        let mut host = TestHost::with_subject(1, GameMode::Creative);
        let mut engine = CameraPathEngine::<u32>::new(CameraPathSettings {
            tick_rate: 0.,
            default_duration: -3.,
            ..Default::default()
        });
        assert_eq!(engine.settings().tick_rate, 20.);
        assert_eq!(engine.sessions().get("intro").duration, 5.);

        let sessions = engine.sessions_mut();
        sessions.set_waypoint("intro", 0, pose_at(0., 0.)).unwrap();
        sessions.set_waypoint("intro", 1, pose_at(1., 0.)).unwrap();
        engine.start("intro", 1, &mut host).unwrap();
        assert_eq!(engine.progress(&1).map(|p| p.total_ticks), Some(100));
    }

    #[test]
    fn capture_rejects_out_of_range_indices() {
        let mut host = TestHost::with_subject(1, GameMode::Creative);
        host.subject_mut(1).pose = pose_at(1., 0.);
        let mut engine = CameraPathEngine::<u32>::default();

        assert!(matches!(
            engine.capture_waypoint("intro", usize::MAX, &1, &host),
            Err(ConfigurationError::WaypointIndexOutOfRange { .. })
        ));
        assert!(!engine.sessions().contains("intro"));
    }

    #[test]
    fn session_writes_do_not_reach_running_playback() {
        let mut host = TestHost::with_subject(1, GameMode::Creative);
        let mut engine = engine_with_session(&mut host);
        engine.start("intro", 1, &mut host).unwrap();

        engine
            .sessions_mut()
            .set_waypoint("intro", 1, pose_at(1000., 0.))
            .unwrap();
        engine.sessions_mut().set_easing("intro", Easing::EaseIn);
        engine.sessions_mut().reset("intro");

        for _ in 0..21 {
            engine.tick(&mut host);
        }
        let delivered = &host.subject(1).delivered;
        assert_eq!(delivered[10].position, DVec3::new(5., 0., 0.));
        assert_eq!(delivered.last(), Some(&pose_at(10., 90.)));
        assert_eq!(host.subject(1).mode, GameMode::Creative);
    }

    #[test]
    fn cancel_then_restart() {
        let mut host = TestHost::with_subject(1, GameMode::Adventure);
        let mut engine = engine_with_session(&mut host);

        engine.start("intro", 1, &mut host).unwrap();
        engine.tick(&mut host);
        assert!(engine.cancel(&1, &mut host));
        assert!(!engine.cancel(&1, &mut host));
        assert_eq!(host.subject(1).mode, GameMode::Adventure);

        let run = engine.start("intro", 1, &mut host).unwrap();
        assert_eq!(engine.progress(&1).map(|p| p.run), Some(run));

        let reasons: Vec<_> = engine
            .drain_events()
            .into_iter()
            .filter_map(|event| match event {
                PlaybackEvent::Cancelled { reason, .. } => Some(reason),
                _ => None,
            })
            .collect();
        assert_eq!(reasons, vec![CancelReason::Requested]);
    }

    #[test]
    fn settings_drive_defaults_and_tick_rate() {
        let mut host = TestHost::with_subject(1, GameMode::Creative);
        let mut engine = CameraPathEngine::<u32>::new(CameraPathSettings {
            tick_rate: 10.,
            default_duration: 2.,
            default_target_mode: GameMode::Spectator,
            ..Default::default()
        });
        let sessions = engine.sessions_mut();
        sessions.set_waypoint("intro", 0, pose_at(0., 0.)).unwrap();
        sessions.set_waypoint("intro", 1, pose_at(1., 0.)).unwrap();

        engine.start("intro", 1, &mut host).unwrap();
        assert_eq!(engine.progress(&1).map(|p| p.total_ticks), Some(20));
        assert_eq!(host.subject(1).mode, GameMode::Spectator);
    }
}
