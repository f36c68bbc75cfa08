use crate::{
    interpolation::interpolate, pose::CameraPose, scheduler::TaskHandle,
    session::SessionSnapshot, subject::GameMode,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RunId(pub(crate) u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RunPhase {
    /// Delivering interpolated poses, one per tick
    Running,
    /// Every interpolated pose was delivered; waiting for the terminal teleport
    Completing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlaybackTaskKind {
    Step,
    Complete,
}

/// Scheduler payload. Carries the run id so tasks outliving their run can be told apart.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PlaybackTask<K> {
    pub subject: K,
    pub run: RunId,
    pub kind: PlaybackTaskKind,
}

/// Snapshot of where a run is at
#[derive(Clone, Debug, PartialEq)]
pub struct RunProgress {
    pub run: RunId,
    pub session: String,
    pub phase: RunPhase,
    pub tick: u64,
    pub total_ticks: u64,
}

impl RunProgress {
    pub fn fraction(&self) -> f64 {
        self.tick as f64 / self.total_ticks as f64
    }
}

/// One playback of a session for one subject. Owns an immutable copy of the session taken
/// when the run started, plus the tick counter.
#[derive(Clone, Debug)]
pub struct TraversalRun<K> {
    pub(crate) id: RunId,
    pub(crate) subject: K,
    pub(crate) snapshot: SessionSnapshot,
    pub(crate) phase: RunPhase,
    pub(crate) tick: u64,
    pub(crate) total_ticks: u64,
    pub(crate) saved_mode: GameMode,
    pub(crate) step_task: Option<TaskHandle>,
    pub(crate) completion_task: Option<TaskHandle>,
}

impl<K> TraversalRun<K> {
    pub(crate) fn new(
        id: RunId,
        subject: K,
        snapshot: SessionSnapshot,
        total_ticks: u64,
        saved_mode: GameMode,
    ) -> Self {
        Self {
            id,
            subject,
            snapshot,
            phase: RunPhase::Running,
            tick: 0,
            total_ticks: total_ticks.max(1),
            saved_mode,
            step_task: None,
            completion_task: None,
        }
    }

    pub fn id(&self) -> RunId {
        self.id
    }

    pub fn subject(&self) -> &K {
        &self.subject
    }

    pub fn session(&self) -> &str {
        &self.snapshot.session
    }

    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    pub fn saved_mode(&self) -> GameMode {
        self.saved_mode
    }

    pub fn terminal_pose(&self) -> &CameraPose {
        &self.snapshot.terminal_pose
    }

    pub fn progress(&self) -> RunProgress {
        RunProgress {
            run: self.id,
            session: self.snapshot.session.clone(),
            phase: self.phase,
            tick: self.tick,
            total_ticks: self.total_ticks,
        }
    }

    /// Pose for the current tick, after which the tick counter moves on. Enters
    /// [`RunPhase::Completing`] once the last tick is consumed. Returns `None` outside of
    /// [`RunPhase::Running`].
    pub fn step(&mut self) -> Option<CameraPose> {
        if self.phase != RunPhase::Running {
            return None;
        }

        let t = self.tick as f64 / self.total_ticks as f64;
        let pose = interpolate(&self.snapshot.waypoints, self.snapshot.easing.ease(t)).ok()?;

        self.tick += 1;
        if self.tick >= self.total_ticks {
            self.phase = RunPhase::Completing;
        }

        Some(pose)
    }
}

#[cfg(test)]
mod tests {
    use bevy::math::DVec3;

    use super::*;
    use crate::easing::Easing;

    fn snapshot(easing: Easing) -> SessionSnapshot {
        let a = CameraPose::new("world", DVec3::ZERO, 0., 0.);
        let b = CameraPose::new("world", DVec3::new(10., 0., 0.), 90., 0.);
        SessionSnapshot {
            session: "intro".to_string(),
            waypoints: vec![a, b.clone()],
            duration: 1.,
            easing,
            terminal_pose: b,
            target_mode: GameMode::Spectator,
        }
    }

    #[test]
    fn steps_until_completing() {
        let mut run = TraversalRun::new(
            RunId(0),
            (),
            snapshot(Easing::Linear),
            4,
            GameMode::Survival,
        );

        let xs: Vec<f64> = std::iter::from_fn(|| run.step())
            .map(|p| p.position.x)
            .collect();

        assert_eq!(xs, vec![0., 2.5, 5., 7.5]);
        assert_eq!(run.phase(), RunPhase::Completing);
        assert_eq!(run.step(), None);
    }

    #[test]
    fn halfway_pose_matches_linear_blend() {
        let mut run = TraversalRun::new(
            RunId(0),
            (),
            snapshot(Easing::Linear),
            20,
            GameMode::Survival,
        );
        for _ in 0..10 {
            run.step();
        }
        assert_eq!(run.progress().fraction(), 0.5);
        let pose = run.step().unwrap();
        assert_eq!(pose.position, DVec3::new(5., 0., 0.));
        assert_eq!(pose.yaw, 45.);
        assert_eq!(pose.pitch, 0.);
    }

    #[test]
    fn zero_tick_runs_still_take_one_step() {
        let mut run = TraversalRun::new(
            RunId(0),
            (),
            snapshot(Easing::EaseIn),
            0,
            GameMode::Survival,
        );
        assert_eq!(run.progress().total_ticks, 1);
        assert!(run.step().is_some());
        assert_eq!(run.phase(), RunPhase::Completing);
    }
}
