use std::{fmt::Debug, hash::Hash};

use bevy::{
    log::{debug, info, warn},
    platform::collections::HashMap,
};

use super::{
    CancelReason, PlaybackEvent, PlaybackTask, PlaybackTaskKind, RunId, RunPhase, RunProgress,
    TraversalRun,
};
use crate::{
    errors::{ConfigurationError, PlaybackResult},
    scheduler::Scheduler,
    session::SessionSnapshot,
    settings::duration_to_ticks,
    subject::{GameMode, SubjectHost},
};

/// What a fired step task ended up doing, decided while the run is borrowed
enum StepOutcome {
    Continue,
    Finished,
    Abandon,
}

/// Drives traversal runs, at most one per subject.
///
/// A run goes through `Running`, where a repeating task delivers one interpolated pose per tick,
/// then `Completing`, where a one-shot task delivers the terminal pose and restores the
/// subject's game mode. Scheduling goes through whatever [`Scheduler`] the caller provides, and
/// every fired task must be handed back through [`PlaybackController::handle`].
#[derive(Debug)]
pub struct PlaybackController<K> {
    runs: HashMap<K, TraversalRun<K>>,
    next_run: u64,
    tick_rate: f64,
    events: Vec<PlaybackEvent<K>>,
}

impl<K> PlaybackController<K>
where
    K: Clone + Eq + Hash + Debug,
{
    pub fn new(tick_rate: f64) -> Self {
        Self {
            runs: HashMap::new(),
            next_run: 0,
            tick_rate,
            events: Vec::new(),
        }
    }

    pub fn tick_rate(&self) -> f64 {
        self.tick_rate
    }

    /// Starts playing `snapshot` on `subject`, replacing any run the subject already had.
    ///
    /// The subject's current game mode is saved on the run and the session's target mode is
    /// applied. Fails without touching anything if the host doesn't know the subject.
    pub fn start(
        &mut self,
        snapshot: SessionSnapshot,
        subject: K,
        host: &mut impl SubjectHost<K>,
        scheduler: &mut impl Scheduler<PlaybackTask<K>>,
    ) -> PlaybackResult<RunId> {
        if host.current_mode(&subject).is_none() {
            return Err(ConfigurationError::UnknownSubject);
        }

        // Restores the previous run's saved mode, so the mode saved below is the real one
        self.stop(&subject, host, scheduler, CancelReason::Replaced);

        let saved_mode = host
            .current_mode(&subject)
            .ok_or(ConfigurationError::UnknownSubject)?;
        host.set_mode(&subject, snapshot.target_mode);

        let id = RunId(self.next_run);
        self.next_run += 1;

        let total_ticks = duration_to_ticks(snapshot.duration, self.tick_rate);
        let session = snapshot.session.clone();
        let mut run = TraversalRun::new(id, subject.clone(), snapshot, total_ticks, saved_mode);
        run.step_task = Some(scheduler.schedule_repeating(
            1,
            PlaybackTask {
                subject: subject.clone(),
                run: id,
                kind: PlaybackTaskKind::Step,
            },
        ));

        info!("Starting camera session {session:?} on {subject:?} for {total_ticks} ticks");
        self.events.push(PlaybackEvent::Started {
            subject: subject.clone(),
            session,
            run: id,
            total_ticks,
        });
        self.runs.insert(subject, run);

        Ok(id)
    }

    /// Stops the subject's run without the terminal teleport, restoring its saved game mode.
    /// Returns `false` if the subject had no run.
    pub fn cancel(
        &mut self,
        subject: &K,
        host: &mut impl SubjectHost<K>,
        scheduler: &mut impl Scheduler<PlaybackTask<K>>,
    ) -> bool {
        self.stop(subject, host, scheduler, CancelReason::Requested)
    }

    /// Cancels every active run, e.g. when the host shuts down
    pub fn cancel_all(
        &mut self,
        host: &mut impl SubjectHost<K>,
        scheduler: &mut impl Scheduler<PlaybackTask<K>>,
    ) -> usize {
        let subjects: Vec<K> = self.runs.keys().cloned().collect();
        subjects
            .iter()
            .filter(|subject| self.stop(subject, host, scheduler, CancelReason::Requested))
            .count()
    }

    /// Reacts to a fired scheduler task. Tasks belonging to runs that already finished or were
    /// replaced are ignored.
    pub fn handle(
        &mut self,
        task: PlaybackTask<K>,
        host: &mut impl SubjectHost<K>,
        scheduler: &mut impl Scheduler<PlaybackTask<K>>,
    ) {
        let Some(run) = self
            .runs
            .get_mut(&task.subject)
            .filter(|run| run.id == task.run)
        else {
            debug!(
                "Ignoring {:?} task of finished run {:?} on {:?}",
                task.kind, task.run, task.subject
            );
            return;
        };

        match (task.kind, run.phase) {
            (PlaybackTaskKind::Step, RunPhase::Running) => {
                let outcome = match run.step() {
                    Some(pose) if host.deliver_pose(&task.subject, &pose) => {
                        if run.phase == RunPhase::Completing {
                            StepOutcome::Finished
                        } else {
                            StepOutcome::Continue
                        }
                    }
                    _ => StepOutcome::Abandon,
                };

                match outcome {
                    StepOutcome::Continue => {}
                    StepOutcome::Finished => {
                        if let Some(handle) = run.step_task.take() {
                            scheduler.cancel(handle);
                        }
                        run.completion_task = Some(scheduler.schedule_once(
                            1,
                            PlaybackTask {
                                kind: PlaybackTaskKind::Complete,
                                ..task
                            },
                        ));
                    }
                    StepOutcome::Abandon => self.abandon(&task.subject, scheduler),
                }
            }
            (PlaybackTaskKind::Complete, RunPhase::Completing) => {
                self.complete(&task.subject, host, scheduler);
            }
            (kind, phase) => {
                debug!("Ignoring {kind:?} task for run {:?} in {phase:?}", task.run);
            }
        }
    }

    pub fn is_active(&self, subject: &K) -> bool {
        self.runs.contains_key(subject)
    }

    pub fn run(&self, subject: &K) -> Option<&TraversalRun<K>> {
        self.runs.get(subject)
    }

    pub fn progress(&self, subject: &K) -> Option<RunProgress> {
        self.runs.get(subject).map(TraversalRun::progress)
    }

    /// Game mode the subject had before its current run started
    pub fn saved_mode(&self, subject: &K) -> Option<GameMode> {
        self.runs.get(subject).map(TraversalRun::saved_mode)
    }

    pub fn active_runs(&self) -> impl Iterator<Item = &TraversalRun<K>> {
        self.runs.values()
    }

    pub fn drain_events(&mut self) -> Vec<PlaybackEvent<K>> {
        std::mem::take(&mut self.events)
    }

    fn complete(
        &mut self,
        subject: &K,
        host: &mut impl SubjectHost<K>,
        scheduler: &mut impl Scheduler<PlaybackTask<K>>,
    ) {
        let Some(run) = self.release(subject, scheduler) else {
            return;
        };

        let delivered = host.deliver_pose(subject, run.terminal_pose());
        let restored = host.set_mode(subject, run.saved_mode);
        if !(delivered && restored) {
            warn!(
                "Subject {subject:?} disappeared while finishing camera session {:?}",
                run.session()
            );
        }

        info!("Finished camera session {:?} on {subject:?}", run.session());
        self.events.push(PlaybackEvent::Completed {
            subject: run.subject,
            session: run.snapshot.session,
            run: run.id,
        });
    }

    fn stop(
        &mut self,
        subject: &K,
        host: &mut impl SubjectHost<K>,
        scheduler: &mut impl Scheduler<PlaybackTask<K>>,
        reason: CancelReason,
    ) -> bool {
        let Some(run) = self.release(subject, scheduler) else {
            return false;
        };

        host.set_mode(subject, run.saved_mode);

        info!("Cancelled camera session {:?} on {subject:?} ({reason:?})", run.session());
        self.events.push(PlaybackEvent::Cancelled {
            subject: run.subject,
            session: run.snapshot.session,
            run: run.id,
            reason,
        });
        true
    }

    /// Drops a run whose subject the host lost track of. There is nobody left to restore.
    fn abandon(&mut self, subject: &K, scheduler: &mut impl Scheduler<PlaybackTask<K>>) {
        let Some(run) = self.release(subject, scheduler) else {
            return;
        };

        warn!("Subject {subject:?} disappeared during camera session {:?}", run.session());
        self.events.push(PlaybackEvent::Cancelled {
            subject: run.subject,
            session: run.snapshot.session,
            run: run.id,
            reason: CancelReason::SubjectMissing,
        });
    }

    /// Removes the subject's run and every task it still has scheduled
    fn release(
        &mut self,
        subject: &K,
        scheduler: &mut impl Scheduler<PlaybackTask<K>>,
    ) -> Option<TraversalRun<K>> {
        let mut run = self.runs.remove(subject)?;
        for handle in [run.step_task.take(), run.completion_task.take()]
            .into_iter()
            .flatten()
        {
            scheduler.cancel(handle);
        }
        Some(run)
    }
}
