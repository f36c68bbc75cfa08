use super::RunId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CancelReason {
    /// Cancelled through [`PlaybackController::cancel`](super::PlaybackController::cancel)
    Requested,
    /// Another run was started on the same subject
    Replaced,
    /// The host stopped recognizing the subject mid-run
    SubjectMissing,
}

/// Notable changes in a run's lifecycle, queued on the controller until the host drains them
#[derive(Clone, Debug, PartialEq)]
pub enum PlaybackEvent<K> {
    Started {
        subject: K,
        session: String,
        run: RunId,
        total_ticks: u64,
    },
    Completed {
        subject: K,
        session: String,
        run: RunId,
    },
    Cancelled {
        subject: K,
        session: String,
        run: RunId,
        reason: CancelReason,
    },
}

impl<K> PlaybackEvent<K> {
    pub fn subject(&self) -> &K {
        match self {
            PlaybackEvent::Started { subject, .. }
            | PlaybackEvent::Completed { subject, .. }
            | PlaybackEvent::Cancelled { subject, .. } => subject,
        }
    }

    pub fn session(&self) -> &str {
        match self {
            PlaybackEvent::Started { session, .. }
            | PlaybackEvent::Completed { session, .. }
            | PlaybackEvent::Cancelled { session, .. } => session,
        }
    }
}
