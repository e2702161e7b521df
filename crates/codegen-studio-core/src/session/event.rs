use uuid::Uuid;

/// Report from a recorder worker to the foreground thread.
///
/// Every variant carries the id of the session it belongs to, so a report
/// that arrives after the session was stopped can be told apart from one for
/// the current recording.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The recorder process exited.
    Exited {
        /// Session the recorder belonged to.
        session_id: Uuid,
        /// Exit code, `None` if killed by a signal. Logged only.
        exit_code: Option<i32>,
        /// Captured stdout and stderr.
        log: String,
    },
    /// Waiting on the recorder failed.
    WaitFailed {
        /// Session the recorder belonged to.
        session_id: Uuid,
        /// Human-readable cause.
        reason: String,
    },
    /// Terminating the recorder failed. The recorder may still be running.
    TerminationFailed {
        /// Session the recorder belonged to.
        session_id: Uuid,
        /// Human-readable cause.
        reason: String,
    },
}

impl SessionEvent {
    /// Session this event belongs to.
    pub fn session_id(&self) -> Uuid {
        match self {
            SessionEvent::Exited { session_id, .. }
            | SessionEvent::WaitFailed { session_id, .. }
            | SessionEvent::TerminationFailed { session_id, .. } => *session_id,
        }
    }
}
