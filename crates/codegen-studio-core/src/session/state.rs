use crate::recorder::{OutputFormat, RecorderHandle};

use std::{path::Path, time::Instant};

use uuid::Uuid;

/// Coarse session status, for display and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Nothing recorded or output cleared.
    Idle,
    /// A recorder is running.
    Recording,
    /// A script is available.
    Completed,
    /// The last session failed.
    Error,
}

/// The single recording session.
///
/// The recorder handle only exists inside `Recording`, so "handle present iff
/// recording" cannot be violated.
#[derive(Debug)]
pub enum SessionState {
    /// Ready, nothing to show.
    Idle,
    /// A recorder is running.
    Recording {
        /// Session id.
        session_id: Uuid,
        /// Handle to the supervised recorder.
        handle: RecorderHandle,
        /// File the recorder writes its script to.
        output_file: std::path::PathBuf,
        /// Script language requested.
        format: OutputFormat,
        /// When the recorder was launched.
        started_at: Instant,
    },
    /// The recorder exited and left a script.
    Completed {
        /// Session id.
        session_id: Uuid,
        /// File the script was read from.
        output_file: std::path::PathBuf,
        /// Script language.
        format: OutputFormat,
        /// Exact contents of `output_file`.
        script: String,
    },
    /// The last session failed.
    Error {
        /// User-facing description.
        message: String,
    },
}

impl SessionState {
    /// Coarse status.
    pub fn status(&self) -> SessionStatus {
        match self {
            SessionState::Idle => SessionStatus::Idle,
            SessionState::Recording { .. } => SessionStatus::Recording,
            SessionState::Completed { .. } => SessionStatus::Completed,
            SessionState::Error { .. } => SessionStatus::Error,
        }
    }

    /// Whether a new recording may be started.
    pub fn is_ready(&self) -> bool {
        !matches!(self, SessionState::Recording { .. })
    }

    /// Id of the running or completed session.
    pub fn session_id(&self) -> Option<Uuid> {
        match self {
            SessionState::Recording { session_id, .. }
            | SessionState::Completed { session_id, .. } => Some(*session_id),
            SessionState::Idle | SessionState::Error { .. } => None,
        }
    }

    /// Recorder output file of the running or completed session.
    pub fn output_file(&self) -> Option<&Path> {
        match self {
            SessionState::Recording { output_file, .. }
            | SessionState::Completed { output_file, .. } => Some(output_file),
            SessionState::Idle | SessionState::Error { .. } => None,
        }
    }

    /// Script language of the running or completed session.
    pub fn format(&self) -> Option<&OutputFormat> {
        match self {
            SessionState::Recording { format, .. } | SessionState::Completed { format, .. } => {
                Some(format)
            }
            SessionState::Idle | SessionState::Error { .. } => None,
        }
    }

    /// Generated script, once completed.
    pub fn script(&self) -> Option<&str> {
        match self {
            SessionState::Completed { script, .. } => Some(script),
            _ => None,
        }
    }
}
