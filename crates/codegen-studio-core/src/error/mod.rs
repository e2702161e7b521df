use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Recording session errors with source location tracking.
#[derive(Error, Debug)]
pub enum SessionError {
    /// No target URL was configured.
    #[error("Please enter a target URL {location}")]
    EmptyUrl {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A recording is already in progress.
    #[error("A recording is already in progress {location}")]
    AlreadyRecording {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The recorder process could not be launched.
    #[error("Failed to start recording: {source} {location}")]
    SpawnFailure {
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The recorder process could not be terminated.
    #[error("Failed to stop recording: {reason} {location}")]
    TerminationFailure {
        /// Description of the termination failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The generated script could not be read after the recorder exited.
    #[error("Failed to read generated code from {path:?}: {source} {location}")]
    OutputReadFailure {
        /// Temporary output file the recorder was told to write.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The script could not be written to the chosen destination.
    #[error("Failed to save script to {path:?}: {source} {location}")]
    SaveFailure {
        /// Destination chosen by the user.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Save was requested but there is no generated script.
    #[error("No code to save {location}")]
    NoContentToSave {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A session event could not be handed to the foreground queue.
    #[error("Failed to dispatch session event: {reason} {location}")]
    DispatchFailed {
        /// Description of the dispatch failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

impl SessionError {
    /// Short, user-facing message without the source location suffix.
    pub fn user_message(&self) -> String {
        match self {
            SessionError::EmptyUrl { .. } => "Please enter a target URL".to_string(),
            SessionError::AlreadyRecording { .. } => {
                "A recording is already in progress".to_string()
            }
            SessionError::SpawnFailure { source, .. } => {
                format!("Failed to start recording: {}", source)
            }
            SessionError::TerminationFailure { reason, .. } => {
                format!("Failed to stop recording: {}", reason)
            }
            SessionError::OutputReadFailure { source, .. } => {
                format!("Failed to read generated code: {}", source)
            }
            SessionError::SaveFailure { source, .. } => {
                format!("Failed to save script: {}", source)
            }
            SessionError::NoContentToSave { .. } => "No code to save".to_string(),
            SessionError::DispatchFailed { reason, .. } => {
                format!("Recording failed: {}", reason)
            }
        }
    }
}

/// Result type alias using [`SessionError`].
pub type Result<T> = std::result::Result<T, SessionError>;
