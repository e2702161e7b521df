use crate::AppResult;

use std::{fs, panic::Location, path::PathBuf};

use codegen_studio_core::{SessionError, SessionState};
use error_location::ErrorLocation;
use tracing::debug;

/// Picks where a saved script goes.
///
/// Stands in for a save dialog: scripts land in one directory, named after
/// the session so repeated saves of different recordings never collide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveLocation {
    dir: PathBuf,
}

impl SaveLocation {
    /// Save into `dir`.
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Destination for the script held by `state`.
    ///
    /// Creates the directory when there is a script to save. Failing to
    /// create it is a [`SessionError::SaveFailure`] for that directory.
    #[track_caller]
    pub fn destination_for(&self, state: &SessionState) -> AppResult<PathBuf> {
        let extension = state.format().map(|f| f.extension()).unwrap_or("py");
        let name = match state.session_id() {
            Some(id) => format!("codegen-{}.{}", id, extension),
            None => format!("codegen.{}", extension),
        };

        if state.script().is_some() && !self.dir.exists() {
            fs::create_dir_all(&self.dir).map_err(|e| SessionError::SaveFailure {
                path: self.dir.clone(),
                source: e,
                location: ErrorLocation::from(Location::caller()),
            })?;
            debug!(dir = ?self.dir, "Created save directory");
        }

        Ok(self.dir.join(name))
    }
}
