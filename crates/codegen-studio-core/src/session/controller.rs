//! Recording session state machine.
//!
//! The controller lives on the foreground thread. It launches one recorder
//! at a time, hands the child to a supervisor thread, and applies worker
//! reports delivered through [`SessionController::handle_event`].

use crate::{
    CoreResult, SessionError,
    recorder::{
        OutputFormat, RecorderCommand, RecorderConfig, RecorderHandle, RecorderLauncher,
        log_path_for, supervise, temp_output_path,
    },
    session::{
        ControlState, EventDispatcher, Notice, Presenter, SessionEvent, SessionState,
        SessionStatus, StatusColor,
    },
};

use std::{
    fs,
    panic::Location,
    path::{Path, PathBuf},
    process::Stdio,
    time::Instant,
};

use error_location::ErrorLocation;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

/// A session the user stopped whose recorder has not reported back yet.
#[derive(Debug)]
struct StoppedSession {
    session_id: Uuid,
    output_file: PathBuf,
    format: OutputFormat,
}

/// Owns the recording session and mediates between user commands, the
/// recorder process and the presentation layer.
pub struct SessionController<P, D> {
    launcher: RecorderLauncher,
    presenter: P,
    dispatcher: D,
    state: SessionState,
    stopped: Option<StoppedSession>,
}

impl<P, D> SessionController<P, D>
where
    P: Presenter,
    D: EventDispatcher + Clone,
{
    /// Create a controller in the idle state and present it.
    pub fn new(launcher: RecorderLauncher, mut presenter: P, dispatcher: D) -> Self {
        presenter.set_status("Ready to record", StatusColor::Green);
        presenter.set_controls(ControlState::ready(false));

        Self {
            launcher,
            presenter,
            dispatcher,
            state: SessionState::Idle,
            stopped: None,
        }
    }

    /// Current session state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Coarse session status.
    pub fn status(&self) -> SessionStatus {
        self.state.status()
    }

    /// Whether a recorder is running.
    pub fn is_recording(&self) -> bool {
        !self.state.is_ready()
    }

    /// The generated script, once a session completed.
    pub fn script(&self) -> Option<&str> {
        self.state.script()
    }

    /// The presentation layer.
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// The presentation layer, mutably.
    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Replace the launcher used by the next [`start`](Self::start).
    pub fn set_launcher(&mut self, launcher: RecorderLauncher) {
        self.launcher = launcher;
    }

    /// Launch a recorder for `config`. Never blocks on the recorder.
    ///
    /// Failures are reported to the presenter and returned. An empty URL or
    /// a running session leaves the state untouched; a launch failure moves
    /// the session to `Error`.
    #[track_caller]
    #[instrument(
        skip(self, config),
        fields(
            url = %config.target_url(),
            format = %config.output_format,
            headless = config.headless,
            locale = %config.locale,
        )
    )]
    pub fn start(&mut self, config: &RecorderConfig) -> CoreResult<Uuid> {
        match self.launch(config) {
            Ok(session_id) => Ok(session_id),
            Err(e) => {
                error!(error = ?e, "Failed to start recording");
                if matches!(e, SessionError::SpawnFailure { .. }) {
                    self.fail(e.user_message());
                }
                self.report(&e);
                Err(e)
            }
        }
    }

    #[track_caller]
    fn launch(&mut self, config: &RecorderConfig) -> CoreResult<Uuid> {
        if self.is_recording() {
            return Err(SessionError::AlreadyRecording {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if config.target_url().is_empty() {
            return Err(SessionError::EmptyUrl {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let session_id = Uuid::new_v4();
        let format = config.output_format.clone();
        let output_file = temp_output_path(session_id, format.extension());
        let log_path = log_path_for(&output_file);
        let browser = self.launcher.bundled_browser();

        let command =
            RecorderCommand::build(&self.launcher, config, &output_file, browser.as_deref());

        info!(
            session_id = %session_id,
            program = command.program(),
            args = ?command.args_lossy(),
            "Launching recorder"
        );

        let log = fs::File::create(&log_path).map_err(|e| SessionError::SpawnFailure {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;
        let log_err = log.try_clone().map_err(|e| SessionError::SpawnFailure {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;

        let child = command
            .to_command(Stdio::from(log), Stdio::from(log_err))
            .spawn()
            .map_err(|e| SessionError::SpawnFailure {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            })?;

        let handle = supervise(
            session_id,
            child,
            log_path,
            self.launcher.stop_timeout,
            self.dispatcher.clone(),
        )?;

        info!(session_id = %session_id, pid = handle.pid(), "Recording started");

        self.stopped = None;
        self.state = SessionState::Recording {
            session_id,
            handle,
            output_file,
            format,
            started_at: Instant::now(),
        };

        self.presenter
            .set_status("Recording in progress...", StatusColor::Red);
        self.presenter.set_controls(ControlState::RECORDING);

        Ok(session_id)
    }

    /// Stop the running recorder. No-op when not recording.
    ///
    /// Returns to the ready state immediately. Termination happens on the
    /// supervisor thread and its failures arrive later as events.
    #[instrument(skip(self))]
    pub fn stop(&mut self) {
        // The handle drops here; the worker keeps going on its own.
        self.stop_recording();
    }

    /// Stop any running recorder and block until it has exited.
    ///
    /// Meant for application exit: the wait is bounded by the stop timeout
    /// plus a short margin, so a recorder that ignores the terminate request
    /// is killed before this returns. Returns `false` if the recorder could
    /// not be confirmed gone in that time.
    #[instrument(skip(self))]
    pub fn shutdown(&mut self) -> bool {
        let Some(handle) = self.stop_recording() else {
            return true;
        };

        let pid = handle.pid();
        let limit = handle.shutdown_limit();
        let finished = handle.wait(limit);

        if finished {
            info!(pid, "Recorder exited before shutdown");
        } else {
            warn!(pid, limit_ms = limit.as_millis(), "Recorder still running at shutdown");
        }
        finished
    }

    fn stop_recording(&mut self) -> Option<RecorderHandle> {
        if !self.is_recording() {
            return None;
        }

        let SessionState::Recording {
            session_id,
            handle,
            output_file,
            format,
            started_at,
        } = std::mem::replace(&mut self.state, SessionState::Idle)
        else {
            return None;
        };

        if !handle.request_stop() {
            debug!(session_id = %session_id, "Recorder already exited");
        }

        info!(
            session_id = %session_id,
            duration_ms = started_at.elapsed().as_millis(),
            "Recording stopped"
        );

        self.stopped = Some(StoppedSession {
            session_id,
            output_file,
            format,
        });

        self.presenter
            .set_status("Recording stopped", StatusColor::Orange);
        self.presenter.set_controls(ControlState::ready(false));

        Some(handle)
    }

    /// Apply a worker report. Must be called on the foreground thread.
    #[instrument(skip(self, event), fields(session_id = %event.session_id()))]
    pub fn handle_event(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::TerminationFailed { reason, .. } => {
                let e = SessionError::TerminationFailure {
                    reason,
                    location: ErrorLocation::from(Location::caller()),
                };
                error!(error = ?e, "Recorder termination failed");
                self.report(&e);
            }
            SessionEvent::Exited {
                session_id,
                exit_code,
                log,
            } => {
                if !log.trim().is_empty() {
                    debug!(session_id = %session_id, log = %log.trim(), "Recorder output");
                }

                if self.is_current(session_id) {
                    self.complete(exit_code);
                } else if self.was_stopped(session_id) {
                    self.complete_stopped();
                } else {
                    debug!(session_id = %session_id, "Ignoring exit of unknown session");
                }
            }
            SessionEvent::WaitFailed { session_id, reason } => {
                if self.is_current(session_id) {
                    let message = format!("Recording failed: {}", reason);
                    error!(session_id = %session_id, reason = %reason, "Lost track of recorder");
                    self.fail(message.clone());
                    self.presenter.notify(Notice::error(message));
                } else {
                    self.stopped = None;
                    warn!(session_id = %session_id, reason = %reason, "Lost track of stopped recorder");
                }
            }
        }
    }

    /// Clear the displayed script and disable saving.
    ///
    /// Refused while recording.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        if self.is_recording() {
            warn!("Clear ignored while recording");
            return;
        }

        self.state = SessionState::Idle;
        self.stopped = None;

        self.presenter.show_script(None);
        self.presenter.set_status("Output cleared", StatusColor::Blue);
        self.presenter.set_controls(ControlState::ready(false));

        debug!("Output cleared");
    }

    /// Write the generated script to `destination`, overwriting it.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn save(&mut self, destination: &Path) -> CoreResult<PathBuf> {
        let written = match &self.state {
            SessionState::Completed { script, .. } if !script.trim().is_empty() => {
                fs::write(destination, script).map_err(|e| SessionError::SaveFailure {
                    path: destination.to_path_buf(),
                    source: e,
                    location: ErrorLocation::from(Location::caller()),
                })
            }
            _ => Err(SessionError::NoContentToSave {
                location: ErrorLocation::from(Location::caller()),
            }),
        };

        match written {
            Ok(()) => {
                let message = format!("Script saved to {}", destination.display());
                info!(path = ?destination, "Script saved");
                self.presenter.set_status(&message, StatusColor::Green);
                self.presenter.notify(Notice::success(message));
                Ok(destination.to_path_buf())
            }
            Err(e) => {
                warn!(error = ?e, "Script not saved");
                self.report(&e);
                Err(e)
            }
        }
    }

    fn is_current(&self, session_id: Uuid) -> bool {
        matches!(&self.state, SessionState::Recording { session_id: id, .. } if *id == session_id)
    }

    fn was_stopped(&self, session_id: Uuid) -> bool {
        self.stopped
            .as_ref()
            .is_some_and(|s| s.session_id == session_id)
    }

    fn complete(&mut self, exit_code: Option<i32>) {
        if !self.is_recording() {
            return;
        }

        let SessionState::Recording {
            session_id,
            output_file,
            format,
            started_at,
            ..
        } = std::mem::replace(&mut self.state, SessionState::Idle)
        else {
            return;
        };

        match fs::read_to_string(&output_file) {
            Ok(script) => {
                info!(
                    session_id = %session_id,
                    exit_code = ?exit_code,
                    duration_ms = started_at.elapsed().as_millis(),
                    script_len = script.len(),
                    "Recording completed"
                );
                self.enter_completed(session_id, output_file, format, script);
            }
            Err(source) => {
                let e = SessionError::OutputReadFailure {
                    path: output_file,
                    source,
                    location: ErrorLocation::from(Location::caller()),
                };
                error!(session_id = %session_id, exit_code = ?exit_code, error = ?e, "No script produced");
                self.fail(e.user_message());
                self.report(&e);
            }
        }
    }

    fn complete_stopped(&mut self) {
        let Some(stopped) = self.stopped.take() else {
            return;
        };

        match fs::read_to_string(&stopped.output_file) {
            Ok(script) if !script.trim().is_empty() => {
                info!(
                    session_id = %stopped.session_id,
                    script_len = script.len(),
                    "Stopped recorder left a script"
                );
                self.enter_completed(
                    stopped.session_id,
                    stopped.output_file,
                    stopped.format,
                    script,
                );
            }
            _ => debug!(session_id = %stopped.session_id, "Stopped recorder left no script"),
        }
    }

    fn enter_completed(
        &mut self,
        session_id: Uuid,
        output_file: PathBuf,
        format: OutputFormat,
        script: String,
    ) {
        self.presenter.show_script(Some(&script));
        self.presenter
            .set_status("Recording completed", StatusColor::Green);
        self.presenter.set_controls(ControlState::ready(true));

        self.state = SessionState::Completed {
            session_id,
            output_file,
            format,
            script,
        };
    }

    fn fail(&mut self, message: String) {
        self.presenter.set_status("Recording failed", StatusColor::Red);
        self.presenter.set_controls(ControlState::ready(false));
        self.state = SessionState::Error { message };
    }

    fn report(&mut self, e: &SessionError) {
        let notice = match e {
            SessionError::NoContentToSave { .. } => Notice::warning(e.user_message()),
            _ => Notice::error(e.user_message()),
        };
        self.presenter.notify(notice);
    }
}
