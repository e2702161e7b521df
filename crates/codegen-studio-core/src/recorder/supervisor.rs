//! Recorder process supervision.
//!
//! The worker thread is the only owner of the [`Child`]. The foreground
//! thread keeps a [`RecorderHandle`] and talks to the worker through a stop
//! channel; the worker reports back exclusively through an
//! [`EventDispatcher`].

use crate::{
    SessionError,
    recorder::MAX_STOP_TIMEOUT,
    session::{EventDispatcher, SessionEvent},
};

use std::{
    panic::Location,
    path::PathBuf,
    process::Child,
    sync::mpsc::{self, Receiver, RecvTimeoutError, Sender},
    thread::{self, JoinHandle},
    time::{Duration, Instant},
};

use error_location::ErrorLocation;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// How often the worker checks whether the recorder has exited.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Request from the foreground thread to end the recording.
#[derive(Debug, Clone, Copy)]
pub(crate) struct StopRequest;

/// Foreground-side handle to a running recorder.
///
/// Owned by the `Recording` session state; dropping it without a stop
/// request is treated by the worker as a stop request.
#[derive(Debug)]
pub struct RecorderHandle {
    pid: u32,
    stop_tx: Sender<StopRequest>,
    worker: JoinHandle<()>,
    stop_timeout: Duration,
}

impl RecorderHandle {
    /// OS process id of the recorder.
    pub fn pid(&self) -> u32 {
        self.pid
    }

    /// Ask the worker to terminate the recorder. Never blocks.
    ///
    /// Returns `false` if the worker has already finished, in which case its
    /// exit event is already queued.
    pub(crate) fn request_stop(&self) -> bool {
        self.stop_tx.send(StopRequest).is_ok()
    }

    /// Longest a stopped recorder can keep its worker busy: the clamped
    /// grace period plus a short margin for the forced kill to be reaped.
    pub(crate) fn shutdown_limit(&self) -> Duration {
        self.stop_timeout.min(MAX_STOP_TIMEOUT) + POLL_INTERVAL * 5
    }

    /// Block until the worker has reported the recorder's exit, at most `limit`.
    ///
    /// Returns `false` if the worker was still running when the wait ended.
    pub(crate) fn wait(self, limit: Duration) -> bool {
        let deadline = Instant::now().checked_add(limit);

        while !self.worker.is_finished() {
            if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
                return false;
            }
            thread::sleep(POLL_INTERVAL);
        }

        if self.worker.join().is_err() {
            warn!(pid = self.pid, "Recorder worker panicked");
        }
        true
    }
}

/// Start the worker thread that owns `child` until it exits.
#[track_caller]
pub(crate) fn supervise<D: EventDispatcher>(
    session_id: Uuid,
    child: Child,
    log_path: PathBuf,
    stop_timeout: Duration,
    dispatcher: D,
) -> Result<RecorderHandle, SessionError> {
    let pid = child.id();
    let (stop_tx, stop_rx) = mpsc::channel();

    let worker = Supervisor {
        session_id,
        child,
        log_path,
        stop_timeout,
        dispatcher,
    };

    let spawned = thread::Builder::new()
        .name(format!("recorder-{}", session_id))
        .spawn(move || worker.run(stop_rx));

    let worker = match spawned {
        Ok(worker) => worker,
        Err(e) => {
            // The child went down with the closure; it is still unreaped, so
            // the pid still names it.
            if let Err(term) = terminate_gracefully(pid) {
                warn!(pid, error = %term, "Failed to terminate orphaned recorder");
            }
            return Err(SessionError::SpawnFailure {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            });
        }
    };

    Ok(RecorderHandle {
        pid,
        stop_tx,
        worker,
        stop_timeout,
    })
}

struct Supervisor<D> {
    session_id: Uuid,
    child: Child,
    log_path: PathBuf,
    stop_timeout: Duration,
    dispatcher: D,
}

impl<D: EventDispatcher> Supervisor<D> {
    fn run(mut self, stop_rx: Receiver<StopRequest>) {
        let session_id = self.session_id;
        let pid = self.child.id();
        let mut stop_rx = Some(stop_rx);
        let grace = self.stop_timeout.min(MAX_STOP_TIMEOUT);
        let mut kill_deadline: Option<Instant> = None;
        let mut terminate_error: Option<String> = None;
        let mut killed = false;

        debug!(session_id = %session_id, pid, "Supervising recorder");

        let exit = loop {
            match self.child.try_wait() {
                Ok(Some(status)) => break Ok(status),
                Ok(None) => {}
                Err(e) => break Err(e),
            }

            if !killed && kill_deadline.is_some_and(|deadline| Instant::now() >= deadline) {
                killed = true;
                warn!(session_id = %session_id, pid, "Recorder ignored terminate, killing");
                if let Err(e) = self.child.kill() {
                    let reason = match terminate_error.take() {
                        Some(term) => format!("terminate failed: {}; force kill failed: {}", term, e),
                        None => format!("force kill failed: {}", e),
                    };
                    self.report_termination_failure(reason);
                }
            }

            let stop_requested = match stop_rx.as_ref() {
                Some(rx) => match rx.recv_timeout(POLL_INTERVAL) {
                    Ok(StopRequest) => true,
                    Err(RecvTimeoutError::Timeout) => false,
                    Err(RecvTimeoutError::Disconnected) => {
                        stop_rx = None;
                        true
                    }
                },
                None => {
                    thread::sleep(POLL_INTERVAL);
                    false
                }
            };

            if stop_requested && kill_deadline.is_none() {
                info!(session_id = %session_id, pid, "Terminating recorder");
                // Only surfaced if the forced kill fails as well.
                if let Err(e) = terminate_gracefully(pid) {
                    debug!(session_id = %session_id, pid, error = %e, "Graceful terminate failed");
                    terminate_error = Some(e.to_string());
                }
                let now = Instant::now();
                kill_deadline = Some(now.checked_add(grace).unwrap_or(now));
            }
        };

        let event = match exit {
            Ok(status) => {
                let log = std::fs::read(&self.log_path)
                    .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
                    .unwrap_or_default();
                info!(
                    session_id = %session_id,
                    exit_code = ?status.code(),
                    log_len = log.len(),
                    "Recorder exited"
                );
                SessionEvent::Exited {
                    session_id,
                    exit_code: status.code(),
                    log,
                }
            }
            Err(e) => SessionEvent::WaitFailed {
                session_id,
                reason: e.to_string(),
            },
        };

        if let Err(e) = self.dispatcher.dispatch(event) {
            warn!(session_id = %session_id, error = ?e, "Recorder exit event dropped");
        }
    }

    fn report_termination_failure(&self, reason: String) {
        warn!(session_id = %self.session_id, reason = %reason, "Recorder termination failed");
        let event = SessionEvent::TerminationFailed {
            session_id: self.session_id,
            reason,
        };
        if let Err(e) = self.dispatcher.dispatch(event) {
            warn!(session_id = %self.session_id, error = ?e, "Termination event dropped");
        }
    }
}

/// Ask a process to exit on its own terms.
#[cfg(unix)]
pub(crate) fn terminate_gracefully(pid: u32) -> std::io::Result<()> {
    let pid = libc::pid_t::try_from(pid)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    // SAFETY: kill(2) has no memory-safety preconditions.
    let rc = unsafe { libc::kill(pid, libc::SIGTERM) };
    if rc == 0 {
        Ok(())
    } else {
        Err(std::io::Error::last_os_error())
    }
}

/// Ask a process to exit on its own terms.
#[cfg(windows)]
pub(crate) fn terminate_gracefully(pid: u32) -> std::io::Result<()> {
    let output = std::process::Command::new("taskkill")
        .args(["/PID", &pid.to_string()])
        .output()?;

    if output.status.success() {
        Ok(())
    } else {
        Err(std::io::Error::other(
            String::from_utf8_lossy(&output.stderr).trim().to_string(),
        ))
    }
}
