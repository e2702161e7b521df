use crate::{CoreResult, SessionError, session::SessionEvent};

use std::{panic::Location, sync::mpsc};

use error_location::ErrorLocation;

/// Queue that carries worker reports to the foreground thread.
///
/// Implementations must only enqueue; the event is handled later by whoever
/// owns the [`SessionController`](crate::SessionController), on its thread.
pub trait EventDispatcher: Send + 'static {
    /// Enqueue an event for the foreground thread.
    fn dispatch(&self, event: SessionEvent) -> CoreResult<()>;
}

impl EventDispatcher for mpsc::Sender<SessionEvent> {
    #[track_caller]
    fn dispatch(&self, event: SessionEvent) -> CoreResult<()> {
        self.send(event).map_err(|e| SessionError::DispatchFailed {
            reason: format!("Foreground queue closed: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
