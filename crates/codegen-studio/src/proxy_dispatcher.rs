use crate::UiEvent;

use std::panic::Location;

use codegen_studio_core::{CoreResult, EventDispatcher, SessionError, SessionEvent};
use error_location::ErrorLocation;
use tao::event_loop::EventLoopProxy;

/// Hands recorder reports to the main thread through the event loop.
#[derive(Clone)]
pub struct ProxyDispatcher {
    proxy: EventLoopProxy<UiEvent>,
}

impl ProxyDispatcher {
    /// Wrap an event loop proxy.
    pub fn new(proxy: EventLoopProxy<UiEvent>) -> Self {
        Self { proxy }
    }
}

impl EventDispatcher for ProxyDispatcher {
    #[track_caller]
    fn dispatch(&self, event: SessionEvent) -> CoreResult<()> {
        self.proxy
            .send_event(UiEvent::Session(event))
            .map_err(|_| SessionError::DispatchFailed {
                reason: "event loop closed".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
