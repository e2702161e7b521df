//! Codegen Studio Core Library
//!
//! Recording session controller for an external browser-automation code
//! recorder: builds the recorder command line, supervises the recorder on a
//! worker thread, and applies its reports on the caller's thread.
//!
//! # Example
//!
//! ```no_run
//! use codegen_studio_core::{
//!     ControlState, Notice, Presenter, RecorderConfig, RecorderLauncher, SessionController,
//!     StatusColor,
//! };
//!
//! use std::sync::mpsc;
//!
//! struct Console;
//!
//! impl Presenter for Console {
//!     fn set_status(&mut self, text: &str, _color: StatusColor) {
//!         println!("{}", text);
//!     }
//!     fn show_script(&mut self, script: Option<&str>) {
//!         println!("{}", script.unwrap_or_default());
//!     }
//!     fn set_controls(&mut self, _controls: ControlState) {}
//!     fn notify(&mut self, notice: Notice) {
//!         eprintln!("{}: {}", notice.title, notice.message);
//!     }
//! }
//!
//! let (tx, rx) = mpsc::channel();
//! let mut controller = SessionController::new(RecorderLauncher::default(), Console, tx);
//!
//! if controller.start(&RecorderConfig::default()).is_ok() {
//!     for event in rx.iter() {
//!         controller.handle_event(event);
//!         if !controller.is_recording() {
//!             break;
//!         }
//!     }
//! }
//! ```

mod error;
mod recorder;
mod session;

pub use {
    error::{Result as CoreResult, SessionError},
    recorder::{
        DEFAULT_STOP_TIMEOUT, MAX_STOP_TIMEOUT, OutputFormat, RecorderCommand, RecorderConfig, RecorderHandle,
        RecorderLauncher, Viewport, browser_executable_in, log_path_for, temp_output_path,
    },
    session::{
        ControlState, EventDispatcher, Notice, NoticeLevel, Presenter, SessionController,
        SessionEvent, SessionState, SessionStatus, StatusColor,
    },
};
