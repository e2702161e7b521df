mod controller;
mod dispatch;
mod event;
mod presenter;
mod state;

pub use {
    controller::SessionController,
    dispatch::EventDispatcher,
    event::SessionEvent,
    presenter::{ControlState, Notice, NoticeLevel, Presenter, StatusColor},
    state::{SessionState, SessionStatus},
};
