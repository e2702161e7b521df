//! Codegen Studio: tray front-end for a browser-automation code recorder.

mod app;
mod config;
mod error;
mod hotkey_handler;
mod notifier;
mod output_handler;
mod proxy_dispatcher;
mod save_location;
mod tray_manager;
mod tray_presenter;
mod ui_event;

pub(crate) use {
    app::{App, Flow},
    error::{AppError, Result as AppResult},
    hotkey_handler::HotkeyHandler,
    notifier::Notifier,
    output_handler::OutputHandler,
    proxy_dispatcher::ProxyDispatcher,
    save_location::SaveLocation,
    tray_manager::{MenuIds, TrayManager},
    tray_presenter::TrayPresenter,
    ui_event::UiEvent,
};

use tao::{
    event::{Event, StartCause},
    event_loop::{ControlFlow, EventLoopBuilder},
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Application entry point.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("codegen_studio=debug,codegen_studio_core=debug")),
        )
        .init();

    let event_loop = EventLoopBuilder::<UiEvent>::with_user_event().build();
    let proxy = event_loop.create_proxy();

    // Created on Init: the tray must be built after the loop is running on macOS.
    let mut app: Option<App> = None;

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::NewEvents(StartCause::Init) => {
                match App::new(proxy.clone()) {
                    Ok(a) => app = Some(a),
                    Err(e) => {
                        error!("Failed to start Codegen Studio: {:?}", e);
                        std::process::exit(1);
                    }
                }

                #[cfg(target_os = "macos")]
                unsafe {
                    use core_foundation::runloop::{CFRunLoopGetMain, CFRunLoopWakeUp};
                    CFRunLoopWakeUp(CFRunLoopGetMain());
                }
            }
            Event::UserEvent(ui_event) => {
                let flow = app.as_mut().map(|app| app.handle(ui_event));
                if flow == Some(Flow::Exit) {
                    info!("Codegen Studio shut down");
                    *control_flow = ControlFlow::ExitWithCode(0);
                }
            }
            _ => {}
        }
    });
}
