use crate::{
    AppError, AppResult, HotkeyHandler, MenuIds, Notifier, OutputHandler, ProxyDispatcher, SaveLocation,
    TrayManager, TrayPresenter, UiEvent, config::Config, output_handler::open_script,
};

use std::{panic::Location, path::PathBuf};

use codegen_studio_core::{Notice, Presenter, SessionController};
use error_location::ErrorLocation;
use tao::event_loop::EventLoopProxy;
use tracing::{debug, error, info, instrument, warn};
use tray_icon::menu::MenuEvent;

/// Whether the event loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep running.
    Continue,
    /// Leave the event loop.
    Exit,
}

/// Application context.
///
/// Lives on the event loop thread and owns everything the user can see or
/// trigger: the session controller (with the tray as its presenter), the
/// clipboard and the hotkey. Recorder workers reach it only through
/// [`UiEvent::Session`].
pub struct App {
    controller: SessionController<TrayPresenter, ProxyDispatcher>,
    output_handler: Option<OutputHandler>,
    save_location: SaveLocation,
    menu_ids: MenuIds,
    hotkey: Option<HotkeyHandler>,
}

impl App {
    /// Build the tray, controller and hotkey. Must run after the event loop started.
    #[track_caller]
    #[instrument(skip(proxy))]
    pub fn new(proxy: EventLoopProxy<UiEvent>) -> AppResult<Self> {
        let config = Config::load().unwrap_or_else(|e| {
            warn!(error = ?e, "Config unreadable, starting with defaults");
            Config::default()
        });

        let tray = TrayManager::new()?;
        let menu_ids = tray.menu_ids().clone();

        let menu_proxy = proxy.clone();
        MenuEvent::set_event_handler(Some(move |event: MenuEvent| {
            let _ = menu_proxy.send_event(UiEvent::Menu(event));
        }));

        // Clipboard and hotkey are conveniences; the app still records without them.
        let output_handler = OutputHandler::new()
            .inspect_err(|e| warn!(error = ?e, "Clipboard unavailable"))
            .ok();
        let hotkey = HotkeyHandler::register(proxy.clone())
            .inspect_err(|e| warn!(error = ?e, "Hotkey unavailable"))
            .ok();

        let controller = SessionController::new(
            config.launcher.to_launcher(),
            TrayPresenter::new(tray, Notifier),
            ProxyDispatcher::new(proxy),
        );

        info!("Codegen Studio ready");

        Ok(Self {
            controller,
            output_handler,
            save_location: SaveLocation::new(config.output.resolved_save_dir()),
            menu_ids,
            hotkey,
        })
    }

    /// Apply one event on the event loop thread.
    #[instrument(skip(self))]
    pub fn handle(&mut self, event: UiEvent) -> Flow {
        match event {
            UiEvent::Session(event) => self.controller.handle_event(event),
            UiEvent::Hotkey(event) => {
                if self.hotkey.as_ref().is_some_and(|h| h.is_toggle(&event)) {
                    self.toggle_recording();
                }
            }
            UiEvent::Menu(event) => return self.handle_menu(event),
        }
        Flow::Continue
    }

    fn handle_menu(&mut self, event: MenuEvent) -> Flow {
        let id = &event.id;

        if *id == self.menu_ids.record {
            self.toggle_recording();
        } else if *id == self.menu_ids.save {
            if let Err(e) = self.save_script() {
                error!(error = ?e, "Failed to save script");
            }
        } else if *id == self.menu_ids.copy {
            self.copy_script();
        } else if *id == self.menu_ids.open {
            self.open_script();
        } else if *id == self.menu_ids.clear {
            self.controller.reset();
        } else if *id == self.menu_ids.exit {
            self.shutdown();
            return Flow::Exit;
        }

        Flow::Continue
    }

    /// Start with the current config when ready, stop when recording.
    fn toggle_recording(&mut self) {
        if self.controller.is_recording() {
            self.controller.stop();
            return;
        }

        let config = match Config::load() {
            Ok(config) => config,
            Err(e) => {
                error!(error = ?e, "Failed to load config");
                self.controller
                    .presenter_mut()
                    .notify(Notice::error(format!("Failed to load settings: {}", e)));
                return;
            }
        };

        self.controller.set_launcher(config.launcher.to_launcher());
        self.save_location = SaveLocation::new(config.output.resolved_save_dir());

        // Failures were already shown to the user by the controller.
        if let Err(e) = self.controller.start(&config.recorder) {
            debug!(error = ?e, "Recording not started");
        }
    }

    fn save_script(&mut self) -> AppResult<PathBuf> {
        let destination = match self.save_location.destination_for(self.controller.state()) {
            Ok(destination) => destination,
            Err(e) => {
                self.controller
                    .presenter_mut()
                    .notify(Notice::error(e.user_message()));
                return Err(e);
            }
        };
        Ok(self.controller.save(&destination)?)
    }

    fn copy_script(&mut self) {
        let Some(script) = self.controller.script().map(str::to_owned) else {
            self.controller
                .presenter_mut()
                .notify(Notice::warning("No code to copy"));
            return;
        };

        if self.output_handler.is_none() {
            self.output_handler = OutputHandler::new()
                .inspect_err(|e| warn!(error = ?e, "Clipboard still unavailable"))
                .ok();
        }

        let result = match self.output_handler.as_mut() {
            Some(handler) => handler.copy_script(&script),
            None => Err(AppError::ClipboardError {
                reason: "clipboard unavailable".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        };

        let notice = match result {
            Ok(()) => Notice::success("Script copied to clipboard"),
            Err(e) => {
                error!(error = ?e, "Failed to copy script");
                Notice::error(format!("Failed to copy script: {}", e))
            }
        };
        self.controller.presenter_mut().notify(notice);
    }

    fn open_script(&mut self) {
        let Some(path) = self
            .controller
            .script()
            .and(self.controller.state().output_file())
            .map(|p| p.to_path_buf())
        else {
            self.controller
                .presenter_mut()
                .notify(Notice::warning("No code to open"));
            return;
        };

        if let Err(e) = open_script(&path) {
            error!(error = ?e, "Failed to open script");
            self.controller
                .presenter_mut()
                .notify(Notice::error(format!("Failed to open script: {}", e)));
        }
    }

    fn shutdown(&mut self) {
        info!("Exit requested from tray menu");
        if !self.controller.shutdown() {
            error!("Recorder may still be running after exit");
        }
    }
}
