// SPDX-License-Identifier: MPL-2.0
//! Application root: startup sequence and the main window.
//!
//! [`run`] is what `main.rs` calls. It performs the startup sequence from
//! [`bootstrap`] and hands the resulting context to the Iced event loop,
//! which shows the main window until the user quits.

pub mod bootstrap;
mod message;
pub mod paths;
mod view;

pub use bootstrap::{AppContext, EventLoop, ExitStatus, Startup, TRANSLATION_LOAD_FAILED};
pub use message::{Flags, Message};

use iced::{window, Element, Task};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: u32 = 560;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 360;
pub const MIN_WINDOW_WIDTH: u32 = 360;
pub const MIN_WINDOW_HEIGHT: u32 = 240;

/// Exit status when the toolkit reports an error from the event loop.
const EXIT_EVENT_LOOP_FAILED: ExitStatus = 1;

/// Log filter used when `RUST_LOG` is unset: warnings from every crate, and
/// startup diagnostics such as [`TRANSLATION_LOAD_FAILED`] from this one.
pub const DEFAULT_LOG_FILTER: &str = "warn,svgcleaner=debug";

/// Installs the process logger, honouring `RUST_LOG` over [`DEFAULT_LOG_FILTER`].
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .init();
}

/// Main window state.
pub struct App {
    context: AppContext,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", &self.context.locale_name())
            .field("translated", &self.context.i18n().has_translator())
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        visible: true,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs`: runs startup, then the Iced event loop.
pub fn run(flags: Flags) -> ExitStatus {
    Startup::prepare(flags).run(IcedEventLoop)
}

/// [`EventLoop`] backed by the Iced runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct IcedEventLoop;

impl EventLoop for IcedEventLoop {
    fn exec(self, context: AppContext) -> ExitStatus {
        use std::cell::RefCell;

        // Wrap context in RefCell<Option<_>> to satisfy Fn trait requirement
        // while only consuming it once (iced 0.14 requires Fn, not FnOnce)
        let boot_state = RefCell::new(Some(context));
        let boot = move || {
            let context = boot_state
                .borrow_mut()
                .take()
                .expect("Boot function called more than once");
            (App::new(context), Task::none())
        };

        let result = iced::application(boot, App::update, App::view)
            .title(App::title)
            .window(window_settings())
            .run();

        match result {
            Ok(()) => 0,
            Err(e) => {
                log::error!("Event loop failed: {e}");
                EXIT_EVENT_LOOP_FAILED
            }
        }
    }
}

impl App {
    pub fn new(context: AppContext) -> Self {
        Self { context }
    }

    fn title(&self) -> String {
        self.context.i18n().tr("window-title")
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Quit => iced::exit(),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(&self.context)
    }
}
