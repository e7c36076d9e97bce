// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the portfolio components (slideshow, hero,
//! certificates, contact form, navigation), localization and settings, and
//! translates messages into side effects such as asset loads, scrolling or
//! preference persistence.

pub mod config;
mod message;
pub mod paths;
mod persistence;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message, TouchEvent};

use crate::content::Content;
use crate::gallery::{loader, LoadRequest, Slideshow, SwipeTracker};
use crate::i18n::fluent::I18n;
use crate::ui::certificates;
use crate::ui::contact;
use crate::ui::hero::TypingState;
use crate::ui::notifications::{self, Notification};
use crate::ui::sections::RevealTracker;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Instant;

pub const WINDOW_DEFAULT_HEIGHT: f32 = 800.0;
pub const WINDOW_DEFAULT_WIDTH: f32 = 1100.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;
pub const MIN_WINDOW_WIDTH: f32 = 400.0;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    content: Content,
    theme_mode: ThemeMode,
    slideshow: Slideshow,
    swipe: SwipeTracker,
    certificates: certificates::State,
    contact: contact::State,
    typing: TypingState,
    reveal: RevealTracker,
    notifications: notifications::Manager,
    /// Whether the collapsed navigation menu is open.
    menu_open: bool,
    /// Vertical scroll offset of the page.
    scroll_offset: f32,
    /// Largest scroll offset reported by the page scrollable.
    max_scroll: Option<f32>,
    window_size: Size,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme_mode)
            .field("slides", &self.slideshow.len())
            .field("current_slide", &self.slideshow.current_index())
            .field("scroll_offset", &self.scroll_offset)
            .finish_non_exhaustive()
    }
}

/// Builds the window settings.
///
/// Closing is intercepted so the slideshow can be torn down first.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot closure; the flags are consumed on the first
    // (and only) call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings and content, builds every component and starts the
    /// initial asset loads.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let now = Instant::now();
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let (content, content_warning) = Content::load_or_default(flags.content_path.as_deref());

        let (slideshow, slide_loads) =
            Slideshow::new(content.gallery.clone(), config.autoplay_interval(), now);
        let (certificates, certificate_loads) =
            certificates::State::new(content.certificates.clone());
        let typing = TypingState::new(&content.profile.subtitle, config.typing_speed(), now);

        let mut reveal = RevealTracker::new();
        reveal.observe(0.0, WINDOW_DEFAULT_HEIGHT, now);

        let mut notifications = notifications::Manager::new();
        for key in [config_warning, content_warning].into_iter().flatten() {
            notifications.push(Notification::warning(key), now);
        }

        let root = content.root().to_path_buf();
        let mut tasks: Vec<Task<Message>> = slide_loads
            .into_iter()
            .map(|request| load_slide(request, &root))
            .collect();
        tasks.extend(
            certificate_loads
                .into_iter()
                .map(|(index, source)| load_certificate(index, source, &root)),
        );

        tracing::info!(
            slides = slideshow.len(),
            certificates = content.certificates.len(),
            locale = %i18n.current_locale(),
            "portfolio ready"
        );

        let app = App {
            i18n,
            theme_mode: config.general.theme_mode.resolve(),
            swipe: SwipeTracker::new(config.swipe_threshold()),
            content,
            slideshow,
            certificates,
            contact: contact::State::default(),
            typing,
            reveal,
            notifications,
            menu_open: false,
            scroll_offset: 0.0,
            max_scroll: None,
            window_size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        };

        (app, Task::batch(tasks))
    }

    fn title(&self) -> String {
        self.i18n
            .tr_with_args("window-title", &[("name", self.content.profile.name.as_str())])
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    /// Whether anything needs the periodic tick right now.
    fn needs_tick(&self) -> bool {
        self.slideshow.is_auto_play_active()
            || self.typing_animating()
            || self.reveal.has_pending()
            || self.notifications.has_notifications()
    }

    /// The typing effect keeps animating (typing, then blinking) for as long
    /// as the hero is on screen.
    fn typing_animating(&self) -> bool {
        self.scroll_offset < crate::ui::sections::Section::Hero.height()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.needs_tick()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}

fn load_slide(request: LoadRequest, root: &Path) -> Task<Message> {
    let LoadRequest { key, source } = request;
    let root: PathBuf = root.to_path_buf();
    Task::perform(loader::load(source, root), move |result| {
        Message::SlideLoaded { key, result }
    })
}

fn load_certificate(index: usize, source: String, root: &Path) -> Task<Message> {
    let root: PathBuf = root.to_path_buf();
    Task::perform(loader::load(source, root), move |result| {
        Message::Certificates(certificates::Message::ImageLoaded(index, result))
    })
}
