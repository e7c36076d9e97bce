// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::gallery::{Direction, SlideKey};
use crate::ui::{certificates, contact, gallery, navbar, notifications};
use iced::widget::image::Handle;
use iced::widget::scrollable::Viewport;
use iced::{window, Point, Size};
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Gallery(gallery::Message),
    Certificates(certificates::Message),
    Contact(contact::Message),
    Notification(notifications::NotificationMessage),
    /// A slide image finished loading (or failed).
    SlideLoaded {
        key: SlideKey,
        result: Result<Handle, Error>,
    },
    /// The page scrollable moved.
    Scrolled(Viewport),
    /// Arrow key pressed while no widget captured it.
    ArrowKey(Direction),
    EscapePressed,
    Touch(TouchEvent),
    WindowResized(Size),
    /// Periodic tick driving auto-play, typing, reveals and toasts.
    Tick(Instant),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(window::Id),
}

/// Raw touch input, reduced to what swipe recognition needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchEvent {
    Pressed { finger: u64, position: Point },
    Lifted { finger: u64, position: Point },
    Lost { finger: u64 },
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional portfolio content file.
    pub content_path: Option<PathBuf>,
}
