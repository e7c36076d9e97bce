// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Each handler mutates the relevant slice of [`App`] and returns the
//! follow-up task, if any.

use super::message::TouchEvent;
use super::{config, load_slide, persistence, App, Message};
use crate::gallery::{Direction, Input};
use crate::ui::certificates;
use crate::ui::contact::{self, Effect as ContactEffect};
use crate::ui::design_tokens::sizing;
use crate::ui::gallery;
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::sections::{self, Section};
use iced::widget::scrollable::{RelativeOffset, Viewport};
use iced::widget::{operation, Id};
use iced::{window, Size, Task};
use std::time::Instant;

/// Identifier of the page scrollable.
pub const PAGE_SCROLLABLE_ID: &str = "page-scrollable";

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Navbar(msg) => handle_navbar_message(app, msg),
        Message::Gallery(msg) => handle_gallery_message(app, msg),
        Message::SlideLoaded { key, result } => {
            if let Err(error) = &result {
                tracing::debug!(index = key.index(), %error, "slide image unavailable");
            }
            app.slideshow.finish_load(key, result);
            Task::none()
        }
        Message::Certificates(msg) => {
            app.certificates.update(msg);
            Task::none()
        }
        Message::Contact(msg) => handle_contact_message(app, msg),
        Message::Notification(msg) => {
            app.notifications.handle_message(&msg, Instant::now());
            Task::none()
        }
        Message::Scrolled(viewport) => {
            handle_scrolled(app, &viewport);
            Task::none()
        }
        Message::ArrowKey(direction) => {
            // The lightbox owns the keyboard while it is open.
            if !app.certificates.is_open() {
                let input = match direction {
                    Direction::Previous => Input::ArrowLeft,
                    Direction::Next => Input::ArrowRight,
                };
                app.slideshow.handle_input(input, Instant::now());
            }
            Task::none()
        }
        Message::EscapePressed => {
            if app.certificates.is_open() {
                app.certificates.update(certificates::Message::Close);
            } else {
                app.menu_open = false;
            }
            Task::none()
        }
        Message::Touch(event) => {
            handle_touch(app, event);
            Task::none()
        }
        Message::WindowResized(size) => {
            handle_resize(app, size);
            Task::none()
        }
        Message::Tick(now) => {
            app.slideshow.tick(now);
            app.typing.tick(now);
            app.reveal.tick(now);
            app.notifications.tick(now);
            Task::none()
        }
        Message::WindowCloseRequested(id) => {
            app.slideshow.destroy();
            tracing::info!("window closed, shutting down");
            window::close(id)
        }
    }
}

fn handle_navbar_message(app: &mut App, message: navbar::Message) -> Task<Message> {
    match navbar::update(message, &mut app.menu_open) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::ScrollTo(section) => scroll_to_section(app, section),
        NavbarEvent::ToggleTheme => {
            app.theme_mode = app.theme_mode.toggled();
            persistence::persist_theme(app.theme_mode);
            Task::none()
        }
    }
}

fn handle_gallery_message(app: &mut App, message: gallery::Message) -> Task<Message> {
    match message {
        gallery::Message::Input(input) => {
            app.slideshow.handle_input(input, Instant::now());
            Task::none()
        }
        gallery::Message::Retry(index) => match app.slideshow.retry(index) {
            Some(request) => load_slide(request, app.content.root()),
            None => Task::none(),
        },
    }
}

fn handle_contact_message(app: &mut App, message: contact::Message) -> Task<Message> {
    match app.contact.update(message) {
        ContactEffect::None => Task::none(),
        ContactEffect::Notify(notification) => {
            app.notifications.push(notification, Instant::now());
            Task::none()
        }
        ContactEffect::StartSending => Task::perform(
            tokio::time::sleep(config::CONTACT_SEND_DELAY),
            |()| Message::Contact(contact::Message::Sent),
        ),
    }
}

fn handle_scrolled(app: &mut App, viewport: &Viewport) {
    app.scroll_offset = viewport.absolute_offset().y;
    let max = viewport.content_bounds().height - viewport.bounds().height;
    app.max_scroll = Some(max.max(0.0));

    let revealed = app
        .reveal
        .observe(app.scroll_offset, viewport.bounds().height, Instant::now());
    if revealed > 0 {
        tracing::trace!(revealed, offset = app.scroll_offset, "sections revealed");
    }
}

/// Whether a touch starting at window-space `y` may begin a slideshow swipe.
fn starts_swipe(lightbox_open: bool, y: f32, scroll_offset: f32) -> bool {
    !lightbox_open && gallery::contains_y(y, scroll_offset)
}

fn handle_touch(app: &mut App, event: TouchEvent) {
    let lightbox_open = app.certificates.is_open();
    match event {
        TouchEvent::Pressed { finger, position } => {
            if starts_swipe(lightbox_open, position.y, app.scroll_offset) {
                app.swipe.begin(finger, position.x);
            }
        }
        TouchEvent::Lifted { finger, .. } if lightbox_open => app.swipe.cancel(finger),
        TouchEvent::Lifted { finger, position } => {
            if let Some(direction) = app.swipe.end(finger, position.x) {
                app.slideshow
                    .handle_input(Input::Swipe(direction), Instant::now());
            }
        }
        TouchEvent::Lost { finger } => app.swipe.cancel(finger),
    }
}

fn handle_resize(app: &mut App, size: Size) {
    app.window_size = size;
    if !is_compact(size) {
        app.menu_open = false;
    }
    app.reveal
        .observe(app.scroll_offset, size.height, Instant::now());
}

/// Whether the window is too narrow for inline navigation links.
pub(super) fn is_compact(size: Size) -> bool {
    size.width < sizing::MOBILE_BREAKPOINT
}

fn scroll_to_section(app: &App, section: Section) -> Task<Message> {
    let max = app
        .max_scroll
        .unwrap_or_else(|| sections::page_height() - app.window_size.height);
    let y = relative_offset(section.scroll_target(), max);
    tracing::debug!(?section, y, "scrolling to section");

    operation::snap_to(Id::new(PAGE_SCROLLABLE_ID), RelativeOffset { x: 0.0, y })
}

/// Converts an absolute scroll position into the scrollable's relative
/// offset, given the largest reachable offset.
fn relative_offset(target: f32, max_offset: f32) -> f32 {
    if max_offset <= 0.0 {
        0.0
    } else {
        (target / max_offset).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_offset_scales_by_reachable_range() {
        assert_eq!(relative_offset(500.0, 1000.0), 0.5);
        assert_eq!(relative_offset(0.0, 1000.0), 0.0);
    }

    #[test]
    fn relative_offset_clamps_past_the_end() {
        assert_eq!(relative_offset(1500.0, 1000.0), 1.0);
    }

    #[test]
    fn relative_offset_is_zero_when_page_fits() {
        assert_eq!(relative_offset(300.0, 0.0), 0.0);
        assert_eq!(relative_offset(300.0, -20.0), 0.0);
    }

    #[test]
    fn swipes_only_start_over_the_stage_without_lightbox() {
        let y = Section::Gallery.top() + Section::Gallery.height() / 2.0;
        assert!(starts_swipe(false, y, 0.0));
        assert!(!starts_swipe(true, y, 0.0));
        assert!(!starts_swipe(false, 10.0, 0.0));
    }

    #[test]
    fn narrow_windows_are_compact() {
        assert!(is_compact(Size::new(600.0, 800.0)));
        assert!(!is_compact(Size::new(sizing::MOBILE_BREAKPOINT, 800.0)));
    }
}
